//! RICE scoring.
//!
//! `score = reach * impact * confidence / (effort / 7)`, with effort given in
//! work-days and converted to weeks. Nothing is clamped or guarded: a zero
//! effort divides by zero.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::Rice;

const DAYS_PER_WEEK: f64 = 7.0;

/// Raw RICE formula.
pub fn score(reach: f64, impact: f64, confidence: f64, effort: f64) -> f64 {
    let effort_in_weeks = effort / DAYS_PER_WEEK;
    (reach * impact * confidence) / effort_in_weeks
}

/// Score a set of RICE inputs, reporting unset inputs as incomplete.
pub fn rice_score(rice: &Rice) -> RiceScore {
    match rice.complete() {
        Some((reach, impact, confidence, effort)) => {
            RiceScore::from_value(score(reach, impact, confidence, effort))
        }
        None => RiceScore::Incomplete,
    }
}

/// Result of scoring an idea.
///
/// `Incomplete` covers any unset input as well as a not-a-number result
/// (zero effort with a zero numerator). It must never be shown as `0.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiceScore {
    Value(f64),
    Incomplete,
}

impl RiceScore {
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() {
            Self::Incomplete
        } else {
            Self::Value(value)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Incomplete => None,
        }
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }
}

impl fmt::Display for RiceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{:.2}", v),
            Self::Incomplete => f.write_str("incomplete"),
        }
    }
}

/// Serialized as the raw number, `"inf"`/`"-inf"` when infinite, or `null`
/// when incomplete.
impl Serialize for RiceScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) if v.is_finite() => serializer.serialize_f64(*v),
            Self::Value(v) if v.is_sign_negative() => serializer.serialize_str("-inf"),
            Self::Value(_) => serializer.serialize_str("inf"),
            Self::Incomplete => serializer.serialize_none(),
        }
    }
}
