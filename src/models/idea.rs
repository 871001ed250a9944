use std::fmt;

use serde::{Deserialize, Serialize};

use super::tags::{Kano, Moscow};

/// The four RICE inputs of an idea.
///
/// `None` means the input was left empty, which is distinct from a real zero.
/// No field is range-checked: negative reach or a confidence above 100 is
/// accepted and scored as-is.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rice {
    /// How many people the idea touches.
    pub reach: Option<f64>,
    /// Conventionally 0.25 (low), 1 (medium) or 3 (high).
    pub impact: Option<f64>,
    /// Percentage, 0 to 100.
    pub confidence: Option<f64>,
    /// Work-days. Expected to be at least 1.
    pub effort: Option<f64>,
}

impl Rice {
    /// Inputs a draft is reset to after a successful submission.
    pub const RESET: Rice = Rice {
        reach: Some(0.0),
        impact: Some(0.0),
        confidence: Some(0.0),
        effort: Some(1.0),
    };

    pub fn new(reach: f64, impact: f64, confidence: f64, effort: f64) -> Self {
        Self {
            reach: Some(reach),
            impact: Some(impact),
            confidence: Some(confidence),
            effort: Some(effort),
        }
    }

    pub fn get(&self, field: RiceField) -> Option<f64> {
        match field {
            RiceField::Reach => self.reach,
            RiceField::Impact => self.impact,
            RiceField::Confidence => self.confidence,
            RiceField::Effort => self.effort,
        }
    }

    pub fn set(&mut self, field: RiceField, value: Option<f64>) {
        let slot = match field {
            RiceField::Reach => &mut self.reach,
            RiceField::Impact => &mut self.impact,
            RiceField::Confidence => &mut self.confidence,
            RiceField::Effort => &mut self.effort,
        };
        *slot = value;
    }

    /// All four inputs, or `None` if any is unset.
    pub fn complete(&self) -> Option<(f64, f64, f64, f64)> {
        Some((self.reach?, self.impact?, self.confidence?, self.effort?))
    }
}

/// Names one of the four RICE inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiceField {
    Reach,
    Impact,
    Confidence,
    Effort,
}

impl RiceField {
    pub const ALL: [RiceField; 4] = [Self::Reach, Self::Impact, Self::Confidence, Self::Effort];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Impact => "impact",
            Self::Confidence => "confidence",
            Self::Effort => "effort",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reach" => Some(Self::Reach),
            "impact" => Some(Self::Impact),
            "confidence" => Some(Self::Confidence),
            "effort" => Some(Self::Effort),
            _ => None,
        }
    }

    /// Input hint shown next to the field.
    pub fn help(&self) -> &'static str {
        match self {
            Self::Reach => "number of people affected by this idea (e.g. 100 users)",
            Self::Impact => "0.25 = low, 1 = medium, 3 = high",
            Self::Confidence => "confidence in the reach and impact estimates, 0-100 %",
            Self::Effort => "estimated work-days (e.g. 5)",
        }
    }
}

impl fmt::Display for RiceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An idea being edited, before validation.
///
/// A fresh draft has an empty name and every RICE input unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Draft {
    pub name: String,
    pub rice: Rice,
    pub kano: Kano,
    pub moscow: Moscow,
}

impl Draft {
    pub fn new(name: impl Into<String>, rice: Rice, kano: Kano, moscow: Moscow) -> Self {
        Self {
            name: name.into(),
            rice,
            kano,
            moscow,
        }
    }

    /// The draft shown after a successful submission.
    pub fn after_submit() -> Self {
        Self {
            rice: Rice::RESET,
            ..Self::default()
        }
    }
}

/// An accepted idea.
///
/// Values of this type are only created by
/// [`validate_submission`](crate::validation::validate_submission), so `name`
/// always has non-whitespace content. The stored name keeps the user's
/// original spacing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Idea {
    name: String,
    rice: Rice,
    kano: Kano,
    moscow: Moscow,
}

impl Idea {
    pub(crate) fn from_checked(draft: Draft) -> Self {
        Self {
            name: draft.name,
            rice: draft.rice,
            kano: draft.kano,
            moscow: draft.moscow,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rice(&self) -> &Rice {
        &self.rice
    }

    pub fn kano(&self) -> Kano {
        self.kano
    }

    pub fn moscow(&self) -> Moscow {
        self.moscow
    }
}

impl From<Idea> for Draft {
    fn from(idea: Idea) -> Self {
        Self {
            name: idea.name,
            rice: idea.rice,
            kano: idea.kano,
            moscow: idea.moscow,
        }
    }
}
