use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kano classification of how a feature affects satisfaction.
///
/// - `Basic`: Expected; its absence disappoints
/// - `Performance`: More is better
/// - `Excitement`: Unexpected delight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Kano {
    #[default]
    Basic,
    Performance,
    Excitement,
}

impl Kano {
    pub const ALL: [Kano; 3] = [Self::Basic, Self::Performance, Self::Excitement];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Performance => "performance",
            Self::Excitement => "excitement",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "performance" => Some(Self::Performance),
            "excitement" => Some(Self::Excitement),
            _ => None,
        }
    }

    /// Parse user input, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ParseTagError> {
        Self::from_str(&input.trim().to_lowercase())
            .ok_or_else(|| ParseTagError::Kano(input.to_string()))
    }
}

impl fmt::Display for Kano {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// MoSCoW prioritization tag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Moscow {
    #[default]
    #[serde(rename = "must")]
    Must,
    #[serde(rename = "should")]
    Should,
    #[serde(rename = "could")]
    Could,
    #[serde(rename = "won't", alias = "wont")]
    Wont,
}

impl Moscow {
    pub const ALL: [Moscow; 4] = [Self::Must, Self::Should, Self::Could, Self::Wont];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::Could => "could",
            Self::Wont => "won't",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "must" => Some(Self::Must),
            "should" => Some(Self::Should),
            "could" => Some(Self::Could),
            "won't" | "wont" => Some(Self::Wont),
            _ => None,
        }
    }

    /// Parse user input, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, ParseTagError> {
        Self::from_str(&input.trim().to_lowercase())
            .ok_or_else(|| ParseTagError::Moscow(input.to_string()))
    }
}

impl fmt::Display for Moscow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag string that names no known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseTagError {
    #[error("unknown Kano category '{0}' (expected basic, performance or excitement)")]
    Kano(String),

    #[error("unknown MoSCoW tag '{0}' (expected must, should, could or won't)")]
    Moscow(String),
}
