//! Employee record definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Seniority level of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Junior,
    Mid,
    Senior,
}

impl Level {
    /// All levels in display order
    pub const ALL: [Level; 3] = [Level::Junior, Level::Mid, Level::Senior];

    pub fn next(&self) -> Self {
        match self {
            Self::Junior => Self::Mid,
            Self::Mid => Self::Senior,
            Self::Senior => Self::Junior,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Junior => Self::Senior,
            Self::Mid => Self::Junior,
            Self::Senior => Self::Mid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Mid => "Mid",
            Self::Senior => "Senior",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level `{0}` (expected junior, mid or senior)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "junior" => Ok(Self::Junior),
            "mid" => Ok(Self::Mid),
            "senior" => Ok(Self::Senior),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// An employee record exchanged with the embedding application
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub level: Level,
}

/// Seed values for the employee form.
///
/// Every field is optional; absent or empty values fall back to the form
/// defaults when applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: Option<String>,
    pub position: Option<String>,
    pub level: Option<String>,
}
