//! Complexity tier classification shared by file and function displays.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scores strictly above this are `High`.
pub const HIGH_THRESHOLD: i64 = 15;
/// Scores strictly above this (and not `High`) are `Medium`.
pub const MEDIUM_THRESHOLD: i64 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Low,
    Medium,
    High,
}

/// Map a score to its tier. First match wins: `> 15` High, `> 5` Medium, else Low.
pub fn classify(score: i64) -> Tier {
    if score > HIGH_THRESHOLD {
        Tier::High
    } else if score > MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}

impl Tier {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tier::Low => "complexity-low",
            Tier::Medium => "complexity-medium",
            Tier::High => "complexity-high",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl From<i64> for Tier {
    fn from(score: i64) -> Self {
        classify(score)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
