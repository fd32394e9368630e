//! Step category enumeration.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of cooking work a step represents.
///
/// Categories are informational only; the scheduler never looks at them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum StepCategory {
    /// Chopping, measuring, marinating
    Prep,

    /// Active heat work
    Cook,

    /// Plating and serving
    Serve,

    /// Resting, proofing, cooling
    Wait,
}

impl FromStr for StepCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prep" => Ok(StepCategory::Prep),
            "cook" => Ok(StepCategory::Cook),
            "serve" => Ok(StepCategory::Serve),
            "wait" => Ok(StepCategory::Wait),
            _ => Err(format!("Invalid step category: {s}")),
        }
    }
}

impl StepCategory {
    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepCategory::Prep => "prep",
            StepCategory::Cook => "cook",
            StepCategory::Serve => "serve",
            StepCategory::Wait => "wait",
        }
    }

    /// Get the category with a leading icon for timeline display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simmer_core::models::StepCategory;
    ///
    /// assert_eq!(StepCategory::Cook.with_icon(), "🔥 cook");
    /// assert_eq!(StepCategory::Wait.with_icon(), "⏳ wait");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepCategory::Prep => "🔪 prep",
            StepCategory::Cook => "🔥 cook",
            StepCategory::Serve => "🍽 serve",
            StepCategory::Wait => "⏳ wait",
        }
    }
}
