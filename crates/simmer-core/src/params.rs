//! Parameter structures for scheduling operations
//!
//! These are the untrusted records an upstream producer (a generative model,
//! a JSON file, the MCP server) hands to the scheduler. Nothing here is
//! validated yet; [`crate::validation::validate_plan`] turns them into
//! [`crate::models::Step`]s or rejects the whole plan.
//!
//! The structures carry serde derives for the JSON interchange shape and an
//! optional `schemars::JsonSchema` derive behind the `schema` feature, so
//! interface layers (CLI, MCP) can wrap them without redefining fields.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{error::Result, models::Step};

/// One candidate step as emitted by the upstream producer.
///
/// Optional fields default the safe way: no dependencies, and
/// `can_parallel = false` so an unspecified step is always serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StepInput {
    /// Positive step id, unique within the plan
    #[serde(default)]
    pub id: Option<u64>,

    /// Short title shown on the timeline
    #[serde(default)]
    pub title: String,

    /// Free text; ingredient and equipment words in here drive conflict
    /// detection
    #[serde(default)]
    pub description: String,

    /// Duration in minutes; must be positive. Fractions round up.
    #[serde(default)]
    pub duration: Option<f64>,

    /// Ids of steps that must finish first
    #[serde(default)]
    pub dependencies: Vec<u64>,

    /// Whether the step may overlap other steps (defaults to false)
    #[serde(default)]
    pub can_parallel: bool,

    /// One of prep, cook, serve, wait
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Dish group tag such as "A" or "B"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_label: Option<String>,

    /// Accepted for compatibility and always ignored
    #[serde(default, skip_serializing)]
    pub start_time: Option<f64>,
}

impl From<&Step> for StepInput {
    /// Feed a scheduled step back in as input. The start time is dropped
    /// since the scheduler recomputes it anyway.
    fn from(step: &Step) -> Self {
        StepInput {
            id: Some(step.id),
            title: step.title.clone(),
            description: step.description.clone(),
            duration: Some(f64::from(step.duration)),
            dependencies: step.dependencies.clone(),
            can_parallel: step.can_parallel,
            category: step.category.map(|c| c.as_str().to_string()),
            dish_label: step.dish_label.clone(),
            start_time: None,
        }
    }
}

/// A full plan submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanRequest {
    /// Candidate steps in display order
    pub steps: Vec<StepInput>,
}

impl PlanRequest {
    /// Parse a plan document.
    ///
    /// Accepts either `{"steps": [...]}` or a bare array of steps.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simmer_core::params::PlanRequest;
    ///
    /// let wrapped = PlanRequest::from_json(r#"{"steps": [{"id": 1, "duration": 5}]}"#)?;
    /// let bare = PlanRequest::from_json(r#"[{"id": 1, "duration": 5}]"#)?;
    /// assert_eq!(wrapped, bare);
    /// # Ok::<(), simmer_core::ScheduleError>(())
    /// ```
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim_start().starts_with('[') {
            let steps: Vec<StepInput> = serde_json::from_str(text)?;
            Ok(PlanRequest { steps })
        } else {
            Ok(serde_json::from_str(text)?)
        }
    }
}

impl From<Vec<StepInput>> for PlanRequest {
    fn from(steps: Vec<StepInput>) -> Self {
        PlanRequest { steps }
    }
}
