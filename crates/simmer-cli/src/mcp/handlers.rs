//! MCP tool handler implementations
//!
//! The handlers are plain functions from parameters to markdown text so they
//! can be exercised without a running server.

use log::debug;
use rmcp::ErrorData;
use schemars::JsonSchema;
use serde::Deserialize;
use simmer_core::{
    display::{ClockAnchor, Conflicts, Timeline, ValidationReport},
    PlanRequest, Scheduler,
};

use super::errors::to_mcp_error;
use crate::args::parse_clock;

/// Generic MCP wrapper for core parameter types.
///
/// Deserializes transparently into the wrapped type and reuses its schema,
/// so core types stay free of rmcp concerns.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Plan = McpParams<PlanRequest>;

/// Parameters of the `schedule_plan` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SchedulePlan {
    #[serde(flatten)]
    pub plan: PlanRequest,

    /// Optional HH:MM time the cooking starts, to label steps with clock
    /// times
    #[serde(default)]
    pub start_at: Option<String>,

    /// Optional HH:MM time the meal should be ready; cannot be combined with
    /// start_at
    #[serde(default)]
    pub serve_at: Option<String>,
}

impl SchedulePlan {
    fn anchor(&self) -> Result<Option<ClockAnchor>, ErrorData> {
        let parse = |value: &str| {
            parse_clock(value).map_err(|reason| ErrorData::invalid_params(reason, None))
        };
        match (&self.start_at, &self.serve_at) {
            (Some(_), Some(_)) => Err(ErrorData::invalid_params(
                "start_at and serve_at cannot both be set",
                None,
            )),
            (Some(start), None) => Ok(Some(ClockAnchor::StartAt(parse(start)?))),
            (None, Some(serve)) => Ok(Some(ClockAnchor::ServeAt(parse(serve)?))),
            (None, None) => Ok(None),
        }
    }
}

/// Schedule a plan; returns the markdown timeline followed by the schedule
/// as a JSON block.
pub fn schedule_plan(scheduler: &Scheduler, params: &SchedulePlan) -> Result<String, ErrorData> {
    debug!("schedule_plan: {} steps", params.plan.steps.len());

    let anchor = params.anchor()?;
    let schedule = scheduler
        .schedule(&params.plan)
        .map_err(|e| to_mcp_error("Failed to schedule plan", &e))?;

    let mut timeline = Timeline::new(&schedule).with_details(true);
    if let Some(anchor) = anchor {
        timeline = timeline.with_anchor(anchor);
    }
    let json = serde_json::to_string_pretty(&schedule)
        .map_err(|e| ErrorData::internal_error(format!("Failed to serialize schedule: {e}"), None))?;

    Ok(format!("{timeline}\n```json\n{json}\n```\n"))
}

/// List conflicting step pairs of a plan.
pub fn check_conflicts(scheduler: &Scheduler, params: &Plan) -> Result<String, ErrorData> {
    debug!("check_conflicts: {} steps", params.as_ref().steps.len());

    let pairs = scheduler
        .conflicts(params.as_ref())
        .map_err(|e| to_mcp_error("Failed to classify conflicts", &e))?;
    Ok(Conflicts(pairs).to_string())
}

/// Validate a plan without scheduling it.
pub fn validate_plan(scheduler: &Scheduler, params: &Plan) -> Result<String, ErrorData> {
    debug!("validate_plan: {} steps", params.as_ref().steps.len());

    let plan = scheduler
        .check(params.as_ref())
        .map_err(|e| to_mcp_error("Plan is invalid", &e))?;
    Ok(ValidationReport(&plan).to_string())
}
