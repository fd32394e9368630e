//! Error handling utilities for MCP server

use rmcp::ErrorData;
use simmer_core::ScheduleError;

/// Convert a scheduler error to an MCP error.
///
/// Rejected plans are the caller's fault and map to `invalid_params` so the
/// assistant can fix the plan and retry; anything else is an internal error.
pub fn to_mcp_error(message: &str, error: &ScheduleError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_validation() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_rejected_plan_is_invalid_params() {
        let error = to_mcp_error(
            "Failed to schedule plan",
            &ScheduleError::CyclicDependency { ids: vec![1, 2] },
        );
        assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
        assert!(error.message.contains("steps 1, 2"));
    }

    #[test]
    fn test_configuration_error_is_internal() {
        let error = to_mcp_error(
            "Failed to schedule plan",
            &ScheduleError::Configuration {
                message: "bad".to_string(),
            },
        );
        assert_eq!(error.code, ErrorCode::INTERNAL_ERROR);
    }
}
