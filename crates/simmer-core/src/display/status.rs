//! One-line outcome messages.

use std::fmt;

/// Outcome of a command that has no richer output.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// A passing outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// A failing outcome.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.success { "✓" } else { "✗" };
        writeln!(f, "**{marker}** {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_markers() {
        assert_eq!(OperationStatus::success("Plan is valid").to_string(), "**✓** Plan is valid\n");
        assert!(OperationStatus::failure("Nope").to_string().contains("✗"));
    }
}
