//! Result of checking a plan without scheduling it.

use std::fmt;

use super::OperationStatus;
use crate::validation::ValidatedPlan;

/// Summary of a plan that passed validation.
pub struct ValidationReport<'a>(pub &'a ValidatedPlan);

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let count = plan.steps.len();
        let noun = if count == 1 { "step" } else { "steps" };
        write!(
            f,
            "{}",
            OperationStatus::success(format!("Plan is valid: {count} {noun}"))
        )?;

        if !plan.dangling.is_empty() {
            writeln!(f)?;
            writeln!(f, "Ignored dependencies:")?;
            for dangling in &plan.dangling {
                writeln!(
                    f,
                    "- step {} depends on unknown step {}",
                    dangling.step, dangling.missing
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{params::StepInput, validation::validate_plan};

    #[test]
    fn test_report_lists_dangling() {
        let plan = validate_plan(&[StepInput {
            id: Some(1),
            title: "Plate".to_string(),
            duration: Some(2.0),
            dependencies: vec![5],
            ..Default::default()
        }])
        .expect("Failed to validate");

        let output = ValidationReport(&plan).to_string();
        assert!(output.contains("Plan is valid: 1 step"));
        assert!(output.contains("- step 1 depends on unknown step 5"));
    }
}
