//! Display implementations for domain models.
//!
//! Kept apart from the model definitions; everything formats as markdown so
//! the same text works in the terminal renderer and in MCP responses.

use std::fmt;

use crate::models::{Step, StepCategory};

impl fmt::Display for StepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "### {}. {}", self.id, self.title)?;
        if let Some(category) = &self.category {
            write!(f, " ({})", category.with_icon())?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "- Time: {}–{} min ({} min)",
            self.start_time,
            self.end_time(),
            self.duration
        )?;
        if !self.dependencies.is_empty() {
            let deps: Vec<String> = self.dependencies.iter().map(u64::to_string).collect();
            writeln!(f, "- After: {}", deps.join(", "))?;
        }
        if let Some(dish) = &self.dish_label {
            writeln!(f, "- Dish: {dish}")?;
        }
        if !self.can_parallel {
            writeln!(f, "- Needs full attention")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let step = Step {
            id: 2,
            title: "Sear steak".to_string(),
            description: "Sear in a hot pan".to_string(),
            duration: 6,
            dependencies: vec![1],
            can_parallel: false,
            category: Some(StepCategory::Cook),
            dish_label: Some("A".to_string()),
            start_time: 10,
        };
        let output = step.to_string();
        assert!(output.starts_with("### 2. Sear steak (🔥 cook)"));
        assert!(output.contains("Sear in a hot pan"));
        assert!(output.contains("- Time: 10–16 min (6 min)"));
        assert!(output.contains("- After: 1"));
        assert!(output.contains("- Dish: A"));
        assert!(output.contains("- Needs full attention"));
    }

    #[test]
    fn test_minimal_step_display() {
        let step = Step {
            id: 1,
            title: "Rest".to_string(),
            description: String::new(),
            duration: 5,
            dependencies: vec![],
            can_parallel: true,
            category: None,
            dish_label: None,
            start_time: 0,
        };
        let output = step.to_string();
        assert!(output.starts_with("### 1. Rest\n"));
        assert!(!output.contains("After"));
        assert!(!output.contains("attention"));
    }
}
