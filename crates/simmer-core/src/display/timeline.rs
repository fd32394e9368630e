//! Markdown timeline of a finished schedule.

use std::fmt;

use super::clock::{ClockAnchor, ClockTime};
use crate::models::{Schedule, Step};

/// Default number of characters in a timeline bar.
pub const DEFAULT_BAR_WIDTH: usize = 24;

/// Widest bar a timeline will draw.
pub const MAX_BAR_WIDTH: usize = 200;

/// Renders a [`Schedule`] as a markdown timeline.
///
/// One line per step, in start order, each with a time label and a bar
/// scaled to the total plan duration.
///
/// # Examples
///
/// ```rust
/// use simmer_core::{display::Timeline, params::PlanRequest, SchedulerBuilder};
///
/// let scheduler = SchedulerBuilder::new().without_user_config().build()?;
/// let request = PlanRequest::from_json(
///     r#"[{"id": 1, "title": "Boil eggs", "duration": 10, "canParallel": true}]"#,
/// )?;
/// let schedule = scheduler.schedule(&request)?;
///
/// let output = Timeline::new(&schedule).with_width(10).to_string();
/// assert!(output.contains("# Timeline: 10 min"));
/// assert!(output.contains("██████████"));
/// # Ok::<(), simmer_core::ScheduleError>(())
/// ```
pub struct Timeline<'a> {
    schedule: &'a Schedule,
    anchor: Option<ClockAnchor>,
    width: usize,
    details: bool,
}

impl<'a> Timeline<'a> {
    /// Create a timeline with minute labels.
    pub fn new(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            anchor: None,
            width: DEFAULT_BAR_WIDTH,
            details: false,
        }
    }

    /// Label steps with times of day instead of minute offsets.
    pub fn with_anchor(mut self, anchor: ClockAnchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Set the bar width in characters, between 1 and [`MAX_BAR_WIDTH`].
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, MAX_BAR_WIDTH);
        self
    }

    /// Append a full section per step after the timeline.
    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    fn label(&self, step: &Step) -> String {
        let total = self.schedule.optimized_time;
        match &self.anchor {
            Some(anchor) => format!(
                "{}–{}",
                ClockTime(anchor.at(total, step.start_time)),
                ClockTime(anchor.at(total, step.end_time()))
            ),
            None => {
                let digits = total.to_string().len();
                format!(
                    "{:>digits$}–{:>digits$}",
                    step.start_time,
                    step.end_time()
                )
            }
        }
    }

    fn bar(&self, step: &Step) -> String {
        let total = u128::from(self.schedule.optimized_time.max(1));
        let width = self.width as u128;
        let from = (u128::from(step.start_time) * width / total).min(width - 1);
        let to = ((u128::from(step.end_time()) * width + total - 1) / total).clamp(from + 1, width);

        let mut bar = String::with_capacity(self.width * 3);
        for cell in 0..width {
            bar.push(if (from..to).contains(&cell) { '█' } else { '·' });
        }
        bar
    }
}

impl fmt::Display for Timeline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.schedule.optimized_time;
        writeln!(f, "# Timeline: {total} min")?;
        writeln!(f)?;

        if let Some(anchor) = &self.anchor {
            writeln!(f, "- Start: {}", ClockTime(anchor.plan_start(total)))?;
            writeln!(f, "- Ready: {}", ClockTime(anchor.at(total, total)))?;
            writeln!(f)?;
        }

        if self.schedule.steps.is_empty() {
            writeln!(f, "No steps in this plan.")?;
        } else {
            for step in self.schedule.chronological() {
                write!(
                    f,
                    "- `{}` `{}` **{}. {}**",
                    self.label(step),
                    self.bar(step),
                    step.id,
                    step.title
                )?;
                let mut tags = Vec::new();
                if let Some(category) = &step.category {
                    tags.push(category.with_icon().to_string());
                }
                if let Some(dish) = &step.dish_label {
                    tags.push(format!("dish {dish}"));
                }
                if !tags.is_empty() {
                    write!(f, " *{}*", tags.join(", "))?;
                }
                writeln!(f)?;
            }
        }

        if let Some(advisory) = &self.schedule.advisory {
            writeln!(f)?;
            writeln!(f, "> Note: {advisory}")?;
        }

        if self.details && !self.schedule.steps.is_empty() {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in self.schedule.chronological() {
                write!(f, "{step}")?;
            }
        }

        Ok(())
    }
}
