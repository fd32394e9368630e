//! Command handlers.
//!
//! Each handler reads a plan document, runs it through the core scheduler
//! and hands the markdown from `simmer_core::display` to the renderer.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;
use simmer_core::{
    display::{Conflicts, OperationStatus, Timeline, ValidationReport},
    PlanRequest, Scheduler,
};

use crate::{args::ScheduleArgs, renderer::TerminalRenderer};

pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub fn schedule(&self, args: &ScheduleArgs) -> Result<()> {
        let request = read_plan(&args.file)?;
        let schedule = self
            .scheduler
            .schedule(&request)
            .context("Failed to schedule plan")?;

        if args.json {
            let json =
                serde_json::to_string_pretty(&schedule).context("Failed to serialize schedule")?;
            println!("{json}");
            return Ok(());
        }

        let mut timeline = Timeline::new(&schedule)
            .with_width(args.width)
            .with_details(args.details);
        if let Some(anchor) = args.anchor() {
            timeline = timeline.with_anchor(anchor);
        }
        self.renderer.render(&timeline.to_string());
        Ok(())
    }

    pub fn conflicts(&self, file: &Path) -> Result<()> {
        let request = read_plan(file)?;
        let pairs = self
            .scheduler
            .conflicts(&request)
            .context("Failed to classify conflicts")?;
        self.renderer.render(&Conflicts(pairs).to_string());
        Ok(())
    }

    pub fn check(&self, file: &Path) -> Result<()> {
        let request = read_plan(file)?;
        match self.scheduler.check(&request) {
            Ok(plan) => {
                self.renderer.render(&ValidationReport(&plan).to_string());
                Ok(())
            }
            Err(e) => {
                let status = OperationStatus::failure(format!("Plan is invalid: {e}"));
                self.renderer.render(&status.to_string());
                Err(e).context("Plan is invalid")
            }
        }
    }
}

/// Read a plan document from a file, or from stdin when the path is `-`.
fn read_plan(path: &Path) -> Result<PlanRequest> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read plan from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?
    };

    let request = PlanRequest::from_json(&text).context("Failed to parse plan")?;
    debug!("Read plan with {} steps", request.steps.len());
    Ok(request)
}
