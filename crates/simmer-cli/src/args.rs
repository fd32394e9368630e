use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::civil::Time;
use simmer_core::display::{ClockAnchor, DEFAULT_BAR_WIDTH};

/// Plan cooking steps onto a shared timeline
///
/// Simmer reads a JSON list of recipe steps with durations, dependencies and
/// parallelism hints, and works out when each step should start so that no
/// step begins before its prerequisites, steps that compete for the cook,
/// an ingredient or an appliance never overlap, and the whole meal finishes
/// as early as possible. It can also run as an MCP (Model Context Protocol)
/// server so an assistant can schedule the recipes it writes.
#[derive(Parser)]
#[command(version, about, name = "simmer")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/simmer/config.json when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute start times for a plan and print the timeline
    #[command(alias = "s")]
    Schedule(ScheduleArgs),
    /// List the step pairs that may not overlap, with reasons
    #[command(alias = "c")]
    Conflicts {
        /// Plan file, or - for stdin
        file: PathBuf,
    },
    /// Validate a plan without scheduling it
    Check {
        /// Plan file, or - for stdin
        file: PathBuf,
    },
    /// Start the MCP server on stdio
    Serve,
}

#[derive(ClapArgs)]
pub struct ScheduleArgs {
    /// Plan file, or - for stdin
    pub file: PathBuf,

    /// Print the schedule as JSON instead of a timeline
    #[arg(long)]
    pub json: bool,

    /// Label the timeline with clock times, starting at HH:MM
    #[arg(long, value_parser = parse_clock, conflicts_with = "serve_at")]
    pub start_at: Option<Time>,

    /// Label the timeline with clock times, finishing at HH:MM
    #[arg(long, value_parser = parse_clock)]
    pub serve_at: Option<Time>,

    /// Include a full section for every step
    #[arg(long)]
    pub details: bool,

    /// Width of the timeline bars in characters
    #[arg(long, default_value_t = DEFAULT_BAR_WIDTH)]
    pub width: usize,
}

impl ScheduleArgs {
    pub fn anchor(&self) -> Option<ClockAnchor> {
        self.start_at
            .map(ClockAnchor::StartAt)
            .or(self.serve_at.map(ClockAnchor::ServeAt))
    }
}

/// Parse a 24-hour `HH:MM` time of day.
pub fn parse_clock(value: &str) -> Result<Time, String> {
    Time::strptime("%H:%M", value.trim())
        .map_err(|_| format!("expected a time like 18:30, got '{value}'"))
}
