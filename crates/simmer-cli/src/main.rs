//! Simmer CLI Application
//!
//! Command-line front end and MCP server for the cooking step scheduler.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SimmerMcpServer};
use renderer::TerminalRenderer;
use simmer_core::SchedulerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_config_path(config)
        .build()
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Simmer started");

    match command {
        Commands::Schedule(args) => Cli::new(scheduler, renderer).schedule(&args),
        Commands::Conflicts { file } => Cli::new(scheduler, renderer).conflicts(&file),
        Commands::Check { file } => Cli::new(scheduler, renderer).check(&file),
        Commands::Serve => {
            info!("Starting Simmer MCP server");
            run_stdio_server(SimmerMcpServer::new(scheduler))
                .await
                .context("MCP server failed")
        }
    }
}
