//! MCP server implementation for Simmer
//!
//! Exposes the scheduler over the Model Context Protocol so an assistant
//! that drafts recipe steps can have them scheduled and see the timeline.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use simmer_core::Scheduler;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{Plan, SchedulePlan};

pub type McpResult = Result<CallToolResult, McpError>;

/// MCP server for Simmer
#[derive(Clone)]
pub struct SimmerMcpServer {
    scheduler: Arc<Scheduler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SimmerMcpServer {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(scheduler),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "schedule_plan",
        description = "Compute start times for a list of cooking steps. Each step needs a positive integer id and a positive duration in minutes; dependencies lists ids that must finish first, canParallel=false (the default) means the step needs the cook's full attention. Steps of the same dish that mention the same ingredient or appliance in their description are never overlapped. Optionally pass start_at or serve_at (HH:MM) to get clock times. Returns a markdown timeline and the schedule as JSON."
    )]
    async fn schedule_plan(&self, Parameters(params): Parameters<SchedulePlan>) -> McpResult {
        let text = handlers::schedule_plan(&self.scheduler, &params)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "check_conflicts",
        description = "List every pair of steps in a plan that may not run at the same time, with the reason (a step that cannot run in parallel, a shared ingredient, or shared equipment). Useful for explaining why a timeline is longer than the longest dependency chain."
    )]
    async fn check_conflicts(&self, Parameters(params): Parameters<Plan>) -> McpResult {
        let text = handlers::check_conflicts(&self.scheduler, &params)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        name = "validate_plan",
        description = "Check a plan for missing or duplicate ids, invalid durations and circular dependencies without scheduling it. Also reports dependencies on ids that are not in the plan, which are ignored during scheduling."
    )]
    async fn validate_plan(&self, Parameters(params): Parameters<Plan>) -> McpResult {
        let text = handlers::validate_plan(&self.scheduler, &params)?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SimmerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "simmer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                r#"Simmer schedules cooking steps onto a single timeline.

## Workflow
1. Draft the steps of one or more recipes with ids, durations (minutes), dependencies and a description that names ingredients and equipment.
2. Optionally call validate_plan to catch id, duration and cycle problems.
3. Call schedule_plan to get start times and the total time.
4. Use check_conflicts to explain why steps were serialized.

## Rules
- A step never starts before all of its dependencies have finished.
- Steps with canParallel=false never overlap any other step.
- Steps with the same dishLabel that share an ingredient or an appliance never overlap.
- Idle time between steps is removed where the rules allow."#
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

/// Run the MCP server over stdio until the client disconnects or a signal
/// arrives.
pub async fn run_stdio_server(server: SimmerMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Simmer MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
