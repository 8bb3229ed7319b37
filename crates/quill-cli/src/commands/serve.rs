use crate::Cli;
use anyhow::Result;
use quill_core::{QuillError, Style};
use quill_render::{ScoreWriter, VariantWriter};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
    ErrorData as McpError, ServerHandler, ServiceExt,
};

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct OptimizeRequest {
    /// The original prompt to rewrite.
    pub raw_prompt: String,
    /// Rewrite style: creative, precise, or fast.
    pub style: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ScoreRequest {
    /// The original prompt.
    pub raw_prompt: String,
    /// The improved prompt to evaluate.
    pub improved_prompt: String,
}

/// MCP server exposing the optimizer and scorer as tools over stdio.
#[derive(Clone)]
pub struct QuillServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl QuillServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Generate 3 optimized variants of the raw LLM prompt in a chosen style. Styles: creative, precise, fast."
    )]
    fn optimize_prompt(
        &self,
        Parameters(request): Parameters<OptimizeRequest>,
    ) -> Result<CallToolResult, McpError> {
        let style: Style = request.style.parse().map_err(invalid_params)?;
        let set = quill_rewrite::optimize_prompt(&request.raw_prompt, style)
            .map_err(invalid_params)?;
        let text = VariantWriter::new(request.raw_prompt.trim()).render_text(&set);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Score an improved prompt relative to the raw prompt. Returns an effectiveness score between 0 and 1."
    )]
    fn score_prompt(
        &self,
        Parameters(request): Parameters<ScoreRequest>,
    ) -> Result<CallToolResult, McpError> {
        let result = quill_score::score_prompt(&request.raw_prompt, &request.improved_prompt)
            .map_err(invalid_params)?;
        let text = ScoreWriter::new(request.raw_prompt.trim(), request.improved_prompt.trim())
            .render_text(&result);
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for QuillServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Deterministic prompt optimization tools: optimize_prompt rewrites a prompt \
                 into three stylistic variants, score_prompt rates an improved prompt against \
                 the original."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

impl Default for QuillServer {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_params(err: QuillError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

pub fn run(cli: &Cli) -> Result<()> {
    if !cli.is_quiet() {
        eprintln!("Serving MCP tools over stdio...");
    }

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    runtime.block_on(serve_stdio())
}

async fn serve_stdio() -> Result<()> {
    let service = QuillServer::new().serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}
