use std::future::Future;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;
use tokio::task::JoinHandle;

use crate::client::RecipeSearchClient;
use crate::config::ApiConfig;
use crate::presenter::{self, Page};
use crate::search::SearchController;

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchRecipesParams {
    pub query: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    pub index: usize,
}

/// One search view per MCP session.
///
/// Session initialization mounts the view, which starts the default search in
/// the background. Tool calls are the user's form submissions.
#[derive(Clone)]
pub struct RecipeSearchServer {
    controller: SearchController<RecipeSearchClient>,
    tool_router: ToolRouter<RecipeSearchServer>,
}

#[tool_router]
impl RecipeSearchServer {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_controller(SearchController::new(RecipeSearchClient::new(config)))
    }

    pub fn with_controller(controller: SearchController<RecipeSearchClient>) -> Self {
        Self {
            controller,
            tool_router: Self::tool_router(),
        }
    }

    pub fn controller(&self) -> &SearchController<RecipeSearchClient> {
        &self.controller
    }

    /// Mounts the view for a new session. Only the first call starts the
    /// default search.
    pub fn start_session(&self) -> Option<JoinHandle<()>> {
        self.controller.mount()
    }

    /// Current page, rendered with fresh card colors.
    pub fn page(&self) -> Page {
        presenter::render(&self.controller.state())
    }

    fn page_result(&self) -> Result<CallToolResult, McpError> {
        let page = self.page();
        let body = serde_json::to_string_pretty(&page)
            .map_err(|e| McpError::internal_error(format!("Failed to encode page: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    #[tool(description = "Search public recipes and return the rendered result grid")]
    async fn search_recipes(
        &self,
        Parameters(params): Parameters<SearchRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.controller.run_search(&params.query).await;
        self.page_result()
    }

    #[tool(description = "Get the current search view without starting a new search")]
    async fn get_search_state(&self) -> Result<CallToolResult, McpError> {
        self.page_result()
    }

    #[tool(description = "Get the full recipe record behind the card at the given index")]
    async fn get_recipe(
        &self,
        Parameters(params): Parameters<GetRecipeParams>,
    ) -> Result<CallToolResult, McpError> {
        let state = self.controller.state();

        match state.results.get(params.index) {
            Some(recipe) => {
                let body = serde_json::to_string_pretty(recipe).map_err(|e| {
                    McpError::internal_error(format!("Failed to encode recipe: {}", e), None)
                })?;
                Ok(CallToolResult::success(vec![Content::text(body)]))
            }
            None => {
                let error = json!({
                    "error": "No recipe at that index",
                    "details": format!(
                        "index {} is out of range for {} results",
                        params.index,
                        state.results.len()
                    )
                });
                Ok(CallToolResult::error(vec![Content::text(error.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for RecipeSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server is a recipe search view backed by the Edamam recipe search API. A default search for \"chicken\" starts when the session opens. Use search_recipes to submit a new query, get_search_state to look at the current view (it may still be loading), and get_recipe to read the full record behind a card.".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        self.start_session();
        Ok(self.get_info())
    }
}
