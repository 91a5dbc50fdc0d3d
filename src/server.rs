//! MCP server implementation using rmcp.

use crate::catalog::{CatalogRepo, JsonCatalog};
use crate::search::SearchIndex;
use crate::tools;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::sync::RwLock;

/// Maximum response size in bytes. Responses exceeding this are truncated
/// to prevent context window exhaustion in LLM consumers.
const MAX_RESPONSE_BYTES: usize = 512 * 1024; // 512KB

/// Truncates a JSON response string at a clean boundary before the limit,
/// appending a truncation notice. Works with both compact and pretty JSON.
fn truncate_response(mut json: String) -> String {
    if json.len() <= MAX_RESPONSE_BYTES {
        return json;
    }
    let original_len = json.len();
    // Find clean cut: last comma (JSON record boundary), then newline, then byte limit
    let search_region = &json[..MAX_RESPONSE_BYTES];
    let cut_point = search_region
        .rfind(',')
        .or_else(|| search_region.rfind('\n'))
        .unwrap_or(MAX_RESPONSE_BYTES);
    let mut safe_cut = cut_point + 1;
    while !json.is_char_boundary(safe_cut) {
        safe_cut -= 1;
    }
    // Reuse the existing allocation instead of format!()
    json.truncate(safe_cut);
    json.push_str(&format!(
        "...\n[TRUNCATED: response exceeded {} bytes, showing first {}]",
        original_len, safe_cut
    ));
    json
}

/// Helper to run a blocking tool operation and return structured MCP results.
///
/// Uses `spawn_blocking()` for the synchronous tool bodies and returns either:
/// - `CallToolResult::success()` with JSON content for success
/// - `CallToolResult::error()` with error details for tool errors
/// - `rmcp::Error::internal_error()` for panics/JoinErrors
async fn run_tool<T, E, F>(f: F) -> Result<CallToolResult, rmcp::Error>
where
    T: Serialize + Send + 'static,
    E: std::fmt::Display + Send + 'static,
    F: FnOnce() -> Result<T, E> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(f).await;

    match result {
        Ok(Ok(output)) => {
            let json = serde_json::to_string(&output)
                .map_err(|e| rmcp::Error::internal_error(e.to_string(), None))?;
            let json = truncate_response(json);
            Ok(CallToolResult::success(vec![Content::text(json)]))
        }
        Ok(Err(e)) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
        Err(e) => Err(rmcp::Error::internal_error(e.to_string(), None)),
    }
}

/// MCP server exposing fuzzy search and listing tools over a service catalog.
#[derive(Clone)]
pub struct CatalogServer {
    repo: Arc<dyn CatalogRepo>,
    /// Active search snapshot. Replaced wholesale on rebuild, so a query
    /// observes either the old or the new index, never a partial one.
    index: Arc<RwLock<Arc<SearchIndex>>>,
    tool_router: ToolRouter<Self>,
}

impl CatalogServer {
    /// Creates a server and builds the initial search snapshot.
    ///
    /// A failing catalog degrades to an empty snapshot; the listing tools
    /// surface the underlying error on use.
    #[must_use]
    pub fn new(repo: Arc<dyn CatalogRepo>) -> Self {
        let index = Arc::new(SearchIndex::from_repo(repo.as_ref()));
        tracing::info!("Search index built with {} values", index.total_values());
        Self {
            repo,
            index: Arc::new(RwLock::new(index)),
            tool_router: Self::tool_router(),
        }
    }

    /// Opens a JSON catalog file and builds a server over it.
    ///
    /// Unlike index construction, an unreadable catalog file here is a
    /// configuration error and fails the bootstrap.
    pub fn from_catalog_file(path: &Path) -> Result<Self, crate::ServerError> {
        let repo = JsonCatalog::open(path)?;
        Ok(Self::new(Arc::new(repo)))
    }

    /// Returns the current search snapshot.
    fn snapshot(&self) -> Arc<SearchIndex> {
        self.index.read().unwrap().clone()
    }
}

// Tool implementations using rmcp macros
#[tool_router]
impl CatalogServer {
    /// Fuzzy-search the catalog.
    #[tool(description = "Fuzzy-search module ids, teams and applications by keyword.\n\n\
        Keyword characters must appear in order within a value (e.g. 'pygw' finds 'payment-gateway').\n\
        Results are ranked best-first per category and capped by 'limit'.\n\n\
        Tip: pass an empty keyword to browse the first values of every category.")]
    async fn search(
        &self,
        Parameters(mut input): Parameters<tools::SearchInput>,
    ) -> Result<CallToolResult, rmcp::Error> {
        input.limit = input.limit.min(100);
        let snapshot = self.snapshot();
        run_tool(move || tools::execute_search(&snapshot, input)).await
    }

    /// List catalog modules.
    #[tool(description = "Lists all modules in the catalog.\n\n\
        'filter_keyword' narrows the listing by substring over id, name and description;\n\
        pass an empty string to list everything.\n\n\
        Tip: use 'search' first to discover ids, then this tool for details.")]
    async fn list_modules(
        &self,
        Parameters(input): Parameters<tools::ModulesInput>,
    ) -> Result<CallToolResult, rmcp::Error> {
        let repo = Arc::clone(&self.repo);
        run_tool(move || tools::execute_list_modules(&repo, input)).await
    }

    /// List module kinds.
    #[tool(description = "Lists all module kinds in the catalog, deduplicated in catalog order.")]
    async fn list_kinds(&self) -> Result<CallToolResult, rmcp::Error> {
        let repo = Arc::clone(&self.repo);
        run_tool(move || tools::execute_list_kinds(&repo)).await
    }

    /// List modules by complexity.
    #[tool(description = "Lists modules ordered DESC on complexity, limited up to 'limit_to' modules.\n\n\
        Useful for finding refactoring candidates.")]
    async fn list_modules_by_complexity(
        &self,
        Parameters(mut input): Parameters<tools::ComplexityInput>,
    ) -> Result<CallToolResult, rmcp::Error> {
        input.limit_to = input.limit_to.min(200);
        let repo = Arc::clone(&self.repo);
        run_tool(move || tools::execute_list_modules_by_complexity(&repo, input)).await
    }

    /// Rebuild the search index.
    #[tool(description = "Rebuilds the search index from the current catalog contents.\n\n\
        Run after the catalog changes; searches in flight keep the snapshot they started with.")]
    async fn rebuild_index(&self) -> Result<CallToolResult, rmcp::Error> {
        let repo = Arc::clone(&self.repo);
        let index = Arc::clone(&self.index);
        run_tool(move || tools::execute_rebuild(&repo, &index)).await
    }
}

// Implement ServerHandler trait
#[tool_handler]
impl ServerHandler for CatalogServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "catalog-search-mcp: fuzzy keyword search over the service catalog.\n\n\
             WORKFLOW:\n\
             1. search -> locate module ids, teams and applications by keyword\n\
             2. list_modules -> inspect matching modules in detail\n\
             3. list_modules_by_complexity -> rank modules by complexity\n\n\
             TIPS:\n\
             - search with an empty keyword to browse every category\n\
             - results are capped per category by 'limit'\n\
             - run 'rebuild_index' after the catalog changes"
            .to_string();

        ServerInfo {
            instructions: Some(instructions),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_response_short_passthrough() {
        let json = r#"{"modules":["checkout"]}"#.to_string();
        assert_eq!(truncate_response(json.clone()), json);
    }

    #[test]
    fn test_truncate_response_cuts_at_boundary() {
        let json = format!("[{}]", "\"x\",".repeat(200_000));
        let truncated = truncate_response(json);
        assert!(truncated.len() < 600 * 1024);
        assert!(truncated.contains("[TRUNCATED"));
    }
}
