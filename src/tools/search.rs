//! Fuzzy-search MCP tool.

use crate::search::SearchIndex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Input for the search tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Keyword matched approximately against every category; empty browses
    pub keyword: String,
    /// Maximum values per category (default: 5)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    5
}

/// Output for the search tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SearchOutput {
    /// Keyword that was searched
    pub keyword: String,
    /// Matching module ids, best first
    pub modules: Vec<String>,
    /// Matching team names, best first
    pub teams: Vec<String>,
    /// Matching application names, best first
    pub applications: Vec<String>,
    /// Total values returned across all categories
    pub total_returned: usize,
}

/// Executes the search tool against the given snapshot.
///
/// # Errors
///
/// Infallible today; the `Result` keeps the tool signature uniform.
pub fn execute_search(index: &Arc<SearchIndex>, input: SearchInput) -> Result<SearchOutput, String> {
    let results = index.search(&input.keyword, input.limit);
    let total_returned = results.total();

    Ok(SearchOutput {
        keyword: input.keyword,
        modules: results.modules,
        teams: results.teams,
        applications: results.applications,
        total_returned,
    })
}
