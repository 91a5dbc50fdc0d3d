//! Index rebuild MCP tool.

use crate::catalog::CatalogRepo;
use crate::search::{Category, SearchIndex};
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::{Arc, RwLock};

/// Output for the rebuild_index tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct RebuildOutput {
    /// Unique module ids in the new snapshot
    pub modules_indexed: usize,
    /// Unique team names in the new snapshot
    pub teams_indexed: usize,
    /// Unique application names in the new snapshot
    pub applications_indexed: usize,
    /// Status message
    pub message: String,
}

/// Executes the rebuild_index tool.
///
/// Re-reads the catalog, builds a fresh snapshot and swaps it in whole.
/// In-flight searches keep the snapshot they already hold. A failing
/// catalog yields an empty snapshot rather than an error.
///
/// # Errors
///
/// Infallible today; the `Result` keeps the tool signature uniform.
pub fn execute_rebuild(
    repo: &Arc<dyn CatalogRepo>,
    index: &Arc<RwLock<Arc<SearchIndex>>>,
) -> Result<RebuildOutput, String> {
    let rebuilt = Arc::new(SearchIndex::from_repo(repo.as_ref()));

    let modules_indexed = rebuilt.values(Category::Modules).len();
    let teams_indexed = rebuilt.values(Category::Teams).len();
    let applications_indexed = rebuilt.values(Category::Applications).len();

    *index.write().unwrap() = Arc::clone(&rebuilt);

    let message = if rebuilt.is_empty() {
        "Search index rebuilt empty: the catalog returned no records".to_string()
    } else {
        format!(
            "Search index rebuilt: {modules_indexed} modules, {teams_indexed} teams, {applications_indexed} applications"
        )
    };

    Ok(RebuildOutput {
        modules_indexed,
        teams_indexed,
        applications_indexed,
        message,
    })
}
