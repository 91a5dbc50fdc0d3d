//! Catalog listing MCP tools.

use crate::catalog::{CatalogRepo, Module};
use ahash::AHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Input for the list_modules tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ModulesInput {
    /// Substring filter over id, name and description (empty = all)
    #[serde(default)]
    pub filter_keyword: String,
}

/// A module as returned by the listing tools.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ModuleDescriptor {
    /// Module identifier
    pub module_id: String,
    /// Human-readable name
    pub name: String,
    /// Short description
    pub description: String,
    /// Complexity score (omitted when zero)
    #[serde(skip_serializing_if = "is_zero")]
    pub complexity_score: f32,
}

fn is_zero(v: &f32) -> bool {
    *v == 0.0
}

impl ModuleDescriptor {
    fn brief(module: &Module) -> Self {
        Self {
            module_id: module.module_id.to_string(),
            name: module.name.clone(),
            description: module.description.clone(),
            complexity_score: 0.0,
        }
    }

    fn with_complexity(module: &Module) -> Self {
        Self {
            complexity_score: module.complexity_score,
            ..Self::brief(module)
        }
    }
}

/// Output for the list_modules tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ModulesOutput {
    /// Matching modules, in catalog order
    pub modules: Vec<ModuleDescriptor>,
    /// Number of modules returned
    pub total_returned: usize,
}

/// Executes the list_modules tool.
///
/// # Errors
///
/// Returns an error string when the catalog cannot be listed.
pub fn execute_list_modules(
    repo: &Arc<dyn CatalogRepo>,
    input: ModulesInput,
) -> Result<ModulesOutput, String> {
    let all = repo.list_modules().map_err(|e| e.to_string())?;
    let needle = input.filter_keyword.to_lowercase();

    let modules: Vec<ModuleDescriptor> = all
        .iter()
        .filter(|m| matches_keyword(m, &needle))
        .map(ModuleDescriptor::brief)
        .collect();

    Ok(ModulesOutput {
        total_returned: modules.len(),
        modules,
    })
}

fn matches_keyword(module: &Module, needle: &str) -> bool {
    needle.is_empty()
        || module.module_id.as_str().to_lowercase().contains(needle)
        || module.name.to_lowercase().contains(needle)
        || module.description.to_lowercase().contains(needle)
}

/// Output for the list_kinds tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct KindsOutput {
    /// Distinct module kinds, in catalog order
    pub kinds: Vec<String>,
}

/// Executes the list_kinds tool.
///
/// # Errors
///
/// Returns an error string when the catalog cannot be listed.
pub fn execute_list_kinds(repo: &Arc<dyn CatalogRepo>) -> Result<KindsOutput, String> {
    let all = repo.list_modules().map_err(|e| e.to_string())?;

    let mut seen: AHashSet<&str> = AHashSet::new();
    let mut kinds = Vec::new();
    for module in &all {
        if module.kind.is_empty() {
            continue;
        }
        if seen.insert(module.kind.as_str()) {
            kinds.push(module.kind.clone());
        }
    }

    Ok(KindsOutput { kinds })
}

/// Input for the list_modules_by_complexity tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ComplexityInput {
    /// Maximum modules to return (default: 20)
    #[serde(default = "default_limit_to")]
    pub limit_to: usize,
}

fn default_limit_to() -> usize {
    20
}

/// Output for the list_modules_by_complexity tool.
#[derive(Debug, Serialize, JsonSchema)]
pub struct ComplexityOutput {
    /// Modules ordered by descending complexity
    pub modules: Vec<ModuleDescriptor>,
    /// Number of modules returned
    pub total_returned: usize,
}

/// Executes the list_modules_by_complexity tool.
///
/// # Errors
///
/// Returns an error string when the catalog cannot be listed.
pub fn execute_list_modules_by_complexity(
    repo: &Arc<dyn CatalogRepo>,
    input: ComplexityInput,
) -> Result<ComplexityOutput, String> {
    let mut all = repo.list_modules().map_err(|e| e.to_string())?;

    // Stable sort: equal scores keep catalog order.
    all.sort_by(|a, b| b.complexity_score.total_cmp(&a.complexity_score));

    let modules: Vec<ModuleDescriptor> = all
        .iter()
        .take(input.limit_to)
        .map(ModuleDescriptor::with_complexity)
        .collect();

    Ok(ComplexityOutput {
        total_returned: modules.len(),
        modules,
    })
}
