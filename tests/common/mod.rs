//! Common test utilities for catalog-search-mcp integration tests.
//!
//! Provides `TestEnv` for setting up isolated test environments with a
//! temporary catalog file, plus record builders and a small realistic
//! catalog shared across test files.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use catalog_search_mcp::catalog::{CatalogRepo, JsonCatalog, Module};
use catalog_search_mcp::search::SearchIndex;
use catalog_search_mcp::types::ModuleId;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// A test environment holding a temporary catalog file.
pub struct TestEnv {
    pub dir: TempDir,
    pub catalog_path: PathBuf,
}

impl TestEnv {
    /// Creates an environment with the given modules serialized to disk.
    pub fn with_modules(modules: &[Module]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let catalog_path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(modules).expect("Failed to serialize catalog");
        fs::write(&catalog_path, json).expect("Failed to write catalog file");
        Self { dir, catalog_path }
    }

    /// Rewrites the catalog file with a new record set.
    pub fn replace_modules(&self, modules: &[Module]) {
        let json = serde_json::to_string_pretty(modules).expect("Failed to serialize catalog");
        fs::write(&self.catalog_path, json).expect("Failed to rewrite catalog file");
    }

    /// Overwrites the catalog file with raw content (for corruption tests).
    pub fn write_raw(&self, content: &str) {
        fs::write(&self.catalog_path, content).expect("Failed to write catalog file");
    }

    /// Opens a repo over the catalog file.
    pub fn repo(&self) -> Arc<dyn CatalogRepo> {
        Arc::new(JsonCatalog::open(&self.catalog_path).expect("Failed to open catalog"))
    }

    /// Builds a search snapshot from the current catalog contents.
    pub fn index(&self) -> Arc<SearchIndex> {
        Arc::new(SearchIndex::from_repo(self.repo().as_ref()))
    }
}

/// Builds a module record with just the fields the search index consumes.
pub fn module(id: &str, team: &str, application: &str) -> Module {
    Module {
        module_id: ModuleId::new(id),
        name: id.to_string(),
        description: String::new(),
        team: team.to_string(),
        application: application.to_string(),
        kind: String::new(),
        complexity_score: 0.0,
    }
}

/// Builds a fully populated module record.
pub fn full_module(
    id: &str,
    name: &str,
    description: &str,
    team: &str,
    application: &str,
    kind: &str,
    complexity_score: f32,
) -> Module {
    Module {
        module_id: ModuleId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        team: team.to_string(),
        application: application.to_string(),
        kind: kind.to_string(),
        complexity_score,
    }
}

/// A small realistic catalog used across tests.
pub fn sample_catalog() -> Vec<Module> {
    vec![
        full_module(
            "checkout",
            "Checkout",
            "Customer checkout flow",
            "payments",
            "webshop",
            "service",
            7.5,
        ),
        full_module(
            "payment-gateway",
            "Payment Gateway",
            "Card and wallet processing",
            "payments",
            "webshop",
            "service",
            9.1,
        ),
        full_module(
            "ledger",
            "Ledger",
            "Double-entry bookkeeping",
            "finance",
            "backoffice",
            "service",
            6.2,
        ),
        full_module(
            "invoicing",
            "Invoicing",
            "Invoice generation and delivery",
            "finance",
            "backoffice",
            "batch",
            3.4,
        ),
        full_module(
            "catalog-ui",
            "Catalog UI",
            "Product browsing frontend",
            "storefront",
            "webshop",
            "frontend",
            2.8,
        ),
    ]
}
