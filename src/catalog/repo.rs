//! Catalog data sources.

use crate::catalog::Module;
use crate::error::{CatalogError, CatalogResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the current set of catalog records.
///
/// Implementations may be slow or fail. Consumers that build search
/// snapshots degrade to an empty record set instead of propagating the
/// failure; the listing tools surface it to the caller.
pub trait CatalogRepo: Send + Sync {
    /// Lists every module currently in the catalog.
    fn list_modules(&self) -> CatalogResult<Vec<Module>>;
}

/// Catalog backed by a JSON file holding an array of module records.
///
/// The file is re-read on every listing, so an index rebuild observes
/// whatever the file contains at that moment.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Opens a catalog file, validating that it exists and parses.
    pub fn open(path: impl Into<PathBuf>) -> CatalogResult<Self> {
        let catalog = Self { path: path.into() };
        catalog.list_modules()?;
        Ok(catalog)
    }

    /// Returns the path of the backing file (informational).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogRepo for JsonCatalog {
    fn list_modules(&self) -> CatalogResult<Vec<Module>> {
        let raw = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory catalog with a fixed record set.
///
/// Useful for tests and for embedding the server with preloaded data.
pub struct StaticCatalog {
    modules: Vec<Module>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

impl CatalogRepo for StaticCatalog {
    fn list_modules(&self) -> CatalogResult<Vec<Module>> {
        Ok(self.modules.clone())
    }
}
