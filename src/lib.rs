//! catalog-search-mcp: MCP server for fuzzy search over a service catalog.
//!
//! This library indexes catalog records into per-category value lists and
//! answers approximate keyword queries against them:
//! - Immutable search snapshots built from a pluggable catalog source
//! - Ordered-subsequence fuzzy matching with boundary-aware scoring
//! - Per-category ranking and hard truncation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              MCP Server (rmcp)              │
//! │       JSON-RPC over stdin/stdout or SSE     │
//! └─────────────────┬───────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────┐
//! │               Tool Router                    │
//! │  search, list_modules, list_kinds, ...      │
//! └───────┬─────────────────────┬───────────────┘
//!         │                     │
//! ┌───────▼──────────┐ ┌────────▼───────────────┐
//! │   SearchIndex    │ │    Listing tools       │
//! │   (snapshot)     │ │  (filter/sort/limit)   │
//! │ matcher + ranker │ │                        │
//! └───────┬──────────┘ └────────┬───────────────┘
//!         │                     │
//! ┌───────▼─────────────────────▼───────────────┐
//! │          CatalogRepo (JSON file)            │
//! └─────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod error;
pub mod fmt;
pub mod search;
pub mod server;
pub mod tools;
pub mod types;

pub use error::{Result, ServerError};
pub use types::{ModuleId, Score};
