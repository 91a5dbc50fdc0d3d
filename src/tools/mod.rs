//! MCP tool implementations.

mod catalog;
mod rebuild;
mod search;

// catalog
pub use catalog::{
    execute_list_kinds, execute_list_modules, execute_list_modules_by_complexity, ComplexityInput,
    ComplexityOutput, KindsOutput, ModuleDescriptor, ModulesInput, ModulesOutput,
};

// rebuild
pub use rebuild::{execute_rebuild, RebuildOutput};

// search
pub use search::{execute_search, SearchInput, SearchOutput};
