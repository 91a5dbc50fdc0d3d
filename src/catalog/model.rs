//! Catalog record model.

use crate::types::ModuleId;
use serde::{Deserialize, Serialize};

/// One service module as described by the catalog.
///
/// Only `module_id`, `team` and `application` feed the search index; the
/// remaining fields serve the listing tools. Everything except the id and
/// name is optional in the source data and defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub module_id: ModuleId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub application: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub complexity_score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_empty() {
        let module: Module =
            serde_json::from_str(r#"{"module_id": "checkout", "name": "Checkout"}"#)
                .expect("minimal record should deserialize");

        assert_eq!(module.module_id.as_str(), "checkout");
        assert!(module.team.is_empty());
        assert!(module.application.is_empty());
        assert!(module.kind.is_empty());
        assert_eq!(module.complexity_score, 0.0);
    }
}
