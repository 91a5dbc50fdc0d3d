//! Search categories and their projections from catalog records.

use crate::catalog::Module;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named grouping of string values, indexed and searched independently.
///
/// Each category owns exactly one projection from a catalog record to a
/// string value. Extending the index means adding a variant here and its
/// arm in [`Category::project`]; nothing is discovered reflectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Module identifiers.
    Modules,
    /// Owning team names.
    Teams,
    /// Associated application names.
    Applications,
}

impl Category {
    /// All categories, in the order they appear in search results.
    pub const ALL: [Category; 3] = [Category::Modules, Category::Teams, Category::Applications];

    /// Projects one value out of a catalog record.
    ///
    /// Returns None when the record has nothing to contribute for this
    /// category (e.g. a module without a team assignment); such records
    /// are skipped, not rejected.
    #[must_use]
    pub fn project(self, module: &Module) -> Option<&str> {
        let value = match self {
            Self::Modules => module.module_id.as_str(),
            Self::Teams => module.team.as_str(),
            Self::Applications => module.application.as_str(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modules => "modules",
            Self::Teams => "teams",
            Self::Applications => "applications",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
