//! The immutable search index snapshot.
//!
//! Built once from a full read of the catalog, then treated as read-only.
//! A rebuild produces a new instance; callers holding an old snapshot keep
//! getting answers from it.

use crate::catalog::{CatalogRepo, Module};
use crate::search::{Category, Matcher, Ranker, ScoreRanker, SubsequenceMatcher};
use ahash::AHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Per-category ranked search results, each capped by the caller's limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SearchResults {
    /// Matching module ids, best first
    pub modules: Vec<String>,
    /// Matching team names, best first
    pub teams: Vec<String>,
    /// Matching application names, best first
    pub applications: Vec<String>,
}

impl SearchResults {
    /// Returns the result values for one category.
    #[must_use]
    pub fn for_category(&self, category: Category) -> &[String] {
        match category {
            Category::Modules => &self.modules,
            Category::Teams => &self.teams,
            Category::Applications => &self.applications,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Modules => &mut self.modules,
            Category::Teams => &mut self.teams,
            Category::Applications => &mut self.applications,
        }
    }

    /// Total values returned across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|&c| self.for_category(c).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Immutable fuzzy-search snapshot over categorized catalog values.
///
/// Holds one ordered, deduplicated value list per [`Category`] plus the
/// matcher and ranker strategies used to answer queries. Safe to share
/// across threads; queries never mutate it.
pub struct SearchIndex {
    matcher: Box<dyn Matcher>,
    ranker: Box<dyn Ranker>,
    values: [Vec<String>; Category::ALL.len()],
}

impl SearchIndex {
    /// Builds an index from catalog records with the default strategies.
    #[must_use]
    pub fn build(modules: &[Module]) -> Self {
        Self::build_with(modules, Box::new(SubsequenceMatcher), Box::new(ScoreRanker))
    }

    /// Builds an index with caller-supplied matcher and ranker strategies.
    ///
    /// Per category, each record's projection is kept on first occurrence
    /// only; later duplicates are dropped so listings are deterministic and
    /// ranking ties break on a stable order.
    #[must_use]
    pub fn build_with(
        modules: &[Module],
        matcher: Box<dyn Matcher>,
        ranker: Box<dyn Ranker>,
    ) -> Self {
        let mut values: [Vec<String>; Category::ALL.len()] =
            std::array::from_fn(|_| Vec::new());

        for category in Category::ALL {
            let mut seen: AHashSet<&str> = AHashSet::with_capacity(modules.len());
            let slot = &mut values[category as usize];
            for module in modules {
                if let Some(value) = category.project(module) {
                    if seen.insert(value) {
                        slot.push(value.to_string());
                    }
                }
            }
        }

        Self {
            matcher,
            ranker,
            values,
        }
    }

    /// Builds an index from whatever the catalog currently returns.
    ///
    /// A failing data source degrades to an empty index: search then
    /// answers "no results" instead of taking down its host. The failure
    /// is logged, not propagated.
    #[must_use]
    pub fn from_repo(repo: &dyn CatalogRepo) -> Self {
        let modules = match repo.list_modules() {
            Ok(modules) => modules,
            Err(e) => {
                tracing::warn!("Failed to list catalog modules for search index: {e}");
                Vec::new()
            }
        };
        Self::build(&modules)
    }

    /// Returns the indexed values of one category, in first-seen order.
    #[must_use]
    pub fn values(&self, category: Category) -> &[String] {
        &self.values[category as usize]
    }

    /// Total values across all categories.
    #[must_use]
    pub fn total_values(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_values() == 0
    }

    /// Answers a fuzzy keyword query.
    ///
    /// Every category is evaluated independently against the same `limit`;
    /// a keyword flooding one category never shrinks another's results.
    /// Pure read: no call mutates the snapshot.
    #[must_use]
    pub fn search(&self, keyword: &str, limit: usize) -> SearchResults {
        let mut results = SearchResults::default();
        for category in Category::ALL {
            let matches = self.matcher.matches(keyword, self.values(category));
            let ranked = self.ranker.rank(matches, limit);
            *results.slot_mut(category) = ranked.into_iter().map(|m| m.value).collect();
        }
        results
    }
}

impl std::fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("SearchIndex");
        for category in Category::ALL {
            s.field(category.as_str(), &self.values(category).len());
        }
        s.finish()
    }
}
