//! Search core: categories, fuzzy matching, ranking, and the index snapshot.

mod category;
mod index;
mod matcher;
mod rank;

pub use category::Category;
pub use index::{SearchIndex, SearchResults};
pub use matcher::{Match, Matcher, SubsequenceMatcher};
pub use rank::{Ranker, ScoreRanker};
