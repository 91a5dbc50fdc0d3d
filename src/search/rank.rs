//! Ranking and truncation of matcher output.

use crate::search::Match;

/// Orders matches by relevance and bounds the result size.
///
/// Implementations must be stable: matches with equal scores keep the
/// candidate order the matcher produced.
pub trait Ranker: Send + Sync {
    fn rank(&self, matches: Vec<Match>, limit: usize) -> Vec<Match>;
}

/// Default ranker: descending score, ties broken by candidate order,
/// hard-truncated to `limit`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreRanker;

impl Ranker for ScoreRanker {
    fn rank(&self, mut matches: Vec<Match>, limit: usize) -> Vec<Match> {
        if limit == 0 {
            return Vec::new();
        }
        // sort_by is stable, so equal scores keep insertion order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Score;

    fn matched(index: usize, value: &str, score: i64) -> Match {
        Match {
            index,
            value: value.to_string(),
            score: Score::new(score),
            positions: Vec::new(),
        }
    }

    #[test]
    fn test_orders_by_descending_score() {
        let ranked = ScoreRanker.rank(
            vec![matched(0, "low", 1), matched(1, "high", 9), matched(2, "mid", 5)],
            10,
        );

        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["high", "mid", "low"]);
    }

    #[test]
    fn test_ties_keep_candidate_order() {
        let ranked = ScoreRanker.rank(
            vec![matched(0, "first", 5), matched(1, "second", 5), matched(2, "third", 5)],
            10,
        );

        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["first", "second", "third"]);
    }

    #[test]
    fn test_zero_limit_yields_nothing() {
        let ranked = ScoreRanker.rank(vec![matched(0, "only", 5)], 0);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_limit_above_len_returns_all_unpadded() {
        let ranked = ScoreRanker.rank(vec![matched(0, "a", 2), matched(1, "b", 1)], 100);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_truncates_to_limit() {
        let ranked = ScoreRanker.rank(
            vec![matched(0, "a", 3), matched(1, "b", 2), matched(2, "c", 1)],
            2,
        );

        let values: Vec<&str> = ranked.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["a", "b"]);
    }
}
