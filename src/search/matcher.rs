//! Approximate keyword matching over candidate strings.
//!
//! A candidate matches when every character of the case-normalized keyword
//! appears, in order, within the candidate. Scoring favors contiguous runs
//! and matches on word boundaries, and penalizes gaps.

use crate::types::Score;

/// Bonus for a matched character adjacent to the previous matched one.
///
/// Must stay strictly above the other per-character bonuses: with that
/// ordering, a whole-string match is the highest score any candidate can
/// reach for a given keyword.
const CONSECUTIVE_BONUS: i64 = 10;

/// Bonus for a match at the start of the candidate or right after a separator.
const BOUNDARY_BONUS: i64 = 8;

/// Bonus for a match on a lowercase-to-uppercase transition.
const CAMEL_BONUS: i64 = 8;

/// Penalty per unmatched character before the first match.
const LEADING_PENALTY: i64 = -3;

/// Leading characters counted against the score, at most.
const MAX_LEADING: usize = 3;

/// Penalty per unmatched character from the first match onwards.
const UNMATCHED_PENALTY: i64 = -1;

const SEPARATORS: &[char] = &[' ', '-', '_', '/', '.', ':'];

/// A candidate that matched the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Position of the candidate in the searched sequence.
    pub index: usize,
    /// The matched candidate value.
    pub value: String,
    /// Relevance score; higher is better.
    pub score: Score,
    /// Char positions within the candidate that matched keyword chars.
    pub positions: Vec<usize>,
}

/// Scores a keyword against an ordered sequence of candidates.
///
/// Implementations must be deterministic pure functions of
/// (keyword, candidates) and must keep output in candidate order;
/// ranking happens downstream.
pub trait Matcher: Send + Sync {
    fn matches(&self, keyword: &str, candidates: &[String]) -> Vec<Match>;
}

/// Default matcher: case-insensitive ordered-subsequence alignment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubsequenceMatcher;

impl Matcher for SubsequenceMatcher {
    fn matches(&self, keyword: &str, candidates: &[String]) -> Vec<Match> {
        let needle: Vec<char> = keyword.chars().map(fold).collect();

        // Empty keyword: every candidate matches at a uniform baseline,
        // in index order, so callers can browse a category.
        if needle.is_empty() {
            return candidates
                .iter()
                .enumerate()
                .map(|(index, value)| Match {
                    index,
                    value: value.clone(),
                    score: Score::ZERO,
                    positions: Vec::new(),
                })
                .collect();
        }

        candidates
            .iter()
            .enumerate()
            .filter_map(|(index, value)| {
                align(&needle, value).map(|(score, positions)| Match {
                    index,
                    value: value.clone(),
                    score,
                    positions,
                })
            })
            .collect()
    }
}

/// Case-folds a char without changing the char count of the string.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Greedy leftmost alignment of `needle` inside `candidate`.
///
/// Returns the score and matched char positions, or None when the needle
/// is not an ordered subsequence of the candidate.
fn align(needle: &[char], candidate: &str) -> Option<(Score, Vec<usize>)> {
    let haystack: Vec<char> = candidate.chars().collect();

    let mut positions = Vec::with_capacity(needle.len());
    let mut ni = 0;
    for (pos, &c) in haystack.iter().enumerate() {
        if ni < needle.len() && fold(c) == needle[ni] {
            positions.push(pos);
            ni += 1;
        }
    }
    if ni < needle.len() {
        return None;
    }

    let mut score = LEADING_PENALTY * positions[0].min(MAX_LEADING) as i64;
    for (i, &pos) in positions.iter().enumerate() {
        let consecutive = i > 0 && positions[i - 1] + 1 == pos;
        let boundary = pos == 0 || is_separator(haystack[pos - 1]);
        let camel = pos > 0 && haystack[pos - 1].is_lowercase() && haystack[pos].is_uppercase();
        if consecutive {
            score += CONSECUTIVE_BONUS;
        } else if boundary {
            score += BOUNDARY_BONUS;
        } else if camel {
            score += CAMEL_BONUS;
        }
    }
    // Chars before the first match are covered by the leading penalty.
    let unmatched = haystack.len() - positions[0] - positions.len();
    score += UNMATCHED_PENALTY * unmatched as i64;

    Some((Score::new(score), positions))
}
