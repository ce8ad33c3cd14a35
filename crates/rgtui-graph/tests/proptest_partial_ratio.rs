//! Property-based tests for `fuzzy::partial_ratio`.
//!
//! 1. Scores stay within `[0, 1]`.
//! 2. Any contiguous substring of the candidate scores exactly `1.0`.
//! 3. Identical strings score `1.0`.
//! 4. Determinism.

use proptest::prelude::*;
use rgtui_graph::fuzzy::{SequenceMatcher, partial_ratio};

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-d/_]{0,24}"
}

proptest! {
    #[test]
    fn score_is_bounded(q in text_strategy(), c in text_strategy()) {
        let score = partial_ratio(&q, &c);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn contiguous_substring_scores_one(
        candidate in "[a-d/_]{1,40}",
        start in 0usize..40,
        len in 0usize..40,
    ) {
        let chars: Vec<char> = candidate.chars().collect();
        let start = start % chars.len();
        let end = (start + len).min(chars.len());
        let query: String = chars[start..end].iter().collect();
        prop_assert_eq!(partial_ratio(&query, &candidate), 1.0);
    }

    #[test]
    fn identical_strings_score_one(s in text_strategy()) {
        prop_assert_eq!(partial_ratio(&s, &s), 1.0);
        prop_assert_eq!(SequenceMatcher::new(&s, &s).ratio(), 1.0);
    }

    #[test]
    fn deterministic(q in text_strategy(), c in text_strategy()) {
        prop_assert_eq!(partial_ratio(&q, &c), partial_ratio(&q, &c));
    }
}
