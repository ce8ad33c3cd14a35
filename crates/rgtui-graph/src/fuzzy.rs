#![forbid(unsafe_code)]

//! Approximate substring matching.
//!
//! [`partial_ratio`] scores how well the shorter of two strings matches its
//! best-aligned window inside the longer one. It is a building block for a
//! ranked filter; the navigation state machine filters by plain substring
//! containment and does not call it.
//!
//! # Algorithm
//!
//! 1. Order the inputs into *shorter* and *longer* by length.
//! 2. Find the matching blocks between them with [`SequenceMatcher`]
//!    (recursive longest common block, adjacent blocks merged, terminated by
//!    a zero-length sentinel block).
//! 3. For every block, take the window of `len(shorter)` characters of
//!    *longer* starting at the block's aligned offset (clamped to 0) and
//!    compute `ratio = 2 * matched / total` against *shorter*.
//! 4. Return the best window score.
//!
//! # Invariants
//!
//! 1. Scores are bounded: `0.0 <= score <= 1.0`.
//! 2. A contiguous substring always scores exactly `1.0`.
//! 3. Determinism: same input, same score.
//!
//! Characters are compared as Unicode scalar values. No element is ever
//! treated as junk or as "popular", so the longest common block is always
//! found; this is what guarantees invariant 2.

use std::collections::HashMap;

/// A run of equal characters: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchBlock {
    /// Start offset in the first sequence.
    pub a: usize,
    /// Start offset in the second sequence.
    pub b: usize,
    /// Length of the run.
    pub size: usize,
}

/// Longest-matching-block sequence comparison over characters.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Prepare a comparison of `a` against `b`.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        Self::from_chars(a.chars().collect(), b.chars().collect())
    }

    fn from_chars(a: Vec<char>, b: Vec<char>) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest block matching inside `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties resolve to the block starting earliest in `a`, then earliest in
    /// `b`. Returns a zero-size block at `(alo, blo)` when nothing matches.
    #[must_use]
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        let mut best = MatchBlock {
            a: alo,
            b: blo,
            size: 0,
        };
        // j2len[j] = length of the match ending at a[i - 1], b[j].
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(indices) = self.b2j.get(&self.a[i]) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next.insert(j, k);
                    if k > best.size {
                        best = MatchBlock {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = next;
        }
        best
    }

    /// All matching blocks, sorted, merged, and ending with the sentinel
    /// `(len(a), len(b), 0)`.
    #[must_use]
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut found = Vec::new();
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let m = self.find_longest_match(alo, ahi, blo, bhi);
            if m.size == 0 {
                continue;
            }
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            found.push(m);
        }
        found.sort();

        let mut merged: Vec<MatchBlock> = Vec::with_capacity(found.len() + 1);
        for block in found {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(MatchBlock {
            a: la,
            b: lb,
            size: 0,
        });
        merged
    }

    /// Similarity in `[0, 1]`: twice the matched characters over the total.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.size).sum();
        2.0 * matched as f64 / total as f64
    }
}

/// Best similarity of the shorter string against any aligned window of the
/// longer one. See the module docs for the exact procedure.
#[must_use]
pub fn partial_ratio(query: &str, candidate: &str) -> f64 {
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();
    let (shorter, longer) = if q.len() <= c.len() { (q, c) } else { (c, q) };

    let blocks = SequenceMatcher::from_chars(shorter.clone(), longer.clone()).matching_blocks();
    blocks
        .iter()
        .map(|block| {
            let start = block.b.saturating_sub(block.a).min(longer.len());
            let end = (start + shorter.len()).min(longer.len());
            SequenceMatcher::from_chars(shorter.clone(), longer[start..end].to_vec()).ratio()
        })
        .fold(0.0, f64::max)
}
