// ============================================================
// Layer 4 — Answer Tiler
// ============================================================
// Merges overlapping candidate fragments into one answer.
//
// Algorithm:
//   1. Split every candidate on whitespace.
//   2. Pool every prefix n-gram of every candidate:
//        "July 4, 1776" → "July", "July 4,", "July 4, 1776"
//   3. Rank the pool by how often each entry occurs in the pool,
//      most frequent first. Equal counts keep pool order
//      (stable sort), so earlier candidates win ties.
//   4. Seed the answer with the top entry, then scan the rest of
//      the ranking once: whenever the current answer is a
//      substring of the scanned entry, the entry replaces it.
//   5. Remove parenthetical asides "(...) ".
//
// The effect: the phrase most candidates agree on is grown
// outwards by longer phrases that contain it.
//
// Reference: Brill, Dumais & Banko (2002) - AskMSR answer tiling
//            Rust Book §8 (Hash Maps)

use std::collections::HashMap;

use anyhow::Result;
use regex::Regex;

use crate::domain::traits::LogSink;

pub struct AnswerTiler {
    /// Matches "(...) " asides such as life dates after a name.
    /// Greedy: "Lincoln (1809 – 1865) was" loses the whole aside
    /// and its trailing space
    parenthetical: Regex,
}

impl AnswerTiler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parenthetical: Regex::new(r"\(.+\)\s")?,
        })
    }

    /// Tile `candidates` into one answer, or `None` when there is
    /// nothing to tile.
    pub fn tile(&self, candidates: &[String], log: &dyn LogSink) -> Option<String> {
        log.record("Tiling the response...");

        let ranked = rank_ngrams(candidates);
        let (seed, rest) = ranked.split_first()?;

        let mut best = seed.clone();
        for entry in rest {
            if entry.contains(best.as_str()) {
                best = entry.clone();
            }
        }

        let tiled = self.parenthetical.replace_all(&best, "").into_owned();
        tracing::debug!("Tiled {} candidates into '{}'", candidates.len(), tiled);
        Some(tiled)
    }
}

/// Every prefix n-gram of every candidate, most frequent first.
///
/// Only prefixes are pooled, so every n-gram starts at a
/// candidate's first word.
fn rank_ngrams(candidates: &[String]) -> Vec<String> {
    let mut pool: Vec<String> = Vec::new();
    for candidate in candidates {
        let words: Vec<&str> = candidate.split_whitespace().collect();
        for n in 1..=words.len() {
            pool.push(words[..n].join(" "));
        }
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for gram in &pool {
        *counts.entry(gram.clone()).or_insert(0) += 1;
    }

    // sort_by is stable: equal counts stay in pool order
    pool.sort_by(|a, b| counts[b].cmp(&counts[a]));
    pool
}
