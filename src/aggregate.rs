use serde::Serialize;
use std::collections::HashMap;

use crate::index::{IndexEntry, Location};

/// One location's summed contribution to a script's relevance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActHit {
    pub location: Location,
    pub score: u32,
}

/// A ranked script with its matching locations, best first.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub script: usize,
    pub total_score: u32,
    pub acts: Vec<ActHit>,
}

/// Aggregate raw index hits into a ranked result list.
///
/// Entries are grouped by script; a script's `total_score` is the sum of all
/// its entries' weights across every term and location, so a script matched
/// by many distinct terms outranks one matched once strongly. Within a
/// script, entries sharing a location are summed into one [`ActHit`].
///
/// Scripts are ordered by total score descending, ties broken by each
/// script's single best-scoring location; locations within a script are
/// ordered by their own summed score descending. Scripts equal on both keys
/// stay in the order they first appeared in the input.
pub fn aggregate_results(entries: &[IndexEntry]) -> Vec<SearchResult> {
    // Grouped in first-seen order so the stable sort below never exposes
    // map iteration order.
    let mut results: Vec<SearchResult> = Vec::new();
    let mut position: HashMap<usize, usize> = HashMap::new();

    for entry in entries {
        let idx = *position.entry(entry.script).or_insert_with(|| {
            results.push(SearchResult {
                script: entry.script,
                total_score: 0,
                acts: Vec::new(),
            });
            results.len() - 1
        });
        let result = &mut results[idx];
        let weight = entry.score.weight();
        result.total_score += weight;
        match result.acts.iter_mut().find(|hit| hit.location == entry.location) {
            Some(hit) => hit.score += weight,
            None => result.acts.push(ActHit { location: entry.location, score: weight }),
        }
    }

    results.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then_with(|| best_score(b).cmp(&best_score(a)))
    });
    for result in &mut results {
        result.acts.sort_by(|a, b| b.score.cmp(&a.score));
    }
    results
}

fn best_score(result: &SearchResult) -> u32 {
    result.acts.iter().map(|hit| hit.score).max().unwrap_or(0)
}
