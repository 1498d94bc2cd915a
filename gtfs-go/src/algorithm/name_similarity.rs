//! stop name comparison for grouping near-duplicate stops.
use std::collections::HashMap;

use itertools::Itertools;

/// cuts a stop name at the first occurrence of `delimiter` and normalizes
/// the rest. an empty delimiter leaves the name whole.
pub fn stop_name_key(name: &str, delimiter: Option<&str>) -> String {
    let head = match delimiter {
        Some(d) if !d.is_empty() => name.split(d).next().unwrap_or(name),
        _ => name,
    };
    normalize(head)
}

/// trims, lowercases and collapses internal whitespace runs to one space.
pub fn normalize(name: &str) -> String {
    name.split_whitespace().map(str::to_lowercase).join(" ")
}

/// Sørensen–Dice coefficient over character bigrams, in [0, 1]. identical
/// strings score 1.0, including single-character and empty strings, which
/// have no bigrams.
pub fn dice_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_bigrams = bigram_counts(a);
    let b_bigrams = bigram_counts(b);
    let total: usize = a_bigrams.values().sum::<usize>() + b_bigrams.values().sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let shared: usize = a_bigrams
        .iter()
        .map(|(bigram, count)| (*count).min(b_bigrams.get(bigram).copied().unwrap_or(0)))
        .sum();
    (2 * shared) as f64 / total as f64
}

fn bigram_counts(s: &str) -> HashMap<(char, char), usize> {
    let mut counts = HashMap::new();
    for pair in s.chars().tuple_windows::<(char, char)>() {
        *counts.entry(pair).or_insert(0) += 1;
    }
    counts
}
