//! Frequency reducers over near-duplicate strings.
//!
//! Elements are bucketed by a caller-supplied equivalence function (see
//! [`equivalence`](crate::simplify::equivalence) for a ready-made one);
//! the canonical representative of a bucket is the first element observed
//! mapping to its key.

use std::collections::HashMap;

/// Buckets in first-appearance order: `(key, count, first original)`.
fn bucket_by<S, F>(equivalence: F, elements: &[S]) -> Vec<(String, usize, String)>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut order: Vec<(String, usize, String)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for element in elements {
        let element = element.as_ref();
        let key = equivalence(element);
        match index.get(&key) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(key.clone(), order.len());
                order.push((key, 1, element.to_string()));
            }
        }
    }
    order
}

/// The first-observed element of the most frequent bucket, or `None` for
/// an empty input.
///
/// Tie-break: the first bucket (in scan order) to reach the maximal count
/// wins. This is a chosen convention, not a semantic guarantee.
#[must_use]
pub fn majority<S, F>(equivalence: F, elements: &[S]) -> Option<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let buckets = bucket_by(equivalence, elements);
    let mut best: Option<&(String, usize, String)> = None;
    for entry in &buckets {
        if best.map_or(true, |b| entry.1 > b.1) {
            best = Some(entry);
        }
    }
    best.map(|(_, _, first)| first.clone())
}

/// The sorted bucket keys whose count strictly exceeds `n`.
#[must_use]
pub fn appear_more_than<S, F>(n: usize, equivalence: F, elements: &[S]) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut keys: Vec<String> = bucket_by(equivalence, elements)
        .into_iter()
        .filter(|(_, count, _)| *count > n)
        .map(|(key, _, _)| key)
        .collect();
    keys.sort();
    keys
}

/// The sorted bucket keys whose count is among the first `n` values of
/// the ascending count list.
///
/// Known quirk, preserved deliberately: despite the name this selects the
/// *lowest*-frequency buckets, and ties at the boundary count can yield
/// more than `n` keys.
#[must_use]
pub fn top_by_count<S, F>(n: usize, equivalence: F, elements: &[S]) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> String,
{
    let buckets = bucket_by(equivalence, elements);
    let mut counts: Vec<usize> = buckets.iter().map(|(_, count, _)| *count).collect();
    counts.sort_unstable();
    counts.truncate(n);
    let mut keys: Vec<String> = buckets
        .into_iter()
        .filter(|(_, count, _)| counts.contains(count))
        .map(|(key, _, _)| key)
        .collect();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplify::equivalence;

    fn identity(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_majority_returns_first_original_of_biggest_bucket() {
        let elements = ["The Matrix", "matrix", "Dredd", "MATRIX"];
        assert_eq!(
            majority(equivalence, &elements),
            Some("The Matrix".to_string())
        );
    }

    #[test]
    fn test_majority_tie_break_first_in_scan_order() {
        let elements = ["a", "b", "b", "a"];
        assert_eq!(majority(identity, &elements), Some("a".to_string()));
    }

    #[test]
    fn test_majority_empty() {
        let elements: [&str; 0] = [];
        assert_eq!(majority(identity, &elements), None);
    }

    #[test]
    fn test_appear_more_than() {
        let elements = ["a", "b", "a", "c", "a", "b"];
        assert_eq!(appear_more_than(1, identity, &elements), vec!["a", "b"]);
        assert_eq!(appear_more_than(2, identity, &elements), vec!["a"]);
        assert!(appear_more_than(3, identity, &elements).is_empty());
    }

    #[test]
    fn test_top_by_count_selects_lowest_frequency_buckets() {
        // Counts: a=3, b=2, c=1. Ascending count list [1, 2, 3]; the first
        // value is 1, so only the rarest key comes back.
        let elements = ["a", "a", "a", "b", "b", "c"];
        assert_eq!(top_by_count(1, identity, &elements), vec!["c"]);
    }

    #[test]
    fn test_top_by_count_boundary_ties_can_exceed_n() {
        // Counts: a=1, b=1, c=2. Ascending [1, 1, 2] truncated to 1 is [1],
        // and both singleton keys match it.
        let elements = ["a", "b", "c", "c"];
        assert_eq!(top_by_count(1, identity, &elements), vec!["a", "b"]);
    }
}
