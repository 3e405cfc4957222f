use std::cmp::Ordering;
use std::collections::HashSet;

use models::Asset;

/// Return `assets` ordered by host name, ascending.
///
/// Comparison is case-insensitive first, then on the raw host, then on ID,
/// so the order is total and stable across renders.
pub fn sorted_by_host(assets: &[Asset]) -> Vec<Asset> {
    let mut sorted = assets.to_vec();
    sorted.sort_by(compare_hosts);
    sorted
}

fn compare_hosts(a: &Asset, b: &Asset) -> Ordering {
    a.host
        .to_lowercase()
        .cmp(&b.host.to_lowercase())
        .then_with(|| a.host.cmp(&b.host))
        .then_with(|| a.id.cmp(&b.id))
}

/// Append `incoming` to `held`, skipping any asset whose ID is already present.
///
/// Returns the number of assets actually added.
pub fn merge_by_id(held: &mut Vec<Asset>, incoming: Vec<Asset>) -> usize {
    let mut seen: HashSet<i64> = held.iter().map(|a| a.id).collect();
    let before = held.len();
    held.extend(incoming.into_iter().filter(|a| seen.insert(a.id)));
    held.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(assets: &[Asset]) -> Vec<&str> {
        assets.iter().map(|a| a.host.as_str()).collect()
    }

    #[test]
    fn test_sort_case_insensitive() {
        let assets = vec![
            Asset::new(1, "web-02"),
            Asset::new(2, "Alpha"),
            Asset::new(3, "beta"),
            Asset::new(4, "alpha"),
        ];
        let sorted = sorted_by_host(&assets);
        assert_eq!(hosts(&sorted), vec!["Alpha", "alpha", "beta", "web-02"]);
        // input untouched
        assert_eq!(assets[0].host, "web-02");
    }

    #[test]
    fn test_sort_ties_by_id() {
        let assets = vec![Asset::new(9, "same"), Asset::new(3, "same")];
        let sorted = sorted_by_host(&assets);
        assert_eq!(sorted[0].id, 3);
        assert_eq!(sorted[1].id, 9);
    }

    #[test]
    fn test_merge_skips_held_ids() {
        let mut held = vec![Asset::new(1, "a"), Asset::new(2, "b")];
        let added = merge_by_id(&mut held, vec![Asset::new(2, "b"), Asset::new(3, "c")]);
        assert_eq!(added, 1);
        assert_eq!(held.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_dedups_within_incoming() {
        let mut held = Vec::new();
        let added = merge_by_id(&mut held, vec![Asset::new(5, "x"), Asset::new(5, "x")]);
        assert_eq!(added, 1);
        assert_eq!(held.len(), 1);
    }

    #[test]
    fn test_merge_same_page_twice_is_idempotent() {
        let page = vec![Asset::new(1, "a"), Asset::new(2, "b"), Asset::new(3, "c")];
        let mut held = Vec::new();
        merge_by_id(&mut held, page.clone());
        let added = merge_by_id(&mut held, page);
        assert_eq!(added, 0);
        assert_eq!(held.len(), 3);
    }
}
