//! Deterministic orderings for printing mining results.

use std::cmp::Reverse;

use crate::types::{Itemset, ItemsetCounts, ItemsetSet, SupportCount};

/// Longest itemsets first, then highest support, then by items.
pub fn sorted_frequent(frequent_itemsets: &ItemsetCounts) -> Vec<(&Itemset, SupportCount)> {
    let mut rows: Vec<(&Itemset, SupportCount)> = frequent_itemsets
        .iter()
        .map(|(itemset, &count)| (itemset, count))
        .collect();
    rows.sort_unstable_by_key(|&(itemset, count)| (Reverse(itemset.len()), Reverse(count), itemset));
    rows
}

/// Longest itemsets first, then by items.
pub fn sorted_itemsets(itemsets: &ItemsetSet) -> Vec<&Itemset> {
    let mut rows: Vec<&Itemset> = itemsets.iter().collect();
    rows.sort_unstable_by_key(|&itemset| (Reverse(itemset.len()), itemset));
    rows
}

/// Render as `(a, b, c)`.
pub fn format_itemset(itemset: &[String]) -> String {
    format!("({})", itemset.join(", "))
}
