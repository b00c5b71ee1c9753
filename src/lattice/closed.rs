use rayon::prelude::*;
use tracing::debug;

use crate::{
    combi::immediate_subsets,
    types::{Itemset, ItemsetCounts, ItemsetSet, SupportCount},
};

/// Itemsets with no one-item-larger superset of equal support.
///
/// Each itemset looks at its immediate subsets and discards those carrying
/// the same count, so along a chain of equal-support itemsets only the
/// largest one survives.
pub fn closed_itemsets(frequent_itemsets: &ItemsetCounts) -> ItemsetSet {
    let absorbed: ItemsetSet = frequent_itemsets
        .iter()
        .flat_map(|(itemset, &count)| absorbed_subsets(frequent_itemsets, itemset, count))
        .collect();

    let closed: ItemsetSet = frequent_itemsets
        .keys()
        .filter(|itemset| !absorbed.contains(*itemset))
        .cloned()
        .collect();

    debug!(
        frequent = frequent_itemsets.len(),
        closed = closed.len(),
        "closed itemsets"
    );
    closed
}

pub fn closed_itemsets_par(frequent_itemsets: &ItemsetCounts) -> ItemsetSet {
    let absorbed: ItemsetSet = frequent_itemsets
        .par_iter()
        .flat_map_iter(|(itemset, &count)| absorbed_subsets(frequent_itemsets, itemset, count))
        .collect();

    let closed: ItemsetSet = frequent_itemsets
        .par_iter()
        .filter(|(itemset, _)| !absorbed.contains(*itemset))
        .map(|(itemset, _)| itemset.clone())
        .collect();

    debug!(
        frequent = frequent_itemsets.len(),
        closed = closed.len(),
        "closed itemsets"
    );
    closed
}

/// Immediate subsets of `itemset` present in the table with exactly `count`.
fn absorbed_subsets<'t>(
    frequent_itemsets: &'t ItemsetCounts,
    itemset: &'t Itemset,
    count: SupportCount,
) -> impl Iterator<Item = Itemset> + 't {
    immediate_subsets(itemset).filter(move |subset| frequent_itemsets.get(subset) == Some(&count))
}
