use crate::{
    combi::canonical,
    config::MiningConfig,
    error::Result,
    types::{BorrowedItemsetCounts, ItemsetCounts, SupportCount},
};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, trace};

const APPROX_NUM_ITEMSETS: usize = 1024; // arbitrary

/// Generate the frequent itemset table from a list of transactions.
///
/// Every combination of every length is drawn from each transaction and
/// counted under its canonical key; nothing is pruned before counting, so the
/// cost grows as 2^k for a transaction of k items. Repeated items are drawn as
/// distinct positions, so `["a", "a"]` counts `("a")` twice.
pub fn generate_frequent_itemsets<S>(
    transactions: &[Vec<S>],
    config: &MiningConfig,
) -> Result<ItemsetCounts>
where
    S: AsRef<str> + Sync,
{
    config.validate()?;

    debug!(
        transactions = transactions.len(),
        parallel = config.parallel,
        "counting itemsets"
    );

    let counts = if config.parallel {
        count_itemsets_parallel(transactions)
    } else {
        count_itemsets(transactions)
    };
    let num_counted = counts.len();

    let frequent = retain_frequent(counts, config.min_support);

    debug!(
        counted = num_counted,
        frequent = frequent.len(),
        min_support = config.min_support,
        "pruned itemsets below min_support"
    );

    Ok(frequent)
}

/// One-pass count over all transactions.
fn count_itemsets<S: AsRef<str>>(transactions: &[Vec<S>]) -> BorrowedItemsetCounts<'_> {
    let mut itemset_counts = HashMap::with_capacity(APPROX_NUM_ITEMSETS);
    transactions
        .iter()
        .for_each(|transaction| count_transaction(&mut itemset_counts, transaction));
    itemset_counts
}

/// Per-worker tables merged by addition.
fn count_itemsets_parallel<S>(transactions: &[Vec<S>]) -> BorrowedItemsetCounts<'_>
where
    S: AsRef<str> + Sync,
{
    transactions
        .par_iter()
        .fold(HashMap::new, |mut itemset_counts, transaction| {
            count_transaction(&mut itemset_counts, transaction);
            itemset_counts
        })
        .reduce(HashMap::new, merge_counts)
}

fn count_transaction<'l, S: AsRef<str>>(
    itemset_counts: &mut BorrowedItemsetCounts<'l>,
    transaction: &'l [S],
) {
    let items = canonical(transaction);
    trace!(items = items.len(), "enumerating transaction");

    for size in 1..=items.len() {
        // items are sorted, so every combination is already canonical
        for itemset in items.iter().copied().combinations(size) {
            let count = itemset_counts.entry(itemset).or_insert(0);
            *count = count.saturating_add(1);
        }
    }
}

fn merge_counts<'l>(
    mut a: BorrowedItemsetCounts<'l>,
    mut b: BorrowedItemsetCounts<'l>,
) -> BorrowedItemsetCounts<'l> {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    for (itemset, count) in b {
        let total = a.entry(itemset).or_insert(0);
        *total = total.saturating_add(count);
    }
    a
}

fn retain_frequent(
    itemset_counts: BorrowedItemsetCounts,
    min_support: SupportCount,
) -> ItemsetCounts {
    itemset_counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .map(|(itemset, count)| (itemset.into_iter().map(str::to_owned).collect(), count))
        .collect()
}
