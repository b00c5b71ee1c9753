use bitvec::prelude::*;
use itertools::Itertools;
use std::collections::HashMap;

use crate::types::{BorrowedItemset, Item, ItemId, Itemset, ReverseLookup};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary

/// Sort a transaction's items into canonical order, keeping duplicates.
pub fn canonical<S: AsRef<str>>(items: &[S]) -> BorrowedItemset<'_> {
    let mut itemset: BorrowedItemset = items.iter().map(AsRef::as_ref).collect();
    itemset.sort_unstable();
    itemset
}

/// Every itemset obtained by dropping exactly one item. Singletons have none.
pub fn immediate_subsets(itemset: &[Item]) -> impl Iterator<Item = Itemset> + '_ {
    let size = itemset.len().saturating_sub(1);
    itemset
        .iter()
        .cloned()
        .combinations(size)
        .filter(move |_| size > 0)
}

/// Item membership of an itemset as a bitset over dense item ids.
pub type Membership = BitVec;

/// Dense ids for every item appearing in a set of itemsets.
pub struct MembershipIndex<'l> {
    lookup: ReverseLookup<'l>,
}

impl<'l> MembershipIndex<'l> {
    pub fn build<I>(itemsets: I) -> Self
    where
        I: IntoIterator<Item = &'l Itemset>,
    {
        let mut lookup: ReverseLookup = HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS);
        for itemset in itemsets {
            for item in itemset {
                let next_id: ItemId = lookup.len();
                lookup.entry(item.as_str()).or_insert(next_id);
            }
        }
        Self { lookup }
    }

    pub fn num_items(&self) -> usize {
        self.lookup.len()
    }

    /// Items unknown to the index are ignored.
    pub fn membership(&self, itemset: &[Item]) -> Membership {
        let mut bits = bitvec![0; self.num_items()];
        for item in itemset {
            if let Some(&id) = self.lookup.get(item.as_str()) {
                bits.set(id, true);
            }
        }
        bits
    }
}

/// Whether every item of `a` is also an item of `b`.
pub fn is_subset(a: &BitSlice, b: &BitSlice) -> bool {
    a.iter_ones().all(|id| b.get(id).map_or(false, |bit| *bit))
}
