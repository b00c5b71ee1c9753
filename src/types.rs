use std::collections::{HashMap, HashSet};

pub type Item = String;
pub type ItemName<'l> = &'l str;

/// Items as handed over by the loader, in source order.
pub type Transaction = Vec<Item>;

/// Canonical key: items sorted by `Ord` on `str`.
pub type Itemset = Vec<Item>;
pub type BorrowedItemset<'l> = Vec<ItemName<'l>>;

pub type SupportCount = u32;

pub type ItemsetCounts = HashMap<Itemset, SupportCount>;
pub type BorrowedItemsetCounts<'l> = HashMap<BorrowedItemset<'l>, SupportCount>;
pub type ItemsetSet = HashSet<Itemset>;

pub type ItemId = usize;
pub type ReverseLookup<'l> = HashMap<ItemName<'l>, ItemId>;
