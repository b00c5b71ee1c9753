use rayon::prelude::*;
use tracing::debug;

use crate::{
    combi::{is_subset, Membership, MembershipIndex},
    types::{Itemset, ItemsetCounts, ItemsetSet},
};

/// Itemsets whose items are not all contained in another frequent itemset.
///
/// Support counts are ignored. Every pair of table keys is compared, on
/// item membership rather than on the keys themselves.
pub fn maximal_itemsets(frequent_itemsets: &ItemsetCounts) -> ItemsetSet {
    let memberships = memberships(frequent_itemsets);

    let maximal: ItemsetSet = memberships
        .iter()
        .filter(|(itemset, items)| !is_contained(itemset, items, &memberships))
        .map(|&(itemset, _)| itemset.clone())
        .collect();

    debug!(
        frequent = frequent_itemsets.len(),
        maximal = maximal.len(),
        "maximal itemsets"
    );
    maximal
}

pub fn maximal_itemsets_par(frequent_itemsets: &ItemsetCounts) -> ItemsetSet {
    let memberships = memberships(frequent_itemsets);

    let maximal: ItemsetSet = memberships
        .par_iter()
        .filter(|(itemset, items)| !is_contained(itemset, items, &memberships))
        .map(|&(itemset, _)| itemset.clone())
        .collect();

    debug!(
        frequent = frequent_itemsets.len(),
        maximal = maximal.len(),
        "maximal itemsets"
    );
    maximal
}

fn memberships(frequent_itemsets: &ItemsetCounts) -> Vec<(&Itemset, Membership)> {
    let index = MembershipIndex::build(frequent_itemsets.keys());
    frequent_itemsets
        .keys()
        .map(|itemset| (itemset, index.membership(itemset)))
        .collect()
}

/// Whether some other key holds every item of `itemset`.
fn is_contained(itemset: &Itemset, items: &Membership, others: &[(&Itemset, Membership)]) -> bool {
    others
        .iter()
        .any(|&(other, ref other_items)| other != itemset && is_subset(items, other_items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::{hashmap, hashset};

    macro_rules! str_vec {
        ($($x:expr),*) => {
            {
                let mut vec: Vec<String> = vec![];
                $(vec.push($x.into());)*
                vec
            }
        };
    }

    #[test]
    fn subsets_of_any_size_are_not_maximal() {
        let frequent_itemsets = hashmap! {
            str_vec!["a"] => 4,
            str_vec!["b"] => 3,
            str_vec!["a", "b"] => 3,
        };

        let expected = hashset! { str_vec!["a", "b"] };
        assert_eq!(maximal_itemsets(&frequent_itemsets), expected);
        assert_eq!(maximal_itemsets_par(&frequent_itemsets), expected);
    }

    #[test]
    fn gap_of_two_items_still_discards() {
        let frequent_itemsets = hashmap! {
            str_vec!["a"] => 2,
            str_vec!["a", "b", "c"] => 2,
            str_vec!["d"] => 2,
        };

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            hashset! { str_vec!["a", "b", "c"], str_vec!["d"] }
        );
    }

    #[test]
    fn support_counts_are_ignored() {
        let frequent_itemsets = hashmap! {
            str_vec!["bread"] => 10,
            str_vec!["bread", "milk"] => 2,
        };

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            hashset! { str_vec!["bread", "milk"] }
        );
    }

    #[test]
    fn overlapping_itemsets_are_both_maximal() {
        let frequent_itemsets = hashmap! {
            str_vec!["a", "b"] => 2,
            str_vec!["b", "c"] => 2,
            str_vec!["b"] => 4,
        };

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            hashset! { str_vec!["a", "b"], str_vec!["b", "c"] }
        );
    }

    #[test]
    fn repeated_items_share_membership() {
        // ("a") and ("a", "a") hold the same items, each discards the other
        let frequent_itemsets = hashmap! {
            str_vec!["a"] => 3,
            str_vec!["a", "a"] => 3,
            str_vec!["a", "a", "a"] => 1,
        };

        assert!(maximal_itemsets(&frequent_itemsets).is_empty());
    }

    #[test]
    fn maximising_twice_gives_the_same_set() {
        let frequent_itemsets = hashmap! {
            str_vec!["x"] => 2,
            str_vec!["y"] => 2,
            str_vec!["x", "y"] => 2,
            str_vec!["z"] => 3,
        };

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            maximal_itemsets_par(&frequent_itemsets)
        );
        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            maximal_itemsets(&frequent_itemsets)
        );
    }

    #[test]
    fn empty_table_has_no_maximal_itemsets() {
        assert!(maximal_itemsets(&ItemsetCounts::new()).is_empty());
    }
}
