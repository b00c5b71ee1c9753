//! Frequent, closed and maximal itemset mining.
//!
//! Support counting enumerates every combination of every transaction, then
//! two read-only filters derive the closed and the maximal itemsets from the
//! resulting table.

pub mod combi;
pub mod config;
pub mod error;
pub mod itemsets;
pub mod lattice;
pub mod loader;
pub mod report;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::{LoaderConfig, MiningConfig};
pub use error::{MiningError, Result};
pub use itemsets::generate_frequent_itemsets;
pub use lattice::{closed_itemsets, maximal_itemsets};
pub use types::{Item, Itemset, ItemsetCounts, ItemsetSet, SupportCount, Transaction};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::wrap_pyfunction;
#[cfg(feature = "python")]
use wrapper::*;

/// The frequent itemset table together with its closed and maximal keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MinedItemsets {
    pub frequent: ItemsetCounts,
    pub closed: ItemsetSet,
    pub maximal: ItemsetSet,
}

/// Count once, then run both filters against the same table.
pub fn mine<S>(transactions: &[Vec<S>], config: &MiningConfig) -> Result<MinedItemsets>
where
    S: AsRef<str> + Sync,
{
    let frequent = generate_frequent_itemsets(transactions, config)?;

    let (closed, maximal) = if config.parallel {
        rayon::join(
            || lattice::closed_itemsets_par(&frequent),
            || lattice::maximal_itemsets_par(&frequent),
        )
    } else {
        (
            lattice::closed_itemsets(&frequent),
            lattice::maximal_itemsets(&frequent),
        )
    };

    Ok(MinedItemsets {
        frequent,
        closed,
        maximal,
    })
}

#[cfg(feature = "python")]
#[pymodule]
fn apriori_lattice(_: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_itemsets, m)?)?;
    Ok(())
}
