//! Lattice relationships over a frequent itemset table.
//!
//! Both filters only read the table, so they can run side by side on the
//! same counts.

pub mod closed;
pub mod maximal;

pub use closed::{closed_itemsets, closed_itemsets_par};
pub use maximal::{maximal_itemsets, maximal_itemsets_par};
