pub mod count;

pub use count::generate_frequent_itemsets;
