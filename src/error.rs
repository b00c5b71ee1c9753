use thiserror::Error;

/// Errors raised while mining itemsets or loading transactions.
#[derive(Debug, Error)]
pub enum MiningError {
    /// The support threshold must be a positive count.
    #[error("min_support must be at least 1, got {min_support}")]
    InvalidMinSupport { min_support: i64 },

    #[error("failed to read transactions: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed transaction record: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;
