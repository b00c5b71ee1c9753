use crate::{
    error::{MiningError, Result},
    types::SupportCount,
};

/// Parameters of one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    /// Itemsets counted fewer times than this are dropped from the table.
    pub min_support: SupportCount,
    /// Count transactions and run the filters on the rayon pool.
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(min_support: SupportCount) -> Result<Self> {
        let config = Self {
            min_support,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Fields are public, so the threshold is checked again before counting.
    pub fn validate(&self) -> Result<()> {
        if self.min_support < 1 {
            return Err(MiningError::InvalidMinSupport {
                min_support: i64::from(self.min_support),
            });
        }
        Ok(())
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 1,
            parallel: true,
        }
    }
}

/// How delimited transaction records are split into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    pub delimiter: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}
