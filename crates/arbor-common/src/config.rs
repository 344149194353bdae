//! Configuration structures for the Arbor demo driver.

use crate::error::{ArborError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a demo driver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// B+ tree order (maximum fan-out). Must be at least 3.
    pub order: usize,
    /// Number of generated entries to insert.
    pub entries: usize,
    /// Seed for the insert/delete permutations.
    pub seed: u64,
    /// Print the full tree dump after the insert phase.
    pub dump_tree: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            order: 15,
            entries: 1000,
            seed: 42,
            dump_tree: false,
        }
    }
}

impl DemoConfig {
    /// Validates the configuration against the tree construction contract.
    pub fn validate(&self) -> Result<()> {
        if self.order < 3 {
            return Err(ArborError::InvalidParameter {
                name: "order".to_string(),
                value: self.order.to_string(),
            });
        }
        if self.entries == 0 {
            return Err(ArborError::InvalidParameter {
                name: "entries".to_string(),
                value: self.entries.to_string(),
            });
        }
        Ok(())
    }
}
