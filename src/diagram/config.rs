//! Diagram configuration.

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;

/// Type limit admitting every id a `BlockType` can hold.
pub const ALL_BLOCK_TYPES: u32 = u16::MAX as u32 + 1;

/// Limits and validation ranges for a diagram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Maximum positions a region fill visits before stopping early.
    pub fill_limit: usize,
    /// Maximum cells a single line placement emits.
    pub line_limit: usize,
    /// Block type ids at or above this value are rejected on load.
    /// The default admits every `u16` id; a registry narrows it.
    pub block_type_limit: u32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            fill_limit: 100_000,
            line_limit: 100_000,
            block_type_limit: ALL_BLOCK_TYPES,
        }
    }
}

impl DiagramConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of known block types, usually `BlockRegistry::len()`.
    pub fn with_block_type_limit(mut self, limit: u32) -> Self {
        self.block_type_limit = limit;
        self
    }

    pub fn with_fill_limit(mut self, limit: usize) -> Self {
        self.fill_limit = limit;
        self
    }

    pub fn with_line_limit(mut self, limit: usize) -> Self {
        self.line_limit = limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.block_type_limit == 0 {
            return Err(Error::Config("block_type_limit must allow at least Air".into()));
        }
        Ok(())
    }
}
