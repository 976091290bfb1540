//! Ephemeral overlay - transient preview blocks.

use std::collections::HashMap;

use super::block::BlockInstance;
use super::position::Position;
use super::transaction::{Edit, Transaction};

/// Preview blocks drawn on top of the diagram.
///
/// Never counted and never saved. Each ephemeral commit replaces the whole
/// overlay.
#[derive(Clone, Debug, Default)]
pub struct EphemeralOverlay {
    blocks: HashMap<Position, BlockInstance>,
}

impl EphemeralOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the overlay, then apply `transaction` to it.
    pub(crate) fn replace_with(&mut self, transaction: &Transaction) {
        self.blocks.clear();
        for edit in transaction {
            match *edit {
                Edit::Place { position, block } if !block.is_air() => {
                    self.blocks.insert(position, block);
                }
                Edit::Place { position, .. } | Edit::Remove { position } => {
                    self.blocks.remove(&position);
                }
            }
        }
    }

    pub fn get(&self, position: Position) -> Option<&BlockInstance> {
        self.blocks.get(&position)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &BlockInstance)> {
        self.blocks.iter()
    }
}
