//! Transactions: ordered batches of block edits applied atomically.

use std::collections::HashSet;

use crate::core::error::Error;
use crate::core::types::Result;

use super::block::BlockInstance;
use super::position::Position;

/// A single edit inside a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Replace whatever is at `position` with `block`
    Place {
        position: Position,
        block: BlockInstance,
    },
    /// Remove whatever is at `position`
    Remove {
        position: Position,
    },
}

impl Edit {
    /// Position this edit targets.
    pub fn position(&self) -> Position {
        match self {
            Edit::Place { position, .. } | Edit::Remove { position } => *position,
        }
    }

    /// The instance left at the position once applied (None for removals).
    pub fn block(&self) -> Option<&BlockInstance> {
        match self {
            Edit::Place { block, .. } => Some(block),
            Edit::Remove { .. } => None,
        }
    }
}

/// An ordered batch of edits.
///
/// When the same position appears more than once the last edit wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    edits: Vec<Edit>,
}

impl Transaction {
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edits: Vec::with_capacity(capacity),
        }
    }

    /// Queue placing `block` at `position`.
    pub fn set_block(&mut self, position: Position, block: BlockInstance) -> &mut Self {
        self.edits.push(Edit::Place { position, block });
        self
    }

    /// Queue placing `block` at its own position.
    pub fn place(&mut self, block: BlockInstance) -> &mut Self {
        self.set_block(block.position, block)
    }

    /// Queue removal of whatever is at `position`.
    pub fn clear_block(&mut self, position: Position) -> &mut Self {
        self.edits.push(Edit::Remove { position });
        self
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Every position touched by this transaction, deduplicated, in first-seen order.
    pub fn positions(&self) -> Vec<Position> {
        let mut seen = HashSet::with_capacity(self.edits.len());
        self.edits
            .iter()
            .map(Edit::position)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Touched positions plus their face neighbours; the cells a renderer must redraw.
    pub fn touched_with_neighbors(&self) -> HashSet<Position> {
        let mut out = HashSet::with_capacity(self.edits.len() * 7);
        for edit in &self.edits {
            let p = edit.position();
            out.insert(p);
            out.extend(p.neighbors());
        }
        out
    }

    /// Check that every placed instance reports the position it is placed at.
    pub fn validate(&self) -> Result<()> {
        for edit in &self.edits {
            if let Edit::Place { position, block } = edit {
                if block.position != *position {
                    return Err(Error::Consistency(format!(
                        "block at {} placed under key {}",
                        block.position, position
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Extend<Edit> for Transaction {
    fn extend<T: IntoIterator<Item = Edit>>(&mut self, iter: T) {
        self.edits.extend(iter);
    }
}

impl FromIterator<Edit> for Transaction {
    fn from_iter<T: IntoIterator<Item = Edit>>(iter: T) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transaction {
    type Item = &'a Edit;
    type IntoIter = std::slice::Iter<'a, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}
