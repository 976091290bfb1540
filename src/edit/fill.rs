//! Region fill: replace a contiguous same-type area on one level.

use std::collections::{HashSet, VecDeque};

use crate::diagram::block::{BlockInstance, BlockType, Orientation};
use crate::diagram::position::Position;
use crate::diagram::store::BlockStore;
use crate::diagram::transaction::Transaction;

/// Result of a region fill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillOutcome {
    /// Positions written by the fill
    pub filled: usize,
    /// True when the visitation limit stopped the fill early
    pub truncated: bool,
}

/// Build the transaction for a fill starting at `start`.
///
/// Every position reachable from `start` through ±x/±z steps whose type
/// matches the type at `start` is replaced. At most `limit` positions are
/// visited; a region larger than that yields a partial fill.
pub fn fill_transaction(
    store: &BlockStore,
    start: Position,
    new_type: BlockType,
    new_orientation: Orientation,
    limit: usize,
) -> (Transaction, FillOutcome) {
    let source = store.block_at(start).block_type;
    if source.is_air() && new_type.is_air() {
        return (Transaction::new(), FillOutcome::default());
    }

    let mut transaction = Transaction::new();
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::from([start]);
    let mut truncated = false;

    while let Some(pos) = queue.pop_front() {
        if transaction.len() >= limit {
            truncated = true;
            break;
        }

        if new_type.is_air() {
            transaction.clear_block(pos);
        } else {
            transaction.place(BlockInstance::new(new_type, pos, new_orientation));
        }

        for next in pos.horizontal_neighbors() {
            if !visited.contains(&next) && store.block_at(next).block_type == source {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    if truncated {
        log::warn!(
            "Fill from {} stopped after {} positions; region is larger than the fill limit",
            start,
            limit
        );
    }

    let outcome = FillOutcome {
        filled: transaction.len(),
        truncated,
    };
    (transaction, outcome)
}
