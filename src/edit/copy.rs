//! Level copy: duplicate one level's blocks onto another.

use crate::diagram::store::BlockStore;
use crate::diagram::transaction::Transaction;

/// Build the transaction copying every block on level `source` to level `dest`.
///
/// Blocks already on `dest` whose column is not covered by the copy stay.
/// Copying a level onto itself yields an empty transaction.
pub fn copy_level_transaction(store: &BlockStore, source: i32, dest: i32) -> Transaction {
    if source == dest {
        return Transaction::new();
    }

    let mut blocks: Vec<_> = store.level(source).into_values().collect();
    blocks.sort_unstable_by_key(|b| b.position);

    let mut transaction = Transaction::with_capacity(blocks.len());
    for block in blocks {
        transaction.place(block.moved_to(block.position.with_y(dest)));
    }
    transaction
}
