//! The diagram: block store, ephemeral overlay and transaction engine.
//!
//! Every change goes through a [`Transaction`]. The convenience methods
//! (`set_block`, `fill_blocks`, `draw_line`, ...) build one and commit it;
//! callers can also build their own and call [`Diagram::commit`]. After each
//! commit, change listeners receive the applied transaction.

pub mod block;
pub mod config;
pub mod notify;
pub mod overlay;
pub mod position;
pub mod store;
pub mod transaction;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{Read, Write};

pub use block::{BlockInstance, BlockType, Orientation};
pub use config::{DiagramConfig, ALL_BLOCK_TYPES};
pub use notify::{ChangeNotifier, ListenerId};
pub use overlay::EphemeralOverlay;
pub use position::{Face, Position};
pub use store::BlockStore;
pub use transaction::{Edit, Transaction};

use crate::blocks::oracle::BlockOracle;
use crate::core::types::Result;
use crate::edit::{copy, fill, line, FillOutcome};
use crate::persist::codec;

/// One open document.
pub struct Diagram {
    config: DiagramConfig,
    store: BlockStore,
    ephemeral: EphemeralOverlay,
    changes: ChangeNotifier,
    ephemeral_changes: ChangeNotifier,
    next_listener_id: u64,
    /// Bumped by every non-empty commit and by load
    revision: u64,
    saved_revision: u64,
}

impl Diagram {
    pub fn new() -> Self {
        Self::with_config(DiagramConfig::default())
    }

    pub fn with_config(config: DiagramConfig) -> Self {
        Self {
            config,
            store: BlockStore::new(),
            ephemeral: EphemeralOverlay::new(),
            changes: ChangeNotifier::new(),
            ephemeral_changes: ChangeNotifier::new(),
            next_listener_id: 1,
            revision: 0,
            saved_revision: 0,
        }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Read access to the committed blocks.
    pub fn store(&self) -> &BlockStore {
        &self.store
    }

    // -- Queries ----------------------------------------------------------

    /// Block at `position`; the Air sentinel when empty.
    pub fn block_at(&self, position: Position) -> BlockInstance {
        self.store.block_at(position)
    }

    pub fn block_count(&self) -> usize {
        self.store.block_count()
    }

    pub fn block_counts(&self) -> BTreeMap<BlockType, usize> {
        self.store.block_counts()
    }

    /// Snapshot of the blocks on level `y`, keyed by position.
    pub fn level(&self, y: i32) -> HashMap<Position, BlockInstance> {
        self.store.level(y)
    }

    pub fn levels(&self) -> Vec<i32> {
        self.store.levels()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &BlockInstance)> {
        self.store.iter()
    }

    pub fn ephemeral(&self) -> &EphemeralOverlay {
        &self.ephemeral
    }

    /// Preview blocks currently shown on top of the committed content.
    pub fn ephemeral_blocks(&self) -> impl Iterator<Item = &BlockInstance> {
        self.ephemeral.iter().map(|(_, b)| b)
    }

    pub fn ephemeral_block_at(&self, position: Position) -> Option<BlockInstance> {
        self.ephemeral.get(position).copied()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when there are commits since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub fn mark_saved(&mut self) {
        self.saved_revision = self.revision;
    }

    // -- Listeners --------------------------------------------------------

    /// Register a listener for committed transactions.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Transaction, &dyn BlockOracle) + 'static,
    {
        let id = self.allocate_listener_id();
        self.changes.add(id, Box::new(listener));
        id
    }

    /// Register a listener for ephemeral commits.
    pub fn subscribe_ephemeral<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Transaction, &dyn BlockOracle) + 'static,
    {
        let id = self.allocate_listener_id();
        self.ephemeral_changes.add(id, Box::new(listener));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.changes.remove(id) || self.ephemeral_changes.remove(id)
    }

    fn allocate_listener_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        id
    }

    // -- Transaction engine -----------------------------------------------

    /// Apply `transaction` to the diagram and notify change listeners.
    ///
    /// # Panics
    ///
    /// If any placed instance reports a position other than the one it is
    /// placed at. The convenience methods never build such a transaction;
    /// use [`Transaction::validate`] to check hand-built ones.
    pub fn commit(&mut self, transaction: &Transaction) {
        if let Err(e) = transaction.validate() {
            panic!("{e}");
        }

        self.store.apply(transaction);
        if !transaction.is_empty() {
            self.revision += 1;
        }
        log::debug!(
            "Committed {} edits, {} blocks (revision {})",
            transaction.len(),
            self.store.block_count(),
            self.revision
        );

        let mut changes = std::mem::take(&mut self.changes);
        changes.notify(transaction, &*self);
        self.changes = changes;
    }

    /// Replace the ephemeral overlay with `transaction` and notify ephemeral listeners.
    ///
    /// # Panics
    ///
    /// Under the same condition as [`commit`](Self::commit).
    pub fn commit_ephemeral(&mut self, transaction: &Transaction) {
        if let Err(e) = transaction.validate() {
            panic!("{e}");
        }

        self.ephemeral.replace_with(transaction);
        log::trace!("Ephemeral commit: {} preview blocks", self.ephemeral.len());

        let mut changes = std::mem::take(&mut self.ephemeral_changes);
        changes.notify(transaction, &*self);
        self.ephemeral_changes = changes;
    }

    /// Drop all preview blocks.
    pub fn clear_ephemeral(&mut self) {
        self.commit_ephemeral(&Transaction::new());
    }

    // -- Convenience edits ------------------------------------------------

    /// Replace whatever is at `position` with `block`.
    ///
    /// # Panics
    ///
    /// If `block.position != position`.
    pub fn set_block(&mut self, position: Position, block: BlockInstance) {
        assert_eq!(
            block.position, position,
            "set_block: instance position must match the target position"
        );
        let mut transaction = Transaction::with_capacity(1);
        transaction.set_block(position, block);
        self.commit(&transaction);
    }

    pub fn clear_block(&mut self, position: Position) {
        let mut transaction = Transaction::with_capacity(1);
        transaction.clear_block(position);
        self.commit(&transaction);
    }

    /// Flood-fill the same-type area around `start` on its level.
    pub fn fill_blocks(
        &mut self,
        start: Position,
        new_type: BlockType,
        new_orientation: Orientation,
    ) -> FillOutcome {
        let (transaction, outcome) = fill::fill_transaction(
            &self.store,
            start,
            new_type,
            new_orientation,
            self.config.fill_limit,
        );
        if !transaction.is_empty() {
            self.commit(&transaction);
        }
        outcome
    }

    /// Place a one-cell-thick line of blocks. Returns the number of cells written.
    pub fn draw_line(
        &mut self,
        start: Position,
        end: Position,
        block_type: BlockType,
        orientation: Orientation,
    ) -> usize {
        let transaction =
            line::line_transaction(start, end, block_type, orientation, self.config.line_limit);
        let written = transaction.len();
        if written > 0 {
            self.commit(&transaction);
        }
        written
    }

    /// Copy every block on level `source` onto level `dest`. Returns the number copied.
    pub fn copy_level(&mut self, source: i32, dest: i32) -> usize {
        let transaction = copy::copy_level_transaction(&self.store, source, dest);
        let copied = transaction.len();
        if copied > 0 {
            self.commit(&transaction);
        }
        copied
    }

    // -- Persistence ------------------------------------------------------

    /// Write the committed blocks to `writer`. The overlay is not saved.
    pub fn save(&self, writer: &mut impl Write) -> Result<usize> {
        let count = codec::save(&self.store, writer)?;
        log::info!("Saved diagram: {} blocks", count);
        Ok(count)
    }

    /// Replace the diagram's content with the blocks read from `reader`.
    ///
    /// On any error the current content is left untouched. On success,
    /// change listeners receive a transaction that removes every old block
    /// and places every loaded one.
    pub fn load(&mut self, reader: &mut impl Read) -> Result<usize> {
        let loaded = codec::load(reader, &self.config)?;

        let kept: HashSet<Position> = loaded.iter().map(|(p, _)| *p).collect();
        let mut transaction = Transaction::with_capacity(self.store.block_count() + loaded.block_count());
        for (pos, _) in self.store.iter() {
            if !kept.contains(pos) {
                transaction.clear_block(*pos);
            }
        }
        for block in loaded.sorted() {
            transaction.place(block);
        }

        let count = loaded.block_count();
        self.store.replace(loaded);
        self.revision += 1;
        self.saved_revision = self.revision;
        log::info!("Loaded diagram: {} blocks on {} levels", count, self.store.levels().len());

        let mut changes = std::mem::take(&mut self.changes);
        changes.notify(&transaction, &*self);
        self.changes = changes;
        Ok(count)
    }
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockOracle for Diagram {
    fn block_at(&self, position: Position) -> BlockInstance {
        self.store.block_at(position)
    }
}

impl std::fmt::Debug for Diagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagram")
            .field("blocks", &self.store.block_count())
            .field("ephemeral", &self.ephemeral.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use std::cell::RefCell;
    use std::rc::Rc;

    const STONE: BlockType = BlockType(1);
    const PLANKS: BlockType = BlockType(5);
    const WOOL: BlockType = BlockType(35);

    fn stone(x: i32, y: i32, z: i32) -> BlockInstance {
        BlockInstance::new(STONE, Position::new(x, y, z), Orientation::None)
    }

    fn put(diagram: &mut Diagram, block: BlockInstance) {
        diagram.set_block(block.position, block);
    }

    #[test]
    fn test_untouched_positions_are_air() {
        let diagram = Diagram::new();
        for p in [Position::ORIGIN, Position::new(-100, 64, 3), Position::new(i32::MAX, 0, i32::MIN)] {
            let b = diagram.block_at(p);
            assert_eq!(b.block_type, BlockType::AIR);
            assert_eq!(b.position, p);
        }
    }

    #[test]
    fn test_set_block_counts() {
        let mut diagram = Diagram::new();
        let p = Position::new(1, 2, 3);

        put(&mut diagram, stone(1, 2, 3));
        assert_eq!(diagram.block_at(p).block_type, STONE);
        assert_eq!(diagram.block_count(), 1);

        // Replacing does not change the count
        put(&mut diagram, BlockInstance::new(PLANKS, p, Orientation::None));
        assert_eq!(diagram.block_at(p).block_type, PLANKS);
        assert_eq!(diagram.block_count(), 1);
    }

    #[test]
    fn test_clear_block() {
        let mut diagram = Diagram::new();
        put(&mut diagram, stone(0, 0, 0));
        put(&mut diagram, stone(1, 0, 0));

        diagram.clear_block(Position::ORIGIN);
        assert_eq!(diagram.block_count(), 1);
        assert!(diagram.block_at(Position::ORIGIN).is_air());

        // Clearing an empty cell changes nothing
        diagram.clear_block(Position::ORIGIN);
        assert_eq!(diagram.block_count(), 1);
    }

    #[test]
    #[should_panic(expected = "position must match")]
    fn test_set_block_position_mismatch_panics() {
        let mut diagram = Diagram::new();
        diagram.set_block(Position::ORIGIN, stone(1, 1, 1));
    }

    #[test]
    #[should_panic(expected = "Consistency violation")]
    fn test_commit_rejects_mismatched_transaction() {
        let mut diagram = Diagram::new();
        let mut tx = Transaction::new();
        tx.place(stone(0, 0, 0)).set_block(Position::ORIGIN, stone(9, 9, 9));
        diagram.commit(&tx);
    }

    #[test]
    fn test_invalid_transaction_leaves_store_untouched() {
        let mut diagram = Diagram::new();
        let mut tx = Transaction::new();
        tx.place(stone(0, 0, 0)).set_block(Position::ORIGIN, stone(9, 9, 9));
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| diagram.commit(&tx)));
        assert!(result.is_err());
        assert_eq!(diagram.block_count(), 0);
    }

    #[test]
    fn test_level_matches_entries() {
        let mut diagram = Diagram::new();
        let mut tx = Transaction::new();
        for i in 0..20 {
            tx.place(stone(i, i % 4, -i));
        }
        diagram.commit(&tx);
        diagram.clear_block(Position::new(4, 0, -4));

        for y in -1..5 {
            let level = diagram.level(y);
            let expected: HashMap<Position, BlockInstance> = diagram
                .store()
                .iter()
                .filter(|(p, _)| p.y == y)
                .map(|(p, b)| (*p, *b))
                .collect();
            assert_eq!(level, expected, "level {y}");
        }
        assert_eq!(diagram.levels(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_block_counts_sum() {
        let mut diagram = Diagram::new();
        diagram.draw_line(Position::new(0, 0, 0), Position::new(9, 0, 0), STONE, Orientation::None);
        diagram.draw_line(Position::new(0, 1, 0), Position::new(0, 1, 4), PLANKS, Orientation::None);
        let counts = diagram.block_counts();
        assert_eq!(counts[&STONE], 10);
        assert_eq!(counts[&PLANKS], 5);
        assert_eq!(counts.values().sum::<usize>(), diagram.block_count());
    }

    #[test]
    fn test_listeners_see_whole_transaction() {
        let mut diagram = Diagram::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in = Rc::clone(&seen);
        diagram.subscribe(move |tx, oracle| {
            // Every edit is already applied when the listener runs
            let all_applied = tx.edits().iter().all(|e| match e.block() {
                Some(b) => oracle.block_at(e.position()) == *b,
                None => oracle.block_at(e.position()).is_air(),
            });
            seen_in.borrow_mut().push((tx.len(), all_applied));
        });

        diagram.draw_line(Position::ORIGIN, Position::new(5, 0, 0), STONE, Orientation::None);
        diagram.clear_block(Position::ORIGIN);
        assert_eq!(*seen.borrow(), vec![(6, true), (1, true)]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut diagram = Diagram::new();
        let hits = Rc::new(RefCell::new(0));
        let hits_in = Rc::clone(&hits);
        let id = diagram.subscribe(move |_, _| *hits_in.borrow_mut() += 1);

        put(&mut diagram, stone(0, 0, 0));
        assert!(diagram.unsubscribe(id));
        put(&mut diagram, stone(1, 0, 0));
        assert_eq!(*hits.borrow(), 1);
        assert!(!diagram.unsubscribe(id));
    }

    #[test]
    fn test_shared_diagram_cannot_reenter_commit() {
        let diagram = Rc::new(RefCell::new(Diagram::new()));
        let reentered = Rc::new(RefCell::new(None));

        let weak = Rc::downgrade(&diagram);
        let reentered_in = Rc::clone(&reentered);
        diagram.borrow_mut().subscribe(move |_, _| {
            if let Some(d) = weak.upgrade() {
                *reentered_in.borrow_mut() = Some(d.try_borrow_mut().is_ok());
            }
        });

        diagram.borrow_mut().set_block(Position::ORIGIN, stone(0, 0, 0));
        assert_eq!(*reentered.borrow(), Some(false));
    }

    #[test]
    fn test_ephemeral_is_isolated() {
        let mut diagram = Diagram::new();
        put(&mut diagram, stone(0, 0, 0));
        let before_bytes = {
            let mut buf = Vec::new();
            diagram.save(&mut buf).unwrap();
            buf
        };
        let before_counts = diagram.block_counts();
        let before_level = diagram.level(0);
        let before_revision = diagram.revision();

        let hits = Rc::new(RefCell::new(0));
        let hits_in = Rc::clone(&hits);
        diagram.subscribe(move |_, _| *hits_in.borrow_mut() += 1);
        let previews = Rc::new(RefCell::new(0));
        let previews_in = Rc::clone(&previews);
        diagram.subscribe_ephemeral(move |_, _| *previews_in.borrow_mut() += 1);

        let mut preview = Transaction::new();
        preview.place(stone(1, 0, 0)).place(BlockInstance::new(WOOL, Position::new(0, 0, 1), Orientation::None));
        diagram.commit_ephemeral(&preview);

        assert_eq!(diagram.ephemeral().len(), 2);
        assert!(diagram.ephemeral_block_at(Position::new(1, 0, 0)).is_some());
        assert_eq!(diagram.block_count(), 1);
        assert_eq!(diagram.block_counts(), before_counts);
        assert_eq!(diagram.level(0), before_level);
        assert_eq!(diagram.revision(), before_revision);
        let mut after_bytes = Vec::new();
        diagram.save(&mut after_bytes).unwrap();
        assert_eq!(after_bytes, before_bytes);
        assert_eq!((*hits.borrow(), *previews.borrow()), (0, 1));

        let mut shown: Vec<_> = diagram.ephemeral_blocks().map(|b| b.block_type).collect();
        shown.sort();
        assert_eq!(shown, vec![STONE, WOOL]);

        diagram.clear_ephemeral();
        assert!(diagram.ephemeral().is_empty());
        assert_eq!(*previews.borrow(), 2);
    }

    #[test]
    fn test_fill_blocks_commits_once() {
        let mut diagram = Diagram::new();
        let mut tx = Transaction::new();
        for x in 0..5 {
            for z in 0..5 {
                tx.place(stone(x, 0, z));
            }
        }
        diagram.commit(&tx);

        let commits = Rc::new(RefCell::new(Vec::new()));
        let commits_in = Rc::clone(&commits);
        diagram.subscribe(move |tx, _| commits_in.borrow_mut().push(tx.len()));

        let outcome = diagram.fill_blocks(Position::new(2, 0, 2), WOOL, Orientation::None);
        assert_eq!(outcome, FillOutcome { filled: 25, truncated: false });
        assert_eq!(*commits.borrow(), vec![25]);
        assert_eq!(diagram.block_counts()[&WOOL], 25);
        assert!(!diagram.block_counts().contains_key(&STONE));
    }

    #[test]
    fn test_fill_cap_is_partial_not_error() {
        crate::core::logging::try_init();
        let mut diagram = Diagram::with_config(DiagramConfig::default().with_fill_limit(64));
        let outcome = diagram.fill_blocks(Position::ORIGIN, STONE, Orientation::None);
        assert!(outcome.truncated);
        assert_eq!(diagram.block_count(), 64);
        assert_eq!(diagram.level(0).len(), 64);
    }

    #[test]
    fn test_draw_line() {
        let mut diagram = Diagram::new();
        let written = diagram.draw_line(Position::new(0, 0, 0), Position::new(5, 0, 0), STONE, Orientation::North);
        assert_eq!(written, 6);
        assert_eq!(diagram.block_count(), 6);
        for x in 0..=5 {
            let b = diagram.block_at(Position::new(x, 0, 0));
            assert_eq!(b.block_type, STONE);
            assert_eq!(b.orientation, Orientation::North);
        }
    }

    #[test]
    fn test_copy_level_merges() {
        let mut diagram = Diagram::new();
        put(&mut diagram, stone(0, 0, 0));
        put(&mut diagram, stone(1, 0, 0));
        put(&mut diagram, stone(2, 0, 5));
        // Existing block on dest, different column
        put(&mut diagram, BlockInstance::new(PLANKS, Position::new(7, 3, 7), Orientation::None));
        // Existing block on dest, same column as a copied block
        put(&mut diagram, BlockInstance::new(PLANKS, Position::new(0, 3, 0), Orientation::None));
        let source_before = diagram.level(0);

        assert_eq!(diagram.copy_level(0, 3), 3);

        let dest = diagram.level(3);
        assert_eq!(dest.len(), 4);
        for (p, b) in &source_before {
            let copied = dest[&p.with_y(3)];
            assert_eq!(copied.block_type, b.block_type);
            assert_eq!(copied.position.y, 3);
        }
        assert_eq!(dest[&Position::new(7, 3, 7)].block_type, PLANKS);
        assert_eq!(diagram.level(0), source_before);
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut diagram = Diagram::new();
        diagram.draw_line(Position::new(-3, 0, 0), Position::new(3, 2, 9), STONE, Orientation::Up);
        put(&mut diagram, BlockInstance::new(WOOL, Position::new(10, -1, 10), Orientation::West));
        let mut preview = Transaction::new();
        preview.place(stone(50, 50, 50));
        diagram.commit_ephemeral(&preview);

        let mut bytes = Vec::new();
        let saved = diagram.save(&mut bytes).unwrap();
        assert_eq!(saved, diagram.block_count());

        let mut restored = Diagram::new();
        let loaded = restored.load(&mut bytes.as_slice()).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(restored.store().sorted(), diagram.store().sorted());
        assert!(restored.block_at(Position::new(50, 50, 50)).is_air());
        assert!(!restored.is_modified());
    }

    #[test]
    fn test_round_trip_high_type_id_default_config() {
        let mut diagram = Diagram::new();
        let p = Position::new(2, 1, -3);
        put(&mut diagram, BlockInstance::new(BlockType(300), p, Orientation::None));
        let mut bytes = Vec::new();
        assert_eq!(diagram.save(&mut bytes).unwrap(), 1);

        let mut restored = Diagram::new();
        assert_eq!(restored.load(&mut bytes.as_slice()).unwrap(), 1);
        assert_eq!(restored.block_at(p).block_type, BlockType(300));
        assert_eq!(restored.store().sorted(), diagram.store().sorted());
    }

    #[test]
    fn test_round_trip_empty_and_single() {
        for blocks in [vec![], vec![stone(4, 4, 4)]] {
            let mut diagram = Diagram::new();
            for b in &blocks {
                put(&mut diagram, *b);
            }
            let mut bytes = Vec::new();
            diagram.save(&mut bytes).unwrap();

            let mut restored = Diagram::new();
            restored.load(&mut bytes.as_slice()).unwrap();
            assert_eq!(restored.store().sorted(), blocks);
        }
    }

    #[test]
    fn test_failed_load_keeps_content() {
        crate::core::logging::try_init();
        let mut diagram = Diagram::new();
        put(&mut diagram, stone(0, 0, 0));
        put(&mut diagram, stone(0, 1, 0));
        let before = diagram.store().sorted();

        let mut bytes = 7u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        let err = diagram.load(&mut bytes.as_slice()).unwrap_err();
        assert!(matches!(err, Error::Format(_)));
        assert_eq!(diagram.store().sorted(), before);
        assert_eq!(diagram.level(1).len(), 1);
    }

    #[test]
    fn test_load_notifies_replacement() {
        let mut source = Diagram::new();
        put(&mut source, stone(1, 0, 0));
        let mut bytes = Vec::new();
        source.save(&mut bytes).unwrap();

        let mut diagram = Diagram::new();
        put(&mut diagram, stone(0, 0, 0));
        let seen = Rc::new(RefCell::new(None));
        let seen_in = Rc::clone(&seen);
        diagram.subscribe(move |tx, _| *seen_in.borrow_mut() = Some(tx.clone()));

        diagram.load(&mut bytes.as_slice()).unwrap();
        let tx = seen.borrow().clone().unwrap();
        assert_eq!(
            tx.edits(),
            &[
                Edit::Remove { position: Position::ORIGIN },
                Edit::Place { position: Position::new(1, 0, 0), block: stone(1, 0, 0) },
            ]
        );
    }

    #[test]
    fn test_modified_tracking() {
        let mut diagram = Diagram::new();
        assert!(!diagram.is_modified());
        put(&mut diagram, stone(0, 0, 0));
        assert!(diagram.is_modified());
        diagram.mark_saved();
        assert!(!diagram.is_modified());
        diagram.commit(&Transaction::new());
        assert!(!diagram.is_modified());
    }
}
