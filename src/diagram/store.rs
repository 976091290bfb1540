//! Authoritative sparse block map with its per-level index.

use std::collections::{BTreeMap, HashMap};

use super::block::{BlockInstance, BlockType};
use super::position::Position;
use super::transaction::{Edit, Transaction};

/// Sparse map from position to placed block, plus a grouping by level (y).
///
/// The level index is derived state: it always holds exactly the primary
/// entries whose `y` equals the level, and is only ever updated alongside
/// the primary map.
#[derive(Clone, Debug, Default)]
pub struct BlockStore {
    /// All non-Air blocks, by position
    blocks: HashMap<Position, BlockInstance>,
    /// Index: level -> blocks on that level
    levels: HashMap<i32, HashMap<Position, BlockInstance>>,
}

impl BlockStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from decoded blocks, rebuilding the level index.
    ///
    /// Air entries are dropped.
    ///
    /// # Panics
    ///
    /// If a block is keyed under a position other than its own.
    pub(crate) fn from_blocks(mut blocks: HashMap<Position, BlockInstance>) -> Self {
        blocks.retain(|_, block| !block.is_air());
        let mut levels: HashMap<i32, HashMap<Position, BlockInstance>> = HashMap::new();
        for (pos, block) in &blocks {
            assert_eq!(
                *pos, block.position,
                "from_blocks: block at {} keyed under {}",
                block.position, pos
            );
            levels.entry(pos.y).or_default().insert(*pos, *block);
        }
        Self { blocks, levels }
    }

    /// Block at `position`, or the Air sentinel for empty cells.
    pub fn block_at(&self, position: Position) -> BlockInstance {
        self.blocks
            .get(&position)
            .copied()
            .unwrap_or_else(|| BlockInstance::air(position))
    }

    pub fn get(&self, position: Position) -> Option<&BlockInstance> {
        self.blocks.get(&position)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.blocks.contains_key(&position)
    }

    /// Number of non-Air blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Per-type counts; values sum to [`block_count`](Self::block_count).
    pub fn block_counts(&self) -> BTreeMap<BlockType, usize> {
        let mut counts = BTreeMap::new();
        for block in self.blocks.values() {
            *counts.entry(block.block_type).or_insert(0) += 1;
        }
        counts
    }

    /// Snapshot of the blocks on level `y`.
    pub fn level(&self, y: i32) -> HashMap<Position, BlockInstance> {
        self.levels.get(&y).cloned().unwrap_or_default()
    }

    /// Number of blocks on level `y`, without copying the level.
    pub fn level_len(&self, y: i32) -> usize {
        self.levels.get(&y).map_or(0, HashMap::len)
    }

    /// Occupied levels in ascending order.
    pub fn levels(&self) -> Vec<i32> {
        let mut out: Vec<i32> = self.levels.keys().copied().collect();
        out.sort_unstable();
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Position, &BlockInstance)> {
        self.blocks.iter()
    }

    /// Blocks in canonical `(y, x, z)` order.
    pub fn sorted(&self) -> Vec<BlockInstance> {
        let mut out: Vec<BlockInstance> = self.blocks.values().copied().collect();
        out.sort_unstable_by_key(|b| b.position);
        out
    }

    /// Apply every edit of a transaction in order.
    ///
    /// Callers validate the transaction first; see [`Transaction::validate`].
    pub(crate) fn apply(&mut self, transaction: &Transaction) {
        for edit in transaction {
            self.apply_edit(edit);
        }
    }

    /// Apply one edit to both the primary map and the level index.
    pub(crate) fn apply_edit(&mut self, edit: &Edit) {
        match *edit {
            Edit::Place { position, block } if !block.is_air() => self.insert(position, block),
            Edit::Place { position, .. } | Edit::Remove { position } => self.remove(position),
        }
    }

    fn insert(&mut self, position: Position, block: BlockInstance) {
        if let Some(prev) = self.blocks.insert(position, block) {
            if prev.position.y != position.y {
                self.remove_from_level(prev.position.y, position);
            }
        }
        self.levels.entry(position.y).or_default().insert(position, block);
    }

    fn remove(&mut self, position: Position) {
        if self.blocks.remove(&position).is_some() {
            self.remove_from_level(position.y, position);
        }
    }

    fn remove_from_level(&mut self, y: i32, position: Position) {
        if let Some(bucket) = self.levels.get_mut(&y) {
            bucket.remove(&position);
            if bucket.is_empty() {
                self.levels.remove(&y);
            }
        }
    }

    /// Replace all content at once.
    pub(crate) fn replace(&mut self, other: BlockStore) {
        *self = other;
    }

    /// True when the level index matches the primary map exactly.
    #[cfg(test)]
    pub(crate) fn index_consistent(&self) -> bool {
        let indexed: usize = self.levels.values().map(HashMap::len).sum();
        indexed == self.blocks.len()
            && self.levels.iter().all(|(y, bucket)| {
                !bucket.is_empty()
                    && bucket.iter().all(|(p, b)| {
                        p.y == *y && b.position == *p && self.blocks.get(p) == Some(b)
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::block::Orientation;

    fn block(t: u16, x: i32, y: i32, z: i32) -> BlockInstance {
        BlockInstance::new(BlockType(t), Position::new(x, y, z), Orientation::None)
    }

    #[test]
    fn test_empty_store_returns_air() {
        let store = BlockStore::new();
        let p = Position::new(-7, 3, 12);
        let b = store.block_at(p);
        assert!(b.is_air());
        assert_eq!(b.position, p);
        assert_eq!(store.block_count(), 0);
        assert!(store.levels().is_empty());
    }

    #[test]
    fn test_place_and_replace_keeps_index() {
        let mut store = BlockStore::new();
        let mut tx = Transaction::new();
        tx.place(block(1, 0, 0, 0))
            .place(block(2, 1, 0, 0))
            .place(block(3, 0, 5, 0))
            .place(block(4, 0, 0, 0));
        store.apply(&tx);

        assert_eq!(store.block_count(), 3);
        assert_eq!(store.block_at(Position::ORIGIN).block_type, BlockType(4));
        assert_eq!(store.level(0).len(), 2);
        assert_eq!(store.level(5).len(), 1);
        assert_eq!(store.levels(), vec![0, 5]);
        assert!(store.index_consistent());
    }

    #[test]
    fn test_remove_drops_empty_level() {
        let mut store = BlockStore::new();
        let mut tx = Transaction::new();
        tx.place(block(1, 0, 2, 0));
        store.apply(&tx);

        let mut tx = Transaction::new();
        tx.clear_block(Position::new(0, 2, 0))
            .clear_block(Position::new(9, 9, 9));
        store.apply(&tx);

        assert!(store.is_empty());
        assert!(store.level(2).is_empty());
        assert!(store.levels().is_empty());
        assert!(store.index_consistent());
    }

    #[test]
    fn test_placing_air_removes() {
        let mut store = BlockStore::new();
        let p = Position::new(3, 3, 3);
        let mut tx = Transaction::new();
        tx.place(block(7, 3, 3, 3)).place(BlockInstance::air(p));
        store.apply(&tx);
        assert!(!store.contains(p));
        assert!(store.index_consistent());
    }

    #[test]
    fn test_counts_sum_to_total() {
        let mut store = BlockStore::new();
        let mut tx = Transaction::new();
        for i in 0..30 {
            tx.place(block((i % 4 + 1) as u16, i, i % 3, 0));
        }
        store.apply(&tx);
        let counts = store.block_counts();
        assert_eq!(counts.values().sum::<usize>(), store.block_count());
        assert_eq!(counts[&BlockType(1)], 8);
        assert!(!counts.contains_key(&BlockType::AIR));
    }

    #[test]
    fn test_from_blocks_rebuilds_levels() {
        let blocks: HashMap<Position, BlockInstance> = (0..10)
            .map(|i| {
                let b = block(1, i, i % 2, -i);
                (b.position, b)
            })
            .collect();
        let store = BlockStore::from_blocks(blocks);
        assert_eq!(store.level_len(0), 5);
        assert_eq!(store.level_len(1), 5);
        assert!(store.index_consistent());
    }

    #[test]
    fn test_from_blocks_drops_air() {
        let mut blocks = HashMap::new();
        let air = BlockInstance::air(Position::new(3, 0, 3));
        blocks.insert(air.position, air);
        let b = block(2, 0, 0, 0);
        blocks.insert(b.position, b);

        let store = BlockStore::from_blocks(blocks);
        assert_eq!(store.block_count(), 1);
        assert_eq!(store.level_len(0), 1);
        assert!(!store.contains(air.position));
        assert!(store.index_consistent());
    }

    #[test]
    #[should_panic(expected = "keyed under")]
    fn test_from_blocks_rejects_mismatched_key() {
        let mut blocks = HashMap::new();
        blocks.insert(Position::ORIGIN, block(1, 4, 4, 4));
        BlockStore::from_blocks(blocks);
    }

    #[test]
    fn test_sorted_is_canonical() {
        let mut store = BlockStore::new();
        let mut tx = Transaction::new();
        tx.place(block(1, 5, 1, 0))
            .place(block(1, 0, 0, 9))
            .place(block(1, 0, 0, -9))
            .place(block(1, -5, 1, 0));
        store.apply(&tx);
        let order: Vec<Position> = store.sorted().iter().map(|b| b.position).collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 0, -9),
                Position::new(0, 0, 9),
                Position::new(-5, 1, 0),
                Position::new(5, 1, 0),
            ]
        );
    }
}
