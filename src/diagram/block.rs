//! Block types, orientations and placed block instances.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Block type identifier. Index into the block metadata registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(pub u16);

impl BlockType {
    /// Absence of a block
    pub const AIR: BlockType = BlockType(0);

    pub fn is_air(self) -> bool {
        self == Self::AIR
    }

    pub fn id(self) -> u16 {
        self.0
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Facing of a placed block.
///
/// Which facings are legal depends on the block type and is decided by the
/// metadata registry; the store accepts any of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Orientation {
    #[default]
    None = 0,
    North = 1,
    East = 2,
    South = 3,
    West = 4,
    Up = 5,
    Down = 6,
}

impl Orientation {
    pub const ALL: [Orientation; 7] = [
        Orientation::None,
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
        Orientation::Up,
        Orientation::Down,
    ];

    /// Stable id used by the persisted format.
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }
}

/// A block placed at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockInstance {
    pub block_type: BlockType,
    pub position: Position,
    pub orientation: Orientation,
}

impl BlockInstance {
    pub fn new(block_type: BlockType, position: Position, orientation: Orientation) -> Self {
        Self {
            block_type,
            position,
            orientation,
        }
    }

    /// The Air sentinel returned for empty cells.
    pub fn air(position: Position) -> Self {
        Self::new(BlockType::AIR, position, Orientation::None)
    }

    pub fn is_air(&self) -> bool {
        self.block_type.is_air()
    }

    /// Copy of this instance moved to another position.
    pub fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }
}
