//! Read-only block lookup and face culling.

use crate::diagram::block::BlockInstance;
use crate::diagram::position::{Face, Position};
use crate::diagram::store::BlockStore;

use super::registry::{BlockRegistry, Geometry};

/// Anything that can answer "what block is at this position".
///
/// Implementations never fail: empty cells report the Air sentinel.
pub trait BlockOracle {
    fn block_at(&self, position: Position) -> BlockInstance;
}

impl BlockOracle for BlockStore {
    fn block_at(&self, position: Position) -> BlockInstance {
        BlockStore::block_at(self, position)
    }
}

/// Whether the given face of the block at `position` should be drawn.
///
/// Only full cubes and slabs are culled. Their faces are hidden behind a
/// neighbouring opaque cube, or behind a transparent cube of the same type.
pub fn face_visible(
    oracle: &dyn BlockOracle,
    registry: &BlockRegistry,
    position: Position,
    face: Face,
) -> bool {
    let block = oracle.block_at(position);
    if block.is_air() {
        return false;
    }

    let geometry = registry.geometry(block.block_type);
    if geometry != Geometry::Cube && geometry != Geometry::Slab {
        return true;
    }

    let other = oracle.block_at(position.neighbor(face));
    if other.is_air() || registry.geometry(other.block_type) != Geometry::Cube {
        return true;
    }
    registry.is_transparent(other.block_type) && other.block_type != block.block_type
}

/// Faces of the block at `position` that should be drawn.
pub fn visible_faces(
    oracle: &dyn BlockOracle,
    registry: &BlockRegistry,
    position: Position,
) -> Vec<Face> {
    Face::ALL
        .into_iter()
        .filter(|face| face_visible(oracle, registry, position, *face))
        .collect()
}
