//! Line placement: one-cell-thick 3D Bresenham lines.

use glam::I64Vec3;

use crate::core::types::IVec3;
use crate::diagram::block::{BlockInstance, BlockType, Orientation};
use crate::diagram::position::Position;
use crate::diagram::transaction::Transaction;

/// Cells of the line from `start` to `end`, both included.
///
/// Steps one cell along the axis of greatest extent per iteration and
/// advances the two minor axes when their error terms turn positive. The
/// loop count is fixed up front (`max |delta| + 1` cells), so every finite
/// input terminates. At most `limit` cells are returned; the second value is
/// true when the line was cut short.
pub fn line_positions(start: Position, end: Position, limit: usize) -> (Vec<Position>, bool) {
    let from = IVec3::from(start).as_i64vec3();
    let delta = IVec3::from(end).as_i64vec3() - from;
    let extent = delta.abs();
    let step = delta.signum();

    let major = if extent.x >= extent.y && extent.x >= extent.z {
        0
    } else if extent.y >= extent.z {
        1
    } else {
        2
    };
    let minors = [(major + 1) % 3, (major + 2) % 3];
    let steps = extent[major];

    let total = (steps as u64).saturating_add(1);
    let count = total.min(limit as u64) as usize;
    let truncated = (count as u64) < total;

    let mut error = I64Vec3::ZERO;
    for axis in minors {
        error[axis] = 2 * extent[axis] - extent[major];
    }

    let mut cursor = from;
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(Position::new(cursor.x as i32, cursor.y as i32, cursor.z as i32));
        if i as i64 == steps {
            break;
        }
        for axis in minors {
            if error[axis] > 0 {
                cursor[axis] += step[axis];
                error[axis] -= 2 * extent[major];
            }
            error[axis] += 2 * extent[axis];
        }
        cursor[major] += step[major];
    }

    if truncated {
        log::warn!(
            "Line from {} to {} needs {} cells, stopped at the line limit of {}",
            start,
            end,
            total,
            limit
        );
    }
    (out, truncated)
}

/// Build the transaction placing `block_type` along the line.
pub fn line_transaction(
    start: Position,
    end: Position,
    block_type: BlockType,
    orientation: Orientation,
    limit: usize,
) -> Transaction {
    let (cells, _) = line_positions(start, end, limit);
    let mut transaction = Transaction::with_capacity(cells.len());
    for pos in cells {
        if block_type.is_air() {
            transaction.clear_block(pos);
        } else {
            transaction.place(BlockInstance::new(block_type, pos, orientation));
        }
    }
    transaction
}
