//! Versioned binary diagram format.
//!
//! Layout, little-endian:
//!
//! ```text
//! [version: u32][count: u32][count x record]
//! record = [x: i32][y: i32][z: i32][type: u16][orientation: u8]
//! ```
//!
//! Records are written in `(y, x, z)` order so identical content always
//! produces identical bytes.

use std::collections::HashMap;
use std::io::{self, Read, Write};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::diagram::block::{BlockInstance, BlockType, Orientation};
use crate::diagram::config::DiagramConfig;
use crate::diagram::position::Position;
use crate::diagram::store::BlockStore;

pub const FORMAT_VERSION: u32 = 1;

/// Bytes per block record.
pub const RECORD_SIZE: usize = 15;

const HEADER_SIZE: usize = 8;

/// Upper bound on up-front allocation driven by the declared record count.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Write every block of `store` to `writer`. Returns the number of records.
pub fn save(store: &BlockStore, writer: &mut impl Write) -> Result<usize> {
    let blocks = store.sorted();
    let count = u32::try_from(blocks.len())
        .map_err(|_| Error::Format(format!("{} blocks exceed the record count field", blocks.len())))?;

    writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
    writer.write_all(&count.to_le_bytes())?;
    for block in &blocks {
        write_record(writer, block)?;
    }
    writer.flush()?;

    log::debug!("Saved {} blocks", count);
    Ok(blocks.len())
}

/// Read a complete store from `reader`.
///
/// Nothing is returned unless every record decoded and validated, so a
/// failed load never yields partial content.
pub fn load(reader: &mut impl Read, config: &DiagramConfig) -> Result<BlockStore> {
    let version = read_u32(reader, "version")?;
    if version != FORMAT_VERSION {
        return Err(Error::Format(format!("Unsupported version: {}", version)));
    }

    let count = read_u32(reader, "block count")? as usize;
    let mut blocks = HashMap::with_capacity(count.min(MAX_PREALLOCATED));

    let mut buf = [0u8; RECORD_SIZE];
    for index in 0..count {
        read_exact(reader, &mut buf, "block record")?;
        let Some(block) = decode_record(&buf, config).map_err(|e| match e {
            Error::Format(msg) => Error::Format(format!("record {}: {}", index, msg)),
            other => other,
        })?
        else {
            continue;
        };
        if blocks.insert(block.position, block).is_some() {
            log::warn!("Duplicate block record at {}, keeping the later one", block.position);
        }
    }

    log::debug!("Loaded {} blocks from {} records", blocks.len(), count);
    Ok(BlockStore::from_blocks(blocks))
}

/// Encode a store into a byte buffer.
pub fn encode(store: &BlockStore) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + store.block_count() * RECORD_SIZE);
    save(store, &mut bytes)?;
    Ok(bytes)
}

/// Decode a store from a byte buffer.
pub fn decode(mut bytes: &[u8], config: &DiagramConfig) -> Result<BlockStore> {
    load(&mut bytes, config)
}

fn write_record(writer: &mut impl Write, block: &BlockInstance) -> io::Result<()> {
    let mut buf = [0u8; RECORD_SIZE];
    buf[0..4].copy_from_slice(&block.position.x.to_le_bytes());
    buf[4..8].copy_from_slice(&block.position.y.to_le_bytes());
    buf[8..12].copy_from_slice(&block.position.z.to_le_bytes());
    buf[12..14].copy_from_slice(&block.block_type.0.to_le_bytes());
    buf[14] = block.orientation.id();
    writer.write_all(&buf)
}

/// Decode one record. Air records decode to `None`.
fn decode_record(buf: &[u8; RECORD_SIZE], config: &DiagramConfig) -> Result<Option<BlockInstance>> {
    let x = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = i32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    let type_id = u16::from_le_bytes([buf[12], buf[13]]);
    let orientation_id = buf[14];

    if u32::from(type_id) >= config.block_type_limit {
        return Err(Error::Format(format!(
            "block type {} out of range (limit {})",
            type_id, config.block_type_limit
        )));
    }
    let orientation = Orientation::from_id(orientation_id)
        .ok_or_else(|| Error::Format(format!("unknown orientation id {}", orientation_id)))?;

    let block_type = BlockType(type_id);
    if block_type.is_air() {
        return Ok(None);
    }
    Ok(Some(BlockInstance::new(block_type, Position::new(x, y, z), orientation)))
}

fn read_u32(reader: &mut impl Read, what: &str) -> Result<u32> {
    let mut buf = [0u8; 4];
    read_exact(reader, &mut buf, what)?;
    Ok(u32::from_le_bytes(buf))
}

/// `read_exact`, with a short read reported as a format error.
fn read_exact(reader: &mut impl Read, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => Error::Format(format!("stream truncated while reading {}", what)),
        _ => Error::Io(e),
    })
}
