//! Block metadata registry loaded from a JSON block list.
//!
//! The registry is built once by the application and passed by reference to
//! whatever needs block metadata (rendering, tool palettes, the bill of
//! materials). The diagram itself never consults it.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::diagram::block::{BlockType, Orientation};

/// Geometry kind used by the renderer to pick a mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geometry {
    #[default]
    Cube,
    Slab,
    Chest,
    PressurePlate,
    Stairs,
    Cactus,
    Bed,
    Door,
    Ladder,
}

/// Metadata for one block type. The index in the block list is the type id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockProperties {
    pub name: String,
    #[serde(default)]
    pub geometry: Geometry,
    /// Texture tile (column, row) per face: front, back, left, right, top, bottom
    #[serde(default)]
    pub tiles: Vec<[u32; 2]>,
    /// Tile used for the palette sprite
    #[serde(default)]
    pub sprite: Option<[u32; 2]>,
    /// Legal orientations; empty means the block has no facing
    #[serde(default)]
    pub orientations: Vec<Orientation>,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub biome_grass: bool,
    #[serde(default)]
    pub biome_tree: bool,
}

/// One line of a bill of materials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialLine {
    pub block_type: BlockType,
    pub name: String,
    pub count: usize,
}

#[derive(Clone, Debug, Default)]
pub struct BlockRegistry {
    blocks: Vec<BlockProperties>,
    by_name: HashMap<String, BlockType>,
}

impl BlockRegistry {
    /// Build from already-parsed properties, in type id order.
    pub fn from_properties(blocks: Vec<BlockProperties>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(Error::Config("block list must contain at least the Air entry".into()));
        }
        if blocks.len() > u16::MAX as usize {
            return Err(Error::Config(format!(
                "block list has {} entries, at most {} are addressable",
                blocks.len(),
                u16::MAX
            )));
        }

        let mut by_name = HashMap::with_capacity(blocks.len());
        for (i, props) in blocks.iter().enumerate() {
            if by_name.contains_key(&props.name) {
                log::warn!("Duplicate block name {:?} at id {}, keeping the first", props.name, i);
                continue;
            }
            by_name.insert(props.name.clone(), BlockType(i as u16));
        }

        Ok(Self { blocks, by_name })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let blocks: Vec<BlockProperties> = serde_json::from_str(s)?;
        Self::from_properties(blocks)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let registry = Self::from_json_str(&text)?;
        log::info!("Loaded {} block types from {}", registry.len(), path.display());
        Ok(registry)
    }

    #[inline]
    pub fn get(&self, block_type: BlockType) -> Option<&BlockProperties> {
        self.blocks.get(block_type.0 as usize)
    }

    pub fn name_of(&self, block_type: BlockType) -> Option<&str> {
        self.get(block_type).map(|p| p.name.as_str())
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockType> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Exclusive upper bound on valid type ids, for `DiagramConfig::block_type_limit`.
    pub fn block_type_limit(&self) -> u32 {
        self.blocks.len() as u32
    }

    /// Geometry of a type; unknown types render as cubes.
    pub fn geometry(&self, block_type: BlockType) -> Geometry {
        self.get(block_type).map_or(Geometry::Cube, |p| p.geometry)
    }

    pub fn is_transparent(&self, block_type: BlockType) -> bool {
        self.get(block_type).is_some_and(|p| p.transparent)
    }

    /// Orientations offered for a type. Types without facings offer `None` only.
    pub fn orientations(&self, block_type: BlockType) -> Vec<Orientation> {
        match self.get(block_type) {
            Some(p) if !p.orientations.is_empty() => p.orientations.clone(),
            _ => vec![Orientation::None],
        }
    }

    pub fn default_orientation(&self, block_type: BlockType) -> Orientation {
        self.get(block_type)
            .and_then(|p| p.orientations.first().copied())
            .unwrap_or(Orientation::None)
    }

    /// Resolve per-type counts to named lines, most used first.
    pub fn bill_of_materials(&self, counts: &BTreeMap<BlockType, usize>) -> Vec<MaterialLine> {
        let mut lines: Vec<MaterialLine> = counts
            .iter()
            .map(|(t, n)| MaterialLine {
                block_type: *t,
                name: self
                    .name_of(*t)
                    .map_or_else(|| format!("Unknown {}", t), str::to_owned),
                count: *n,
            })
            .collect();
        lines.sort_by(|a, b| b.count.cmp(&a.count).then(a.block_type.cmp(&b.block_type)));
        lines
    }
}
