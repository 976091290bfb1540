//! Block metadata and read-side helpers used by the rendering layer.

pub mod oracle;
pub mod registry;

pub use oracle::{face_visible, visible_faces, BlockOracle};
pub use registry::{BlockProperties, BlockRegistry, Geometry, MaterialLine};
