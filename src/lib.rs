//! Blockplan - editing core for layered voxel block diagrams

pub mod core;
pub mod blocks;
pub mod diagram;
pub mod edit;
pub mod persist;

pub use diagram::Diagram;
