//! Diagram persistence.

pub mod codec;

pub use codec::{decode, encode, load, save, FORMAT_VERSION, RECORD_SIZE};
