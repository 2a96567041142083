//! Wire formats.

pub mod bmf;

pub use bmf::{decode, encode, encode_legacy, BMF_LEGACY_VERSION, BMF_MAGIC, BMF_VERSION, HEADER_SIZE};
