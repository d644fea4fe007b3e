//! Umbrella crate for the demos: re-exports everything from `wilayah-core`.
pub use wilayah_core::*;
