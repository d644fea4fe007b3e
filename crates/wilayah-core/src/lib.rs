// crates/wilayah-core/src/lib.rs
#![cfg_attr(docsrs, feature(doc_cfg))]
//! # wilayah-core
//!
//! In-memory hierarchy of Indonesian administrative regions
//! (provinsi → kabupaten/kota → kecamatan → kelurahan/desa) built from the
//! flat `<code>,<name>` reference dataset, plus helpers for the BMKG
//! forecast endpoint that is keyed by the village (`adm4`) code.
//!
//! ```rust
//! use wilayah_core::build_hierarchy;
//!
//! let hierarchy = build_hierarchy(
//!     "36,DI Yogyakarta\n36.71,Kota Yogyakarta\n36.71.01,Gondokusuman\n36.71.01.1003,Demangan",
//! );
//! assert_eq!(
//!     hierarchy.region_description("36.71.01.1003"),
//!     "Demangan, Gondokusuman, Kota Yogyakarta, DI Yogyakarta"
//! );
//! ```

pub mod api;
pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;
pub mod weather;

// Re-exports
pub use crate::common::RegionStats;
pub use crate::error::{RegionError, Result};
pub use crate::model::{
    build_hierarchy, split_region_code, District, HierarchyBuilder, LineOutcome, Province,
    Regency, RegionCodeParts, RegionHierarchy, RegionLevel, RegionPath, RegionRef, SkipReason,
    Village, DEFAULT_REGION_CODE,
};
pub use crate::search::DEFAULT_SEARCH_LIMIT;
pub use crate::traits::NameMatch;
