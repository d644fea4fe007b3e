// crates/wilayah-core/src/model/mod.rs
pub mod builder;
pub mod code;
pub mod domain;
pub mod navigate;

pub use builder::{build_hierarchy, HierarchyBuilder, LineOutcome, SkipReason};
pub use code::{split_region_code, RegionCodeParts, RegionLevel};
pub use domain::{District, Province, Regency, RegionHierarchy, Village};
pub use navigate::{RegionPath, RegionRef};

/// Village selected by the dashboard when nothing else is chosen.
pub const DEFAULT_REGION_CODE: &str = "36.71.01.1003";
