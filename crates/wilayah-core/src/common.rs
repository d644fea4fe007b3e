// crates/wilayah-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built hierarchy.
///
/// Returned by [`RegionHierarchy::stats`](crate::RegionHierarchy::stats);
/// placeholders synthesized for missing ancestors are counted too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    pub provinces: usize,
    pub regencies: usize,
    pub districts: usize,
    pub villages: usize,
}

impl RegionStats {
    pub fn total(&self) -> usize {
        self.provinces + self.regencies + self.districts + self.villages
    }
}
