// crates/wilayah-core/src/search.rs
use crate::model::{RegionHierarchy, RegionRef, Village};
use crate::text::fold_key;
use crate::traits::NameMatch;

/// Result cap used by the location picker.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

impl RegionHierarchy {
    /// Villages whose name contains `query` (case and accent insensitive).
    ///
    /// Results follow dataset order and stop at `limit`. A blank query
    /// matches nothing.
    pub fn search_villages(&self, query: &str, limit: usize) -> Vec<&Village> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.villages
            .iter()
            .filter(|v| v.name_contains_folded(&q))
            .take(limit)
            .collect()
    }

    /// Like [`search_villages`](Self::search_villages) but across every
    /// level, provinces first.
    pub fn search(&self, query: &str, limit: usize) -> Vec<RegionRef<'_>> {
        let q = fold_key(query.trim());
        if q.is_empty() {
            return Vec::new();
        }

        let provinces = self.provinces.iter().map(RegionRef::Province);
        let regencies = self.regencies.iter().map(RegionRef::Regency);
        let districts = self.districts.iter().map(RegionRef::District);
        let villages = self.villages.iter().map(RegionRef::Village);

        provinces
            .chain(regencies)
            .chain(districts)
            .chain(villages)
            .filter(|r| r.name_contains_folded(&q))
            .take(limit)
            .collect()
    }
}
