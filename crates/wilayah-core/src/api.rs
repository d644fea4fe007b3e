// crates/wilayah-core/src/api.rs
//! Serializable views for JSON consumers (wasm bindings, CLI output).

use crate::model::{RegionHierarchy, RegionLevel, RegionPath, RegionRef};
use serde::Serialize;

/// One node, flattened for JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionView {
    pub code: String,
    pub name: String,
    pub level: RegionLevel,
}

impl From<RegionRef<'_>> for RegionView {
    fn from(r: RegionRef<'_>) -> Self {
        RegionView {
            code: r.code().to_owned(),
            name: r.name().to_owned(),
            level: r.level(),
        }
    }
}

/// A resolved village path plus its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionPathView {
    pub province: Option<RegionView>,
    pub regency: Option<RegionView>,
    pub district: Option<RegionView>,
    pub village: Option<RegionView>,
    pub description: String,
}

impl RegionPathView {
    pub fn resolve(hierarchy: &RegionHierarchy, village_code: &str) -> Self {
        let RegionPath {
            province,
            regency,
            district,
            village,
        } = hierarchy.region_path(village_code);

        RegionPathView {
            province: province.map(|p| RegionRef::Province(p).into()),
            regency: regency.map(|r| RegionRef::Regency(r).into()),
            district: district.map(|d| RegionRef::District(d).into()),
            village: village.map(|v| RegionRef::Village(v).into()),
            description: hierarchy.region_description(village_code),
        }
    }
}

/// Map a list of references into views.
pub fn views<'a>(refs: impl IntoIterator<Item = RegionRef<'a>>) -> Vec<RegionView> {
    refs.into_iter().map(RegionView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_hierarchy;

    #[test]
    fn path_view_serializes_levels_in_lowercase() {
        let h = build_hierarchy("36,DI Yogyakarta\n36.71.01.1003,Demangan");
        let view = RegionPathView::resolve(&h, "36.71.01.1003");
        let json = serde_json::to_value(&view).expect("serialize");
        assert_eq!(json["village"]["level"], "village");
        assert_eq!(json["province"]["name"], "DI Yogyakarta");
        assert_eq!(json["description"], "Demangan, DI Yogyakarta");
    }

    #[test]
    fn unknown_code_has_no_views() {
        let h = build_hierarchy("36,DI Yogyakarta");
        let view = RegionPathView::resolve(&h, "99.99.99.9999");
        assert!(view.village.is_none() && view.province.is_none());
        assert_eq!(view.description, "Kode 99.99.99.9999");
    }
}
