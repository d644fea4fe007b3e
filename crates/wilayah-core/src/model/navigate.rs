// crates/wilayah-core/src/model/navigate.rs
use super::code::RegionLevel;
use super::domain::{District, Province, Regency, RegionHierarchy, Village};
use crate::common::RegionStats;

/// A borrowed node of any level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionRef<'a> {
    Province(&'a Province),
    Regency(&'a Regency),
    District(&'a District),
    Village(&'a Village),
}

impl<'a> RegionRef<'a> {
    pub fn code(&self) -> &'a str {
        match *self {
            RegionRef::Province(p) => &p.code,
            RegionRef::Regency(r) => &r.code,
            RegionRef::District(d) => &d.code,
            RegionRef::Village(v) => &v.code,
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            RegionRef::Province(p) => &p.name,
            RegionRef::Regency(r) => &r.name,
            RegionRef::District(d) => &d.name,
            RegionRef::Village(v) => &v.name,
        }
    }

    pub fn level(&self) -> RegionLevel {
        match self {
            RegionRef::Province(_) => RegionLevel::Province,
            RegionRef::Regency(_) => RegionLevel::Regency,
            RegionRef::District(_) => RegionLevel::District,
            RegionRef::Village(_) => RegionLevel::Village,
        }
    }
}

/// Ancestor chain of a village. Every field is independently optional: an
/// unknown village leaves all of them empty, an inconsistent dataset may
/// leave single ancestors unresolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionPath<'a> {
    pub province: Option<&'a Province>,
    pub regency: Option<&'a Regency>,
    pub district: Option<&'a District>,
    pub village: Option<&'a Village>,
}

impl<'a> RegionPath<'a> {
    pub fn is_empty(&self) -> bool {
        self.province.is_none()
            && self.regency.is_none()
            && self.district.is_none()
            && self.village.is_none()
    }

    /// Non-empty names from the village up to the province.
    pub fn names(&self) -> impl Iterator<Item = &'a str> {
        [
            self.village.map(|v| v.name.as_str()),
            self.district.map(|d| d.name.as_str()),
            self.regency.map(|r| r.name.as_str()),
            self.province.map(|p| p.name.as_str()),
        ]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
    }
}

impl RegionHierarchy {
    // -----------------------------------------------------------------------
    // ARENAS
    // -----------------------------------------------------------------------

    /// Provinces sorted by name.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// All regencies in first-seen order.
    pub fn regencies(&self) -> &[Regency] {
        &self.regencies
    }

    /// All districts in first-seen order.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// All villages in first-seen order.
    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    pub fn stats(&self) -> RegionStats {
        RegionStats {
            provinces: self.provinces.len(),
            regencies: self.regencies.len(),
            districts: self.districts.len(),
            villages: self.villages.len(),
        }
    }

    // -----------------------------------------------------------------------
    // LOOKUP BY CODE
    // -----------------------------------------------------------------------

    pub fn province(&self, code: &str) -> Option<&Province> {
        self.province_map
            .get(code)
            .map(|&id| &self.provinces[id as usize])
    }

    pub fn regency(&self, code: &str) -> Option<&Regency> {
        self.regency_map
            .get(code)
            .map(|&id| &self.regencies[id as usize])
    }

    pub fn district(&self, code: &str) -> Option<&District> {
        self.district_map
            .get(code)
            .map(|&id| &self.districts[id as usize])
    }

    pub fn village(&self, code: &str) -> Option<&Village> {
        self.village_map
            .get(code)
            .map(|&id| &self.villages[id as usize])
    }

    /// Look a code up at the level its segment count names.
    pub fn lookup(&self, code: &str) -> Option<RegionRef<'_>> {
        let code = code.trim();
        match RegionLevel::of_code(code)? {
            RegionLevel::Province => self.province(code).map(RegionRef::Province),
            RegionLevel::Regency => self.regency(code).map(RegionRef::Regency),
            RegionLevel::District => self.district(code).map(RegionRef::District),
            RegionLevel::Village => self.village(code).map(RegionRef::Village),
        }
    }

    // -----------------------------------------------------------------------
    // CHILDREN (sorted by name)
    // -----------------------------------------------------------------------

    pub fn regencies_of<'a>(&'a self, province: &'a Province) -> impl Iterator<Item = &'a Regency> + 'a {
        province
            .regencies
            .iter()
            .map(move |&id| &self.regencies[id as usize])
    }

    pub fn districts_of<'a>(&'a self, regency: &'a Regency) -> impl Iterator<Item = &'a District> + 'a {
        regency
            .districts
            .iter()
            .map(move |&id| &self.districts[id as usize])
    }

    pub fn villages_of<'a>(&'a self, district: &'a District) -> impl Iterator<Item = &'a Village> + 'a {
        district
            .villages
            .iter()
            .map(move |&id| &self.villages[id as usize])
    }

    /// Direct children of any code; an empty code lists the provinces.
    ///
    /// Unknown codes and villages have no children.
    pub fn children(&self, code: &str) -> Vec<RegionRef<'_>> {
        if code.trim().is_empty() {
            return self.provinces.iter().map(RegionRef::Province).collect();
        }
        match self.lookup(code) {
            Some(RegionRef::Province(p)) => self.regencies_of(p).map(RegionRef::Regency).collect(),
            Some(RegionRef::Regency(r)) => self.districts_of(r).map(RegionRef::District).collect(),
            Some(RegionRef::District(d)) => self.villages_of(d).map(RegionRef::Village).collect(),
            Some(RegionRef::Village(_)) | None => Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // PATH & DESCRIPTION
    // -----------------------------------------------------------------------

    /// Resolve a village and its ancestors through the stored parent codes.
    ///
    /// Surrounding whitespace in `village_code` is ignored, as in [`lookup`](Self::lookup).
    pub fn region_path(&self, village_code: &str) -> RegionPath<'_> {
        let Some(village) = self.village(village_code.trim()) else {
            return RegionPath::default();
        };

        RegionPath {
            province: self.province(&village.province_code),
            regency: self.regency(&village.regency_code),
            district: self.district(&village.district_code),
            village: Some(village),
        }
    }

    /// `"<village>, <district>, <regency>, <province>"` for a village code,
    /// dropping levels that do not resolve. Unknown villages give
    /// `"Kode <code>"`.
    pub fn region_description(&self, village_code: &str) -> String {
        let village_code = village_code.trim();
        let path = self.region_path(village_code);
        if path.village.is_none() {
            return format!("Kode {village_code}");
        }
        path.names().collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use crate::model::build_hierarchy;

    const SAMPLE: &str = "\
36,DI Yogyakarta
36.71,Kota Yogyakarta
36.71.01,Gondokusuman
36.71.01.1003,Demangan
36.71.01.1001,Baciro
";

    #[test]
    fn lookup_dispatches_on_depth() {
        let h = build_hierarchy(SAMPLE);
        assert_eq!(h.lookup("36").map(|r| r.name()), Some("DI Yogyakarta"));
        assert_eq!(h.lookup("36.71.01").map(|r| r.name()), Some("Gondokusuman"));
        assert_eq!(h.lookup(" 36.71.01.1001 ").map(|r| r.name()), Some("Baciro"));
        assert!(h.lookup("36.72").is_none());
        assert!(h.lookup("not.a..code").is_none());
    }

    #[test]
    fn children_are_sorted() {
        let h = build_hierarchy(SAMPLE);
        let names: Vec<_> = h.children("36.71.01").iter().map(|r| r.name()).collect();
        assert_eq!(names, ["Baciro", "Demangan"]);
        assert_eq!(h.children("").len(), 1);
        assert!(h.children("36.71.01.1001").is_empty());
        assert!(h.children("99").is_empty());
    }

    #[test]
    fn description_skips_unresolved_levels() {
        let h = build_hierarchy("36.71.01.1003,Demangan\n36,DI Yogyakarta");
        // regency and district are unnamed placeholders
        assert_eq!(h.region_description("36.71.01.1003"), "Demangan, DI Yogyakarta");
        let path = h.region_path("36.71.01.1003");
        assert!(path.regency.is_some());
        assert!(!path.is_empty());
    }
}
