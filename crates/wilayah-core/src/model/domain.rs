// crates/wilayah-core/src/model/domain.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// # The Region Hierarchy
///
/// Nodes are stored per level in flat arenas. Children are referenced by
/// their index in the next level's arena and parents by their code, so a
/// finished hierarchy can be cloned, shared and serialized as one value.
///
/// **Structure:** `provinces` (sorted by name) → `regencies` → `districts`
/// → `villages`, each child list sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionHierarchy {
    pub(crate) provinces: Vec<Province>,
    pub(crate) regencies: Vec<Regency>,
    pub(crate) districts: Vec<District>,
    pub(crate) villages: Vec<Village>,

    pub(crate) province_map: HashMap<String, u32>,
    pub(crate) regency_map: HashMap<String, u32>,
    pub(crate) district_map: HashMap<String, u32>,
    pub(crate) village_map: HashMap<String, u32>,
}

/// A province (`"36"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub code: String,
    /// Empty while only referenced by descendants.
    pub name: String,
    /// Indices into [`RegionHierarchy::regencies`].
    pub regencies: Vec<u32>,
}

/// A regency or city (`"36.71"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub code: String,
    pub name: String,
    pub province_code: String,
    /// Indices into [`RegionHierarchy::districts`].
    pub districts: Vec<u32>,
}

/// A district (`"36.71.01"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub code: String,
    pub name: String,
    pub province_code: String,
    pub regency_code: String,
    /// Indices into [`RegionHierarchy::villages`].
    pub villages: Vec<u32>,
}

/// A village (`"36.71.01.1003"`), the `adm4` key of the forecast API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Village {
    pub code: String,
    pub name: String,
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
}

impl Province {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Regency {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl District {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Village {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
