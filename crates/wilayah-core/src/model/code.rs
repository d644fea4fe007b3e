// crates/wilayah-core/src/model/code.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four administrative levels, fixed by the segment count of a code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Province,
    Regency,
    District,
    Village,
}

impl RegionLevel {
    /// Level for a dot-segment count, `None` outside `1..=4`.
    pub fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            1 => Some(Self::Province),
            2 => Some(Self::Regency),
            3 => Some(Self::District),
            4 => Some(Self::Village),
            _ => None,
        }
    }

    /// Level of a code by syntax alone. Codes with an empty segment have no level.
    pub fn of_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if code.is_empty() || code.split('.').any(str::is_empty) {
            return None;
        }
        Self::from_depth(code.split('.').count())
    }

    pub fn depth(self) -> usize {
        match self {
            Self::Province => 1,
            Self::Regency => 2,
            Self::District => 3,
            Self::Village => 4,
        }
    }

    /// Level of the direct children, `None` for villages.
    pub fn child(self) -> Option<Self> {
        Self::from_depth(self.depth() + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Province => "province",
            Self::Regency => "regency",
            Self::District => "district",
            Self::Village => "village",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix codes of every level for one code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionCodeParts {
    pub province_code: String,
    pub regency_code: String,
    pub district_code: String,
    pub village_code: String,
}

impl RegionCodeParts {
    /// Prefix code for `level`; empty when the source code was shallower.
    pub fn code_for(&self, level: RegionLevel) -> &str {
        match level {
            RegionLevel::Province => &self.province_code,
            RegionLevel::Regency => &self.regency_code,
            RegionLevel::District => &self.district_code,
            RegionLevel::Village => &self.village_code,
        }
    }
}

/// Split a code into the prefix code of each level.
///
/// Works on the code syntax only. Levels deeper than the code yield `""`.
///
/// ```rust
/// use wilayah_core::split_region_code;
///
/// let parts = split_region_code("36.71.01.1003");
/// assert_eq!(parts.district_code, "36.71.01");
///
/// let parts = split_region_code("36");
/// assert_eq!(parts.province_code, "36");
/// assert_eq!(parts.regency_code, "");
/// ```
pub fn split_region_code(code: &str) -> RegionCodeParts {
    let segments: Vec<&str> = code.split('.').collect();
    let prefix = |depth: usize| -> String {
        if segments.len() >= depth {
            segments[..depth].join(".")
        } else {
            String::new()
        }
    };

    RegionCodeParts {
        province_code: prefix(1),
        regency_code: prefix(2),
        district_code: prefix(3),
        village_code: prefix(4),
    }
}
