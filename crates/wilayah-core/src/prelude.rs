//! wilayah prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::api::{RegionPathView, RegionView};
pub use crate::error::{RegionError, Result};
pub use crate::model::{
    build_hierarchy, split_region_code, District, Province, Regency, RegionCodeParts,
    RegionHierarchy, RegionLevel, RegionPath, RegionRef, Village, DEFAULT_REGION_CODE,
};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
pub use crate::weather::{evaluate_alerts, flatten_forecast, to_csv, ForecastRow, WeatherAlert};
