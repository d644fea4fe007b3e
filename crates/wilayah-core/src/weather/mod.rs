// crates/wilayah-core/src/weather/mod.rs
//! BMKG public forecast helpers.
//!
//! The forecast endpoint is keyed by the village (`adm4`) code resolved from
//! the region hierarchy; this module reshapes its nested payload into flat
//! rows, exports them as CSV, and derives threshold alerts.

pub mod alerts;
#[cfg(feature = "fetch")]
pub mod client;
pub mod export;
pub mod forecast;

pub use alerts::{evaluate_alerts, AlertKind, AlertThresholds, Severity, WeatherAlert};
#[cfg(feature = "fetch")]
pub use client::{ForecastClient, ForecastClientConfig, BMKG_FORECAST_URL};
pub use export::{to_csv, CSV_HEADERS};
pub use forecast::{
    flatten_forecast, icon_filename, kmh_to_knots, ForecastLocation, ForecastResponse,
    ForecastRow, WeatherItem,
};
