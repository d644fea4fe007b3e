//! wilayah-wasm — WebAssembly bindings for wilayah-core
//!
//! Exposes the region hierarchy to the browser dashboard. The page fetches
//! `/data/base.csv` itself (and keeps the result for the session); this
//! crate parses it once into a [`RegionIndex`] and answers the cascading
//! picker's queries.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { RegionIndex, split_region_code } from 'wilayah-wasm';
//!
//! async function main() {
//!   await init();
//!   const csv = await (await fetch('/data/base.csv')).text();
//!   const regions = new RegionIndex(csv);
//!
//!   console.log(regions.provinces());                 // [{ code, name, level }]
//!   console.log(regions.children('36.71'));           // districts of a regency
//!   console.log(regions.describe('36.71.01.1003'));   // "Demangan, Gondokusuman, ..."
//!   console.log(split_region_code('36.71.01.1003'));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - List results are plain JSON-serializable arrays/objects.
//! - Weather helpers (`forecast_rows`, `forecast_alerts`, `forecast_csv`)
//!   work on the BMKG payload the page already fetched.
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;
use wilayah_core::api::{views, RegionPathView};
use wilayah_core::weather::{evaluate_alerts, flatten_forecast, to_csv, ForecastResponse};
use wilayah_core::{build_hierarchy, split_region_code as split_code, RegionHierarchy};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing wilayah WASM module...".into());
}

/* --------------------------------------------------------------------------
   Region index
-------------------------------------------------------------------------- */

/// A parsed hierarchy held on the wasm side.
#[wasm_bindgen]
pub struct RegionIndex {
    inner: RegionHierarchy,
}

#[wasm_bindgen]
impl RegionIndex {
    /// Parse the raw `<code>,<name>` text. Malformed lines are skipped.
    #[wasm_bindgen(constructor)]
    pub fn new(raw_text: &str) -> RegionIndex {
        let inner = build_hierarchy(raw_text);
        #[cfg(target_arch = "wasm32")]
        {
            let stats = inner.stats();
            web_sys::console::log_1(
                &format!("✓ Loaded {} villages in {} provinces", stats.villages, stats.provinces)
                    .into(),
            );
        }
        RegionIndex { inner }
    }

    pub fn province_count(&self) -> usize {
        self.inner.provinces().len()
    }

    pub fn village_count(&self) -> usize {
        self.inner.villages().len()
    }

    /// `[{ code, name, level }]` sorted by name.
    pub fn provinces(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&views(self.inner.children("")))?)
    }

    /// Sorted children of a province, regency or district code.
    pub fn children(&self, code: &str) -> Result<JsValue, JsValue> {
        Ok(to_value(&views(self.inner.children(code)))?)
    }

    /// `{ province, regency, district, village, description }`; unknown codes
    /// give `null` levels and the `Kode <code>` label.
    pub fn path(&self, village_code: &str) -> Result<JsValue, JsValue> {
        Ok(to_value(&RegionPathView::resolve(&self.inner, village_code))?)
    }

    pub fn describe(&self, village_code: &str) -> String {
        self.inner.region_description(village_code)
    }

    pub fn name_of(&self, code: &str) -> Option<String> {
        self.inner.lookup(code).map(|r| r.name().to_owned())
    }

    /// Villages whose name contains `query`, as resolved paths.
    pub fn search_villages(&self, query: &str, limit: usize) -> Result<JsValue, JsValue> {
        let hits: Vec<RegionPathView> = self
            .inner
            .search_villages(query, limit)
            .into_iter()
            .map(|v| RegionPathView::resolve(&self.inner, v.code()))
            .collect();
        Ok(to_value(&hits)?)
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.inner.stats())?)
    }
}

#[wasm_bindgen]
pub fn split_region_code(code: &str) -> Result<JsValue, JsValue> {
    Ok(to_value(&split_code(code))?)
}

/* --------------------------------------------------------------------------
   Forecast helpers
-------------------------------------------------------------------------- */

fn parse_forecast(payload: &str) -> Result<ForecastResponse, JsValue> {
    serde_json::from_str(payload).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Flatten a raw BMKG JSON payload into table rows.
#[wasm_bindgen]
pub fn forecast_rows(payload: &str) -> Result<JsValue, JsValue> {
    let rows = flatten_forecast(&parse_forecast(payload)?);
    Ok(to_value(&rows)?)
}

#[wasm_bindgen]
pub fn forecast_alerts(payload: &str) -> Result<JsValue, JsValue> {
    let rows = flatten_forecast(&parse_forecast(payload)?);
    Ok(to_value(&evaluate_alerts(&rows))?)
}

#[wasm_bindgen]
pub fn forecast_csv(payload: &str) -> Result<String, JsValue> {
    let rows = flatten_forecast(&parse_forecast(payload)?);
    Ok(to_csv(&rows))
}
