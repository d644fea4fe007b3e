// crates/wilayah-core/src/weather/forecast.rs
use serde::{Deserialize, Serialize};

/// Payload of `GET /publik/prakiraan-cuaca?adm4=<code>`.
///
/// Only the fields the dashboard reads are modelled; unknown fields are
/// ignored and every item field is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub data: Vec<ForecastLocation>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForecastLocation {
    /// Forecast items grouped per day.
    #[serde(default)]
    pub cuaca: Vec<Vec<WeatherItem>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WeatherItem {
    #[serde(default)]
    pub local_datetime: Option<String>,
    #[serde(default)]
    pub weather_desc: Option<String>,
    /// Temperature in °C.
    #[serde(default)]
    pub t: Option<f64>,
    /// Relative humidity in %.
    #[serde(default)]
    pub hu: Option<f64>,
    /// Wind speed in km/h.
    #[serde(default)]
    pub ws: Option<f64>,
    /// Wind direction in degrees.
    #[serde(default)]
    pub wd_deg: Option<f64>,
    /// Icon URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// One table row of the forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub condition: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_kmh: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub icon_file: String,
    pub icon_url: String,
}

impl ForecastRow {
    /// Missing wind speed counts as calm.
    pub fn wind_speed_knots(&self) -> f64 {
        kmh_to_knots(self.wind_speed_kmh.unwrap_or(0.0))
    }
}

pub fn kmh_to_knots(kmh: f64) -> f64 {
    kmh * 0.539957
}

/// Last path segment of an icon URL.
pub fn icon_filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or("")
}

/// Flatten the first location's day groups into rows, in order.
pub fn flatten_forecast(response: &ForecastResponse) -> Vec<ForecastRow> {
    let Some(location) = response.data.first() else {
        return Vec::new();
    };

    location
        .cuaca
        .iter()
        .flatten()
        .map(|item| {
            let dt = item.local_datetime.as_deref().unwrap_or("");
            let image = item.image.as_deref().unwrap_or("");
            ForecastRow {
                date: char_slice(dt, 0, 10),
                time: char_slice(dt, 11, 16),
                condition: item.weather_desc.clone().unwrap_or_default(),
                temperature: item.t,
                humidity: item.hu,
                wind_speed_kmh: item.ws,
                wind_direction_deg: item.wd_deg,
                icon_file: icon_filename(image).to_owned(),
                icon_url: image.to_owned(),
            }
        })
        .collect()
}

fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}
