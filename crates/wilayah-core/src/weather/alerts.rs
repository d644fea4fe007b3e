// crates/wilayah-core/src/weather/alerts.rs
//! Threshold alerts over the next few forecast rows.

use super::forecast::ForecastRow;
use serde::Serialize;

/// Number of leading rows (the next ~18 hours at 3h steps) that are inspected.
pub const ALERT_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    ExtremeHeat,
    HeavyRain,
    StrongWind,
    LowVisibility,
}

impl AlertKind {
    fn id_prefix(self) -> &'static str {
        match self {
            AlertKind::ExtremeHeat => "heat",
            AlertKind::HeavyRain => "rain",
            AlertKind::StrongWind => "wind",
            AlertKind::LowVisibility => "visibility",
        }
    }
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
    Critical,
}

impl Severity {
    /// Indonesian badge label.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Kritis",
            Severity::Danger => "Bahaya",
            Severity::Warning => "Peringatan",
            Severity::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAlert {
    /// `<kind>-<row index>`, e.g. `heat-2`.
    pub id: String,
    pub kind: AlertKind,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Forecast time (`HH:MM`) that triggered the alert.
    pub time: String,
    /// Expected duration, human readable.
    pub duration: &'static str,
    pub advice: &'static [&'static str],
}

/// Trigger levels. Rain and visibility alerts also need a matching
/// condition keyword.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThresholds {
    /// °C
    pub extreme_heat: f64,
    /// % humidity
    pub heavy_rain: f64,
    /// km/h
    pub strong_wind: f64,
    /// % humidity
    pub low_visibility: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            extreme_heat: 35.0,
            heavy_rain: 60.0,
            strong_wind: 25.0,
            low_visibility: 60.0,
        }
    }
}

const HEAT_ADVICE: &[&str] = &[
    "Hindari aktivitas di luar ruangan",
    "Minum air putih yang cukup",
    "Gunakan pakaian yang tipis dan berwarna terang",
    "Cari tempat yang teduh dan sejuk",
];

const RAIN_ADVICE: &[&str] = &[
    "Hindari perjalanan jika tidak mendesak",
    "Waspada genangan air di jalan",
    "Siapkan perlengkapan hujan",
    "Pantau kondisi cuaca terkini",
];

const WIND_ADVICE: &[&str] = &[
    "Hindari area dengan banyak pohon",
    "Kencangkan benda-benda yang mudah terbang",
    "Waspada saat berkendara",
    "Jauhi papan reklame atau struktur tinggi",
];

const VISIBILITY_ADVICE: &[&str] = &[
    "Nyalakan lampu kendaraan saat berkendara",
    "Kurangi kecepatan berkendara",
    "Jaga jarak aman dengan kendaraan lain",
    "Gunakan klakson dengan bijak",
];

/// [`AlertThresholds::evaluate`] with the default thresholds.
pub fn evaluate_alerts(rows: &[ForecastRow]) -> Vec<WeatherAlert> {
    AlertThresholds::default().evaluate(rows)
}

impl AlertThresholds {
    /// Alerts for the first [`ALERT_WINDOW`] rows: one per kind (the earliest
    /// row wins), most severe first.
    pub fn evaluate(&self, rows: &[ForecastRow]) -> Vec<WeatherAlert> {
        let mut alerts = Vec::new();

        for (index, row) in rows.iter().take(ALERT_WINDOW).enumerate() {
            let temp = row.temperature.unwrap_or(0.0);
            let humidity = row.humidity.unwrap_or(0.0);
            let wind = row.wind_speed_kmh.unwrap_or(0.0);
            let condition = row.condition.to_lowercase();
            let time = row.time.as_str();

            if temp >= self.extreme_heat {
                let severity = if temp >= 38.0 {
                    Severity::Critical
                } else if temp >= 36.0 {
                    Severity::Danger
                } else {
                    Severity::Warning
                };
                let title = if temp >= 38.0 {
                    "Peringatan Cuaca Ekstrem"
                } else {
                    "Peringatan Panas Tinggi"
                };
                alerts.push(alert(
                    AlertKind::ExtremeHeat,
                    index,
                    severity,
                    title,
                    format!(
                        "Suhu sangat tinggi {temp}°C pada jam {time}. Waspadai risiko heat stroke dan dehidrasi."
                    ),
                    time,
                    "2-4 jam",
                    HEAT_ADVICE,
                ));
            }

            let storm = condition.contains("badai");
            if humidity >= self.heavy_rain && (condition.contains("hujan") || storm) {
                let severity = if condition.contains("lebat") || storm {
                    Severity::Danger
                } else {
                    Severity::Warning
                };
                let title = if storm {
                    "Peringatan Badai"
                } else {
                    "Peringatan Hujan Lebat"
                };
                alerts.push(alert(
                    AlertKind::HeavyRain,
                    index,
                    severity,
                    title,
                    format!("Potensi hujan lebat dengan kelembapan {humidity}% pada jam {time}."),
                    time,
                    "1-3 jam",
                    RAIN_ADVICE,
                ));
            }

            if wind >= self.strong_wind {
                let severity = if wind >= 40.0 {
                    Severity::Danger
                } else if wind >= 30.0 {
                    Severity::Warning
                } else {
                    Severity::Info
                };
                let title = if wind >= 40.0 {
                    "Peringatan Angin Kencang"
                } else {
                    "Peringatan Angin Sedang"
                };
                alerts.push(alert(
                    AlertKind::StrongWind,
                    index,
                    severity,
                    title,
                    format!("Kecepatan angin {wind} km/h pada jam {time}. Waspada pohon tumbang."),
                    time,
                    "30 menit - 2 jam",
                    WIND_ADVICE,
                ));
            }

            if humidity >= self.low_visibility
                && (condition.contains("kabut") || condition.contains("mendung"))
            {
                alerts.push(alert(
                    AlertKind::LowVisibility,
                    index,
                    Severity::Warning,
                    "Peringatan Jarak Pandang Terbatas",
                    format!("Jarak pandang terbatas karena kabut/mendung tebal pada jam {time}."),
                    time,
                    "1-4 jam",
                    VISIBILITY_ADVICE,
                ));
            }
        }

        let mut unique: Vec<WeatherAlert> = Vec::with_capacity(alerts.len());
        for a in alerts {
            if !unique.iter().any(|u| u.kind == a.kind) {
                unique.push(a);
            }
        }
        unique.sort_by(|a, b| b.severity.cmp(&a.severity));
        unique
    }
}

#[allow(clippy::too_many_arguments)]
fn alert(
    kind: AlertKind,
    index: usize,
    severity: Severity,
    title: &str,
    message: String,
    time: &str,
    duration: &'static str,
    advice: &'static [&'static str],
) -> WeatherAlert {
    WeatherAlert {
        id: format!("{}-{}", kind.id_prefix(), index),
        kind,
        severity,
        title: title.to_owned(),
        message,
        time: time.to_owned(),
        duration,
        advice,
    }
}
