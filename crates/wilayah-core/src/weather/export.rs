// crates/wilayah-core/src/weather/export.rs
use super::forecast::ForecastRow;

pub const CSV_HEADERS: [&str; 9] = [
    "Tanggal",
    "Jam",
    "Cuaca",
    "Suhu (°C)",
    "Kelembapan (%)",
    "Kecepatan Angin (km/j)",
    "Kecepatan Angin (knots)",
    "Arah Angin (°)",
    "File Ikon",
];

/// Render rows as CSV: header line first, `\n` separated, no trailing newline.
///
/// The condition column is always quoted. Missing numbers become empty
/// cells, except knots which treat a missing wind speed as `0.0`.
pub fn to_csv(rows: &[ForecastRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for row in rows {
        let cells = [
            row.date.clone(),
            row.time.clone(),
            quote(&row.condition),
            number(row.temperature),
            number(row.humidity),
            number(row.wind_speed_kmh),
            format!("{:.1}", row.wind_speed_knots()),
            number(row.wind_direction_deg),
            row.icon_file.clone(),
        ];
        lines.push(cells.join(","));
    }

    lines.join("\n")
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn number(v: Option<f64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_rows() {
        let rows = vec![ForecastRow {
            date: "2025-01-10".into(),
            time: "07:00".into(),
            condition: "Cerah Berawan".into(),
            temperature: Some(24.0),
            humidity: Some(88.0),
            wind_speed_kmh: Some(10.0),
            wind_direction_deg: Some(120.5),
            icon_file: "cerah.svg".into(),
            icon_url: "https://example.test/cerah.svg".into(),
        }];

        let csv = to_csv(&rows);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Tanggal,Jam,Cuaca,Suhu (°C),Kelembapan (%),Kecepatan Angin (km/j),Kecepatan Angin (knots),Arah Angin (°),File Ikon")
        );
        assert_eq!(
            lines.next(),
            Some("2025-01-10,07:00,\"Cerah Berawan\",24,88,10,5.4,120.5,cerah.svg")
        );
        assert_eq!(lines.next(), None);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn missing_values_leave_cells_empty() {
        let csv = to_csv(&[ForecastRow::default()]);
        assert_eq!(csv.lines().nth(1), Some(",,\"\",,,,0.0,,"));
    }

    #[test]
    fn quotes_inside_condition_are_doubled() {
        assert_eq!(quote("Hujan \"Lebat\""), "\"Hujan \"\"Lebat\"\"\"");
    }
}
