//! wilayah — Command-line interface for wilayah-core
//!
//! Inspect the Indonesian administrative region dataset from a terminal:
//! level statistics, cascading lists (province → regency → district →
//! village), path and label resolution for village codes, name search, and
//! the BMKG forecast for a village.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ wilayah stats
//!
//! - Walk down the hierarchy
//!   $ wilayah provinces
//!   $ wilayah children 36
//!   $ wilayah children 36.71.01
//!
//! - Resolve a village code
//!   $ wilayah path 36.71.01.1003
//!   $ wilayah --json describe 36.71.01.1003
//!
//! - Search names
//!   $ wilayah search gondo --all-levels
//!
//! - Forecast with alerts and CSV export
//!   $ wilayah forecast 36.71.01.1003 --alerts --csv prakiraan.csv
//!
//! Data source
//! -----------
//!
//! By default the CLI reads the `base.csv` dataset bundled with
//! `wilayah-core` and keeps a binary snapshot next to it for faster
//! subsequent runs. Use `--input <path>` (or `WILAYAH_DATA`) to point to a
//! different dataset and `--no-cache` to always parse the text.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wilayah_core::api::{views, RegionPathView, RegionView};
use wilayah_core::{split_region_code, RegionHierarchy, RegionRef};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    // `split` works on the code syntax alone.
    if let Commands::Split { code } = &args.command {
        let parts = split_region_code(code);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&parts)?);
        } else {
            println!("Province: {}", parts.province_code);
            println!("Regency:  {}", parts.regency_code);
            println!("District: {}", parts.district_code);
            println!("Village:  {}", parts.village_code);
        }
        return Ok(());
    }

    // Determine input file (default base.csv inside wilayah-core)
    let input_path = args.input.clone().unwrap_or_else(|| {
        let dir = RegionHierarchy::default_data_dir();
        let filename = RegionHierarchy::default_dataset_filename();
        dir.join(filename).to_string_lossy().to_string()
    });

    let hierarchy = if args.no_cache {
        RegionHierarchy::load_from_path(&input_path)
    } else {
        RegionHierarchy::load_cached(&input_path)
    }
    .with_context(|| format!("failed to load region dataset {input_path}"))?;

    match args.command {
        Commands::Split { .. } => {}

        Commands::Stats => {
            let stats = hierarchy.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Region statistics:");
                println!("  Provinces: {}", stats.provinces);
                println!("  Regencies: {}", stats.regencies);
                println!("  Districts: {}", stats.districts);
                println!("  Villages:  {}", stats.villages);
            }
        }

        Commands::Provinces => {
            print_list(&hierarchy.children(""), args.json)?;
        }

        Commands::Children { code } => {
            if hierarchy.lookup(&code).is_none() {
                eprintln!("No region found for: {code}");
            } else {
                print_list(&hierarchy.children(&code), args.json)?;
            }
        }

        Commands::Path { code } => {
            let view = RegionPathView::resolve(&hierarchy, &code);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else if view.village.is_none() {
                eprintln!("No village found for: {code}");
            } else {
                for level in [&view.province, &view.regency, &view.district, &view.village]
                    .into_iter()
                    .flatten()
                {
                    println!("{:<9} {:<15} {}", level.level.as_str(), level.code, level.name);
                }
            }
        }

        Commands::Describe { code } => {
            let label = hierarchy.region_description(&code);
            if args.json {
                println!("{}", serde_json::to_string(&label)?);
            } else {
                println!("{label}");
            }
        }

        Commands::Search {
            query,
            limit,
            all_levels,
        } => {
            let hits: Vec<RegionRef<'_>> = if all_levels {
                hierarchy.search(&query, limit)
            } else {
                hierarchy
                    .search_villages(&query, limit)
                    .into_iter()
                    .map(RegionRef::Village)
                    .collect()
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&views(hits))?);
            } else if hits.is_empty() {
                println!("No regions found matching: {query}");
            } else {
                for hit in hits {
                    match hit {
                        RegionRef::Village(v) => {
                            println!("{}  {}", v.code(), hierarchy.region_description(v.code()))
                        }
                        other => println!("{}  {} ({})", other.code(), other.name(), other.level()),
                    }
                }
            }
        }

        Commands::Snapshot { output } => {
            hierarchy
                .save_as(&output)
                .with_context(|| format!("failed to write snapshot {output}"))?;
            println!("Snapshot written to {output}");
        }

        #[cfg(feature = "fetch")]
        Commands::Forecast { code, csv, alerts } => {
            run_forecast(&hierarchy, &code, csv.as_deref(), alerts, args.json)?;
        }
    }

    Ok(())
}

fn print_list(items: &[RegionRef<'_>], json: bool) -> anyhow::Result<()> {
    if json {
        let out: Vec<RegionView> = views(items.iter().copied());
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for r in items {
            let name = if r.name().is_empty() { "(tanpa nama)" } else { r.name() };
            println!("{:<15} {}", r.code(), name);
        }
    }
    Ok(())
}

#[cfg(feature = "fetch")]
fn run_forecast(
    hierarchy: &RegionHierarchy,
    code: &str,
    csv_path: Option<&str>,
    with_alerts: bool,
    json: bool,
) -> anyhow::Result<()> {
    use wilayah_core::weather::{evaluate_alerts, to_csv, ForecastClient};

    if hierarchy.village(code).is_none() {
        tracing::warn!(code, "village code not in dataset, querying anyway");
    }

    let client = ForecastClient::new()?;
    let rows = client
        .fetch(code)
        .with_context(|| format!("failed to fetch forecast for {code}"))?;

    if let Some(path) = csv_path {
        std::fs::write(path, to_csv(&rows)).with_context(|| format!("failed to write {path}"))?;
        eprintln!("CSV written to {path}");
    }

    let alerts = if with_alerts { evaluate_alerts(&rows) } else { Vec::new() };

    if json {
        let out = serde_json::json!({
            "location": hierarchy.region_description(code),
            "forecast": rows,
            "alerts": alerts,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Prakiraan cuaca: {}", hierarchy.region_description(code));
    for row in &rows {
        println!(
            "{} {}  {:<20} {:>5}°C {:>4}%  {:>5} km/j ({:.1} kn)",
            row.date,
            row.time,
            row.condition,
            row.temperature.map(|t| t.to_string()).unwrap_or_default(),
            row.humidity.map(|h| h.to_string()).unwrap_or_default(),
            row.wind_speed_kmh.map(|w| w.to_string()).unwrap_or_default(),
            row.wind_speed_knots(),
        );
    }

    if with_alerts {
        if alerts.is_empty() {
            println!("\nTidak ada peringatan cuaca khusus saat ini.");
        }
        for alert in &alerts {
            println!("\n[{}] {}", alert.severity.label(), alert.title);
            println!("  {}", alert.message);
            println!("  Jam: {}  Durasi: {}", alert.time, alert.duration);
            for advice in alert.advice {
                println!("  - {advice}");
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
