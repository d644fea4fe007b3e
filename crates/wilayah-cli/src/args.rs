use clap::{Parser, Subcommand};
use wilayah_core::{DEFAULT_REGION_CODE, DEFAULT_SEARCH_LIMIT};

/// CLI arguments for wilayah
#[derive(Debug, Parser)]
#[command(
    name = "wilayah",
    version,
    about = "Inspect the Indonesian administrative region dataset and BMKG forecasts"
)]
pub struct CliArgs {
    /// Path to the `<code>,<name>` dataset (plain or .gz). Defaults to the bundled base.csv
    #[arg(short = 'i', long = "input", env = "WILAYAH_DATA", global = true)]
    pub input: Option<String>,

    /// Parse the dataset every run instead of reusing the binary snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how many regions each level holds
    Stats,

    /// List all provinces
    Provinces,

    /// List the direct children of a province, regency or district code
    Children {
        /// Parent code (e.g. 36, 36.71, 36.71.01)
        code: String,
    },

    /// Show the province/regency/district/village chain of a village code
    Path {
        #[arg(default_value = DEFAULT_REGION_CODE)]
        code: String,
    },

    /// Print the one-line label of a village code
    Describe {
        #[arg(default_value = DEFAULT_REGION_CODE)]
        code: String,
    },

    /// Split a code into its per-level prefix codes (no dataset needed)
    Split { code: String },

    /// Search region names (case and accent insensitive)
    Search {
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Search every level instead of villages only
        #[arg(long = "all-levels")]
        all_levels: bool,
    },

    /// Write a binary snapshot of the parsed dataset
    Snapshot {
        /// Output path
        output: String,
    },

    /// Fetch the BMKG forecast for a village code
    #[cfg(feature = "fetch")]
    Forecast {
        #[arg(default_value = DEFAULT_REGION_CODE)]
        code: String,

        /// Also write the forecast table as CSV to this path
        #[arg(long = "csv")]
        csv: Option<String>,

        /// Print threshold alerts for the coming hours
        #[arg(long = "alerts")]
        alerts: bool,
    },
}
