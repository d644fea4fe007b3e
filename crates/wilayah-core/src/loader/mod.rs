// crates/wilayah-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, UTF-8) and hands the
//! text to [`build_hierarchy`]. The hierarchy itself never touches I/O.

use crate::error::Result;
use crate::model::{build_hierarchy, RegionHierarchy};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod common_io;
pub mod snapshot;

pub use snapshot::{CompressionMode, CACHE_SUFFIX};

// The reference dataset is static, so one parse per process is enough.
static REGION_CACHE: OnceCell<RegionHierarchy> = OnceCell::new();

impl RegionHierarchy {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "base.csv"
    }

    /// Load the bundled dataset once and keep it for the rest of the process.
    pub fn load() -> Result<&'static RegionHierarchy> {
        REGION_CACHE.get_or_try_init(|| {
            let path = Self::default_data_dir().join(Self::default_dataset_filename());
            Self::load_from_path(path)
        })
    }

    /// Read a `<code>,<name>` file (gzip when it ends in `.gz`) and build it.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading region dataset");
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    /// Build from any reader yielding UTF-8 text.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let text = common_io::read_text(reader)?;
        Ok(build_hierarchy(&text))
    }
}
