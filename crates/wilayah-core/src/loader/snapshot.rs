// crates/wilayah-core/src/loader/snapshot.rs
//! Binary snapshots of a built hierarchy, so large datasets skip the text
//! parse on later runs.

use super::common_io;
use crate::error::{RegionError, Result};
use crate::model::RegionHierarchy;
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".snapshot.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".snapshot.bin.gz";

// Guards against decoding garbage into huge allocations.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Gzip when the `compact` feature is on.
    pub fn preferred() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

impl RegionHierarchy {
    /// Write a snapshot using the preferred compression.
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        write_snapshot(path.as_ref(), self, CompressionMode::preferred())
    }

    /// Read a snapshot written by [`save_as`](Self::save_as).
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        read_snapshot(path.as_ref(), CompressionMode::preferred())
    }

    /// **Smart load:** reuse the snapshot next to `source` when it is newer
    /// than the source, otherwise parse the source and refresh the snapshot.
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);

        if is_cache_fresh(source, &cache_path) {
            match Self::load_binary(&cache_path) {
                Ok(hierarchy) => {
                    tracing::debug!(cache = %cache_path.display(), "using region snapshot");
                    return Ok(hierarchy);
                }
                Err(e) => {
                    tracing::warn!(cache = %cache_path.display(), error = %e, "discarding unreadable snapshot");
                }
            }
        }

        let hierarchy = Self::load_from_path(source)?;

        // Best effort: the data directory may be read-only.
        if let Err(e) = hierarchy.save_as(&cache_path) {
            tracing::warn!(cache = %cache_path.display(), error = %e, "could not write region snapshot");
        }

        Ok(hierarchy)
    }
}

/// Writes any serializable value to disk.
pub fn write_snapshot<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => encode_gzip(writer, value),
        CompressionMode::None => {
            bincode_options().serialize_into(&mut writer, value)?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Reads a value written by [`write_snapshot`].
pub fn read_snapshot<T: serde::de::DeserializeOwned>(
    path: &Path,
    compression: CompressionMode,
) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        RegionError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    match compression {
        CompressionMode::Gzip => decode_gzip(reader),
        CompressionMode::None => Ok(bincode_options().deserialize_from(reader)?),
    }
}

#[cfg(feature = "compact")]
fn encode_gzip<W: Write, T: serde::Serialize>(writer: W, value: &T) -> Result<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    bincode_options().serialize_into(&mut encoder, value)?;
    encoder.finish()?.flush()?;
    Ok(())
}

#[cfg(feature = "compact")]
fn decode_gzip<R: Read, T: serde::de::DeserializeOwned>(reader: R) -> Result<T> {
    Ok(bincode_options().deserialize_from(GzDecoder::new(reader))?)
}

#[cfg(not(feature = "compact"))]
fn encode_gzip<W: Write, T: serde::Serialize>(_writer: W, _value: &T) -> Result<()> {
    Err(RegionError::InvalidData(
        "Gzip requested but 'compact' disabled".into(),
    ))
}

#[cfg(not(feature = "compact"))]
fn decode_gzip<R: Read, T: serde::de::DeserializeOwned>(_reader: R) -> Result<T> {
    Err(RegionError::InvalidData(
        "Gzip requested but 'compact' disabled".into(),
    ))
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}
