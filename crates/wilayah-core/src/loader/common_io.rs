// crates/wilayah-core/src/loader/common_io.rs
use crate::error::{RegionError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a file, buffers it, and unwraps gzip when the name ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        RegionError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(RegionError::InvalidData(format!(
                "{} is gzip compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Drain a reader into a `String`, rejecting invalid UTF-8.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes)
        .map_err(|e| RegionError::InvalidData(format!("dataset is not valid UTF-8: {e}")))
}

/// `base.csv` + `suffix` → `base.csv<suffix>` in the same directory.
pub fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "regions".to_owned());
    source.with_file_name(format!("{filename}{suffix}"))
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_sits_next_to_source() {
        let p = get_cache_path(Path::new("/data/base.csv"), ".snapshot.bin");
        assert_eq!(p, PathBuf::from("/data/base.csv.snapshot.bin"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = read_text(&[0x33u8, 0x36, 0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, RegionError::InvalidData(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.csv")).err();
        assert!(matches!(err, Some(RegionError::NotFound(_))));
    }
}
