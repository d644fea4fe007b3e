use std::fs;
use std::io::Write;
use std::time::SystemTime;
use wilayah_core::loader::CACHE_SUFFIX;
use wilayah_core::{RegionError, RegionHierarchy, DEFAULT_REGION_CODE};

const SAMPLE: &str = "36,DI Yogyakarta\n36.71,Kota Yogyakarta\n36.71.01,Gondokusuman\n36.71.01.1003,Demangan\n";

#[test]
fn bundled_dataset_contains_the_default_village() {
    let h = RegionHierarchy::load().expect("bundled dataset");
    assert_eq!(
        h.region_description(DEFAULT_REGION_CODE),
        "Demangan, Gondokusuman, Kota Yogyakarta, DI Yogyakarta"
    );
    // memoized
    let again = RegionHierarchy::load().expect("bundled dataset");
    assert!(std::ptr::eq(h, again));
}

#[test]
fn loads_plain_text_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("base.csv");
    fs::write(&path, SAMPLE).expect("write");

    let h = RegionHierarchy::load_from_path(&path).expect("load");
    assert_eq!(h.stats().villages, 1);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_file() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("base.csv.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&path).expect("create"), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).expect("write");
    encoder.finish().expect("finish");

    let h = RegionHierarchy::load_from_path(&path).expect("load");
    assert_eq!(h.region_path("36.71.01.1003").district.map(|d| d.name()), Some("Gondokusuman"));
}

#[test]
fn missing_file_is_reported() {
    let err = RegionHierarchy::load_from_path("/no/such/dir/base.csv").unwrap_err();
    assert!(matches!(err, RegionError::NotFound(_)));
}

#[test]
fn non_utf8_input_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.csv");
    let mut file = fs::File::create(&path).expect("create");
    file.write_all(b"36,DI Yogyakarta\n36.71,Kota \xff\xfe\n").expect("write");
    drop(file);

    let err = RegionHierarchy::load_from_path(&path).unwrap_err();
    assert!(matches!(err, RegionError::InvalidData(_)));
}

#[test]
fn snapshot_round_trip_preserves_structure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("base.csv");
    fs::write(&csv, SAMPLE).expect("write");
    let h = RegionHierarchy::load_from_path(&csv).expect("load");

    let snapshot = dir.path().join("regions.bin");
    h.save_as(&snapshot).expect("save");
    let restored = RegionHierarchy::load_binary(&snapshot).expect("restore");
    assert_eq!(h, restored);
}

#[test]
fn load_cached_writes_and_refreshes_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("base.csv");
    fs::write(&csv, SAMPLE).expect("write");
    let cache = dir.path().join(format!("base.csv{CACHE_SUFFIX}"));

    let first = RegionHierarchy::load_cached(&csv).expect("first load");
    assert!(cache.exists());
    let second = RegionHierarchy::load_cached(&csv).expect("cached load");
    assert_eq!(first, second);

    // Age the snapshot so the edited source wins.
    fs::write(&csv, format!("{SAMPLE}36.71.01.1001,Baciro\n")).expect("edit");
    fs::File::options()
        .write(true)
        .open(&cache)
        .and_then(|f| f.set_modified(SystemTime::UNIX_EPOCH))
        .expect("age snapshot");

    let third = RegionHierarchy::load_cached(&csv).expect("rebuilt load");
    assert_eq!(third.stats().villages, 2);
}

#[test]
fn corrupt_snapshot_falls_back_to_source() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = dir.path().join("base.csv");
    let cache = dir.path().join(format!("base.csv{CACHE_SUFFIX}"));
    fs::write(&csv, SAMPLE).expect("write");
    fs::write(&cache, b"not a snapshot").expect("write garbage");

    let h = RegionHierarchy::load_cached(&csv).expect("fallback");
    assert_eq!(h.stats().villages, 1);
}
