//! Error handling example for wilayah-rs
//!
//! Lookups never fail loudly: unknown codes give `None`, empty lists or the
//! `Kode <code>` label. Only I/O surfaces as [`RegionError`].

use wilayah_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== wilayah-rs Error Handling Example ===\n");

    // Example 1: missing dataset file
    println!("--- Example 1: Loading a file that does not exist ---");
    match RegionHierarchy::load_from_path("/nonexistent/base.csv") {
        Ok(_) => println!("unexpectedly loaded"),
        Err(RegionError::NotFound(path)) => println!("✓ NotFound: {path}"),
        Err(e) => println!("✗ other error: {e}"),
    }
    println!();

    // Example 2: malformed lines are skipped, not fatal
    println!("--- Example 2: Malformed input ---");
    let regions = build_hierarchy("36,DI Yogyakarta\nno comma here\n36..01,Bad\n,\n36.71,Kota Yogyakarta");
    println!("Provinces: {}", regions.provinces().len());
    println!("Regencies: {}", regions.regencies().len());
    println!();

    let regions = RegionHierarchy::load()?;

    // Example 3: unknown codes
    println!("--- Example 3: Unknown codes ---");
    println!("lookup(99)        -> {:?}", regions.lookup("99").map(|r| r.name()));
    println!("children(99.01)   -> {} items", regions.children("99.01").len());
    println!("description       -> {}", regions.region_description("99.01.01.0001"));
    println!("path is empty     -> {}", regions.region_path("99.01.01.0001").is_empty());
    println!();

    // Example 4: partial codes
    println!("--- Example 4: Splitting short codes ---");
    let parts = split_region_code("36.71");
    println!("{parts:?}");
    println!();

    // Example 5: empty search
    println!("--- Example 5: Blank search query ---");
    println!("hits: {}", regions.search_villages("   ", 10).len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
