//! Basic usage example for wilayah-rs
//!
//! Walks the bundled dataset the way the location picker does:
//! provinces, then children of a selection, then the label for a village.

use wilayah_rs::prelude::*;
use wilayah_rs::DEFAULT_SEARCH_LIMIT;

fn main() -> Result<()> {
    println!("=== wilayah-rs Basic Usage Example ===\n");

    println!("Loading region dataset...");
    let regions = RegionHierarchy::load()?;
    let stats = regions.stats();
    println!(
        "✓ {} provinces, {} regencies, {} districts, {} villages\n",
        stats.provinces, stats.regencies, stats.districts, stats.villages
    );

    // Example 1: province dropdown
    println!("--- Example 1: Provinces (sorted by name) ---");
    for province in regions.provinces() {
        println!("{:<4} {}", province.code(), province.name());
    }
    println!();

    // Example 2: cascading selection
    println!("--- Example 2: Children of a selection ---");
    let parts = split_region_code(DEFAULT_REGION_CODE);
    for code in [&parts.province_code, &parts.regency_code, &parts.district_code] {
        let names: Vec<_> = regions.children(code).iter().map(|r| r.name()).collect();
        println!("{code}: {}", names.join(", "));
    }
    println!();

    // Example 3: label for the weather card
    println!("--- Example 3: Village description ---");
    println!("{}", regions.region_description(DEFAULT_REGION_CODE));
    let path = regions.region_path(DEFAULT_REGION_CODE);
    if let Some(district) = path.district {
        println!("District: {} ({})", district.name(), district.code());
    }
    println!();

    // Example 4: search
    println!("--- Example 4: Village search ---");
    for village in regions.search_villages("utara", DEFAULT_SEARCH_LIMIT) {
        println!("{}  {}", village.code(), regions.region_description(village.code()));
    }
    println!();

    // Example 5: second load hits the process cache
    println!("--- Example 5: Cached load ---");
    let start = std::time::Instant::now();
    let again = RegionHierarchy::load()?;
    println!("Same instance: {} ({:?})", std::ptr::eq(regions, again), start.elapsed());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
