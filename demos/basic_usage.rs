//! Basic usage example for tzpop-rs
//!
//! Loads the catalog from the World Time API, asks for the time in a few
//! places and shows how the popularity counters roll up by region.
//!
//! Run with: cargo run --example basic_usage

use tzpop_core::{Catalog, MemoryStore, QueryEngine, Result, ServiceConfig, WorldTimeApi};

fn main() -> Result<()> {
    println!("=== tzpop-rs Basic Usage ===\n");

    let api = WorldTimeApi::new(&ServiceConfig::default())?;
    let catalog = Catalog::load(&api)?;
    let stats = catalog.stats();
    println!(
        "Catalog: {} timezones in {} regions\n",
        stats.timezones, stats.regions
    );

    let engine = QueryEngine::new(catalog, MemoryStore::new(), api);

    println!("--- Current time ---");
    for tz in ["America/New_York", "America/Chicago", "Europe/London", "Mars/Crater"] {
        match engine.current_time_at(tz) {
            Ok(time) => println!("  {tz}: {time}"),
            Err(e) => println!("  {tz}: {e}"),
        }
    }
    println!();

    println!("--- Popularity ---");
    for query in ["America", "America/New_York", "Europe", "Asia", "Americ"] {
        println!("  {query}: {}", engine.popularity_of(query)?);
    }

    Ok(())
}
