// crates/tzpop-cli/src/main.rs

//! tzpop — Command-line interface for tzpop-core
//!
//! Prints the current time at an IANA timezone (via the World Time API) and
//! reports how often each timezone, or each region, has been asked for.
//!
//! Usage examples
//! --------------
//!
//! - Current time (counts as one query for America/New_York)
//!   $ tzpop --store counts.json time America/New_York
//!
//! - Popularity of one timezone, or summed over a region
//!   $ tzpop --store counts.json popularity America/New_York
//!   $ tzpop --store counts.json popularity America --breakdown
//!
//! - Inspect the catalog
//!   $ tzpop regions
//!   $ tzpop list Europe
//!   $ tzpop --catalog timezones.json stats
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (default `warn`), e.g. `RUST_LOG=tzpop_core=debug`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tzpop_core::{
    Catalog, CountPolicy, JsonFileStore, MemoryStore, PopularityStore, QueryEngine,
    ServiceConfig, TzError, WorldTimeApi,
};

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = ServiceConfig::default();
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    if args.count_on_success {
        config = config.with_count_policy(CountPolicy::OnSuccess);
    }

    tracing::debug!(?config, "resolved configuration");
    let api = WorldTimeApi::new(&config)?;

    // The catalog is fetched once; without it nothing else can run.
    let catalog = match &args.catalog {
        Some(path) => Catalog::load_from_path(path),
        None => Catalog::load(&api),
    }
    .context("cannot start without a timezone catalog")?;

    let store = open_store(&args)?;
    let engine = QueryEngine::new(catalog, store, api).with_count_policy(config.count_policy);

    match args.command {
        Commands::Time { timezone } => match engine.current_time_at(&timezone) {
            Ok(time) => println!("{time}"),
            Err(TzError::UnknownTimezone(_)) => println!("unknown timezone"),
            Err(e) if e.is_reported() => {
                eprintln!("{e}");
                return Ok(ExitCode::FAILURE);
            }
            Err(e) => return Err(e.into()),
        },

        Commands::Popularity { query, breakdown } => {
            if breakdown {
                let report = engine.popularity_breakdown(&query)?;
                for (id, count) in &report.entries {
                    println!("{id}: {count}");
                }
                println!("total: {}", report.total);
            } else {
                println!("{}", engine.popularity_of(&query)?);
            }
        }

        Commands::List { region } => {
            let catalog = engine.catalog();
            match region.as_deref() {
                Some(region) => {
                    let mut any = false;
                    for id in catalog.region_members(region) {
                        println!("{id}");
                        any = true;
                    }
                    if !any {
                        eprintln!("No timezones found in region: {region}");
                    }
                }
                None => {
                    for id in catalog.iter() {
                        println!("{id}");
                    }
                }
            }
        }

        Commands::Regions => {
            for region in engine.catalog().regions() {
                println!("{region}");
            }
        }

        Commands::Stats => {
            let stats = engine.catalog().stats();
            println!("Catalog statistics:");
            println!("  Timezones: {}", stats.timezones);
            println!("  Regions: {}", stats.regions);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn open_store(args: &CliArgs) -> anyhow::Result<Box<dyn PopularityStore>> {
    #[cfg(feature = "redis")]
    {
        if let Some(url) = &args.redis {
            return Ok(Box::new(tzpop_core::RedisStore::connect(url)?));
        }
    }

    match &args.store {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("cannot open popularity store {path}"))?;
            tracing::debug!(path = %store.path().display(), "using json file store");
            Ok(Box::new(store))
        }
        None => Ok(Box::new(MemoryStore::new())),
    }
}
