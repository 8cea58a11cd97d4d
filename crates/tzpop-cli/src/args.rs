// crates/tzpop-cli/src/args.rs
use clap::{Parser, Subcommand};

/// CLI arguments for tzpop
#[derive(Debug, Parser)]
#[command(
    name = "tzpop",
    version,
    about = "Current time per IANA timezone, and how often each timezone was asked for"
)]
pub struct CliArgs {
    /// Local JSON (or .json.gz) list of timezones, used instead of the API listing
    #[arg(short = 'c', long = "catalog", env = "TZPOP_CATALOG", global = true)]
    pub catalog: Option<String>,

    /// JSON file holding popularity counters (default: in-memory, lost on exit)
    #[arg(short = 's', long = "store", env = "TZPOP_STORE", global = true)]
    pub store: Option<String>,

    /// Redis URL for popularity counters (bare `--redis` uses redis://127.0.0.1:6379/)
    #[cfg(feature = "redis")]
    #[arg(
        long = "redis",
        env = "TZPOP_REDIS_URL",
        global = true,
        num_args = 0..=1,
        default_missing_value = tzpop_core::store::redis::DEFAULT_REDIS_URL,
        conflicts_with = "store"
    )]
    pub redis: Option<String>,

    /// Base URL of the World Time API
    #[arg(long = "api-url", env = "TZPOP_API_URL", global = true)]
    pub api_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long = "timeout-secs", global = true)]
    pub timeout_secs: Option<u64>,

    /// Count a time query only when it succeeds (default: count every attempt)
    #[arg(long = "count-on-success", global = true)]
    pub count_on_success: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the current time at a timezone
    Time {
        /// Fully-qualified timezone (e.g. America/New_York)
        timezone: String,
    },

    /// How often a timezone, or every timezone of a region, was queried
    Popularity {
        /// Timezone (America/New_York) or region (America)
        query: String,

        /// Also print the count of every contributing timezone
        #[arg(short = 'b', long = "breakdown")]
        breakdown: bool,
    },

    /// List catalog entries
    List {
        /// Only entries of this region (e.g. Europe)
        region: Option<String>,
    },

    /// List the distinct regions
    Regions,

    /// Show a summary of the catalog
    Stats,
}
