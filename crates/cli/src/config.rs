//! CLI configuration

use std::path::PathBuf;

use aurum::{
    palette::{Carat, Color},
    similarity::DEFAULT_SIMILAR_LIMIT,
};
use aurum_client::ClientConfig;
use clap::{Args, Parser, Subcommand};

/// Number of featured products shown by default.
pub(crate) const DEFAULT_FEATURED_LIMIT: usize = 8;

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}

/// Aurum storefront CLI configuration
#[derive(Debug, Parser)]
#[command(name = "aurum", about = "Browse the aurum jewelry catalog", long_about = None)]
pub(crate) struct CliConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Catalog API settings.
    #[command(flatten)]
    pub client: ClientConfig,

    /// Serve from a catalog snapshot file (YAML or JSON) instead of the API
    #[arg(long, env = "CATALOG_SNAPSHOT", global = true)]
    pub snapshot: Option<PathBuf>,

    /// Page to show.
    #[command(subcommand)]
    pub command: Command,
}

/// Storefront pages.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List products
    Products {
        /// Category id
        #[arg(long)]
        category: Option<String>,

        /// Listing filters
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show a category page
    Category {
        /// Category slug
        slug: String,

        /// Listing filters
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show a product with similar products
    Product {
        /// Product slug
        slug: String,

        /// Maximum number of similar products
        #[arg(long, default_value_t = DEFAULT_SIMILAR_LIMIT)]
        similar_limit: usize,
    },

    /// List featured products
    Featured {
        /// Maximum number of products
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,
    },

    /// List categories
    Categories,

    /// List stones
    Stones,

    /// Show the inquiry link and showrooms
    Contact {
        /// Ask about the product with this slug
        #[arg(long)]
        product: Option<String>,
    },
}

/// Filters shared by product listings.
#[derive(Debug, Clone, Default, Args)]
pub(crate) struct FilterArgs {
    /// Metal color (Yellow, Rose, White, Black)
    #[arg(long)]
    pub color: Option<Color>,

    /// Gold purity (10k, 14k, 18k, 22k)
    #[arg(long)]
    pub carat: Option<Carat>,

    /// Stone id
    #[arg(long)]
    pub stone: Option<String>,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
