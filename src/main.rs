//! CLI host for clipnav.
//!
//! Rewrites clipboard text against the currently viewed page and manages the
//! domain map file.
//!
//! # Usage
//!
//! ```bash
//! # Rewrite clipboard text (stdin) against the page you are on
//! wl-paste | clipnav rewrite --page "https://staging.example.com/dash"
//!
//! # Same, but machine-readable
//! wl-paste | clipnav rewrite --page "https://staging.example.com/" --json
//!
//! # Inspect the domain map
//! clipnav map show
//! clipnav map check
//!
//! # Regenerate the map from the site catalog
//! clipnav map sync -y
//! ```
//!
//! # Environment Variables
//!
//! - `CLIPNAV_MAP_FILE`: domain map path (default: `domainmap.json`)
//! - `CATALOG_URL`, `CATALOG_SECRET`: required for `map sync`
//! - `LOG_FORMAT`: `text` or `json` (default: `text`)

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

use clipnav::application::services::{MapSyncService, RewriteService};
use clipnav::config::{self, Config};
use clipnav::domain::entities::PageContext;
use clipnav::domain::repositories::MapStore;
use clipnav::infrastructure::{HttpSiteCatalog, JsonMapStore};

/// Clipboard URL rewriter for paired production/staging environments.
#[derive(Parser)]
#[command(name = "clipnav")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Rewrite clipboard text against the current page
    Rewrite {
        /// URL of the currently viewed page
        #[arg(short, long)]
        page: String,

        /// Read clipboard text from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Domain map operations
    Map {
        #[command(subcommand)]
        action: MapAction,
    },
}

/// Domain map subcommands.
#[derive(Subcommand)]
enum MapAction {
    /// Print the map entries and generation time
    Show,

    /// Load and validate the map file
    Check,

    /// Regenerate the map from the site catalog
    Sync {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);

    match cli.command {
        Commands::Rewrite { page, input, json } => rewrite(&config, &page, input, json).await?,
        Commands::Map { action } => match action {
            MapAction::Show => map_show(&config).await?,
            MapAction::Check => map_check(&config).await?,
            MapAction::Sync { yes } => map_sync(&config, yes).await?,
        },
    }

    Ok(())
}

/// Initializes tracing on stderr so stdout stays clean for results.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Runs the batch rewrite and prints the partitioned report.
async fn rewrite(config: &Config, page: &str, input: Option<PathBuf>, json: bool) -> Result<()> {
    let store = JsonMapStore::new(&config.map_file);
    let map = Arc::new(store.load().await.with_context(|| {
        format!(
            "Failed to load domain map from {} (run 'clipnav map sync' first?)",
            config.map_file
        )
    })?);

    let ctx = PageContext::from_url(page, &map)
        .context("--page must be an absolute URL with a hostname")?;

    let raw = read_clip_text(input)?;
    let report = RewriteService::new(map).process(&ctx, &raw);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.targets.is_empty() && report.rejected.is_empty() {
        println!("{}", "Nothing to rewrite.".yellow());
        return Ok(());
    }

    for url in &report.targets {
        println!("{}", url.green());
    }

    if !report.rejected.is_empty() {
        println!();
        println!("{}", "Not a valid URL or path:".red().bold());
        for line in &report.rejected {
            println!("  {}", line.dimmed());
        }
    }

    Ok(())
}

/// Reads clipboard text from the given file, or stdin when none is given.
fn read_clip_text(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read clipboard text from stdin")?;
            Ok(buf)
        }
    }
}

/// Prints the map file contents.
async fn map_show(config: &Config) -> Result<()> {
    let store = JsonMapStore::new(&config.map_file);
    let file = store
        .load_file()
        .await
        .with_context(|| format!("Failed to load {}", config.map_file))?;

    println!(
        "{} ({} entries, generated {})",
        config.map_file.bold(),
        file.domains.len(),
        file.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let mut entries: Vec<_> = file.domains.iter().collect();
    entries.sort();
    for (from, to) in entries {
        println!("  {} {} {}", from.cyan(), "->".dimmed(), to);
    }

    Ok(())
}

/// Loads the map with full validation and reports the entry count.
async fn map_check(config: &Config) -> Result<()> {
    let store = JsonMapStore::new(&config.map_file);
    let map = store
        .load()
        .await
        .with_context(|| format!("Map file {} failed validation", config.map_file))?;

    println!(
        "{} {}: {} entries, all hostnames valid",
        "✓".green().bold(),
        config.map_file,
        map.len()
    );

    Ok(())
}

/// Regenerates the map file from the site catalog.
async fn map_sync(config: &Config, yes: bool) -> Result<()> {
    let (catalog_url, catalog_secret) = match (&config.catalog_url, &config.catalog_secret) {
        (Some(url), Some(secret)) => (url.clone(), secret.clone()),
        _ => anyhow::bail!("map sync requires CATALOG_URL and CATALOG_SECRET to be set"),
    };

    let store = Arc::new(JsonMapStore::new(&config.map_file));

    if store.exists().await && !yes {
        let proceed = Confirm::new()
            .with_prompt(format!("Overwrite existing map file {}?", config.map_file))
            .default(false)
            .interact()?;

        if !proceed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let catalog = Arc::new(HttpSiteCatalog::new(
        catalog_url,
        catalog_secret,
        Duration::from_secs(config.catalog_timeout),
    )?);

    let report = MapSyncService::new(catalog, store).refresh().await?;

    println!(
        "{} {} pairs fetched, {} entries written ({} skipped)",
        "✓".green().bold(),
        report.pairs,
        report.entries,
        report.skipped
    );

    Ok(())
}
