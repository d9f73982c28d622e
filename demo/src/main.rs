//! Nabha Health Pharmacy Stock Checker — CLI
//!
//! Searches the medicine catalog by name or category and prints one card per
//! match with each pharmacy's stock badge and a `tel:` call link.
//!
//! Usage:
//!   cargo run -p demo -- search para
//!   cargo run -p demo -- search fever --location bus-stand
//!   cargo run -p demo -- search --catalog stock.toml --json
//!   cargo run -p demo -- locations
//!   cargo run -p demo -- catalog

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use nabha_contracts::{Location, NabhaError, NabhaResult};
use nabha_stock::{render, Catalog, StockView};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Nabha Health — check medicine availability at local pharmacies.
#[derive(Parser)]
#[command(
    name = "nabha",
    about = "Nabha Health pharmacy stock checker",
    long_about = "Searches the medicine catalog by name or category and shows\n\
                  per-pharmacy stock status with call links."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search medicines by name or category (case-insensitive).
    Search {
        /// Text to look for. Omit to list every medicine.
        #[arg(default_value = "")]
        query: String,

        /// Location selector value (all, main-market, bus-stand, civil-lines, hospital-road).
        /// Shown in the header only; results are not narrowed by location.
        #[arg(long, short, default_value = "all")]
        location: Location,

        /// TOML catalog file. Defaults to the built-in sample catalog.
        #[arg(long, short)]
        catalog: Option<PathBuf>,

        /// Print matching medicines as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },
    /// List the location selector options.
    Locations,
    /// Print the catalog in TOML form.
    Catalog {
        /// TOML catalog file. Defaults to the built-in sample catalog.
        #[arg(long, short)]
        catalog: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Search {
            query,
            location,
            catalog,
            json,
        } => run_search(&query, location, catalog, json),
        Command::Locations => {
            run_locations();
            Ok(())
        }
        Command::Catalog { catalog } => run_catalog(catalog),
    };

    if let Err(e) = result {
        eprintln!("nabha: {}", e);
        std::process::exit(1);
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_search(
    query: &str,
    location: Location,
    catalog_path: Option<PathBuf>,
    json: bool,
) -> NabhaResult<()> {
    let catalog = Catalog::load(catalog_path.as_deref())?;
    info!(medicines = catalog.len(), "catalog loaded");

    let mut view = StockView::new(catalog);
    view.set_search_term(query);
    view.set_location(location);

    let visible = view.visible();

    if json {
        let out = serde_json::to_string_pretty(&visible).map_err(|e| NabhaError::Serialization {
            reason: e.to_string(),
        })?;
        println!("{}", out);
    } else {
        print!(
            "{}",
            render::render_screen(view.search_term(), view.location(), &visible)
        );
    }

    Ok(())
}

fn run_locations() {
    for loc in Location::ALL {
        println!("{:<14} {}", loc.slug(), loc.label());
    }
}

fn run_catalog(catalog_path: Option<PathBuf>) -> NabhaResult<()> {
    let catalog = Catalog::load(catalog_path.as_deref())?;
    print!("{}", catalog.to_toml_string()?);
    Ok(())
}
