//! Loads a catalog from a JSON dataset and prints what the queries say about it.
//!
//! Usage: `litcatalog <dataset.json>`, e.g. `litcatalog demos/bookstore.json`
//!
//! The dataset looks like `{ "name": "...", "items": [{ "kind": "novel", ... }] }`.
//! Limits come from `litcatalog.toml` in the working directory when present, then
//! from `LITCATALOG_*` environment variables.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use litcatalog::catalog::Catalog;
use litcatalog::literature::{ItemRecord, Literature};
use litcatalog::settings::Limits;
use litcatalog::{CatalogError, Result};

const SETTINGS_FILE: &str = "litcatalog.toml";

#[derive(Deserialize)]
struct Dataset {
    name: String,
    items: Vec<ItemRecord>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let dataset_path = std::env::args()
        .nth(1)
        .ok_or(CatalogError::NullArgument("dataset path"))?;
    let settings = Path::new(SETTINGS_FILE);
    let limits = Limits::load(settings.exists().then_some(settings))?;

    let dataset: Dataset = serde_json::from_str(&fs::read_to_string(&dataset_path)?)?;
    let catalog = Catalog::from_records(dataset.name, dataset.items, &limits)?;
    info!(catalog = catalog.name(), items = catalog.len(), "catalog loaded");

    println!("{}", catalog.name());
    for title in catalog.titles_uppercase() {
        println!("  {title}");
    }
    println!("Alphabetical: {}", catalog.titles_alphabetical().join(", "));
    println!("Containing \"the\": {}", catalog.count_containing("the"));
    if !catalog.is_empty() {
        println!("Longest title: {}", catalog.longest_title()?);
        let oldest = catalog.oldest()?;
        println!("Oldest: {} ({})", oldest.title(), oldest.year_published());
    }
    Ok(())
}
