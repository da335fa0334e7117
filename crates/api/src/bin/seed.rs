//! `nexaura-seed`: load products and policies into the database.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nexaura_api::config::DatabaseConfig;
use nexaura_api::seed::{self, Catalog};
use nexaura_api::telemetry;
use nexaura_db::storage::DatabaseStorage;

#[derive(Parser)]
#[command(name = "nexaura-seed")]
#[command(about = "Load products and policies from a JSON catalog")]
struct Args {
    /// Path to the catalog file
    #[arg(short, long, default_value = "db/seed/catalog.json")]
    catalog: PathBuf,

    /// Validate the catalog without touching the database
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("nexaura_api=info,nexaura_db=info");

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.catalog)
        .with_context(|| format!("Failed to read {}", args.catalog.display()))?;
    let catalog: Catalog = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", args.catalog.display()))?;

    let items = seed::validate_catalog(&catalog)?;
    tracing::info!(
        products = catalog.products.len(),
        policies = catalog.policies.len(),
        "Catalog validated"
    );

    if args.dry_run {
        return Ok(());
    }

    let db = DatabaseConfig::from_env()?;
    let pool = nexaura_db::create_pool(&db.url, db.max_connections)
        .await
        .context("Failed to connect to database")?;
    nexaura_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let storage = DatabaseStorage::new(pool);
    let report = seed::apply(&storage, &items).await?;
    tracing::info!(
        products_created = report.products_created,
        products_skipped = report.products_skipped,
        policies_created = report.policies_created,
        policies_skipped = report.policies_skipped,
        "Seed complete"
    );

    Ok(())
}
