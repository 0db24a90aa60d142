//! Storefront Server
//!
//! Axum server rendering the shop, product, cart and auth pages over a
//! shared in-memory store, with a small JSON API alongside.

mod api;
mod app;
mod assets;
mod config;
mod pages;
mod views;

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use storefront_core::auth::MockAcceptor;
use storefront_core::catalog::{load_catalog, CatalogSource, HttpCatalog};
use storefront_core::models::format_price;
use storefront_core::state::Store;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use app::AppState;
use config::{Args, CliCommand};

const DEFAULT_LOG_FILTER: &str = "storefront_server=info,storefront_core=info,tower_http=info";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub async fn run_server(args: &Args) -> anyhow::Result<()> {
    let catalog: Arc<dyn CatalogSource> = Arc::new(
        HttpCatalog::new(args.catalog.to_config()).context("Failed to build catalog client")?,
    );
    let store = Arc::new(Store::new());

    // Pages render the loading state until this lands
    {
        let store = store.clone();
        let catalog = catalog.clone();
        tokio::spawn(async move {
            let _ = store.load(catalog.as_ref()).await;
        });
    }

    let state = AppState::new(store, catalog, Arc::new(MockAcceptor));
    let app = app::router(state);

    let addr = args.listen.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        api_base_url = %args.catalog.api_base_url,
        "Storefront running at http://{}",
        addr
    );
    tracing::info!("Pages: /, /product/:id, /cart, /login, /signup");
    tracing::info!("API:   /api/v1/catalog, /api/v1/cart, /api/v1/events, /api/v1/openapi.json");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn check(args: &Args) -> anyhow::Result<()> {
    let client = HttpCatalog::new(args.catalog.to_config())?;
    let catalog = load_catalog(&client)
        .await
        .with_context(|| format!("Catalog at {} is not usable", client.config().base_url))?;

    println!("Catalog OK: {}", client.config().base_url);
    println!("  Products:   {}", catalog.products.len());
    println!("  Categories: {}", catalog.categories.join(", "));
    println!("  Max price:  {}", format_price(catalog.price_ceiling()));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    match args.command {
        Some(CliCommand::Check) => check(&args).await,
        Some(CliCommand::Serve) | None => run_server(&args).await,
    }
}
