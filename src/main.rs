mod data;
mod recommend;
mod server;

use std::path::Path;

use anyhow::Result;
use log::info;

use recommend::Recommender;
use server::AppState;

const DEFAULT_CATALOG: &str = "music_data.csv";
const BIND_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Catalog path from the first CLI argument, falling back to the
    // conventional file next to the binary.
    let catalog_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    let catalog = data::loader::load_catalog(Path::new(&catalog_path))?;
    info!(
        "loaded {} song(s) from {} ({} distinct title(s))",
        catalog.len(),
        catalog_path,
        catalog.distinct_titles.len()
    );

    let state = AppState::new(Recommender::new(catalog));
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    info!("tune-scout listening on http://{BIND_ADDR}");
    axum::serve(listener, app).await?;

    Ok(())
}
