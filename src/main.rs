use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use verve_core::{CoreConfig, KnowledgeStore, VerveResult, resolve_knowledge_table_path};

/// Main entry point for the Verve service
///
/// Loads the knowledge table once, then serves the REST API (with Swagger UI at `/swagger-ui`).
/// A knowledge table that cannot be loaded is fatal: the process exits before listening.
///
/// # Environment Variables
/// - `VERVE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `VERVE_KNOWLEDGE_TABLE`: knowledge table CSV (default: the bundled `crates/core/data/nutrients.csv`)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the knowledge table cannot be located or loaded,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("verve_run=info".parse()?)
                .add_directive("verve_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("VERVE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    let table_override = std::env::var("VERVE_KNOWLEDGE_TABLE")
        .ok()
        .map(PathBuf::from);
    let (cfg, store) = match load_knowledge_table(table_override) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load knowledge table: {}", e);
            return Err(e.into());
        }
    };

    if store.is_empty() {
        tracing::warn!(
            "Knowledge table {} has no records; every check will find nothing",
            cfg.knowledge_table().display()
        );
    }

    let app = api_rest::router(AppState::new(Arc::new(store)));

    tracing::info!("++ Starting Verve REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn load_knowledge_table(
    table_override: Option<PathBuf>,
) -> VerveResult<(CoreConfig, KnowledgeStore)> {
    let cfg = CoreConfig::new(resolve_knowledge_table_path(table_override)?)?;
    let store = KnowledgeStore::from_config(&cfg)?;
    Ok((cfg, store))
}
