use anyhow::Context;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use happydiving_storefront::{cache, config::Config, rotation, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "happydiving_storefront=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    let state = AppState::new(config.clone());

    // Fail fast on a broken catalog rather than serving 503s
    state
        .catalog()
        .await
        .context("failed to load equipment catalog")?;

    tokio::spawn(cache::start_catalog_refresher(
        state.cache.clone(),
        state.source.clone(),
        config.catalog_refresh,
    ));
    tokio::spawn(rotation::start_rotation(
        state.rotator.clone(),
        config.rotation_interval,
    ));

    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Happy Diving storefront listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
