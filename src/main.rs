use statusboard::{router, AppState, Config, EndpointCatalog, HttpTransport};
use std::net::SocketAddr;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "statusboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let catalog = match EndpointCatalog::load(config.endpoints_path.as_deref(), &config.local_base())
    {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("Failed to load endpoint catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Starting statusboard with {} endpoints on port {}",
        catalog.len(),
        config.port
    );

    let state = AppState::new(catalog, HttpTransport::arc());

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors).layer(TraceLayer::new_for_http());

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
