use portal_router::{
    AppShell, AppState,
    config::{AppConfig, Env},
    create_router,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, initialises logging, builds the route table and serves
/// the application's URL space.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    // Loads .env file settings before configuration can be read.
    dotenv::dotenv().ok();
    // AppConfig::load() panics on an invalid ROUTER_BASE or HISTORY_MODE, or a
    // production run without APP_SHELL_PATH.
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // RUST_LOG takes priority, falling back to local-development defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "portal_router=debug,tower_http=info,axum=trace".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: Pretty print output for human readability.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON lines for ingestion by the log aggregator.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. App Shell
    // The front-end build's index.html when configured, the built-in document otherwise.
    let shell = match &config.shell_path {
        Some(path) => AppShell::load(path).expect("FATAL: Failed to read APP_SHELL_PATH."),
        None => AppShell::default(),
    };

    // 5. Router Configuration & Unified State Assembly
    // Builds the route table under the configured history strategy, once, and
    // bundles it with the shell and config into the shared AppState.
    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config, shell);
    tracing::info!(
        history = ?state.router.history().mode(),
        base = state.router.history().base(),
        routes = state.router.routes().len(),
        "router configured"
    );
    // Every path the browser can land on directly.
    for path in state.router.server_paths() {
        tracing::info!(path = %path, "serving app shell");
    }

    // 6. Router and Server Startup
    let app = create_router(state);

    // Binds the TCP listener and initiates the HTTP server.
    let listener = TcpListener::bind(&bind_addr)
        .await
        .expect("FATAL: Failed to bind BIND_ADDR.");

    tracing::info!("Listening on {}", bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    // The long-running Axum server process.
    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly.");
}
