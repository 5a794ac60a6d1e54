use api::auth::middleware::log_request;
use api::routes::routes;
use axum::middleware::from_fn_with_state;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{
    config,
    state::{AppState, JwtKeys},
};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    let jwt = match JwtKeys::from_config() {
        Ok(keys) => keys,
        Err(e) => {
            tracing::error!(error = %e, "invalid token configuration");
            eprintln!("Refusing to start: {e}");
            std::process::exit(1);
        }
    };

    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "failed to open database");
            eprintln!("Failed to open database at {}: {e}", config::database_path());
            std::process::exit(1);
        }
    };

    if let Err(e) = Migrator::up(&db, None).await {
        tracing::error!(error = %e, "migrations failed");
        eprintln!("Failed to apply migrations: {e}");
        std::process::exit(1);
    }

    let app_state = AppState::new(db, jwt);

    let cors = CorsLayer::very_permissive();

    let app = routes(app_state.clone())
        .layer(from_fn_with_state(app_state, log_request))
        .layer(cors);

    let addr: SocketAddr = match format!("{}:{}", config::host(), config::port()).parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("Invalid HOST/PORT: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );
    tracing::info!(%addr, env = %config::env(), "server starting");

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "server crashed");
    }
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let stdout_layer = config::log_to_stdout().then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
            .with_thread_ids(true)
    });

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    guard
}
