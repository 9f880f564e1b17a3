mod config;
mod routes;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let app = match routes::app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "router init failed");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, assets = %config.assets_dir.display(), "leadpage listening");
    axum::serve(listener, app).await.expect("server failed");
}
