use cryptext_api::{logging::init_tracing, routes, settings::Settings, Result};

const DEFAULT_CONFIG: &str = "config/services.toml";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_path = std::env::var("CRYPTEXT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let settings = Settings::load(&config_path)?;

    let router = routes::create_routes(&settings.limits);
    let addr = format!("{}:{}", settings.http.host, settings.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Cryptext API listening on {}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}
