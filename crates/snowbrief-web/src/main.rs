use tracing_subscriber::EnvFilter;

use snowbrief_web::{router, DEFAULT_APP_PREFIX};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_env("SNOWBRIEF_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let prefix =
        std::env::var("APP_PREFIX").unwrap_or_else(|_| DEFAULT_APP_PREFIX.to_owned());
    let addr =
        std::env::var("SNOWBRIEF_WEB_ADDR").unwrap_or_else(|_| "127.0.0.1:8787".to_owned());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "snowbrief-web listening");
    axum::serve(listener, router(prefix)).await
}
