mod config;
mod error;
mod run;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // .env is optional; a missing file is not an error.
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(error) = run::run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SNOWBRIEF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
