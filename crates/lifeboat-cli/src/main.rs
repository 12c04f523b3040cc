//! Lifeboat server binary: load the classifier artifact once, then serve the
//! prediction form until shutdown. A failed load does not abort; the server
//! comes up in degraded mode and answers every request with the fixed error
//! page until restarted with a valid artifact.

use std::path::Path;

use clap::Parser;
use lifeboat_ai::MODEL_FILE;
use lifeboat_web::{AppState, router};

#[derive(Parser, Debug)]
#[command(name = "lifeboat", version, about = "Titanic survival prediction web form")]
struct Cli {
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    tracing::info!("lifeboat v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_artifact(Path::new(MODEL_FILE));
    let app = router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
