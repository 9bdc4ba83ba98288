use rmcp::{ServiceExt, transport::stdio};

use airwave::config::Config;
use airwave::server::AirwaveServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout belongs to the MCP transport; log to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("airwave starting");

    let config = Config::from_env();
    let server = AirwaveServer::new(config);

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("serving error: {e:?}"))?;

    service.waiting().await?;

    tracing::info!("airwave shutting down");
    Ok(())
}
