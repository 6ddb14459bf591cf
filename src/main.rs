//! Lookalike HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use lookalike::artifacts;
use lookalike::config::Config;
use lookalike::gateway::{HandlerState, create_router_with_state};
use lookalike::pipeline::DomainAnalyzer;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        artifact_path = %config.artifact_path.display(),
        top_k = config.top_k,
        "Lookalike starting"
    );

    // One-time artifact acquisition; everything after this point is
    // read-only shared state.
    let bundle = artifacts::load_or_build(&config.artifact_path, config.corpus_path.as_deref())?;
    let retriever = bundle.into_retriever()?;

    tracing::info!(
        corpus_size = retriever.corpus().len(),
        vocab_size = retriever.encoder().vocab_size(),
        "Artifacts loaded"
    );

    let analyzer = Arc::new(DomainAnalyzer::new(retriever, config.top_k));
    let app = create_router_with_state(HandlerState::new(analyzer));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Lookalike shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
