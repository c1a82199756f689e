use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("saldo_server=info,tower_http=info")),
        )
        .init();

    let addr = std::env::var("SALDO_ADDR").unwrap_or_else(|_| "127.0.0.1:8570".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, routes::router()).await?;
    Ok(())
}
