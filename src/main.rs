use anyhow::Context;
use chat_stub::config::ServerConfig;
use chat_stub::server::serve;
use chat_stub::util::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return Err(e).context("failed to load configuration");
        }
    };

    tracing::info!(
        "Reply variant: {} (set CHAT_REPLY_VARIANT=greeting|function-call to switch)",
        config.variant
    );
    for origin in &config.allowed_origins {
        tracing::info!("CORS origin allowed: {:?}", origin);
    }

    if let Err(e) = serve(config).await {
        tracing::error!("Server failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
