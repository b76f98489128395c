use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ServerConfig;

/// Load dotenv and initialize structured tracing based on RUST_LOG.
///
/// - An explicit env file can be named with ENV_FILE or DOTENV_PATH
/// - Otherwise the standard `.env` discovery in the working directory is used
/// - Missing env files are fine; the process environment is used as-is
pub fn init_tracing() {
    let mut env_source: String = "none".into();
    for key in ["ENV_FILE", "DOTENV_PATH"] {
        if let Ok(p) = std::env::var(key) {
            let p = p.trim();
            if !p.is_empty()
                && std::path::Path::new(p).is_file()
                && dotenvy::from_filename(p).is_ok()
            {
                env_source = format!("{p} ({key})");
                break;
            }
        }
    }

    if env_source == "none" {
        if let Ok(path) = dotenvy::dotenv() {
            env_source = path.display().to_string();
        }
    }

    // RUST_LOG may come from the env file, so read it only after loading.
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=info".into());
    let subscriber = fmt().with_env_filter(EnvFilter::new(filter)).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    tracing::info!("Environment loaded from: {}", env_source);
}

/// CORS for the configured origins with credentials enabled.
///
/// Methods and headers are mirrored from the request: credentialed CORS forbids
/// the `*` wildcard, and mirroring is the equivalent of allowing all of them.
/// Origins outside the list get neither the allow-origin nor the credentials
/// header, on preflight and simple requests alike.
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.allowed_origins.clone();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.allowed_origins.clone()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(AllowCredentials::predicate(move |origin, _parts| {
            origins.contains(origin)
        }))
}
