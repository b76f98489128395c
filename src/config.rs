//! Server configuration.

use std::fmt;
use std::str::FromStr;

use http::HeaderValue;
use serde::Serialize;

use crate::error::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Which version of the endpoint this process serves. Only one is active at a
/// time; they are successive iterations of the same prototype, not two routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyVariant {
    /// `{message, history}` in, `{message, code}` out.
    #[default]
    Greeting,
    /// `{messages}` in, fixed three-message function-call transcript out.
    FunctionCall,
}

impl ReplyVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyVariant::Greeting => "greeting",
            ReplyVariant::FunctionCall => "function-call",
        }
    }
}

impl fmt::Display for ReplyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplyVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greeting" | "a" => Ok(ReplyVariant::Greeting),
            "function-call" | "function_call" | "b" => Ok(ReplyVariant::FunctionCall),
            _ => Err(ConfigError::UnknownVariant(s.trim().to_string())),
        }
    }
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the listener (e.g. "0.0.0.0:8000").
    pub bind_addr: String,
    /// Origins granted CORS access, credentials included.
    pub allowed_origins: Vec<HeaderValue>,
    pub variant: ReplyVariant,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origins: vec![HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN)],
            variant: ReplyVariant::default(),
        }
    }
}

impl ServerConfig {
    /// Reads configuration from environment variables, keeping the default for
    /// anything absent or blank.
    ///
    /// | Variable               | Default                 |
    /// |------------------------|-------------------------|
    /// | `BIND_ADDR`            | `0.0.0.0:8000`          |
    /// | `CORS_ALLOWED_ORIGINS` | `http://localhost:3000` |
    /// | `CHAT_REPLY_VARIANT`   | `greeting`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(addr) = non_blank("BIND_ADDR") {
            config.bind_addr = addr.trim().to_string();
        }

        if let Some(origins) = non_blank("CORS_ALLOWED_ORIGINS") {
            config.allowed_origins = parse_origins(&origins)?;
        }

        if let Some(variant) = non_blank("CHAT_REPLY_VARIANT") {
            config.variant = variant.parse()?;
        }

        Ok(config)
    }
}

/// Split a comma-separated origin list, skipping blank entries.
fn parse_origins(raw: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    let mut vals = Vec::new();
    for part in raw.split(',') {
        let p = part.trim();
        if p.is_empty() {
            continue;
        }
        let hv = HeaderValue::from_str(p).map_err(|_| ConfigError::InvalidOrigin(p.to_string()))?;
        vals.push(hv);
    }
    if vals.is_empty() {
        vals.push(HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN));
    }
    Ok(vals)
}
