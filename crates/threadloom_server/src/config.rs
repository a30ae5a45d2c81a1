//! Server settings read from the environment.

use std::net::{SocketAddr, ToSocketAddrs};

use anyhow::{Context, Result};
use threadloom_constant::app::{DEFAULT_BODY_LIMIT_BYTES, DEFAULT_HOST, DEFAULT_PORT};
use threadloom_constant::generation::{DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use threadloom_core::GenerationSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Model passed to every completion call.
    pub model: String,
    pub timeout_secs: u64,
    /// Allowed origins; `["*"]` allows any.
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cors_origins: vec!["*".to_string()],
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `OPENAI_MODEL`, `OPENAI_TIMEOUT_SECS`,
    /// `CORS_ALLOW_ORIGIN` and `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| trimmed(&lookup, key);
        let settings = generation_settings_from_vars(&lookup)?;
        let mut config = Self {
            model: settings.model,
            timeout_secs: settings.timeout_secs,
            ..Self::default()
        };

        if let Some(host) = var("HOST") {
            config.host = host;
        }
        if let Some(port) = var("PORT") {
            config.port = port.parse().with_context(|| format!("invalid PORT: {port}"))?;
        }
        if let Some(origins) = var("CORS_ALLOW_ORIGIN") {
            config.cors_origins = origins
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(limit) = var("BODY_LIMIT_BYTES") {
            config.body_limit_bytes = limit
                .parse()
                .with_context(|| format!("invalid BODY_LIMIT_BYTES: {limit}"))?;
        }
        Ok(config)
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Resolve `host:port`; accepts IP literals and host names.
    pub fn addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .with_context(|| format!("invalid HOST: {}", self.host))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::default()
            .with_model(self.model.clone())
            .with_timeout_secs(self.timeout_secs)
    }
}

fn trimmed<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Reads only `OPENAI_MODEL` and `OPENAI_TIMEOUT_SECS`, for callers that
/// generate without serving.
pub fn generation_settings_from_env() -> Result<GenerationSettings> {
    generation_settings_from_vars(&|key: &str| std::env::var(key).ok())
}

pub fn generation_settings_from_vars<F>(lookup: &F) -> Result<GenerationSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = GenerationSettings::default();
    if let Some(model) = trimmed(lookup, "OPENAI_MODEL") {
        settings = settings.with_model(model);
    }
    if let Some(secs) = trimmed(lookup, "OPENAI_TIMEOUT_SECS") {
        let secs = secs
            .parse()
            .with_context(|| format!("invalid OPENAI_TIMEOUT_SECS: {secs}"))?;
        settings = settings.with_timeout_secs(secs);
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8000);
        assert_eq!(config.model, "gpt-4o-mini");
        assert!(config.allows_any_origin());
        assert_eq!(config.addr().unwrap().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_vars(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9001"),
            ("OPENAI_MODEL", "gpt-4o"),
            ("OPENAI_TIMEOUT_SECS", "15"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:3000/, https://app.example.com"),
            ("BODY_LIMIT_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:9001");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(
            config.cors_origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
        assert!(!config.allows_any_origin());
        assert_eq!(config.body_limit_bytes, 2048);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ServerConfig::from_vars(lookup(&[("PORT", " "), ("OPENAI_MODEL", "")])).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.model, "gpt-4o-mini");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = ServerConfig::from_vars(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("invalid PORT"));
    }

    #[test]
    fn test_generation_settings_ignore_server_vars() {
        let settings = generation_settings_from_vars(&lookup(&[
            ("PORT", "eighty"),
            ("OPENAI_MODEL", " gpt-4o "),
            ("OPENAI_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();
        assert_eq!(settings.model, "gpt-4o");
        assert_eq!(settings.timeout_secs, 15);
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let err = generation_settings_from_vars(&lookup(&[("OPENAI_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(err.to_string().contains("invalid OPENAI_TIMEOUT_SECS: soon"));
        assert!(ServerConfig::from_vars(lookup(&[("OPENAI_TIMEOUT_SECS", "soon")])).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig::default().with_host("not an ip");
        assert!(config.addr().is_err());
    }
}
