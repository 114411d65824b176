//! Configuration module
//!
//! Client configuration: API key, base URL and an optional outbound proxy.
//! Built explicitly by the caller or loaded from the environment; immutable
//! once handed to a client.

use std::env;
use std::fmt;

use crate::error::ImagefyError;

/// Public Imagefy endpoint.
pub const DEFAULT_BASE_URL: &str = "https://imagefy.mazzcorp.com.br/api/v1";

const DEFAULT_PROXY_PROTOCOL: &str = "http";

#[derive(Clone, PartialEq, Eq)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

// Keeps the password out of logs.
impl fmt::Debug for ProxyAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAuth")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub protocol: String,
    pub host: String,
    pub port: u16,
    pub auth: Option<ProxyAuth>,
}

impl ProxyConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: DEFAULT_PROXY_PROTOCOL.to_string(),
            host: host.into(),
            port,
            auth: None,
        }
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(ProxyAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// `{protocol}://{host}:{port}`, credentials excluded.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub proxy: Option<ProxyConfig>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Load from the process environment (and `.env`, if present).
    ///
    /// - `IMAGEFY_API_KEY` (or `API_KEY`): required
    /// - `IMAGEFY_API_URL`: defaults to [`DEFAULT_BASE_URL`]
    /// - `IMAGEFY_PROXY_HOST`, `IMAGEFY_PROXY_PORT`, `IMAGEFY_PROXY_PROTOCOL`,
    ///   `IMAGEFY_PROXY_USERNAME`, `IMAGEFY_PROXY_PASSWORD`
    pub fn from_env() -> Result<Self, ImagefyError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `var`.
    pub fn from_vars<F>(var: F) -> Result<Self, ImagefyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = var("IMAGEFY_API_KEY")
            .or_else(|| var("API_KEY"))
            .ok_or_else(|| {
                ImagefyError::Config("Missing API key. Set IMAGEFY_API_KEY or API_KEY".to_string())
            })?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = var("IMAGEFY_API_URL") {
            config = config.with_base_url(base_url);
        }

        if let Some(host) = var("IMAGEFY_PROXY_HOST") {
            let port = var("IMAGEFY_PROXY_PORT")
                .ok_or_else(|| {
                    ImagefyError::Config(
                        "IMAGEFY_PROXY_PORT must be set when IMAGEFY_PROXY_HOST is".to_string(),
                    )
                })?
                .parse::<u16>()
                .map_err(|_| {
                    ImagefyError::Config("IMAGEFY_PROXY_PORT must be a valid port".to_string())
                })?;

            let mut proxy = ProxyConfig::new(host, port);
            if let Some(protocol) = var("IMAGEFY_PROXY_PROTOCOL") {
                proxy = proxy.with_protocol(protocol);
            }
            if let Some(username) = var("IMAGEFY_PROXY_USERNAME") {
                let password = var("IMAGEFY_PROXY_PASSWORD").unwrap_or_default();
                proxy = proxy.with_auth(username, password);
            }
            tracing::debug!(proxy = %proxy.url(), "Using outbound proxy");
            config = config.with_proxy(proxy);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ImagefyError> {
        if self.api_key.trim().is_empty() {
            return Err(ImagefyError::Config("API key must not be empty".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ImagefyError::Config("Base URL must not be empty".to_string()));
        }
        if let Some(proxy) = &self.proxy {
            if proxy.host.trim().is_empty() {
                return Err(ImagefyError::Config("Proxy host must not be empty".to_string()));
            }
            if proxy.protocol.trim().is_empty() {
                return Err(ImagefyError::Config(
                    "Proxy protocol must not be empty".to_string(),
                ));
            }
            if let Some(auth) = &proxy.auth {
                if auth.username.is_empty() || auth.password.is_empty() {
                    return Err(ImagefyError::Config(
                        "Proxy credentials need both username and password".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Absolute URL for an endpoint path.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
