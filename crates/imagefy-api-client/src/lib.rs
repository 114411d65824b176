//! HTTP client for the Imagefy API.
//!
//! Every call runs through [`ImagefyClient::execute`]: validate the params,
//! serialize them, POST once with the `X-Api-Key` header, and wrap a status-200
//! body in an [`ImagefyResult`]. Domain methods (abbreviations, QR codes,
//! compression, etc.) live in [`api`].

pub mod api;
pub mod result;
pub mod transport;

use std::sync::Arc;

use imagefy_core::{ClientConfig, ImagefyError, Operation, Result};

pub use imagefy_core;
pub use result::{Blob, ImagefyResult};
pub use transport::{HttpTransport, PreparedRequest, RawResponse, Transport, API_KEY_HEADER};

/// Imagefy API client. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct ImagefyClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ImagefyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagefyClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ImagefyClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create client from environment. See [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Use a custom transport instead of reqwest.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Validate, build, send and wrap a single operation.
    pub async fn execute<O: Operation>(&self, operation: O) -> Result<ImagefyResult> {
        let endpoint = O::ENDPOINT;

        if let Err(err) = operation.validate() {
            tracing::debug!(
                endpoint = %endpoint,
                field = err.field,
                reason = %err.reason,
                "Rejected invalid Imagefy request"
            );
            return Err(err.into());
        }

        let body = operation.into_body();
        let request = PreparedRequest {
            url: self.config.endpoint_url(endpoint.path()),
            api_key: self.config.api_key.clone(),
            body,
        };

        tracing::debug!(
            endpoint = %endpoint,
            body = request.body.kind(),
            "Sending Imagefy request"
        );

        let response = self.transport.send(request).await?;

        if response.status != 200 {
            tracing::warn!(
                endpoint = %endpoint,
                status = response.status,
                "Imagefy request failed"
            );
            return Err(ImagefyError::Remote {
                status: response.status,
            });
        }

        Ok(ImagefyResult::new(response.body, response.content_type))
    }
}
