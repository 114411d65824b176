//! Transport seam.
//!
//! The client hands a fully built [`PreparedRequest`] to a [`Transport`] and
//! gets back the raw status, content type and body. [`HttpTransport`] is the
//! reqwest implementation; tests substitute their own.

use async_trait::async_trait;
use bytes::Bytes;
use imagefy_core::{ClientConfig, FormField, ImagefyError, RequestBody, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Proxy};
use tokio_util::io::ReaderStream;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// A request ready to go on the wire.
#[derive(Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub api_key: String,
    pub body: RequestBody,
}

impl std::fmt::Debug for PreparedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedRequest")
            .field("url", &self.url)
            .field("api_key", &"***")
            .field("body", &self.body)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue exactly one POST. Any status is returned as-is; only failures to
    /// get a response at all are errors.
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport. Uses reqwest's default timeout and redirect policy.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(proxy_config) = &config.proxy {
            let mut proxy = Proxy::all(proxy_config.url()).map_err(|e| {
                ImagefyError::Config(format!("Invalid proxy {}: {}", proxy_config.url(), e))
            })?;
            if let Some(auth) = &proxy_config.auth {
                proxy = proxy.basic_auth(&auth.username, &auth.password);
            }
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| ImagefyError::transport("Failed to create HTTP client", e))?;

        Ok(Self { client })
    }

    /// Open each file field and stream it into the form.
    async fn build_form(fields: Vec<FormField>) -> Result<Form> {
        let mut form = Form::new();

        for field in fields {
            form = match field {
                FormField::Text { name, value } => form.text(name, value),
                FormField::File { name, path } => {
                    let file = tokio::fs::File::open(&path).await?;
                    let length = file.metadata().await?.len();
                    let filename = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("image")
                        .to_string();

                    let body = Body::wrap_stream(ReaderStream::new(file));
                    form.part(name, Part::stream_with_length(body, length).file_name(filename))
                }
            };
        }

        Ok(form)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse> {
        let builder = self
            .client
            .post(&request.url)
            .header(API_KEY_HEADER, request.api_key.as_str());

        let builder = match request.body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(fields) => builder.multipart(Self::build_form(fields).await?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| ImagefyError::transport("Failed to send request", e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| ImagefyError::transport("Failed to read response body", e))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
