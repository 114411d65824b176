//! Successful API responses: the returned image bytes plus helpers to
//! write them to disk or hand them off as a [`Blob`].

use std::path::Path;

use bytes::Bytes;
use imagefy_core::Result;
use tokio::io::AsyncWriteExt;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Payload of a successful (status 200) API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagefyResult {
    data: Bytes,
    content_type: Option<String>,
}

/// In-memory binary object built from an [`ImagefyResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Bytes,
    pub content_type: String,
}

impl Blob {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl ImagefyResult {
    pub(crate) fn new(data: Bytes, content_type: Option<String>) -> Self {
        Self { data, content_type }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    /// Content type reported by the API, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write the payload to `path`, creating or truncating the file.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(&self.data).await?;
        file.flush().await?;

        tracing::info!(
            path = %path.display(),
            bytes = self.data.len(),
            "Saved Imagefy result"
        );
        Ok(())
    }

    /// Shares the underlying buffer; no copy is made.
    pub fn to_blob(&self) -> Blob {
        Blob {
            bytes: self.data.clone(),
            content_type: self
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        }
    }
}
