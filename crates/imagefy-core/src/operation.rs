//! Request descriptors.
//!
//! Every API call is one [`Operation`]: a validated params struct that knows its
//! endpoint and how to serialize itself. The client runs all of them through
//! the same validate -> build -> send -> wrap pipeline.

use std::fmt;
use std::path::PathBuf;

use crate::error::ValidationError;

/// Remote endpoint paths, relative to the client's base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Abbreviation,
    Placeholder,
    QrCode,
    CompressLossless,
    CompressLossy,
    ResizeFit,
    ResizeFill,
    ThumbnailCropped,
    ThumbnailBlurred,
    Watermark,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Abbreviation => "generate/abbreviation",
            Endpoint::Placeholder => "generate/placeholder",
            Endpoint::QrCode => "generate/qr-code",
            Endpoint::CompressLossless => "compress/lossless",
            Endpoint::CompressLossy => "compress/lossy",
            Endpoint::ResizeFit => "resize/fit",
            Endpoint::ResizeFill => "resize/fill",
            Endpoint::ThumbnailCropped => "thumbnail/cropped",
            Endpoint::ThumbnailBlurred => "thumbnail/blurred",
            Endpoint::Watermark => "watermark",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField {
    Text { name: &'static str, value: String },
    /// Streamed from disk at send time.
    File { name: &'static str, path: PathBuf },
}

impl FormField {
    pub fn text(name: &'static str, value: impl ToString) -> Self {
        FormField::Text {
            name,
            value: value.to_string(),
        }
    }

    pub fn file(name: &'static str, path: impl Into<PathBuf>) -> Self {
        FormField::File {
            name,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Text { name, .. } | FormField::File { name, .. } => name,
        }
    }
}

/// Serialized request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Vec<FormField>),
}

impl RequestBody {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "json",
            RequestBody::Multipart(_) => "multipart",
        }
    }
}

/// A single remote API operation.
pub trait Operation {
    const ENDPOINT: Endpoint;

    /// Check every field against the API's constraints, stopping at the first failure.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Serialize already-validated params.
    fn into_body(self) -> RequestBody;
}
