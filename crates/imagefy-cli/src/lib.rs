use std::path::Path;

use imagefy_api_client::ImagefyResult;
use serde::Serialize;

/// What the CLI prints after saving a result.
#[derive(Debug, Serialize, PartialEq)]
pub struct SavedOutput {
    pub output: String,
    pub bytes: usize,
    pub content_type: Option<String>,
}

impl SavedOutput {
    pub fn new(path: &Path, result: &ImagefyResult) -> Self {
        Self {
            output: path.display().to_string(),
            bytes: result.len(),
            content_type: result.content_type().map(str::to_string),
        }
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
