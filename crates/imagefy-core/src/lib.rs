//! Imagefy Core Library
//!
//! This crate provides the error types, configuration, validation rules and
//! per-operation request descriptors shared by the Imagefy API client and CLI.
//! Nothing in here performs network I/O.

pub mod config;
pub mod error;
pub mod models;
pub mod operation;
pub mod validation;

// Re-export commonly used types
pub use config::{ClientConfig, ProxyAuth, ProxyConfig, DEFAULT_BASE_URL};
pub use error::{ImagefyError, Result, ValidationError};
pub use models::{
    Abbreviation, CompressLossless, CompressLossy, Placeholder, QrCode, QrPayload, ResizeFill,
    ResizeFit, ThumbnailBlurred, ThumbnailCropped, Watermark,
};
pub use operation::{Endpoint, FormField, Operation, RequestBody};
