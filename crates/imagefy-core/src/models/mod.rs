//! Operation params, one struct per remote operation.

pub mod generate;
pub mod image;
pub mod qr;

pub use generate::{Abbreviation, Placeholder};
pub use image::{
    CompressLossless, CompressLossy, ResizeFill, ResizeFit, ThumbnailBlurred, ThumbnailCropped,
    Watermark, RESIZE_MODES, WATERMARK_POSITIONS,
};
pub use qr::{QrCode, QrPayload, WIFI_ENCRYPTIONS};
