//! Domain methods for the Imagefy API client.
//!
//! Thin, named entry points over [`ImagefyClient::execute`].

use imagefy_core::{
    Abbreviation, CompressLossless, CompressLossy, Placeholder, QrCode, QrPayload, ResizeFill,
    ResizeFit, Result, ThumbnailBlurred, ThumbnailCropped, Watermark,
};

use crate::{ImagefyClient, ImagefyResult};

impl ImagefyClient {
    /// Avatar-style image with `name` rendered over `background`.
    pub async fn create_abbreviation(&self, params: Abbreviation) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn create_placeholder(&self, params: Placeholder) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    /// QR code of any supported payload type. `size` is `WxH`.
    pub async fn create_qr_code(
        &self,
        size: impl Into<String>,
        payload: QrPayload,
    ) -> Result<ImagefyResult> {
        self.execute(QrCode::new(size, payload)).await
    }

    pub async fn compress_lossless(&self, params: CompressLossless) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn compress_lossy(&self, params: CompressLossy) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn resize_fit(&self, params: ResizeFit) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn resize_fill(&self, params: ResizeFill) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn thumbnail_cropped(&self, params: ThumbnailCropped) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn thumbnail_blurred(&self, params: ThumbnailBlurred) -> Result<ImagefyResult> {
        self.execute(params).await
    }

    pub async fn watermark(&self, params: Watermark) -> Result<ImagefyResult> {
        self.execute(params).await
    }
}
