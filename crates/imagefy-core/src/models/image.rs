//! Operations on uploaded images: compression, resizing, thumbnails and
//! watermarking. All of them are sent as multipart forms.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::operation::{Endpoint, FormField, Operation, RequestBody};
use crate::validation::{
    validate_hex_color, validate_one_of, validate_range, validate_size, SizeClass,
};

pub const RESIZE_MODES: [&str; 2] = ["cover", "contain"];

pub const WATERMARK_POSITIONS: [&str; 9] = [
    "northwest",
    "north",
    "northeast",
    "west",
    "center",
    "east",
    "southwest",
    "south",
    "southeast",
];

fn validate_path(field: &'static str, path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new(field, "must be a file path"));
    }
    Ok(())
}

fn validate_percent(field: &'static str, value: u32) -> Result<(), ValidationError> {
    validate_range(field, value, 1, 100)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressLossless {
    pub image: PathBuf,
}

impl Operation for CompressLossless {
    const ENDPOINT: Endpoint = Endpoint::CompressLossless;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![FormField::file("image", self.image)])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressLossy {
    pub image: PathBuf,
    /// 1 to 100
    pub quality: u32,
}

impl Operation for CompressLossy {
    const ENDPOINT: Endpoint = Endpoint::CompressLossy;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_percent("quality", self.quality)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::text("quality", self.quality),
        ])
    }
}

/// Resize inside `size`, letterboxing the remainder with `background`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeFit {
    pub image: PathBuf,
    pub size: String,
    pub background: String,
}

impl Operation for ResizeFit {
    const ENDPOINT: Endpoint = Endpoint::ResizeFit;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_size("size", &self.size, SizeClass::Normal)?;
        validate_hex_color("background", &self.background)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::text("size", self.size),
            FormField::text("background", self.background),
        ])
    }
}

/// Resize to exactly `size`, cropping or filling according to `mode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeFill {
    pub image: PathBuf,
    pub size: String,
    /// `cover` or `contain`, case-insensitive
    pub mode: String,
}

impl Operation for ResizeFill {
    const ENDPOINT: Endpoint = Endpoint::ResizeFill;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_size("size", &self.size, SizeClass::Normal)?;
        validate_one_of("mode", &self.mode, &RESIZE_MODES).map(|_| ())
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::text("size", self.size),
            FormField::text("mode", self.mode.to_lowercase()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailCropped {
    pub image: PathBuf,
    pub size: String,
}

impl Operation for ThumbnailCropped {
    const ENDPOINT: Endpoint = Endpoint::ThumbnailCropped;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_size("size", &self.size, SizeClass::Normal)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::text("size", self.size),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailBlurred {
    pub image: PathBuf,
    pub size: String,
    /// 1 to 100
    pub blur: u32,
}

impl Operation for ThumbnailBlurred {
    const ENDPOINT: Endpoint = Endpoint::ThumbnailBlurred;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_size("size", &self.size, SizeClass::Normal)?;
        validate_percent("blur", self.blur)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::text("size", self.size),
            FormField::text("blur", self.blur),
        ])
    }
}

/// Overlay `watermark` on `image`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watermark {
    pub image: PathBuf,
    pub watermark: PathBuf,
    /// One of [`WATERMARK_POSITIONS`], case-insensitive
    pub position: String,
    /// 1 to 100
    pub opacity: u32,
    /// Watermark size relative to the image, 1 to 100
    pub scale: u32,
}

impl Operation for Watermark {
    const ENDPOINT: Endpoint = Endpoint::Watermark;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_path("image", &self.image)?;
        validate_path("watermark", &self.watermark)?;
        validate_one_of("position", &self.position, &WATERMARK_POSITIONS)?;
        validate_percent("opacity", self.opacity)?;
        validate_percent("scale", self.scale)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Multipart(vec![
            FormField::file("image", self.image),
            FormField::file("watermark", self.watermark),
            FormField::text("position", self.position.to_lowercase()),
            FormField::text("opacity", self.opacity),
            FormField::text("scale", self.scale),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(body: RequestBody) -> Vec<FormField> {
        match body {
            RequestBody::Multipart(fields) => fields,
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn lossy_quality_range() {
        let mut op = CompressLossy {
            image: PathBuf::from("photo.jpg"),
            quality: 80,
        };
        assert!(op.validate().is_ok());

        op.quality = 0;
        assert_eq!(op.validate().unwrap_err().field, "quality");
        op.quality = 101;
        assert_eq!(op.validate().unwrap_err().field, "quality");
    }

    #[test]
    fn lossless_requires_path() {
        let op = CompressLossless {
            image: PathBuf::new(),
        };
        assert_eq!(op.validate().unwrap_err().field, "image");
    }

    #[test]
    fn resize_fit_fields() {
        let op = ResizeFit {
            image: PathBuf::from("photo.jpg"),
            size: "320x240".to_string(),
            background: "#000".to_string(),
        };
        assert!(op.validate().is_ok());
        assert_eq!(
            fields(op.into_body()),
            vec![
                FormField::file("image", "photo.jpg"),
                FormField::text("size", "320x240"),
                FormField::text("background", "#000"),
            ]
        );
    }

    #[test]
    fn resize_fill_mode_is_case_folded() {
        let op = ResizeFill {
            image: PathBuf::from("photo.jpg"),
            size: "320x240".to_string(),
            mode: "Contain".to_string(),
        };
        assert!(op.validate().is_ok());
        assert!(fields(op.into_body()).contains(&FormField::text("mode", "contain")));

        let bad = ResizeFill {
            image: PathBuf::from("photo.jpg"),
            size: "320x240".to_string(),
            mode: "stretch".to_string(),
        };
        assert_eq!(bad.validate().unwrap_err().field, "mode");
    }

    #[test]
    fn thumbnails_use_normal_size() {
        let cropped = ThumbnailCropped {
            image: PathBuf::from("photo.jpg"),
            size: "1000x1000".to_string(),
        };
        assert_eq!(cropped.validate().unwrap_err().field, "size");

        let blurred = ThumbnailBlurred {
            image: PathBuf::from("photo.jpg"),
            size: "150x150".to_string(),
            blur: 100,
        };
        assert!(blurred.validate().is_ok());
    }

    fn watermark() -> Watermark {
        Watermark {
            image: PathBuf::from("photo.jpg"),
            watermark: PathBuf::from("logo.png"),
            position: "SouthEast".to_string(),
            opacity: 50,
            scale: 20,
        }
    }

    #[test]
    fn watermark_sends_two_files() {
        let op = watermark();
        assert!(op.validate().is_ok());
        assert_eq!(
            fields(op.into_body()),
            vec![
                FormField::file("image", "photo.jpg"),
                FormField::file("watermark", "logo.png"),
                FormField::text("position", "southeast"),
                FormField::text("opacity", "50"),
                FormField::text("scale", "20"),
            ]
        );
    }

    #[test]
    fn watermark_rules() {
        let mut op = watermark();
        op.position = "middle".to_string();
        assert_eq!(op.validate().unwrap_err().field, "position");

        let mut op = watermark();
        op.opacity = 0;
        assert_eq!(op.validate().unwrap_err().field, "opacity");

        let mut op = watermark();
        op.scale = 101;
        assert_eq!(op.validate().unwrap_err().field, "scale");
    }

    #[test]
    fn every_compass_position_is_accepted() {
        for position in WATERMARK_POSITIONS {
            let mut op = watermark();
            op.position = position.to_uppercase();
            assert!(op.validate().is_ok(), "{position}");
        }
    }
}
