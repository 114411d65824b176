//! Generated images: abbreviation avatars and placeholders.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::operation::{Endpoint, Operation, RequestBody};
use crate::validation::{
    validate_hex_color, validate_length, validate_required, validate_size, LengthLimit, SizeClass,
};

/// Initials or short text rendered over a colored background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abbreviation {
    pub background: String,
    pub foreground: String,
    pub name: String,
    /// `WxH`, up to 999x999
    pub size: String,
}

impl Operation for Abbreviation {
    const ENDPOINT: Endpoint = Endpoint::Abbreviation;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_hex_color("background", &self.background)?;
        validate_hex_color("foreground", &self.foreground)?;
        validate_required("name", &self.name)?;
        validate_length("name", &self.name, LengthLimit::AtMost(100))?;
        validate_size("size", &self.size, SizeClass::Normal)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Json(serde_json::json!({
            "background": self.background,
            "foreground": self.foreground,
            "name": self.name,
            "size": self.size,
        }))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub background: String,
    pub foreground: String,
    pub text: String,
    /// `WxH`, up to 999x999
    pub size: String,
}

impl Operation for Placeholder {
    const ENDPOINT: Endpoint = Endpoint::Placeholder;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_hex_color("background", &self.background)?;
        validate_hex_color("foreground", &self.foreground)?;
        validate_required("text", &self.text)?;
        validate_length("text", &self.text, LengthLimit::Below(120))?;
        validate_size("size", &self.size, SizeClass::Normal)
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Json(serde_json::json!({
            "background": self.background,
            "foreground": self.foreground,
            "text": self.text,
            "size": self.size,
        }))
    }
}
