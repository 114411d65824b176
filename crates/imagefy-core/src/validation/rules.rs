//! Field rules shared by every operation.
//!
//! Each rule checks one field and returns the first violation it finds. The
//! operations in [`crate::models`] chain these with `?`, so validation stops
//! at the first failing field.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#(?:[a-f0-9]{3}){1,2}$").expect("hex color pattern is valid")
});
static NORMAL_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}x\d{1,3}$").expect("size pattern is valid"));
static LARGE_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,4}x\d{1,4}$").expect("size pattern is valid"));

/// Phone numbers use the fixed `+CCDDNNNNNNNNN` representation.
pub const PHONE_LENGTH: usize = 14;
pub const QR_SIZE_MIN: u32 = 100;
pub const QR_SIZE_MAX: u32 = 9999;

/// Which `WxH` pattern a size field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// Up to 999x999
    Normal,
    /// Up to 9999x9999
    Large,
}

impl SizeClass {
    fn pattern(self) -> &'static Regex {
        match self {
            SizeClass::Normal => &NORMAL_SIZE,
            SizeClass::Large => &LARGE_SIZE,
        }
    }

    fn example(self) -> &'static str {
        match self {
            SizeClass::Normal => "999x999",
            SizeClass::Large => "9999x9999",
        }
    }
}

/// Upper bound on a text field's length, in characters.
///
/// The API documents its limits inconsistently: some fields reject a value
/// longer than the limit, others reject a value that reaches it. Each field
/// keeps the comparison the API applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthLimit {
    /// Fails when `len > n`.
    AtMost(usize),
    /// Fails when `len >= n`.
    Below(usize),
}

impl LengthLimit {
    fn allows(self, len: usize) -> bool {
        match self {
            LengthLimit::AtMost(n) => len <= n,
            LengthLimit::Below(n) => len < n,
        }
    }
}

pub fn validate_hex_color(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(value) {
        return Err(ValidationError::new(field, "must be a hex string color"));
    }
    Ok(())
}

pub fn validate_size(
    field: &'static str,
    value: &str,
    class: SizeClass,
) -> Result<(), ValidationError> {
    if !class.pattern().is_match(value) {
        return Err(ValidationError::new(
            field,
            format!("must be a {} string", class.example()),
        ));
    }
    Ok(())
}

/// Large `WxH` pattern, then each side within [`QR_SIZE_MIN`, `QR_SIZE_MAX`].
pub fn validate_qr_size(field: &'static str, value: &str) -> Result<(), ValidationError> {
    validate_size(field, value, SizeClass::Large)?;

    let in_range = value
        .split('x')
        .filter_map(|side| side.parse::<u32>().ok())
        .all(|side| (QR_SIZE_MIN..=QR_SIZE_MAX).contains(&side));
    if !in_range {
        return Err(ValidationError::new(
            field,
            format!("sides must be between {} and {}", QR_SIZE_MIN, QR_SIZE_MAX),
        ));
    }
    Ok(())
}

pub fn validate_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must be a string"));
    }
    Ok(())
}

pub fn validate_length(
    field: &'static str,
    value: &str,
    limit: LengthLimit,
) -> Result<(), ValidationError> {
    if !limit.allows(value.chars().count()) {
        let reason = match limit {
            LengthLimit::AtMost(n) => format!("must be less than {} letters", n),
            LengthLimit::Below(n) => format!("must be less than {} characters", n),
        };
        return Err(ValidationError::new(field, reason));
    }
    Ok(())
}

pub fn validate_phone(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() != PHONE_LENGTH {
        return Err(ValidationError::new(
            field,
            format!(
                "must be exactly {} characters (+CCDDNNNNNNNNN)",
                PHONE_LENGTH
            ),
        ));
    }
    Ok(())
}

/// Case-folds `value` before comparing; returns the folded value on success.
pub fn validate_one_of(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<String, ValidationError> {
    let normalized = value.to_lowercase();
    if !allowed.contains(&normalized.as_str()) {
        return Err(ValidationError::new(
            field,
            format!("must be one of: {}", allowed.join(", ")),
        ));
    }
    Ok(normalized)
}

/// Inclusive on both ends. NaN never passes.
pub fn validate_range<T>(field: &'static str, value: T, min: T, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if !(value >= min && value <= max) {
        return Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(())
}
