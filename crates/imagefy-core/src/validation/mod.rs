//! Validation modules

pub mod dates;
pub mod rules;

pub use dates::{parse_date, to_iso_string, validate_date_order};
pub use rules::{
    validate_hex_color, validate_length, validate_one_of, validate_phone, validate_qr_size,
    validate_range, validate_required, validate_size, LengthLimit, SizeClass, PHONE_LENGTH,
    QR_SIZE_MAX, QR_SIZE_MIN,
};
