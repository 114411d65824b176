//! QR codes.
//!
//! Every payload type goes to the same endpoint inside a
//! `{ "size", "type", "args" }` envelope, where `args` is the ordered list of
//! stringified parameters for that type.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::operation::{Endpoint, Operation, RequestBody};
use crate::validation::{
    parse_date, to_iso_string, validate_date_order, validate_length, validate_one_of,
    validate_phone, validate_qr_size, validate_range, validate_required, LengthLimit,
};

pub const WIFI_ENCRYPTIONS: [&str; 3] = ["wpa", "wep", "nopass"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QrCode {
    /// `WxH`, each side between 100 and 9999
    pub size: String,
    pub payload: QrPayload,
}

impl QrCode {
    pub fn new(size: impl Into<String>, payload: QrPayload) -> Self {
        Self {
            size: size.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum QrPayload {
    Bitcoin {
        address: String,
        amount: Option<f64>,
    },
    Monero {
        address: String,
        amount: Option<f64>,
    },
    Contact {
        first_name: String,
        last_name: String,
        phone: String,
        email: String,
    },
    Event {
        subject: String,
        description: String,
        location: String,
        start_at: String,
        end_at: String,
    },
    Geolocation {
        latitude: f64,
        longitude: f64,
    },
    Mail {
        to: String,
        subject: String,
        body: String,
    },
    PhoneCall {
        phone: String,
    },
    SkypeCall {
        username: String,
    },
    Sms {
        phone: String,
        message: String,
    },
    Text {
        text: String,
    },
    Url {
        url: String,
    },
    Whatsapp {
        phone: String,
        message: String,
    },
    Wifi {
        ssid: String,
        password: String,
        encryption: String,
    },
    Bookmark {
        title: String,
        url: String,
    },
}

impl QrPayload {
    /// Value of the envelope's `type` field.
    pub fn type_name(&self) -> &'static str {
        match self {
            QrPayload::Bitcoin { .. } => "Bitcoin",
            QrPayload::Monero { .. } => "Monero",
            QrPayload::Contact { .. } => "Contact",
            QrPayload::Event { .. } => "Event",
            QrPayload::Geolocation { .. } => "Geolocation",
            QrPayload::Mail { .. } => "Mail",
            QrPayload::PhoneCall { .. } => "PhoneCall",
            QrPayload::SkypeCall { .. } => "SkypeCall",
            QrPayload::Sms { .. } => "Sms",
            QrPayload::Text { .. } => "Text",
            QrPayload::Url { .. } => "Url",
            QrPayload::Whatsapp { .. } => "Whatsapp",
            QrPayload::Wifi { .. } => "Wifi",
            QrPayload::Bookmark { .. } => "Bookmark",
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            QrPayload::Bitcoin { address, amount } => {
                validate_required("address", address)?;
                validate_length("address", address, LengthLimit::AtMost(100))?;
                validate_amount(*amount)
            }
            QrPayload::Monero { address, amount } => {
                validate_required("address", address)?;
                validate_length("address", address, LengthLimit::Below(120))?;
                validate_amount(*amount)
            }
            QrPayload::Contact {
                first_name,
                last_name,
                phone,
                email,
            } => {
                validate_required("firstName", first_name)?;
                validate_length("firstName", first_name, LengthLimit::AtMost(100))?;
                validate_required("lastName", last_name)?;
                validate_length("lastName", last_name, LengthLimit::AtMost(100))?;
                validate_phone("phone", phone)?;
                validate_required("email", email)?;
                validate_length("email", email, LengthLimit::AtMost(200))
            }
            QrPayload::Event {
                subject,
                description,
                location,
                start_at,
                end_at,
            } => {
                validate_required("subject", subject)?;
                validate_length("subject", subject, LengthLimit::Below(100))?;
                validate_length("description", description, LengthLimit::AtMost(300))?;
                validate_length("location", location, LengthLimit::AtMost(200))?;
                let start = parse_date("startAt", start_at)?;
                let end = parse_date("endAt", end_at)?;
                validate_date_order("startAt", start, end)
            }
            QrPayload::Geolocation {
                latitude,
                longitude,
            } => {
                validate_range("latitude", *latitude, -90.0, 90.0)?;
                validate_range("longitude", *longitude, -180.0, 180.0)
            }
            QrPayload::Mail { to, subject, body } => {
                validate_required("to", to)?;
                validate_length("to", to, LengthLimit::AtMost(200))?;
                validate_length("subject", subject, LengthLimit::Below(120))?;
                validate_length("body", body, LengthLimit::AtMost(2048))
            }
            QrPayload::PhoneCall { phone } => validate_phone("phone", phone),
            QrPayload::SkypeCall { username } => {
                validate_required("username", username)?;
                validate_length("username", username, LengthLimit::AtMost(100))
            }
            QrPayload::Sms { phone, message } => {
                validate_phone("phone", phone)?;
                validate_length("message", message, LengthLimit::AtMost(512))
            }
            QrPayload::Text { text } => {
                validate_required("text", text)?;
                validate_length("text", text, LengthLimit::AtMost(2048))
            }
            QrPayload::Url { url } => {
                validate_required("url", url)?;
                validate_length("url", url, LengthLimit::Below(2048))
            }
            QrPayload::Whatsapp { phone, message } => {
                validate_phone("phone", phone)?;
                validate_length("message", message, LengthLimit::Below(512))
            }
            QrPayload::Wifi {
                ssid,
                password,
                encryption,
            } => {
                validate_required("ssid", ssid)?;
                validate_length("ssid", ssid, LengthLimit::AtMost(100))?;
                validate_length("password", password, LengthLimit::Below(100))?;
                validate_one_of("encryption", encryption, &WIFI_ENCRYPTIONS).map(|_| ())
            }
            QrPayload::Bookmark { title, url } => {
                validate_required("title", title)?;
                validate_length("title", title, LengthLimit::AtMost(100))?;
                validate_required("url", url)?;
                validate_length("url", url, LengthLimit::AtMost(2048))
            }
        }
    }

    /// Ordered, stringified arguments for the envelope.
    ///
    /// Assumes the payload already passed [`QrPayload::validate`]; dates that
    /// fail to parse are passed through untouched.
    pub fn args(&self) -> Vec<String> {
        match self {
            QrPayload::Bitcoin { address, amount } | QrPayload::Monero { address, amount } => {
                let mut args = vec![address.clone()];
                if let Some(amount) = amount {
                    args.push(amount.to_string());
                }
                args
            }
            QrPayload::Contact {
                first_name,
                last_name,
                phone,
                email,
            } => vec![
                first_name.clone(),
                last_name.clone(),
                phone.clone(),
                email.clone(),
            ],
            QrPayload::Event {
                subject,
                description,
                location,
                start_at,
                end_at,
            } => vec![
                subject.clone(),
                description.clone(),
                location.clone(),
                iso_or_raw("startAt", start_at),
                iso_or_raw("endAt", end_at),
            ],
            QrPayload::Geolocation {
                latitude,
                longitude,
            } => vec![latitude.to_string(), longitude.to_string()],
            QrPayload::Mail { to, subject, body } => vec![to.clone(), subject.clone(), body.clone()],
            QrPayload::PhoneCall { phone } => vec![phone.clone()],
            QrPayload::SkypeCall { username } => vec![username.clone()],
            QrPayload::Sms { phone, message } | QrPayload::Whatsapp { phone, message } => {
                vec![phone.clone(), message.clone()]
            }
            QrPayload::Text { text } => vec![text.clone()],
            QrPayload::Url { url } => vec![url.clone()],
            QrPayload::Wifi {
                ssid,
                password,
                encryption,
            } => vec![ssid.clone(), password.clone(), encryption.to_lowercase()],
            QrPayload::Bookmark { title, url } => vec![title.clone(), url.clone()],
        }
    }
}

fn validate_amount(amount: Option<f64>) -> Result<(), ValidationError> {
    match amount {
        Some(value) if !(value.is_finite() && value > 0.0) => Err(ValidationError::new(
            "amount",
            "must be a positive number",
        )),
        _ => Ok(()),
    }
}

fn iso_or_raw(field: &'static str, value: &str) -> String {
    parse_date(field, value)
        .map(to_iso_string)
        .unwrap_or_else(|_| value.to_string())
}

impl Operation for QrCode {
    const ENDPOINT: Endpoint = Endpoint::QrCode;

    fn validate(&self) -> Result<(), ValidationError> {
        validate_qr_size("size", &self.size)?;
        self.payload.validate()
    }

    fn into_body(self) -> RequestBody {
        RequestBody::Json(serde_json::json!({
            "size": self.size,
            "type": self.payload.type_name(),
            "args": self.payload.args(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+5511900000000";

    fn body(code: QrCode) -> serde_json::Value {
        match code.into_body() {
            RequestBody::Json(value) => value,
            other => panic!("unexpected body: {:?}", other),
        }
    }

    fn contact(first_name: String, last_name: String, email: String) -> QrPayload {
        QrPayload::Contact {
            first_name,
            last_name,
            phone: PHONE.to_string(),
            email,
        }
    }

    fn event_with(subject: String, description: String, location: String) -> QrPayload {
        QrPayload::Event {
            subject,
            description,
            location,
            start_at: "2024-05-01".to_string(),
            end_at: "2024-05-02".to_string(),
        }
    }

    fn mail(to: String, subject: String, body: String) -> QrPayload {
        QrPayload::Mail { to, subject, body }
    }

    fn wifi(ssid: String, password: String) -> QrPayload {
        QrPayload::Wifi {
            ssid,
            password,
            encryption: "wpa".to_string(),
        }
    }

    fn ok() -> String {
        "x".to_string()
    }

    type LengthCase = (&'static str, LengthLimit, Box<dyn Fn(String) -> QrPayload>);

    fn case(
        field: &'static str,
        limit: LengthLimit,
        build: impl Fn(String) -> QrPayload + 'static,
    ) -> LengthCase {
        let build: Box<dyn Fn(String) -> QrPayload> = Box::new(build);
        (field, limit, build)
    }

    /// Every length-limited field, with a builder placing a value in it.
    fn length_cases() -> Vec<LengthCase> {
        vec![
            case("address", LengthLimit::AtMost(100), |v| QrPayload::Bitcoin {
                address: v,
                amount: None,
            }),
            case("address", LengthLimit::Below(120), |v| QrPayload::Monero {
                address: v,
                amount: None,
            }),
            case("firstName", LengthLimit::AtMost(100), |v| contact(v, ok(), ok())),
            case("lastName", LengthLimit::AtMost(100), |v| contact(ok(), v, ok())),
            case("email", LengthLimit::AtMost(200), |v| contact(ok(), ok(), v)),
            case("subject", LengthLimit::Below(100), |v| event_with(v, ok(), ok())),
            case("description", LengthLimit::AtMost(300), |v| event_with(ok(), v, ok())),
            case("location", LengthLimit::AtMost(200), |v| event_with(ok(), ok(), v)),
            case("to", LengthLimit::AtMost(200), |v| mail(v, ok(), ok())),
            case("subject", LengthLimit::Below(120), |v| mail(ok(), v, ok())),
            case("body", LengthLimit::AtMost(2048), |v| mail(ok(), ok(), v)),
            case("username", LengthLimit::AtMost(100), |v| QrPayload::SkypeCall {
                username: v,
            }),
            case("message", LengthLimit::AtMost(512), |v| QrPayload::Sms {
                phone: PHONE.to_string(),
                message: v,
            }),
            case("text", LengthLimit::AtMost(2048), |v| QrPayload::Text { text: v }),
            case("url", LengthLimit::Below(2048), |v| QrPayload::Url { url: v }),
            case("message", LengthLimit::Below(512), |v| QrPayload::Whatsapp {
                phone: PHONE.to_string(),
                message: v,
            }),
            case("ssid", LengthLimit::AtMost(100), |v| wifi(v, ok())),
            case("password", LengthLimit::Below(100), |v| wifi(ok(), v)),
            case("title", LengthLimit::AtMost(100), |v| QrPayload::Bookmark {
                title: v,
                url: ok(),
            }),
            case("url", LengthLimit::AtMost(2048), |v| QrPayload::Bookmark {
                title: ok(),
                url: v,
            }),
        ]
    }

    #[test]
    fn every_length_limit_holds_at_its_boundary() {
        for (field, limit, build) in length_cases() {
            let (longest_ok, shortest_bad) = match limit {
                LengthLimit::AtMost(n) => (n, n + 1),
                LengthLimit::Below(n) => (n - 1, n),
            };

            let accepted = build("a".repeat(longest_ok));
            assert!(
                accepted.validate().is_ok(),
                "{} {} should accept {} characters",
                accepted.type_name(),
                field,
                longest_ok
            );

            let rejected = build("a".repeat(shortest_bad));
            let err = rejected.validate().unwrap_err();
            assert_eq!(
                err.field,
                field,
                "{} should reject {} characters",
                rejected.type_name(),
                shortest_bad
            );
        }
    }

    #[test]
    fn bitcoin_args_with_and_without_amount() {
        let with_amount = QrCode::new(
            "300x300",
            QrPayload::Bitcoin {
                address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
                amount: Some(0.5),
            },
        );
        assert!(with_amount.validate().is_ok());
        assert_eq!(
            body(with_amount),
            serde_json::json!({
                "size": "300x300",
                "type": "Bitcoin",
                "args": ["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "0.5"],
            })
        );

        let without_amount = QrPayload::Bitcoin {
            address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string(),
            amount: None,
        };
        assert_eq!(
            without_amount.args(),
            vec!["1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".to_string()]
        );
    }

    #[test]
    fn monero_rejects_non_positive_amount() {
        let payload = QrPayload::Monero {
            address: "4AdUndXHHZ6cfufTMvppY6JwXNouMBzSkbLYfpAV5Usx".to_string(),
            amount: Some(0.0),
        };
        assert_eq!(payload.validate().unwrap_err().field, "amount");
    }

    #[test]
    fn address_limits_differ_between_coins() {
        let bitcoin = QrPayload::Bitcoin {
            address: "a".repeat(100),
            amount: None,
        };
        assert!(bitcoin.validate().is_ok());

        let monero = QrPayload::Monero {
            address: "a".repeat(120),
            amount: None,
        };
        assert_eq!(monero.validate().unwrap_err().field, "address");
    }

    #[test]
    fn contact_args_order_and_phone_rule() {
        let payload = QrPayload::Contact {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            phone: PHONE.to_string(),
            email: "ana@example.com".to_string(),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(
            payload.args(),
            vec!["Ana", "Souza", PHONE, "ana@example.com"]
        );

        let short_phone = QrPayload::Contact {
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            phone: "+551190000000".to_string(),
            email: "ana@example.com".to_string(),
        };
        assert_eq!(short_phone.validate().unwrap_err().field, "phone");
    }

    fn event(start_at: &str, end_at: &str) -> QrPayload {
        QrPayload::Event {
            subject: "Launch".to_string(),
            description: "Product launch".to_string(),
            location: "São Paulo".to_string(),
            start_at: start_at.to_string(),
            end_at: end_at.to_string(),
        }
    }

    #[test]
    fn event_args_use_iso_dates() {
        let payload = event("2024-05-01T10:00:00Z", "2024-05-01T12:30:00Z");
        assert!(payload.validate().is_ok());
        assert_eq!(
            payload.args(),
            vec![
                "Launch",
                "Product launch",
                "São Paulo",
                "2024-05-01T10:00:00.000Z",
                "2024-05-01T12:30:00.000Z",
            ]
        );
    }

    #[test]
    fn event_start_after_end_is_rejected() {
        let payload = event("2024-05-02", "2024-05-01");
        let err = payload.validate().unwrap_err();
        assert_eq!(err.field, "startAt");
    }

    #[test]
    fn event_invalid_date_is_rejected() {
        let err = event("2024-05-01", "someday").validate().unwrap_err();
        assert_eq!(err.field, "endAt");
    }

    #[test]
    fn geolocation_ranges() {
        let ok = QrPayload::Geolocation {
            latitude: -23.55,
            longitude: -46.63,
        };
        assert!(ok.validate().is_ok());
        assert_eq!(ok.args(), vec!["-23.55", "-46.63"]);

        let bad = QrPayload::Geolocation {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert_eq!(bad.validate().unwrap_err().field, "latitude");
    }

    #[test]
    fn message_limits_differ_between_sms_and_whatsapp() {
        let message = "a".repeat(512);
        let sms = QrPayload::Sms {
            phone: PHONE.to_string(),
            message: message.clone(),
        };
        assert!(sms.validate().is_ok());

        let whatsapp = QrPayload::Whatsapp {
            phone: PHONE.to_string(),
            message,
        };
        assert_eq!(whatsapp.validate().unwrap_err().field, "message");
    }

    #[test]
    fn wifi_encryption_is_case_folded() {
        let payload = QrPayload::Wifi {
            ssid: "home".to_string(),
            password: "secret".to_string(),
            encryption: "WPA".to_string(),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(payload.args(), vec!["home", "secret", "wpa"]);

        let bad = QrPayload::Wifi {
            ssid: "home".to_string(),
            password: "secret".to_string(),
            encryption: "wpa3".to_string(),
        };
        assert_eq!(bad.validate().unwrap_err().field, "encryption");
    }

    #[test]
    fn qr_size_checked_before_payload() {
        let code = QrCode::new(
            "50x50",
            QrPayload::Text {
                text: String::new(),
            },
        );
        assert_eq!(code.validate().unwrap_err().field, "size");

        let code = QrCode::new(
            "9999x9999",
            QrPayload::Text {
                text: "hello".to_string(),
            },
        );
        assert!(code.validate().is_ok());
    }

    #[test]
    fn type_names_match_envelope() {
        let payload = QrPayload::PhoneCall {
            phone: PHONE.to_string(),
        };
        assert_eq!(payload.type_name(), "PhoneCall");
        let value = body(QrCode::new("100x100", payload));
        assert_eq!(value["type"], "PhoneCall");
        assert_eq!(value["args"], serde_json::json!([PHONE]));
    }

    #[test]
    fn payload_deserializes_from_tagged_json() {
        let payload: QrPayload = serde_json::from_value(serde_json::json!({
            "type": "Bookmark",
            "title": "Docs",
            "url": "https://example.com",
        }))
        .unwrap();
        assert_eq!(
            payload,
            QrPayload::Bookmark {
                title: "Docs".to_string(),
                url: "https://example.com".to_string(),
            }
        );
    }
}
