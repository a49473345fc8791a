//! Cafe submission form
//!
//! [`CafeForm`] is the raw urlencoded body of `POST /add`. Every field is
//! optional at the wire level so that a partial submission can be echoed
//! back with per-field messages instead of being rejected by the extractor.

pub mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::models::{CafeCreate, Seats};
use validator::Validate;

/// Submitted add-cafe form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CafeForm {
    #[validate(
        required(message = "This field is required."),
        custom(function = "rules::not_blank"),
        custom(function = "rules::max_250")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "rules::not_blank"),
        custom(function = "rules::web_url"),
        custom(function = "rules::max_500")
    )]
    pub map_url: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "rules::not_blank"),
        custom(function = "rules::web_url"),
        custom(function = "rules::max_500")
    )]
    pub img_url: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "rules::not_blank"),
        custom(function = "rules::max_250")
    )]
    pub location: Option<String>,

    #[validate(
        required(message = "Not a valid choice."),
        custom(function = "rules::seat_choice")
    )]
    pub seats: Option<String>,

    pub has_toilet: Option<String>,
    pub has_wifi: Option<String>,
    pub has_sockets: Option<String>,
    pub can_take_calls: Option<String>,

    #[validate(
        required(message = "This field is required."),
        custom(function = "rules::not_blank"),
        custom(function = "rules::max_250")
    )]
    pub coffee_price: Option<String>,

    pub csrf_token: Option<String>,
}

impl CafeForm {
    /// Run every field rule and build the insert payload
    ///
    /// Text values are trimmed. The coffee price is required here even though
    /// the column is nullable.
    pub fn validate_submission(&self) -> Result<CafeCreate, FieldErrors> {
        let mut errors = FieldErrors::default();

        if let Err(report) = self.validate() {
            for (field, field_errors) in report.field_errors() {
                for e in field_errors.iter() {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    errors.add(&field, message);
                }
            }
        }

        let seats = match self.seats.as_deref().map(str::trim).map(str::parse::<Seats>) {
            Some(Ok(seats)) => Some(seats),
            _ => {
                if !errors.contains("seats") {
                    errors.add("seats", "Not a valid choice.");
                }
                None
            }
        };

        let text = |value: &Option<String>| {
            value.as_deref().map(str::trim).unwrap_or_default().to_string()
        };

        match seats {
            Some(seats) if errors.is_empty() => Ok(CafeCreate {
                name: text(&self.name),
                map_url: text(&self.map_url),
                img_url: text(&self.img_url),
                location: text(&self.location),
                seats,
                has_toilet: checked(&self.has_toilet),
                has_wifi: checked(&self.has_wifi),
                has_sockets: checked(&self.has_sockets),
                can_take_calls: checked(&self.can_take_calls),
                coffee_price: Some(text(&self.coffee_price)),
            }),
            _ => Err(errors),
        }
    }
}

/// Checkbox semantics: any submitted value except `""`/`"false"` is checked
pub fn checked(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| !v.is_empty() && !v.eq_ignore_ascii_case("false"))
}

/// Validation messages keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Body of `POST /delete/{id}`
#[derive(Debug, Default, Deserialize)]
pub struct CsrfForm {
    pub csrf_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: &str = "This field is required.";

    fn valid_form() -> CafeForm {
        CafeForm {
            name: Some("  Lighthaus  ".into()),
            map_url: Some("https://goo.gl/maps/2EvhB4oq4gyUXKXx9".into()),
            img_url: Some("https://images.example.com/lighthaus.jpg".into()),
            location: Some("Hackney".into()),
            seats: Some("20-30".into()),
            has_wifi: Some("y".into()),
            coffee_price: Some("£2.70".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submission() {
        let create = valid_form().validate_submission().unwrap();
        assert_eq!(create.name, "Lighthaus");
        assert_eq!(create.seats, Seats::From20To30);
        assert!(create.has_wifi);
        assert!(!create.has_toilet);
        assert!(!create.has_sockets);
        assert!(!create.can_take_calls);
        assert_eq!(create.coffee_price.as_deref(), Some("£2.70"));
    }

    #[test]
    fn test_empty_form_reports_each_required_field() {
        let errors = CafeForm::default().validate_submission().unwrap_err();
        for field in ["name", "map_url", "img_url", "location", "coffee_price"] {
            assert_eq!(errors.get(field), Some(&[REQUIRED.to_string()][..]), "{field}");
        }
        assert_eq!(errors.get("seats"), Some(&["Not a valid choice.".to_string()][..]));
    }

    #[test]
    fn test_blank_name_is_required() {
        let form = CafeForm {
            name: Some("   ".into()),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(errors.get("name"), Some(&[REQUIRED.to_string()][..]));
    }

    #[test]
    fn test_invalid_urls() {
        let form = CafeForm {
            map_url: Some("goo.gl/maps".into()),
            img_url: Some("http://localhost/x.png".into()),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(errors.get("map_url"), Some(&["Invalid URL.".to_string()][..]));
        assert_eq!(errors.get("img_url"), Some(&["Invalid URL.".to_string()][..]));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_length_is_checked_after_trimming() {
        let form = CafeForm {
            name: Some(format!("{}   ", "x".repeat(249))),
            ..valid_form()
        };
        let create = form.validate_submission().unwrap();
        assert_eq!(create.name.len(), 249);
    }

    #[test]
    fn test_script_url_rejected() {
        let form = CafeForm {
            map_url: Some("javascript://example.com/%0Aalert(document.cookie)".into()),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(errors.get("map_url"), Some(&["Invalid URL.".to_string()][..]));
    }

    #[test]
    fn test_too_long_name() {
        let form = CafeForm {
            name: Some("x".repeat(251)),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(
            errors.get("name"),
            Some(&["Field cannot be longer than 250 characters.".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_seats() {
        let form = CafeForm {
            seats: Some("30-40".into()),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(errors.get("seats"), Some(&["Not a valid choice.".to_string()][..]));
    }

    #[test]
    fn test_blank_coffee_price_is_required() {
        let form = CafeForm {
            coffee_price: Some("  ".into()),
            ..valid_form()
        };
        let errors = form.validate_submission().unwrap_err();
        assert_eq!(errors.get("coffee_price"), Some(&[REQUIRED.to_string()][..]));
    }

    #[test]
    fn test_checked() {
        assert!(checked(&Some("y".into())));
        assert!(checked(&Some("on".into())));
        assert!(!checked(&Some("".into())));
        assert!(!checked(&Some("false".into())));
        assert!(!checked(&None));
    }

    #[test]
    fn test_field_errors_serialize_as_map() {
        let mut errors = FieldErrors::default();
        errors.add("name", REQUIRED);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["name"][0], REQUIRED);
    }
}
