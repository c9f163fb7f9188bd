//! Field presence, format and enumerated-value checks shared by every entity.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ModelError;

pub const HOME_TYPES: [&str; 4] = ["Bedsitter", "Studio", "One Bedroom", "Two Bedroom"];
pub const INVENTORY_STATUSES: [&str; 2] = ["Packed", "Not Packed"];
pub const QUOTE_STATUSES: [&str; 3] = ["pending", "accepted", "rejected"];
pub const BOOKING_STATUSES: [&str; 3] = ["pending", "confirmed", "cancelled"];
pub const ROLES: [&str; 2] = ["user", "company"];

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+$").expect("valid email regex"));

/// `first_name` -> `First name`
pub fn field_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn required<T>(value: Option<T>, key: &str) -> Result<T, ModelError> {
    value.ok_or_else(|| ModelError::Validation(format!("{} must be provided.", field_label(key))))
}

/// Like [`required`], but blank strings count as missing.
pub fn required_text(value: Option<String>, key: &str) -> Result<String, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ModelError::Validation(format!("{} must be provided.", field_label(key)))),
    }
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ModelError::Validation("Email format is invalid.".into()))
    }
}

fn loose(s: &str) -> String {
    s.trim().to_lowercase().replace(['_', '-'], " ")
}

/// Map user input onto one of `allowed`, ignoring case and `_`/`-` vs space.
pub fn canonical(value: &str, allowed: &[&str], key: &str) -> Result<String, ModelError> {
    let wanted = loose(value);
    allowed
        .iter()
        .find(|a| loose(a) == wanted)
        .map(|a| a.to_string())
        .ok_or_else(|| {
            ModelError::Validation(format!("{} must be one of: {}.", field_label(key), allowed.join(", ")))
        })
}

pub fn home_type(value: &str) -> Result<String, ModelError> { canonical(value, &HOME_TYPES, "home_type") }
pub fn inventory_status(value: &str) -> Result<String, ModelError> { canonical(value, &INVENTORY_STATUSES, "status") }
pub fn quote_status(value: &str) -> Result<String, ModelError> { canonical(value, &QUOTE_STATUSES, "status") }
pub fn booking_status(value: &str) -> Result<String, ModelError> {
    canonical(value, &BOOKING_STATUSES, "confirmation_status")
}
pub fn role(value: &str) -> Result<String, ModelError> { canonical(value, &ROLES, "role") }

pub fn parse_date(value: &str, key: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ModelError::Validation(format!("{} must use the YYYY-MM-DD format.", field_label(key))))
}

pub fn parse_time(value: &str, key: &str) -> Result<NaiveTime, ModelError> {
    let v = value.trim();
    NaiveTime::parse_from_str(v, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(v, "%H:%M"))
        .map_err(|_| ModelError::Validation(format!("{} must use the HH:MM or HH:MM:SS format.", field_label(key))))
}

pub fn parse_timestamp(value: &str, key: &str) -> Result<NaiveDateTime, ModelError> {
    let v = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(v) {
        return Ok(dt.naive_utc());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(v, fmt).ok())
        .ok_or_else(|| {
            ModelError::Validation(format!("{} must use the YYYY-MM-DDTHH:MM:SS format.", field_label(key)))
        })
}

/// Parse an optional timestamp, falling back to the current UTC time.
pub fn timestamp_or_now(value: Option<String>, key: &str) -> Result<NaiveDateTime, ModelError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_timestamp(&v, key),
        _ => Ok(Utc::now().naive_utc()),
    }
}

pub fn validate_price(price: f64) -> Result<f64, ModelError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ModelError::Validation("Price must be a non-negative number.".into()))
    }
}

pub fn validate_rating(rating: f64) -> Result<f64, ModelError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(rating)
    } else {
        Err(ModelError::Validation("Rating must be between 0 and 5.".into()))
    }
}
