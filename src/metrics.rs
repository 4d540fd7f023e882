//! Raw per-category incident counts for one location.
//!
//! Counts cover a 12-month window within roughly 500 ft of a point and are
//! fetched by the caller. Absent keys decode as 0; non-numeric values decode
//! as NaN and out-of-range numbers as ±∞, so that lenient scoring coerces them
//! to 0 and strict validation can report them.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::error::{InvalidReason, Result, ValidationError};

/// Incident category, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Crime,
    Crashes,
    Violations,
    ServiceRequests,
    Cameras,
    Potholes,
    Permits,
    Licenses,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Self::Crime,
        Self::Crashes,
        Self::Violations,
        Self::ServiceRequests,
        Self::Cameras,
        Self::Potholes,
        Self::Permits,
        Self::Licenses,
    ];

    /// Key used in JSON/TOML input and output.
    pub fn key(self) -> &'static str {
        match self {
            Self::Crime => "crime",
            Self::Crashes => "crashes",
            Self::Violations => "violations",
            Self::ServiceRequests => "serviceRequests",
            Self::Cameras => "cameras",
            Self::Potholes => "potholes",
            Self::Permits => "permits",
            Self::Licenses => "licenses",
        }
    }

    /// Human-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Crime => "Crime",
            Self::Crashes => "Traffic Crashes",
            Self::Violations => "Building Violations",
            Self::ServiceRequests => "311 Complaints",
            Self::Cameras => "Camera Tickets",
            Self::Potholes => "Pothole Repairs",
            Self::Permits => "Building Permits",
            Self::Licenses => "Business Licenses",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw counts as delivered by the data-fetch layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMetrics {
    #[serde(deserialize_with = "lenient_count")]
    pub crime: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub crashes: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub violations: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub service_requests: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub cameras: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub potholes: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub permits: f64,
    #[serde(deserialize_with = "lenient_count")]
    pub licenses: f64,
}

/// Accept any value: numbers pass through (including ±∞ and NaN), `null` is
/// 0, anything else is NaN.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    deserializer.deserialize_any(CountVisitor)
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an incident count")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<f64, E> {
        Ok(0.0)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<f64, E> {
        Ok(0.0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<f64, D::Error> {
        deserializer.deserialize_any(CountVisitor)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> std::result::Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> std::result::Result<f64, E> {
        Ok(f64::NAN)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<f64, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(f64::NAN)
    }

    // Also catches TOML datetimes, which arrive as a single-entry map.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<f64, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(f64::NAN)
    }
}

/// Decode one JSON value from its source text. Numbers are parsed here rather
/// than by serde_json so that a literal too large for f64 (`1e400`) becomes
/// ±∞ instead of failing the whole document.
fn json_count(raw: &RawValue) -> f64 {
    let text = raw.get().trim();
    match text.as_bytes().first() {
        Some(b'-' | b'0'..=b'9') => text.parse().unwrap_or(f64::NAN),
        _ if text == "null" => 0.0,
        _ => f64::NAN,
    }
}

/// Coerce a single raw value to a usable count: negative, NaN and infinite become 0.
pub fn sanitize_count(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl RawMetrics {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Crime => self.crime,
            Category::Crashes => self.crashes,
            Category::Violations => self.violations,
            Category::ServiceRequests => self.service_requests,
            Category::Cameras => self.cameras,
            Category::Potholes => self.potholes,
            Category::Permits => self.permits,
            Category::Licenses => self.licenses,
        }
    }

    pub fn set(&mut self, category: Category, value: f64) {
        let slot = match category {
            Category::Crime => &mut self.crime,
            Category::Crashes => &mut self.crashes,
            Category::Violations => &mut self.violations,
            Category::ServiceRequests => &mut self.service_requests,
            Category::Cameras => &mut self.cameras,
            Category::Potholes => &mut self.potholes,
            Category::Permits => &mut self.permits,
            Category::Licenses => &mut self.licenses,
        };
        *slot = value;
    }

    /// Builder-style `set`.
    pub fn with(mut self, category: Category, value: f64) -> Self {
        self.set(category, value);
        self
    }

    /// Copy with every invalid field coerced to 0.
    pub fn sanitized(&self) -> RawMetrics {
        let mut clean = *self;
        for category in Category::ALL {
            let raw = self.get(category);
            let value = sanitize_count(raw);
            if value.to_bits() != raw.to_bits() && raw != 0.0 {
                log::debug!("coercing invalid {category} count {raw} to 0");
            }
            clean.set(category, value);
        }
        clean
    }

    /// Check every field in canonical order and report the first invalid one.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for field in Category::ALL {
            let value = self.get(field);
            let reason = if value.is_nan() {
                Some(InvalidReason::NotNumeric)
            } else if value.is_infinite() {
                Some(InvalidReason::NotFinite)
            } else if value < 0.0 {
                Some(InvalidReason::Negative(value))
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ValidationError { field, reason });
            }
        }
        Ok(())
    }

    /// Parse metrics from a JSON object. Unknown keys are ignored.
    pub fn from_json_str(text: &str) -> Result<RawMetrics> {
        let fields: BTreeMap<String, &RawValue> = serde_json::from_str(text)?;
        let mut metrics = RawMetrics::default();
        for (key, raw) in fields {
            match Category::from_key(&key) {
                Some(category) => metrics.set(category, json_count(raw)),
                None => log::debug!("ignoring unknown metrics key `{key}`"),
            }
        }
        Ok(metrics)
    }

    /// Parse metrics from TOML text.
    pub fn from_toml_str(text: &str) -> Result<RawMetrics> {
        Ok(toml::from_str(text)?)
    }
}

/// Read metrics from a file (TOML when the extension is `.toml`, JSON otherwise).
/// A path of `-` reads JSON from stdin.
pub fn read_metrics(path: &Path) -> Result<RawMetrics> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return RawMetrics::from_json_str(&text);
    }
    let text = std::fs::read_to_string(path)?;
    log::debug!("read metrics from {}", path.display());
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => RawMetrics::from_toml_str(&text),
        _ => RawMetrics::from_json_str(&text),
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
