use crate::utils::error::{CourierError, DeliveryError};
use crate::utils::validation::{validate_date_order, validate_non_empty_string, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Leaf report a chain starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SourceKind {
    Sales,
    User,
}

impl FromStr for SourceKind {
    type Err = CourierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(SourceKind::Sales),
            "user" => Ok(SourceKind::User),
            _ => Err(CourierError::UnknownSource {
                value: value.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = CourierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Sales => write!(f, "sales"),
            SourceKind::User => write!(f, "user"),
        }
    }
}

/// One decoration step in a report chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerSpec {
    DateRange { start: NaiveDate, end: NaiveDate },
    Sort { key: String },
    Csv,
    Pdf,
}

impl Validate for LayerSpec {
    fn validate(&self) -> crate::utils::error::Result<()> {
        match self {
            LayerSpec::DateRange { start, end } => validate_date_order("date_range", *start, *end),
            LayerSpec::Sort { key } => validate_non_empty_string("sort.key", key),
            LayerSpec::Csv | LayerSpec::Pdf => Ok(()),
        }
    }
}

/// The delivery backends a selector string may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryBackend {
    Internal,
    ExternalA,
    ExternalB,
}

impl DeliveryBackend {
    pub const ALL: [DeliveryBackend; 3] = [
        DeliveryBackend::Internal,
        DeliveryBackend::ExternalA,
        DeliveryBackend::ExternalB,
    ];

    pub fn selector(&self) -> &'static str {
        match self {
            DeliveryBackend::Internal => "Internal",
            DeliveryBackend::ExternalA => "ExternalA",
            DeliveryBackend::ExternalB => "ExternalB",
        }
    }
}

impl FromStr for DeliveryBackend {
    type Err = DeliveryError;

    // Selectors are matched exactly, case included.
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        DeliveryBackend::ALL
            .into_iter()
            .find(|backend| backend.selector() == selector)
            .ok_or_else(|| DeliveryError::UnknownServiceType {
                selector: selector.to_string(),
            })
    }
}

impl fmt::Display for DeliveryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
