//! Shipping Models

use std::fmt;

use serde::{Deserialize, Serialize};

/// Carrier-assigned parcel terminal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminalId(String);

impl TerminalId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TerminalId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A parcel pickup terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub id: TerminalId,
    pub name: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
}

/// The retailer's single fixed in-store pickup point.
#[derive(Debug, Clone, PartialEq)]
pub struct PickupLocation {
    /// Stable key selected in the checkout form.
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl Default for PickupLocation {
    fn default() -> Self {
        PickupLocation {
            id: "trakai".to_string(),
            name: "Trakai salon".to_string(),
            address: "Giraitės g. 60A".to_string(),
            city: "Rubežius".to_string(),
            postal_code: "21143".to_string(),
        }
    }
}
