//! Storefront Settings

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contact::whatsapp_link;

/// Storefront settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// `WhatsApp` contact number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,

    /// Showroom list, normally delivered as a JSON-encoded string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showrooms: Option<Value>,
}

/// A physical showroom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Showroom {
    /// Showroom name
    pub name: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Country
    pub country: String,

    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Latitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// Longitude in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Showroom {
    /// The showroom coordinates, when both are known.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

impl Settings {
    /// The configured `WhatsApp` number, if set and non-blank.
    pub fn whatsapp_number(&self) -> Option<&str> {
        self.whatsapp
            .as_deref()
            .map(str::trim)
            .filter(|number| !number.is_empty())
    }

    /// Build a contact link, optionally about a specific product.
    pub fn contact_link(&self, product_title: Option<&str>) -> String {
        whatsapp_link(product_title, self.whatsapp_number())
    }

    /// Decode the showroom list.
    ///
    /// The list may arrive as a JSON-encoded string or as an inline array. A missing, `null` or
    /// blank value is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error when the value is present but is not a list of showrooms.
    pub fn decode_showrooms(&self) -> Result<Vec<Showroom>, serde_json::Error> {
        match &self.showrooms {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::String(encoded)) if encoded.trim().is_empty() => Ok(Vec::new()),
            Some(Value::String(encoded)) => serde_json::from_str(encoded),
            Some(value) => Vec::<Showroom>::deserialize(value),
        }
    }
}
