//! Profile documents and the geocoder suggestions that become addresses.

use crate::app_lib::AppError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Subscriber profile. Fields other than `addresses` are kept verbatim so a
/// resubmitted profile does not drop them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Profile {
    /// Shallow-merges `values` over this profile, like an object spread.
    ///
    /// # Errors
    /// Returns `AppError::Serialization` if the merged document is no longer a
    /// valid profile (for example `addresses` is not a list of addresses).
    pub fn merged(&self, values: Map<String, Value>) -> Result<Self, AppError> {
        let addresses = serde_json::to_value(&self.addresses)
            .map_err(|err| AppError::Serialization(format!("Failed to encode profile: {err}")))?;

        let mut document = self.fields.clone();
        document.insert("addresses".to_string(), addresses);
        document.extend(values);

        serde_json::from_value(Value::Object(document))
            .map_err(|err| AppError::Serialization(format!("Invalid profile update: {err}")))
    }

    /// Position of an address equal to `address`.
    #[must_use]
    pub fn address_position(&self, address: &Address) -> Option<usize> {
        self.addresses.iter().position(|candidate| candidate == address)
    }
}

/// Geocoder suggestion, a GeoJSON feature with `[longitude, latitude]`
/// coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodedFeature {
    pub properties: FeatureProperties,
    pub geometry: FeatureGeometry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureGeometry {
    pub coordinates: [f64; 2],
}

impl GeocodedFeature {
    #[must_use]
    pub fn new(label: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            properties: FeatureProperties {
                label: label.into(),
            },
            geometry: FeatureGeometry {
                coordinates: [longitude, latitude],
            },
        }
    }
}

impl From<&GeocodedFeature> for Address {
    fn from(feature: &GeocodedFeature) -> Self {
        let [longitude, latitude] = feature.geometry.coordinates;
        Self {
            address: feature.properties.label.clone(),
            latitude,
            longitude,
        }
    }
}

/// Password form input. Both values stay secret until the request body is
/// built.
#[derive(Clone, Debug)]
pub struct PasswordForm {
    pub password: SecretString,
    pub confirmation: SecretString,
}

impl PasswordForm {
    /// # Errors
    /// Returns `AppError::Validation` if the password is blank or the confirmation
    /// differs.
    pub fn validate(&self) -> Result<(), AppError> {
        let password = self.password.expose_secret();
        if password.trim().is_empty() {
            return Err(AppError::Validation("Password is required.".to_string()));
        }
        if password != self.confirmation.expose_secret() {
            return Err(AppError::Validation("Passwords do not match.".to_string()));
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct PasswordUpdateRequest<'a> {
    pub password: &'a str,
}
