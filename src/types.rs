pub const PLACEHOLDER: &str = "N/A";

pub const FLIGHT: &str = "flight";
pub const BAROMETRIC_ALTITUDE: &str = "alt_baro";
pub const GROUND_SPEED: &str = "gs";
pub const SQUAWK: &str = "squawk";
pub const LATITUDE: &str = "lat";
pub const LONGITUDE: &str = "lon";

/// One entry of the feed's `aircraft` array.
///
/// The feed schema is not validated: every field is optional and is read on
/// demand, falling back to [`PLACEHOLDER`] when absent.
#[derive(Debug, PartialEq, Clone, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct AircraftRecord {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl AircraftRecord {
    #[must_use]
    pub fn new(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        AircraftRecord { fields }
    }

    /// The trimmed `flight` field, or `None` when it is absent or not a string.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.fields
            .get(FLIGHT)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
    }

    #[must_use]
    pub fn identifier_or_placeholder(&self) -> &str {
        self.identifier().unwrap_or(PLACEHOLDER)
    }

    /// Raw JSON value for `key`, or the placeholder string when absent.
    #[must_use]
    pub fn value_or_placeholder(&self, key: &str) -> serde_json::Value {
        self.fields
            .get(key)
            .filter(|value| !value.is_null())
            .cloned()
            .unwrap_or_else(|| serde_json::Value::String(PLACEHOLDER.to_string()))
    }

    /// Human readable rendering of `key`: strings without quotes, other
    /// scalars in their JSON form.
    #[must_use]
    pub fn display_field(&self, key: &str) -> String {
        match self.value_or_placeholder(key) {
            serde_json::Value::String(string) => string,
            other => other.to_string(),
        }
    }
}
