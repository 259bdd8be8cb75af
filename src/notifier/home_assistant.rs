use crate::notifier::error::SinkError;
use crate::notifier::{post_json, NotificationSink};
use crate::types::{
    AircraftRecord, BAROMETRIC_ALTITUDE, GROUND_SPEED, LATITUDE, LONGITUDE, SQUAWK,
};

/// Body of the Home Assistant webhook trigger. Absent fields carry the
/// placeholder string instead of being omitted.
#[derive(Debug, PartialEq, serde::Serialize)]
pub struct HomeAssistantPayload {
    pub tail_number: String,
    pub altitude: serde_json::Value,
    pub speed: serde_json::Value,
    pub squawk: serde_json::Value,
    pub latitude: serde_json::Value,
    pub longitude: serde_json::Value,
}

impl HomeAssistantPayload {
    #[must_use]
    pub fn from_aircraft(aircraft: &AircraftRecord) -> Self {
        HomeAssistantPayload {
            tail_number: aircraft.identifier_or_placeholder().to_string(),
            altitude: aircraft.value_or_placeholder(BAROMETRIC_ALTITUDE),
            speed: aircraft.value_or_placeholder(GROUND_SPEED),
            squawk: aircraft.value_or_placeholder(SQUAWK),
            latitude: aircraft.value_or_placeholder(LATITUDE),
            longitude: aircraft.value_or_placeholder(LONGITUDE),
        }
    }
}

pub struct HomeAssistantSink {
    client: reqwest::blocking::Client,
    webhook_url: String,
}

impl HomeAssistantSink {
    #[must_use]
    pub fn new(client: reqwest::blocking::Client, webhook_url: String) -> Self {
        HomeAssistantSink {
            client,
            webhook_url,
        }
    }
}

impl NotificationSink for HomeAssistantSink {
    fn name(&self) -> &'static str {
        "Home Assistant"
    }

    fn notify(&self, aircraft: &AircraftRecord) -> Result<(), SinkError> {
        let payload = HomeAssistantPayload::from_aircraft(aircraft);
        post_json(&self.client, &self.webhook_url, &payload)?;
        log::info!(
            "Sent Home Assistant notification for {}",
            payload.tail_number
        );
        Ok(())
    }
}
