use crate::notifier::error::SinkError;
use crate::notifier::{post_json, NotificationSink};
use crate::types::{AircraftRecord, BAROMETRIC_ALTITUDE, GROUND_SPEED, SQUAWK};

#[derive(Debug, PartialEq, serde::Serialize)]
pub struct DiscordPayload {
    pub content: String,
}

pub struct DiscordSink {
    client: reqwest::blocking::Client,
    webhook_url: String,
    tracking_url_base: String,
}

impl DiscordSink {
    #[must_use]
    pub fn new(
        client: reqwest::blocking::Client,
        webhook_url: String,
        tracking_url_base: String,
    ) -> Self {
        DiscordSink {
            client,
            webhook_url,
            tracking_url_base,
        }
    }
}

impl NotificationSink for DiscordSink {
    fn name(&self) -> &'static str {
        "Discord"
    }

    fn notify(&self, aircraft: &AircraftRecord) -> Result<(), SinkError> {
        let payload = DiscordPayload {
            content: render_message(aircraft, &self.tracking_url_base),
        };
        post_json(&self.client, &self.webhook_url, &payload)?;
        log::info!(
            "Sent Discord notification for {}",
            aircraft.identifier_or_placeholder()
        );
        Ok(())
    }
}

#[must_use]
pub fn render_message(aircraft: &AircraftRecord, tracking_url_base: &str) -> String {
    let identifier = aircraft.identifier_or_placeholder();
    format!(
        "🛩️ **Spotted Aircraft!**\n\n\
         **Tail Number:** {identifier}\n\
         **Altitude:** {altitude} ft\n\
         **Ground Speed:** {speed} knots\n\
         **Squawk Code:** {squawk}\n\
         **Track on FlightAware:** [View Flight]({tracking_url_base}{identifier})",
        altitude = aircraft.display_field(BAROMETRIC_ALTITUDE),
        speed = aircraft.display_field(GROUND_SPEED),
        squawk = aircraft.display_field(SQUAWK),
    )
}
