pub mod discord;
pub mod error;
pub mod home_assistant;

use crate::config::NotificationsConfig;
use crate::notifier::discord::DiscordSink;
use crate::notifier::error::SinkError;
use crate::notifier::home_assistant::HomeAssistantSink;
use crate::types::AircraftRecord;

/// An outbound notification destination.
pub trait NotificationSink: Send {
    fn name(&self) -> &'static str;
    fn notify(&self, aircraft: &AircraftRecord) -> Result<(), SinkError>;
}

/// Builds the sinks that have a destination configured. Unconfigured sinks are
/// left out entirely, so notifying them is a no-op.
#[must_use]
pub fn build_sinks(
    config: &NotificationsConfig,
    client: &reqwest::blocking::Client,
) -> Vec<Box<dyn NotificationSink>> {
    let mut sinks: Vec<Box<dyn NotificationSink>> = Vec::new();

    if let Some(url) = config.discord_webhook_url() {
        log::info!("Discord notifications enabled.");
        sinks.push(Box::new(DiscordSink::new(
            client.clone(),
            url.to_string(),
            config.tracking_url_base().to_string(),
        )));
    }
    if let Some(url) = config.home_assistant_webhook_url() {
        log::info!("Home Assistant notifications enabled.");
        sinks.push(Box::new(HomeAssistantSink::new(
            client.clone(),
            url.to_string(),
        )));
    }
    if sinks.is_empty() {
        log::warn!("No notification sinks configured.");
    }
    sinks
}

/// POSTs `payload` as JSON and treats any non-success status as a failure.
pub(crate) fn post_json<T: serde::Serialize + ?Sized>(
    client: &reqwest::blocking::Client,
    url: &str,
    payload: &T,
) -> Result<(), SinkError> {
    let response = client.post(url).json(payload).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SinkError::Status(status));
    }
    Ok(())
}
