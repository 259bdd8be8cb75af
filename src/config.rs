use serde;
use toml;

pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_COOLDOWN_MINUTES: u32 = 90;
pub const DEFAULT_TRACKING_URL_BASE: &str = "https://flightaware.com/live/flight/";

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationConfig {
    pub feed: FeedConfig,
    pub watchlist: WatchListConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl ApplicationConfig {
    pub fn construct_from_path(
        path: &std::path::PathBuf,
    ) -> Result<ApplicationConfig, errors::ApplicationConfigError> {
        let string =
            std::fs::read_to_string(path).map_err(|error| errors::ApplicationConfigError::Io {
                source: error,
                path: path.clone(),
            })?;

        let config: ApplicationConfig =
            toml::from_str(&string).map_err(|error| errors::ApplicationConfigError::Parse {
                source: error,
                path: path.clone(),
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), errors::ApplicationConfigError> {
        if self.feed.poll_interval_seconds == 0 {
            return Err(errors::ApplicationConfigError::Invalid(
                "feed.poll_interval_seconds must be greater than zero".to_string(),
            ));
        }
        if self.feed.request_timeout_seconds == 0 {
            return Err(errors::ApplicationConfigError::Invalid(
                "feed.request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.watchlist.tail_numbers.is_empty() {
            log::warn!("Watch list is empty; no notifications will ever be sent.");
        }
        if self
            .watchlist
            .tail_numbers
            .iter()
            .any(|tail_number| tail_number.trim().is_empty())
        {
            return Err(errors::ApplicationConfigError::Invalid(
                "watchlist.tail_numbers must not contain blank entries".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct FeedConfig {
    /// Only required when polling over HTTP; a replay file replaces it.
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_poll_interval_seconds")]
    pub poll_interval_seconds: u64,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl FeedConfig {
    pub fn require_url(&self) -> Result<&str, errors::ApplicationConfigError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(errors::ApplicationConfigError::Invalid(
                "feed.url must not be empty".to_string(),
            ));
        }
        Ok(url)
    }

    #[must_use]
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_seconds)
    }

    #[must_use]
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_seconds)
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct WatchListConfig {
    pub tail_numbers: Vec<String>,
    #[serde(default = "default_cooldown_minutes")]
    pub cooldown_minutes: u32,
}

impl WatchListConfig {
    #[must_use]
    pub fn cooldown(&self) -> chrono::TimeDelta {
        chrono::TimeDelta::minutes(self.cooldown_minutes.into())
    }
}

/// Webhook destinations. An empty string is treated the same as an absent key.
#[derive(serde::Deserialize, Debug, Default)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub discord_webhook_url: Option<String>,
    #[serde(default)]
    pub home_assistant_webhook_url: Option<String>,
    #[serde(default)]
    pub tracking_url_base: Option<String>,
}

impl NotificationsConfig {
    #[must_use]
    pub fn discord_webhook_url(&self) -> Option<&str> {
        non_empty(self.discord_webhook_url.as_deref())
    }

    #[must_use]
    pub fn home_assistant_webhook_url(&self) -> Option<&str> {
        non_empty(self.home_assistant_webhook_url.as_deref())
    }

    #[must_use]
    pub fn tracking_url_base(&self) -> &str {
        non_empty(self.tracking_url_base.as_deref()).unwrap_or(DEFAULT_TRACKING_URL_BASE)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn default_poll_interval_seconds() -> u64 {
    DEFAULT_POLL_INTERVAL_SECONDS
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_cooldown_minutes() -> u32 {
    DEFAULT_COOLDOWN_MINUTES
}

pub mod errors {

    #[derive(Debug)]
    pub enum ApplicationConfigError {
        Parse {
            source: toml::de::Error,
            path: std::path::PathBuf,
        },
        Io {
            source: std::io::Error,
            path: std::path::PathBuf,
        },
        Invalid(String),
    }
    impl std::fmt::Display for ApplicationConfigError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                ApplicationConfigError::Io {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Failed to read config file '{}': {}",
                        path.display(),
                        error
                    )
                }
                ApplicationConfigError::Parse {
                    source: error,
                    path,
                } => {
                    write!(
                        f,
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        error
                    )
                }
                ApplicationConfigError::Invalid(reason) => {
                    write!(f, "Invalid configuration: {reason}")
                }
            }
        }
    }
    impl std::error::Error for ApplicationConfigError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                ApplicationConfigError::Io { source: error, .. } => Some(error),
                ApplicationConfigError::Parse { source: error, .. } => Some(error),
                ApplicationConfigError::Invalid(_) => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{errors::ApplicationConfigError, ApplicationConfig};
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "tailspotter-config-{name}-{}.toml",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).expect("temp file should be writable");
        file.write_all(contents.as_bytes())
            .expect("temp file should be writable");
        path
    }

    #[test]
    fn when_only_required_keys_given_then_defaults_are_applied() {
        let path = write_config(
            "defaults",
            r#"
            [feed]
            url = "http://localhost/data/aircraft.json"

            [watchlist]
            tail_numbers = ["N2163J"]
            "#,
        );

        let config = ApplicationConfig::construct_from_path(&path).expect("config should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.feed.poll_interval(), std::time::Duration::from_secs(60));
        assert_eq!(config.feed.request_timeout(), std::time::Duration::from_secs(10));
        assert_eq!(config.watchlist.cooldown(), chrono::TimeDelta::minutes(90));
        assert_eq!(config.notifications.discord_webhook_url(), None);
        assert_eq!(config.notifications.home_assistant_webhook_url(), None);
        assert_eq!(
            config.notifications.tracking_url_base(),
            "https://flightaware.com/live/flight/"
        );
    }

    #[test]
    fn when_webhook_urls_are_empty_then_sinks_are_disabled() {
        let path = write_config(
            "empty-sinks",
            r#"
            [feed]
            url = "http://localhost/data/aircraft.json"
            poll_interval_seconds = 30

            [watchlist]
            tail_numbers = ["IDAHO99", "N2163J"]
            cooldown_minutes = 15

            [notifications]
            discord_webhook_url = ""
            home_assistant_webhook_url = "http://ha.local/api/webhook/spotted"
            "#,
        );

        let config = ApplicationConfig::construct_from_path(&path).expect("config should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(config.feed.poll_interval_seconds, 30);
        assert_eq!(config.watchlist.cooldown(), chrono::TimeDelta::minutes(15));
        assert_eq!(config.notifications.discord_webhook_url(), None);
        assert_eq!(
            config.notifications.home_assistant_webhook_url(),
            Some("http://ha.local/api/webhook/spotted")
        );
    }

    #[test]
    fn when_poll_interval_is_zero_then_config_is_invalid() {
        let path = write_config(
            "zero-interval",
            r#"
            [feed]
            url = "http://localhost/data/aircraft.json"
            poll_interval_seconds = 0

            [watchlist]
            tail_numbers = ["N2163J"]
            "#,
        );

        let result = ApplicationConfig::construct_from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ApplicationConfigError::Invalid(_))));
    }

    #[test]
    fn when_feed_url_is_absent_then_config_loads_but_url_is_required_for_polling() {
        let path = write_config(
            "replay-only",
            r#"
            [feed]
            poll_interval_seconds = 5

            [watchlist]
            tail_numbers = ["N2163J"]
            "#,
        );

        let config = ApplicationConfig::construct_from_path(&path).expect("config should load");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            config.feed.require_url(),
            Err(ApplicationConfigError::Invalid(_))
        ));
    }

    #[test]
    fn when_feed_url_is_set_then_it_is_returned_trimmed() {
        let path = write_config(
            "url-set",
            r#"
            [feed]
            url = " http://localhost/data/aircraft.json "

            [watchlist]
            tail_numbers = ["N2163J"]
            "#,
        );

        let config = ApplicationConfig::construct_from_path(&path).expect("config should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            config.feed.require_url().expect("url is set"),
            "http://localhost/data/aircraft.json"
        );
    }

    #[test]
    fn when_toml_is_malformed_then_parse_error_is_returned() {
        let path = write_config("malformed", "[feed\nurl = ");

        let result = ApplicationConfig::construct_from_path(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ApplicationConfigError::Parse { .. })));
    }

    #[test]
    fn when_file_is_missing_then_io_error_is_returned() {
        let path = std::path::PathBuf::from("/nonexistent/tailspotter/config.toml");
        let result = ApplicationConfig::construct_from_path(&path);
        assert!(matches!(result, Err(ApplicationConfigError::Io { .. })));
    }
}
