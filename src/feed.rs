pub mod error;

use crate::feed::error::FeedError;
use crate::types::AircraftRecord;

/// Where each cycle's aircraft records come from.
pub trait FeedSource: Send {
    fn fetch(&mut self) -> Result<Vec<AircraftRecord>, FeedError>;
}

/// Top level of a SkyAware `aircraft.json` document. Only the `aircraft`
/// array is used; a document without one has no aircraft.
#[derive(Debug, serde::Deserialize)]
struct FeedDocument {
    #[serde(default)]
    aircraft: Vec<serde_json::Value>,
}

/// Decodes a feed document. Entries of `aircraft` that are not JSON objects
/// are dropped with a warning; the rest of the list is kept.
pub fn parse_feed_document(body: &str) -> Result<Vec<AircraftRecord>, FeedError> {
    let document: FeedDocument = serde_json::from_str(body)?;
    Ok(document
        .aircraft
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::Object(fields) => Some(AircraftRecord::new(fields)),
            other => {
                log::warn!("Skipping aircraft entry that is not an object: {other}");
                None
            }
        })
        .collect())
}

/// Polls the feed over HTTP with a single GET per fetch.
pub struct HttpFeed {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpFeed {
    #[must_use]
    pub fn new(client: reqwest::blocking::Client, url: String) -> Self {
        HttpFeed { client, url }
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&mut self) -> Result<Vec<AircraftRecord>, FeedError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status,
                url: self.url.clone(),
            });
        }
        let body = response.text()?;
        parse_feed_document(&body)
    }
}

/// Re-reads a saved feed document from disk on every fetch.
pub struct FileFeed {
    path: std::path::PathBuf,
}

impl FileFeed {
    #[must_use]
    pub fn new(path: std::path::PathBuf) -> Self {
        FileFeed { path }
    }
}

impl FeedSource for FileFeed {
    fn fetch(&mut self) -> Result<Vec<AircraftRecord>, FeedError> {
        let body = std::fs::read_to_string(&self.path).map_err(|error| FeedError::Io {
            source: error,
            path: self.path.clone(),
        })?;
        parse_feed_document(&body)
    }
}
