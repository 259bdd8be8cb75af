#[derive(Debug)]
pub enum FeedError {
    Transport(reqwest::Error),
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    Decode(serde_json::Error),
    Io {
        source: std::io::Error,
        path: std::path::PathBuf,
    },
}

impl From<reqwest::Error> for FeedError {
    fn from(error: reqwest::Error) -> Self {
        FeedError::Transport(error)
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(error: serde_json::Error) -> Self {
        FeedError::Decode(error)
    }
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Transport(error) => write!(f, "Error fetching aircraft data: {error}"),
            FeedError::Status { status, url } => {
                write!(f, "Aircraft feed '{url}' responded with status {status}")
            }
            FeedError::Decode(error) => {
                write!(f, "Error decoding JSON from the aircraft data feed: {error}")
            }
            FeedError::Io { source, path } => {
                write!(
                    f,
                    "Failed to read aircraft data from '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Transport(error) => Some(error),
            FeedError::Decode(error) => Some(error),
            FeedError::Io { source, .. } => Some(source),
            FeedError::Status { .. } => None,
        }
    }
}
