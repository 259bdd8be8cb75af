#[derive(Debug)]
pub enum SinkError {
    Transport(reqwest::Error),
    Status(reqwest::StatusCode),
}

impl From<reqwest::Error> for SinkError {
    fn from(error: reqwest::Error) -> Self {
        SinkError::Transport(error)
    }
}

impl std::fmt::Display for SinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkError::Transport(error) => write!(f, "Request failed: {error}"),
            SinkError::Status(status) => write!(f, "Webhook responded with status {status}"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Transport(error) => Some(error),
            SinkError::Status(_) => None,
        }
    }
}
