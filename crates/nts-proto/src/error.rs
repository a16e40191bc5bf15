use thiserror::Error;

/// Coarse classification of a failed upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// DNS failure, refused connection or timeout. Recoverable.
    Network,
    /// The server answered with a non-2xx status.
    Status,
    /// The request failed after connecting (body read, redirect loop, ...).
    Transport,
    /// The body is not JSON, or not the document shape we expect.
    Decode,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: unable to connect to {url}. Please check your internet connection and try again.")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Classify a reqwest failure: connectivity problems become `Network`,
    /// everything else is a `Transport` failure.
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_connect() || source.is_timeout() {
            Self::Network {
                url: url.to_string(),
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } => FetchErrorKind::Network,
            Self::Status { .. } => FetchErrorKind::Status,
            Self::Transport { .. } => FetchErrorKind::Transport,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    pub fn is_network(&self) -> bool {
        self.kind() == FetchErrorKind::Network
    }

    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. }
            | Self::Status { url, .. }
            | Self::Transport { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }
}

/// A broadcast timestamp that is not valid ISO-8601.
#[derive(Debug, Error)]
#[error("invalid timestamp {value:?}: {source}")]
pub struct TimestampError {
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
