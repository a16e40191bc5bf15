use nts_proto::error::{FetchError, TimestampError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    // Upstream
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    // User input
    #[error("{what} not found")]
    NotFound { what: String },

    // Player
    #[error("media player '{program}' not found. Install it or set [player] program in the config file.")]
    PlayerMissing { program: String },

    #[error("media player '{program}' exited with {}", describe_exit(.code))]
    PlayerFailed { program: String, code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "a signal".to_string(),
    }
}

/// What the process should do after a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Message printed, exit 0.
    Recoverable,
    /// `Error: …` printed, exit 1.
    Failed,
    /// Returned from `main` with its full chain.
    Fatal,
}

impl CliError {
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::Fetch(e) if e.is_network() => Disposition::Recoverable,
            Self::NotFound { .. } | Self::PlayerMissing { .. } | Self::PlayerFailed { .. } => {
                Disposition::Failed
            }
            _ => Disposition::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_errors_fail_with_exit_one() {
        let err = CliError::NotFound {
            what: "mixtape 'nope'".to_string(),
        };
        assert_eq!(err.disposition(), Disposition::Failed);
        assert_eq!(err.to_string(), "mixtape 'nope' not found");

        let err = CliError::PlayerFailed {
            program: "mpv".to_string(),
            code: Some(2),
        };
        assert_eq!(err.disposition(), Disposition::Failed);
        assert_eq!(err.to_string(), "media player 'mpv' exited with status 2");
    }

    #[test]
    fn decode_and_timestamp_errors_are_fatal() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CliError::from(FetchError::Decode {
            url: "http://x/api".to_string(),
            source,
        });
        assert_eq!(err.disposition(), Disposition::Fatal);

        let err = CliError::from(FetchError::Status {
            url: "http://x/api".to_string(),
            status: 503,
        });
        assert_eq!(err.disposition(), Disposition::Fatal);
    }
}
