use thiserror::Error;

use crate::wire::RemotePrediction;

/// Result of one delegate attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DelegateOutcome {
    Success(RemotePrediction),
    Unavailable(Unavailable),
}

/// Why the remote result cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error("delegate disabled")]
    Disabled,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("timed out")]
    Timeout,
    #[error("non-success status {0}")]
    Status(u16),
    #[error("undecodable response: {0}")]
    Decode(String),
}

impl DelegateOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DelegateOutcome::Success(_))
    }

    pub fn into_prediction(self) -> Option<RemotePrediction> {
        match self {
            DelegateOutcome::Success(p) => Some(p),
            DelegateOutcome::Unavailable(_) => None,
        }
    }
}

impl From<reqwest::Error> for Unavailable {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Unavailable::Timeout
        } else if err.is_decode() {
            Unavailable::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Unavailable::Status(status.as_u16())
        } else {
            Unavailable::Transport(err.to_string())
        }
    }
}
