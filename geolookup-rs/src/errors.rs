use std::fmt;

use thiserror::Error;

/// Which of the two dependent calls a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    IpLookup,
    GeoLookup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IpLookup => write!(f, "IP lookup"),
            Self::GeoLookup => write!(f, "location lookup"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GeolookupError {
    #[error("{stage} failed: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },

    #[error("{stage} returned error ({status}): {body}")]
    Api {
        stage: Stage,
        status: reqwest::StatusCode,
        body: String,
    },
}

impl GeolookupError {
    /// The call that aborted the resolution.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Transport { stage, .. } | Self::Api { stage, .. } => *stage,
        }
    }
}
