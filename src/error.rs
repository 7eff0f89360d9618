// Error taxonomy for the fetch -> evaluate pipeline.
// Every variant is terminal for the invocation and reported as UNKNOWN.

use thiserror::Error;

/// Transport or non-success HTTP status while fetching the render payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Payload was empty, undecodable, had no series, or the series had no samples.
    #[error("no usable data in payload: {0}")]
    NoData(String),

    /// Thresholds are inverted (critical must be >= warning).
    #[error("critical level ({critical}) is set lower than warning level ({warning})")]
    BadConfig { warning: f64, critical: f64 },
}

impl EvalError {
    pub fn no_data<E: ToString>(err: E) -> Self {
        EvalError::NoData(err.to_string())
    }
}
