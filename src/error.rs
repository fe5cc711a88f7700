/// Error types for platform type resolution
use std::process::ExitStatus;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Boxed underlying cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a single resolution can fail. All of them are terminal.
#[derive(Debug, Error)]
pub enum Error {
    /// No access context could be established
    #[error("unable to configure cluster access (tried {tried})")]
    Configuration {
        tried: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Access was configured but the resource request failed
    #[error("failed to get infrastructure/{name}")]
    Fetch {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// The external tool could not run or exited abnormally
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to invoke {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {}", .output.trim())]
    Exit {
        program: String,
        status: ExitStatus,
        output: String,
    },
}

/// A response was obtained but carries no usable platform type
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("platform type unavailable")]
    PlatformUnavailable,

    #[error("infrastructure status is malformed")]
    MalformedStatus(#[source] serde_json::Error),

    #[error("platformType not found")]
    NotFound,

    #[error("platformType is empty")]
    Empty,
}
