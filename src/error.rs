//! Error types for the recording and rendering paths.
//!
//! A failing sink is fatal for the current pipeline call: no retry, no
//! buffering, no degraded mode. The lifecycle owner decides whether to
//! disable the feature.

use std::path::PathBuf;

use thiserror::Error;

/// A sink (render canvas or record store) could not accept writes
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to open record store at {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to record store at {path}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render sink rejected submission: {reason}")]
    Render { reason: String },
}
