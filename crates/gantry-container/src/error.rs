//! Task-definition resolution errors.
//!
//! None of these abort planning: the planner degrades them to the
//! `"unknown"` version sentinel and a logged warning.

use thiserror::Error;

/// Errors from loading a task definition or extracting its image tag.
#[derive(Debug, Error)]
pub enum TaskDefError {
    #[error("unable to read task definition {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed task definition {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("task definition declares no containers")]
    NoContainers,

    #[error("image reference {0:?} has no tag")]
    MissingImageTag(String),
}
