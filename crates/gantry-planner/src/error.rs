//! Planner error types.

use thiserror::Error;

use gantry_core::ApplicationKind;

/// Errors that abort a planning call or planner registration.
///
/// Version-resolution failures are deliberately absent: they degrade to
/// the `"unknown"` version sentinel and never abort planning.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Deploy-source materialization failed.
    #[error("error while preparing deploy source data: {0}")]
    Source(#[from] anyhow::Error),

    /// The provider-specific configuration section is absent.
    #[error("missing {0} section in deployment configuration")]
    MissingSpec(&'static str),

    /// The caller cancelled the planning call.
    #[error("planning cancelled while preparing deploy source data")]
    Cancelled,

    /// A planner is already registered for this application kind.
    #[error("planner already registered for application kind {0}")]
    AlreadyRegistered(ApplicationKind),
}

pub type PlanResult<T> = Result<T, PlanError>;
