//! The planner seam — inputs, outputs, and the [`Planner`] trait.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Serialize;

use gantry_core::{Deployment, PipelineStage};

use crate::cancel::CancelToken;
use crate::error::PlanError;
use crate::source::DeploySourceProvider;

/// Version sentinel used when the target version cannot be resolved.
pub const VERSION_UNKNOWN: &str = "unknown";

/// Everything a planner needs to decide a pipeline for one deployment.
pub struct PlanInput {
    pub deployment: Deployment,
    /// Revision of the most recent successful deployment of this
    /// application. Empty when it has never deployed successfully.
    pub most_recent_successful_commit: String,
    /// Provider scoped to the revision being deployed.
    pub target_source: Arc<dyn DeploySourceProvider>,
    /// Cancels the call while it awaits deploy-source materialization.
    pub cancel: CancelToken,
}

/// The decided pipeline for one deployment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanOutput {
    /// Resolved target version, or [`VERSION_UNKNOWN`].
    pub version: String,
    /// Ordered stage sequence. Never empty on success.
    pub stages: Vec<PipelineStage>,
    /// One sentence for operators explaining what was decided and why.
    pub summary: String,
}

/// Boxed future alias for planning results.
pub type PlanFuture<'a> = Pin<Box<dyn Future<Output = Result<PlanOutput, PlanError>> + Send + 'a>>;

/// Decides which pipeline runs for deployments of one application kind.
///
/// A planner is a pure decision function: it must not execute stages,
/// shift traffic, or persist state. One call handles exactly one
/// deployment event.
pub trait Planner: Send + Sync {
    fn plan<'a>(&'a self, input: &'a PlanInput) -> PlanFuture<'a>;
}
