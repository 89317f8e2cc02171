//! Domain types for gantry deployment planning.
//!
//! These types describe one deployment decision: which application is
//! deploying, what triggered it, and the ordered stages the planner
//! produced. All of them are created per planning call and never mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// Kind of application a planner can handle. Planners are registered
/// against exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationKind {
    ContainerService,
    Function,
}

impl std::fmt::Display for ApplicationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContainerService => write!(f, "container-service"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// How the rollout strategy should be chosen for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// Let the planner decide from configuration and history.
    Auto,
    /// Deploy and route all traffic immediately. Operator-forced.
    QuickSync,
    /// Run the explicitly configured pipeline.
    Pipeline,
}

/// What triggered a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTrigger {
    pub sync_strategy: SyncStrategy,
    /// Revision being deployed.
    pub commit_hash: String,
    /// Who forced the deployment. Empty for automatic triggers.
    pub commander: String,
    /// Unix timestamp (seconds) when the trigger fired.
    pub timestamp: u64,
}

/// One deployment event to plan for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: String,
    pub application_id: String,
    pub kind: ApplicationKind,
    pub trigger: DeploymentTrigger,
}

/// Kind of a pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageKind {
    /// Deploy the new version and shift all traffic to it.
    Sync,
    /// Adjust traffic routing between versions.
    TrafficRoute,
    /// Roll back to the previously running version.
    Rollback,
}

/// One discrete, orderable unit of a deployment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub kind: StageKind,
    /// Position in the pipeline. Contiguous and strictly increasing
    /// within every produced sequence.
    pub index: u32,
    /// Unix timestamp (seconds) when the stage was created, for
    /// display and audit.
    pub created_at: u64,
}
