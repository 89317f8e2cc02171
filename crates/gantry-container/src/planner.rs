//! Pipeline planner for container-service applications.

use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing::warn;

use gantry_core::{ApplicationKind, ContainerServiceSpec, SyncStrategy};
use gantry_planner::{
    PlanError, PlanFuture, PlanInput, PlanOutput, PlanResult, Planner, PlannerRegistry,
    VERSION_UNKNOWN, epoch_secs, quick_sync_stages,
};

use crate::error::TaskDefError;
use crate::taskdef::{find_image_tag, load_task_definition};

/// Plans the deployment pipeline for container-service applications.
#[derive(Debug, Default)]
pub struct ContainerServicePlanner;

/// Register the container-service planner into `registry`.
pub fn register(registry: &mut PlannerRegistry) -> PlanResult<()> {
    registry.register(
        ApplicationKind::ContainerService,
        Arc::new(ContainerServicePlanner),
    )
}

/// One row of the rollout-strategy decision table.
struct SyncRule {
    /// Whether this rule decides the strategy for the given input.
    matches: fn(&PlanInput, &ContainerServiceSpec) -> bool,
    /// Qualifier appended to the summary, telling operators why.
    reason: Option<&'static str>,
}

/// Ordered decision table; the first matching rule wins. Every rule
/// currently builds the same quick-sync pipeline and only the summary
/// differs — the table stays in place for pipeline-based strategies that
/// will diverge once configured pipelines are executed.
const QUICK_SYNC_RULES: &[SyncRule] = &[
    // An operator forced a quick sync; that overrides all heuristics.
    SyncRule {
        matches: |input, _| input.deployment.trigger.sync_strategy == SyncStrategy::QuickSync,
        reason: Some("forced via web"),
    },
    // No prior successful deployment exists to diff against.
    SyncRule {
        matches: |input, _| input.most_recent_successful_commit.is_empty(),
        reason: Some("it seems this is the first deployment"),
    },
    // Nothing more specific was configured.
    SyncRule {
        matches: |_, spec| !spec.has_pipeline(),
        reason: Some("pipeline was not configured"),
    },
    // Current default until pipeline-based strategies land.
    SyncRule {
        matches: |_, _| true,
        reason: None,
    },
];

impl Planner for ContainerServicePlanner {
    fn plan<'a>(&'a self, input: &'a PlanInput) -> PlanFuture<'a> {
        Box::pin(plan(input))
    }
}

async fn plan(input: &PlanInput) -> Result<PlanOutput, PlanError> {
    let mut logs = io::sink();
    let source = tokio::select! {
        _ = input.cancel.cancelled() => return Err(PlanError::Cancelled),
        res = input.target_source.get(&mut logs) => res.map_err(PlanError::Source)?,
    };

    let spec = source
        .config
        .container_service
        .as_ref()
        .ok_or(PlanError::MissingSpec("container_service"))?;

    let version = match determine_version(&source.app_dir, &spec.input.task_definition_file) {
        Ok(version) => version,
        Err(err) => {
            warn!(
                deployment = %input.deployment.id,
                error = %err,
                "unable to determine target version"
            );
            VERSION_UNKNOWN.to_string()
        }
    };

    let reason = QUICK_SYNC_RULES
        .iter()
        .find(|rule| (rule.matches)(input, spec))
        .and_then(|rule| rule.reason);

    let stages = quick_sync_stages(spec.input.auto_rollback, epoch_secs());
    let summary = match reason {
        Some(reason) => format!(
            "Quick sync to deploy image {version} and configure all traffic to it ({reason})"
        ),
        None => format!("Quick sync to deploy image {version} and configure all traffic to it"),
    };

    Ok(PlanOutput {
        version,
        stages,
        summary,
    })
}

/// Resolve the target version from the task-definition artifact.
fn determine_version(app_dir: &Path, task_definition_file: &str) -> Result<String, TaskDefError> {
    let def = load_task_definition(app_dir, task_definition_file)?;
    find_image_tag(&def)
}
