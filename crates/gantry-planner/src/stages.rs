//! Stage-sequence builders shared across planners.

use std::time::{SystemTime, UNIX_EPOCH};

use gantry_core::{PipelineStage, StageKind};

/// Ordering index of the first stage in any pipeline.
///
/// Stages produced by different planners are later merged for display,
/// so every builder counts from the same base.
pub const STAGE_INDEX_BASE: u32 = 0;

/// Build the quick-sync stage sequence.
///
/// The first stage deploys the new version and routes all traffic to it.
/// When `auto_rollback` is set, a rollback stage is appended as the final
/// element. `now` is injected so stage timestamps are deterministic in
/// tests.
pub fn quick_sync_stages(auto_rollback: bool, now: u64) -> Vec<PipelineStage> {
    let mut stages = vec![PipelineStage {
        kind: StageKind::Sync,
        index: STAGE_INDEX_BASE,
        created_at: now,
    }];
    if auto_rollback {
        stages.push(PipelineStage {
            kind: StageKind::Rollback,
            index: STAGE_INDEX_BASE + 1,
            created_at: now,
        });
    }
    stages
}

/// Current unix time in seconds.
pub fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
