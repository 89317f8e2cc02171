//! gantry-planner — the planning seam of the gantry control plane.
//!
//! For every deployment event, some planner decides what ordered sequence
//! of stages should run. This crate holds the pieces shared by all
//! planners:
//!
//! - **`plan`** — the [`Planner`] trait plus its input/output types
//! - **`registry`** — explicit [`PlannerRegistry`], keyed by application kind
//! - **`source`** — deploy-source materialization seam
//! - **`stages`** — stage-sequence builders shared across planners
//! - **`cancel`** — cooperative cancellation for in-flight planning calls
//!
//! Planners do not execute stages, shift traffic, or persist anything;
//! they are pure decision functions over one deployment event.

pub mod cancel;
pub mod error;
pub mod plan;
pub mod registry;
pub mod source;
pub mod stages;

pub use cancel::{CancelSource, CancelToken};
pub use error::{PlanError, PlanResult};
pub use plan::{PlanFuture, PlanInput, PlanOutput, Planner, VERSION_UNKNOWN};
pub use registry::PlannerRegistry;
pub use source::{
    CONFIG_FILE_NAME, DeploySource, DeploySourceProvider, LocalSourceProvider, SourceFuture,
};
pub use stages::{epoch_secs, quick_sync_stages, STAGE_INDEX_BASE};
