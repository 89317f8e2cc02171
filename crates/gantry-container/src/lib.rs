//! gantry-container — pipeline planner for container-service applications.
//!
//! Decides what stages run when a container-service application deploys:
//! materializes the deploy source, resolves the target version from the
//! task-definition artifact, applies the rollout-strategy decision table,
//! and emits the ordered stage list with an operator-facing summary.
//!
//! # Components
//!
//! - **`taskdef`** — task-definition loading and image-tag extraction
//! - **`planner`** — the [`Planner`](gantry_planner::Planner) implementation

pub mod error;
pub mod planner;
pub mod taskdef;

pub use error::TaskDefError;
pub use planner::{ContainerServicePlanner, register};
pub use taskdef::{ContainerDefinition, TaskDefinition, find_image_tag, load_task_definition};
