//! Task-definition artifacts.
//!
//! A task definition is the structured JSON description of the containers
//! an application revision runs. The planner only needs one thing from
//! it: the image tag of the primary container, which becomes the
//! deployment's version label.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TaskDefError;

/// A parsed task-definition artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub family: String,
    pub container_definitions: Vec<ContainerDefinition>,
}

/// One container entry in a task definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDefinition {
    pub name: String,
    /// Full image reference, e.g. `registry.example.com/app:v1.2.3`.
    pub image: String,
    #[serde(default)]
    pub essential: bool,
}

/// Load a task definition from `file`, a path relative to `app_dir`.
pub fn load_task_definition(app_dir: &Path, file: &str) -> Result<TaskDefinition, TaskDefError> {
    let path = app_dir.join(file);
    let raw = std::fs::read_to_string(&path).map_err(|source| TaskDefError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| TaskDefError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Extract the image tag of the primary container.
///
/// The primary container is the first one marked essential, or the first
/// listed when none is. A `:` inside the last path segment is required
/// for a tag; `registry:5000/app` has a port, not a tag.
pub fn find_image_tag(def: &TaskDefinition) -> Result<String, TaskDefError> {
    let primary = def
        .container_definitions
        .iter()
        .find(|c| c.essential)
        .or_else(|| def.container_definitions.first())
        .ok_or(TaskDefError::NoContainers)?;

    match primary.image.rsplit_once(':') {
        Some((_, tag)) if !tag.is_empty() && !tag.contains('/') => Ok(tag.to_string()),
        _ => Err(TaskDefError::MissingImageTag(primary.image.clone())),
    }
}
