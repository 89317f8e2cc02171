//! gantry.toml deployment configuration parser.
//!
//! The configuration lives inside the deploy source: the checked-out set
//! of files for the application revision being deployed. Each application
//! kind has its own provider-specific section; the planner for that kind
//! requires its section to be present.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::{ApplicationKind, StageKind};

/// Deployment configuration for one application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub kind: ApplicationKind,
    pub container_service: Option<ContainerServiceSpec>,
}

/// Provider-specific configuration for container-service applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerServiceSpec {
    pub input: ContainerServiceInput,
    pub pipeline: Option<PipelineSpec>,
}

/// Input section for container-service deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerServiceInput {
    /// Path to the task-definition artifact, relative to the app directory.
    pub task_definition_file: String,
    /// Append a rollback stage to generated pipelines.
    #[serde(default)]
    pub auto_rollback: bool,
}

/// An explicitly configured pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    #[serde(default)]
    pub stages: Vec<PipelineStageSpec>,
}

/// One configured pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStageSpec {
    pub kind: StageKind,
    pub name: Option<String>,
}

impl AppConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ContainerServiceSpec {
    /// Whether an explicit pipeline with at least one stage is configured.
    pub fn has_pipeline(&self) -> bool {
        self.pipeline.as_ref().is_some_and(|p| !p.stages.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let toml_str = r#"
kind = "container-service"

[container_service.input]
task_definition_file = "taskdef.json"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.kind, ApplicationKind::ContainerService);
        let spec = config.container_service.unwrap();
        assert_eq!(spec.input.task_definition_file, "taskdef.json");
        assert!(!spec.input.auto_rollback);
        assert!(!spec.has_pipeline());
    }

    #[test]
    fn parse_with_pipeline() {
        let toml_str = r#"
kind = "container-service"

[container_service.input]
task_definition_file = "taskdef.json"
auto_rollback = true

[[container_service.pipeline.stages]]
kind = "traffic-route"
name = "shift 10%"

[[container_service.pipeline.stages]]
kind = "sync"
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        let spec = config.container_service.unwrap();
        assert!(spec.input.auto_rollback);
        assert!(spec.has_pipeline());
        let stages = &spec.pipeline.as_ref().unwrap().stages;
        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].kind, StageKind::TrafficRoute);
        assert_eq!(stages[0].name.as_deref(), Some("shift 10%"));
    }

    #[test]
    fn empty_pipeline_counts_as_unconfigured() {
        let toml_str = r#"
kind = "container-service"

[container_service.input]
task_definition_file = "taskdef.json"

[container_service.pipeline]
stages = []
"#;
        let config = AppConfig::from_toml_str(toml_str).unwrap();
        assert!(!config.container_service.unwrap().has_pipeline());
    }

    #[test]
    fn section_may_be_absent() {
        let config = AppConfig::from_toml_str("kind = \"function\"").unwrap();
        assert_eq!(config.kind, ApplicationKind::Function);
        assert!(config.container_service.is_none());
    }
}
