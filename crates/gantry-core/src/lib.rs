pub mod config;
pub mod types;

pub use config::{
    AppConfig, ContainerServiceInput, ContainerServiceSpec, PipelineSpec, PipelineStageSpec,
};
pub use types::*;
