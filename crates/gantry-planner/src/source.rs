//! Deploy-source materialization.
//!
//! A deploy source is the materialized set of configuration files for one
//! application revision. Providers hide how the files get onto disk (git
//! checkout, artifact download); planners only see the resulting directory
//! and the parsed deployment configuration.

use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use std::pin::Pin;

use tracing::debug;

use gantry_core::AppConfig;

/// Name of the deployment configuration file inside a deploy source.
pub const CONFIG_FILE_NAME: &str = "gantry.toml";

/// The materialized files for one application revision.
#[derive(Debug, Clone)]
pub struct DeploySource {
    /// Directory holding the application's materialized files.
    pub app_dir: PathBuf,
    /// Deployment configuration parsed from the source.
    pub config: AppConfig,
}

/// Boxed future alias for provider results.
pub type SourceFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<DeploySource>> + Send + 'a>>;

/// Materializes the deploy source for one application revision.
///
/// A provider instance is scoped to a single revision; `get` may be slow
/// (network, disk). `logs` receives progress output and may be
/// [`std::io::sink`] when the caller has nowhere to show it.
pub trait DeploySourceProvider: Send + Sync {
    fn get<'a>(&'a self, logs: &'a mut (dyn Write + Send)) -> SourceFuture<'a>;
}

/// Provider backed by an already-materialized directory on local disk.
pub struct LocalSourceProvider {
    app_dir: PathBuf,
}

impl LocalSourceProvider {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }
}

impl DeploySourceProvider for LocalSourceProvider {
    fn get<'a>(&'a self, logs: &'a mut (dyn Write + Send)) -> SourceFuture<'a> {
        Box::pin(async move {
            let config_path = self.app_dir.join(CONFIG_FILE_NAME);
            writeln!(logs, "loading deployment configuration from {}", config_path.display())?;
            debug!(path = %config_path.display(), "reading deployment configuration");
            let config = AppConfig::from_file(&config_path)?;
            Ok(DeploySource {
                app_dir: self.app_dir.clone(),
                config,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn local_provider_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
kind = "container-service"

[container_service.input]
task_definition_file = "taskdef.json"
"#,
        )
        .unwrap();

        let provider = LocalSourceProvider::new(dir.path());
        let mut logs = Vec::new();
        let source = provider.get(&mut logs).await.unwrap();
        assert_eq!(source.app_dir, dir.path());
        assert!(source.config.container_service.is_some());
        assert!(String::from_utf8(logs).unwrap().contains("gantry.toml"));
    }

    #[tokio::test]
    async fn local_provider_fails_without_config() {
        let dir = tempfile::tempdir().unwrap();
        let provider = LocalSourceProvider::new(dir.path());
        let mut logs = std::io::sink();
        assert!(provider.get(&mut logs).await.is_err());
    }
}
