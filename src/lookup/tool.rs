/// Lookup through an external cluster management CLI
use std::path::PathBuf;
use tracing::debug;

use crate::error::Result;
use crate::k8s::INFRASTRUCTURE_NAME;
use crate::platform::{ExtractPlatform, PlatformType, ToolOutput};
use crate::utils::command::CommandBuilder;

#[derive(Debug, Clone)]
pub struct ToolLookup {
    program: String,
    kubeconfig: Option<PathBuf>,
}

impl ToolLookup {
    pub fn new(program: String, kubeconfig: Option<PathBuf>) -> Self {
        Self {
            program,
            kubeconfig,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `<tool> get infrastructure cluster -o yaml`
    pub async fn fetch(&self) -> Result<ToolOutput> {
        let mut command = CommandBuilder::new(&self.program).args([
            "get",
            "infrastructure",
            INFRASTRUCTURE_NAME,
            "-o",
            "yaml",
        ]);
        if let Some(kubeconfig) = &self.kubeconfig {
            command = command.kubeconfig(kubeconfig);
        }

        let output = command.run_combined().await?;
        debug!("{} printed {} bytes", self.program(), output.len());
        Ok(ToolOutput(output))
    }

    pub async fn resolve(&self) -> Result<PlatformType> {
        let output = self.fetch().await?;
        Ok(output.extract_platform()?)
    }
}
