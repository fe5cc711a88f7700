/// Resolver settings
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default cluster management tool for the `tool` strategy
pub const DEFAULT_TOOL: &str = "oc";

/// How the platform type is looked up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Query the cluster API directly
    #[default]
    Api,
    /// Scan the YAML printed by an external CLI
    Tool,
}

/// Settings file contents, also the merged runtime settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub strategy: Strategy,

    /// Kubeconfig file; unset means in-cluster, then `~/.kube/config`
    pub kubeconfig: Option<PathBuf>,

    pub tool: ToolConfig,
}

/// External tool settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program name or path
    pub program: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ResolverConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tool.program.trim().is_empty() {
            anyhow::bail!("tool.program cannot be empty");
        }
        Ok(())
    }

    /// Apply command-line values on top of the file settings
    pub fn with_overrides(
        mut self,
        strategy: Option<Strategy>,
        kubeconfig: Option<PathBuf>,
        tool: Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        if kubeconfig.is_some() {
            self.kubeconfig = kubeconfig;
        }
        if let Some(program) = tool {
            self.tool.program = program;
        }
        self.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.strategy, Strategy::Api);
        assert!(config.kubeconfig.is_none());
        assert_eq!(config.tool.program, "oc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "strategy: tool\ntool:\n  program: kubectl\n").unwrap();

        let config = ResolverConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Tool);
        assert_eq!(config.tool.program, "kubectl");
        assert!(config.kubeconfig.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "kubeconfig: /etc/kube/admin.conf\n").unwrap();

        let config = ResolverConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy, Strategy::Api);
        assert_eq!(
            config.kubeconfig.as_deref(),
            Some(Path::new("/etc/kube/admin.conf"))
        );
        assert_eq!(config.tool.program, "oc");
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "strategy: rest\n").unwrap();
        assert!(ResolverConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = ResolverConfig::default()
            .with_overrides(
                Some(Strategy::Tool),
                Some(PathBuf::from("/tmp/kubeconfig")),
                Some("kubectl".to_string()),
            )
            .unwrap();
        assert_eq!(config.strategy, Strategy::Tool);
        assert_eq!(config.kubeconfig, Some(PathBuf::from("/tmp/kubeconfig")));
        assert_eq!(config.tool.program, "kubectl");

        let kept = config.clone().with_overrides(None, None, None).unwrap();
        assert_eq!(kept.strategy, Strategy::Tool);
        assert_eq!(kept.kubeconfig, config.kubeconfig);
    }

    #[test]
    fn test_blank_tool_is_rejected() {
        let result = ResolverConfig::default().with_overrides(None, None, Some("  ".to_string()));
        assert!(result.is_err());
    }
}
