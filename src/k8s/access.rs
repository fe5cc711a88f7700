/// Cluster access configuration
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{BoxError, Error, Result};

/// One place a cluster configuration may come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Kubeconfig named on the command line or via KUBECONFIG
    Kubeconfig(PathBuf),
    /// Service account mounted into a pod
    InCluster,
    /// `~/.kube/config`
    DefaultKubeconfig(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kubeconfig(path) => write!(f, "kubeconfig {}", path.display()),
            Self::InCluster => f.write_str("in-cluster service account"),
            Self::DefaultKubeconfig(path) => write!(f, "default kubeconfig {}", path.display()),
        }
    }
}

impl ConfigSource {
    async fn load(&self) -> Result<Config, BoxError> {
        match self {
            Self::Kubeconfig(path) | Self::DefaultKubeconfig(path) => {
                let kubeconfig = Kubeconfig::read_from(path)?;
                let config =
                    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                        .await?;
                Ok(config)
            }
            Self::InCluster => Ok(Config::incluster()?),
        }
    }
}

/// Ordered list of sources to try.
///
/// An explicit kubeconfig is the only source when given. Otherwise the
/// in-cluster service account comes first, then the default kubeconfig
/// under `home`.
pub fn discovery_order(explicit: Option<&Path>, home: Option<&Path>) -> Vec<ConfigSource> {
    if let Some(path) = explicit {
        return vec![ConfigSource::Kubeconfig(path.to_path_buf())];
    }

    let mut sources = vec![ConfigSource::InCluster];
    if let Some(home) = home {
        sources.push(ConfigSource::DefaultKubeconfig(
            home.join(".kube").join("config"),
        ));
    }
    sources
}

/// Ready-to-use connection to the cluster API
#[derive(Clone)]
pub struct ClusterHandle {
    client: Client,
    source: ConfigSource,
}

impl fmt::Debug for ClusterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterHandle")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ClusterHandle {
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Source the connection was configured from
    pub fn source(&self) -> &ConfigSource {
        &self.source
    }
}

/// Connect using the first source that yields a usable configuration
pub async fn connect(sources: &[ConfigSource]) -> Result<ClusterHandle> {
    let mut last_error = None;

    for source in sources {
        match source.load().await {
            Ok(config) => {
                debug!("Using {} (cluster {})", source, config.cluster_url);
                let client = Client::try_from(config).map_err(|e| Error::Configuration {
                    tried: source.to_string(),
                    source: Some(Box::new(e)),
                })?;
                return Ok(ClusterHandle {
                    client,
                    source: source.clone(),
                });
            }
            Err(e) => {
                debug!("Skipping {}: {}", source, e);
                last_error = Some(e);
            }
        }
    }

    let tried = if sources.is_empty() {
        "no sources".to_string()
    } else {
        sources
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    Err(Error::Configuration {
        tried,
        source: last_error,
    })
}
