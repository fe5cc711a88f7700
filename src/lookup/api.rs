/// Lookup through the cluster API
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::k8s::{self, ConfigSource, INFRASTRUCTURE_NAME};
use crate::platform::{ExtractPlatform, PlatformType};

#[derive(Debug, Clone)]
pub struct ApiLookup {
    sources: Vec<ConfigSource>,
}

impl ApiLookup {
    pub fn new(sources: Vec<ConfigSource>) -> Self {
        Self { sources }
    }

    /// Use the standard discovery order
    pub fn discover(explicit: Option<&Path>, home: Option<&Path>) -> Self {
        Self::new(k8s::discovery_order(explicit, home))
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    pub async fn resolve(&self) -> Result<PlatformType> {
        let handle = k8s::connect(self.sources()).await?;
        debug!("Connected using {}", handle.source());
        let infrastructure = k8s::fetch(&handle, INFRASTRUCTURE_NAME).await?;
        debug!("Fetched infrastructure/{}", infrastructure.name);

        let platform = infrastructure.extract_platform();
        if let Some(deprecated) = infrastructure.status.deprecated_platform() {
            info!("Deprecated status.platform: {}", deprecated);
            if let Ok(platform) = &platform {
                if platform.as_str() != deprecated {
                    warn!(
                        "status.platform ({}) disagrees with status.platformStatus.type ({})",
                        deprecated, platform
                    );
                }
            }
        }

        Ok(platform?)
    }
}
