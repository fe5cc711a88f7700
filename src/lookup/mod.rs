/// Platform type resolution strategies
pub mod api;
pub mod tool;

pub use api::ApiLookup;
pub use tool::ToolLookup;

use crate::config::{ResolverConfig, Strategy};
use crate::error::Result;
use crate::platform::PlatformType;

/// One of the interchangeable lookup strategies
#[derive(Debug, Clone)]
pub enum Resolver {
    Api(ApiLookup),
    Tool(ToolLookup),
}

impl Resolver {
    /// Build the resolver selected by `config`
    pub fn from_config(config: &ResolverConfig) -> Self {
        match config.strategy {
            Strategy::Api => {
                let home = dirs::home_dir();
                Self::Api(ApiLookup::discover(
                    config.kubeconfig.as_deref(),
                    home.as_deref(),
                ))
            }
            Strategy::Tool => Self::Tool(ToolLookup::new(
                config.tool.program.clone(),
                config.kubeconfig.clone(),
            )),
        }
    }

    pub async fn resolve(&self) -> Result<PlatformType> {
        match self {
            Self::Api(lookup) => lookup.resolve().await,
            Self::Tool(lookup) => lookup.resolve().await,
        }
    }
}
