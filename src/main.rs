/// infra-platform
///
/// Prints the platform type (AWS, Azure, BareMetal, ...) recorded in the
/// cluster's `infrastructures.config.openshift.io/cluster` resource.
mod config;
mod error;
mod k8s;
mod lookup;
mod platform;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ResolverConfig, Strategy};
use crate::lookup::Resolver;

#[derive(Parser)]
#[command(name = "infra-platform")]
#[command(about = "Print the platform type of the cluster Infrastructure resource", long_about = None)]
struct Cli {
    /// Kubeconfig file (defaults to in-cluster config, then ~/.kube/config)
    #[arg(env = "KUBECONFIG", value_name = "KUBECONFIG")]
    kubeconfig: Option<OsString>,

    /// Lookup strategy
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Cluster management tool used by the `tool` strategy
    #[arg(long, env = "INFRA_PLATFORM_TOOL", value_name = "PROGRAM")]
    tool: Option<String>,

    /// Settings file path
    #[arg(short, long, env = "INFRA_PLATFORM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Kubeconfig path; an empty value counts as unset
    fn kubeconfig_path(&self) -> Option<PathBuf> {
        self.kubeconfig
            .as_ref()
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for the result
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("infra_platform={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => ResolverConfig::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => ResolverConfig::default(),
    };
    let kubeconfig = cli.kubeconfig_path();
    let settings = settings.with_overrides(cli.strategy, kubeconfig, cli.tool)?;
    debug!("Resolving platform type with {:?}", settings);

    let resolver = Resolver::from_config(&settings);
    let platform = resolver.resolve().await?;

    println!("{}", platform);

    Ok(())
}
