use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use uft_agent::alm::request::{
    GetAutEnvironmentById, GetAutEnvironmentConfigurationById, GetParameterValuesByConfigurationId,
    Request,
};
use uft_agent::alm::{Client, HttpTransport};
use uft_agent::capability::{CapabilityProposal, CapabilityResolver, DetectionParams};
use uft_agent::capability::{FIELD_UFT_DETECTION, FIELD_UFT_PATH};
use uft_agent::config::AgentConfig;
use uft_agent::locator::FsUftLocator;

#[derive(Parser)]
#[command(
    name = "uft-agent",
    about = "Build-agent toolkit — UFT One capability detection and ALM test-resource access",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to a TOML config file
    #[arg(long, env = "UFT_AGENT_CONFIG")]
    config: Option<std::path::PathBuf>,

    /// ALM server base URL, e.g. https://alm.example.com/qcbin
    #[arg(long, env = "UFT_AGENT_ALM_URL")]
    alm_url: Option<String>,

    /// ALM domain
    #[arg(long, env = "UFT_AGENT_DOMAIN")]
    domain: Option<String>,

    /// ALM project
    #[arg(long, env = "UFT_AGENT_PROJECT")]
    project: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "UFT_AGENT_LOG")]
    log: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Auto-detect UFT One and print the capability this agent should register.
    ///
    /// Exit status 0 always; the proposal (add / remove / skip) is printed
    /// as JSON for the host to act on.
    Detect,
    /// Validate capability parameters the way the host configuration form does.
    ///
    /// Examples:
    ///   uft-agent validate --manual --path /opt/uft
    ///   uft-agent validate
    Validate {
        /// Manually specify the install path instead of auto-detecting
        #[arg(long)]
        manual: bool,
        /// UFT One installation path (manual mode)
        #[arg(long, default_value = "")]
        path: String,
    },
    /// Fetch a test resource from the ALM server and print the raw body.
    Fetch {
        #[command(subcommand)]
        resource: FetchResource,
    },
}

#[derive(Subcommand)]
enum FetchResource {
    /// AUT environment by id
    Environment {
        #[arg(long)]
        id: String,
    },
    /// AUT environment configuration by id
    Configuration {
        #[arg(long)]
        id: String,
    },
    /// Parameter values belonging to an environment configuration
    Parameters {
        #[arg(long)]
        configuration_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = AgentConfig::new(
        args.config.as_deref(),
        args.alm_url,
        args.domain,
        args.project,
        args.log,
    );
    tracing_subscriber::fmt()
        .with_env_filter(config.log.clone())
        .compact()
        .init();

    match args.command {
        Command::Detect => detect(),
        Command::Validate { manual, path } => validate(manual, path),
        Command::Fetch { resource } => fetch(&config, resource).await,
    }
}

fn detect() -> Result<()> {
    let resolver = CapabilityResolver::new(FsUftLocator::new());
    match resolver.propose_defaults() {
        CapabilityProposal::Add(record) => {
            info!(path = %record.path, "UFT One detected");
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        CapabilityProposal::Remove => {
            let msg = serde_json::json!({ "action": "remove", "reason": "executable path unresolved" });
            println!("{}", serde_json::to_string_pretty(&msg)?);
        }
        CapabilityProposal::Skip => {
            let msg = serde_json::json!({ "action": "skip", "reason": "not installed" });
            println!("{}", serde_json::to_string_pretty(&msg)?);
        }
    }
    Ok(())
}

fn validate(manual: bool, path: String) -> Result<()> {
    let resolver = CapabilityResolver::new(FsUftLocator::new());
    let params = DetectionParams {
        manual_detection: manual,
        path,
    };

    let result = resolver.validate(&params);
    if result.is_valid() {
        let record = resolver.resolve(&params);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    for field in [FIELD_UFT_PATH, FIELD_UFT_DETECTION] {
        if let Some(message) = result.error_for(field) {
            eprintln!("{field}: {message}");
        }
    }
    std::process::exit(1);
}

async fn fetch(config: &AgentConfig, resource: FetchResource) -> Result<()> {
    if config.project.is_empty() {
        bail!("an ALM project is required — pass --project or set it in the config file");
    }

    let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))
        .context("failed to build HTTP transport")?;
    let client = Client::new(
        Box::new(transport),
        &config.alm_base_url,
        &config.domain,
        &config.project,
    );

    let request: Box<dyn Request> = match resource {
        FetchResource::Environment { id } => Box::new(GetAutEnvironmentById::new(id)),
        FetchResource::Configuration { id } => {
            Box::new(GetAutEnvironmentConfigurationById::new(id))
        }
        FetchResource::Parameters { configuration_id } => {
            Box::new(GetParameterValuesByConfigurationId::new(configuration_id))
        }
    };

    let response = client
        .send(request.as_ref())
        .await
        .context("ALM fetch failed")?;
    info!(status = response.status, "ALM response received");
    println!("{}", response.body);
    Ok(())
}
