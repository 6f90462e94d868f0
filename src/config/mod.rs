use std::path::Path;

use serde::Deserialize;
use tracing::error;

const DEFAULT_ALM_BASE_URL: &str = "http://localhost:8080/qcbin";
const DEFAULT_DOMAIN: &str = "DEFAULT";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG: &str = "info";

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `config.toml` next to the agent — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// ALM server base URL (default: http://localhost:8080/qcbin).
    alm_base_url: Option<String>,
    /// ALM domain (default: DEFAULT).
    domain: Option<String>,
    /// ALM project. No default — required for `fetch`.
    project: Option<String>,
    /// Per-request HTTP timeout in seconds (default: 10).
    timeout_secs: Option<u64>,
    /// Log level filter string, e.g. "debug", "info,uft_agent=trace" (default: "info").
    log: Option<String>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config file — using defaults");
            None
        }
    }
}

// ─── AgentConfig ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// ALM server base URL (UFT_AGENT_ALM_URL env var).
    pub alm_base_url: String,
    /// ALM domain the project lives in.
    pub domain: String,
    /// ALM project name. Empty until configured.
    pub project: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_secs: u64,
    pub log: String,
}

impl AgentConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `config_path`
    ///   3. Built-in defaults
    pub fn new(
        config_path: Option<&Path>,
        alm_base_url: Option<String>,
        domain: Option<String>,
        project: Option<String>,
        log: Option<String>,
    ) -> Self {
        // Load TOML as the lowest-priority override layer
        let toml = config_path.and_then(load_toml).unwrap_or_default();

        let alm_base_url = alm_base_url
            .or(toml.alm_base_url)
            .unwrap_or_else(|| DEFAULT_ALM_BASE_URL.to_string());
        let domain = domain
            .or(toml.domain)
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
        let project = project.or(toml.project).unwrap_or_default();
        let timeout_secs = toml.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let log = log.or(toml.log).unwrap_or_else(|| DEFAULT_LOG.to_string());

        Self {
            alm_base_url,
            domain,
            project,
            timeout_secs,
            log,
        }
    }
}
