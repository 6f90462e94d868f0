//! GET request variants for ALM test resources.
//!
//! Each variant is data-only: it knows its resource suffix (via the
//! registry) and how to render its query string. Transport and URL assembly
//! live in [`crate::alm::Client`]. New resource operations are added as new
//! variants, never by touching the client.
//!
//! Query strings follow the server's `query={field[value]}` filter syntax.
//! Values are substituted verbatim — no escaping. The server's tolerance for
//! ids containing `{`, `}`, or `]` is unconfirmed, so callers must keep ids
//! to plain identifiers.

use crate::alm::resources;

/// A resource-addressed GET against the ALM server.
///
/// `suffix` is always one of the registry constants; `query_string` is the
/// variant-specific filter, or `None` for unfiltered collection reads.
pub trait Request: Send + Sync {
    fn suffix(&self) -> &'static str;
    fn query_string(&self) -> Option<String>;
}

// ─── GetAutEnvironmentById ────────────────────────────────────────────────────

/// Fetch a single AUT environment by its id.
#[derive(Debug, Clone)]
pub struct GetAutEnvironmentById {
    id: String,
}

impl GetAutEnvironmentById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetAutEnvironmentById {
    fn suffix(&self) -> &'static str {
        resources::AUT_ENVIRONMENTS
    }

    fn query_string(&self) -> Option<String> {
        Some(format!("query={{id[{}]}}", self.id))
    }
}

// ─── GetAutEnvironmentConfigurationById ───────────────────────────────────────

/// Fetch a single AUT environment configuration by its id.
#[derive(Debug, Clone)]
pub struct GetAutEnvironmentConfigurationById {
    id: String,
}

impl GetAutEnvironmentConfigurationById {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Request for GetAutEnvironmentConfigurationById {
    fn suffix(&self) -> &'static str {
        resources::AUT_ENVIRONMENT_CONFIGURATIONS
    }

    fn query_string(&self) -> Option<String> {
        Some(format!("query={{id[{}]}}", self.id))
    }
}

// ─── GetParameterValuesByConfigurationId ──────────────────────────────────────

/// Fetch the parameter values belonging to one environment configuration.
#[derive(Debug, Clone)]
pub struct GetParameterValuesByConfigurationId {
    configuration_id: String,
}

impl GetParameterValuesByConfigurationId {
    pub fn new(configuration_id: impl Into<String>) -> Self {
        Self {
            configuration_id: configuration_id.into(),
        }
    }
}

impl Request for GetParameterValuesByConfigurationId {
    fn suffix(&self) -> &'static str {
        resources::AUT_ENVIRONMENT_PARAMETER_VALUES
    }

    fn query_string(&self) -> Option<String> {
        Some(format!(
            "query={{app-param-value-set-id[{}]}}",
            self.configuration_id
        ))
    }
}
