//! Resource-name → URL-suffix registry for the ALM server.
//!
//! The suffix strings are the wire-level contract with the server: they must
//! not change without server agreement. Requests resolve their suffix through
//! this table instead of hand-building paths.

use thiserror::Error;

// ─── Suffix constants (wire contract) ────────────────────────────────────────

pub const AUT_ENVIRONMENTS: &str = "aut-environments";
pub const AUT_ENVIRONMENT_CONFIGURATIONS: &str = "aut-environment-configurations";
pub const AUT_ENVIRONMENT_PARAMETER_VALUES: &str = "aut-environment-parameter-values";

/// Logical resource names accepted by [`suffix_for`].
pub const RESOURCE_AUT_ENVIRONMENTS: &str = "AUT environments";
pub const RESOURCE_AUT_ENVIRONMENT_CONFIGURATIONS: &str = "AUT environment configurations";
pub const RESOURCE_AUT_ENVIRONMENT_PARAMETER_VALUES: &str = "AUT environment parameter values";

static REGISTRY: &[(&str, &str)] = &[
    (RESOURCE_AUT_ENVIRONMENTS, AUT_ENVIRONMENTS),
    (RESOURCE_AUT_ENVIRONMENT_CONFIGURATIONS, AUT_ENVIRONMENT_CONFIGURATIONS),
    (RESOURCE_AUT_ENVIRONMENT_PARAMETER_VALUES, AUT_ENVIRONMENT_PARAMETER_VALUES),
];

// ─── Lookup ───────────────────────────────────────────────────────────────────

/// A request referenced a resource that is not registered.
///
/// This is a programming error (requests ship with their resource name baked
/// in), not a user-facing condition.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown ALM resource: {0}")]
pub struct UnknownResource(pub String);

/// Resolve a logical resource name to its URL path suffix.
pub fn suffix_for(resource_name: &str) -> Result<&'static str, UnknownResource> {
    REGISTRY
        .iter()
        .find(|(name, _)| *name == resource_name)
        .map(|(_, suffix)| *suffix)
        .ok_or_else(|| UnknownResource(resource_name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves_to_a_stable_nonempty_suffix() {
        for (name, _) in REGISTRY {
            let first = suffix_for(name).unwrap();
            let second = suffix_for(name).unwrap();
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn unregistered_name_is_an_error() {
        let err = suffix_for("test sets").unwrap_err();
        assert_eq!(err, UnknownResource("test sets".to_string()));
    }

    #[test]
    fn configuration_suffix_matches_wire_contract() {
        assert_eq!(
            suffix_for(RESOURCE_AUT_ENVIRONMENT_CONFIGURATIONS).unwrap(),
            "aut-environment-configurations"
        );
    }
}
