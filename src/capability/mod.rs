//! UFT One agent capability resolution.
//!
//! A capability is the host's record that this agent can run UFT One: a
//! fixed key plus the install/executable path. The resolver has two entry
//! points with no state between calls — proposing a default capability from
//! auto-detection, and validating/resolving user-entered parameters.
//!
//! Validation mode split: the agent executing builds may not be the machine
//! being configured, so manual mode skips the local installation check and
//! defers path correctness to task execution time. Automatic mode requires a
//! local detection hit.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locator::UftLocator;

// ─── Constants (host contract) ────────────────────────────────────────────────

/// Capability key: host builder prefix + vendor + tool. Stable across the
/// process; the host persists and displays it.
pub const UFT_CAPABILITY_KEY: &str = "system.builder.OpenText.UFT One";

/// Field identifiers the host UI uses to attach validation errors.
pub const FIELD_UFT_PATH: &str = "uftPath";
pub const FIELD_UFT_DETECTION: &str = "uftDetection";

const ERR_UNSPECIFIED_PATH: &str = "a UFT One installation path must be specified";
const ERR_EXECUTABLE_PATH: &str =
    "the path must name the installation folder, not an executable file";
const ERR_NOT_INSTALLED: &str = "UFT One was not detected on this machine";

// ─── Records & results ────────────────────────────────────────────────────────

/// The key/path pair handed to the host capability store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    pub key: String,
    pub path: String,
}

/// Outcome of default-capability proposal.
///
/// `Remove` is distinct from `Skip`: detection succeeded but path resolution
/// came back empty, so any previously registered capability must be cleared
/// rather than left stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityProposal {
    Add(CapabilityRecord),
    Remove,
    Skip,
}

/// Field-name → error-message accumulation for one validation attempt.
/// Empty means valid. Never raised — handed back as data so multiple
/// problems surface together.
#[derive(Debug, Default)]
pub struct ValidationResult {
    errors: HashMap<&'static str, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    fn put(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// User-entered capability parameters from the host configuration form.
#[derive(Debug, Clone, Default)]
pub struct DetectionParams {
    /// True = the user supplies the path; false = auto-detect locally.
    pub manual_detection: bool,
    /// Install path; only meaningful in manual mode.
    pub path: String,
}

// ─── CapabilityResolver ───────────────────────────────────────────────────────

/// Orchestrates the locator into capability records. Each call is a fresh
/// resolution; nothing is cached here.
pub struct CapabilityResolver<L: UftLocator> {
    locator: L,
}

impl<L: UftLocator> CapabilityResolver<L> {
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Propose the default capability from local auto-detection.
    ///
    /// Only meaningful when the configuring machine is the agent machine.
    pub fn propose_defaults(&self) -> CapabilityProposal {
        if !self.locator.is_installed() {
            return CapabilityProposal::Skip;
        }

        let path = self.locator.executable_full_path();
        if path.is_empty() {
            debug!("UFT One detected but executable path resolution came back empty");
            return CapabilityProposal::Remove;
        }

        CapabilityProposal::Add(CapabilityRecord {
            key: UFT_CAPABILITY_KEY.to_string(),
            path,
        })
    }

    /// Validate user-entered parameters. Errors accumulate per field; an
    /// empty result means the parameters may be passed to [`resolve`].
    ///
    /// [`resolve`]: CapabilityResolver::resolve
    pub fn validate(&self, params: &DetectionParams) -> ValidationResult {
        let mut result = ValidationResult::default();

        if params.manual_detection {
            let given = params.path.trim();

            if given.is_empty() {
                result.put(FIELD_UFT_PATH, ERR_UNSPECIFIED_PATH);
                return result;
            }

            // Heuristic: an install path names a folder. A `.` almost always
            // means the user pointed at the executable itself.
            if given.contains('.') {
                result.put(FIELD_UFT_PATH, ERR_EXECUTABLE_PATH);
            }
        } else if !self.locator.is_installed() {
            result.put(FIELD_UFT_DETECTION, ERR_NOT_INSTALLED);
        }

        result
    }

    /// Produce the capability record for validated parameters.
    ///
    /// Does not re-validate: callers run [`validate`] first.
    ///
    /// [`validate`]: CapabilityResolver::validate
    pub fn resolve(&self, params: &DetectionParams) -> CapabilityRecord {
        let path = if params.manual_detection {
            self.locator.resolve_manual_path(&params.path)
        } else {
            self.locator.executable_full_path()
        };

        CapabilityRecord {
            key: UFT_CAPABILITY_KEY.to_string(),
            path,
        }
    }
}
