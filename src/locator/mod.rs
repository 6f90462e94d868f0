//! UFT One installation probe.
//!
//! `UftLocator` is the seam the capability resolver depends on; production
//! code uses [`FsUftLocator`], tests substitute scripted fakes. The locator
//! is injected explicitly — no process-wide singleton.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing::debug;

/// Executable file name inside `<install root>/bin/`.
pub const UFT_EXECUTABLE: &str = "UFT.exe";

const UFT_HOME_ENV: &str = "UFT_HOME";

/// Install roots probed after `UFT_HOME`, oldest branding last.
const CANDIDATE_INSTALL_ROOTS: &[&str] = &[
    r"C:\Program Files (x86)\OpenText\Unified Functional Testing",
    r"C:\Program Files (x86)\Micro Focus\Unified Functional Testing",
    r"C:\Program Files (x86)\HP\Unified Functional Testing",
];

// ─── UftLocator ───────────────────────────────────────────────────────────────

/// Decides whether UFT One is installed on this machine and where.
pub trait UftLocator: Send + Sync {
    /// Environment probe. "Not installed" is a normal answer, never an error.
    fn is_installed(&self) -> bool;

    /// Full path to the UFT executable, or the empty string when not
    /// installed (pairs with `is_installed()` returning false).
    fn executable_full_path(&self) -> String;

    /// Normalize a user-supplied install path. Does NOT check existence —
    /// the configuring machine may not be the agent machine, so path
    /// validity is deferred to task execution time.
    fn resolve_manual_path(&self, supplied: &str) -> String;
}

// ─── FsUftLocator ─────────────────────────────────────────────────────────────

/// Filesystem/environment locator.
///
/// The probe scans `UFT_HOME` and the candidate install roots for
/// `bin/UFT.exe`. The scan result is cached populate-once per instance;
/// concurrent first calls race benignly (both writers compute the same
/// value).
#[derive(Default)]
pub struct FsUftLocator {
    probed: OnceCell<Option<PathBuf>>,
}

impl FsUftLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator rooted at an explicit directory instead of the standard
    /// candidates. Used by tests and by agents with relocated installs.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let locator = Self::default();
        let _ = locator.probed.set(Self::executable_under(&root.into()));
        locator
    }

    fn probe(&self) -> Option<&PathBuf> {
        self.probed
            .get_or_init(|| {
                if let Ok(home) = std::env::var(UFT_HOME_ENV) {
                    if let Some(exe) = Self::executable_under(Path::new(&home)) {
                        debug!(path = %exe.display(), "UFT One found via UFT_HOME");
                        return Some(exe);
                    }
                }
                for root in CANDIDATE_INSTALL_ROOTS {
                    if let Some(exe) = Self::executable_under(Path::new(root)) {
                        debug!(path = %exe.display(), "UFT One found in standard install root");
                        return Some(exe);
                    }
                }
                debug!("UFT One not detected on this machine");
                None
            })
            .as_ref()
    }

    fn executable_under(root: &Path) -> Option<PathBuf> {
        let exe = root.join("bin").join(UFT_EXECUTABLE);
        exe.is_file().then_some(exe)
    }
}

impl UftLocator for FsUftLocator {
    fn is_installed(&self) -> bool {
        self.probe().is_some()
    }

    fn executable_full_path(&self) -> String {
        self.probe()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    fn resolve_manual_path(&self, supplied: &str) -> String {
        // Manual paths name the install root (validation rejects anything
        // with a file extension). Trim noise; keep the root as given.
        supplied
            .trim()
            .trim_end_matches(['/', '\\'])
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scaffold_install(root: &Path) {
        fs::create_dir_all(root.join("bin")).unwrap();
        fs::write(root.join("bin").join(UFT_EXECUTABLE), b"").unwrap();
    }

    #[test]
    fn detects_executable_under_root() {
        let tmp = TempDir::new().unwrap();
        scaffold_install(tmp.path());

        let locator = FsUftLocator::with_root(tmp.path());
        assert!(locator.is_installed());
        assert!(locator
            .executable_full_path()
            .ends_with(UFT_EXECUTABLE));
    }

    #[test]
    fn missing_install_yields_false_and_empty_path() {
        let tmp = TempDir::new().unwrap();

        let locator = FsUftLocator::with_root(tmp.path());
        assert!(!locator.is_installed());
        assert_eq!(locator.executable_full_path(), "");
    }

    #[test]
    fn probe_result_is_stable_across_calls() {
        let tmp = TempDir::new().unwrap();
        scaffold_install(tmp.path());

        let locator = FsUftLocator::with_root(tmp.path());
        let first = locator.executable_full_path();

        // Removing the install after the first probe must not flip the
        // cached answer mid-process.
        fs::remove_dir_all(tmp.path().join("bin")).unwrap();
        assert_eq!(locator.executable_full_path(), first);
        assert!(locator.is_installed());
    }

    #[test]
    fn manual_path_is_trimmed_and_kept_as_install_root() {
        let locator = FsUftLocator::new();
        assert_eq!(locator.resolve_manual_path("  /opt/uft/  "), "/opt/uft");
        assert_eq!(
            locator.resolve_manual_path(r"C:\tools\uft\"),
            r"C:\tools\uft"
        );
    }
}
