//! End-to-end capability resolution: real filesystem locator + resolver.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use uft_agent::capability::{
    CapabilityProposal, CapabilityResolver, DetectionParams, UFT_CAPABILITY_KEY,
};
use uft_agent::locator::{FsUftLocator, UftLocator, UFT_EXECUTABLE};

/// Helper: lay down a plausible UFT install under a temp root.
fn scaffold_install(root: &Path) {
    fs::create_dir_all(root.join("bin")).unwrap();
    fs::write(root.join("bin").join(UFT_EXECUTABLE), b"").unwrap();
}

#[test]
fn detected_install_yields_a_default_capability() {
    let tmp = TempDir::new().unwrap();
    scaffold_install(tmp.path());

    let resolver = CapabilityResolver::new(FsUftLocator::with_root(tmp.path()));

    match resolver.propose_defaults() {
        CapabilityProposal::Add(record) => {
            assert_eq!(record.key, UFT_CAPABILITY_KEY);
            assert!(record.path.ends_with(UFT_EXECUTABLE));
            assert!(Path::new(&record.path).is_file());
        }
        other => panic!("expected Add, got {other:?}"),
    }
}

#[test]
fn missing_install_proposes_nothing() {
    let tmp = TempDir::new().unwrap();

    let resolver = CapabilityResolver::new(FsUftLocator::with_root(tmp.path()));
    assert_eq!(resolver.propose_defaults(), CapabilityProposal::Skip);
}

#[test]
fn automatic_validation_matches_detection_state() {
    let installed = TempDir::new().unwrap();
    scaffold_install(installed.path());
    let empty = TempDir::new().unwrap();

    let params = DetectionParams::default();

    let with_install = CapabilityResolver::new(FsUftLocator::with_root(installed.path()));
    assert!(with_install.validate(&params).is_valid());

    let without = CapabilityResolver::new(FsUftLocator::with_root(empty.path()));
    assert!(!without.validate(&params).is_valid());
}

#[test]
fn manual_path_flows_validated_into_the_record() {
    // Manual mode never touches the local filesystem: an empty machine
    // still validates and resolves a remote agent's install root.
    let tmp = TempDir::new().unwrap();
    let resolver = CapabilityResolver::new(FsUftLocator::with_root(tmp.path()));

    let params = DetectionParams {
        manual_detection: true,
        path: "/opt/uft".to_string(),
    };

    assert!(resolver.validate(&params).is_valid());

    let record = resolver.resolve(&params);
    assert_eq!(record.key, UFT_CAPABILITY_KEY);
    assert_eq!(record.path, "/opt/uft");
}

#[test]
fn automatic_resolution_uses_the_probed_executable() {
    let tmp = TempDir::new().unwrap();
    scaffold_install(tmp.path());

    let locator = FsUftLocator::with_root(tmp.path());
    let expected = locator.executable_full_path();

    let resolver = CapabilityResolver::new(locator);
    let record = resolver.resolve(&DetectionParams::default());
    assert_eq!(record.path, expected);
}
