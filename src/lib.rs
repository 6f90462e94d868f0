//! uft-agent — build-agent toolkit for UFT One.
//!
//! Two independent concerns live here:
//!
//! 1. **ALM resource access** (`alm`): a typed request/response client that
//!    fetches remotely-configured test resources (AUT environment
//!    configurations, parameter values) from an ALM server over HTTP.
//! 2. **Capability detection** (`locator` + `capability`): deciding whether
//!    UFT One is installed on this agent, where its executable lives, and
//!    validating manually supplied install paths.
//!
//! `sv` carries the Service Virtualization value types shared with the
//! deploy tasks (performance-model selection).

pub mod alm;
pub mod capability;
pub mod config;
pub mod locator;
pub mod sv;
