//! Structured release versions with backward compatibility checks
//!
//! - [`version`]: The `Version` type, ordering, compatibility and rendering
//! - [`config`]: Upgrade path planning configuration

pub mod config;
pub mod version;

pub use config::HopConfig;
pub use version::{
    Compatibility, HopError, HopPlanner, ReleaseChannel, UpgradePath, Version, VersionError,
    compare_versions,
};
