//! Versions and backward compatibility
//!
//! This module provides the structured [`Version`] type and the checks used to
//! decide whether two components on different versions can interoperate during
//! a staged or rolling upgrade.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Version   │────▶│   Compare   │◀────│   Checker   │
//! │  (+ floor)  │     │ (ordering)  │     │ (one hop)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │   Render    │                         │     Hop     │
//! │ (to_string) │                         │ (planning)  │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: The `Version` value and its stripped compatibility floor
//! - [`channel`]: Release channels keyed by release stage code
//! - [`compare`]: Total order over `(major, minor, patch, rsc)`
//! - [`checker`]: Single-hop backward compatibility predicate
//! - [`render`]: Canonical and human facing string forms
//! - [`hop`]: Multi-hop upgrade path planning over known releases
//! - [`error`]: Error types for rendering and path planning

pub mod channel;
pub mod checker;
pub mod compare;
pub mod error;
pub mod hop;
pub mod render;
pub mod types;

pub use channel::ReleaseChannel;
pub use checker::Compatibility;
pub use compare::compare_versions;
pub use error::{HopError, VersionError};
pub use hop::{HopPlanner, UpgradePath};
pub use types::Version;
