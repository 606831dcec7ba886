use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Version {version} has no backward compatibility floor to format")]
    MissingCompatibilityFloor { version: String },

    #[error("Unknown release stage code: {0}")]
    UnknownReleaseStage(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HopError {
    #[error("External version {external} is newer than local version {local}")]
    ExternalIsNewer { local: String, external: String },

    #[error("No compatibility path from {external} to {local}")]
    NoPath { local: String, external: String },

    #[error("Upgrade path needs {required} hops, limit is {max}")]
    TooManyHops { required: usize, max: usize },
}
