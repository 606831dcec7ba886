use serde::Deserialize;

use crate::version::channel::ReleaseChannel;

/// Default upper bound on the number of hops an upgrade path may take
pub const DEFAULT_MAX_HOPS: usize = 8;

/// Upgrade path planning configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct HopConfig {
    /// Maximum number of hops a path may take
    pub max_hops: usize,
    /// Least stable channel an intermediate version may come from
    pub hop_channel: ReleaseChannel,
}

impl Default for HopConfig {
    fn default() -> Self {
        Self {
            max_hops: DEFAULT_MAX_HOPS,
            hop_channel: ReleaseChannel::Nightly,
        }
    }
}
