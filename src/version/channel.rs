//! Release channels keyed by release stage code

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;

/// Release channel of a version, ordered from most stable to least stable
///
/// The discriminant is the release stage code (`rsc`) carried by a
/// [`Version`](crate::version::types::Version).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ReleaseChannel {
    Stable = 0,
    Rc = 1,
    Beta = 2,
    Alpha = 3,
    Nightly = 4,
}

impl ReleaseChannel {
    /// Look up the channel for a release stage code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Stable),
            1 => Some(Self::Rc),
            2 => Some(Self::Beta),
            3 => Some(Self::Alpha),
            4 => Some(Self::Nightly),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Rc => "rc",
            Self::Beta => "beta",
            Self::Alpha => "alpha",
            Self::Nightly => "nightly",
        }
    }

    /// Channel name for a release stage code, or `""` for unmapped codes
    pub const fn label_for(code: u8) -> &'static str {
        match Self::from_code(code) {
            Some(channel) => channel.as_str(),
            None => "",
        }
    }
}

impl TryFrom<u8> for ReleaseChannel {
    type Error = VersionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(VersionError::UnknownReleaseStage(code))
    }
}

impl From<ReleaseChannel> for u8 {
    fn from(channel: ReleaseChannel) -> Self {
        channel.code()
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "stable")]
    #[case(1, "rc")]
    #[case(2, "beta")]
    #[case(3, "alpha")]
    #[case(4, "nightly")]
    #[case(5, "")]
    #[case(255, "")]
    fn label_for_maps_codes_to_channel_names(#[case] code: u8, #[case] expected: &str) {
        assert_eq!(ReleaseChannel::label_for(code), expected);
    }

    #[rstest]
    #[case(ReleaseChannel::Stable)]
    #[case(ReleaseChannel::Rc)]
    #[case(ReleaseChannel::Beta)]
    #[case(ReleaseChannel::Alpha)]
    #[case(ReleaseChannel::Nightly)]
    fn from_code_returns_channel_for_its_own_code(#[case] channel: ReleaseChannel) {
        assert_eq!(ReleaseChannel::from_code(channel.code()), Some(channel));
    }

    #[test]
    fn try_from_rejects_unmapped_code() {
        assert_eq!(
            ReleaseChannel::try_from(9),
            Err(VersionError::UnknownReleaseStage(9))
        );
    }

    #[test]
    fn channels_order_from_most_to_least_stable() {
        assert!(ReleaseChannel::Stable < ReleaseChannel::Rc);
        assert!(ReleaseChannel::Rc < ReleaseChannel::Beta);
        assert!(ReleaseChannel::Beta < ReleaseChannel::Alpha);
        assert!(ReleaseChannel::Alpha < ReleaseChannel::Nightly);
    }

    #[test]
    fn display_uses_channel_name() {
        assert_eq!(ReleaseChannel::Alpha.to_string(), "alpha");
    }

    #[test]
    fn u8_from_channel_is_its_stage_code() {
        assert_eq!(u8::from(ReleaseChannel::Beta), 2);
        assert_eq!(u8::from(ReleaseChannel::Nightly), 4);
    }

    #[rstest]
    #[case(ReleaseChannel::Stable, "stable")]
    #[case(ReleaseChannel::Rc, "rc")]
    #[case(ReleaseChannel::Nightly, "nightly")]
    fn serde_uses_lowercase_channel_names(#[case] channel: ReleaseChannel, #[case] name: &str) {
        let value = serde_json::to_value(channel).unwrap();
        assert_eq!(value, serde_json::json!(name));

        let parsed = serde_json::from_value::<ReleaseChannel>(value).unwrap();
        assert_eq!(parsed, channel);
    }
}
