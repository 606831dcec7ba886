//! The `Version` value type

use crate::version::channel::ReleaseChannel;

/// A single release point
///
/// Besides the numeric `major.minor.patch` and release stage code, a version
/// may declare a backward compatibility floor: the oldest version it still
/// interoperates with directly. The floor is owned by this version and only
/// its own numeric fields are ever read; a floor nested inside the floor is
/// ignored everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: u8,
    minor: u8,
    patch: u8,
    rsc: u8,
    backward_compatible_until: Option<Box<Version>>,
    hop_id: u8,
}

impl Version {
    /// Create a version without a compatibility floor and with hop id 0
    ///
    /// `rsc` is the release stage code (see [`ReleaseChannel`]). Codes outside
    /// the known channels are kept as-is.
    pub const fn new(major: u8, minor: u8, patch: u8, rsc: u8) -> Self {
        Self {
            major,
            minor,
            patch,
            rsc,
            backward_compatible_until: None,
            hop_id: 0,
        }
    }

    pub const fn with_release_channel(
        major: u8,
        minor: u8,
        patch: u8,
        channel: ReleaseChannel,
    ) -> Self {
        Self::new(major, minor, patch, channel.code())
    }

    /// Declare the oldest version this one is directly compatible with
    pub fn with_backward_compatible_until(mut self, floor: Version) -> Self {
        self.backward_compatible_until = Some(Box::new(floor));
        self
    }

    pub fn with_hop_id(mut self, hop_id: u8) -> Self {
        self.hop_id = hop_id;
        self
    }

    pub fn major(&self) -> u8 {
        self.major
    }

    pub fn minor(&self) -> u8 {
        self.minor
    }

    pub fn patch(&self) -> u8 {
        self.patch
    }

    /// Release stage code
    pub fn rsc(&self) -> u8 {
        self.rsc
    }

    pub fn hop_id(&self) -> u8 {
        self.hop_id
    }

    /// Release channel, or `None` when the stage code is unmapped
    pub fn release_channel(&self) -> Option<ReleaseChannel> {
        ReleaseChannel::from_code(self.rsc)
    }

    /// The compatibility floor with its own floor and hop id stripped
    pub fn backward_compatible_until(&self) -> Option<Version> {
        self.backward_compatible_until
            .as_deref()
            .map(Version::without_backward_compatible)
    }

    /// Copy of the numeric fields only: no floor, hop id 0
    pub fn without_backward_compatible(&self) -> Version {
        Version::new(self.major, self.minor, self.patch, self.rsc)
    }
}
