//! Display forms of a version
//!
//! Neither form is meant to be parsed back into a [`Version`].

use std::fmt;

use crate::version::channel::ReleaseChannel;
use crate::version::error::VersionError;
use crate::version::types::Version;

/// Canonical form: `{major}.{minor}.{patch}.{rsc}-{floor}-{hop_id}`
///
/// `{floor}` is the stripped floor rendered the same way, or empty when no
/// floor is declared. Stripping limits the recursion to one level.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}-",
            self.major(),
            self.minor(),
            self.patch(),
            self.rsc()
        )?;
        if let Some(floor) = self.backward_compatible_until() {
            write!(f, "{}", floor)?;
        }
        write!(f, "-{}", self.hop_id())
    }
}

impl Version {
    /// Human facing form: `{major}.{minor}.{patch}-{channel}-{floor}-{hop_id}`
    ///
    /// `{channel}` is empty for unmapped release stage codes. Fails with
    /// [`VersionError::MissingCompatibilityFloor`] when no floor is declared.
    pub fn to_format_string(&self) -> Result<String, VersionError> {
        let floor = self.backward_compatible_until().ok_or_else(|| {
            VersionError::MissingCompatibilityFloor {
                version: self.to_string(),
            }
        })?;

        Ok(format!(
            "{}.{}.{}-{}-{}-{}",
            self.major(),
            self.minor(),
            self.patch(),
            ReleaseChannel::label_for(self.rsc()),
            floor,
            self.hop_id()
        ))
    }
}
