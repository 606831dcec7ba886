//! Backward compatibility checks between a local and an external version

use std::cmp::Ordering;

use tracing::debug;

use crate::version::types::Version;

/// Outcome of checking an external version against a local one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compatibility {
    /// Same release, or within the local compatibility window
    Compatible,
    /// Older than the local compatibility floor; an intermediate version is needed
    NeedsHop,
    /// Newer than the local version, or the local version declares no floor
    Incompatible,
}

impl Compatibility {
    pub fn is_compatible(self) -> bool {
        self == Compatibility::Compatible
    }
}

impl Version {
    /// Check whether `external` can interoperate with this version
    ///
    /// Compatibility only looks backward: a strictly newer external version is
    /// always rejected, an identical one always accepted, and an older one is
    /// accepted only when it is at or above the declared floor.
    pub fn check_compatibility(&self, external: &Version) -> Compatibility {
        let result = match self.compare(external) {
            Ordering::Less => Compatibility::Incompatible,
            Ordering::Equal => Compatibility::Compatible,
            Ordering::Greater => match self.backward_compatible_until() {
                None => Compatibility::Incompatible,
                Some(floor) if floor.compare(external) != Ordering::Greater => {
                    Compatibility::Compatible
                }
                Some(_) => Compatibility::NeedsHop,
            },
        };

        debug!("Compatibility of {} with external {}: {:?}", self, external, result);
        result
    }

    /// Boolean form of [`Version::check_compatibility`]
    ///
    /// `NeedsHop` collapses to `false`.
    pub fn is_compatible_with(&self, external: &Version) -> bool {
        self.check_compatibility(external).is_compatible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v2_with_floor() -> Version {
        Version::new(2, 0, 0, 0).with_backward_compatible_until(Version::new(1, 0, 0, 0))
    }

    #[rstest]
    #[case(Version::new(1, 5, 0, 0), Compatibility::Compatible)]
    #[case(Version::new(1, 0, 0, 0), Compatibility::Compatible)] // exactly on the floor
    #[case(Version::new(0, 9, 0, 0), Compatibility::NeedsHop)]
    #[case(Version::new(1, 0, 0, 1), Compatibility::Compatible)] // rc sorts after the floor
    #[case(Version::new(0, 255, 255, 4), Compatibility::NeedsHop)]
    #[case(Version::new(2, 0, 0, 0), Compatibility::Compatible)]
    #[case(Version::new(3, 0, 0, 0), Compatibility::Incompatible)]
    #[case(Version::new(2, 0, 0, 1), Compatibility::Incompatible)]
    fn check_compatibility_with_floor(#[case] external: Version, #[case] expected: Compatibility) {
        let local = v2_with_floor();

        assert_eq!(local.check_compatibility(&external), expected);
        assert_eq!(
            local.is_compatible_with(&external),
            expected == Compatibility::Compatible
        );
    }

    #[test]
    fn older_external_without_floor_is_incompatible() {
        let local = Version::new(1, 2, 3, 1);

        assert_eq!(
            local.check_compatibility(&Version::new(1, 2, 2, 0)),
            Compatibility::Incompatible
        );
        assert!(!local.is_compatible_with(&Version::new(1, 2, 2, 0)));
    }

    #[test]
    fn floor_pointing_at_self_accepts_only_the_same_release() {
        let local =
            Version::new(1, 4, 0, 0).with_backward_compatible_until(Version::new(1, 4, 0, 0));

        assert!(local.is_compatible_with(&Version::new(1, 4, 0, 0)));
        assert!(!local.is_compatible_with(&Version::new(1, 3, 9, 0)));
        assert!(!local.is_compatible_with(&Version::new(1, 4, 1, 0)));
    }

    #[test]
    fn nested_floor_is_not_followed() {
        // 1.0.0 reaches back to 0.1.0 on its own, but that must not extend 2.0.0's window
        let floor =
            Version::new(1, 0, 0, 0).with_backward_compatible_until(Version::new(0, 1, 0, 0));
        let local = Version::new(2, 0, 0, 0).with_backward_compatible_until(floor);

        assert_eq!(
            local.check_compatibility(&Version::new(0, 5, 0, 0)),
            Compatibility::NeedsHop
        );
    }

    #[test]
    fn hop_id_does_not_affect_compatibility() {
        let local = v2_with_floor().with_hop_id(3);
        let external = Version::new(1, 1, 0, 0).with_hop_id(200);

        assert!(local.is_compatible_with(&external));
    }
}
