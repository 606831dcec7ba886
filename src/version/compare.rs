use std::cmp::Ordering;

use crate::version::types::Version;

/// Compare two versions by `(major, minor, patch, rsc)`, most significant first
///
/// The compatibility floor and hop id never take part in the comparison.
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then_with(|| a.minor().cmp(&b.minor()))
        .then_with(|| a.patch().cmp(&b.patch()))
        .then_with(|| a.rsc().cmp(&b.rsc()))
}

impl Version {
    pub fn compare(&self, other: &Version) -> Ordering {
        compare_versions(self, other)
    }

    /// True when both versions name the same release point
    pub fn same_release(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Equal
    }
}
