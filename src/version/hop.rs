//! Upgrade path planning across compatibility hops
//!
//! A single compatibility check only reaches as far back as the local floor.
//! To bring a peer on an older version up to date, each step of the upgrade
//! has to be compatible with the one before it. [`HopPlanner`] chains
//! [`Version::is_compatible_with`] through a set of known releases to find
//! the shortest such chain.

use std::cmp::Ordering;
use std::collections::VecDeque;

use tracing::{debug, info};

use crate::config::HopConfig;
use crate::version::error::HopError;
use crate::version::types::Version;

/// Ordered chain of versions from the external version up to the local one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePath {
    steps: Vec<Version>,
}

impl UpgradePath {
    /// All versions on the path, oldest first
    pub fn steps(&self) -> &[Version] {
        &self.steps
    }

    /// Number of hops taken (0 when both ends are the same release)
    pub fn hops(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Hop ids of every version upgraded to along the path
    pub fn hop_ids(&self) -> Vec<u8> {
        self.steps.iter().skip(1).map(Version::hop_id).collect()
    }

    /// True when the local version accepts the external one without intermediates
    pub fn is_direct(&self) -> bool {
        self.hops() <= 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct HopPlanner {
    config: HopConfig,
}

impl HopPlanner {
    pub fn new(config: HopConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HopConfig {
        &self.config
    }

    /// Find the shortest upgrade path from `external` to `local`
    ///
    /// Intermediate versions are taken from `releases`; only those strictly
    /// between the two ends and on an allowed channel are considered. When two
    /// paths have the same length the one stepping to newer versions first wins.
    pub fn plan(
        &self,
        local: &Version,
        external: &Version,
        releases: &[Version],
    ) -> Result<UpgradePath, HopError> {
        match local.compare(external) {
            Ordering::Less => {
                return Err(HopError::ExternalIsNewer {
                    local: local.to_string(),
                    external: external.to_string(),
                });
            }
            Ordering::Equal => {
                return Ok(UpgradePath {
                    steps: vec![local.clone()],
                });
            }
            Ordering::Greater => {}
        }

        let nodes = self.collect_nodes(local, external, releases);
        let goal = nodes.len() - 1;
        let Some(path) = shortest_path(&nodes, goal) else {
            debug!("No upgrade path from {} to {}", external, local);
            return Err(HopError::NoPath {
                local: local.to_string(),
                external: external.to_string(),
            });
        };

        let hops = path.len() - 1;
        if hops > self.config.max_hops {
            return Err(HopError::TooManyHops {
                required: hops,
                max: self.config.max_hops,
            });
        }

        info!("Upgrade path from {} to {} takes {} hop(s)", external, local, hops);
        Ok(UpgradePath {
            steps: path.into_iter().map(|index| nodes[index].clone()).collect(),
        })
    }

    /// External first, then eligible intermediates oldest first, then local last
    ///
    /// Entries sharing a release point but declaring different floors or hop
    /// ids are all kept; only exact duplicates are dropped.
    fn collect_nodes(
        &self,
        local: &Version,
        external: &Version,
        releases: &[Version],
    ) -> Vec<Version> {
        let mut intermediates: Vec<Version> = Vec::new();
        for release in releases
            .iter()
            .filter(|release| {
                release.compare(external) == Ordering::Greater
                    && release.compare(local) == Ordering::Less
            })
            .filter(|release| {
                release
                    .release_channel()
                    .is_some_and(|channel| channel <= self.config.hop_channel)
            })
        {
            if !intermediates.contains(release) {
                intermediates.push(release.clone());
            }
        }
        intermediates.sort_by(Version::compare);

        let mut nodes = Vec::with_capacity(intermediates.len() + 2);
        nodes.push(external.clone());
        nodes.extend(intermediates);
        nodes.push(local.clone());
        nodes
    }
}

/// Breadth-first search over ascending `nodes`, from index 0 to `goal`
///
/// An edge leads from an older node to a strictly newer one that accepts it.
fn shortest_path(nodes: &[Version], goal: usize) -> Option<Vec<usize>> {
    let mut previous: Vec<Option<usize>> = vec![None; nodes.len()];
    let mut visited = vec![false; nodes.len()];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            let mut path = vec![goal];
            let mut cursor = goal;
            while let Some(prev) = previous[cursor] {
                path.push(prev);
                cursor = prev;
            }
            path.reverse();
            return Some(path);
        }

        for next in (current + 1..nodes.len()).rev() {
            if !visited[next]
                && nodes[next].compare(&nodes[current]) == Ordering::Greater
                && nodes[next].is_compatible_with(&nodes[current])
            {
                visited[next] = true;
                previous[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    None
}
