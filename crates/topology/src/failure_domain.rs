// Copyright 2025 GridOps Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Failure-domain grouping
//!
//! Partitions the cluster's nodes into groups that share a location
//! prefix at the cluster's configured fault-tolerance scope. Nodes in
//! one group can fail together without violating the replication
//! guarantee; nodes in different groups cannot.

use gridops_admin::{AdminApi, LocationScope, NodeConfig, NodeId, ReplicationInfo, Result};
use hashbrown::HashMap;
use serde::Serialize;
use tracing::debug;

/// Grouping key derived from one node's placement
///
/// At NODE scope every node is its own domain, keyed by its index. At
/// any coarser scope the key is the node's location labels for every
/// level at-or-coarser than the target, ordered coarsest to finest.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LocationKey {
    Node(u32),
    Labels(Vec<String>),
}

/// Nodes sharing one failure domain, sorted by node index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureDomainGroup {
    pub members: Vec<NodeId>,
}

impl FailureDomainGroup {
    /// Index of the numerically smallest member
    pub fn smallest_index(&self) -> Option<u32> {
        self.members.first().map(|node| node.node_index)
    }
}

fn location_key(config: &NodeConfig, scope: LocationScope) -> LocationKey {
    if scope == LocationScope::Node {
        return LocationKey::Node(config.node_index);
    }

    // A label missing at a relevant level defaults to "". Nodes that
    // omit the same levels therefore collide into one group; that is a
    // documented approximation, not something to repair here.
    let labels = LocationScope::COARSEST_TO_FINEST
        .iter()
        .filter(|level| level.is_at_least_as_coarse_as(scope))
        .map(|level| config.location_per_scope.get(level).cloned().unwrap_or_default())
        .collect();

    LocationKey::Labels(labels)
}

/// Group nodes by the cluster's tolerable failure domain
///
/// `node_configs` and `replication_info` are fetched from the control
/// plane when not supplied by the caller. The returned groups exactly
/// partition the input: members are sorted by node index, and groups
/// are sorted by the index of their smallest member, so the output is
/// deterministic for a given input.
pub async fn group_nodes_by_failure_domain<C>(
    client: &C,
    node_configs: Option<Vec<NodeConfig>>,
    replication_info: Option<ReplicationInfo>,
) -> Result<Vec<FailureDomainGroup>>
where
    C: AdminApi + ?Sized,
{
    let node_configs = match node_configs {
        Some(configs) => configs,
        None => client.fetch_node_configs(None).await?,
    };
    let replication_info = match replication_info {
        Some(info) => info,
        None => client.fetch_replication_info().await?,
    };

    let scope = replication_info.tolerable_failure_domains.domain;
    debug!(?scope, nodes = node_configs.len(), "Grouping nodes by failure domain");

    // Accumulate by key in arbitrary order first; determinism comes
    // from the explicit sort below, never from map iteration order.
    let mut grouped: HashMap<LocationKey, Vec<NodeId>> = HashMap::new();
    for config in &node_configs {
        grouped
            .entry(location_key(config, scope))
            .or_default()
            .push(config.node_id());
    }

    let mut groups: Vec<FailureDomainGroup> = grouped
        .into_values()
        .map(|mut members| {
            members.sort_by_key(|node| node.node_index);
            FailureDomainGroup { members }
        })
        .collect();
    groups.sort_by_key(|group| group.smallest_index());

    Ok(groups)
}
