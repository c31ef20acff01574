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

//! Wire-level value types exposed by the control-plane admin API

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Network address of a node's admin or data endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SocketAddress {
    pub host: String,
    pub port: u16,
}

impl SocketAddress {
    /// Build an address from a host and port pair
    pub fn from_host_port(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }
}

impl fmt::Display for SocketAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Stable identity of a cluster node
///
/// The control plane guarantees that `node_index` and `name` are each
/// unique cluster-wide. That guarantee is trusted here, not re-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId {
    /// Numeric index, unique cluster-wide
    pub node_index: u32,

    /// Human-readable name, unique cluster-wide
    pub name: String,

    /// Data-plane address of the node
    pub address: SocketAddress,
}

/// Granularity levels at which node placement is described
///
/// `Region` is the coarsest level, `Node` the finest. All coarseness
/// comparisons go through [`LocationScope::COARSEST_TO_FINEST`] so that
/// adding a level later cannot silently invert an ordering somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationScope {
    Node,
    Rack,
    Row,
    Cluster,
    DataCenter,
    Region,
}

impl LocationScope {
    /// Every scope level, ordered from coarsest to finest
    pub const COARSEST_TO_FINEST: [LocationScope; 6] = [
        LocationScope::Region,
        LocationScope::DataCenter,
        LocationScope::Cluster,
        LocationScope::Row,
        LocationScope::Rack,
        LocationScope::Node,
    ];

    /// Position in the coarsest-to-finest ordering (0 = coarsest)
    fn granularity(self) -> usize {
        Self::COARSEST_TO_FINEST
            .iter()
            .position(|s| *s == self)
            .unwrap_or(Self::COARSEST_TO_FINEST.len())
    }

    /// Returns true if `self` is at the same level as `other` or coarser
    pub fn is_at_least_as_coarse_as(self, other: LocationScope) -> bool {
        self.granularity() <= other.granularity()
    }
}

/// Static configuration of one node, as of fetch time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub node_index: u32,
    pub name: String,
    pub data_address: SocketAddress,

    /// Location label per scope level (e.g. `Rack -> "rk12"`).
    /// Levels the operator never configured are simply absent.
    #[serde(default)]
    pub location_per_scope: HashMap<LocationScope, String>,

    /// Remaining configuration fields, passed through untouched
    #[serde(default)]
    pub other_settings: serde_json::Map<String, serde_json::Value>,
}

impl NodeConfig {
    /// Identity of the node this configuration describes
    pub fn node_id(&self) -> NodeId {
        NodeId {
            node_index: self.node_index,
            name: self.name.clone(),
            address: self.data_address.clone(),
        }
    }
}

/// Lifecycle state of a node's daemon process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DaemonState {
    #[default]
    Unknown,
    Starting,
    Alive,
    ShuttingDown,
    Dead,
}

/// Runtime state of one node, as of fetch time
///
/// Keyed by `node_index`; joining against a [`NodeConfig`] list must go
/// through that index, never through positional correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub node_index: u32,
    pub daemon_state: DaemonState,
    pub uptime_secs: Option<u64>,
}

/// One active maintenance applied to a set of nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub group_id: String,
    pub affected_node_indexes: Vec<u32>,
    pub reason: String,
    pub user: String,
    pub created_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// The failure-domain granularity the cluster is configured to tolerate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TolerableFailureDomains {
    pub domain: LocationScope,
    pub count: u32,
}

/// Replication policy of the cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationInfo {
    pub version: u64,
    pub tolerable_failure_domains: TolerableFailureDomains,
    pub smallest_replication_factor: u32,
}

/// Narrows a node-config query to one node by index or name
///
/// The default filter matches every node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodesFilter {
    pub node_index: Option<u32>,
    pub name: Option<String>,
}

impl NodesFilter {
    /// Filter matching the node with the given index
    pub fn by_index(node_index: u32) -> Self {
        Self {
            node_index: Some(node_index),
            name: None,
        }
    }

    /// Filter matching the node with the given name
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            node_index: None,
            name: Some(name.into()),
        }
    }

    /// Returns true if the node configuration satisfies this filter
    pub fn matches(&self, config: &NodeConfig) -> bool {
        if let Some(index) = self.node_index {
            if config.node_index != index {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if &config.name != name {
                return false;
            }
        }
        true
    }
}
