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

//! Cluster view aggregation
//!
//! Fans out the three control-plane queries concurrently and fans back
//! in to a single [`ClusterView`]. The maintenance query is the one
//! query allowed to degrade: control planes without the maintenance
//! subsystem answer `NotSupported`, which becomes an empty list.

use gridops_admin::{AdminApi, MaintenanceRecord, NodeConfig, NodeState, Result};
use serde::Serialize;
use tracing::debug;

/// Aggregate snapshot of cluster topology and health
///
/// The three fields come from independent queries and may reflect
/// different wall-clock instants of cluster state. Correlating config
/// and state must go through the node index (see [`ClusterView::state_for`]),
/// never through list positions.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterView {
    pub nodes_config: Vec<NodeConfig>,
    pub nodes_state: Vec<NodeState>,
    pub maintenances: Vec<MaintenanceRecord>,
}

impl ClusterView {
    /// Runtime state for the node with the given index, if reported
    pub fn state_for(&self, node_index: u32) -> Option<&NodeState> {
        self.nodes_state.iter().find(|ns| ns.node_index == node_index)
    }

    /// Maintenances touching the node with the given index
    pub fn maintenances_for(&self, node_index: u32) -> Vec<&MaintenanceRecord> {
        self.maintenances
            .iter()
            .filter(|m| m.affected_node_indexes.contains(&node_index))
            .collect()
    }
}

/// Build a [`ClusterView`] from three concurrent control-plane queries
///
/// Node-config and node-state failures are hard: the first error is
/// propagated and no partial view is returned. A maintenance failure is
/// hard too, with one exception: `NotSupported` substitutes an empty
/// maintenance list and the call succeeds.
pub async fn build_cluster_view<C>(client: &C) -> Result<ClusterView>
where
    C: AdminApi + ?Sized,
{
    // The required pair runs under try_join so the first hard failure
    // cancels its sibling. The maintenance query runs alongside and its
    // outcome is inspected explicitly rather than short-circuited.
    let required = async {
        tokio::try_join!(client.fetch_node_configs(None), client.fetch_node_states())
    };
    let (required, maintenances) = tokio::join!(required, client.fetch_maintenances());

    let maintenances = match maintenances {
        Ok(maintenances) => maintenances,
        Err(err) if err.is_not_supported() => {
            debug!(error = %err, "Maintenance subsystem unavailable, substituting empty list");
            Vec::new()
        }
        Err(err) => return Err(err),
    };

    let (nodes_config, nodes_state) = required?;

    debug!(
        nodes_config = nodes_config.len(),
        nodes_state = nodes_state.len(),
        maintenances = maintenances.len(),
        "Cluster view assembled"
    );

    Ok(ClusterView {
        nodes_config,
        nodes_state,
        maintenances,
    })
}
