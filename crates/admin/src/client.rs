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

//! Async client trait over the control-plane admin API
//!
//! Implementations own the transport: connection handling, timeouts and
//! retries all live behind this seam. Callers treat the handle as a
//! read-only, shareable collaborator.

use crate::error::Result;
use crate::types::{MaintenanceRecord, NodeConfig, NodeState, NodesFilter, ReplicationInfo};

/// Query surface of the cluster's control-plane service
#[async_trait::async_trait]
pub trait AdminApi: Send + Sync {
    /// Fetch node configurations, optionally narrowed by index or name.
    /// An unfiltered call returns every node in the cluster.
    async fn fetch_node_configs(&self, filter: Option<NodesFilter>) -> Result<Vec<NodeConfig>>;

    /// Fetch the runtime state of every node, keyed by node index
    async fn fetch_node_states(&self) -> Result<Vec<NodeState>>;

    /// Fetch active maintenances.
    ///
    /// Control planes predating the maintenance subsystem answer with
    /// [`AdminError::NotSupported`](crate::AdminError::NotSupported),
    /// which callers may treat as an empty list.
    async fn fetch_maintenances(&self) -> Result<Vec<MaintenanceRecord>>;

    /// Fetch the cluster's replication and fault-tolerance policy
    async fn fetch_replication_info(&self) -> Result<ReplicationInfo>;
}
