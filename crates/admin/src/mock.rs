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

//! In-memory admin API for tests
//!
//! `StaticAdminClient` serves preloaded responses and applies node
//! filters the way a real control plane would. Each query can also be
//! primed with an error to exercise failure paths.

use crate::client::AdminApi;
use crate::error::{AdminError, Result};
use crate::types::{MaintenanceRecord, NodeConfig, NodeState, NodesFilter, ReplicationInfo};

/// Admin API implementation backed by static in-memory data
#[derive(Debug, Clone)]
pub struct StaticAdminClient {
    node_configs: Result<Vec<NodeConfig>>,
    node_states: Result<Vec<NodeState>>,
    maintenances: Result<Vec<MaintenanceRecord>>,
    replication_info: Result<ReplicationInfo>,
}

impl Default for StaticAdminClient {
    fn default() -> Self {
        Self {
            node_configs: Ok(Vec::new()),
            node_states: Ok(Vec::new()),
            maintenances: Ok(Vec::new()),
            replication_info: Err(AdminError::Remote(
                "no replication info loaded into mock".to_string(),
            )),
        }
    }
}

impl StaticAdminClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node_configs(mut self, configs: Vec<NodeConfig>) -> Self {
        self.node_configs = Ok(configs);
        self
    }

    pub fn with_node_configs_error(mut self, err: AdminError) -> Self {
        self.node_configs = Err(err);
        self
    }

    pub fn with_node_states(mut self, states: Vec<NodeState>) -> Self {
        self.node_states = Ok(states);
        self
    }

    pub fn with_node_states_error(mut self, err: AdminError) -> Self {
        self.node_states = Err(err);
        self
    }

    pub fn with_maintenances(mut self, maintenances: Vec<MaintenanceRecord>) -> Self {
        self.maintenances = Ok(maintenances);
        self
    }

    pub fn with_maintenances_error(mut self, err: AdminError) -> Self {
        self.maintenances = Err(err);
        self
    }

    pub fn with_replication_info(mut self, info: ReplicationInfo) -> Self {
        self.replication_info = Ok(info);
        self
    }

    pub fn with_replication_info_error(mut self, err: AdminError) -> Self {
        self.replication_info = Err(err);
        self
    }
}

#[async_trait::async_trait]
impl AdminApi for StaticAdminClient {
    async fn fetch_node_configs(&self, filter: Option<NodesFilter>) -> Result<Vec<NodeConfig>> {
        let configs = self.node_configs.clone()?;
        match filter {
            None => Ok(configs),
            Some(filter) => Ok(configs.into_iter().filter(|nc| filter.matches(nc)).collect()),
        }
    }

    async fn fetch_node_states(&self) -> Result<Vec<NodeState>> {
        self.node_states.clone()
    }

    async fn fetch_maintenances(&self) -> Result<Vec<MaintenanceRecord>> {
        self.maintenances.clone()
    }

    async fn fetch_replication_info(&self) -> Result<ReplicationInfo> {
        self.replication_info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SocketAddress;

    fn config(index: u32, name: &str) -> NodeConfig {
        NodeConfig {
            node_index: index,
            name: name.to_string(),
            data_address: SocketAddress::from_host_port(format!("10.0.0.{index}"), 4440),
            location_per_scope: hashbrown::HashMap::new(),
            other_settings: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_applies_node_filter() {
        let client = StaticAdminClient::new()
            .with_node_configs(vec![config(0, "storage-0"), config(1, "storage-1")]);

        let all = client.fetch_node_configs(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let by_index = client
            .fetch_node_configs(Some(NodesFilter::by_index(1)))
            .await
            .unwrap();
        assert_eq!(by_index.len(), 1);
        assert_eq!(by_index[0].name, "storage-1");

        let by_name = client
            .fetch_node_configs(Some(NodesFilter::by_name("storage-0")))
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].node_index, 0);

        let miss = client
            .fetch_node_configs(Some(NodesFilter::by_name("storage-9")))
            .await
            .unwrap();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn test_mock_primed_error() {
        let client = StaticAdminClient::new()
            .with_maintenances_error(AdminError::NotSupported("maintenances".into()));

        let err = client.fetch_maintenances().await.unwrap_err();
        assert!(err.is_not_supported());
    }
}
