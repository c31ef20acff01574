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

//! Node identity lookups against a freshly fetched node set
//!
//! The control plane guarantees node index and node name are each
//! unique cluster-wide. Lookups trust that guarantee and take the first
//! match; they do not re-validate it.

use gridops_admin::{AdminApi, AdminError, NodeConfig, NodeId, NodeState, NodesFilter, Result};
use hashbrown::HashMap;
use tracing::warn;

/// All node identities known to the control plane, sorted by index
pub async fn get_nodes<C>(client: &C) -> Result<Vec<NodeId>>
where
    C: AdminApi + ?Sized,
{
    let configs = client.fetch_node_configs(None).await?;
    let mut nodes: Vec<NodeId> = configs.iter().map(NodeConfig::node_id).collect();
    nodes.sort_by_key(|node| node.node_index);
    Ok(nodes)
}

/// Identity of the node with the given index
///
/// Fails with [`AdminError::NodeNotFound`] when the control plane
/// reports no such node.
pub async fn get_node_by_index<C>(client: &C, node_index: u32) -> Result<NodeId>
where
    C: AdminApi + ?Sized,
{
    let configs = client
        .fetch_node_configs(Some(NodesFilter::by_index(node_index)))
        .await?;
    configs
        .first()
        .map(NodeConfig::node_id)
        .ok_or_else(|| AdminError::NodeNotFound(format!("node_index=`{node_index}'")))
}

/// Identity of the node with the given name
///
/// Fails with [`AdminError::NodeNotFound`] when the control plane
/// reports no such node.
pub async fn get_node_by_name<C>(client: &C, name: &str) -> Result<NodeId>
where
    C: AdminApi + ?Sized,
{
    let configs = client
        .fetch_node_configs(Some(NodesFilter::by_name(name)))
        .await?;
    configs
        .first()
        .map(NodeConfig::node_id)
        .ok_or_else(|| AdminError::NodeNotFound(format!("name=`{name}'")))
}

/// Full configuration per node identity
pub async fn get_nodes_config<C>(client: &C) -> Result<HashMap<NodeId, NodeConfig>>
where
    C: AdminApi + ?Sized,
{
    let configs = client.fetch_node_configs(None).await?;
    Ok(configs.into_iter().map(|nc| (nc.node_id(), nc)).collect())
}

/// Runtime state per node identity
///
/// Issues the config and state queries concurrently and joins them on
/// node index. A state whose index has no matching config (the two
/// queries are not atomic) is dropped with a warning.
pub async fn get_nodes_state<C>(client: &C) -> Result<HashMap<NodeId, NodeState>>
where
    C: AdminApi + ?Sized,
{
    let (configs, states) =
        tokio::try_join!(client.fetch_node_configs(None), client.fetch_node_states())?;

    let index_to_node: HashMap<u32, NodeId> = configs
        .iter()
        .map(|nc| (nc.node_index, nc.node_id()))
        .collect();

    let mut by_node = HashMap::with_capacity(states.len());
    for state in states {
        match index_to_node.get(&state.node_index) {
            Some(node) => {
                by_node.insert(node.clone(), state);
            }
            None => {
                warn!(
                    node_index = state.node_index,
                    "State reported for a node absent from the config snapshot, dropping"
                );
            }
        }
    }
    Ok(by_node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridops_admin::mock::StaticAdminClient;
    use gridops_admin::{DaemonState, SocketAddress};

    fn config(index: u32, name: &str) -> NodeConfig {
        NodeConfig {
            node_index: index,
            name: name.to_string(),
            data_address: SocketAddress::from_host_port(format!("10.0.0.{index}"), 4440),
            location_per_scope: hashbrown::HashMap::new(),
            other_settings: serde_json::Map::new(),
        }
    }

    fn state(index: u32, daemon_state: DaemonState) -> NodeState {
        NodeState {
            node_index: index,
            daemon_state,
            uptime_secs: None,
        }
    }

    fn client() -> StaticAdminClient {
        StaticAdminClient::new().with_node_configs(vec![
            config(2, "storage-2"),
            config(0, "storage-0"),
            config(1, "storage-1"),
        ])
    }

    #[tokio::test]
    async fn test_get_nodes_sorted_by_index() {
        let nodes = get_nodes(&client()).await.unwrap();
        let indexes: Vec<u32> = nodes.iter().map(|n| n.node_index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_lookup_by_index() {
        let node = get_node_by_index(&client(), 1).await.unwrap();
        assert_eq!(node.name, "storage-1");

        let err = get_node_by_index(&client(), 9).await.unwrap_err();
        assert_eq!(err, AdminError::NodeNotFound("node_index=`9'".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_by_name() {
        let node = get_node_by_name(&client(), "storage-2").await.unwrap();
        assert_eq!(node.node_index, 2);

        let err = get_node_by_name(&client(), "storage-9").await.unwrap_err();
        assert_eq!(err, AdminError::NodeNotFound("name=`storage-9'".to_string()));
    }

    #[tokio::test]
    async fn test_nodes_config_keyed_by_identity() {
        let by_node = get_nodes_config(&client()).await.unwrap();
        assert_eq!(by_node.len(), 3);

        let node = get_node_by_index(&client(), 0).await.unwrap();
        assert_eq!(by_node.get(&node).unwrap().name, "storage-0");
    }

    #[tokio::test]
    async fn test_nodes_state_joined_on_index() {
        let client = client().with_node_states(vec![
            state(1, DaemonState::Alive),
            state(0, DaemonState::Starting),
        ]);

        let by_node = get_nodes_state(&client).await.unwrap();
        assert_eq!(by_node.len(), 2);

        let node0 = get_node_by_index(&client, 0).await.unwrap();
        assert_eq!(by_node.get(&node0).unwrap().daemon_state, DaemonState::Starting);
    }

    #[tokio::test]
    async fn test_nodes_state_drops_unmatched_indexes() {
        let client = client().with_node_states(vec![
            state(0, DaemonState::Alive),
            state(42, DaemonState::Dead),
        ]);

        let by_node = get_nodes_state(&client).await.unwrap();
        assert_eq!(by_node.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_from_lookup() {
        let client = StaticAdminClient::new()
            .with_node_configs_error(AdminError::Transport("connection refused".into()));

        let err = get_node_by_index(&client, 0).await.unwrap_err();
        assert_eq!(err, AdminError::Transport("connection refused".into()));
    }
}
