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

//! # GridOps Topology
//!
//! Queryable view of a storage cluster's topology and health, built
//! client-side over the control-plane admin API.
//!
//! ## Features
//!
//! - **Cluster view aggregation**: concurrent fan-out of the config,
//!   state and maintenance queries into one [`ClusterView`] snapshot,
//!   degrading gracefully when the control plane predates the
//!   maintenance subsystem
//! - **Failure-domain grouping**: partitions nodes into groups sharing
//!   a location prefix at the cluster's fault-tolerance scope
//! - **Node lookup**: identity resolution by node index or name
//!
//! All returned values are immutable snapshots. Nothing here caches,
//! retries or holds locks; the admin client owns transport policy.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gridops_admin::mock::StaticAdminClient;
//! use gridops_topology::{build_cluster_view, group_nodes_by_failure_domain};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = StaticAdminClient::new();
//!
//!     let view = build_cluster_view(&client).await?;
//!     println!("{} nodes, {} maintenances", view.nodes_config.len(), view.maintenances.len());
//!
//!     let groups = group_nodes_by_failure_domain(&client, Some(view.nodes_config), None).await?;
//!     println!("{} failure domains", groups.len());
//!
//!     Ok(())
//! }
//! ```

pub mod cluster;
pub mod failure_domain;
pub mod registry;
pub mod view;

pub use cluster::{Cluster, DEFAULT_ADMIN_PORT};
pub use failure_domain::{FailureDomainGroup, group_nodes_by_failure_domain};
pub use registry::{get_node_by_index, get_node_by_name, get_nodes, get_nodes_config, get_nodes_state};
pub use view::{ClusterView, build_cluster_view};
