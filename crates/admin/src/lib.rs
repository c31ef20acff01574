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

//! # GridOps Admin API
//!
//! Interface boundary to a storage cluster's control-plane service:
//! the value types it returns, the error taxonomy it surfaces and the
//! [`AdminApi`] client trait that transports implement.
//!
//! This crate carries no transport of its own. The `mock` feature
//! provides [`mock::StaticAdminClient`], an in-memory implementation
//! used by the topology crate's tests.

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod types;

pub use client::AdminApi;
pub use error::{AdminError, Result};
pub use types::{
    DaemonState, LocationScope, MaintenanceRecord, NodeConfig, NodeId, NodeState, NodesFilter,
    ReplicationInfo, SocketAddress, TolerableFailureDomains,
};
