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

//! Cluster handle for operator tooling

use gridops_admin::SocketAddress;
use serde::{Deserialize, Serialize};

/// Port the control plane's admin service listens on by default
pub const DEFAULT_ADMIN_PORT: u16 = 6440;

/// A named cluster and the admin endpoint used to reach it
///
/// Carries no connection state. Tooling resolves the admin address here
/// and hands the resulting transport to the query functions in this
/// crate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cluster {
    pub name: Option<String>,
    pub admin_server_addr: Option<SocketAddress>,
}

impl Cluster {
    pub fn new(name: Option<String>, admin_server_addr: Option<SocketAddress>) -> Self {
        Self {
            name,
            admin_server_addr,
        }
    }

    /// Cluster reachable at `hostname` on the default admin port
    pub fn from_hostname(hostname: impl Into<String>) -> Self {
        Self::from_host_port(hostname, DEFAULT_ADMIN_PORT)
    }

    /// Cluster reachable at an explicit host and port
    pub fn from_host_port(hostname: impl Into<String>, port: u16) -> Self {
        Self {
            name: None,
            admin_server_addr: Some(SocketAddress::from_host_port(hostname, port)),
        }
    }
}
