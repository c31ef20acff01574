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

//! Control-plane error taxonomy

use thiserror::Error;

/// Errors surfaced by admin API calls
///
/// `NotSupported` is the only error with a defined non-fatal fallback:
/// older control planes answer the maintenance query with it, and
/// callers substitute an empty maintenance list. Everything else is
/// propagated unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// The control plane does not implement the queried subsystem
    #[error("feature not supported by control plane: {0}")]
    NotSupported(String),

    /// No node matches the requested index or name
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// Network-level failure while talking to the control plane
    #[error("transport failure: {0}")]
    Transport(String),

    /// The control plane accepted the request but reported a failure
    #[error("control plane request failed: {0}")]
    Remote(String),
}

impl AdminError {
    /// Returns true for the soft-failure case callers may degrade on
    #[inline]
    pub fn is_not_supported(&self) -> bool {
        matches!(self, AdminError::NotSupported(_))
    }
}

/// Result alias used throughout the admin API surface
pub type Result<T> = std::result::Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_supported_classification() {
        assert!(AdminError::NotSupported("maintenances".into()).is_not_supported());
        assert!(!AdminError::Transport("connection refused".into()).is_not_supported());
        assert!(!AdminError::NodeNotFound("node_index=9".into()).is_not_supported());
    }

    #[test]
    fn test_error_messages_identify_failed_query() {
        let err = AdminError::Transport("connection reset by peer".into());
        assert_eq!(err.to_string(), "transport failure: connection reset by peer");
    }
}
