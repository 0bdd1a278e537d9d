//! Request construction and the transport capability seam.
//!
//! Building a request and executing it are separate steps: `prepare_request`
//! applies the offline policy and produces an immutable [`RequestSpec`], and a
//! [`CallTransport`] implementation performs the actual HTTPS POST. The
//! executor is generic over the transport, so tests can drive the whole
//! pipeline without TLS material.

use std::future::Future;
use std::time::Duration;

use crate::constants::NODED_PORT;
use crate::errors::{Result, RpcError};
use crate::protocol::{Node, RpcCall};

mod https;

pub use https::{HttpsTransport, TlsCredentials};

/// One fully-built wire request.
///
/// Built fresh per (node, call) pair, never reused and never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    /// Full-request deadline derived from the call's timeout bucket.
    pub timeout: Duration,
    /// `https://<primary-ip>:<daemon-port>/<operation-name>`
    pub url: String,
    /// Serialized operation arguments.
    pub body: String,
}

/// Builds the wire request for `call` against `node`, or rejects the target.
///
/// An offline node is rejected with [`RpcError::OfflineNode`] before any
/// transport attempt unless the call explicitly opts in via
/// [`RpcCall::accepts_offline`].
pub fn prepare_request<C: RpcCall>(node: &Node, call: &C) -> Result<RequestSpec> {
    if node.offline && !call.accepts_offline() {
        return Err(RpcError::OfflineNode {
            node: node.name.clone(),
        });
    }

    Ok(RequestSpec {
        timeout: call.timeout().duration(),
        url: format!("https://{}:{}/{}", node.primary_ip, NODED_PORT, call.name()),
        body: call.payload(node)?,
    })
}

/// Capability to execute one prepared request against one node.
///
/// Implementations perform an HTTPS POST with the spec's deadline and return
/// the raw response body as text; any non-success transport status becomes
/// [`RpcError::Transport`]. Connection resources are per-attempt, not pooled
/// across calls.
pub trait CallTransport: Send + Sync {
    fn post(&self, node: &Node, spec: &RequestSpec) -> impl Future<Output = Result<String>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calls::{HypervisorKind, InstanceList, Version};
    use crate::protocol::TimeoutBucket;

    #[test]
    fn test_prepare_request_builds_url_from_ip_port_and_name() {
        let node = Node::new("node1.example.com", "192.0.2.10");
        let spec = prepare_request(&node, &Version).unwrap();
        assert_eq!(spec.url, "https://192.0.2.10:1811/version");
        assert_eq!(spec.body, "[]");
    }

    #[test]
    fn test_prepare_request_timeout_comes_from_bucket() {
        let node = Node::new("node1", "192.0.2.10");
        let spec = prepare_request(&node, &Version).unwrap();
        assert_eq!(spec.timeout, TimeoutBucket::Urgent.duration());
    }

    #[test]
    fn test_offline_node_rejected_before_transport() {
        let node = Node::offline("node2", "192.0.2.11");
        let call = InstanceList {
            hypervisors: vec![HypervisorKind::Kvm],
        };
        match prepare_request(&node, &call) {
            Err(RpcError::OfflineNode { node }) => assert_eq!(node, "node2"),
            other => panic!("expected offline rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_version_call_accepts_offline_node() {
        // Version is the reachability probe, so it must still build a
        // request for an offline-suspected node.
        let node = Node::offline("node2", "192.0.2.11");
        let spec = prepare_request(&node, &Version).unwrap();
        assert_eq!(spec.url, "https://192.0.2.11:1811/version");
    }
}
