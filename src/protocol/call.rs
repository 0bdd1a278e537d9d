use serde_json::Value;

use crate::errors::Result;
use crate::protocol::node::Node;
use crate::protocol::timeouts::TimeoutBucket;

/// Contract every remote operation implements.
///
/// A call value is an immutable description of one operation: it knows its
/// own wire name (used verbatim as the URL path segment), its timeout bucket,
/// how to serialize its arguments, whether offline nodes are acceptable
/// targets, and how to decode a successful response.
///
/// The associated [`Output`](RpcCall::Output) type is the other half of the
/// contract: each call type is bound to exactly one result type at its
/// definition site, so invoking call A's decoder on behalf of call B is a
/// type error, not a runtime check.
///
/// # Example
///
/// ```
/// use noded_rpc::calls::Version;
/// use noded_rpc::{Node, RpcCall, TimeoutBucket};
///
/// let call = Version;
/// let node = Node::new("node1", "192.0.2.10");
/// assert_eq!(call.name(), "version");
/// assert_eq!(call.timeout(), TimeoutBucket::Urgent);
/// assert!(call.accepts_offline());
/// assert_eq!(call.payload(&node).unwrap(), "[]");
/// ```
pub trait RpcCall: Send + Sync {
    /// The one result type a successful response decodes into.
    type Output;

    /// Stable operation identifier; used verbatim as the URL path segment.
    ///
    /// Must not vary with the target node.
    fn name(&self) -> &'static str;

    /// Timeout bucket bounding each request made for this call.
    fn timeout(&self) -> TimeoutBucket;

    /// Whether offline nodes are acceptable targets.
    ///
    /// When false (the default), an offline target is rejected with
    /// [`RpcError::OfflineNode`](crate::RpcError::OfflineNode) before any
    /// transport attempt.
    fn accepts_offline(&self) -> bool {
        false
    }

    /// Serializes the wire body for a request against `node`.
    ///
    /// Pure function of (node, call value); most calls ignore the node, which
    /// is only used for addressing.
    fn payload(&self, node: &Node) -> Result<String>;

    /// Decodes the success-envelope payload into the typed result.
    ///
    /// The single place operation-specific response shape knowledge lives.
    /// A structural mismatch yields
    /// [`RpcError::Decode`](crate::RpcError::Decode), never a panic, and a
    /// result is either fully decoded or absent; partial decoding never
    /// escapes.
    fn decode(&self, payload: Value) -> Result<Self::Output>;
}
