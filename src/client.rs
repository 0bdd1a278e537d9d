//! The concurrent multi-node executor.

use futures::future;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::protocol::{decode_response, Node, RpcCall};
use crate::transport::{prepare_request, CallTransport, HttpsTransport, TlsCredentials};

/// The outcome of one call against one node.
///
/// One of these is produced per input node, in input order, whether the
/// pipeline succeeded or failed.
#[derive(Debug)]
pub struct NodeOutcome<R> {
    pub node: Node,
    pub result: Result<R>,
}

/// RPC client: drives the build → transport → decode pipeline for a call
/// against one or many nodes.
///
/// Generic over the transport capability so the pipeline can be exercised
/// without network access; production use is
/// [`RpcClient::with_credentials`], which wires in the mutual-TLS
/// [`HttpsTransport`].
///
/// # Example
///
/// ```no_run
/// use noded_rpc::calls::Version;
/// use noded_rpc::{Node, RpcClient, TlsCredentials};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = TlsCredentials::from_pem(std::fs::read("noded.pem")?);
/// let client = RpcClient::with_credentials(&credentials)?;
///
/// let nodes = vec![
///     Node::new("node1.example.com", "192.0.2.10"),
///     Node::new("node2.example.com", "192.0.2.11"),
/// ];
/// for outcome in client.call_many(&nodes, &Version).await {
///     match outcome.result {
///         Ok(version) => println!("{}: protocol version {version}", outcome.node.name),
///         Err(e) => eprintln!("{}: {e}", outcome.node.name),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct RpcClient<T> {
    transport: T,
}

impl RpcClient<HttpsTransport> {
    /// Creates a client backed by the mutual-TLS HTTPS transport.
    pub fn with_credentials(credentials: &TlsCredentials) -> Result<Self> {
        Ok(Self::new(HttpsTransport::new(credentials)?))
    }
}

impl<T: CallTransport> RpcClient<T> {
    /// Creates a client over an arbitrary transport capability.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Executes `call` against every node in `nodes` concurrently.
    ///
    /// Each node runs its own independent build → transport → decode
    /// pipeline; pipelines share only the immutable call value and the
    /// transport handle, so no locking is involved and one node's failure
    /// never aborts or delays any other node's outcome.
    ///
    /// The returned vector always has the same length and node order as the
    /// input, regardless of completion order or how many individual calls
    /// failed. The batch resolves when the slowest node does; there is no
    /// cross-node cancellation.
    pub async fn call_many<C: RpcCall>(&self, nodes: &[Node], call: &C) -> Vec<NodeOutcome<C::Output>> {
        debug!(call = call.name(), nodes = nodes.len(), "starting RPC fan-out");

        let pipelines = nodes.iter().map(|node| async move {
            let result = self.call_node(node, call).await;
            if let Err(e) = &result {
                warn!(node = %node.name, call = call.name(), error = %e, "RPC failed");
            }
            NodeOutcome {
                node: node.clone(),
                result,
            }
        });

        // join_all yields results in the order the futures were given, so
        // input order is preserved independent of completion order.
        future::join_all(pipelines).await
    }

    /// Executes `call` against a single node (a degenerate fan-out).
    pub async fn call_one<C: RpcCall>(&self, node: &Node, call: &C) -> NodeOutcome<C::Output> {
        let result = self.call_node(node, call).await;
        NodeOutcome {
            node: node.clone(),
            result,
        }
    }

    /// One node's pipeline: build, execute, decode. Strictly sequential.
    async fn call_node<C: RpcCall>(&self, node: &Node, call: &C) -> Result<C::Output> {
        let spec = prepare_request(node, call)?;
        let raw = self.transport.post(node, &spec).await?;
        decode_response(call, &raw)
    }
}
