//! Typed RPC client for per-node agent daemons.
//!
//! This crate is the layer a cluster controller uses to talk to the agent
//! daemon running on every node: it issues typed remote calls over mutually
//! authenticated HTTPS, fans them out to many nodes concurrently, and returns
//! one classified outcome per node.
//!
//! # Architecture
//!
//! - **Protocol layer** ([`protocol`]): the [`RpcCall`] contract binding
//!   every call type to exactly one result type, the `{ok, payload}` response
//!   envelope, timeout buckets, and node facts.
//! - **Transport layer** ([`transport`]): request construction with the
//!   offline-node policy, and the HTTPS POST capability with per-request
//!   deadlines and a pinned client certificate.
//! - **Executor** ([`client`]): [`RpcClient::call_many`] runs one independent
//!   pipeline per node, concurrently, and preserves input order in the
//!   output. One node's failure never affects another's outcome.
//! - **Call catalog** ([`calls`]): the closed set of operations. This is not
//!   a general RPC framework; there is no dynamic dispatch or schema
//!   negotiation.
//!
//! # Example
//!
//! ```no_run
//! use noded_rpc::calls::{HypervisorKind, InstanceList};
//! use noded_rpc::{Node, RpcClient, RpcError, TlsCredentials};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = TlsCredentials::from_pem(std::fs::read("noded.pem")?);
//! let client = RpcClient::with_credentials(&credentials)?;
//!
//! let nodes = vec![
//!     Node::new("node1.example.com", "192.0.2.10"),
//!     Node::new("node2.example.com", "192.0.2.11"),
//! ];
//! let call = InstanceList {
//!     hypervisors: vec![HypervisorKind::Kvm],
//! };
//!
//! for outcome in client.call_many(&nodes, &call).await {
//!     match outcome.result {
//!         Ok(instances) => println!("{}: {instances:?}", outcome.node.name),
//!         Err(RpcError::OfflineNode { .. }) => {} // expected, skippable
//!         Err(e) => eprintln!("{}: {e}", outcome.node.name),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod calls;
pub mod client;
pub mod constants;
pub mod errors;
pub mod protocol;
pub mod transport;

pub use client::{NodeOutcome, RpcClient};
pub use errors::{Result, RpcError};
pub use protocol::{decode_response, Node, RpcCall, TimeoutBucket};
pub use transport::{prepare_request, CallTransport, HttpsTransport, RequestSpec, TlsCredentials};
