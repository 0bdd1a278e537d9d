//! Core protocol types: the call/result contract, the response envelope,
//! timeout buckets, and node facts.

pub mod call;
pub mod envelope;
pub mod node;
pub mod timeouts;

pub use call::RpcCall;
pub use envelope::decode_response;
pub use node::Node;
pub use timeouts::TimeoutBucket;
