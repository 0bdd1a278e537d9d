use thiserror::Error;

/// Failure kinds produced anywhere in the RPC pipeline.
///
/// The set is closed: every outcome a caller can see is one of these five
/// kinds, and each carries enough context (node identity, raw code/message)
/// to act on without unwrapping nested causes.
///
/// # Caller guidance
///
/// - [`TransportDisabled`](RpcError::TransportDisabled): the process was built
///   without the transport capability. Fatal; treat as a startup-time
///   configuration failure, not a per-call condition.
/// - [`OfflineNode`](RpcError::OfflineNode): the target was excluded by policy
///   before any network I/O. Known-unreachable, not a fault.
/// - [`Transport`](RpcError::Transport): network/TLS/HTTP failure. Retryable,
///   node-scoped.
/// - [`Decode`](RpcError::Decode): malformed or unexpected payload shape.
///   Treat as a protocol/version mismatch bug.
/// - [`Protocol`](RpcError::Protocol): the server explicitly reported failure.
///   Business-logic error, not retryable by default.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("RPC transport is not available in this build")]
    TransportDisabled,

    #[error("node {node} is marked offline")]
    OfflineNode { node: String },

    /// `code` is the HTTP status, or 0 when the failure happened before a
    /// status line existed (connect refusal, TLS failure, deadline expiry).
    #[error("transport error talking to {node} (status {code}): {message}")]
    Transport {
        node: String,
        code: u16,
        message: String,
    },

    #[error("failed to decode RPC response: {0}")]
    Decode(String),

    #[error("remote node reported failure: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, RpcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_includes_node_and_code() {
        let err = RpcError::Transport {
            node: "node1.example.com".to_string(),
            code: 503,
            message: "Service Unavailable".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("node1.example.com"));
        assert!(rendered.contains("503"));
    }

    #[test]
    fn test_offline_error_display() {
        let err = RpcError::OfflineNode {
            node: "node2".to_string(),
        };
        assert_eq!(err.to_string(), "node node2 is marked offline");
    }

    #[test]
    fn test_protocol_error_carries_server_message() {
        let err = RpcError::Protocol("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
