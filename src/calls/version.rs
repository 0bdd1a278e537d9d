//! Protocol version probe.

use serde_json::{json, Value};

use crate::errors::{Result, RpcError};
use crate::protocol::{Node, RpcCall, TimeoutBucket};

/// Asks a node daemon for its protocol version.
///
/// This is the one call that accepts offline targets: it is how the
/// controller probes reachability and version of a node suspected dead, so
/// the offline flag must not short-circuit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version;

impl RpcCall for Version {
    type Output = u64;

    fn name(&self) -> &'static str {
        "version"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Urgent
    }

    fn accepts_offline(&self) -> bool {
        true
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        // No arguments.
        Ok(json!([]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        serde_json::from_value(payload)
            .map_err(|e| RpcError::Decode(format!("bad version number: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_probe_accepts_offline() {
        assert!(Version.accepts_offline());
    }

    #[test]
    fn test_empty_payload() {
        let node = Node::offline("node1", "192.0.2.10");
        assert_eq!(Version.payload(&node).unwrap(), "[]");
    }

    #[test]
    fn test_decodes_integer() {
        assert_eq!(Version.decode(json!(2070000)).unwrap(), 2070000);
    }

    #[test]
    fn test_non_integer_is_decode_error() {
        let result = Version.decode(json!("2.7"));
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }
}
