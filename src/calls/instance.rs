//! Instance query operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calls::HypervisorKind;
use crate::errors::{Result, RpcError};
use crate::protocol::{Node, RpcCall, TimeoutBucket};

/// Runtime state of one instance as the hypervisor reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceState {
    /// Hypervisor-specific run state (e.g. "running", "paused").
    pub state: String,
    /// Memory in MiB.
    pub memory: u64,
    pub vcpus: u32,
    /// Uptime in seconds.
    pub time: f64,
}

/// Queries one instance's state under one hypervisor.
///
/// The daemon answers with an empty object when the instance is not present
/// on that node; that decodes to `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceInfo {
    pub instance: String,
    pub hypervisor: HypervisorKind,
}

impl RpcCall for InstanceInfo {
    type Output = Option<InstanceState>;

    fn name(&self) -> &'static str {
        "instance_info"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Urgent
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        Ok(json!([self.instance, self.hypervisor]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        if payload.as_object().is_some_and(|fields| fields.is_empty()) {
            return Ok(None);
        }
        serde_json::from_value(payload)
            .map(Some)
            .map_err(|e| RpcError::Decode(format!("bad instance info: {e}")))
    }
}

/// Queries the state of every instance running under the given hypervisors.
///
/// Decoding is all-or-nothing: one malformed entry fails the whole call with
/// a decode error rather than returning a partial map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllInstancesInfo {
    pub hypervisors: Vec<HypervisorKind>,
}

impl RpcCall for AllInstancesInfo {
    type Output = BTreeMap<String, InstanceState>;

    fn name(&self) -> &'static str {
        "all_instances_info"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Urgent
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        Ok(json!([self.hypervisors]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        serde_json::from_value(payload)
            .map_err(|e| RpcError::Decode(format!("bad instance map: {e}")))
    }
}

/// Lists the names of instances running under the given hypervisors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceList {
    pub hypervisors: Vec<HypervisorKind>,
}

impl RpcCall for InstanceList {
    type Output = Vec<String>;

    fn name(&self) -> &'static str {
        "instance_list"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Urgent
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        Ok(json!([self.hypervisors]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        serde_json::from_value(payload)
            .map_err(|e| RpcError::Decode(format!("bad instance list: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> Value {
        json!({"state": "running", "memory": 2048, "vcpus": 2, "time": 1234.5})
    }

    #[test]
    fn test_name_is_stable_across_nodes() {
        let call = InstanceInfo {
            instance: "web1".to_string(),
            hypervisor: HypervisorKind::Kvm,
        };
        let a = Node::new("node1", "192.0.2.10");
        let b = Node::new("node2", "192.0.2.11");
        assert_eq!(call.name(), "instance_info");
        // Payload may vary with the call value; the name may not.
        assert_eq!(call.payload(&a).unwrap(), call.payload(&b).unwrap());
    }

    #[test]
    fn test_instance_info_payload_encoding() {
        let call = InstanceInfo {
            instance: "web1".to_string(),
            hypervisor: HypervisorKind::XenPvm,
        };
        let node = Node::new("node1", "192.0.2.10");
        assert_eq!(call.payload(&node).unwrap(), r#"["web1","xen-pvm"]"#);
    }

    #[test]
    fn test_instance_info_decodes_state() {
        let call = InstanceInfo {
            instance: "web1".to_string(),
            hypervisor: HypervisorKind::Kvm,
        };
        let info = call.decode(sample_state()).unwrap().unwrap();
        assert_eq!(info.state, "running");
        assert_eq!(info.memory, 2048);
        assert_eq!(info.vcpus, 2);
    }

    #[test]
    fn test_instance_absent_is_none_not_error() {
        let call = InstanceInfo {
            instance: "web1".to_string(),
            hypervisor: HypervisorKind::Kvm,
        };
        assert_eq!(call.decode(json!({})).unwrap(), None);
    }

    #[test]
    fn test_instance_info_malformed_is_decode_error() {
        let call = InstanceInfo {
            instance: "web1".to_string(),
            hypervisor: HypervisorKind::Kvm,
        };
        let result = call.decode(json!({"state": "running", "memory": "lots"}));
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_all_instances_info_decodes_map() {
        let call = AllInstancesInfo {
            hypervisors: vec![HypervisorKind::Kvm],
        };
        let map = call
            .decode(json!({"web1": sample_state(), "db1": sample_state()}))
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["db1"].memory, 2048);
    }

    #[test]
    fn test_all_instances_info_one_corrupt_entry_fails_whole_call() {
        let call = AllInstancesInfo {
            hypervisors: vec![HypervisorKind::Kvm],
        };
        // i1 is valid, i2 is not; the valid data must be discarded too.
        let result = call.decode(json!({
            "i1": sample_state(),
            "i2": {"state": 42},
        }));
        assert!(matches!(result, Err(RpcError::Decode(_))));
    }

    #[test]
    fn test_instance_list_decodes_names() {
        let call = InstanceList {
            hypervisors: vec![HypervisorKind::Kvm, HypervisorKind::Fake],
        };
        let node = Node::new("node1", "192.0.2.10");
        assert_eq!(call.payload(&node).unwrap(), r#"[["kvm","fake"]]"#);
        let names = call.decode(json!(["web1", "db1"])).unwrap();
        assert_eq!(names, vec!["web1", "db1"]);
    }
}
