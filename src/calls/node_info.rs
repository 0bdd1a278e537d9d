//! Whole-node resource query.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::calls::HypervisorKind;
use crate::errors::{Result, RpcError};
use crate::protocol::{Node, RpcCall, TimeoutBucket};

/// Capacity of one volume group on the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeGroupInfo {
    pub name: String,
    /// Total size in MiB.
    pub size: u64,
    /// Free space in MiB.
    pub free: u64,
}

/// Node-level resources as one hypervisor reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypervisorNodeInfo {
    pub memory_total: u64,
    pub memory_free: u64,
    pub cpu_total: u32,
}

/// Decoded result of a [`NodeInfo`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfoResult {
    /// Boot identifier; changes when the node reboots.
    pub boot_id: String,
    /// One entry per requested volume group, in request order.
    pub volume_groups: Vec<VolumeGroupInfo>,
    /// One entry per requested hypervisor, in request order.
    pub hypervisors: Vec<HypervisorNodeInfo>,
}

/// Queries a node's boot id, storage capacity, and hypervisor resources.
///
/// The daemon answers with a triple: boot id, volume-group info list,
/// per-hypervisor info list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub volume_groups: Vec<String>,
    pub hypervisors: Vec<HypervisorKind>,
}

impl RpcCall for NodeInfo {
    type Output = NodeInfoResult;

    fn name(&self) -> &'static str {
        "node_info"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Urgent
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        Ok(json!([self.volume_groups, self.hypervisors]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        let (boot_id, volume_groups, hypervisors): (
            String,
            Vec<VolumeGroupInfo>,
            Vec<HypervisorNodeInfo>,
        ) = serde_json::from_value(payload)
            .map_err(|e| RpcError::Decode(format!("bad node info: {e}")))?;

        Ok(NodeInfoResult {
            boot_id,
            volume_groups,
            hypervisors,
        })
    }
}
