//! The closed catalog of remote operations.
//!
//! Each type here instantiates the [`RpcCall`](crate::protocol::RpcCall)
//! contract with its own payload shape, decoding rules, timeout bucket, and
//! offline policy:
//!
//! | Operation | Timeout | Offline OK |
//! |---|---|---|
//! | [`InstanceInfo`] | Urgent | no |
//! | [`AllInstancesInfo`] | Urgent | no |
//! | [`InstanceList`] | Urgent | no |
//! | [`NodeInfo`] | Urgent | no |
//! | [`Version`] | Urgent | yes |
//! | [`StorageList`] | Normal | no |
//!
//! Adding an operation means adding one type here; the contract, transport,
//! decoder, and executor never change for it.

use serde::{Deserialize, Serialize};

mod instance;
mod node_info;
mod storage;
mod version;

pub use instance::{AllInstancesInfo, InstanceInfo, InstanceList, InstanceState};
pub use node_info::{HypervisorNodeInfo, NodeInfo, NodeInfoResult, VolumeGroupInfo};
pub use storage::{StorageField, StorageList, StorageRow, StorageType};
pub use version::Version;

/// Hypervisor a node may run instances under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HypervisorKind {
    #[serde(rename = "kvm")]
    Kvm,
    #[serde(rename = "xen-pvm")]
    XenPvm,
    #[serde(rename = "xen-hvm")]
    XenHvm,
    #[serde(rename = "lxc")]
    Lxc,
    /// Testing hypervisor that fakes all operations.
    #[serde(rename = "fake")]
    Fake,
}

impl HypervisorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            HypervisorKind::Kvm => "kvm",
            HypervisorKind::XenPvm => "xen-pvm",
            HypervisorKind::XenHvm => "xen-hvm",
            HypervisorKind::Lxc => "lxc",
            HypervisorKind::Fake => "fake",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypervisor_wire_names() {
        assert_eq!(
            serde_json::to_string(&HypervisorKind::XenPvm).unwrap(),
            r#""xen-pvm""#
        );
        assert_eq!(serde_json::to_string(&HypervisorKind::Kvm).unwrap(), r#""kvm""#);
        assert_eq!(
            serde_json::from_str::<HypervisorKind>(r#""lxc""#).unwrap(),
            HypervisorKind::Lxc
        );
    }

    #[test]
    fn test_as_str_matches_serde_rename() {
        for kind in [
            HypervisorKind::Kvm,
            HypervisorKind::XenPvm,
            HypervisorKind::XenHvm,
            HypervisorKind::Lxc,
            HypervisorKind::Fake,
        ] {
            let wire = serde_json::to_string(&kind).unwrap();
            assert_eq!(wire, format!("\"{}\"", kind.as_str()));
        }
    }
}
