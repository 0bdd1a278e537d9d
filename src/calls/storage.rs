//! Storage unit enumeration.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::{Result, RpcError};
use crate::protocol::{Node, RpcCall, TimeoutBucket};

/// Kind of storage unit a node can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageType {
    #[serde(rename = "lvm-pv")]
    LvmPv,
    #[serde(rename = "lvm-vg")]
    LvmVg,
    #[serde(rename = "file")]
    File,
}

/// Field of a storage unit that can be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageField {
    Name,
    Size,
    Used,
    Free,
    Allocatable,
}

/// One decoded row: the requested fields paired with the returned values.
///
/// Cell values stay as raw JSON values since their type varies by field
/// (sizes are numbers, names are strings, allocatable is a bool).
pub type StorageRow = Vec<(StorageField, Value)>;

/// Enumerates storage units of one type on a node.
///
/// Field/value pairing in the result is purely positional: the daemon
/// returns each row as a bare value list in the same order the fields were
/// requested, and decoding zips the two by index. There is no keying, so a
/// daemon that reordered fields would silently mispair them; this fragility
/// is inherited from the wire protocol and preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageList {
    pub storage_type: StorageType,
    /// Type-specific arguments (e.g. the volume group name for `lvm-vg`).
    pub args: Vec<String>,
    /// Storage unit name to enumerate under.
    pub name: String,
    /// Fields to return, in the order rows will be paired.
    pub fields: Vec<StorageField>,
}

impl RpcCall for StorageList {
    type Output = Vec<StorageRow>;

    fn name(&self) -> &'static str {
        "storage_list"
    }

    fn timeout(&self) -> TimeoutBucket {
        TimeoutBucket::Normal
    }

    fn payload(&self, _node: &Node) -> Result<String> {
        Ok(json!([self.storage_type, self.args, self.name, self.fields]).to_string())
    }

    fn decode(&self, payload: Value) -> Result<Self::Output> {
        let rows: Vec<Vec<Value>> = serde_json::from_value(payload)
            .map_err(|e| RpcError::Decode(format!("bad storage row list: {e}")))?;

        rows.into_iter()
            .map(|row| {
                if row.len() != self.fields.len() {
                    return Err(RpcError::Decode(format!(
                        "storage row has {} values for {} requested fields",
                        row.len(),
                        self.fields.len()
                    )));
                }
                Ok(self.fields.iter().copied().zip(row).collect())
            })
            .collect()
    }
}
