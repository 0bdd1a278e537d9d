/// Read-only facts about one cluster node, as supplied by the caller.
///
/// This subsystem never mutates a node. The offline flag reflects cluster
/// configuration ("known unreachable"), not a live probe; most calls refuse
/// offline targets before any network attempt (see
/// [`RpcCall::accepts_offline`](crate::protocol::RpcCall::accepts_offline)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Cluster-unique node name, used in diagnostics and outcomes.
    pub name: String,
    /// Address the agent daemon is reached at.
    pub primary_ip: String,
    /// Whether the cluster has marked this node offline.
    pub offline: bool,
}

impl Node {
    /// Creates an online node.
    pub fn new(name: impl Into<String>, primary_ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_ip: primary_ip.into(),
            offline: false,
        }
    }

    /// Creates a node marked offline in the cluster configuration.
    pub fn offline(name: impl Into<String>, primary_ip: impl Into<String>) -> Self {
        Self {
            offline: true,
            ..Self::new(name, primary_ip)
        }
    }
}
