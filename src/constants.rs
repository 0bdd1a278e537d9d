//! Process-wide constants consumed by the request builder and transport.

use std::time::Duration;

/// TCP port the per-node agent daemon listens on.
pub const NODED_PORT: u16 = 1811;

/// Deadline for the connect phase (TCP connect + TLS handshake).
///
/// This bounds only connection establishment; the full request deadline comes
/// from the call's timeout bucket.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
