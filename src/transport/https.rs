//! HTTPS transport with mutual TLS.
//!
//! Every attempt uses a fresh request with its own deadline; nothing is
//! shared between node pipelines beyond the underlying client handle, which
//! is immutable. The daemon and the controller authenticate each other with
//! the same certificate pair: the client presents it as its identity and
//! pins it as the only trusted root for peer verification.

use std::future::Future;

use crate::errors::{Result, RpcError};
use crate::protocol::Node;
use crate::transport::{CallTransport, RequestSpec};

#[cfg(feature = "tls-transport")]
use crate::constants::CONNECT_TIMEOUT;
#[cfg(feature = "tls-transport")]
use tracing::{debug, error};

/// Combined certificate and private key material in PEM form.
///
/// The same bundle serves as the client identity and as the pinned peer
/// root, giving the mutual-TLS posture the node daemons expect.
#[derive(Clone)]
pub struct TlsCredentials {
    #[cfg_attr(not(feature = "tls-transport"), allow(dead_code))]
    pem: Vec<u8>,
}

impl TlsCredentials {
    /// Wraps a PEM bundle containing the certificate followed by its key.
    pub fn from_pem(pem: impl Into<Vec<u8>>) -> Self {
        Self { pem: pem.into() }
    }

    /// Builds the bundle from separate certificate and key PEM blocks.
    pub fn from_cert_and_key(cert_pem: &[u8], key_pem: &[u8]) -> Self {
        let mut pem = Vec::with_capacity(cert_pem.len() + key_pem.len() + 1);
        pem.extend_from_slice(cert_pem);
        if !cert_pem.ends_with(b"\n") {
            pem.push(b'\n');
        }
        pem.extend_from_slice(key_pem);
        Self { pem }
    }
}

impl std::fmt::Debug for TlsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs.
        f.debug_struct("TlsCredentials").finish_non_exhaustive()
    }
}

/// Production transport: HTTPS POST with mutual TLS and per-request deadline.
pub struct HttpsTransport {
    #[cfg(feature = "tls-transport")]
    client: reqwest::Client,
}

impl HttpsTransport {
    /// Builds the transport from TLS credentials.
    ///
    /// Fails with [`RpcError::TransportDisabled`] when the crate was built
    /// without the `tls-transport` feature, and also when the credential
    /// material is unusable; both are startup-time configuration failures,
    /// and the latter is logged with its underlying cause.
    #[cfg(feature = "tls-transport")]
    pub fn new(credentials: &TlsCredentials) -> Result<Self> {
        let identity = reqwest::Identity::from_pem(&credentials.pem).map_err(|e| {
            error!(error = %e, "client identity PEM is unusable");
            RpcError::TransportDisabled
        })?;
        let pinned_root = reqwest::Certificate::from_pem(&credentials.pem).map_err(|e| {
            error!(error = %e, "certificate PEM is unusable as a pinned root");
            RpcError::TransportDisabled
        })?;

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .identity(identity)
            .add_root_certificate(pinned_root)
            .tls_built_in_root_certs(false)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                error!(error = %e, "failed to build the HTTPS client");
                RpcError::TransportDisabled
            })?;

        Ok(Self { client })
    }

    #[cfg(not(feature = "tls-transport"))]
    pub fn new(_credentials: &TlsCredentials) -> Result<Self> {
        Err(RpcError::TransportDisabled)
    }
}

impl CallTransport for HttpsTransport {
    #[cfg(feature = "tls-transport")]
    fn post(&self, node: &Node, spec: &RequestSpec) -> impl Future<Output = Result<String>> + Send {
        let request = self
            .client
            .post(&spec.url)
            .body(spec.body.clone())
            .timeout(spec.timeout);
        let node_name = node.name.clone();
        let url = spec.url.clone();

        async move {
            debug!(node = %node_name, %url, "issuing RPC request");

            let response = request.send().await.map_err(|e| RpcError::Transport {
                node: node_name.clone(),
                code: e.status().map(|s| s.as_u16()).unwrap_or(0),
                message: e.to_string(),
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RpcError::Transport {
                    node: node_name,
                    code: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("HTTP request failed")
                        .to_string(),
                });
            }

            response.text().await.map_err(|e| RpcError::Transport {
                node: node_name,
                code: 0,
                message: format!("failed to read response body: {e}"),
            })
        }
    }

    // Unreachable in practice: without the feature, `new` never yields a
    // transport. Kept total so the trait impl typechecks in both builds.
    #[cfg(not(feature = "tls-transport"))]
    fn post(&self, _node: &Node, _spec: &RequestSpec) -> impl Future<Output = Result<String>> + Send {
        async { Err(RpcError::TransportDisabled) }
    }
}
