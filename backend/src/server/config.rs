//! HTTP server configuration object.

use std::net::SocketAddr;

/// Namespace applied to Prometheus metric names.
#[cfg(feature = "metrics")]
const DEFAULT_METRICS_NAMESPACE: &str = "employee_api";

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    #[cfg(feature = "metrics")]
    pub(crate) metrics_namespace: String,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            #[cfg(feature = "metrics")]
            metrics_namespace: DEFAULT_METRICS_NAMESPACE.to_owned(),
        }
    }
}
