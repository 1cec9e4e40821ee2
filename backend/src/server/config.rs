//! HTTP server configuration object.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) breeds_path: PathBuf,
    pub(crate) favourites_path: PathBuf,
}

impl ServerConfig {
    /// Construct a server configuration.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, breeds_path: PathBuf, favourites_path: PathBuf) -> Self {
        Self {
            bind_addr,
            breeds_path,
            favourites_path,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
