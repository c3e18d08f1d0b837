//! Server configuration types

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on (default: 0.0.0.0)
    pub host: IpAddr,

    /// Port to listen on (default: 8080)
    pub port: u16,

    /// `VCAP_SERVICES` key holding the database binding (default: cleardb)
    pub service: String,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_SERVICE: &'static str = "cleardb";

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: Self::DEFAULT_PORT,
            service: Self::DEFAULT_SERVICE.to_string(),
        }
    }
}
