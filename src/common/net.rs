use std::io;
use std::net::{IpAddr, ToSocketAddrs};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid hostname: host is empty")]
    EmptyHost,
    #[error("invalid hostname '{host}': {source}")]
    Lookup {
        host: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid hostname '{host}': no addresses found")]
    NoAddress { host: String },
}

/// Resolves through the platform resolver, preferring the first IPv4 address.
pub fn resolve_host(host: &str) -> Result<IpAddr, ResolveError> {
    let host = host.trim();
    if host.is_empty() {
        return Err(ResolveError::EmptyHost);
    }
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(ip);
    }

    let addrs: Vec<IpAddr> = (host, 0)
        .to_socket_addrs()
        .map_err(|source| ResolveError::Lookup {
            host: host.to_string(),
            source,
        })?
        .map(|addr| addr.ip())
        .collect();

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ResolveError::NoAddress {
            host: host.to_string(),
        })
}
