use crate::config::TCP_TIMEOUT;
use crate::probe::{Probe, ProbeOutcome};
use std::net::{SocketAddr, TcpStream};
use std::time::{Duration, Instant};
use tracing::debug;

/// Times a full TCP handshake. The connection is closed right away.
#[derive(Debug)]
pub struct TcpProbe {
    addr: SocketAddr,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(addr: SocketAddr) -> Self {
        Self::with_timeout(addr, TCP_TIMEOUT)
    }

    pub fn with_timeout(addr: SocketAddr, timeout: Duration) -> Self {
        Self { addr, timeout }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Probe for TcpProbe {
    fn probe(&mut self) -> ProbeOutcome {
        let started = Instant::now();
        match TcpStream::connect_timeout(&self.addr, self.timeout) {
            Ok(stream) => {
                let latency = started.elapsed();
                drop(stream);
                debug!(addr = %self.addr, ?latency, "tcp connect succeeded");
                ProbeOutcome::Reply { latency }
            }
            Err(err) => {
                debug!(addr = %self.addr, error = %err, "tcp connect failed");
                ProbeOutcome::Failed(err.into())
            }
        }
    }
}
