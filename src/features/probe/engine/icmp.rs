use super::helpers::{DEFAULT_PAYLOAD_SIZE, build_echo_request, parse_echo_reply};
use crate::config::ICMP_TIMEOUT;
use crate::probe::{Probe, ProbeError, ProbeErrorKind, ProbeOutcome};
use socket2::{Domain, Protocol, SockAddr, Socket, Type};
use std::io::{self, Read};
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tracing::debug;

const RECV_BUFFER_SIZE: usize = 1500;

/// Sends one ICMP echo request per call on a fresh socket.
#[derive(Debug)]
pub struct IcmpProbe {
    ip: IpAddr,
    timeout: Duration,
    identifier: u16,
    sequence: u16,
}

struct IcmpSocket {
    socket: Socket,
    // The kernel rewrites the identifier on datagram sockets.
    is_dgram: bool,
}

impl IcmpProbe {
    pub fn new(ip: IpAddr) -> Self {
        Self::with_timeout(ip, ICMP_TIMEOUT)
    }

    pub fn with_timeout(ip: IpAddr, timeout: Duration) -> Self {
        Self {
            ip,
            timeout,
            identifier: std::process::id() as u16,
            sequence: 0,
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    fn echo(&mut self) -> Result<Duration, ProbeError> {
        self.sequence = self.sequence.wrapping_add(1);
        let ipv6 = self.ip.is_ipv6();
        let IcmpSocket {
            mut socket,
            is_dgram,
        } = open_socket(self.ip)?;

        let packet = build_echo_request(self.identifier, self.sequence, DEFAULT_PAYLOAD_SIZE, ipv6);
        let destination = SockAddr::from(SocketAddr::new(self.ip, 0));
        let started = Instant::now();
        socket.send_to(&packet, &destination)?;

        let mut buffer = [0u8; RECV_BUFFER_SIZE];
        loop {
            let Some(remaining) = self
                .timeout
                .checked_sub(started.elapsed())
                .filter(|left| !left.is_zero())
            else {
                return Err(ProbeError::timeout(self.timeout));
            };
            socket.set_read_timeout(Some(remaining))?;

            let len = match socket.read(&mut buffer) {
                Ok(len) => len,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err)
                    if matches!(
                        err.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
                    ) =>
                {
                    return Err(ProbeError::timeout(self.timeout));
                }
                Err(err) => return Err(err.into()),
            };

            // Raw sockets see every ICMP message on the host.
            match parse_echo_reply(&buffer[..len], ipv6) {
                Some(reply)
                    if reply.sequence == self.sequence
                        && (is_dgram || reply.identifier == self.identifier) =>
                {
                    return Ok(started.elapsed());
                }
                _ => continue,
            }
        }
    }
}

impl Probe for IcmpProbe {
    fn probe(&mut self) -> ProbeOutcome {
        match self.echo() {
            Ok(latency) => {
                debug!(ip = %self.ip, seq = self.sequence, ?latency, "icmp echo reply");
                ProbeOutcome::Reply { latency }
            }
            Err(err) => {
                debug!(ip = %self.ip, seq = self.sequence, error = %err, "icmp echo failed");
                ProbeOutcome::Failed(err)
            }
        }
    }
}

/// Unprivileged datagram socket first, raw socket as fallback.
fn open_socket(ip: IpAddr) -> Result<IcmpSocket, ProbeError> {
    let (domain, protocol) = if ip.is_ipv6() {
        (Domain::IPV6, Protocol::ICMPV6)
    } else {
        (Domain::IPV4, Protocol::ICMPV4)
    };

    match Socket::new(domain, Type::DGRAM, Some(protocol)) {
        Ok(socket) => Ok(IcmpSocket {
            socket,
            is_dgram: true,
        }),
        Err(dgram_err) => {
            debug!(error = %dgram_err, "datagram ICMP socket unavailable, trying raw socket");
            Socket::new(domain, Type::RAW, Some(protocol))
                .map(|socket| IcmpSocket {
                    socket,
                    is_dgram: false,
                })
                .map_err(|err| {
                    ProbeError::new(
                        ProbeErrorKind::from_io(&err),
                        format!("cannot open ICMP socket: {err}"),
                    )
                })
        }
    }
}
