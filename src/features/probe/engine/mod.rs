mod helpers;
mod icmp;
mod tcp;

pub use icmp::IcmpProbe;
pub use tcp::TcpProbe;

use crate::data_model::target::{ProbeMethod, Target};
use crate::probe::{Probe, ProbeOutcome};
use std::net::{IpAddr, SocketAddr};

/// The two probe strategies a session can run.
#[derive(Debug)]
pub enum ProbeStrategy {
    Icmp(IcmpProbe),
    Tcp(TcpProbe),
}

impl ProbeStrategy {
    pub fn for_target(target: &Target, ip: IpAddr) -> Self {
        match target.method() {
            ProbeMethod::Icmp => ProbeStrategy::Icmp(IcmpProbe::new(ip)),
            ProbeMethod::Tcp { port } => ProbeStrategy::Tcp(TcpProbe::new(SocketAddr::new(ip, port))),
        }
    }
}

impl Probe for ProbeStrategy {
    fn probe(&mut self) -> ProbeOutcome {
        match self {
            ProbeStrategy::Icmp(probe) => probe.probe(),
            ProbeStrategy::Tcp(probe) => probe.probe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_model::target::MethodKind;
    use std::net::{Ipv4Addr, TcpListener};

    #[test]
    fn icmp_target_builds_icmp_strategy() {
        let target = Target::new("localhost", MethodKind::Icmp, None).unwrap();
        let strategy = ProbeStrategy::for_target(&target, IpAddr::V4(Ipv4Addr::LOCALHOST));
        match strategy {
            ProbeStrategy::Icmp(probe) => assert_eq!(probe.ip(), IpAddr::V4(Ipv4Addr::LOCALHOST)),
            ProbeStrategy::Tcp(_) => panic!("expected icmp strategy"),
        }
    }

    #[test]
    fn tcp_target_builds_tcp_strategy_on_port() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let target = Target::new("localhost", MethodKind::Tcp, Some(u32::from(port))).unwrap();

        let mut strategy = ProbeStrategy::for_target(&target, IpAddr::V4(Ipv4Addr::LOCALHOST));
        match &strategy {
            ProbeStrategy::Tcp(probe) => assert_eq!(probe.addr().port(), port),
            ProbeStrategy::Icmp(_) => panic!("expected tcp strategy"),
        }
        assert!(strategy.probe().is_success());
    }
}
