use crate::common::net::{ResolveError, resolve_host};
use crate::config::PingMode;
use crate::data_model::target::{ProbeMethod, Target};
use crate::features::probe::engine::ProbeStrategy;
use crate::lookup::{OrgInfo, OrgLookup};
use std::net::IpAddr;
use tracing::info;

/// Static information drawn once at the top of a session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionHeader {
    pub host: String,
    pub ip: IpAddr,
    pub org: OrgInfo,
    pub method: ProbeMethod,
    pub mode: PingMode,
}

#[derive(Debug)]
pub struct SessionPlan {
    pub header: SessionHeader,
    pub strategy: ProbeStrategy,
}

/// Resolves the host and looks up its organisation. Only resolution can fail;
/// a failed lookup shows placeholders.
pub fn prepare_session(
    target: &Target,
    mode: PingMode,
    lookup: &impl OrgLookup,
) -> Result<SessionPlan, ResolveError> {
    let ip = resolve_host(target.host())?;
    info!(host = target.host(), %ip, "host resolved");
    let org = OrgInfo::from_lookup(lookup.lookup(ip));

    Ok(SessionPlan {
        header: SessionHeader {
            host: target.host().to_string(),
            ip,
            org,
            method: target.method(),
            mode,
        },
        strategy: ProbeStrategy::for_target(target, ip),
    })
}
