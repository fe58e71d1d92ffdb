use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("host must not be empty")]
    EmptyHost,
    #[error("TCP probes require a port")]
    MissingPort,
    #[error("only TCP probes take a port")]
    PortWithoutTcp,
    #[error("port must be between 1 and 65535 (got {value})")]
    InvalidPort { value: u32 },
    #[error("'{input}' is not a number")]
    NotANumber { input: String },
    #[error("unknown method '{input}' (expected ICMP or TCP)")]
    UnknownMethod { input: String },
    #[error("saved ping #{} does not exist ({len} saved)", .index + 1)]
    IndexOutOfRange { index: usize, len: usize },
}

/// Probe method as written in the config file and typed by the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MethodKind {
    #[serde(rename = "ICMP")]
    Icmp,
    #[serde(rename = "TCP")]
    Tcp,
}

impl MethodKind {
    pub fn label(self) -> &'static str {
        match self {
            MethodKind::Icmp => "ICMP",
            MethodKind::Tcp => "TCP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MethodKind::Icmp => "ICMP Echo",
            MethodKind::Tcp => "TCP Connect",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated probe method. A port only exists for TCP.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ProbeMethod {
    Icmp,
    Tcp { port: u16 },
}

impl ProbeMethod {
    pub fn kind(self) -> MethodKind {
        match self {
            ProbeMethod::Icmp => MethodKind::Icmp,
            ProbeMethod::Tcp { .. } => MethodKind::Tcp,
        }
    }

    pub fn port(self) -> Option<u16> {
        match self {
            ProbeMethod::Icmp => None,
            ProbeMethod::Tcp { port } => Some(port),
        }
    }

    fn build(kind: MethodKind, port: Option<u32>) -> Result<Self, ValidationError> {
        match kind {
            MethodKind::Icmp => Ok(ProbeMethod::Icmp),
            MethodKind::Tcp => {
                let port = port.ok_or(ValidationError::MissingPort)?;
                Ok(ProbeMethod::Tcp {
                    port: validate_port(port)?,
                })
            }
        }
    }
}

pub fn validate_port(value: u32) -> Result<u16, ValidationError> {
    u16::try_from(value)
        .ok()
        .filter(|port| *port != 0)
        .ok_or(ValidationError::InvalidPort { value })
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Target {
    host: String,
    method: ProbeMethod,
}

impl Target {
    /// Builds a target from raw input. A port given for ICMP is dropped.
    pub fn new(host: &str, kind: MethodKind, port: Option<u32>) -> Result<Self, ValidationError> {
        let host = host.trim();
        if host.is_empty() {
            return Err(ValidationError::EmptyHost);
        }
        Ok(Self {
            host: host.to_string(),
            method: ProbeMethod::build(kind, port)?,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn method(&self) -> ProbeMethod {
        self.method
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedTarget {
    name: String,
    target: Target,
}

impl SavedTarget {
    pub fn from_record(record: &TargetRecord) -> Result<Self, ValidationError> {
        let name = record.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            target: Target::new(&record.host, record.method, record.port)?,
        })
    }

    pub fn to_record(&self) -> TargetRecord {
        TargetRecord {
            name: self.name.clone(),
            host: self.target.host.clone(),
            method: self.target.method.kind(),
            port: self.target.method.port().map(u32::from),
        }
    }

    /// Returns a copy with `patch` applied; fields left as `None` keep their value.
    /// Switching away from TCP drops the port, switching to TCP needs a new one.
    /// A port in the patch is rejected when the result is ICMP.
    pub fn apply(&self, patch: &TargetPatch) -> Result<Self, ValidationError> {
        let kind = patch.method.unwrap_or(self.target.method.kind());
        let port = match kind {
            MethodKind::Icmp if patch.port.is_some() => {
                return Err(ValidationError::PortWithoutTcp);
            }
            MethodKind::Icmp => None,
            MethodKind::Tcp => patch
                .port
                .or(self.target.method.port().map(u32::from)),
        };
        let record = TargetRecord {
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            host: patch
                .host
                .clone()
                .unwrap_or_else(|| self.target.host.clone()),
            method: kind,
            port,
        };
        Self::from_record(&record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &Target {
        &self.target
    }
}

/// Unvalidated saved ping, in the shape of the config file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TargetRecord {
    pub name: String,
    pub host: String,
    pub method: MethodKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TargetPatch {
    pub name: Option<String>,
    pub host: Option<String>,
    pub method: Option<MethodKind>,
    pub port: Option<u32>,
}

impl TargetPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.host.is_none() && self.method.is_none() && self.port.is_none()
    }
}
