use std::io;
use std::time::Duration;
use thiserror::Error;

/// One latency measurement against a pre-resolved target.
pub trait Probe {
    /// Runs a single, independent probe. Network failures are reported as
    /// [`ProbeOutcome::Failed`], never as a panic.
    fn probe(&mut self) -> ProbeOutcome;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ProbeOutcome {
    Reply { latency: Duration },
    Failed(ProbeError),
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Reply { .. })
    }

    /// Round-trip time in milliseconds; `None` for failed probes.
    pub fn latency_ms(&self) -> Option<f64> {
        match self {
            ProbeOutcome::Reply { latency } => Some(latency.as_secs_f64() * 1000.0),
            ProbeOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match self {
            ProbeOutcome::Reply { .. } => None,
            ProbeOutcome::Failed(err) => Some(err),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum ProbeErrorKind {
    Timeout,
    Unreachable,
    Refused,
    PermissionDenied,
    Unsupported,
    Io,
}

impl ProbeErrorKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProbeErrorKind::Timeout => "timeout",
            ProbeErrorKind::Unreachable => "unreachable",
            ProbeErrorKind::Refused => "refused",
            ProbeErrorKind::PermissionDenied => "permission_denied",
            ProbeErrorKind::Unsupported => "unsupported",
            ProbeErrorKind::Io => "io_error",
        }
    }

    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => ProbeErrorKind::Timeout,
            io::ErrorKind::ConnectionRefused => ProbeErrorKind::Refused,
            io::ErrorKind::HostUnreachable | io::ErrorKind::NetworkUnreachable => {
                ProbeErrorKind::Unreachable
            }
            io::ErrorKind::PermissionDenied => ProbeErrorKind::PermissionDenied,
            io::ErrorKind::Unsupported => ProbeErrorKind::Unsupported,
            _ => ProbeErrorKind::Io,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{}: {message}", kind.label())]
pub struct ProbeError {
    pub kind: ProbeErrorKind,
    pub message: String,
}

impl ProbeError {
    pub fn new(kind: ProbeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::new(
            ProbeErrorKind::Timeout,
            format!("no reply within {} ms", after.as_millis()),
        )
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        Self::new(ProbeErrorKind::from_io(&err), err.to_string())
    }
}
