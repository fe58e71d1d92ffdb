use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Timeout for a single ICMP echo round trip.
pub const ICMP_TIMEOUT: Duration = Duration::from_secs(1);
/// Timeout for a single TCP connect attempt.
pub const TCP_TIMEOUT: Duration = Duration::from_secs(2);
/// Pause between the end of one probe and the start of the next.
pub const PROBE_INTERVAL: Duration = Duration::from_secs(1);
/// Timeout for the ASN/organisation lookup.
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);
/// Extended mode clears the screen after this many probes.
pub const DEFAULT_REDRAW_EVERY: usize = 10;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum PingMode {
    #[default]
    Smart,
    Extended,
}

impl PingMode {
    pub fn toggle(self) -> Self {
        match self {
            PingMode::Smart => PingMode::Extended,
            PingMode::Extended => PingMode::Smart,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PingMode::Smart => "Smart",
            PingMode::Extended => "Extended",
        }
    }

    pub fn logs_each_probe(self) -> bool {
        self == PingMode::Extended
    }
}

impl fmt::Display for PingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Runtime knobs of the live session loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionConfig {
    pub interval: Duration,
    pub redraw_every: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interval: PROBE_INTERVAL,
            redraw_every: DEFAULT_REDRAW_EVERY,
        }
    }
}
