use crate::probe::ProbeOutcome;

/// Running totals of one live session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStats {
    sent: u64,
    failed: u64,
    latencies: Vec<f64>,
}

/// Read-only view used for rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsSnapshot {
    pub sent: u64,
    pub failed: u64,
    pub failed_pct: f64,
    /// `None` until the first successful probe.
    pub latency: Option<LatencySummary>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatencySummary {
    pub current: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every outcome counts as sent and lands in exactly one of
    /// `latencies` or `failed`.
    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.sent += 1;
        match outcome.latency_ms() {
            Some(latency) => self.latencies.push(latency),
            None => self.failed += 1,
        }
    }

    pub fn sent(&self) -> u64 {
        self.sent
    }

    pub fn failed(&self) -> u64 {
        self.failed
    }

    pub fn latencies(&self) -> &[f64] {
        &self.latencies
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let failed_pct = if self.sent == 0 {
            0.0
        } else {
            self.failed as f64 / self.sent as f64 * 100.0
        };
        StatsSnapshot {
            sent: self.sent,
            failed: self.failed,
            failed_pct,
            latency: summarize(&self.latencies),
        }
    }
}

fn summarize(values: &[f64]) -> Option<LatencySummary> {
    let current = *values.last()?;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    for value in values {
        min = min.min(*value);
        max = max.max(*value);
        sum += value;
    }
    Some(LatencySummary {
        current,
        min,
        max,
        avg: sum / values.len() as f64,
    })
}
