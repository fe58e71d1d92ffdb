mod plan;
mod runner;
mod stats;

pub use plan::{SessionHeader, SessionPlan, prepare_session};
pub use runner::{
    ProbeLogLine, SessionEnd, SessionError, SessionFrame, SessionReport, SessionState,
    SessionView, run_session,
};
pub use stats::{LatencySummary, SessionStats, StatsSnapshot};
