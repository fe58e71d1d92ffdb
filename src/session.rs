pub use crate::features::session::{
    LatencySummary, ProbeLogLine, SessionEnd, SessionError, SessionFrame, SessionHeader,
    SessionPlan, SessionReport, SessionState, SessionStats, SessionView, StatsSnapshot,
    prepare_session, run_session,
};
