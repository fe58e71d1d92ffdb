use super::plan::SessionHeader;
use super::stats::{SessionStats, StatsSnapshot};
use crate::config::SessionConfig;
use crate::input::KeyInput;
use crate::probe::{Probe, ProbeOutcome};
use std::io;
use std::thread;
use thiserror::Error;
use tracing::{info, warn};

/// Output sink of a live session.
pub trait SessionView {
    /// Draws header, statistics and (in Extended mode) the probe log.
    fn show(&mut self, frame: &SessionFrame<'_>) -> io::Result<()>;

    /// Clears the screen before the next `show`.
    fn reset(&mut self) -> io::Result<()>;
}

pub struct SessionFrame<'a> {
    pub header: &'a SessionHeader,
    pub stats: StatsSnapshot,
    pub log: &'a [ProbeLogLine],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProbeLogLine {
    pub seq: u64,
    pub outcome: ProbeOutcome,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Running,
    Stopping,
    Stopped,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("could not draw the session: {0}")]
    Render(#[source] io::Error),
    #[error("could not read the keyboard: {0}")]
    Input(#[source] io::Error),
}

#[derive(Debug)]
pub enum SessionEnd {
    Cancelled,
    Aborted(SessionError),
}

#[derive(Debug)]
pub struct SessionReport {
    pub stats: SessionStats,
    pub state: SessionState,
    pub end: SessionEnd,
}

enum TickFlow {
    Continue,
    Cancel,
}

struct LiveSession<'a> {
    header: &'a SessionHeader,
    config: &'a SessionConfig,
    state: SessionState,
    stats: SessionStats,
    log: Vec<ProbeLogLine>,
    seq: u64,
    ticks_since_redraw: usize,
}

impl<'a> LiveSession<'a> {
    fn new(header: &'a SessionHeader, config: &'a SessionConfig) -> Self {
        Self {
            header,
            config,
            state: SessionState::Running,
            stats: SessionStats::new(),
            log: Vec::new(),
            seq: 0,
            ticks_since_redraw: 0,
        }
    }

    fn frame(&self) -> SessionFrame<'_> {
        SessionFrame {
            header: self.header,
            stats: self.stats.snapshot(),
            log: &self.log,
        }
    }

    fn render(&self, view: &mut impl SessionView) -> Result<(), SessionError> {
        view.show(&self.frame()).map_err(SessionError::Render)
    }

    /// Probe, record, render, then look for a key. A key that arrives while
    /// the probe is in flight is only seen after this tick is rendered.
    fn tick(
        &mut self,
        probe: &mut impl Probe,
        view: &mut impl SessionView,
        keys: &mut impl KeyInput,
    ) -> Result<TickFlow, SessionError> {
        let outcome = probe.probe();
        self.seq += 1;
        self.stats.record(&outcome);

        if self.header.mode.logs_each_probe() {
            self.ticks_since_redraw += 1;
            if self.ticks_since_redraw > self.config.redraw_every {
                // Start a fresh screen; stats carry over.
                self.log.clear();
                self.ticks_since_redraw = 1;
                view.reset().map_err(SessionError::Render)?;
            }
            self.log.push(ProbeLogLine {
                seq: self.seq,
                outcome,
            });
        }

        self.render(view)?;

        if keys.poll_nonblocking().map_err(SessionError::Input)? {
            return Ok(TickFlow::Cancel);
        }
        Ok(TickFlow::Continue)
    }
}

/// Runs probes until a key is pressed or the view/input fails.
pub fn run_session(
    header: &SessionHeader,
    probe: &mut impl Probe,
    view: &mut impl SessionView,
    keys: &mut impl KeyInput,
    config: &SessionConfig,
) -> SessionReport {
    let mut session = LiveSession::new(header, config);
    info!(host = %header.host, ip = %header.ip, method = header.method.kind().label(), "session started");

    let mut end = SessionEnd::Cancelled;
    let started = view
        .reset()
        .map_err(SessionError::Render)
        .and_then(|()| session.render(view));
    if let Err(err) = started {
        end = SessionEnd::Aborted(err);
        session.state = SessionState::Stopped;
    }

    while session.state == SessionState::Running {
        match session.tick(probe, view, keys) {
            Ok(TickFlow::Continue) => {
                if !config.interval.is_zero() {
                    thread::sleep(config.interval);
                }
            }
            Ok(TickFlow::Cancel) => session.state = SessionState::Stopping,
            Err(err) => {
                warn!(error = %err, "session aborted");
                end = SessionEnd::Aborted(err);
                session.state = SessionState::Stopped;
            }
        }
    }

    if session.state == SessionState::Stopping {
        session.state = SessionState::Stopped;
    }
    info!(
        sent = session.stats.sent(),
        failed = session.stats.failed(),
        "session stopped"
    );

    SessionReport {
        stats: session.stats,
        state: session.state,
        end,
    }
}
