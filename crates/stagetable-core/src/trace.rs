//! # Trace Sinks
//!
//! Where the dispatcher announces each stage before running its phases.
//!
//! - [`StdoutSink`]: prints the header line (what the binary uses)
//! - [`SilentSink`]: discards headers
//! - [`TraceLog`]: records [`TraceEvent`]s in memory, and hands out recording
//!   callbacks so a whole pass can be captured and inspected

use crate::{Phase, PhaseRow, StageId, TraceEvent};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Receives stage headers from the dispatcher.
pub trait TraceSink {
    /// Called once per stage, before its Setup callback runs.
    fn stage_started(&self, stage: StageId);
}

/// Prints `Executing stage <N> fn's...` to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn stage_started(&self, stage: StageId) {
        println!("{}", TraceEvent::StageStarted(stage));
    }
}

/// Ignores stage headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl TraceSink for SilentSink {
    fn stage_started(&self, _stage: StageId) {}
}

// =============================================================================
// TRACE LOG
// =============================================================================

/// In-memory, thread-safe record of a dispatch pass.
#[derive(Debug, Default)]
pub struct TraceLog {
    events: Mutex<Vec<TraceEvent>>,
}

impl TraceLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(&self, event: TraceEvent) {
        self.lock().push(event);
    }

    /// Snapshot of all events recorded so far, in recording order.
    #[must_use]
    pub fn events(&self) -> Vec<TraceEvent> {
        self.lock().clone()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// A callback that records `PhaseInvoked { phase, stage }` into this log.
    pub fn recorder(&self, phase: Phase) -> impl Fn(StageId) + Clone + Send + Sync + '_ {
        move |stage| self.record(TraceEvent::phase(phase, stage))
    }

    /// A table row whose three slots record into this log.
    pub fn recording_row(&self) -> PhaseRow<impl Fn(StageId) + Clone + Send + Sync + '_> {
        PhaseRow::new(
            self.recorder(Phase::Setup),
            self.recorder(Phase::Run),
            self.recorder(Phase::Teardown),
        )
    }

    // Poisoning is ignored: events stay readable after a panicking callback.
    fn lock(&self) -> MutexGuard<'_, Vec<TraceEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TraceSink for TraceLog {
    fn stage_started(&self, stage: StageId) {
        self.record(TraceEvent::StageStarted(stage));
    }
}

// =============================================================================
// TESTS
// =============================================================================
