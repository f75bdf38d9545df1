//! # Core Type Definitions
//!
//! This module contains all core types for the stage dispatcher:
//! - Stage and phase identifiers (`StageId`, `Phase`)
//! - Trace output records (`TraceEvent`)
//! - Error types (`DispatchError`, `StageFailure`, `PhaseFailure`)
//!
//! ## Ordering Guarantees
//!
//! `StageId` and `Phase` implement `Ord`, and their ordering is the dispatch
//! order: stages ascending, phases Setup -> Run -> Teardown.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

// =============================================================================
// STAGE IDENTIFIER
// =============================================================================

/// Identifier of a stage in a dispatch table.
///
/// Stage identifiers are contiguous and zero-based: the stage at row `i` of a
/// table is always `StageId(i)`. The value is also the argument passed to every
/// callback of that stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StageId(pub u8);

impl StageId {
    /// Create a new stage identifier.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Row index of this stage in a dispatch table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// PHASE
// =============================================================================

/// Lifecycle phase of a stage.
///
/// The variant order is the execution order within a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Prepare the stage.
    Setup,
    /// Do the stage's work.
    Run,
    /// Release whatever setup acquired.
    Teardown,
}

impl Phase {
    /// All phases, in execution order.
    pub const ALL: [Phase; 3] = [Phase::Setup, Phase::Run, Phase::Teardown];

    /// Get the phase name as printed in trace lines.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Run => "run",
            Phase::Teardown => "teardown",
        }
    }

    /// Column of this phase within a table row.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Phase::Setup => 0,
            Phase::Run => 1,
            Phase::Teardown => 2,
        }
    }

    /// Get the phase that follows this one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Phase> {
        match self {
            Phase::Setup => Some(Phase::Run),
            Phase::Run => Some(Phase::Teardown),
            Phase::Teardown => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// TRACE EVENT
// =============================================================================

/// A single output record of a dispatch pass.
///
/// `Display` renders the human-readable trace line:
/// - `StageStarted(0)` -> `Executing stage 0 fn's...`
/// - `PhaseInvoked { Setup, 0 }` -> `\t* setup0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// Header emitted before the phases of a stage run.
    StageStarted(StageId),
    /// A phase callback was invoked with the given stage identifier.
    PhaseInvoked { phase: Phase, stage: StageId },
}

impl TraceEvent {
    /// Shorthand for a `PhaseInvoked` record.
    #[must_use]
    pub const fn phase(phase: Phase, stage: StageId) -> Self {
        Self::PhaseInvoked { phase, stage }
    }

    /// The stage this record belongs to.
    #[must_use]
    pub const fn stage(&self) -> StageId {
        match self {
            TraceEvent::StageStarted(stage) | TraceEvent::PhaseInvoked { stage, .. } => *stage,
        }
    }

    /// Check if this record is a stage header.
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, TraceEvent::StageStarted(_))
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::StageStarted(stage) => write!(f, "Executing stage {} fn's...", stage),
            TraceEvent::PhaseInvoked { phase, stage } => write!(f, "\t* {}{}", phase, stage),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Failure reported by a fallible phase callback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct PhaseFailure(pub String);

impl PhaseFailure {
    /// Create a failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// Get the reason as a string slice.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.0
    }
}

/// A phase failure located at its (stage, phase) slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{phase} failed for stage {stage}: {reason}")]
pub struct StageFailure {
    /// Stage whose callback failed.
    pub stage: StageId,
    /// Phase whose callback failed.
    pub phase: Phase,
    /// What the callback reported.
    pub reason: PhaseFailure,
}

/// Errors that can occur while building or dispatching a stage table.
///
/// - No silent failures
/// - The dispatcher never panics; all errors are returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// More stages were requested than `StageId` can address.
    #[error("Stage table is full: at most {max} stages are addressable, got {requested}")]
    TableFull { max: usize, requested: usize },

    /// A phase callback failed under the fail-fast policy.
    #[error("Dispatch aborted: {0}")]
    PhaseFailed(StageFailure),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_ordering() {
        assert!(Phase::Setup < Phase::Run);
        assert!(Phase::Run < Phase::Teardown);
        assert_eq!(Phase::ALL, [Phase::Setup, Phase::Run, Phase::Teardown]);
    }

    #[test]
    fn phase_next_walks_all_phases() {
        let mut walked = vec![Phase::Setup];
        while let Some(next) = walked.last().and_then(Phase::next) {
            walked.push(next);
        }
        assert_eq!(walked, Phase::ALL.to_vec());
    }

    #[test]
    fn phase_index_matches_all() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn trace_event_display() {
        assert_eq!(
            TraceEvent::StageStarted(StageId(2)).to_string(),
            "Executing stage 2 fn's..."
        );
        assert_eq!(
            TraceEvent::phase(Phase::Teardown, StageId(1)).to_string(),
            "\t* teardown1"
        );
    }

    #[test]
    fn trace_event_stage() {
        assert_eq!(TraceEvent::StageStarted(StageId(4)).stage(), StageId(4));
        assert_eq!(TraceEvent::phase(Phase::Run, StageId(7)).stage(), StageId(7));
        assert!(TraceEvent::StageStarted(StageId(0)).is_header());
        assert!(!TraceEvent::phase(Phase::Run, StageId(0)).is_header());
    }

    #[test]
    fn stage_failure_display() {
        let failure = StageFailure {
            stage: StageId(1),
            phase: Phase::Run,
            reason: PhaseFailure::new("device busy"),
        };
        assert_eq!(failure.to_string(), "run failed for stage 1: device busy");
        assert_eq!(
            DispatchError::PhaseFailed(failure).to_string(),
            "Dispatch aborted: run failed for stage 1: device busy"
        );
    }
}
