//! # Stage Dispatcher
//!
//! Walks a [`DispatchTable`] in its fixed order:
//! stages ascending, and within each stage Setup -> Run -> Teardown.
//!
//! The dispatcher holds no state of its own. Every pass reads the table
//! through a shared borrow, so repeated passes are identical.
//!
//! Two entry points:
//! - [`execute_all_stages`]: infallible callbacks, no failure path
//! - [`try_execute_all_stages`]: callbacks returning `Result`, with a
//!   [`FailurePolicy`] deciding what a failure does to the rest of the pass

use crate::{
    DispatchError, DispatchTable, PhaseFailure, PhaseRow, StageFailure, StageId, TraceSink,
};

/// Invoke every (stage, phase) callback of `table` exactly once, in order.
///
/// Each stage is announced to `sink` before its Setup callback runs.
pub fn execute_all_stages<C, S>(table: &DispatchTable<C>, sink: &S)
where
    C: Fn(StageId),
    S: TraceSink + ?Sized,
{
    tracing::debug!(stages = table.stage_count(), "Dispatching all stages");

    for (stage, row) in table.stages() {
        dispatch_stage(stage, row, sink);
    }
}

/// Announce one stage and run its phases in order.
pub(crate) fn dispatch_stage<C, S>(stage: StageId, row: &PhaseRow<C>, sink: &S)
where
    C: Fn(StageId),
    S: TraceSink + ?Sized,
{
    tracing::debug!(%stage, "Executing stage");
    sink.stage_started(stage);

    for (phase, callback) in row.iter() {
        tracing::trace!(%stage, %phase, "Invoking phase callback");
        callback(stage);
    }
}

// =============================================================================
// FALLIBLE DISPATCH
// =============================================================================

/// What a failing phase callback does to the rest of the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the pass: no further phase or stage runs.
    #[default]
    FailFast,
    /// Skip the remaining phases of the failing stage, continue with the next stage.
    BestEffort,
}

/// Outcome of a fallible pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Callbacks invoked, including the ones that failed.
    pub invoked: usize,
    /// Failures recorded under [`FailurePolicy::BestEffort`], in stage order.
    pub failures: Vec<StageFailure>,
}

impl DispatchReport {
    /// Check if every invoked callback succeeded.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Like [`execute_all_stages`], for callbacks that can fail.
///
/// Later phases of a stage may rely on earlier ones, so a failure never lets
/// the rest of that stage run. Under [`FailurePolicy::FailFast`] the first
/// failure is returned as [`DispatchError::PhaseFailed`].
pub fn try_execute_all_stages<C, S>(
    table: &DispatchTable<C>,
    sink: &S,
    policy: FailurePolicy,
) -> Result<DispatchReport, DispatchError>
where
    C: Fn(StageId) -> Result<(), PhaseFailure>,
    S: TraceSink + ?Sized,
{
    tracing::debug!(stages = table.stage_count(), ?policy, "Dispatching all stages");

    let mut report = DispatchReport::default();

    for (stage, row) in table.stages() {
        tracing::debug!(%stage, "Executing stage");
        sink.stage_started(stage);

        for (phase, callback) in row.iter() {
            report.invoked = report.invoked.saturating_add(1);

            if let Err(reason) = callback(stage) {
                tracing::warn!(%stage, %phase, "Phase callback failed: {}", reason);
                let failure = StageFailure {
                    stage,
                    phase,
                    reason,
                };

                match policy {
                    FailurePolicy::FailFast => return Err(DispatchError::PhaseFailed(failure)),
                    FailurePolicy::BestEffort => {
                        report.failures.push(failure);
                        break;
                    }
                }
            }
        }
    }

    Ok(report)
}

// =============================================================================
// TESTS
// =============================================================================
