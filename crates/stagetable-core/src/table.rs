//! # Dispatch Table
//!
//! A fixed "jump table" mapping (stage, phase) to a callback.
//!
//! ## Invariants
//!
//! - Row `i` belongs to `StageId(i)`: stage identifiers are contiguous and zero-based
//! - Every row holds exactly one callback per [`Phase`]; there is no empty slot
//! - A table is fully populated when built and exposes no mutation afterwards
//! - At most [`MAX_STAGES`] rows
//!
//! The default callback type is [`PhaseFn`], a plain function pointer. Tables are
//! generic over the callback type so closures (e.g. recorders) and fallible
//! callbacks ([`FallibleFn`]) use the same structure.

use crate::callbacks;
use crate::primitives::{MAX_STAGES, PHASE_COUNT, STAGE_COUNT};
use crate::{DispatchError, Phase, PhaseFailure, StageId};

/// A phase callback: receives the stage identifier, returns nothing.
pub type PhaseFn = fn(StageId);

/// A phase callback that may fail.
pub type FallibleFn = fn(StageId) -> Result<(), PhaseFailure>;

// =============================================================================
// PHASE ROW
// =============================================================================

/// One table row: a callback slot for each phase, indexed by [`Phase::index`].
#[derive(Debug, Clone, Copy)]
pub struct PhaseRow<C> {
    slots: [C; PHASE_COUNT],
}

impl<C> PhaseRow<C> {
    /// Create a fully populated row.
    #[must_use]
    pub const fn new(setup: C, run: C, teardown: C) -> Self {
        Self {
            slots: [setup, run, teardown],
        }
    }

    /// Get the callback installed for `phase`.
    #[must_use]
    pub fn get(&self, phase: Phase) -> &C {
        &self.slots[phase.index()]
    }

    /// Iterate the slots in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (Phase, &C)> {
        Phase::ALL.into_iter().zip(self.slots.iter())
    }
}

// =============================================================================
// DISPATCH TABLE
// =============================================================================

/// Immutable table of phase callbacks, one row per stage.
#[derive(Debug, Clone)]
pub struct DispatchTable<C = PhaseFn> {
    rows: Vec<PhaseRow<C>>,
}

impl DispatchTable<PhaseFn> {
    /// The standard table: [`STAGE_COUNT`] stages, each wired to the
    /// [`callbacks`] `setup`, `run` and `teardown`.
    #[must_use]
    pub fn standard() -> Self {
        let rows = (0..STAGE_COUNT).map(|_| standard_row()).collect();
        Self { rows }
    }
}

fn standard_row() -> PhaseRow<PhaseFn> {
    PhaseRow::new(
        callbacks::setup as PhaseFn,
        callbacks::run as PhaseFn,
        callbacks::teardown as PhaseFn,
    )
}

impl<C> DispatchTable<C> {
    /// Start building a table row by row.
    #[must_use]
    pub fn builder() -> TableBuilder<C> {
        TableBuilder::new()
    }

    /// Number of stages (rows).
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of (stage, phase) entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.rows.len().saturating_mul(PHASE_COUNT)
    }

    /// Check if the table has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the row of `stage`, if the stage exists.
    #[must_use]
    pub fn row(&self, stage: StageId) -> Option<&PhaseRow<C>> {
        self.rows.get(stage.index())
    }

    /// Get the callback for a (stage, phase) pair, if the stage exists.
    #[must_use]
    pub fn entry(&self, stage: StageId, phase: Phase) -> Option<&C> {
        self.row(stage).map(|row| row.get(phase))
    }

    /// Iterate stages in ascending order with their rows.
    pub fn stages(&self) -> impl Iterator<Item = (StageId, &PhaseRow<C>)> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| (StageId::new(index as u8), row))
    }

    pub(crate) fn rows(&self) -> &[PhaseRow<C>] {
        &self.rows
    }
}

impl<C: Clone> DispatchTable<C> {
    /// Build a table of `stage_count` stages that all share `row`.
    pub fn uniform(stage_count: usize, row: PhaseRow<C>) -> Result<Self, DispatchError> {
        check_stage_limit(stage_count)?;
        Ok(Self {
            rows: vec![row; stage_count],
        })
    }
}

fn check_stage_limit(requested: usize) -> Result<(), DispatchError> {
    if requested > MAX_STAGES {
        return Err(DispatchError::TableFull {
            max: MAX_STAGES,
            requested,
        });
    }
    Ok(())
}

// =============================================================================
// TABLE BUILDER
// =============================================================================

/// Assembles a [`DispatchTable`] one stage at a time.
///
/// Each call to [`stage`](Self::stage) appends the next stage identifier.
#[derive(Debug)]
pub struct TableBuilder<C> {
    rows: Vec<PhaseRow<C>>,
}

impl<C> Default for TableBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> TableBuilder<C> {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append a stage with the given callbacks.
    #[must_use]
    pub fn stage(self, setup: C, run: C, teardown: C) -> Self {
        self.row(PhaseRow::new(setup, run, teardown))
    }

    /// Append a stage from a prepared row.
    #[must_use]
    pub fn row(mut self, row: PhaseRow<C>) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of stages added so far.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.rows.len()
    }

    /// Finish the table.
    ///
    /// Fails with [`DispatchError::TableFull`] if more than [`MAX_STAGES`]
    /// stages were added.
    pub fn build(self) -> Result<DispatchTable<C>, DispatchError> {
        check_stage_limit(self.rows.len())?;
        Ok(DispatchTable { rows: self.rows })
    }
}

// =============================================================================
// TESTS
// =============================================================================
