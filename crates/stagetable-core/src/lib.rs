//! # stagetable-core
//!
//! Static "jump tables" of lifecycle callbacks - THE LOGIC.
//!
//! A [`DispatchTable`] maps every (stage, phase) pair to exactly one callback.
//! The dispatcher walks it in a fixed order: stages ascending, and within each
//! stage Setup, Run, Teardown. Which function sits in a slot never changes the
//! walk; the table only decides *what* runs, the dispatcher decides *when*.
//!
//! ```
//! use stagetable_core::{DispatchTable, TraceLog, execute_all_stages};
//!
//! let log = TraceLog::new();
//! let table = DispatchTable::uniform(3, log.recording_row()).expect("table");
//! execute_all_stages(&table, &log);
//! assert_eq!(log.len(), 12);
//! ```
//!
//! ## Architectural Constraints
//!
//! - Synchronous and single-threaded unless [`execute_stages_parallel`] is chosen
//! - Tables are fully populated when built and never mutated afterwards
//! - No runtime registration of stages

// =============================================================================
// MODULES
// =============================================================================

pub mod callbacks;
pub mod dispatcher;
pub mod parallel;
pub mod primitives;
pub mod table;
pub mod trace;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{DispatchError, Phase, PhaseFailure, StageFailure, StageId, TraceEvent};

// =============================================================================
// RE-EXPORTS: Table + Dispatcher
// =============================================================================

pub use dispatcher::{DispatchReport, FailurePolicy, execute_all_stages, try_execute_all_stages};
pub use parallel::execute_stages_parallel;
pub use table::{DispatchTable, FallibleFn, PhaseFn, PhaseRow, TableBuilder};
pub use trace::{SilentSink, StdoutSink, TraceLog, TraceSink};

// =============================================================================
// RE-EXPORTS: Primitives
// =============================================================================

pub use primitives::{MAX_STAGES, PHASE_COUNT, STAGE_COUNT};
