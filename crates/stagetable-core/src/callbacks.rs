//! # Standard Phase Callbacks
//!
//! The callbacks installed in every row of [`DispatchTable::standard`].
//!
//! Each one prints its trace line to stdout. They share a body shape but stay
//! separate functions so each slot of a row can be swapped independently.
//!
//! [`DispatchTable::standard`]: crate::DispatchTable::standard

use crate::{Phase, StageId, TraceEvent};

/// Setup callback: prints `\t* setup<N>`.
pub fn setup(stage: StageId) {
    println!("{}", TraceEvent::phase(Phase::Setup, stage));
}

/// Run callback: prints `\t* run<N>`.
pub fn run(stage: StageId) {
    println!("{}", TraceEvent::phase(Phase::Run, stage));
}

/// Teardown callback: prints `\t* teardown<N>`.
pub fn teardown(stage: StageId) {
    println!("{}", TraceEvent::phase(Phase::Teardown, stage));
}
