//! # Parallel Stage Execution
//!
//! Runs the stages of a table concurrently on the rayon thread pool.
//!
//! Within a stage the header still precedes Setup, Run and Teardown, in that
//! order. Across stages there is no ordering: stage 2 may finish before stage 0.
//! Only use this when stages do not depend on each other's effects.

use crate::dispatcher::dispatch_stage;
use crate::{DispatchTable, StageId, TraceSink};
use rayon::prelude::*;

/// Run every stage of `table` once, stages in parallel, phases in order.
pub fn execute_stages_parallel<C, S>(table: &DispatchTable<C>, sink: &S)
where
    C: Fn(StageId) + Sync,
    S: TraceSink + Sync + ?Sized,
{
    tracing::debug!(
        stages = table.stage_count(),
        threads = rayon::current_num_threads(),
        "Dispatching stages in parallel"
    );

    table
        .rows()
        .par_iter()
        .enumerate()
        .for_each(|(index, row)| dispatch_stage(StageId::new(index as u8), row, sink));
}
