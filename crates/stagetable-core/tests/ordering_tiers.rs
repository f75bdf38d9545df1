//! # Ordering Tier Tests (T0-T3)
//!
//! If ANY tier fails, the dispatcher is INVALID.
//!
//! ## Tiers
//! - T0: Table Completeness
//! - T1: Phase Order Within a Stage
//! - T2: Stage Order Across a Pass
//! - T3: Repeated Passes

use stagetable_core::{
    DispatchTable, Phase, STAGE_COUNT, SilentSink, StageId, TraceEvent, TraceLog,
    execute_all_stages,
};
use std::sync::Mutex;

/// The records a full pass over `stage_count` stages must produce.
fn expected_pass(stage_count: u8) -> Vec<TraceEvent> {
    let mut expected = Vec::new();
    for id in 0..stage_count {
        let stage = StageId(id);
        expected.push(TraceEvent::StageStarted(stage));
        for phase in Phase::ALL {
            expected.push(TraceEvent::phase(phase, stage));
        }
    }
    expected
}

// =============================================================================
// TIER T0: TABLE COMPLETENESS
// =============================================================================

mod t0_table_completeness {
    use super::*;

    /// T0.1: Every (stage, phase) pair of the standard table has a callback.
    #[test]
    fn standard_table_has_every_entry() {
        let table = DispatchTable::standard();

        assert_eq!(table.stage_count(), STAGE_COUNT);
        for id in 0..STAGE_COUNT as u8 {
            for phase in Phase::ALL {
                assert!(
                    table.entry(StageId(id), phase).is_some(),
                    "missing {} for stage {}",
                    phase,
                    id
                );
            }
        }
    }

    /// T0.2: Stages outside the table have no entries.
    #[test]
    fn no_entries_past_last_stage() {
        let table = DispatchTable::standard();
        assert!(table.entry(StageId(STAGE_COUNT as u8), Phase::Setup).is_none());
    }
}

// =============================================================================
// TIER T1: PHASE ORDER WITHIN A STAGE
// =============================================================================

mod t1_phase_order {
    use super::*;

    /// T1.1: A single stage produces header, setup, run, teardown.
    #[test]
    fn single_stage_runs_setup_run_teardown() {
        let log = TraceLog::new();
        let table = DispatchTable::uniform(1, log.recording_row()).expect("table");

        execute_all_stages(&table, &log);

        assert_eq!(log.events(), expected_pass(1));
        assert_eq!(log.len(), 4);
    }

    /// T1.2: Each callback receives its own stage identifier.
    #[test]
    fn callbacks_receive_stage_identifier() {
        let log = TraceLog::new();
        let table = DispatchTable::uniform(3, log.recording_row()).expect("table");

        execute_all_stages(&table, &log);

        let mut current = None;
        let mut invoked = 0;
        for event in log.events() {
            match event {
                TraceEvent::StageStarted(stage) => current = Some(stage),
                TraceEvent::PhaseInvoked { stage, .. } => {
                    assert_eq!(Some(stage), current);
                    invoked += 1;
                }
            }
        }
        assert_eq!(current, Some(StageId(2)));
        assert_eq!(invoked, 9);
    }

    /// T1.3: Each row's callbacks are invoked with that row's own stage.
    #[test]
    fn row_callbacks_receive_their_row_stage() {
        let calls = Mutex::new(Vec::new());
        let slot = |row: u8| {
            let calls = &calls;
            move |stage: StageId| calls.lock().expect("lock").push((StageId(row), stage))
        };
        let table = (0..4u8)
            .fold(DispatchTable::builder(), |builder, row| {
                builder.stage(slot(row), slot(row), slot(row))
            })
            .build()
            .expect("table");

        execute_all_stages(&table, &SilentSink);
        drop(table);

        let calls = calls.into_inner().expect("lock");
        assert_eq!(calls.len(), 12);
        for (row, stage) in calls {
            assert_eq!(row, stage);
        }
    }
}

// =============================================================================
// TIER T2: STAGE ORDER ACROSS A PASS
// =============================================================================

mod t2_stage_order {
    use super::*;

    /// T2.1: Three stages produce the 12 reference records in order.
    #[test]
    fn three_stages_produce_reference_sequence() {
        let log = TraceLog::new();
        let table = DispatchTable::uniform(3, log.recording_row()).expect("table");

        execute_all_stages(&table, &log);

        let events = log.events();
        assert_eq!(events.len(), 12);
        assert_eq!(events, expected_pass(3));
    }

    /// T2.2: An empty table produces nothing.
    #[test]
    fn zero_stages_produce_nothing() {
        let log = TraceLog::new();
        let table = DispatchTable::uniform(0, log.recording_row()).expect("table");

        execute_all_stages(&table, &log);

        assert!(log.is_empty());
    }

    /// T2.3: Rows built one by one dispatch in insertion order.
    #[test]
    fn builder_rows_dispatch_in_insertion_order() {
        let log = TraceLog::new();
        let table = DispatchTable::builder()
            .row(log.recording_row())
            .row(log.recording_row())
            .build()
            .expect("build");

        execute_all_stages(&table, &log);

        assert_eq!(log.events(), expected_pass(2));
    }
}

// =============================================================================
// TIER T3: REPEATED PASSES
// =============================================================================

mod t3_repeated_passes {
    use super::*;

    /// T3.1: Two passes produce two identical, complete sequences.
    #[test]
    fn second_pass_repeats_first() {
        let log = TraceLog::new();
        let table = DispatchTable::uniform(3, log.recording_row()).expect("table");

        execute_all_stages(&table, &log);
        let first = log.events();
        log.clear();
        execute_all_stages(&table, &log);
        let second = log.events();

        assert_eq!(first, second);
        assert_eq!(first, expected_pass(3));
    }

    /// T3.2: The standard table can be dispatched repeatedly.
    #[test]
    fn standard_table_is_reusable() {
        let table = DispatchTable::standard();
        let sink = SilentSink;

        execute_all_stages(&table, &sink);
        execute_all_stages(&table, &sink);

        assert_eq!(table.entry_count(), 9);
    }
}
