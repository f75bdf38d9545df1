//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use serde::Serialize;
use stagetable_core::{
    DispatchError, DispatchTable, Phase, PhaseFn, StageId, StdoutSink, callbacks,
    execute_all_stages, execute_stages_parallel,
};
use std::fmt::Write as _;

// =============================================================================
// TABLE CONSTRUCTION
// =============================================================================

/// Build a table of `stages` stages, each wired to the standard callbacks.
///
/// Fails with [`DispatchError::TableFull`] past the addressable stage range.
pub fn standard_table(stages: usize) -> Result<DispatchTable, DispatchError> {
    (0..stages)
        .fold(DispatchTable::builder(), |builder, _| {
            builder.stage(
                callbacks::setup as PhaseFn,
                callbacks::run as PhaseFn,
                callbacks::teardown as PhaseFn,
            )
        })
        .build()
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Dispatch a standard table of `stages` stages, printing its trace to stdout.
pub fn cmd_run(parallel: bool, stages: usize) -> Result<(), DispatchError> {
    let table = standard_table(stages)?;

    tracing::info!(
        stages = table.stage_count(),
        entries = table.entry_count(),
        parallel,
        "Running stage table"
    );

    if parallel {
        execute_stages_parallel(&table, &StdoutSink);
    } else {
        execute_all_stages(&table, &StdoutSink);
    }

    tracing::info!("All stages executed");
    Ok(())
}

// =============================================================================
// DESCRIBE COMMAND
// =============================================================================

/// Layout of a dispatch table: which phase slots each stage has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    pub stage_count: usize,
    pub entry_count: usize,
    pub stages: Vec<StageLayout>,
}

/// Populated phase slots of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageLayout {
    pub stage: StageId,
    pub phases: Vec<Phase>,
}

/// Inspect the layout of any table.
pub fn table_layout<C>(table: &DispatchTable<C>) -> TableLayout {
    let stages = table
        .stages()
        .map(|(stage, _)| StageLayout {
            stage,
            phases: Phase::ALL
                .into_iter()
                .filter(|phase| table.entry(stage, *phase).is_some())
                .collect(),
        })
        .collect();

    TableLayout {
        stage_count: table.stage_count(),
        entry_count: table.entry_count(),
        stages,
    }
}

/// Render a layout as human-readable text.
pub fn render_layout(layout: &TableLayout) -> String {
    let mut output = String::new();
    output.push_str("Stage Table\n");
    output.push_str("===========\n");
    let _ = writeln!(output, "Stages:  {}", layout.stage_count);
    let _ = writeln!(output, "Entries: {}", layout.entry_count);
    output.push('\n');

    for stage in &layout.stages {
        let phases: Vec<&str> = stage.phases.iter().map(|phase| phase.name()).collect();
        let _ = writeln!(output, "  stage {}: {}", stage.stage, phases.join(", "));
    }

    output
}

/// Show the layout of a standard table of `stages` stages.
pub fn cmd_describe(json: bool, stages: usize) -> Result<(), DispatchError> {
    let layout = table_layout(&standard_table(stages)?);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&layout).unwrap_or_default()
        );
        return Ok(());
    }

    print!("{}", render_layout(&layout));
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
