//! # Table Primitives
//!
//! Fixed constants of the stage dispatcher.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Number of stages in the standard dispatch table.
pub const STAGE_COUNT: usize = 3;

/// Number of phase slots in every table row.
pub const PHASE_COUNT: usize = 3;

/// Maximum number of stages a table can hold.
///
/// Stage identifiers are `u8`, so rows past index 255 would have no identifier.
pub const MAX_STAGES: usize = u8::MAX as usize + 1;

const _: () = assert!(STAGE_COUNT <= MAX_STAGES);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Phase;

    #[test]
    fn phase_count_matches_phase_enum() {
        assert_eq!(PHASE_COUNT, Phase::ALL.len());
    }

    #[test]
    fn max_stages_covers_every_stage_id() {
        assert_eq!(MAX_STAGES, 256);
    }
}
