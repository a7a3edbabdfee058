// lib.rs - Toroidal double-buffered cellular-automaton stencil
//
// A rows x cols torus of boolean cells. Every generation each cell reads four
// wrapped neighbors from the current buffer, a transition rule decides its
// next state, and the result goes to the other buffer before the two swap roles.

pub mod config;
pub mod error;
pub mod evolve;
pub mod grid;
pub mod neighborhood;
pub mod patterns;
pub mod rule;

pub use config::StencilConfig;
pub use error::{StencilError, StencilResult};
pub use evolve::{DoubleBuffer, EvolutionReport, Evolver, Slot};
pub use grid::{GridBuffer, GridDims, wrap};
pub use neighborhood::{Direction, Neighborhood, NeighborhoodSampler, Offset, NEIGHBORHOOD_OFFSETS};
pub use patterns::{Pattern, PATTERNS, initialize};
pub use rule::{AlwaysDead, ExactlyOne, Majority, RuleKind, TransitionRule};

use tracing::info;

/// One complete run: allocate both buffers, seed both, evolve, release.
///
/// Both buffers are dropped on every return path, including allocation
/// failure of the second one.
pub fn run(config: &StencilConfig) -> StencilResult<EvolutionReport> {
    config.validate()?;
    let dims = config.dims()?;
    let seed = config.seed()?;

    info!(
        rows = dims.rows(),
        cols = dims.cols(),
        generations = config.generations,
        pattern = seed.name,
        rule = %config.rule,
        "starting stencil run"
    );

    let mut buffers = DoubleBuffer::allocate(dims)?;
    initialize(buffers.slot_mut(Slot::First), seed)?;
    initialize(buffers.slot_mut(Slot::Second), seed)?;

    let evolver = Evolver::new(dims, config.rule, config.generations);
    let report = evolver.evolve(&mut buffers);

    info!(
        generations = report.generations,
        alive = report.alive,
        output = ?report.output,
        "stencil run complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_ends_all_dead() {
        let report = run(&StencilConfig::default()).unwrap();
        assert_eq!(report.generations, 20);
        assert_eq!(report.cells_per_sweep, 400);
        assert_eq!(report.alive, 0);
        assert_eq!(report.output, Slot::First);
    }

    #[test]
    fn invalid_config_fails_before_allocating() {
        let cfg = StencilConfig { cols: 0, ..Default::default() };
        assert!(matches!(run(&cfg), Err(StencilError::InvalidDimensions { .. })));
    }

    #[test]
    fn overflowing_dims_are_rejected_not_panicked_on() {
        let cfg = StencilConfig { rows: 1 << 33, cols: 1 << 33, ..Default::default() };
        assert!(matches!(run(&cfg), Err(StencilError::InvalidDimensions { .. })));
    }

    #[test]
    fn allocation_failure_propagates_from_run() {
        // fits isize and the tee seed, but no allocator can provide it
        let cfg = StencilConfig {
            rows: 16,
            cols: isize::MAX as usize / 16,
            ..Default::default()
        };
        assert!(matches!(run(&cfg), Err(StencilError::Allocation { .. })));
    }
}
