// evolve.rs - Double-buffered generation loop

use tracing::debug;

use crate::error::StencilResult;
use crate::grid::{GridBuffer, GridDims};
use crate::neighborhood::NeighborhoodSampler;
use crate::rule::TransitionRule;

/// Physical storage slot of a `DoubleBuffer`. Slots never move; roles do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }
}

/// Two owned buffers plus a role marker saying which one is "current".
#[derive(Debug)]
pub struct DoubleBuffer {
    slots: [GridBuffer; 2],
    current: Slot,
}

impl DoubleBuffer {
    /// `current` lands in `Slot::First`, `next` in `Slot::Second`.
    pub fn new(current: GridBuffer, next: GridBuffer) -> Self {
        assert_eq!(current.dims(), next.dims(), "double buffer halves must share dims");
        Self { slots: [current, next], current: Slot::First }
    }

    pub fn allocate(dims: GridDims) -> StencilResult<Self> {
        Ok(Self::new(GridBuffer::allocate(dims)?, GridBuffer::allocate(dims)?))
    }

    pub fn dims(&self) -> GridDims { self.slots[0].dims() }

    pub fn current_slot(&self) -> Slot { self.current }

    pub fn slot(&self, slot: Slot) -> &GridBuffer {
        match slot {
            Slot::First => &self.slots[0],
            Slot::Second => &self.slots[1],
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut GridBuffer {
        match slot {
            Slot::First => &mut self.slots[0],
            Slot::Second => &mut self.slots[1],
        }
    }

    pub fn current(&self) -> &GridBuffer { self.slot(self.current) }

    pub fn next(&self) -> &GridBuffer { self.slot(self.current.other()) }

    /// Read side and write side of one sweep. They are never the same buffer.
    pub fn split(&mut self) -> (&GridBuffer, &mut GridBuffer) {
        let [first, second] = &mut self.slots;
        match self.current {
            Slot::First => (&*first, second),
            Slot::Second => (&*second, first),
        }
    }

    /// O(1): only the role marker changes.
    pub fn swap_roles(&mut self) {
        self.current = self.current.other();
    }
}

/// Outcome of one `Evolver::evolve` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvolutionReport {
    pub generations: u32,
    pub cells_per_sweep: usize,
    pub alive: usize,           // alive cells in the output buffer
    pub output: Slot,           // slot holding the final generation
}

pub struct Evolver<R> {
    sampler: NeighborhoodSampler,
    rule: R,
    generations: u32,
}

impl<R: TransitionRule> Evolver<R> {
    pub fn new(dims: GridDims, rule: R, generations: u32) -> Self {
        Self { sampler: NeighborhoodSampler::new(dims), rule, generations }
    }

    pub fn generations(&self) -> u32 { self.generations }

    pub fn rule(&self) -> &R { &self.rule }

    /// One full pass: every cell of `next` from `current`'s neighborhoods.
    pub fn sweep(&self, current: &GridBuffer, next: &mut GridBuffer) {
        for i in 0..current.len() {
            let nbhd = self.sampler.sample(current, i);
            next.set(i, self.rule.next_state(&nbhd));
        }
    }

    pub fn evolve(&self, buffers: &mut DoubleBuffer) -> EvolutionReport {
        self.evolve_observed(buffers, |_, _| {})
    }

    /// Like `evolve`, calling `observe(generation, current)` after every swap.
    pub fn evolve_observed<F>(&self, buffers: &mut DoubleBuffer, mut observe: F) -> EvolutionReport
    where
        F: FnMut(u32, &GridBuffer),
    {
        assert_eq!(buffers.dims(), self.sampler.dims(), "evolver and buffers disagree on dims");

        for generation in 1..=self.generations {
            let (current, next) = buffers.split();
            self.sweep(current, next);
            buffers.swap_roles();

            let current = buffers.current();
            debug!(generation, alive = current.alive_count(), "generation complete");
            observe(generation, current);
        }

        EvolutionReport {
            generations: self.generations,
            cells_per_sweep: buffers.dims().cells(),
            alive: buffers.current().alive_count(),
            output: buffers.current_slot(),
        }
    }
}
