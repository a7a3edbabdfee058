// patterns.rs - Seed patterns written into a buffer before the first sweep

use crate::error::{StencilError, StencilResult};
use crate::grid::{GridBuffer, GridDims};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],   // (row, col)
}

pub const DEFAULT_PATTERN: &str = "tee";

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "tee",
        cells: &[(10, 10), (10, 11), (10, 12), (11, 11)],
    },
    Pattern {
        name: "tee-capped",
        cells: &[(9, 11), (10, 10), (10, 11), (10, 12), (11, 11)],
    },
    Pattern {
        name: "blinker",
        cells: &[(10, 9), (10, 10), (10, 11)],
    },
    Pattern {
        name: "glider",
        cells: &[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)],
    },
];

impl Pattern {
    pub fn by_name(name: &str) -> StencilResult<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| StencilError::UnknownPattern(name.to_string()))
    }

    /// Fails on the first seed cell that does not fit in `dims`.
    pub fn check_fits(&self, dims: GridDims) -> StencilResult<()> {
        match self.cells.iter().find(|&&(row, col)| !dims.contains(row, col)) {
            Some(&(row, col)) => Err(StencilError::SeedOutOfBounds {
                pattern: self.name.to_string(),
                row,
                col,
                rows: dims.rows(),
                cols: dims.cols(),
            }),
            None => Ok(()),
        }
    }
}

/// Kills every cell, then brings the pattern's cells to life.
pub fn initialize(buffer: &mut GridBuffer, pattern: &Pattern) -> StencilResult<()> {
    pattern.check_fits(buffer.dims())?;

    buffer.clear();
    for &(row, col) in pattern.cells {
        buffer.set_at(row, col, true);
    }
    Ok(())
}
