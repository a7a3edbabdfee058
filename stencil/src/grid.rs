// grid.rs - Grid types for the toroidal stencil

use crate::error::{StencilError, StencilResult};

// Compile-time defaults for a run
pub const ROW_DIM: usize = 20;          // Rows on the torus
pub const COL_DIM: usize = 20;          // Columns on the torus
pub const GENERATIONS: u32 = 20;        // Full sweeps per run

/// Floor-modulo: maps any integer onto `0..n`, negative inputs included.
///
/// Plain `%` truncates toward zero and would hand back `-1` for `wrap(-1, n)`;
/// the torus needs `n - 1` instead.
#[inline]
pub fn wrap(x: isize, n: usize) -> usize {
    x.rem_euclid(n as isize) as usize
}

/// Row and column counts of one grid. Both are non-zero and `rows * cols`
/// fits in `isize`, so every index and signed offset stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl Default for GridDims {
    fn default() -> Self {
        Self { rows: ROW_DIM, cols: COL_DIM }
    }
}

impl GridDims {
    pub fn new(rows: usize, cols: usize) -> StencilResult<Self> {
        match rows.checked_mul(cols) {
            Some(cells) if cells > 0 && cells <= isize::MAX as usize => Ok(Self { rows, cols }),
            _ => Err(StencilError::InvalidDimensions { rows, cols }),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    pub fn cols(&self) -> usize { self.cols }

    /// Total cell count, `rows * cols`.
    #[inline]
    pub fn cells(&self) -> usize { self.rows * self.cols }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    // x = row * cols + col
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            self.contains(row, col),
            "index: ({}, {}) out of bounds for {}x{} grid",
            row, col, self.rows, self.cols
        );
        row * self.cols + col
    }

    #[inline]
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i / self.cols, i % self.cols)
    }

    /// Linear index of `(row + dr, col + dc)` after wrapping both axes.
    #[inline]
    pub fn wrapped_index(&self, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let r = wrap(row as isize + dr, self.rows);
        let c = wrap(col as isize + dc, self.cols);
        r * self.cols + c
    }
}

/// One generation's snapshot: `rows * cols` cell states in row-major order.
///
/// The length never changes after allocation. During evolution two of these
/// exist and only their roles swap, never their storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    dims: GridDims,
    cells: Vec<bool>,
}

impl GridBuffer {
    /// Allocates an all-dead buffer, surfacing allocator exhaustion instead of aborting.
    pub fn allocate(dims: GridDims) -> StencilResult<Self> {
        let len = dims.cells();
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| StencilError::Allocation { cells: len })?;
        cells.resize(len, false);
        tracing::trace!(rows = dims.rows(), cols = dims.cols(), "allocated grid buffer");
        Ok(Self { dims, cells })
    }

    #[inline]
    pub fn dims(&self) -> GridDims { self.dims }

    #[inline]
    pub fn len(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[inline]
    pub fn get(&self, i: usize) -> bool { self.cells[i] }

    #[inline]
    pub fn set(&mut self, i: usize, alive: bool) { self.cells[i] = alive; }

    #[inline]
    pub fn get_at(&self, row: usize, col: usize) -> bool {
        self.cells[self.dims.index(row, col)]
    }

    #[inline]
    pub fn set_at(&mut self, row: usize, col: usize, alive: bool) {
        let i = self.dims.index(row, col);
        self.cells[i] = alive;
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn alive_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] { &self.cells }

    /// Address of the backing storage; stable for the buffer's whole life.
    pub fn storage_ptr(&self) -> *const bool { self.cells.as_ptr() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_handles_negative_and_overflowing_inputs() {
        assert_eq!(wrap(-1, 20), 19);
        assert_eq!(wrap(-21, 20), 19);
        assert_eq!(wrap(20, 20), 0);
        assert_eq!(wrap(41, 20), 1);
        assert_eq!(wrap(0, 1), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            GridDims::new(0, 5),
            Err(StencilError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(GridDims::new(5, 0).is_err());
        assert!(GridDims::new(1, 1).is_ok());
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        assert!(matches!(
            GridDims::new(1 << 33, 1 << 33),
            Err(StencilError::InvalidDimensions { .. })
        ));
        assert!(GridDims::new(usize::MAX, 2).is_err());
        assert!(GridDims::new(2, isize::MAX as usize).is_err());
        assert!(GridDims::new(1, isize::MAX as usize).is_ok());
    }

    #[test]
    fn unreservable_buffer_is_allocation_error() {
        let dims = GridDims::new(1, isize::MAX as usize).unwrap();
        assert!(matches!(
            GridBuffer::allocate(dims),
            Err(StencilError::Allocation { cells }) if cells == isize::MAX as usize
        ));
    }

    #[test]
    fn default_dims_are_twenty_by_twenty() {
        let dims = GridDims::default();
        assert_eq!((dims.rows(), dims.cols(), dims.cells()), (20, 20, 400));
    }

    #[test]
    fn wrapped_index_crosses_every_edge() {
        let dims = GridDims::default();
        assert_eq!(dims.wrapped_index(0, 0, -1, -1), dims.index(19, 19));
        assert_eq!(dims.wrapped_index(19, 19, 1, 1), dims.index(0, 0));
        assert_eq!(dims.wrapped_index(0, 19, -1, 1), dims.index(19, 0));
    }

    #[test]
    fn non_square_grid_uses_cols_as_stride() {
        let dims = GridDims::new(3, 7).unwrap();
        assert_eq!(dims.index(2, 6), 20);
        assert_eq!(dims.coords(20), (2, 6));
        assert_eq!(dims.wrapped_index(2, 6, 1, 1), 0);
    }

    #[test]
    fn allocated_buffer_is_dead_and_sized() {
        let buf = GridBuffer::allocate(GridDims::default()).unwrap();
        assert_eq!(buf.len(), 400);
        assert_eq!(buf.alive_count(), 0);
    }

    #[test]
    fn set_and_clear() {
        let mut buf = GridBuffer::allocate(GridDims::new(4, 4).unwrap()).unwrap();
        buf.set_at(1, 2, true);
        buf.set(15, true);
        assert!(buf.get(6));
        assert_eq!(buf.alive_indices().collect::<Vec<_>>(), vec![6, 15]);
        buf.clear();
        assert_eq!(buf.alive_count(), 0);
    }
}
