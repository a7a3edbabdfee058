// neighborhood.rs - Fixed-offset neighborhood sampling on the torus

use crate::grid::{GridBuffer, GridDims};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// (row delta, column delta)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub dr: isize,
    pub dc: isize,
}

/// The sampled shape. `Left` and `Down` share an offset; that is the shape, not a typo.
pub const NEIGHBORHOOD_OFFSETS: [(Direction, Offset); 4] = [
    (Direction::Left,  Offset { dr:  1, dc:  1 }),
    (Direction::Right, Offset { dr: -1, dc: -1 }),
    (Direction::Up,    Offset { dr: -1, dc:  1 }),
    (Direction::Down,  Offset { dr:  1, dc:  1 }),
];

/// Neighbor states of one cell. The centre cell itself is not part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Neighborhood {
    pub fn field_mut(&mut self, direction: Direction) -> &mut bool {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }

    pub fn fields(&self) -> [bool; 4] {
        [self.left, self.right, self.up, self.down]
    }

    pub fn alive_count(&self) -> usize {
        self.fields().iter().filter(|&&alive| alive).count()
    }
}

/// Reads a cell's neighborhood out of a source buffer through an offset table.
#[derive(Debug, Clone, Copy)]
pub struct NeighborhoodSampler {
    dims: GridDims,
    offsets: &'static [(Direction, Offset)],
}

impl NeighborhoodSampler {
    pub fn new(dims: GridDims) -> Self {
        Self { dims, offsets: &NEIGHBORHOOD_OFFSETS }
    }

    pub fn dims(&self) -> GridDims { self.dims }

    /// Linear indices this sampler reads for cell `i`, in table order.
    pub fn neighbor_indices(&self, i: usize) -> impl Iterator<Item = (Direction, usize)> + '_ {
        let (row, col) = self.dims.coords(i);
        self.offsets
            .iter()
            .map(move |&(dir, off)| (dir, self.dims.wrapped_index(row, col, off.dr, off.dc)))
    }

    pub fn sample(&self, buffer: &GridBuffer, i: usize) -> Neighborhood {
        debug_assert_eq!(buffer.dims(), self.dims, "sampler and buffer dims differ");

        let mut nbhd = Neighborhood::default();
        for (dir, j) in self.neighbor_indices(i) {
            *nbhd.field_mut(dir) = buffer.get(j);
        }
        nbhd
    }
}
