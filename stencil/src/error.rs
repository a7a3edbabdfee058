// error.rs - Errors surfaced while setting up or running a stencil

use thiserror::Error;

/// Errors from buffer allocation, seeding and configuration.
///
/// The evolution kernel itself is infallible: every index is wrapped into
/// range and the sweep bound is fixed by the grid size.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error("failed to allocate grid buffer of {cells} cells")]
    Allocation { cells: usize },

    #[error("invalid grid dimensions {rows}x{cols}: both must be non-zero and the cell count must fit in isize")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("seed cell ({row}, {col}) of pattern '{pattern}' lies outside a {rows}x{cols} grid")]
    SeedOutOfBounds {
        pattern: String,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown seed pattern: {0}")]
    UnknownPattern(String),

    #[error("unknown transition rule: {0}")]
    UnknownRule(String),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StencilResult<T> = Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = StencilError::Allocation { cells: 400 };
        assert_eq!(err.to_string(), "failed to allocate grid buffer of 400 cells");

        let err = StencilError::InvalidDimensions { rows: 0, cols: 20 };
        assert_eq!(err.to_string(), "invalid grid dimensions 0x20: both must be non-zero and the cell count must fit in isize");

        let err = StencilError::UnknownRule("life".into());
        assert_eq!(err.to_string(), "unknown transition rule: life");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StencilError>();
    }
}
