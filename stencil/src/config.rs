// config.rs - Run configuration, loadable from TOML

use std::path::Path;

use serde::Deserialize;

use crate::error::StencilResult;
use crate::grid::{COL_DIM, GENERATIONS, GridDims, ROW_DIM};
use crate::patterns::{DEFAULT_PATTERN, Pattern};
use crate::rule::RuleKind;

/// Everything one run needs. Missing fields fall back to the compile-time defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StencilConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: u32,
    pub pattern: String,
    pub rule: RuleKind,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            rows: ROW_DIM,
            cols: COL_DIM,
            generations: GENERATIONS,
            pattern: DEFAULT_PATTERN.to_string(),
            rule: RuleKind::default(),
        }
    }
}

impl StencilConfig {
    pub fn from_toml_str(text: &str) -> StencilResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> StencilResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn dims(&self) -> StencilResult<GridDims> {
        GridDims::new(self.rows, self.cols)
    }

    pub fn seed(&self) -> StencilResult<&'static Pattern> {
        Pattern::by_name(&self.pattern)
    }

    /// Checks dims, the pattern name, and that the seed fits the grid.
    pub fn validate(&self) -> StencilResult<()> {
        let dims = self.dims()?;
        self.seed()?.check_fits(dims)
    }
}
