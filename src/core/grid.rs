//! Grid sizing and validation.
//!
//! `GridSpec::normalize` turns a requested `columns x rows` into dimensions
//! that can be dealt: an even cell count with one catalog type per pair.
//! An odd cell count is fixed up by adding a column; a catalog that is too
//! small is reported, never corrected.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest board the engine will deal.
pub const MAX_CELLS: i64 = u16::MAX as i64;

/// Validated board dimensions. `columns * rows` is even and at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    columns: u32,
    rows: u32,
}

impl GridDimensions {
    /// Dimensions that already satisfy the board invariant.
    ///
    /// Returns `None` for zero sides, an odd cell count, or a board larger
    /// than [`MAX_CELLS`].
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Option<Self> {
        let cells = u64::from(columns) * u64::from(rows);
        if cells < 2 || cells % 2 != 0 || cells > MAX_CELLS as u64 {
            return None;
        }
        Some(Self { columns, rows })
    }

    #[must_use]
    pub const fn columns(self) -> u32 {
        self.columns
    }

    #[must_use]
    pub const fn rows(self) -> u32 {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cells(self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Number of pairs needed to fill the board.
    #[must_use]
    pub const fn total_pairs(self) -> usize {
        self.cells() / 2
    }

    /// Row-major `(row, column)` of a slot index.
    #[must_use]
    pub fn position(self, index: usize) -> Option<(u32, u32)> {
        if index >= self.cells() {
            return None;
        }
        let columns = self.columns as usize;
        Some(((index / columns) as u32, (index % columns) as u32))
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Result of normalizing a requested grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    /// Dimensions the board will use.
    pub dimensions: GridDimensions,

    /// True when a column was added to make the cell count even.
    pub adjusted: bool,
}

impl GridSpec {
    /// Validate a requested grid against a catalog of `available_types`.
    ///
    /// Pure function of its inputs apart from a `warn!` when the grid is
    /// adjusted.
    pub fn normalize(columns: i64, rows: i64, available_types: usize) -> Result<Self, ConfigError> {
        if columns <= 0 || rows <= 0 {
            return Err(ConfigError::NonPositiveDimensions { columns, rows });
        }

        let mut columns = columns;
        let mut adjusted = false;
        let too_large = ConfigError::GridTooLarge { columns, rows };

        let mut cells = columns.checked_mul(rows).ok_or(too_large.clone())?;
        if cells > MAX_CELLS {
            return Err(too_large);
        }
        if cells % 2 != 0 {
            log::warn!(
                "grid {}x{} has an odd cell count, widening to {}x{}",
                columns,
                rows,
                columns + 1,
                rows
            );
            columns += 1;
            cells += rows;
            adjusted = true;
        }

        if cells > MAX_CELLS {
            return Err(too_large);
        }

        let required = (cells / 2) as usize;
        if required > available_types {
            return Err(ConfigError::InsufficientCatalog {
                required,
                available: available_types,
            });
        }

        let dimensions = GridDimensions::new(columns as u32, rows as u32).ok_or(too_large)?;
        Ok(Self {
            dimensions,
            adjusted,
        })
    }

    /// Pairs the deck builder must supply.
    #[must_use]
    pub fn required_pairs(&self) -> usize {
        self.dimensions.total_pairs()
    }
}
