use crate::error::{FilenameError, Result};

/// Half-open display range `[start_col, end_col)` assigned to the column in a row.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnBounds {
    start_col: usize,
    end_col: usize,
}

impl ColumnBounds {
    /// Creates bounds, rejecting an end that lies before the start.
    pub const fn new(start_col: usize, end_col: usize) -> Result<Self> {
        if end_col < start_col {
            return Err(FilenameError::InvalidBounds { start_col, end_col });
        }
        Ok(Self { start_col, end_col })
    }

    /// Bounds starting at column zero with the given width.
    pub const fn with_width(width: usize) -> Self {
        Self {
            start_col: 0,
            end_col: width,
        }
    }

    pub const fn start_col(&self) -> usize {
        self.start_col
    }

    pub const fn end_col(&self) -> usize {
        self.end_col
    }

    /// Number of display cells covered by the bounds.
    pub const fn width(&self) -> usize {
        self.end_col - self.start_col
    }
}
