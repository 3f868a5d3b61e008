// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rows, blocks and their measurement.

pub mod line_break;
pub mod rows;

mod placement;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::kurbo::Size;

use crate::StyledFragment;

pub use placement::Placement;

/// The measured size of a row or block.
///
/// A row is [`Unmeasured`](Self::Unmeasured) when any of its fragments has an unresolved font;
/// a block is unmeasured when any of its rows is.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Measurement {
    /// The size cannot be computed without more fonts.
    #[default]
    Unmeasured,
    /// The measured width and height.
    Measured(Size),
}

impl Measurement {
    /// The `(width, height)` pair reported for unmeasured rows and blocks by
    /// [`as_tuple`](Self::as_tuple).
    pub const SENTINEL: (f64, f64) = (-1.0, -1.0);

    /// Returns the size, if measured.
    #[inline]
    pub fn size(self) -> Option<Size> {
        match self {
            Self::Unmeasured => None,
            Self::Measured(size) => Some(size),
        }
    }

    /// Returns `true` if a size is available.
    #[inline]
    pub fn is_measured(self) -> bool {
        matches!(self, Self::Measured(_))
    }

    /// Returns the measured width.
    #[inline]
    pub fn width(self) -> Option<f64> {
        self.size().map(|size| size.width)
    }

    /// Returns the measured height.
    #[inline]
    pub fn height(self) -> Option<f64> {
        self.size().map(|size| size.height)
    }

    /// Returns `(width, height)`, or [`SENTINEL`](Self::SENTINEL) when unmeasured.
    #[inline]
    pub fn as_tuple(self) -> (f64, f64) {
        self.size()
            .map_or(Self::SENTINEL, |size| (size.width, size.height))
    }
}

/// Horizontal alignment of rows within their block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Rows start at the left edge of the block.
    #[default]
    Start,
    /// Rows are centered within the block width.
    Center,
    /// Rows end at the right edge of the block.
    End,
}

impl Alignment {
    /// The x offset of content `content_width` wide within `container_width`.
    pub fn offset(self, container_width: f64, content_width: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => (container_width - content_width) / 2.0,
            Self::End => container_width - content_width,
        }
    }
}

/// One line of laid out text, left to right.
#[derive(Clone, Debug, PartialEq)]
pub struct Row<F> {
    pub(crate) fragments: Vec<StyledFragment<F>>,
    pub(crate) size: Measurement,
}

impl<F> Row<F> {
    /// The fragments of this row in reading order.
    #[inline]
    pub fn fragments(&self) -> &[StyledFragment<F>] {
        &self.fragments
    }

    /// The measured size of this row.
    #[inline]
    pub fn size(&self) -> Measurement {
        self.size
    }

    /// Returns `true` if the row holds no fragments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The text of the row with styling removed.
    pub fn text(&self) -> String {
        self.fragments.iter().map(StyledFragment::text).collect()
    }

    /// Consumes the row, returning its fragments.
    #[inline]
    pub fn into_fragments(self) -> Vec<StyledFragment<F>> {
        self.fragments
    }
}

/// A laid out piece of stylized text: rows from top to bottom plus an overall size.
///
/// The block width is the widest row; the block height is the sum of the row heights plus the
/// row spacing between consecutive rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Block<F> {
    pub(crate) rows: Vec<Row<F>>,
    pub(crate) size: Measurement,
    pub(crate) row_spacing: f64,
}

impl<F> Block<F> {
    /// Creates a block from rows, computing its size.
    pub fn new(rows: Vec<Row<F>>, row_spacing: f64) -> Self {
        let size = rows::block_size(&rows, row_spacing);
        Self {
            rows,
            size,
            row_spacing,
        }
    }

    /// The rows of this block from top to bottom.
    #[inline]
    pub fn rows(&self) -> &[Row<F>] {
        &self.rows
    }

    /// The measured size of this block.
    #[inline]
    pub fn size(&self) -> Measurement {
        self.size
    }

    /// The vertical gap between consecutive rows.
    #[inline]
    pub fn row_spacing(&self) -> f64 {
        self.row_spacing
    }

    /// The number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the block has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the rows from top to bottom.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Row<F>> {
        self.rows.iter()
    }

    /// Consumes the block, returning its rows.
    #[inline]
    pub fn into_rows(self) -> Vec<Row<F>> {
        self.rows
    }
}

impl<'a, F> IntoIterator for &'a Block<F> {
    type Item = &'a Row<F>;
    type IntoIter = core::slice::Iter<'a, Row<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
