// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::kurbo::{Point, Size};

use crate::layout::{Alignment, Block};
use crate::{Measure, StyledFragment};

/// Where a fragment goes, relative to the top-left corner of its block.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement<'a, F> {
    /// The placed fragment.
    pub fragment: &'a StyledFragment<F>,
    /// Index of the row holding the fragment.
    pub row: usize,
    /// Top-left corner of the fragment.
    pub origin: Point,
    /// Measured size of the fragment.
    pub size: Size,
}

impl<F> Block<F> {
    /// Positions every fragment of the block.
    ///
    /// Rows are stacked top to bottom, separated by the row spacing, and offset horizontally
    /// within the block width according to `alignment`. Returns `None` for an unmeasured block.
    pub fn placements<M>(&self, measure: &M, alignment: Alignment) -> Option<Vec<Placement<'_, F>>>
    where
        M: Measure<F> + ?Sized,
    {
        let block = self.size.size()?;
        let mut placements = Vec::new();
        let mut y = 0.0;
        for (row_index, row) in self.rows.iter().enumerate() {
            let row_size = row.size.size()?;
            let mut x = alignment.offset(block.width, row_size.width);
            for fragment in &row.fragments {
                let size = measure.measure(fragment.font()?, fragment.text());
                placements.push(Placement {
                    fragment,
                    row: row_index,
                    origin: Point::new(x, y),
                    size,
                });
                x += size.width;
            }
            y += row_size.height + self.row_spacing;
        }
        Some(placements)
    }
}
