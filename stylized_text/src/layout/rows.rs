// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building measured rows from styled fragments.

use alloc::vec::Vec;

use peniko::kurbo::Size;

use crate::layout::{Block, Measurement, Row};
use crate::{Measure, StyledFragment};

/// Splits `fragments` into rows at line breaks and measures them.
///
/// Every line break starts a new row, so `n` line breaks always give `n + 1` rows, some of which
/// may be empty.
pub fn build_rows<F, M>(
    fragments: impl IntoIterator<Item = StyledFragment<F>>,
    measure: &M,
    row_spacing: f64,
) -> Block<F>
where
    M: Measure<F> + ?Sized,
{
    let mut rows = Vec::new();
    let mut current = Vec::new();
    for fragment in fragments {
        if fragment.is_line_break() {
            rows.push(Row::measured(core::mem::take(&mut current), measure));
        } else {
            current.push(fragment);
        }
    }
    rows.push(Row::measured(current, measure));

    Block::new(rows, row_spacing)
}

/// Measures a row: the widths of the fragments add up and the tallest fragment sets the height.
///
/// A row with no fragments measures `0 × 0`. A row with any unresolved font is unmeasured.
pub fn measure_row<F, M>(fragments: &[StyledFragment<F>], measure: &M) -> Measurement
where
    M: Measure<F> + ?Sized,
{
    let mut width = 0.0;
    let mut height = 0.0_f64;
    for fragment in fragments {
        let Some(font) = fragment.font() else {
            return Measurement::Unmeasured;
        };
        let size = measure.measure(font, fragment.text());
        width += size.width;
        height = height.max(size.height);
    }
    Measurement::Measured(Size::new(width, height))
}

/// Computes the size of a block from its rows.
///
/// The width is the widest row. The height adds up the row heights plus `row_spacing` between
/// consecutive rows (not after the last one). Any unmeasured row leaves the block unmeasured.
pub fn block_size<F>(rows: &[Row<F>], row_spacing: f64) -> Measurement {
    let mut width = 0.0_f64;
    let mut height = 0.0;
    for row in rows {
        let Some(size) = row.size.size() else {
            return Measurement::Unmeasured;
        };
        width = width.max(size.width);
        height += size.height;
    }
    let gaps = rows.len().saturating_sub(1);
    height += row_spacing * gaps as f64;
    Measurement::Measured(Size::new(width, height))
}

impl<F> Row<F> {
    /// Creates a row and measures it.
    pub fn measured<M>(fragments: Vec<StyledFragment<F>>, measure: &M) -> Self
    where
        M: Measure<F> + ?Sized,
    {
        let size = measure_row(&fragments, measure);
        Self { fragments, size }
    }

    /// Creates a row without measuring it.
    pub fn unmeasured(fragments: Vec<StyledFragment<F>>) -> Self {
        Self {
            fragments,
            size: Measurement::Unmeasured,
        }
    }
}
