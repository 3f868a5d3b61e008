// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy re-flow of a block to a maximum width.

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::layout::{Block, Row};
use crate::{Measure, StyledFragment};

/// Re-flows `block` so that its rows fit within `max_width`.
///
/// A block that already fits, or that cannot be measured, is returned unchanged. Otherwise the
/// rows are flattened (the line breaks of the text are not kept) into word and whitespace pieces,
/// which are packed greedily into new rows. Pieces are never split, so a word wider than
/// `max_width` gets a row of its own and that row is wider than `max_width`. Finally every row is
/// trimmed of leading and trailing whitespace and the rows and block are measured again.
pub fn fit_to_width<F, M>(block: Block<F>, max_width: f64, measure: &M) -> Block<F>
where
    F: Clone,
    M: Measure<F> + ?Sized,
{
    match block.size.width() {
        Some(width) if width > max_width => {}
        Some(_) => return block,
        None => {
            log::trace!("not fitting an unmeasured block");
            return block;
        }
    }

    let row_spacing = block.row_spacing;
    let pieces = block
        .rows
        .into_iter()
        .flat_map(Row::into_fragments)
        .flat_map(split_words);

    let mut rows: Vec<Vec<StyledFragment<F>>> = Vec::new();
    let mut current = Vec::new();
    let mut has_content = false;
    let mut x = 0.0;
    for piece in pieces {
        if piece.text().is_empty() {
            current.push(piece);
            continue;
        }
        let whitespace = piece.is_whitespace();
        if whitespace && !has_content {
            // Leading whitespace is trimmed below, so it takes no room.
            current.push(piece);
            continue;
        }

        let width = piece
            .font()
            .map_or(0.0, |font| measure.measure(font, piece.text()).width);
        if !whitespace && has_content && x + width > max_width {
            rows.push(core::mem::take(&mut current));
            has_content = false;
            x = 0.0;
        }
        has_content |= !whitespace;
        x += width;
        current.push(piece);
    }
    rows.push(current);

    log::trace!("fitted block to {} rows of at most {max_width}", rows.len());

    let rows = rows
        .into_iter()
        .map(|mut fragments| {
            trim_row(&mut fragments);
            Row::measured(fragments, measure)
        })
        .collect();
    Block::new(rows, row_spacing)
}

/// Splits a fragment into maximal runs of whitespace and non-whitespace characters.
fn split_words<F: Clone>(fragment: StyledFragment<F>) -> SmallVec<[StyledFragment<F>; 4]> {
    let mut pieces = SmallVec::new();
    let text = fragment.text();
    let mut start = 0;
    let mut in_whitespace = None;
    for (index, c) in text.char_indices() {
        let whitespace = c.is_whitespace();
        if in_whitespace.is_some_and(|previous| previous != whitespace) {
            pieces.push(fragment.with_text(&text[start..index]));
            start = index;
        }
        in_whitespace = Some(whitespace);
    }
    if pieces.is_empty() {
        pieces.push(fragment);
    } else {
        pieces.push(fragment.with_text(&text[start..]));
    }
    pieces
}

/// Removes whitespace from both ends of a row.
///
/// Whitespace-only fragments at either end are dropped; the outermost remaining fragments lose
/// their leading (or trailing) whitespace characters. A row of only whitespace becomes empty.
pub(crate) fn trim_row<F: Clone>(fragments: &mut Vec<StyledFragment<F>>) {
    let Some(first) = fragments.iter().position(|f| !f.is_whitespace()) else {
        fragments.clear();
        return;
    };
    fragments.drain(..first);
    if let Some(head) = fragments.first_mut() {
        let trimmed = head.text().trim_start();
        if trimmed.len() != head.text().len() {
            *head = head.with_text(trimmed);
        }
    }

    if let Some(last) = fragments.iter().rposition(|f| !f.is_whitespace()) {
        fragments.truncate(last + 1);
    }
    if let Some(tail) = fragments.last_mut() {
        let trimmed = tail.text().trim_end();
        if trimmed.len() != tail.text().len() {
            *tail = tail.with_text(trimmed);
        }
    }
}
