// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylized text layout.
//!
//! Stylized text is plain text with inline markup for font, color and opacity:
//!
//! - `{ ... }` opens a scope. Scopes nest through recursion; an unmatched brace is plain text.
//! - `[key=value, ...]` at the end of a scope (or of unbraced text) styles the text before it.
//!   The recognized keys are `color`, `font` and `opacity`; see [`stylized_style`].
//! - `\n`, `\r\n` and `\r` are line breaks.
//!
//! Layout happens in three steps:
//!
//! 1. [`MarkupParser`] resolves the markup into a flat sequence of [`StyledFragment`]s.
//! 2. [`build_rows`] splits the fragments into [`Row`]s at line breaks and measures them into a
//!    [`Block`], using a [`Measure`] implementation supplied by the application.
//! 3. [`fit_to_width`] re-flows a block that is too wide into rows that fit a maximum width.
//!
//! [`LayoutContext`] bundles the configuration (default style, palette, font loader, row spacing)
//! and runs these steps for you.
//!
//! Rows whose fonts are not all resolved cannot be measured. This is not an error: such rows, and
//! the block containing them, report [`Measurement::Unmeasured`].
//!
//! ## Example
//!
//! ```
//! use stylized_text::kurbo::Size;
//! use stylized_text::{Color, LayoutContext};
//!
//! // A monospace "font": the handle is the advance width of one character.
//! let measure = |advance: &f64, text: &str| {
//!     Size::new(*advance * text.chars().count() as f64, 10.0)
//! };
//!
//! let context = LayoutContext::new()
//!     .with_default_font(8.0)
//!     .with_default_color(Color::BLACK);
//! let block = context
//!     .parse_text("Hello {world[color=red]}!\nSecond row", &measure)
//!     .unwrap();
//!
//! assert_eq!(block.row_count(), 2);
//! assert_eq!(block.rows()[0].text(), "Hello world!");
//! assert_eq!(block.size().size(), Some(Size::new(96.0, 23.0)));
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("stylized_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko::kurbo;
pub use stylized_style;

mod context;
mod fragment;
mod measure;

pub mod layout;
pub mod markup;

#[cfg(test)]
mod tests;

pub use stylized_style::{
    Annotation, Color, ColorLookup, Error, ErrorKind, FontLoader, Palette, ResolveContext,
    TextStyle,
};

pub use context::{LayoutContext, LayoutOptions};
pub use fragment::StyledFragment;
pub use layout::line_break::fit_to_width;
pub use layout::rows::{block_size, build_rows, measure_row};
pub use layout::{Alignment, Block, Measurement, Placement, Row};
pub use markup::MarkupParser;
pub use measure::Measure;
