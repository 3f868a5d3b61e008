// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style annotations for stylized text.
//!
//! A style annotation is the body of a `[...]` group in stylized markup, for example
//! `[color=red, opacity=0.5]`. This crate covers the part of the markup that is independent of
//! scoping and layout:
//!
//! - [`Annotation`] parses an annotation into an ordered list of [`StyleDeclaration`]s.
//! - [`Annotation::resolve`] folds those declarations onto an inherited [`TextStyle`].
//! - [`Palette`] maps color names to [`Color`] values and implements [`ColorLookup`].
//! - [`FontLoader`] is the capability used to turn font names into font handles.
//!
//! Font handles are opaque to this crate: [`TextStyle`] is generic over the handle type `F`, and a
//! font that has not been resolved is simply `None`.
//!
//! ## Example
//!
//! ```
//! use stylized_style::{resolve_annotation, Palette, ResolveContext, TextStyle};
//! use stylized_style::Color;
//!
//! let palette = Palette::new();
//! let ctx = ResolveContext::<()>::new(&palette);
//! let inherited = TextStyle::new(None, Color::from_rgba8(0, 0, 255, 255));
//!
//! let style = resolve_annotation("color=Red, opacity=0.5", &inherited, &ctx).unwrap();
//! let rgba = style.color().to_rgba8();
//! assert_eq!((rgba.r, rgba.g, rgba.b), (255, 0, 0));
//! assert!(rgba.a.abs_diff(127) <= 1);
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
#![no_std]

extern crate alloc;

mod annotation;
mod error;
mod font;
mod palette;
mod resolve;
mod style;

#[cfg(test)]
mod tests;

pub use peniko::Color;

pub use annotation::{Annotation, StyleDeclaration, StyleKey};
pub use error::{Error, ErrorKind};
pub use font::FontLoader;
pub use palette::{ColorLookup, NAMED_COLORS, Palette};
pub use resolve::{ResolveContext, resolve_annotation};
pub use style::TextStyle;
