// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cell::Cell;

use peniko::Color;
use peniko::kurbo::Size;

use crate::{LayoutContext, Measure, StyledFragment, TextStyle};

/// Test fonts are names: `"body"` is 1 unit per character and 10 units tall, `"big"` is 2 units
/// per character and 20 units tall.
pub(crate) type TestFont = &'static str;

pub(crate) const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);
pub(crate) const RED: Color = Color::from_rgba8(255, 0, 0, 255);

/// A monospace measurer that counts how often it is asked.
#[derive(Debug, Default)]
pub(crate) struct Monospace {
    calls: Cell<usize>,
}

impl Monospace {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Measure<TestFont> for Monospace {
    fn measure(&self, font: &TestFont, text: &str) -> Size {
        self.calls.set(self.calls.get() + 1);
        let (advance, height) = match *font {
            "big" => (2.0, 20.0),
            _ => (1.0, 10.0),
        };
        Size::new(advance * text.chars().count() as f64, height)
    }
}

pub(crate) fn load_font(name: &str) -> Option<TestFont> {
    match name {
        "big" => Some("big"),
        "body" => Some("body"),
        _ => None,
    }
}

/// Blue `"body"` text with a font loader.
pub(crate) fn context() -> LayoutContext<TestFont> {
    LayoutContext::new()
        .with_default_font("body")
        .with_default_color(BLUE)
        .with_font_loader(load_font)
}

pub(crate) fn body(text: &str) -> StyledFragment<TestFont> {
    StyledFragment::new(text, Some("body"), BLUE)
}

pub(crate) fn line_break() -> StyledFragment<TestFont> {
    StyledFragment::line_break(TextStyle::new(Some("body"), BLUE))
}

/// The fragments with empty text left out.
pub(crate) fn non_empty<F>(fragments: &[StyledFragment<F>]) -> Vec<&StyledFragment<F>> {
    fragments.iter().filter(|f| !f.text().is_empty()).collect()
}

pub(crate) fn texts<F>(fragments: &[StyledFragment<F>]) -> Vec<&str> {
    fragments.iter().map(StyledFragment::text).collect()
}

pub(crate) fn alpha(color: Color) -> u8 {
    color.to_rgba8().a
}
