// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test fonts, measurer and assertions.

use peniko::Color;
use stylized_text::kurbo::Size;
use stylized_text::{Block, Error, LayoutContext, Measure, Row, StyledFragment};

/// A monospace test font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TestFont {
    pub(crate) name: &'static str,
    pub(crate) advance: f64,
    pub(crate) height: f64,
}

pub(crate) const BODY: TestFont = TestFont {
    name: "body",
    advance: 1.0,
    height: 10.0,
};

pub(crate) const HEADING: TestFont = TestFont {
    name: "heading",
    advance: 2.0,
    height: 16.0,
};

pub(crate) const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);
pub(crate) const RED: Color = Color::from_rgba8(255, 0, 0, 255);

pub(crate) fn load_font(name: &str) -> Option<TestFont> {
    [BODY, HEADING]
        .into_iter()
        .find(|font| font.name.eq_ignore_ascii_case(name))
}

/// Measures text as `advance` per character, `height` tall.
#[derive(Debug, Default)]
pub(crate) struct Monospace;

impl Measure<TestFont> for Monospace {
    fn measure(&self, font: &TestFont, text: &str) -> Size {
        Size::new(font.advance * text.chars().count() as f64, font.height)
    }
}

/// A layout context for blue body text, with the test font loader.
#[derive(Debug)]
pub(crate) struct TestEnv {
    pub(crate) context: LayoutContext<TestFont>,
    pub(crate) measure: Monospace,
}

impl TestEnv {
    pub(crate) fn new() -> Self {
        Self {
            context: LayoutContext::new()
                .with_default_font(BODY)
                .with_default_color(BLUE)
                .with_font_loader(load_font),
            measure: Monospace,
        }
    }

    pub(crate) fn words(&self, text: &str) -> Vec<StyledFragment<TestFont>> {
        self.context.parse_words(text).unwrap()
    }

    pub(crate) fn layout(&self, text: &str) -> Result<Block<TestFont>, Error> {
        self.context.parse_text(text, &self.measure)
    }

    pub(crate) fn fit(&self, text: &str, max_width: f64) -> Block<TestFont> {
        self.context
            .parse_and_fit(text, max_width, &self.measure)
            .unwrap()
    }
}

/// The fragment with exactly this text.
pub(crate) fn fragment<'a>(
    fragments: &'a [StyledFragment<TestFont>],
    text: &str,
) -> &'a StyledFragment<TestFont> {
    fragments
        .iter()
        .find(|f| f.text() == text)
        .unwrap_or_else(|| panic!("no fragment {text:?} in {fragments:?}"))
}

pub(crate) fn row_texts(block: &Block<TestFont>) -> Vec<String> {
    block.iter().map(Row::text).collect()
}

/// Asserts that no row starts or ends with whitespace, and that only single-word rows are wider
/// than `max_width`.
pub(crate) fn assert_fitted(block: &Block<TestFont>, max_width: f64) {
    for row in block {
        let text = row.text();
        assert_eq!(text.trim(), text, "row {text:?} is not trimmed");
        if let Some(first) = row.fragments().first() {
            assert!(
                !first.is_whitespace(),
                "row {text:?} starts with whitespace"
            );
        }
        if let Some(last) = row.fragments().last() {
            assert!(!last.is_whitespace(), "row {text:?} ends with whitespace");
        }
        let width = row.size().width().expect("fitted rows are measured");
        if width > max_width {
            assert!(
                !text.contains(char::is_whitespace),
                "row {text:?} is {width} wide, more than {max_width}"
            );
        }
    }
}
