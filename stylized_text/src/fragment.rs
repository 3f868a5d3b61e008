// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;
use stylized_style::TextStyle;

/// The normalized line break marker.
pub(crate) const LINE_BREAK: &str = "\n";

/// A run of text with a single resolved style.
///
/// The parser produces fragments that never contain a line break, with one exception: a line
/// break itself is represented by a fragment whose text is exactly `"\n"` (see
/// [`is_line_break`](Self::is_line_break)). Rows never contain line break fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledFragment<F> {
    pub(crate) text: String,
    pub(crate) font: Option<F>,
    pub(crate) color: Color,
}

impl<F> StyledFragment<F> {
    /// Creates a fragment.
    pub fn new(text: impl Into<String>, font: Option<F>, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            color,
        }
    }

    /// Creates a fragment in the given style.
    pub fn with_style(text: impl Into<String>, style: TextStyle<F>) -> Self {
        let (font, color) = style.into_parts();
        Self::new(text, font, color)
    }

    /// Creates a line break marker in the given style.
    pub fn line_break(style: TextStyle<F>) -> Self {
        Self::with_style(LINE_BREAK, style)
    }

    /// The text of this fragment.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The font handle, or `None` if the font is unresolved.
    #[inline]
    pub fn font(&self) -> Option<&F> {
        self.font.as_ref()
    }

    /// The text color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if this fragment is a line break marker.
    #[inline]
    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }

    /// Returns `true` if the text is empty or made only of whitespace.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Consumes the fragment, returning its text.
    #[inline]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl<F: Clone> StyledFragment<F> {
    /// The resolved style of this fragment.
    pub fn style(&self) -> TextStyle<F> {
        TextStyle::new(self.font.clone(), self.color)
    }

    /// Returns a fragment with the same style and different text.
    pub(crate) fn with_text(&self, text: &str) -> Self {
        Self::new(text, self.font.clone(), self.color)
    }
}
