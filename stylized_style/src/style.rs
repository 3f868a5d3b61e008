// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// The resolved style of a region of stylized text.
///
/// This is what a scope inherits from its parent and what [`Annotation::resolve`] produces.
/// A `None` font means the font is unresolved: text in this style can be parsed and laid out in
/// rows, but it cannot be measured.
///
/// [`Annotation::resolve`]: crate::Annotation::resolve
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle<F> {
    pub(crate) font: Option<F>,
    pub(crate) color: Color,
}

impl<F> TextStyle<F> {
    /// Creates a style from a font handle and a color.
    #[inline]
    pub const fn new(font: Option<F>, color: Color) -> Self {
        Self { font, color }
    }

    /// Returns the font handle, if the font is resolved.
    #[inline]
    pub fn font(&self) -> Option<&F> {
        self.font.as_ref()
    }

    /// Returns the text color, including its alpha channel.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns a new style with the font replaced.
    #[inline]
    pub fn with_font(mut self, font: Option<F>) -> Self {
        self.font = font;
        self
    }

    /// Returns a new style with the color replaced.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Splits the style into its font and color.
    #[inline]
    pub fn into_parts(self) -> (Option<F>, Color) {
        (self.font, self.color)
    }
}

impl<F> Default for TextStyle<F> {
    /// An unresolved font with opaque black text.
    fn default() -> Self {
        Self::new(None, Color::BLACK)
    }
}
