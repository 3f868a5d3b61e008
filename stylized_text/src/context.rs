// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Context for stylized text layout.

use alloc::boxed::Box;
use alloc::vec::Vec;

use peniko::Color;
use stylized_style::{Error, FontLoader, Palette, ResolveContext, TextStyle};

use crate::layout::line_break::fit_to_width;
use crate::layout::rows::build_rows;
use crate::layout::{Alignment, Block, Placement};
use crate::{MarkupParser, Measure, StyledFragment};

/// Layout settings that do not affect parsing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Vertical gap between consecutive rows.
    pub row_spacing: f64,
    /// Horizontal alignment used by [`LayoutContext::placements`].
    pub alignment: Alignment,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            row_spacing: 3.0,
            alignment: Alignment::Start,
        }
    }
}

/// Configuration for parsing and laying out stylized text.
///
/// Holds the default style, the color palette, the optional font loader and the
/// [`LayoutOptions`]. Every call works on fresh data, so the same context can lay out any number
/// of strings.
pub struct LayoutContext<F> {
    default_style: TextStyle<F>,
    palette: Palette,
    font_loader: Option<Box<dyn FontLoader<F>>>,
    options: LayoutOptions,
}

impl<F: core::fmt::Debug> core::fmt::Debug for LayoutContext<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutContext")
            .field("default_style", &self.default_style)
            .field("palette_len", &self.palette.len())
            .field("has_font_loader", &self.font_loader.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<F> Default for LayoutContext<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> LayoutContext<F> {
    /// Creates a context with an unresolved default font, black text, the named color palette,
    /// no font loader and default options.
    pub fn new() -> Self {
        Self {
            default_style: TextStyle::default(),
            palette: Palette::new(),
            font_loader: None,
            options: LayoutOptions::default(),
        }
    }

    /// Sets the font of unstyled text.
    pub fn with_default_font(mut self, font: F) -> Self {
        self.default_style = core::mem::take(&mut self.default_style).with_font(Some(font));
        self
    }

    /// Sets the color of unstyled text.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_style = core::mem::take(&mut self.default_style).with_color(color);
        self
    }

    /// Sets the style of unstyled text.
    pub fn with_default_style(mut self, style: TextStyle<F>) -> Self {
        self.default_style = style;
        self
    }

    /// Replaces the palette used for `color=` declarations.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the loader used for `font=` declarations.
    pub fn with_font_loader(mut self, loader: impl FontLoader<F> + 'static) -> Self {
        self.font_loader = Some(Box::new(loader));
        self
    }

    /// Replaces the layout options.
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the vertical gap between rows.
    pub fn with_row_spacing(mut self, row_spacing: f64) -> Self {
        self.options.row_spacing = row_spacing;
        self
    }

    /// Sets the horizontal alignment of rows.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.options.alignment = alignment;
        self
    }

    /// The style of unstyled text.
    pub fn default_style(&self) -> &TextStyle<F> {
        &self.default_style
    }

    /// The palette used for `color=` declarations.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Mutable access to the palette, for registering application colors.
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }

    /// The layout options.
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Mutable access to the layout options.
    pub fn options_mut(&mut self) -> &mut LayoutOptions {
        &mut self.options
    }
}

impl<F: Clone> LayoutContext<F> {
    /// Returns a markup parser using this context's default style, palette and font loader.
    pub fn parser(&self) -> MarkupParser<'_, F> {
        let mut ctx = ResolveContext::new(&self.palette);
        if let Some(loader) = self.font_loader.as_deref() {
            ctx = ctx.with_font_loader(loader);
        }
        MarkupParser::new(self.default_style.clone(), ctx)
    }

    /// Parses `text` into styled fragments without laying it out.
    pub fn parse_words(&self, text: &str) -> Result<Vec<StyledFragment<F>>, Error> {
        self.parser().parse(text)
    }

    /// Parses `text` and lays it out in rows at its line breaks.
    pub fn parse_text<M>(&self, text: &str, measure: &M) -> Result<Block<F>, Error>
    where
        M: Measure<F> + ?Sized,
    {
        let fragments = self.parse_words(text)?;
        Ok(build_rows(fragments, measure, self.options.row_spacing))
    }

    /// Parses `text`, lays it out and re-flows it when it is wider than `max_width`.
    ///
    /// Re-flowing replaces the line breaks of the text with breaks that make the rows fit.
    pub fn parse_and_fit<M>(
        &self,
        text: &str,
        max_width: f64,
        measure: &M,
    ) -> Result<Block<F>, Error>
    where
        M: Measure<F> + ?Sized,
    {
        let block = self.parse_text(text, measure)?;
        Ok(fit_to_width(block, max_width, measure))
    }

    /// Positions the fragments of `block` using the configured alignment.
    pub fn placements<'b, M>(
        &self,
        block: &'b Block<F>,
        measure: &M,
    ) -> Option<Vec<Placement<'b, F>>>
    where
        M: Measure<F> + ?Sized,
    {
        block.placements(measure, self.options.alignment)
    }
}
