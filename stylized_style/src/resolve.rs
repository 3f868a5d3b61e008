// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::{Annotation, ColorLookup, Error, FontLoader, StyleDeclaration, TextStyle};

/// The capabilities needed to resolve annotations.
///
/// Color lookup is mandatory. Font loading is optional: without a loader, `font=` declarations
/// leave the inherited font in place.
pub struct ResolveContext<'a, F> {
    colors: &'a dyn ColorLookup,
    fonts: Option<&'a dyn FontLoader<F>>,
}

impl<F> Clone for ResolveContext<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for ResolveContext<'_, F> {}

impl<F> core::fmt::Debug for ResolveContext<'_, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResolveContext")
            .field("has_font_loader", &self.fonts.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a, F> ResolveContext<'a, F> {
    /// Creates a context that resolves colors with `colors` and has no font loader.
    #[inline]
    pub fn new(colors: &'a dyn ColorLookup) -> Self {
        Self {
            colors,
            fonts: None,
        }
    }

    /// Returns this context with a font loader.
    #[inline]
    pub fn with_font_loader(mut self, fonts: &'a dyn FontLoader<F>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Returns the color lookup.
    #[inline]
    pub fn colors(&self) -> &'a dyn ColorLookup {
        self.colors
    }

    /// Returns the font loader, if one is configured.
    #[inline]
    pub fn font_loader(&self) -> Option<&'a dyn FontLoader<F>> {
        self.fonts
    }
}

impl Annotation {
    /// Applies this annotation on top of `inherited`.
    ///
    /// `inherited` is never modified; the result is a new style. Declarations are applied in order:
    /// - `color` replaces the RGB channels and keeps the alpha of the color in effect, so an
    ///   inherited (or earlier) opacity survives a color change.
    /// - `font` is loaded through the context's loader, or skipped when there is none.
    /// - `opacity` replaces the alpha channel of the color in effect.
    pub fn resolve<F: Clone>(
        &self,
        inherited: &TextStyle<F>,
        ctx: &ResolveContext<'_, F>,
    ) -> Result<TextStyle<F>, Error> {
        let mut out = inherited.clone();

        for declaration in self.declarations() {
            match declaration {
                StyleDeclaration::Color(name) => {
                    let named = ctx
                        .colors
                        .lookup_color(name)
                        .ok_or_else(|| Error::unknown_color(name))?;
                    out.color = with_alpha_of(named, out.color);
                }
                StyleDeclaration::Font(name) => match ctx.fonts {
                    Some(loader) => {
                        let font = loader
                            .load_font(name)
                            .ok_or_else(|| Error::unknown_font(name))?;
                        out.font = Some(font);
                    }
                    None => {
                        log::trace!("no font loader, keeping inherited font instead of {name:?}");
                    }
                },
                StyleDeclaration::Opacity(alpha) => {
                    out.color = out.color.with_alpha(*alpha);
                }
            }
        }

        Ok(out)
    }
}

/// Parses `list` as an [`Annotation`] and applies it on top of `inherited`.
///
/// An empty list, or one without recognized keys, yields `inherited` unchanged.
pub fn resolve_annotation<F: Clone>(
    list: &str,
    inherited: &TextStyle<F>,
    ctx: &ResolveContext<'_, F>,
) -> Result<TextStyle<F>, Error> {
    Annotation::parse(list)?.resolve(inherited, ctx)
}

fn with_alpha_of(color: Color, alpha_source: Color) -> Color {
    let [r, g, b, _] = color.components;
    Color::new([r, g, b, alpha_source.components[3]])
}
