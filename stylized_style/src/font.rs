// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Turns font names written in markup into font handles.
///
/// This is the content-loading capability of the embedding application. Loading may block; it is
/// called synchronously while an annotation is resolved, before any measuring happens.
///
/// When no loader is configured at all, `font=` declarations are skipped and the inherited font is
/// kept. When a loader is configured but returns `None`, resolution fails with
/// [`ErrorKind::UnknownFont`](crate::ErrorKind::UnknownFont).
pub trait FontLoader<F> {
    /// Loads the font called `name`, as written in the markup.
    fn load_font(&self, name: &str) -> Option<F>;
}

impl<F, L> FontLoader<F> for L
where
    L: Fn(&str) -> Option<F>,
{
    #[inline]
    fn load_font(&self, name: &str) -> Option<F> {
        self(name)
    }
}
