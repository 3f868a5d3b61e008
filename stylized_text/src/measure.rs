// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Size;

/// Text measurement supplied by the embedding application.
///
/// Implementations must be deterministic: the same font and text always measure the same.
/// Closures of the form `Fn(&F, &str) -> Size` implement this trait.
pub trait Measure<F> {
    /// Returns the width and height of `text` set in `font`.
    fn measure(&self, font: &F, text: &str) -> Size;
}

impl<F, M> Measure<F> for M
where
    M: Fn(&F, &str) -> Size,
{
    #[inline]
    fn measure(&self, font: &F, text: &str) -> Size {
        self(font, text)
    }
}
