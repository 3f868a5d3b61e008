// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

/// Error produced while parsing or resolving a style annotation.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending value as written in the markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The annotation value that caused the error (a color name, font name or opacity literal).
    value: Box<str>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The offending annotation value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn unknown_color(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownColor,
            value: name.into(),
        }
    }

    pub(crate) fn invalid_opacity(literal: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidOpacity,
            value: literal.into(),
        }
    }

    pub(crate) fn unknown_font(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownFont,
            value: name.into(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::UnknownColor => write!(f, "unknown color name {:?}", self.value),
            ErrorKind::InvalidOpacity => write!(
                f,
                "invalid opacity {:?}: expected a number between 0 and 1",
                self.value
            ),
            ErrorKind::UnknownFont => write!(f, "font {:?} could not be loaded", self.value),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A `color` value did not name a color known to the palette.
    UnknownColor,

    /// An `opacity` value was not a number, or was outside `0..=1`.
    InvalidOpacity,

    /// A `font` value was rejected by the configured font loader.
    UnknownFont,
}
