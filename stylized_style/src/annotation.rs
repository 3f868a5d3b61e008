// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::str::FromStr;

use smallvec::SmallVec;

use crate::Error;

/// A style property that can be set from markup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKey {
    /// `color=<name>`: the text color, looked up by name.
    Color,
    /// `font=<name>`: the font, loaded by name.
    Font,
    /// `opacity=<fraction>`: the alpha channel of the text color.
    Opacity,
}

impl StyleKey {
    /// Matches `key` case-insensitively against the recognized keys.
    pub fn parse(key: &str) -> Option<Self> {
        [Self::Color, Self::Font, Self::Opacity]
            .into_iter()
            .find(|candidate| key.eq_ignore_ascii_case(candidate.name()))
    }

    /// The key as written in markup.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Font => "font",
            Self::Opacity => "opacity",
        }
    }
}

/// A single `key=value` declaration of an [`Annotation`].
#[derive(Clone, Debug, PartialEq)]
pub enum StyleDeclaration {
    /// Sets the color's RGB channels from a named color, keeping the current alpha.
    Color(Box<str>),
    /// Sets the font to the font with the given name.
    Font(Box<str>),
    /// Sets the color's alpha channel to a fraction in `0..=1`.
    Opacity(f32),
}

impl StyleDeclaration {
    /// The property this declaration sets.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Color(_) => StyleKey::Color,
            Self::Font(_) => StyleKey::Font,
            Self::Opacity(_) => StyleKey::Opacity,
        }
    }
}

/// The parsed body of a `[...]` style group.
///
/// This is a declaration list in authoring order. When it is resolved, declarations are applied
/// left to right, so a later declaration of a property overrides an earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Annotation {
    declarations: SmallVec<[StyleDeclaration; 3]>,
}

impl Annotation {
    /// Creates an annotation with no declarations.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an annotation from declarations in authoring order.
    pub fn from_declarations<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = StyleDeclaration>,
    {
        Self {
            declarations: declarations.into_iter().collect(),
        }
    }

    /// Parses a comma-separated list of `key=value` tokens.
    ///
    /// All whitespace is removed before splitting, and each token is split at its last `=`.
    /// Keys are matched case-insensitively; tokens with an unrecognized key or without any `=` are
    /// ignored. An `opacity` value that is not a number in `0..=1` is an error.
    ///
    /// ## Example
    ///
    /// ```
    /// use stylized_style::{Annotation, StyleDeclaration};
    ///
    /// let annotation = Annotation::parse(" Color = red , shadow=2, opacity=0.25").unwrap();
    /// assert_eq!(
    ///     annotation.declarations(),
    ///     &[
    ///         StyleDeclaration::Color("red".into()),
    ///         StyleDeclaration::Opacity(0.25),
    ///     ]
    /// );
    /// ```
    pub fn parse(list: &str) -> Result<Self, Error> {
        let stripped: String = list.chars().filter(|c| !c.is_whitespace()).collect();

        let mut declarations = SmallVec::new();
        for token in stripped.split(',') {
            let Some(eq) = token.rfind('=') else {
                if !token.is_empty() {
                    log::debug!("ignoring style token {token:?} without a value");
                }
                continue;
            };
            let (key, value) = (&token[..eq], &token[eq + 1..]);
            let Some(key) = StyleKey::parse(key) else {
                log::debug!("ignoring unrecognized style key {key:?}");
                continue;
            };
            declarations.push(match key {
                StyleKey::Color => StyleDeclaration::Color(value.into()),
                StyleKey::Font => StyleDeclaration::Font(value.into()),
                StyleKey::Opacity => StyleDeclaration::Opacity(parse_opacity(value)?),
            });
        }

        Ok(Self { declarations })
    }

    /// Returns the declarations in authoring order.
    #[inline]
    pub fn declarations(&self) -> &[StyleDeclaration] {
        &self.declarations
    }

    /// Returns `true` if there is nothing to apply.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Appends a declaration.
    #[inline]
    pub fn push(&mut self, declaration: StyleDeclaration) {
        self.declarations.push(declaration);
    }
}

impl FromStr for Annotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_opacity(literal: &str) -> Result<f32, Error> {
    literal
        .parse::<f32>()
        .ok()
        .filter(|alpha| (0.0..=1.0).contains(alpha))
        .ok_or_else(|| Error::invalid_opacity(literal))
}
