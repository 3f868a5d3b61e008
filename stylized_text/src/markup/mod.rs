// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup parsing: from a marked-up string to a flat sequence of styled fragments.
//!
//! Each piece of text is parsed together with the style it inherits:
//!
//! - Without a complete `{...}` pair, the trailing `[...]` group (if any) styles the text before
//!   it, and the text after it reverts to the parser's default style. The text before the group
//!   is then searched for an earlier group, and so on.
//! - Otherwise the text is a chain of complete pairs. For each pair, the text after the `}` is
//!   parsed with the default style; the style of its first fragment becomes the *trailing*
//!   style. The text before the `{` inherits the trailing style, so a scope re-anchors
//!   inheritance on what follows it. The text inside the braces is styled by its own trailing
//!   group relative to the inherited style, and text after that group falls back to the
//!   trailing style.
//!
//! Both chains are walked with loops, so long markup does not deepen the stack.

mod style_block;

use alloc::borrow::Cow;
use alloc::vec::Vec;

use stylized_style::{Annotation, Error, ResolveContext, TextStyle};

use crate::StyledFragment;
use crate::fragment::LINE_BREAK;
use style_block::{find_scope, find_style_block};

/// Resolves stylized markup into styled fragments.
#[derive(Debug)]
pub struct MarkupParser<'a, F> {
    default_style: TextStyle<F>,
    ctx: ResolveContext<'a, F>,
}

impl<'a, F: Clone> MarkupParser<'a, F> {
    /// Creates a parser.
    ///
    /// `default_style` is the style of unstyled text and the style text reverts to after a
    /// `[...]` group.
    pub fn new(default_style: TextStyle<F>, ctx: ResolveContext<'a, F>) -> Self {
        Self { default_style, ctx }
    }

    /// The style of unstyled text.
    pub fn default_style(&self) -> &TextStyle<F> {
        &self.default_style
    }

    /// Parses `text`, starting from the default style.
    pub fn parse(&self, text: &str) -> Result<Vec<StyledFragment<F>>, Error> {
        self.parse_with(text, &self.default_style)
    }

    /// Parses `text`, starting from `inherited`.
    ///
    /// The result is in reading order. Line breaks (`\n`, `\r\n` or `\r`) appear as separate line
    /// break fragments; no other fragment contains one. Any invalid annotation fails the whole
    /// parse.
    pub fn parse_with(
        &self,
        text: &str,
        inherited: &TextStyle<F>,
    ) -> Result<Vec<StyledFragment<F>>, Error> {
        let text = normalize_line_breaks(text);
        let fragments = self.parse_scope(&text, inherited)?;
        Ok(split_line_breaks(fragments))
    }

    /// Always yields at least one fragment, possibly with empty text.
    fn parse_scope(
        &self,
        text: &str,
        inherited: &TextStyle<F>,
    ) -> Result<Vec<StyledFragment<F>>, Error> {
        let mut scopes = Vec::new();
        let mut rest = text;
        while let Some((open, close)) = find_scope(rest) {
            scopes.push((&rest[..open], &rest[open + 1..close]));
            rest = &rest[close + 1..];
        }
        if scopes.is_empty() {
            return self.parse_styled(text, inherited, &self.default_style);
        }

        // Each scope depends on the text after it, so the chain is resolved from the end.
        let tail = self.parse_styled(rest, &self.default_style, &self.default_style)?;
        let mut trailing = self.first_style(&tail);
        let mut reversed: Vec<_> = tail.into_iter().rev().collect();
        for (index, (before, inner)) in scopes.into_iter().enumerate().rev() {
            let scope_style = if index == 0 {
                inherited
            } else {
                &self.default_style
            };
            let before = self.parse_styled(before, &trailing, &self.default_style)?;
            let inner = self.parse_styled(inner, scope_style, &trailing)?;
            trailing = self.first_style(&before);
            reversed.extend(inner.into_iter().rev());
            reversed.extend(before.into_iter().rev());
        }
        reversed.reverse();
        Ok(reversed)
    }

    /// Applies the `[...]` groups of `text`, which holds no complete `{...}` pair.
    ///
    /// Groups are peeled off from the end. The text before a group takes the resolved style and
    /// the text after it takes `revert` for the last group, or the default style for earlier ones.
    fn parse_styled(
        &self,
        text: &str,
        inherited: &TextStyle<F>,
        revert: &TextStyle<F>,
    ) -> Result<Vec<StyledFragment<F>>, Error> {
        let mut reverted = Vec::new();
        let mut text = text;
        let mut style = inherited.clone();
        let mut revert = revert;
        while let Some(block) = find_style_block(text) {
            let resolved = Annotation::parse(block.annotation)?.resolve(&style, &self.ctx)?;
            if !block.after.is_empty() {
                reverted.push(StyledFragment::with_style(block.after, revert.clone()));
            }
            text = block.before;
            style = resolved;
            revert = &self.default_style;
        }

        let mut fragments = Vec::with_capacity(reverted.len() + 1);
        fragments.push(StyledFragment::with_style(text, style));
        fragments.extend(reverted.into_iter().rev());
        Ok(fragments)
    }

    fn first_style(&self, fragments: &[StyledFragment<F>]) -> TextStyle<F> {
        fragments
            .first()
            .map_or_else(|| self.default_style.clone(), StyledFragment::style)
    }
}

fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", LINE_BREAK).replace('\r', LINE_BREAK))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits fragments at line breaks, inserting a line break fragment at each one.
///
/// Empty pieces are kept so that an empty line still carries a style.
fn split_line_breaks<F: Clone>(fragments: Vec<StyledFragment<F>>) -> Vec<StyledFragment<F>> {
    let mut out = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        if !fragment.text.contains(LINE_BREAK) {
            out.push(fragment);
            continue;
        }
        for (index, piece) in fragment.text.split(LINE_BREAK).enumerate() {
            if index > 0 {
                out.push(fragment.with_text(LINE_BREAK));
            }
            out.push(fragment.with_text(piece));
        }
    }
    out
}
