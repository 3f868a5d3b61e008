// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A trailing `[...]` group split out of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StyleBlock<'t> {
    /// Text before the `[`; this is what the annotation styles.
    pub(crate) before: &'t str,
    /// The annotation between the brackets.
    pub(crate) annotation: &'t str,
    /// Text after the `]`; this reverts to the enclosing default style.
    pub(crate) after: &'t str,
}

/// Finds the style group formed by the last `[` and the last `]` of `text`.
///
/// There is no group when either bracket is missing or the last `[` comes after the last `]`.
pub(crate) fn find_style_block(text: &str) -> Option<StyleBlock<'_>> {
    let open = text.rfind('[')?;
    let close = text.rfind(']')?;
    if open > close {
        return None;
    }
    Some(StyleBlock {
        before: &text[..open],
        annotation: &text[open + 1..close],
        after: &text[close + 1..],
    })
}

/// Finds the first complete `{...}` pair: the first `}` and the closest `{` before it.
///
/// Returns the byte indices of both braces.
pub(crate) fn find_scope(text: &str) -> Option<(usize, usize)> {
    let mut open = None;
    for (index, byte) in text.bytes().enumerate() {
        match byte {
            b'{' => open = Some(index),
            b'}' => {
                if let Some(open) = open {
                    return Some((open, index));
                }
            }
            _ => {}
        }
    }
    None
}
