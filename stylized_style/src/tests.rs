// Copyright 2025 the Stylized Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;

use peniko::Color;

use crate::{
    Annotation, ColorLookup, ErrorKind, FontLoader, NAMED_COLORS, Palette, ResolveContext,
    StyleDeclaration, StyleKey, TextStyle, resolve_annotation,
};

const BLUE: Color = Color::from_rgba8(0, 0, 255, 255);

fn blue_style() -> TextStyle<&'static str> {
    TextStyle::new(Some("body"), BLUE)
}

fn rgba(color: Color) -> (u8, u8, u8, u8) {
    let c = color.to_rgba8();
    (c.r, c.g, c.b, c.a)
}

fn fonts(name: &str) -> Option<&'static str> {
    match name {
        "Title" => Some("title"),
        "Mono" => Some("mono"),
        _ => None,
    }
}

#[test]
fn keys_match_case_insensitively() {
    assert_eq!(StyleKey::parse("COLOR"), Some(StyleKey::Color));
    assert_eq!(StyleKey::parse("Font"), Some(StyleKey::Font));
    assert_eq!(StyleKey::parse("opacity"), Some(StyleKey::Opacity));
    assert_eq!(StyleKey::parse("size"), None);
    assert_eq!(StyleKey::parse(""), None);
}

#[test]
fn whitespace_is_stripped_and_unknown_tokens_ignored() {
    let annotation = Annotation::parse(" col or = dark red ,, size=3, bold, font = Mono ").unwrap();
    assert_eq!(
        annotation.declarations(),
        &[
            StyleDeclaration::Color("darkred".into()),
            StyleDeclaration::Font("Mono".into()),
        ],
        "whitespace inside tokens is removed as well"
    );
}

#[test]
fn tokens_split_at_last_equals_sign() {
    let annotation = Annotation::parse("color=red=blue").unwrap();
    assert!(
        annotation.is_empty(),
        "key `color=red` is not recognized, so nothing is declared"
    );
}

#[test]
fn invalid_opacity_is_an_error() {
    for literal in ["half", "", "1.5", "-0.1", "NaN"] {
        let list = alloc::format!("opacity={literal}");
        let err = Annotation::parse(&list).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOpacity, "literal {literal:?}");
        assert_eq!(err.value(), literal);
    }
    assert_eq!(
        Annotation::parse("opacity=1").unwrap().declarations(),
        &[StyleDeclaration::Opacity(1.0)]
    );
}

#[test]
fn empty_list_resolves_to_inherited() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);
    let inherited = blue_style();
    assert_eq!(resolve_annotation("", &inherited, &ctx).unwrap(), inherited);
    assert_eq!(
        resolve_annotation("weight=700", &inherited, &ctx).unwrap(),
        inherited
    );
}

#[test]
fn color_keeps_inherited_alpha() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);
    let inherited = TextStyle::new(Some("body"), BLUE.with_alpha(0.5));

    let style = resolve_annotation("color=RED", &inherited, &ctx).unwrap();
    let (r, g, b, a) = rgba(style.color());
    assert_eq!((r, g, b), (255, 0, 0));
    assert!(
        a.abs_diff(127) <= 1,
        "alpha {a} should come from the inherited color"
    );
    assert_eq!(style.font(), Some(&"body"));
}

#[test]
fn opacity_composes_with_color() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);

    for list in ["color=red,opacity=0.5", "opacity=0.5,color=red"] {
        let style = resolve_annotation(list, &blue_style(), &ctx).unwrap();
        let (r, g, b, a) = rgba(style.color());
        assert_eq!((r, g, b), (255, 0, 0), "no blue leaks into {list:?}");
        assert!(a.abs_diff(127) <= 1, "alpha {a} for {list:?}");
    }
}

#[test]
fn later_declarations_win() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);
    let style = resolve_annotation("color=red,color=lime", &blue_style(), &ctx).unwrap();
    assert_eq!(rgba(style.color()), (0, 255, 0, 255));
}

#[test]
fn unknown_color_is_an_error() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);

    let err = resolve_annotation("color=nonexistent", &blue_style(), &ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownColor);
    assert_eq!(err.value(), "nonexistent");

    let err = resolve_annotation("color=", &blue_style(), &ctx).unwrap_err();
    assert_eq!(
        err.kind(),
        ErrorKind::UnknownColor,
        "an empty name names no color"
    );
}

#[test]
fn font_without_loader_keeps_inherited_font() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);
    let style = resolve_annotation("font=Title", &blue_style(), &ctx).unwrap();
    assert_eq!(style.font(), Some(&"body"));
}

#[test]
fn font_with_loader() {
    let palette = Palette::new();
    let loader: &dyn FontLoader<&'static str> = &fonts;
    let ctx = ResolveContext::new(&palette).with_font_loader(loader);

    let style = resolve_annotation("font=Title", &blue_style(), &ctx).unwrap();
    assert_eq!(style.font(), Some(&"title"));
    assert_eq!(style.color(), BLUE);

    let err = resolve_annotation("font=Missing", &blue_style(), &ctx).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownFont);
}

#[test]
fn resolution_does_not_touch_the_inherited_style() {
    let palette = Palette::new();
    let ctx = ResolveContext::new(&palette);
    let inherited = blue_style();
    let _ = resolve_annotation("color=red,opacity=0", &inherited, &ctx).unwrap();
    assert_eq!(inherited, blue_style());
}

#[test]
fn palette_is_case_insensitive_and_extensible() {
    let mut palette = Palette::new();
    assert_eq!(palette.len(), NAMED_COLORS.len());
    assert_eq!(
        palette.get("CornflowerBlue"),
        Some(Color::from_rgba8(0x64, 0x95, 0xed, 0xff))
    );
    assert_eq!(palette.get("transparent").map(rgba), Some((0, 0, 0, 0)));
    assert!(!palette.contains("brand"));

    let brand = Color::from_rgba8(0x12, 0x34, 0x56, 0xff);
    assert_eq!(palette.insert("Brand", brand), None);
    assert_eq!(palette.get("BRAND"), Some(brand));

    let empty = Palette::empty();
    assert!(empty.is_empty());
    assert_eq!(empty.get("red"), None);
}

#[test]
fn named_colors_are_lowercase_and_unique() {
    let mut names: Vec<&str> = NAMED_COLORS.iter().map(|(name, _)| *name).collect();
    assert!(
        names.iter().all(|name| name.chars().all(|c| c.is_ascii_lowercase()))
    );
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), NAMED_COLORS.len(), "duplicate color names");
}

#[test]
fn error_messages_name_the_value() {
    let err = Annotation::parse("opacity=lots").unwrap_err();
    let message: Box<str> = alloc::format!("{err}").into();
    assert!(message.contains("\"lots\""), "{message}");
}

#[test]
fn annotation_from_str_and_declarations() {
    let parsed: Annotation = "color=red,opacity=0.5".parse().unwrap();
    let built = Annotation::from_declarations([
        StyleDeclaration::Color("red".into()),
        StyleDeclaration::Opacity(0.5),
    ]);
    assert_eq!(parsed, built);

    let keys: Vec<StyleKey> = parsed
        .declarations()
        .iter()
        .map(StyleDeclaration::key)
        .collect();
    assert_eq!(keys, [StyleKey::Color, StyleKey::Opacity]);

    let mut pushed = Annotation::new();
    pushed.push(StyleDeclaration::Font("Mono".into()));
    assert_eq!(pushed.declarations()[0].key(), StyleKey::Font);
    assert_eq!(pushed.declarations()[0].key().name(), "font");
}

#[test]
fn resolve_context_exposes_capabilities() {
    let palette = Palette::new();
    let ctx = ResolveContext::<&'static str>::new(&palette);
    assert_eq!(
        ctx.colors().lookup_color("RED"),
        Some(Color::from_rgba8(255, 0, 0, 255))
    );
    assert!(ctx.font_loader().is_none());

    let loader: &dyn FontLoader<&'static str> = &fonts;
    let ctx = ctx.with_font_loader(loader);
    let loaded = ctx.font_loader().and_then(|loader| loader.load_font("Mono"));
    assert_eq!(loaded, Some("mono"));
}
