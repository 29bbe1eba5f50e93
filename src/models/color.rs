//! RGBA colors, CSS color parsing, and source-over compositing
//!
//! Comment colors arrive as raw CSS color strings chosen by the user's
//! palette. Parsing is deliberately forgiving in scope but strict in
//! outcome: a string we cannot parse yields `None`, and the caller drops
//! that comment from compositing instead of failing the whole overlay.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A color with 8-bit channels and a unit-interval alpha
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in [0.0, 1.0]
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black, the compositing fold seed
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0.0,
    };

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// This color with its alpha forced to fully opaque
    pub fn with_full_alpha(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Normal (source-over) alpha compositing: `self` painted over `dst`
    ///
    /// Straight (non-premultiplied) alpha: the output alpha is
    /// `a_s + a_d * (1 - a_s)` and each channel is the alpha-weighted
    /// average of source over destination.
    pub fn over(self, dst: Rgba) -> Rgba {
        let a_s = self.a.clamp(0.0, 1.0);
        let a_d = dst.a.clamp(0.0, 1.0);
        let a_out = a_s + a_d * (1.0 - a_s);
        if a_out <= 0.0 {
            return Rgba::TRANSPARENT;
        }
        let channel = |s: u8, d: u8| -> u8 {
            let v = (f32::from(s) * a_s + f32::from(d) * a_d * (1.0 - a_s)) / a_out;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: channel(self.r, dst.r),
            g: channel(self.g, dst.g),
            b: channel(self.b, dst.b),
            a: a_out,
        }
    }
}

/// Named colors the comment palette draws from (CSS basic + common extended)
static NAMED_COLORS: Lazy<HashMap<&'static str, Rgba>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("black", Rgba::opaque(0, 0, 0));
    m.insert("white", Rgba::opaque(255, 255, 255));
    m.insert("red", Rgba::opaque(255, 0, 0));
    m.insert("lime", Rgba::opaque(0, 255, 0));
    m.insert("blue", Rgba::opaque(0, 0, 255));
    m.insert("green", Rgba::opaque(0, 128, 0));
    m.insert("yellow", Rgba::opaque(255, 255, 0));
    m.insert("cyan", Rgba::opaque(0, 255, 255));
    m.insert("aqua", Rgba::opaque(0, 255, 255));
    m.insert("magenta", Rgba::opaque(255, 0, 255));
    m.insert("fuchsia", Rgba::opaque(255, 0, 255));
    m.insert("orange", Rgba::opaque(255, 165, 0));
    m.insert("purple", Rgba::opaque(128, 0, 128));
    m.insert("pink", Rgba::opaque(255, 192, 203));
    m.insert("teal", Rgba::opaque(0, 128, 128));
    m.insert("navy", Rgba::opaque(0, 0, 128));
    m.insert("maroon", Rgba::opaque(128, 0, 0));
    m.insert("olive", Rgba::opaque(128, 128, 0));
    m.insert("gray", Rgba::opaque(128, 128, 128));
    m.insert("grey", Rgba::opaque(128, 128, 128));
    m.insert("silver", Rgba::opaque(192, 192, 192));
    m.insert("gold", Rgba::opaque(255, 215, 0));
    m.insert("coral", Rgba::opaque(255, 127, 80));
    m.insert("salmon", Rgba::opaque(250, 128, 114));
    m.insert("indigo", Rgba::opaque(75, 0, 130));
    m.insert("violet", Rgba::opaque(238, 130, 238));
    m.insert("turquoise", Rgba::opaque(64, 224, 208));
    m.insert("crimson", Rgba::opaque(220, 20, 60));
    m.insert("lavender", Rgba::opaque(230, 230, 250));
    m.insert("skyblue", Rgba::opaque(135, 206, 235));
    m.insert("transparent", Rgba::TRANSPARENT);
    m
});

/// Parse a CSS color string into an [`Rgba`]
///
/// Supported forms: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
/// `rgb(r, g, b)`, `rgba(r, g, b, a)` (comma or space separated, alpha as
/// a float or percentage), and named colors. Returns `None` for anything
/// else.
pub fn parse_css_color(input: &str) -> Option<Rgba> {
    let s = input.trim().to_ascii_lowercase();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if let Some(body) = s
        .strip_prefix("rgba")
        .or_else(|| s.strip_prefix("rgb"))
        .and_then(|rest| rest.trim().strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(body);
    }
    NAMED_COLORS.get(s.as_str()).copied()
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        // #rgb / #rgba: each digit doubles
        3 | 4 => {
            let r = nibble(0)? * 17;
            let g = nibble(1)? * 17;
            let b = nibble(2)? * 17;
            let a = if hex.len() == 4 {
                f32::from(nibble(3)? * 17) / 255.0
            } else {
                1.0
            };
            Some(Rgba::new(r, g, b, a))
        }
        6 | 8 => {
            let r = byte(0)?;
            let g = byte(2)?;
            let b = byte(4)?;
            let a = if hex.len() == 8 {
                f32::from(byte(6)?) / 255.0
            } else {
                1.0
            };
            Some(Rgba::new(r, g, b, a))
        }
        _ => None,
    }
}

fn parse_rgb_args(body: &str) -> Option<Rgba> {
    // "r, g, b [, a]" or the space/slash syntax "r g b / a"
    let normalized = body.replace(['/', ','], " ");
    let parts: Vec<&str> = normalized.split_whitespace().collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        if let Some(pct) = p.strip_suffix('%') {
            let v: f32 = pct.parse().ok()?;
            Some((v / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8)
        } else {
            let v: f32 = p.parse().ok()?;
            Some(v.round().clamp(0.0, 255.0) as u8)
        }
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if parts.len() == 4 {
        let p = parts[3];
        if let Some(pct) = p.strip_suffix('%') {
            let v: f32 = pct.parse().ok()?;
            (v / 100.0).clamp(0.0, 1.0)
        } else {
            let v: f32 = p.parse().ok()?;
            v.clamp(0.0, 1.0)
        }
    } else {
        1.0
    };
    Some(Rgba::new(r, g, b, a))
}
