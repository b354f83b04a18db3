//! Accent color support for the gpui-component global theme.

use gpui::{App, Hsla};
use gpui_component::Theme;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ThemeConfig;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid accent color '{0}': expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(String);

/// An sRGB color with channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Parses `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(s: &str) -> Result<Rgba, ColorParseError> {
    let err = || ColorParseError(s.to_string());
    let hex = s.trim().trim_start_matches('#');
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(err());
    }

    let channel = |i: usize| -> Result<f32, ColorParseError> {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(|v| f32::from(v) / 255.0)
            .map_err(|_| err())
    };

    Ok(Rgba {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
        a: if hex.len() == 8 { channel(6)? } else { 1.0 },
    })
}

pub fn rgba_to_hsla(color: Rgba) -> Hsla {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return Hsla {
            h: 0.0,
            s: 0.0,
            l,
            a: color.a,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - color.r).abs() < f32::EPSILON {
        ((color.g - color.b) / d + if color.g < color.b { 6.0 } else { 0.0 }) / 6.0
    } else if (max - color.g).abs() < f32::EPSILON {
        ((color.b - color.r) / d + 2.0) / 6.0
    } else {
        ((color.r - color.g) / d + 4.0) / 6.0
    };

    Hsla {
        h,
        s,
        l,
        a: color.a,
    }
}

fn shifted(
    base: Hsla,
    amount: f32,
) -> Hsla {
    let shift = if base.l > 0.5 { -amount } else { amount };
    Hsla {
        l: (base.l + shift).clamp(0.0, 1.0),
        ..base
    }
}

fn hover_variant(base: Hsla) -> Hsla {
    shifted(base, 0.05)
}

fn active_variant(base: Hsla) -> Hsla {
    shifted(base, 0.10)
}

/// Applies the configured accent to the primary, ring and caret colors.
///
/// Leaves the stock theme untouched when no accent is configured or the value
/// does not parse.
pub fn apply_theme(
    config: &ThemeConfig,
    cx: &mut App,
) {
    let Some(accent) = config.accent.as_deref() else {
        debug!("No accent configured; using stock theme");
        return;
    };

    let accent = match parse_hex_color(accent) {
        Ok(color) => rgba_to_hsla(color),
        Err(error) => {
            warn!(%error, "Ignoring accent color");
            return;
        }
    };

    let colors = &mut Theme::global_mut(cx).colors;
    colors.primary = accent;
    colors.primary_hover = hover_variant(accent);
    colors.primary_active = active_variant(accent);
    colors.ring = accent;
    colors.caret = accent;
    debug!(?accent, "Accent color applied");
}
