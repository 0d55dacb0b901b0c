//! HSL conversion matching the presentation renderer's arithmetic.
//!
//! Luminance transforms (`lumMod`, `lumOff`) operate in HSL space. The forward
//! conversion is the textbook one; the inverse differs from most libraries in
//! one detail: channels are rounded to nearest with **ties rounded down**.
//! White at 50% luminance therefore becomes `RGB(127, 127, 127)`, not 128,
//! which is what the renderer itself produces.

use crate::rgb::Rgb;

/// A color in hue/saturation/lightness form, every component in `0.0..=1.0`.
///
/// Hue is a fraction of the full circle rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

// ─── Forward ────────────────────────────────────────────────────────────────

/// Converts an [`Rgb`] value to HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.0) / 255.0;
    let g = f64::from(rgb.1) / 255.0;
    let b = f64::from(rgb.2) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: h / 6.0, s, l }
}

// ─── Inverse ────────────────────────────────────────────────────────────────

/// Converts HSL back to [`Rgb`], rounding ties down.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s.abs() < f64::EPSILON {
        let v = to_channel(l * 255.0);
        return Rgb(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0),
        to_channel(hue_to_rgb(p, q, h) * 255.0),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Rounds to the nearest integer, rounding exact `.5` ties down.
///
/// `ceil(x - 0.5)` leaves `2.5` at `2` while `2.6` still reaches `3`.
pub(crate) fn round_half_down(x: f64) -> f64 {
    (x - 0.5).ceil()
}

fn to_channel(x: f64) -> u8 {
    round_half_down(x).clamp(0.0, 255.0) as u8
}
