//! Color transform chains and the pipeline that applies them.
//!
//! Theme colors rarely appear bare. PowerPoint's "Accent 1, Darker 25%" is
//! stored as `accent1` plus `lumMod=75000`; "Lighter 40%" is `lumMod=60000`
//! with `lumOff=40000`. Values are thousandths of a percent, so `100000`
//! means 100%.
//!
//! # Pipeline order
//!
//! 1. `tint`: blend toward white in RGB space, floored
//! 2. `shade`: scale toward black in RGB space, floored
//! 3. `lumMod` then `lumOff`: adjust HSL lightness, clamped to `0.0..=1.0`
//!
//! Channels are clamped to `0..=255` after each stage. `satMod`, `satOff` and
//! `alpha` are carried for round trip but never applied.
//!
//! ```rust
//! use shapetext_color::{apply_transforms, ColorTransforms, Rgb};
//!
//! let darker = ColorTransforms::new().with_lum_mod(75000);
//! assert_eq!(apply_transforms(Rgb(0x44, 0x72, 0xC4), &darker), Rgb(0x2F, 0x55, 0x97));
//! ```

use serde::{Deserialize, Serialize};

use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::rgb::Rgb;

/// Denominator of every transform parameter (`100000` = 100%).
pub const TRANSFORM_SCALE: f64 = 100_000.0;

/// An ordered set of optional color modifiers.
///
/// Field names serialize with their DrawingML spelling (`lumMod`, `satOff`).
/// Unset fields are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTransforms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_mod: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_off: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat_mod: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sat_off: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<i32>,
}

impl ColorTransforms {
    /// Creates an empty transform set (the identity).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lum_mod(mut self, value: i32) -> Self {
        self.lum_mod = Some(value);
        self
    }

    pub fn with_lum_off(mut self, value: i32) -> Self {
        self.lum_off = Some(value);
        self
    }

    pub fn with_tint(mut self, value: i32) -> Self {
        self.tint = Some(value);
        self
    }

    pub fn with_shade(mut self, value: i32) -> Self {
        self.shade = Some(value);
        self
    }

    pub fn with_sat_mod(mut self, value: i32) -> Self {
        self.sat_mod = Some(value);
        self
    }

    pub fn with_sat_off(mut self, value: i32) -> Self {
        self.sat_off = Some(value);
        self
    }

    pub fn with_alpha(mut self, value: i32) -> Self {
        self.alpha = Some(value);
        self
    }

    /// Sets a modifier by its DrawingML element name.
    ///
    /// Returns `false` (leaving the set untouched) for names this set does not
    /// carry, such as `hueMod` or `gamma`.
    pub fn set_by_name(&mut self, name: &str, value: i32) -> bool {
        let slot = match name {
            "lumMod" => &mut self.lum_mod,
            "lumOff" => &mut self.lum_off,
            "tint" => &mut self.tint,
            "shade" => &mut self.shade,
            "satMod" => &mut self.sat_mod,
            "satOff" => &mut self.sat_off,
            "alpha" => &mut self.alpha,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// True when no modifier is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when at least one modifier that changes the RGB value is set.
    pub fn affects_rgb(&self) -> bool {
        self.tint.is_some() || self.shade.is_some() || self.lum_mod.is_some() || self.lum_off.is_some()
    }
}

/// Applies `transforms` to `base` in pipeline order.
///
/// With no RGB-affecting modifier set the input is returned untouched; in
/// particular no HSL round trip happens.
pub fn apply_transforms(base: Rgb, transforms: &ColorTransforms) -> Rgb {
    if !transforms.affects_rgb() {
        return base;
    }

    let mut rgb = base;

    if let Some(tint) = transforms.tint {
        let factor = 1.0 - f64::from(tint) / TRANSFORM_SCALE;
        rgb = map_channels(rgb, |c| (c + (255.0 - c) * factor).floor());
    }

    if let Some(shade) = transforms.shade {
        let factor = f64::from(shade) / TRANSFORM_SCALE;
        rgb = map_channels(rgb, |c| (c * factor).floor());
    }

    if transforms.lum_mod.is_some() || transforms.lum_off.is_some() {
        let mut hsl = rgb_to_hsl(rgb);
        if let Some(lum_mod) = transforms.lum_mod {
            hsl.l = (hsl.l * f64::from(lum_mod) / TRANSFORM_SCALE).clamp(0.0, 1.0);
        }
        if let Some(lum_off) = transforms.lum_off {
            hsl.l = (hsl.l + f64::from(lum_off) / TRANSFORM_SCALE).clamp(0.0, 1.0);
        }
        rgb = hsl_to_rgb(hsl);
    }

    rgb
}

fn map_channels(rgb: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let [r, g, b] = rgb.channels().map(|c| f(f64::from(c)).clamp(0.0, 255.0) as u8);
    Rgb(r, g, b)
}
