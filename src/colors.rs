//! Color space helpers and nominal palette colors.
//!
//! Single-color LEDs only ever show one hue. The functions here map an
//! [`LedColor`] to an approximate `palette::Srgb` so that host-side tools and
//! simulators can render what a channel looks like.

use crate::types::LedColor;
use palette::{FromColor, Hsv, Srgb};

/// Creates an RGB color from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgb {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::from_color(hsv)
}

/// Creates an RGB color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Srgb {
    hsv(hue, 1.0, 1.0)
}

/// Approximate visible color of a lit LED.
///
/// Returns `None` for colors with no visible rendering (`Unspecified`, `Infrared`).
pub fn preview(color: LedColor) -> Option<Srgb> {
    match color {
        LedColor::Unspecified | LedColor::Infrared => None,
        LedColor::Red => Some(hue(0.0)),
        LedColor::Orange => Some(hue(30.0)),
        LedColor::Yellow => Some(hue(60.0)),
        LedColor::Green => Some(hue(120.0)),
        LedColor::Aqua => Some(hue(180.0)),
        LedColor::Blue => Some(hue(240.0)),
        LedColor::Purple => Some(hue(285.0)),
        // Near-UV LEDs show a dim violet.
        LedColor::Ultraviolet => Some(hsv(270.0, 1.0, 0.5)),
        LedColor::White => Some(Srgb::new(1.0, 1.0, 1.0)),
    }
}
