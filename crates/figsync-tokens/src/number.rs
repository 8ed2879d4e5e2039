//! Numeric and color rendering helpers.
//!
//! Token values are stored as the strings that end up in CSS, so the
//! formatting here decides what the snapshot and the stylesheet look like.

/// Root font size used for px → rem conversion.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Format a number, removing `.0` for integers.
///
/// Non-integers use the shortest decimal that round-trips, so `0.875`
/// stays `0.875` and `1.0 / 3.0` renders as `0.3333333333333333`.
/// Integers outside the `i64` range keep every digit.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `<n>px`
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Convert a pixel size to `<n>rem` against [`BASE_FONT_SIZE`].
pub fn px_to_rem(value: f64) -> String {
    format!("{}rem", format_number(value / BASE_FONT_SIZE))
}

/// Render normalized RGBA channels (each in `[0, 1]`) as a hex color.
///
/// An alpha of exactly `1.0` gives `#rrggbb`; anything else appends the alpha
/// byte. Channels are scaled by 255, rounded half away from zero and clamped.
pub fn rgba_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let mut hex = format!("#{}{}{}", channel(r), channel(g), channel(b));
    if a != 1.0 {
        hex.push_str(&channel(a));
    }
    hex
}

fn channel(value: f64) -> String {
    let scaled = (value * 255.0).round().clamp(0.0, 255.0);
    // NaN survives clamp and casts to 0.
    format!("{:02x}", scaled as u8)
}
