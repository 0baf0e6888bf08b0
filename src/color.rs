//! Color engine for the shimmer wave.
//!
//! Pure functions that turn a base color into the symmetric brightness
//! ramp the animation sweeps across the text. All channel math is
//! integer-exact so rendered colors are byte-for-byte reproducible.

/// Fallback color used when a hex string cannot be parsed (#00D787).
///
/// Malformed input is silently defaulted rather than reported: the
/// shimmer is a visual decoration and must never abort its host.
pub const FALLBACK_RGB: (u8, u8, u8) = (0, 215, 135);

/// Parse a hex color string like `#FFC000` or `FFC000` into an RGB triple.
///
/// Accepts exactly six hex digits, with or without a leading `#`.
/// Anything else returns [`FALLBACK_RGB`].
pub fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return FALLBACK_RGB;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => (r, g, b),
        _ => FALLBACK_RGB,
    }
}

/// Format an RGB triple as an uppercase `#RRGGBB` string.
pub fn format_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Blend a single color channel toward white (255) by a percentage.
///
/// Uses truncating integer division so the output matches the reference
/// ramp exactly: `channel + (255 - channel) * percent / 100`.
pub fn lighten(value: u8, percent: u32) -> u8 {
    let value = value as u32;
    let result = value + (255 - value) * percent / 100;
    result.min(255) as u8
}

/// Build the symmetric wave ramp: base -> peak brightness -> base.
///
/// Produces `max(wave_width, 2)` colors. The midpoint is lightened by
/// `peak_lightness` percent toward white; the edges stay at the base
/// color, with a linear triangular ramp in between.
pub fn wave_ramp(base: (u8, u8, u8), wave_width: usize, peak_lightness: u8) -> Vec<(u8, u8, u8)> {
    let steps = wave_width.max(2);
    let mid = steps / 2;
    let peak = peak_lightness.min(100) as f64;

    let (r, g, b) = base;
    (0..steps)
        .map(|i| {
            let ratio = if i <= mid {
                if mid == 0 { 1.0 } else { i as f64 / mid as f64 }
            } else {
                (steps - 1 - i) as f64 / (steps - 1 - mid) as f64
            };
            let percent = (ratio * peak) as u32;
            (lighten(r, percent), lighten(g, percent), lighten(b, percent))
        })
        .collect()
}
