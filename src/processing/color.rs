// SPDX-License-Identifier: MPL-2.0
//! RGB <-> HSB conversions used by the contrast adjustment.
//!
//! The formulas follow the classic AWT `Color.RGBtoHSB`/`HSBtoRGB`
//! definitions, including their rounding, so contrast-adjusted pixels match
//! the reference editor bit for bit.

/// Converts an 8-bit RGB triple to hue/saturation/brightness, each in
/// `[0.0, 1.0]`.
#[must_use]
pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);

    let brightness = f32::from(cmax) / 255.0;
    let saturation = if cmax == 0 {
        0.0
    } else {
        f32::from(cmax - cmin) / f32::from(cmax)
    };

    let hue = if saturation == 0.0 {
        0.0
    } else {
        let span = f32::from(cmax - cmin);
        let redc = f32::from(cmax - r) / span;
        let greenc = f32::from(cmax - g) / span;
        let bluec = f32::from(cmax - b) / span;

        let raw = if r == cmax {
            bluec - greenc
        } else if g == cmax {
            2.0 + redc - bluec
        } else {
            4.0 + greenc - redc
        };
        let mut hue = raw / 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }
        hue
    };

    (hue, saturation, brightness)
}

/// Converts hue/saturation/brightness back to an 8-bit RGB triple.
///
/// `hue` wraps modulo 1.0; `saturation` and `brightness` are expected in
/// `[0.0, 1.0]`.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    if saturation == 0.0 {
        let v = (brightness * 255.0 + 0.5) as u8;
        return (v, v, v);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        _ => (brightness, p, q),
    };

    (
        (r * 255.0 + 0.5) as u8,
        (g * 255.0 + 0.5) as u8,
        (b * 255.0 + 0.5) as u8,
    )
}
