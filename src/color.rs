use crate::color_space::ColorSpace;

/// Returns the hex string (`#RRGGBB`) for a swatch’s colour space
/// and channel values, as stored in the ACO file.
pub fn hex_value(color_space: u16, w: u16, x: u16, y: u16, z: u16) -> String {
    let (red, green, blue) = match ColorSpace::from_value(color_space) {
        Some(ColorSpace::Rgb) => rgb(w, x, y),
        Some(ColorSpace::Hsb) => hsb(w, x, y),
        Some(ColorSpace::Cmyk) => cmyk(w, x, y, z),
        Some(ColorSpace::Lab) => lab(w, x, y),
        Some(ColorSpace::Grayscale) => grayscale(w),
        None => (0, 0, 0),
    };
    format!("#{:02X}{:02X}{:02X}", red, green, blue)
}

/// Converts RGB channels, each in the range 0...65535.
fn rgb(w: u16, x: u16, y: u16) -> (u8, u8, u8) {
    (component(w), component(x), component(y))
}

/// Converts a hue, saturation and brightness, each in the range 0...65535.
/// The hue covers the full range, so 65536 would be 360°.
fn hsb(w: u16, x: u16, y: u16) -> (u8, u8, u8) {
    let hue = w as f64 / 65536.0 * 360.0;
    let saturation = x as f64 / 65535.0;
    let brightness = y as f64 / 65535.0;

    let chroma = brightness * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let offset = brightness - chroma;

    let (red, green, blue) = match hue {
        h if h < 60.0 => (chroma, secondary, 0.0),
        h if h < 120.0 => (secondary, chroma, 0.0),
        h if h < 180.0 => (0.0, chroma, secondary),
        h if h < 240.0 => (0.0, secondary, chroma),
        h if h < 300.0 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    (
        quantize(red + offset),
        quantize(green + offset),
        quantize(blue + offset),
    )
}

/// Converts CMYK inks. The file stores each ink as its complement,
/// so 0 is full ink and 65535 is no ink.
fn cmyk(w: u16, x: u16, y: u16, z: u16) -> (u8, u8, u8) {
    let cyan = 1.0 - w as f64 / 65535.0;
    let magenta = 1.0 - x as f64 / 65535.0;
    let yellow = 1.0 - y as f64 / 65535.0;
    let key = 1.0 - z as f64 / 65535.0;

    (
        quantize((1.0 - cyan) * (1.0 - key)),
        quantize((1.0 - magenta) * (1.0 - key)),
        quantize((1.0 - yellow) * (1.0 - key)),
    )
}

/// Converts Lab channels. Lightness is 0...10000 for 0...100;
/// a and b are signed values at 100 times their natural range.
fn lab(w: u16, x: u16, y: u16) -> (u8, u8, u8) {
    let lightness = w as f64 / 100.0;
    let a = x as i16 as f64 / 100.0;
    let b = y as i16 as f64 / 100.0;

    // Lab to XYZ, with a D65 white point.
    let fy = (lightness + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xyz_x = 0.95047 * finv(fx);
    let xyz_y = 1.0 * finv(fy);
    let xyz_z = 1.08883 * finv(fz);

    // XYZ to linear sRGB.
    let red = 3.2404542 * xyz_x - 1.5371385 * xyz_y - 0.4985314 * xyz_z;
    let green = -0.9692660 * xyz_x + 1.8760108 * xyz_y + 0.0415560 * xyz_z;
    let blue = 0.0556434 * xyz_x - 0.2040259 * xyz_y + 1.0572252 * xyz_z;

    (
        quantize(gamma(red)),
        quantize(gamma(green)),
        quantize(gamma(blue)),
    )
}

/// Converts a grey value in the range 0...10000, 10000 being white.
fn grayscale(w: u16) -> (u8, u8, u8) {
    let value = quantize(w.min(10_000) as f64 / 10_000.0);
    (value, value, value)
}

/// Inverts the Lab transfer function.
fn finv(t: f64) -> f64 {
    if t > 6.0 / 29.0 {
        t * t * t
    } else {
        3.0 * (6.0 / 29.0) * (6.0 / 29.0) * (t - 4.0 / 29.0)
    }
}

/// Applies the sRGB transfer curve to a linear channel value.
fn gamma(linear: f64) -> f64 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Scales a 16 bit channel down to 8 bits.
fn component(value: u16) -> u8 {
    quantize(value as f64 / 65535.0)
}

/// Converts a unit-range channel value to 8 bits.
fn quantize(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
