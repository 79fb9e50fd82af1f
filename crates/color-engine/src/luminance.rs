use crate::convert::{parse, Rgb};

/// Relative luminance of an sRGB color, gamma-corrected per channel.
pub fn relative_luminance(rgb: &Rgb) -> f64 {
    let linear = |value: u8| -> f64 {
        let channel = value as f64 / 255.0;
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * linear(rgb.r) + 0.7152 * linear(rgb.g) + 0.0722 * linear(rgb.b)
}

/// Whether light text should be rendered on top of this color.
///
/// The 0.5 luminance threshold is the engine's established behavior;
/// it intentionally differs from the WCAG contrast-ratio midpoint.
/// Unparseable input classifies as dark rather than failing, since this
/// only gates cosmetic text/background contrast.
pub fn is_dark(color: &str) -> bool {
    match parse(color) {
        Ok(rgb) => relative_luminance(&rgb) < 0.5,
        Err(err) => {
            log::warn!("could not classify `{}` for contrast: {}", color, err);
            true
        }
    }
}
