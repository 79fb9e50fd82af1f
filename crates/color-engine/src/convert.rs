use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

static INTEGERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

static HSL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsla?\(\s*(-?\d+)(?:deg)?\s*,\s*(\d+)\s*%?\s*,\s*(\d+)\s*%?").unwrap()
});

/// The canonical pivot representation: 8-bit channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// The 6-digit, uppercase, zero-padded hex form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in [0, 360), saturation and lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
}

impl Hsl {
    /// Normalizes the hue into [0, 360) and clamps saturation and
    /// lightness to [0, 100].
    pub fn new(h: i32, s: i32, l: i32) -> Self {
        Hsl {
            h: h.rem_euclid(360) as u16,
            s: s.clamp(0, 100) as u8,
            l: l.clamp(0, 100) as u8,
        }
    }

    pub fn h(&self) -> u16 {
        self.h
    }

    pub fn s(&self) -> u8 {
        self.s
    }

    pub fn l(&self) -> u8 {
        self.l
    }

    /// Rotates the hue by `degrees`, wrapping around the color wheel.
    pub fn rotate(&self, degrees: i32) -> Self {
        Self::new(self.h as i32 + degrees, self.s as i32, self.l as i32)
    }

    pub fn with_saturation(&self, s: i32) -> Self {
        Self::new(self.h as i32, s, self.l as i32)
    }

    pub fn with_lightness(&self, l: i32) -> Self {
        Self::new(self.h as i32, self.s as i32, l)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Resolves any supported textual color to the RGB pivot.
///
/// Accepts 3- and 6-digit hex, `rgb(...)`/`rgba(...)` (alpha is
/// stripped), `hsl(...)`/`hsla(...)`, and CSS keywords. Keywords may
/// contain stray whitespace or hyphens (`light blue`, `light-blue`).
pub fn parse(input: &str) -> Result<Rgb> {
    let text = input.trim();

    if text.is_empty() {
        return Err(Error::InvalidColorFormat(input.to_string()));
    }

    if let Some(digits) = text.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| Error::InvalidColorFormat(input.to_string()));
    }

    if text.starts_with("rgb") {
        return parse_rgb_channels(text)
            .ok_or_else(|| Error::InvalidColorFormat(input.to_string()));
    }

    if text.starts_with("hsl") {
        return parse_hsl_literal(text)
            .map(|hsl| hsl_to_rgb(&hsl))
            .ok_or_else(|| Error::InvalidColorFormat(input.to_string()));
    }

    // Keywords and any other CSS-legal syntax.
    let color = csscolorparser::parse(&squash(text))
        .map_err(|_| Error::InvalidColorFormat(input.to_string()))?;
    let [r, g, b, _] = color.to_rgba8();

    Ok(Rgb { r, g, b })
}

/// Returns the normalized keyword when the literal is a known CSS color
/// name. There is no reverse lookup: only literals originally written as
/// names ever carry one.
pub fn named(input: &str) -> Option<String> {
    let keyword = squash(input.trim());

    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    csscolorparser::parse(&keyword).ok().map(|_| keyword)
}

pub fn to_rgb(input: &str) -> Result<String> {
    Ok(parse(input)?.to_string())
}

pub fn to_rgba(input: &str, alpha: f64) -> Result<String> {
    let rgb = parse(input)?;

    Ok(format!(
        "rgba({}, {}, {}, {})",
        rgb.r,
        rgb.g,
        rgb.b,
        format_alpha(alpha)
    ))
}

/// Always the 6-digit, uppercase, zero-padded form, regardless of how
/// the input was written.
pub fn to_hex(input: &str) -> Result<String> {
    Ok(parse(input)?.hex())
}

pub fn to_hsl(input: &str) -> Result<String> {
    Ok(rgb_to_hsl(&parse(input)?).to_string())
}

pub fn to_hsla(input: &str, alpha: f64) -> Result<String> {
    let hsl = rgb_to_hsl(&parse(input)?);

    Ok(format!(
        "hsla({}, {}%, {}%, {})",
        hsl.h,
        hsl.s,
        hsl.l,
        format_alpha(alpha)
    ))
}

/// Standard chroma/hue-sector conversion, rounding each channel to the
/// nearest integer.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let h = hsl.h as f64;
    let s = hsl.s as f64 / 100.0;
    let l = hsl.l as f64 / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (c, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, c, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, c, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, c),
        h if (240.0..300.0).contains(&h) => (x, 0.0, c),
        h if (300.0..360.0).contains(&h) => (c, 0.0, x),
        // Numerical edge at exactly 360 falls back to the first sector.
        _ => (c, x, 0.0),
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    let (h, s) = if delta == 0.0 {
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let sextant = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        // A sextant of 5.99… can round up to a full turn.
        ((sextant * 60.0).round(), s)
    };

    Hsl::new(
        h as i32,
        (s * 100.0).round() as i32,
        (l * 100.0).round() as i32,
    )
}

fn parse_hex(digits: &str) -> Option<Rgb> {
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    Some(Rgb {
        r: u8::from_str_radix(&expanded[0..2], 16).ok()?,
        g: u8::from_str_radix(&expanded[2..4], 16).ok()?,
        b: u8::from_str_radix(&expanded[4..6], 16).ok()?,
    })
}

fn parse_rgb_channels(text: &str) -> Option<Rgb> {
    let channels: Vec<u8> = INTEGERS
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .take(3)
        .map(|v| v.min(255) as u8)
        .collect();

    if channels.len() < 3 {
        return None;
    }

    Some(Rgb {
        r: channels[0],
        g: channels[1],
        b: channels[2],
    })
}

fn parse_hsl_literal(text: &str) -> Option<Hsl> {
    let captures = HSL_LITERAL.captures(text)?;

    let h = captures[1].parse::<i32>().ok()?;
    let s = captures[2].parse::<i32>().ok()?;
    let l = captures[3].parse::<i32>().ok()?;

    Some(Hsl::new(h, s, l))
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

fn format_alpha(alpha: f64) -> String {
    if alpha.fract() == 0.0 {
        format!("{}", alpha as i64)
    } else {
        alpha.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_full_hex() {
        assert_eq!(parse("#FF0000"), Ok(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(to_rgb("#ff8000").unwrap(), "rgb(255, 128, 0)");
    }

    #[test]
    fn expands_shorthand_hex() {
        assert_eq!(parse("#f80"), Ok(Rgb { r: 255, g: 136, b: 0 }));
        assert_eq!(to_hex("#f80").unwrap(), "#FF8800");
    }

    #[test]
    fn strips_alpha_from_rgba() {
        assert_eq!(to_rgb("rgba(10, 20, 30, 0.5)").unwrap(), "rgb(10, 20, 30)");
    }

    #[test]
    fn clamps_oversized_rgb_channels() {
        assert_eq!(to_rgb("rgb(300, 0, 0)").unwrap(), "rgb(255, 0, 0)");
    }

    #[test]
    fn resolves_named_colors() {
        assert_eq!(to_rgb("red").unwrap(), "rgb(255, 0, 0)");
        assert_eq!(to_rgb("rebeccapurple").unwrap(), "rgb(102, 51, 153)");
    }

    #[test]
    fn squashes_spaced_and_hyphenated_keywords() {
        assert_eq!(parse("light blue").unwrap(), parse("lightblue").unwrap());
        assert_eq!(parse("light-blue").unwrap(), parse("lightblue").unwrap());
    }

    #[test]
    fn named_recognizes_keywords_only() {
        assert_eq!(named("Light Blue"), Some("lightblue".to_string()));
        assert_eq!(named("#ff0000"), None);
        assert_eq!(named("notacolor"), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse(""), Err(Error::InvalidColorFormat(_))));
        assert!(matches!(parse("#12345"), Err(Error::InvalidColorFormat(_))));
        assert!(matches!(parse("#GGGGGG"), Err(Error::InvalidColorFormat(_))));
        assert!(matches!(
            parse("rgb(1, 2)"),
            Err(Error::InvalidColorFormat(_))
        ));
        assert!(matches!(
            parse("hsl(banana)"),
            Err(Error::InvalidColorFormat(_))
        ));
    }

    #[test]
    fn converts_hsl_literals_through_the_sector_table() {
        assert_eq!(to_rgb("hsl(0, 100%, 50%)").unwrap(), "rgb(255, 0, 0)");
        assert_eq!(to_rgb("hsl(120, 100%, 50%)").unwrap(), "rgb(0, 255, 0)");
        assert_eq!(to_rgb("hsl(240, 100%, 50%)").unwrap(), "rgb(0, 0, 255)");
        assert_eq!(to_rgb("hsl(60, 100%, 25%)").unwrap(), "rgb(128, 128, 0)");
        assert_eq!(to_rgb("hsl(0, 0%, 100%)").unwrap(), "rgb(255, 255, 255)");
    }

    #[test]
    fn normalizes_out_of_range_hues() {
        assert_eq!(to_rgb("hsl(360, 100%, 50%)").unwrap(), "rgb(255, 0, 0)");
        assert_eq!(to_rgb("hsl(480, 100%, 50%)").unwrap(), "rgb(0, 255, 0)");
        assert_eq!(to_rgb("hsl(-120, 100%, 50%)").unwrap(), "rgb(0, 0, 255)");
    }

    #[test]
    fn hsl_output_matches_reference_values() {
        assert_eq!(to_hsl("#FF0000").unwrap(), "hsl(0, 100%, 50%)");
        assert_eq!(to_hex("hsl(0, 100%, 50%)").unwrap(), "#FF0000");
        assert_eq!(to_hsl("rgb(0, 0, 0)").unwrap(), "hsl(0, 0%, 0%)");
        assert_eq!(to_hsl("rgb(40, 80, 120)").unwrap(), "hsl(210, 50%, 31%)");
    }

    #[test]
    fn synthesized_alpha_renders_without_decimal_point() {
        assert_eq!(
            to_rgba("rgb(10, 20, 30)", 1.0).unwrap(),
            "rgba(10, 20, 30, 1)"
        );
        assert_eq!(
            to_hsla("#FF0000", 1.0).unwrap(),
            "hsla(0, 100%, 50%, 1)"
        );
        assert_eq!(
            to_rgba("rgb(10, 20, 30)", 0.5).unwrap(),
            "rgba(10, 20, 30, 0.5)"
        );
    }

    #[test]
    fn hex_round_trips_through_rgb() {
        for hex in ["#000000", "#FFFFFF", "#0A141E", "#ABCDEF", "#7F0132"] {
            assert_eq!(to_hex(&to_rgb(hex).unwrap()).unwrap(), hex);
        }
    }

    #[test]
    fn canonicalization_is_idempotent() {
        for input in ["#ABCDEF", "rgb(1, 2, 3)", "hsl(200, 50%, 40%)", "teal"] {
            let once = to_rgb(input).unwrap();
            assert_eq!(to_rgb(&once).unwrap(), once);
        }
    }

    #[test]
    fn hsl_components_stay_in_range_around_the_wheel() {
        for r in (0..=255).step_by(51) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let hsl = rgb_to_hsl(&Rgb { r, g, b });
                    assert!(hsl.h() < 360);
                    assert!(hsl.s() <= 100);
                    assert!(hsl.l() <= 100);
                }
            }
        }
    }

    #[test]
    fn hue_rotation_wraps() {
        let hsl = Hsl::new(350, 50, 50);
        assert_eq!(hsl.rotate(30).h(), 20);
        assert_eq!(hsl.rotate(-360).h(), 350);
        assert_eq!(Hsl::new(-30, 50, 50).h(), 330);
    }

    #[test]
    fn saturation_and_lightness_adjustments_clamp() {
        let hsl = Hsl::new(10, 95, 5);
        assert_eq!(hsl.with_saturation(130).s(), 100);
        assert_eq!(hsl.with_lightness(-20).l(), 0);
    }
}
