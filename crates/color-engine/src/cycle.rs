use std::fmt;

use crate::convert;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Rgb,
    Rgba,
    Hex,
    Hsl,
    Hsla,
    Named,
}

impl ColorFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
            ColorFormat::Named => "named",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed format rotation for one highlighted color instance.
///
/// The reachable formats are decided once, from the literal as it was
/// first encountered: literals written with an alpha channel rotate
/// through the alpha-carrying forms, and literals written as CSS
/// keywords keep a `named` slot that renders the captured keyword
/// verbatim. The rotation never changes for the instance's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatCycle {
    formats: Vec<ColorFormat>,
    initial: ColorFormat,
    original_name: Option<String>,
}

impl FormatCycle {
    pub fn new(literal: &str) -> Self {
        let text = literal.trim();
        let lower = text.to_ascii_lowercase();

        let transparent = lower.starts_with("rgba(") || lower.starts_with("hsla(");
        let original_name = convert::named(text);

        let mut formats = if transparent {
            vec![
                ColorFormat::Rgb,
                ColorFormat::Rgba,
                ColorFormat::Hex,
                ColorFormat::Hsl,
                ColorFormat::Hsla,
            ]
        } else {
            vec![ColorFormat::Rgb, ColorFormat::Hex, ColorFormat::Hsl]
        };

        if original_name.is_some() {
            formats.push(ColorFormat::Named);
        }

        let initial = if original_name.is_some() {
            ColorFormat::Named
        } else if lower.starts_with('#') {
            ColorFormat::Hex
        } else if lower.starts_with("rgba(") {
            ColorFormat::Rgba
        } else if lower.starts_with("rgb") {
            ColorFormat::Rgb
        } else if lower.starts_with("hsla(") {
            ColorFormat::Hsla
        } else {
            ColorFormat::Hsl
        };

        FormatCycle {
            formats,
            initial,
            original_name,
        }
    }

    pub fn formats(&self) -> &[ColorFormat] {
        &self.formats
    }

    /// The format the literal was originally written in.
    pub fn initial_format(&self) -> ColorFormat {
        self.initial
    }

    pub fn original_name(&self) -> Option<&str> {
        self.original_name.as_deref()
    }

    /// Steps to the next format in the rotation and renders the color in
    /// it. The rotation is cyclic; there is no terminal state.
    pub fn advance(
        &self,
        current_color: &str,
        current_format: ColorFormat,
    ) -> Result<(String, ColorFormat)> {
        let index = self
            .formats
            .iter()
            .position(|format| *format == current_format)
            .ok_or_else(|| Error::UnsupportedScheme(current_format.to_string()))?;

        let next = self.formats[(index + 1) % self.formats.len()];

        let rendered = match next {
            ColorFormat::Rgb => convert::to_rgb(current_color)?,
            ColorFormat::Rgba => convert::to_rgba(current_color, 1.0)?,
            ColorFormat::Hex => convert::to_hex(current_color)?,
            ColorFormat::Hsl => convert::to_hsl(current_color)?,
            ColorFormat::Hsla => convert::to_hsla(current_color, 1.0)?,
            ColorFormat::Named => self
                .original_name
                .clone()
                .ok_or_else(|| Error::UnsupportedScheme(next.to_string()))?,
        };

        Ok((rendered, next))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opaque_literals_rotate_through_three_formats() {
        let cycle = FormatCycle::new("#FF8800");

        assert_eq!(
            cycle.formats(),
            &[ColorFormat::Rgb, ColorFormat::Hex, ColorFormat::Hsl]
        );
        assert_eq!(cycle.initial_format(), ColorFormat::Hex);
    }

    #[test]
    fn transparent_literals_rotate_through_five_formats() {
        let cycle = FormatCycle::new("rgba(10, 20, 30, 0.5)");

        assert_eq!(
            cycle.formats(),
            &[
                ColorFormat::Rgb,
                ColorFormat::Rgba,
                ColorFormat::Hex,
                ColorFormat::Hsl,
                ColorFormat::Hsla,
            ]
        );
        assert_eq!(cycle.initial_format(), ColorFormat::Rgba);
    }

    #[test]
    fn named_literals_gain_a_named_slot() {
        let cycle = FormatCycle::new("rebeccapurple");

        assert_eq!(
            cycle.formats(),
            &[
                ColorFormat::Rgb,
                ColorFormat::Hex,
                ColorFormat::Hsl,
                ColorFormat::Named,
            ]
        );
        assert_eq!(cycle.initial_format(), ColorFormat::Named);
        assert_eq!(cycle.original_name(), Some("rebeccapurple"));
    }

    #[test]
    fn advance_steps_to_the_next_format() {
        let cycle = FormatCycle::new("#FF0000");

        let (color, format) = cycle.advance("rgb(255, 0, 0)", ColorFormat::Rgb).unwrap();
        assert_eq!(color, "#FF0000");
        assert_eq!(format, ColorFormat::Hex);

        let (color, format) = cycle.advance(&color, format).unwrap();
        assert_eq!(color, "hsl(0, 100%, 50%)");
        assert_eq!(format, ColorFormat::Hsl);

        let (color, format) = cycle.advance(&color, format).unwrap();
        assert_eq!(color, "rgb(255, 0, 0)");
        assert_eq!(format, ColorFormat::Rgb);
    }

    #[test]
    fn full_rotation_returns_to_the_original_format_and_color() {
        let cycle = FormatCycle::new("light blue");
        let steps = cycle.formats().len();

        let mut color = "lightblue".to_string();
        let mut format = cycle.initial_format();

        for _ in 0..steps {
            let (next_color, next_format) = cycle.advance(&color, format).unwrap();
            color = next_color;
            format = next_format;
        }

        assert_eq!(format, cycle.initial_format());
        assert_eq!(color, "lightblue");
    }

    #[test]
    fn named_slot_renders_the_captured_keyword_verbatim() {
        let cycle = FormatCycle::new("Light Blue");

        let (color, format) = cycle
            .advance("hsl(195, 53%, 79%)", ColorFormat::Hsl)
            .unwrap();

        assert_eq!(format, ColorFormat::Named);
        assert_eq!(color, "lightblue");
    }

    #[test]
    fn formats_outside_the_rotation_are_rejected() {
        let cycle = FormatCycle::new("#FF0000");

        assert_eq!(
            cycle.advance("rgb(255, 0, 0)", ColorFormat::Rgba),
            Err(Error::UnsupportedScheme("rgba".to_string()))
        );
    }
}
