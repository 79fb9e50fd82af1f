//! Derives groups of harmonious companion colors from a single seed.
//!
//! Every scheme works in HSL: hue rotations wrap around the color wheel,
//! saturation and lightness adjustments clamp to their percent ranges.
//! Three schemes pick between fixed candidate sets at random; the picker
//! is injectable so tests can script the branches.

use std::fmt;

use rand::Rng;

use crate::convert::{self, hsl_to_rgb, rgb_to_hsl, Hsl, Rgb};
use crate::premade::PremadeCatalog;
use crate::Result;

/// Uniform choice among equally-weighted candidates.
pub trait BranchPicker {
    fn choose(&mut self, options: usize) -> usize;
}

/// The default picker, backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl BranchPicker for RandomPicker {
    fn choose(&mut self, options: usize) -> usize {
        rand::thread_rng().gen_range(0..options)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Premade,
    Complementary,
    Analogous,
    Triadic,
    SplitComplementary,
    Rectangular,
    Square,
    Monochromatic,
}

impl PaletteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteKind::Premade => "premade",
            PaletteKind::Complementary => "complementary",
            PaletteKind::Analogous => "analogous",
            PaletteKind::Triadic => "triadic",
            PaletteKind::SplitComplementary => "split-complementary",
            PaletteKind::Rectangular => "rectangular",
            PaletteKind::Square => "square",
            PaletteKind::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An ordered group of companion colors, rendered as HSL strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub kind: PaletteKind,
    pub colors: Vec<String>,
}

pub struct PaletteGenerator<P = RandomPicker> {
    picker: P,
    catalog: Option<PremadeCatalog>,
}

impl PaletteGenerator<RandomPicker> {
    pub fn new() -> Self {
        Self::with_picker(RandomPicker)
    }
}

impl Default for PaletteGenerator<RandomPicker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: BranchPicker> PaletteGenerator<P> {
    pub fn with_picker(picker: P) -> Self {
        PaletteGenerator {
            picker,
            catalog: None,
        }
    }

    pub fn with_catalog(mut self, catalog: PremadeCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Generates companion palettes for a seed color in any supported
    /// textual form.
    ///
    /// Premade catalog matches come first, followed by one palette per
    /// harmony scheme in a fixed order. Washed-out, nearly white, and
    /// nearly black seeds skip the heuristic schemes entirely; their
    /// companions degenerate visually.
    pub fn generate(&mut self, seed: &str) -> Result<Vec<Palette>> {
        let rgb = convert::parse(seed)?;
        let hsl = rgb_to_hsl(&rgb);

        let mut palettes = self.premade_matches(&rgb);

        if hsl.s() < 25 || hsl.l() > 90 || hsl.l() < 20 {
            return Ok(palettes);
        }

        palettes.push(Palette {
            kind: PaletteKind::Complementary,
            colors: render(&complementary(&hsl)),
        });
        palettes.push(Palette {
            kind: PaletteKind::Analogous,
            colors: render(&analogous(&hsl)),
        });
        palettes.push(Palette {
            kind: PaletteKind::Triadic,
            colors: render(&self.triadic(&hsl)),
        });
        palettes.push(Palette {
            kind: PaletteKind::SplitComplementary,
            colors: render(&self.split_complementary(&hsl)),
        });
        palettes.push(Palette {
            kind: PaletteKind::Rectangular,
            colors: render(&rectangular(&hsl)),
        });
        palettes.push(Palette {
            kind: PaletteKind::Square,
            colors: render(&square(&hsl)),
        });

        if let Some(colors) = self.monochromatic(&hsl) {
            palettes.push(Palette {
                kind: PaletteKind::Monochromatic,
                colors: render(&colors),
            });
        }

        Ok(palettes)
    }

    fn premade_matches(&self, rgb: &Rgb) -> Vec<Palette> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };

        catalog
            .matching(&rgb.hex())
            .into_iter()
            .map(|colors| Palette {
                kind: PaletteKind::Premade,
                colors,
            })
            .collect()
    }

    fn triadic(&mut self, seed: &Hsl) -> Vec<Hsl> {
        let plus = seed.rotate(120);
        let minus = seed.rotate(-120);

        if seed.l() > 60 || seed.l() < 20 {
            // Deterministic fan for lightness extremes, ending on the seed.
            return vec![
                seed.rotate(-140),
                minus,
                plus,
                seed.rotate(140),
                *seed,
            ];
        }

        if self.picker.choose(2) == 0 {
            // Low-lightness accents beside the triad.
            vec![
                plus.with_lightness(25),
                *seed,
                minus.with_lightness(25),
                plus,
                minus,
            ]
        } else {
            // High-lightness, low-saturation accents.
            vec![
                plus.with_saturation(30).with_lightness(80),
                *seed,
                minus.with_saturation(30).with_lightness(80),
                plus,
                minus,
            ]
        }
    }

    fn split_complementary(&mut self, seed: &Hsl) -> Vec<Hsl> {
        let split_a = seed.rotate(160);
        let split_b = seed.rotate(200);

        if seed.l() > 60 || seed.l() < 20 {
            // Symmetric fan around the complement.
            return vec![split_a, seed.rotate(170), *seed, seed.rotate(190), split_b];
        }

        let seed_anchored = self.picker.choose(2) == 0;
        let low_accents = self.picker.choose(2) == 0;
        let accent = |color: &Hsl| -> Hsl {
            if low_accents {
                color.with_lightness(25)
            } else {
                color.with_saturation(30).with_lightness(80)
            }
        };

        if seed_anchored {
            vec![*seed, split_a, split_b, accent(&split_a), accent(&split_b)]
        } else {
            vec![
                split_a,
                *seed,
                split_b,
                accent(seed),
                seed.rotate(180),
            ]
        }
    }

    fn monochromatic(&mut self, seed: &Hsl) -> Option<Vec<Hsl>> {
        enum Axis {
            Hue,
            Saturation,
            Lightness,
        }

        let axis = if seed.l() > 30 && seed.l() < 70 {
            if seed.s() < 50 {
                Axis::Saturation
            } else {
                Axis::Lightness
            }
        } else if seed.l() < 70 {
            if seed.s() < 30 {
                Axis::Saturation
            } else {
                Axis::Lightness
            }
        } else {
            Axis::Hue
        };

        let direction: i32 = if self.picker.choose(2) == 0 { 1 } else { -1 };
        let base = if self.picker.choose(2) == 0 {
            *seed
        } else {
            seed.rotate(30)
        };

        let colors: Vec<Hsl> = std::iter::once(base)
            .chain((1..=4).map(|step| {
                let offset = direction * step * 10;
                match axis {
                    Axis::Hue => base.rotate(offset),
                    Axis::Saturation => base.with_saturation(base.s() as i32 + offset),
                    Axis::Lightness => base.with_lightness(base.l() as i32 + offset),
                }
            }))
            .collect();

        // A ramp that clamps into pure black or white collapses the
        // scheme; drop it rather than emit a broken palette.
        if colors.iter().any(|c| c.l() == 0 || c.l() == 100) {
            return None;
        }

        Some(colors)
    }
}

/// Seed, three linear RGB blends toward the complement, then the
/// complement itself.
fn complementary(seed: &Hsl) -> Vec<Hsl> {
    let complement = seed.rotate(180);

    let mut colors = vec![*seed];
    colors.extend(interpolate(seed, &complement, 3));
    colors.push(complement);
    colors
}

/// Seed ±30° endpoints, each blended one step toward the seed.
fn analogous(seed: &Hsl) -> Vec<Hsl> {
    let lower = seed.rotate(-30);
    let upper = seed.rotate(30);

    vec![
        lower,
        midpoint(&lower, seed),
        *seed,
        midpoint(&upper, seed),
        upper,
    ]
}

fn rectangular(seed: &Hsl) -> Vec<Hsl> {
    vec![*seed, seed.rotate(60), seed.rotate(180), seed.rotate(240)]
}

fn square(seed: &Hsl) -> Vec<Hsl> {
    vec![*seed, seed.rotate(90), seed.rotate(180), seed.rotate(270)]
}

/// Linear RGB blend (not a hue blend) sampled at `t = i / (steps + 1)`.
fn interpolate(from: &Hsl, to: &Hsl, steps: u32) -> Vec<Hsl> {
    let start = hsl_to_rgb(from);
    let end = hsl_to_rgb(to);

    (1..=steps)
        .map(|i| {
            let t = i as f64 / (steps + 1) as f64;
            let lerp =
                |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * t).round() as u8 };

            rgb_to_hsl(&Rgb {
                r: lerp(start.r, end.r),
                g: lerp(start.g, end.g),
                b: lerp(start.b, end.b),
            })
        })
        .collect()
}

fn midpoint(from: &Hsl, to: &Hsl) -> Hsl {
    interpolate(from, to, 1)[0]
}

fn render(colors: &[Hsl]) -> Vec<String> {
    colors.iter().map(Hsl::to_string).collect()
}
