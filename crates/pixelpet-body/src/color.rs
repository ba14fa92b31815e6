//! Colours and the per-type palette tables

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::body_type::BodyType;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// From a 0xRRGGBB literal
    pub const fn hex(value: u32) -> Self {
        Self::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// From hue in degrees, saturation and lightness in percent
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let s = (saturation / 100.0).clamp(0.0, 1.0);
        let l = (lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = hue.rem_euclid(360.0) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::rgb(channel(r), channel(g), channel(b))
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb` string
    pub fn to_hex_string(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The three colours a body is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Core and limbs
    pub base: Color,
    /// Pupils, mouth, surface patterns
    pub accent: Color,
    /// Particles, cracks, eye glow
    pub glow: Color,
}

/// Palette table row
#[derive(Debug, Clone, Copy)]
pub struct PaletteEntry {
    pub scheme: ColorScheme,
    pub weight: u32,
}

fn entry(base: Color, glow: Color, accent: Color) -> PaletteEntry {
    PaletteEntry {
        scheme: ColorScheme { base, accent, glow },
        weight: 1,
    }
}

/// Fixed palette table for a body type
pub fn palette(body_type: BodyType) -> Vec<PaletteEntry> {
    match body_type {
        BodyType::Baby => vec![
            // Powder blue
            entry(
                Color::hsl(200.0, 70.0, 85.0),
                Color::hsl(210.0, 60.0, 90.0),
                Color::hsl(190.0, 65.0, 75.0),
            ),
            // Baby pink
            entry(
                Color::hsl(350.0, 70.0, 87.0),
                Color::hsl(340.0, 60.0, 90.0),
                Color::hsl(355.0, 65.0, 80.0),
            ),
            // Mint
            entry(
                Color::hsl(150.0, 60.0, 85.0),
                Color::hsl(140.0, 50.0, 90.0),
                Color::hsl(160.0, 55.0, 80.0),
            ),
            // Lavender
            entry(
                Color::hsl(280.0, 50.0, 87.0),
                Color::hsl(290.0, 40.0, 90.0),
                Color::hsl(270.0, 45.0, 82.0),
            ),
        ],
        BodyType::Good => vec![
            entry(
                Color::hsl(180.0, 70.0, 80.0),
                Color::hsl(210.0, 70.0, 75.0),
                Color::hsl(240.0, 80.0, 85.0),
            ),
            entry(
                Color::hsl(280.0, 70.0, 80.0),
                Color::hsl(310.0, 70.0, 75.0),
                Color::hsl(340.0, 80.0, 85.0),
            ),
            entry(
                Color::hsl(20.0, 70.0, 80.0),
                Color::hsl(50.0, 70.0, 75.0),
                Color::hsl(80.0, 80.0, 85.0),
            ),
        ],
        BodyType::Evil => vec![
            entry(
                Color::hsl(270.0, 70.0, 20.0),
                Color::hsl(270.0, 90.0, 40.0),
                Color::hex(0xFF0066),
            ),
            entry(
                Color::hsl(345.0, 70.0, 20.0),
                Color::hsl(345.0, 90.0, 40.0),
                Color::hex(0xFF0000),
            ),
            entry(
                Color::hsl(220.0, 70.0, 20.0),
                Color::hsl(220.0, 90.0, 40.0),
                Color::hex(0xFF3300),
            ),
            entry(
                Color::hsl(160.0, 70.0, 20.0),
                Color::hsl(160.0, 90.0, 40.0),
                Color::hex(0xFF0033),
            ),
        ],
    }
}

/// Weighted pick from the body type's palette
pub fn pick_scheme<R: Rng + ?Sized>(body_type: BodyType, rng: &mut R) -> ColorScheme {
    let table = palette(body_type);
    match table.choose_weighted(rng, |entry| entry.weight) {
        Ok(entry) => entry.scheme,
        Err(err) => {
            log::warn!("Palette pick failed for {}: {}", body_type, err);
            table[0].scheme
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 100.0, 50.0), Color::rgb(255, 0, 0));
        assert_eq!(Color::hsl(120.0, 100.0, 50.0), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsl(240.0, 100.0, 50.0), Color::rgb(0, 0, 255));
        assert_eq!(Color::hsl(360.0, 100.0, 50.0), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_hsl_greys() {
        assert_eq!(Color::hsl(77.0, 0.0, 100.0), Color::WHITE);
        assert_eq!(Color::hsl(77.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(Color::hsl(0.0, 0.0, 50.0), Color::rgb(128, 128, 128));
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::hex(0xFF0066), Color::rgb(255, 0, 102));
        assert_eq!(Color::hex(0xFF0066).to_hex_string(), "#ff0066");
        assert_eq!(Color::WHITE.to_rgba(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_palette_sizes() {
        assert_eq!(palette(BodyType::Baby).len(), 4);
        assert_eq!(palette(BodyType::Good).len(), 3);
        assert_eq!(palette(BodyType::Evil).len(), 4);
    }

    #[test]
    fn test_pick_comes_from_table() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        for body_type in BodyType::all() {
            let table = palette(*body_type);
            for _ in 0..20 {
                let scheme = pick_scheme(*body_type, &mut rng);
                assert!(table.iter().any(|entry| entry.scheme == scheme));
            }
        }
    }

    #[test]
    fn test_evil_palettes_are_dark() {
        for entry in palette(BodyType::Evil) {
            let base = entry.scheme.base;
            assert!(base.r < 100 && base.g < 100 && base.b < 100);
        }
    }
}
