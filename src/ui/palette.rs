use rand::Rng;

use super::toolbox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color {
            red,
            green,
            blue,
            alpha: 0xFF,
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Color {
            alpha: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
            ..self
        }
    }

    /// `hue` in degrees, `saturation` and `lightness` in `[0, 1]`.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;
        let to_u8 = |channel: f64| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    pub fn components(self) -> (f64, f64, f64, f64) {
        (
            self.red as f64 / 255.0,
            self.green as f64 / 255.0,
            self.blue as f64 / 255.0,
            self.alpha as f64 / 255.0,
        )
    }
}

pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const CARD_BACK: Color = Color::rgb(0x80, 0x80, 0x80);
pub const START_GREEN: Color = Color::rgb(0x28, 0xA7, 0x45);
pub const LEVEL_BLUE: Color = Color::rgb(0x00, 0x7B, 0xFF);

pub struct BaseColor {
    /// Brightest first.
    pub shades: [Color; 4],
}

const fn shades(red: bool, green: bool, blue: bool) -> [Color; 4] {
    let levels = [0xFF, 0xBF, 0x7F, 0x3F];
    let mut out = [BLACK; 4];
    let mut i = 0;
    while i < 4 {
        out[i] = Color::rgb(
            if red { levels[i] } else { 0 },
            if green { levels[i] } else { 0 },
            if blue { levels[i] } else { 0 },
        );
        i += 1;
    }
    out
}

pub const BASE_COLORS: [BaseColor; 6] = [
    // red
    BaseColor { shades: shades(true, false, false) },
    // green
    BaseColor { shades: shades(false, true, false) },
    // blue
    BaseColor { shades: shades(false, false, true) },
    // yellow
    BaseColor { shades: shades(true, true, false) },
    // cyan
    BaseColor { shades: shades(false, true, true) },
    // magenta
    BaseColor { shades: shades(true, false, true) },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PalettePolicy {
    Brightest,
    RandomShade,
    /// Shades 0 & 2 or 1 & 3 of every base color, chosen per color.
    ShadePair,
    AllShades,
}

pub fn build_palette<R: Rng + ?Sized>(policy: PalettePolicy, rng: &mut R) -> Vec<Color> {
    let mut palette = Vec::new();
    for base in &BASE_COLORS {
        match policy {
            PalettePolicy::Brightest => palette.push(base.shades[0]),
            PalettePolicy::RandomShade => {
                if let Some(shade) = toolbox::random_item(rng, &base.shades) {
                    palette.push(*shade);
                }
            }
            PalettePolicy::ShadePair => {
                if toolbox::coin_flip(rng) {
                    palette.extend([base.shades[0], base.shades[2]]);
                } else {
                    palette.extend([base.shades[1], base.shades[3]]);
                }
            }
            PalettePolicy::AllShades => palette.extend(base.shades),
        }
    }
    palette
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn distinct(colors: &[Color]) -> usize {
        colors.iter().collect::<HashSet<_>>().len()
    }

    #[test]
    fn base_shades_match_hex_table() {
        assert_eq!(BASE_COLORS[0].shades[1], Color::rgb(0xBF, 0, 0));
        assert_eq!(BASE_COLORS[3].shades[2], Color::rgb(0x7F, 0x7F, 0));
        assert_eq!(BASE_COLORS[5].shades[3], Color::rgb(0x3F, 0, 0x3F));
    }

    #[test]
    fn palette_sizes_follow_policy() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(build_palette(PalettePolicy::Brightest, &mut rng).len(), 6);
        assert_eq!(build_palette(PalettePolicy::RandomShade, &mut rng).len(), 6);
        assert_eq!(build_palette(PalettePolicy::ShadePair, &mut rng).len(), 12);
        assert_eq!(build_palette(PalettePolicy::AllShades, &mut rng).len(), 24);
    }

    #[test]
    fn palettes_never_repeat_a_color() {
        let mut rng = StdRng::seed_from_u64(42);
        for policy in [
            PalettePolicy::Brightest,
            PalettePolicy::RandomShade,
            PalettePolicy::ShadePair,
            PalettePolicy::AllShades,
        ] {
            for _ in 0..20 {
                let palette = build_palette(policy, &mut rng);
                assert_eq!(distinct(&palette), palette.len(), "{policy:?}");
            }
        }
    }

    #[test]
    fn shade_pair_uses_matching_pairs() {
        let mut rng = StdRng::seed_from_u64(9);
        let palette = build_palette(PalettePolicy::ShadePair, &mut rng);
        for (base, pair) in BASE_COLORS.iter().zip(palette.chunks(2)) {
            let first_pair = [base.shades[0], base.shades[2]];
            let second_pair = [base.shades[1], base.shades[3]];
            assert!(pair == first_pair || pair == second_pair);
        }
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hsl(240.0, 1.0, 0.5), Color::rgb(0, 0, 255));
        assert_eq!(Color::from_hsl(360.0, 1.0, 0.5), Color::rgb(255, 0, 0));
    }

    #[test]
    fn alpha_is_scaled_to_byte() {
        assert_eq!(BLACK.with_alpha(0.5).alpha, 128);
        assert_eq!(WHITE.with_alpha(2.0).alpha, 255);
        let (_, _, _, a) = BLACK.with_alpha(0.0).components();
        assert_eq!(a, 0.0);
    }
}
