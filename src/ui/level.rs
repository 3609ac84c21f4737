use super::palette::PalettePolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Single fixed board that reshuffles itself after a win.
    Fixed,
    /// Start screen, level selection and a confetti win screen.
    #[default]
    Levels,
}

impl Variant {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fixed" | "minimal" | "classic" => Some(Variant::Fixed),
            "levels" | "extended" => Some(Variant::Levels),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinBehavior {
    Celebrate,
    AutoReset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRules {
    pub rows: usize,
    pub cols: usize,
    pub card_count: usize,
    pub palette: PalettePolicy,
    pub on_win: WinBehavior,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

pub const LEVELS: [Level; 3] = [Level::One, Level::Two, Level::Three];

impl Level {
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    pub fn rules(self) -> LevelRules {
        let (rows, cols, card_count, palette) = match self {
            Level::One => (3, 4, 12, PalettePolicy::RandomShade),
            Level::Two => (4, 6, 24, PalettePolicy::ShadePair),
            Level::Three => (6, 8, 48, PalettePolicy::AllShades),
        };
        LevelRules {
            rows,
            cols,
            card_count,
            palette,
            on_win: WinBehavior::Celebrate,
        }
    }
}

pub fn fixed_rules() -> LevelRules {
    LevelRules {
        rows: 3,
        cols: 4,
        card_count: 12,
        palette: PalettePolicy::Brightest,
        on_win: WinBehavior::AutoReset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_grids_scale_up() {
        let sizes: Vec<_> = LEVELS
            .iter()
            .map(|level| {
                let rules = level.rules();
                (rules.rows, rules.cols, rules.card_count)
            })
            .collect();
        assert_eq!(sizes, vec![(3, 4, 12), (4, 6, 24), (6, 8, 48)]);
    }

    #[test]
    fn every_grid_fits_its_cards() {
        for rules in LEVELS.iter().map(|l| l.rules()).chain([fixed_rules()]) {
            assert!(rules.rows * rules.cols >= rules.card_count);
            assert_eq!(rules.card_count % 2, 0);
        }
    }

    #[test]
    fn level_numbers_count_from_one() {
        let numbers: Vec<_> = LEVELS.iter().map(|level| level.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn variant_codes() {
        assert_eq!(Variant::from_code(" Fixed "), Some(Variant::Fixed));
        assert_eq!(Variant::from_code("levels"), Some(Variant::Levels));
        assert_eq!(Variant::from_code("arcade"), None);
    }
}
