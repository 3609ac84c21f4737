use rand::SeedableRng;
use rand::rngs::StdRng;

use super::board;
use super::config::GameConfig;
use super::confetti::Confetti;
use super::geometry::Rect;
use super::level::{self, Level, LevelRules, Variant};
use super::palette::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStatus {
    Hidden,
    Flipped,
    Matched,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
    pub color: Color,
    pub status: CardStatus,
}

impl Card {
    /// Face up, which includes matched cards.
    pub fn is_flipped(&self) -> bool {
        self.status != CardStatus::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.status == CardStatus::Matched
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Start,
    LevelSelect,
    Playing,
    Win,
}

pub struct AppState {
    pub config: GameConfig,
    pub screen: Screen,
    pub level: Level,
    pub rules: LevelRules,
    pub cards: Vec<Card>,
    pub first_pick: Option<usize>,
    pub second_pick: Option<usize>,
    pub lock_input: bool,
    /// Set once the board is cleared, until the next board or screen.
    pub win_active: bool,
    pub confetti: Confetti,
    pub game_id: u64,
    pub rng: StdRng,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let variant = config.variant;
        let mut st = AppState {
            config,
            screen: Screen::Start,
            level: Level::One,
            rules: Level::One.rules(),
            cards: Vec::new(),
            first_pick: None,
            second_pick: None,
            lock_input: false,
            win_active: false,
            confetti: Confetti::default(),
            game_id: 0,
            rng,
        };
        if variant == Variant::Fixed {
            st.rules = level::fixed_rules();
            st.screen = Screen::Playing;
            st.reset_game();
        }
        st
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.rules = match self.config.variant {
            Variant::Fixed => level::fixed_rules(),
            Variant::Levels => level.rules(),
        };
    }

    /// Drops any timed action scheduled against the current board.
    pub fn invalidate_timers(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
    }

    pub fn reset_game(&mut self) {
        self.invalidate_timers();
        self.first_pick = None;
        self.second_pick = None;
        self.lock_input = false;
        self.win_active = false;
        self.confetti.stop();
        self.cards = board::generate(&self.rules, self.config.surface, &mut self.rng);
        log::info!(
            "new board: level {} ({}x{}, {} cards), game {}",
            self.level.number(),
            self.rules.rows,
            self.rules.cols,
            self.cards.len(),
            self.game_id
        );
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }
}

#[cfg(test)]
pub(crate) fn seeded_state(variant: Variant, seed: u64) -> AppState {
    let config = GameConfig {
        variant,
        ..GameConfig::default()
    };
    AppState::with_rng(config, StdRng::seed_from_u64(seed))
}
