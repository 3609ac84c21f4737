use super::geometry::Size;
use super::level::Variant;

pub const SURFACE_WIDTH: f64 = 800.0;
pub const SURFACE_HEIGHT: f64 = 600.0;
pub const FLIP_BACK_MS: u64 = 1000;
pub const WIN_RESET_MS: u64 = 1500;
pub const CONFETTI_COUNT: usize = 150;

const VARIANT_VAR: &str = "MEMORY_MATCH_VARIANT";
const DEBUG_VAR: &str = "MEMORY_MATCH_DEBUG";
const SEED_VAR: &str = "MEMORY_MATCH_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub variant: Variant,
    pub debug: bool,
    pub seed: Option<u64>,
    pub surface: Size,
    pub flip_back_ms: u64,
    pub win_reset_ms: u64,
    pub confetti_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            variant: Variant::Levels,
            debug: false,
            seed: None,
            surface: Size::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            flip_back_ms: FLIP_BACK_MS,
            win_reset_ms: WIN_RESET_MS,
            confetti_count: CONFETTI_COUNT,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unknown or malformed values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = GameConfig::default();

        if let Some(raw) = lookup(VARIANT_VAR) {
            match Variant::from_code(&raw) {
                Some(variant) => config.variant = variant,
                None => {
                    log::warn!("ignoring {VARIANT_VAR}={raw:?}; expected \"levels\" or \"fixed\"")
                }
            }
        }

        if let Some(raw) = lookup(DEBUG_VAR) {
            config.debug = flag_enabled(&raw);
        }

        if let Some(raw) = lookup(SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => log::warn!("ignoring {SEED_VAR}={raw:?}: {err}"),
            }
        }

        config
    }
}

fn flag_enabled(raw: &str) -> bool {
    let v = raw.trim().to_ascii_lowercase();
    matches!(v.as_str(), "1" | "true" | "yes" | "on")
}
