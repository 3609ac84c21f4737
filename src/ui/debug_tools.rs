use gtk4::gdk;

use super::level::{Level, Variant};
use super::scene;
use super::state::{AppState, CardStatus, Screen};

#[derive(Debug, PartialEq, Eq)]
pub enum NearWinResult {
    Applied(usize),
    NoBoard,
    NoPairFound,
}

/// Matches every card except one pair. Pending timers are dropped.
pub fn prepare_near_win(st: &mut AppState) -> NearWinResult {
    if st.screen != Screen::Playing || st.win_active || st.cards.is_empty() {
        return NearWinResult::NoBoard;
    }

    let Some(keep) = st.cards.iter().position(|card| !card.is_matched()) else {
        return NearWinResult::NoPairFound;
    };
    let color = st.cards[keep].color;
    let Some(partner) = st
        .cards
        .iter()
        .enumerate()
        .position(|(idx, card)| idx != keep && !card.is_matched() && card.color == color)
    else {
        return NearWinResult::NoPairFound;
    };

    st.invalidate_timers();
    for (idx, card) in st.cards.iter_mut().enumerate() {
        card.status = if idx == keep || idx == partner {
            CardStatus::Hidden
        } else {
            CardStatus::Matched
        };
    }
    st.first_pick = None;
    st.second_pick = None;
    st.lock_input = false;
    NearWinResult::Applied(2)
}

fn level_for_key(key: gdk::Key) -> Option<Level> {
    match key {
        gdk::Key::_1 | gdk::Key::KP_1 => Some(Level::One),
        gdk::Key::_2 | gdk::Key::KP_2 => Some(Level::Two),
        gdk::Key::_3 | gdk::Key::KP_3 => Some(Level::Three),
        _ => None,
    }
}

/// Ctrl+N / F9 leaves one pair; Ctrl+1..3 jumps to a level. Returns whether
/// the key was consumed.
pub fn handle_debug_shortcut(st: &mut AppState, key: gdk::Key, mods: gdk::ModifierType) -> bool {
    if !mods.contains(gdk::ModifierType::CONTROL_MASK) {
        return false;
    }

    let near_win_key = matches!(key, gdk::Key::N | gdk::Key::n | gdk::Key::F9);
    let level = level_for_key(key);
    if !near_win_key && level.is_none() {
        return false;
    }

    if !st.config.debug {
        log::info!("debug shortcuts are off; export MEMORY_MATCH_DEBUG=1");
        return true;
    }

    if near_win_key {
        match prepare_near_win(st) {
            NearWinResult::Applied(remaining) => {
                log::debug!("[DEBUG] board prepared: one pair left ({remaining} cards)");
            }
            other => log::debug!("[DEBUG] near-win skipped: {other:?}"),
        }
        return true;
    }

    if let Some(level) = level
        && st.config.variant == Variant::Levels
    {
        log::debug!("[DEBUG] jumping to level {}", level.number());
        scene::start_level(st, level);
    }
    true
}
