use super::geometry::{Point, Rect, Size};
use super::level::{LEVELS, Level, Variant};
use super::state::{AppState, Screen};

pub const BUTTON_WIDTH: f64 = 200.0;
pub const BUTTON_HEIGHT: f64 = 50.0;
const LEVEL_BUTTON_SPACING: f64 = 70.0;

pub fn start_button(surface: Size) -> Rect {
    Rect::new(
        (surface.width - BUTTON_WIDTH) / 2.0,
        surface.height / 2.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn level_button(surface: Size, level: Level) -> Rect {
    let offset = (level.number() - 1) as f64 * LEVEL_BUTTON_SPACING;
    Rect::new(
        (surface.width - BUTTON_WIDTH) / 2.0,
        surface.height / 2.0 - 20.0 + offset,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn play_again_button(surface: Size) -> Rect {
    Rect::new(
        (surface.width - BUTTON_WIDTH) / 2.0,
        surface.height / 2.0 + 20.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

pub fn show_level_select(st: &mut AppState) {
    st.invalidate_timers();
    st.confetti.stop();
    st.win_active = false;
    st.lock_input = false;
    st.first_pick = None;
    st.second_pick = None;
    st.screen = Screen::LevelSelect;
    log::info!("screen: level select");
}

/// Escape during play. Leaves the board alone while a dialog is up or in the
/// fixed variant. Returns whether the screen changed.
pub fn escape_to_level_select(st: &mut AppState, dialog_open: bool) -> bool {
    if dialog_open || st.config.variant != Variant::Levels || st.screen != Screen::Playing {
        return false;
    }
    show_level_select(st);
    true
}

pub fn start_level(st: &mut AppState, level: Level) {
    st.set_level(level);
    st.screen = Screen::Playing;
    st.reset_game();
}

pub fn restart(st: &mut AppState) {
    if st.screen != Screen::Playing {
        return;
    }
    st.reset_game();
}

pub fn show_victory(st: &mut AppState) {
    let surface = st.config.surface;
    let count = st.config.confetti_count;
    st.confetti.start(count, surface, &mut st.rng);
    st.win_active = true;
    st.screen = Screen::Win;
    log::info!("screen: win (level {})", st.level.number());
}

/// Returns whether the screen changed.
pub fn start_click(st: &mut AppState, point: Point) -> bool {
    if !start_button(st.config.surface).contains(point) {
        return false;
    }
    show_level_select(st);
    true
}

pub fn level_select_click(st: &mut AppState, point: Point) -> bool {
    let surface = st.config.surface;
    let Some(level) = LEVELS
        .into_iter()
        .find(|level| level_button(surface, *level).contains(point))
    else {
        return false;
    };
    start_level(st, level);
    true
}

pub fn win_click(st: &mut AppState, point: Point) -> bool {
    if !play_again_button(st.config.surface).contains(point) {
        return false;
    }
    show_level_select(st);
    true
}

/// Per-frame step of the render loop. Returns whether a repaint is due.
pub fn advance_frame(st: &mut AppState) -> bool {
    match st.screen {
        Screen::Start | Screen::LevelSelect => false,
        Screen::Playing | Screen::Win => {
            let surface = st.config.surface;
            st.confetti.advance(surface, &mut st.rng);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::{self, TimedKind};
    use crate::ui::state::{CardStatus, seeded_state};

    fn center(rect: Rect) -> Point {
        Point::new(rect.x + rect.width / 2.0, rect.y + rect.height / 2.0)
    }

    #[test]
    fn button_geometry_on_default_surface() {
        let surface = Size::new(800.0, 600.0);
        assert_eq!(start_button(surface), Rect::new(300.0, 300.0, 200.0, 50.0));
        assert_eq!(
            level_button(surface, Level::One),
            Rect::new(300.0, 280.0, 200.0, 50.0)
        );
        assert_eq!(
            level_button(surface, Level::Three),
            Rect::new(300.0, 420.0, 200.0, 50.0)
        );
        assert_eq!(play_again_button(surface), Rect::new(300.0, 320.0, 200.0, 50.0));
    }

    #[test]
    fn start_button_leads_to_level_select() {
        let mut st = seeded_state(Variant::Levels, 1);
        assert!(!start_click(&mut st, Point::new(5.0, 5.0)));
        assert_eq!(st.screen, Screen::Start);
        let start = center(start_button(st.config.surface));
        assert!(start_click(&mut st, start));
        assert_eq!(st.screen, Screen::LevelSelect);
    }

    #[test]
    fn each_level_button_configures_its_grid() {
        for level in LEVELS {
            let mut st = seeded_state(Variant::Levels, level.number() as u64);
            show_level_select(&mut st);
            let point = center(level_button(st.config.surface, level));
            assert!(level_select_click(&mut st, point));
            assert_eq!(st.screen, Screen::Playing);
            assert_eq!(st.level, level);
            assert_eq!(st.rules, level.rules());
            assert_eq!(st.cards.len(), level.rules().card_count);
            assert_eq!(st.first_pick, None);
            assert!(!st.lock_input);
        }
    }

    #[test]
    fn gap_between_level_buttons_is_ignored() {
        let mut st = seeded_state(Variant::Levels, 2);
        show_level_select(&mut st);
        assert!(!level_select_click(&mut st, Point::new(400.0, 340.0)));
        assert_eq!(st.screen, Screen::LevelSelect);
    }

    #[test]
    fn victory_starts_confetti_and_play_again_returns_to_levels() {
        let mut st = seeded_state(Variant::Levels, 3);
        start_level(&mut st, Level::One);
        show_victory(&mut st);
        assert_eq!(st.screen, Screen::Win);
        assert!(st.confetti.active);
        assert_eq!(st.confetti.particles.len(), 150);

        assert!(!win_click(&mut st, Point::new(10.0, 10.0)));
        assert_eq!(st.screen, Screen::Win);
        let play_again = center(play_again_button(st.config.surface));
        assert!(win_click(&mut st, play_again));
        assert_eq!(st.screen, Screen::LevelSelect);
        assert!(!st.confetti.active);
        assert!(!st.win_active);
    }

    #[test]
    fn restart_only_applies_while_playing() {
        let mut st = seeded_state(Variant::Levels, 4);
        restart(&mut st);
        assert!(st.cards.is_empty());

        start_level(&mut st, Level::Two);
        st.cards[0].status = CardStatus::Flipped;
        st.first_pick = Some(0);
        let before = st.game_id;
        restart(&mut st);
        assert_eq!(st.game_id, before + 1);
        assert_eq!(st.first_pick, None);
        assert!(st.cards.iter().all(|card| card.status == CardStatus::Hidden));
    }

    #[test]
    fn static_screens_skip_frame_work() {
        let mut st = seeded_state(Variant::Levels, 5);
        assert!(!advance_frame(&mut st));
        show_level_select(&mut st);
        assert!(!advance_frame(&mut st));
        start_level(&mut st, Level::One);
        assert!(advance_frame(&mut st));
    }

    #[test]
    fn win_frames_move_confetti() {
        let mut st = seeded_state(Variant::Levels, 6);
        start_level(&mut st, Level::One);
        show_victory(&mut st);
        let before = st.confetti.particles[0].position;
        assert!(advance_frame(&mut st));
        assert_ne!(st.confetti.particles[0].position, before);
    }

    #[test]
    fn escape_is_ignored_while_a_dialog_is_open() {
        let mut st = seeded_state(Variant::Levels, 7);
        start_level(&mut st, Level::One);
        let before = st.game_id;
        assert!(!escape_to_level_select(&mut st, true));
        assert_eq!(st.screen, Screen::Playing);
        assert_eq!(st.game_id, before);

        assert!(escape_to_level_select(&mut st, false));
        assert_eq!(st.screen, Screen::LevelSelect);
        assert!(!escape_to_level_select(&mut st, false));
    }

    #[test]
    fn escape_keeps_the_fixed_board() {
        let mut st = seeded_state(Variant::Fixed, 8);
        assert!(!escape_to_level_select(&mut st, false));
        assert_eq!(st.screen, Screen::Playing);
    }

    #[test]
    fn escape_mid_flip_back_then_replay() {
        let mut st = seeded_state(Variant::Levels, 9);
        start_level(&mut st, Level::One);
        let second = st
            .cards
            .iter()
            .position(|card| card.color != st.cards[0].color)
            .unwrap();
        let first_point = center(st.cards[0].rect);
        let second_point = center(st.cards[second].rect);
        input::handle_click(&mut st, first_point);
        let action = input::handle_click(&mut st, second_point)
            .timed_action()
            .unwrap();
        assert_eq!(action.kind, TimedKind::FlipBack { first: 0, second });
        assert!(st.lock_input);

        assert!(escape_to_level_select(&mut st, false));
        assert!(!st.lock_input);
        start_level(&mut st, Level::One);
        assert!(!input::fire_timed(&mut st, action));
        assert!(st.cards.iter().all(|card| card.status == CardStatus::Hidden));
        assert!(!st.lock_input);
    }
}
