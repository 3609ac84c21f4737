use super::board;
use super::geometry::Point;
use super::level::WinBehavior;
use super::scene;
use super::state::{AppState, CardStatus, Screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimedKind {
    FlipBack { first: usize, second: usize },
    ResetBoard,
}

/// Work to run after `delay_ms`, valid only while `game_id` is current.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedAction {
    pub kind: TimedKind,
    pub game_id: u64,
    pub delay_ms: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored,
    Redraw,
    RedrawAndSchedule(TimedAction),
}

impl ClickOutcome {
    pub fn needs_redraw(self) -> bool {
        self != ClickOutcome::Ignored
    }

    pub fn timed_action(self) -> Option<TimedAction> {
        match self {
            ClickOutcome::RedrawAndSchedule(action) => Some(action),
            _ => None,
        }
    }
}

fn screen_changed(changed: bool) -> ClickOutcome {
    if changed {
        ClickOutcome::Redraw
    } else {
        ClickOutcome::Ignored
    }
}

/// Routes a click in surface coordinates to the active screen.
pub fn handle_click(st: &mut AppState, point: Point) -> ClickOutcome {
    match st.screen {
        Screen::Start => screen_changed(scene::start_click(st, point)),
        Screen::LevelSelect => screen_changed(scene::level_select_click(st, point)),
        Screen::Playing => handle_card_click(st, point),
        Screen::Win => screen_changed(scene::win_click(st, point)),
    }
}

pub fn handle_card_click(st: &mut AppState, point: Point) -> ClickOutcome {
    if st.screen != Screen::Playing || st.lock_input || st.win_active {
        return ClickOutcome::Ignored;
    }

    let Some(index) = board::card_at(&st.cards, point) else {
        return ClickOutcome::Ignored;
    };
    if st.cards[index].is_flipped() {
        return ClickOutcome::Ignored;
    }

    let Some(first) = st.first_pick else {
        st.cards[index].status = CardStatus::Flipped;
        st.first_pick = Some(index);
        log::debug!("flip first card {index}");
        return ClickOutcome::Redraw;
    };

    if st.second_pick.is_some() {
        return ClickOutcome::Ignored;
    }

    st.cards[index].status = CardStatus::Flipped;
    st.second_pick = Some(index);
    log::debug!("flip second card {index}");

    if st.cards[first].color == st.cards[index].color {
        st.cards[first].status = CardStatus::Matched;
        st.cards[index].status = CardStatus::Matched;
        st.first_pick = None;
        st.second_pick = None;
        log::debug!("match: cards {first} and {index}");
        return check_win(st);
    }

    st.lock_input = true;
    ClickOutcome::RedrawAndSchedule(TimedAction {
        kind: TimedKind::FlipBack {
            first,
            second: index,
        },
        game_id: st.game_id,
        delay_ms: st.config.flip_back_ms,
    })
}

fn check_win(st: &mut AppState) -> ClickOutcome {
    if st.win_active || !st.all_matched() {
        return ClickOutcome::Redraw;
    }

    match st.rules.on_win {
        WinBehavior::Celebrate => {
            scene::show_victory(st);
            ClickOutcome::Redraw
        }
        WinBehavior::AutoReset => {
            st.win_active = true;
            log::info!("board cleared; reshuffling in {} ms", st.config.win_reset_ms);
            ClickOutcome::RedrawAndSchedule(TimedAction {
                kind: TimedKind::ResetBoard,
                game_id: st.game_id,
                delay_ms: st.config.win_reset_ms,
            })
        }
    }
}

/// Runs a timed action once its delay has passed. Returns whether anything
/// changed; actions from an older board are dropped.
pub fn fire_timed(st: &mut AppState, action: TimedAction) -> bool {
    if action.game_id != st.game_id {
        log::debug!(
            "dropping stale {:?} from game {} (now {})",
            action.kind,
            action.game_id,
            st.game_id
        );
        return false;
    }

    match action.kind {
        TimedKind::FlipBack { first, second } => {
            for index in [first, second] {
                if let Some(card) = st.cards.get_mut(index)
                    && card.status == CardStatus::Flipped
                {
                    card.status = CardStatus::Hidden;
                }
            }
            st.first_pick = None;
            st.second_pick = None;
            st.lock_input = false;
            true
        }
        TimedKind::ResetBoard => {
            st.reset_game();
            true
        }
    }
}
