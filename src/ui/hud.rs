use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::prelude::*;

use super::level::Variant;
use super::state::{AppState, Screen};

pub fn subtitle_text(st: &AppState) -> String {
    let level_label = gettext("Level {}").replacen("{}", &st.level.number().to_string(), 1);
    match st.screen {
        Screen::Start => gettext("Press Start"),
        Screen::LevelSelect => gettext("Select Level"),
        Screen::Playing => {
            let pairs = format!("{}/{}", st.matched_pairs(), st.total_pairs());
            match st.config.variant {
                Variant::Fixed => format!("{} {}", pairs, gettext("pairs")),
                Variant::Levels => format!("{} | {} {}", level_label, pairs, gettext("pairs")),
            }
        }
        Screen::Win => format!("{} | {}", level_label, gettext("Cleared")),
    }
}

pub(super) fn update_header(st: &AppState, subtitle: &gtk::Label, restart: &gtk::Button) {
    subtitle.set_text(&subtitle_text(st));
    restart.set_visible(st.screen == Screen::Playing);
}
