use gettextrs::gettext;

use super::board::CARD_FACE_INSET;
use super::confetti::ConfettiParticle;
use super::geometry::{Point, Rect, Size};
use super::level::LEVELS;
use super::palette::{self, Color};
use super::scene;
use super::state::{AppState, Card, Screen};

pub type DrawResult = Result<(), cairo::Error>;

const TITLE_PX: f64 = 36.0;
const BANNER_PX: f64 = 48.0;
const BUTTON_TEXT_PX: f64 = 24.0;
const OVERLAY_ALPHA: f64 = 0.5;

/// The drawing operations the game needs from its host.
pub trait Surface {
    fn clear(&mut self, rect: Rect) -> DrawResult;
    fn fill_rect(&mut self, rect: Rect, color: Color) -> DrawResult;
    fn stroke_rect(&mut self, rect: Rect, color: Color) -> DrawResult;
    /// Horizontally centered on `anchor.x`, with its baseline on `anchor.y`.
    fn fill_text(&mut self, text: &str, anchor: Point, size_px: f64, color: Color) -> DrawResult;
    /// Fills `points` after translating to `origin` and rotating by `rotation`
    /// radians; the transform does not outlive the call.
    fn fill_polygon(
        &mut self,
        origin: Point,
        rotation: f64,
        points: &[Point],
        color: Color,
    ) -> DrawResult;
}

pub fn draw_scene(surface: &mut impl Surface, st: &AppState) -> DrawResult {
    let size = st.config.surface;
    match st.screen {
        Screen::Start => draw_start_screen(surface, size),
        Screen::LevelSelect => draw_level_select(surface, size),
        Screen::Playing => {
            draw_cards(surface, size, &st.cards)?;
            if st.confetti.active {
                draw_confetti(surface, &st.confetti.particles)?;
                draw_win_message(surface, size)?;
            }
            Ok(())
        }
        Screen::Win => {
            draw_cards(surface, size, &st.cards)?;
            if st.confetti.active {
                draw_confetti(surface, &st.confetti.particles)?;
            }
            draw_win_message(surface, size)
        }
    }
}

pub fn draw_cards(surface: &mut impl Surface, size: Size, cards: &[Card]) -> DrawResult {
    surface.clear(size.bounds())?;
    for card in cards {
        surface.stroke_rect(card.rect, palette::BLACK)?;
        let face = if card.is_flipped() {
            card.color
        } else {
            palette::CARD_BACK
        };
        surface.fill_rect(card.rect.inset(CARD_FACE_INSET), face)?;
    }
    Ok(())
}

fn draw_button(
    surface: &mut impl Surface,
    rect: Rect,
    fill: Color,
    label: &str,
    baseline: f64,
) -> DrawResult {
    surface.fill_rect(rect, fill)?;
    surface.fill_text(
        label,
        Point::new(rect.x + rect.width / 2.0, baseline),
        BUTTON_TEXT_PX,
        palette::WHITE,
    )
}

pub fn draw_start_screen(surface: &mut impl Surface, size: Size) -> DrawResult {
    let center = size.center();
    surface.fill_rect(size.bounds(), palette::BLACK)?;
    surface.fill_text(
        &gettext("Memory Match Game"),
        Point::new(center.x, center.y - 60.0),
        TITLE_PX,
        palette::WHITE,
    )?;
    let button = scene::start_button(size);
    draw_button(
        surface,
        button,
        palette::START_GREEN,
        &gettext("Start Game"),
        button.y + 32.0,
    )
}

pub fn draw_level_select(surface: &mut impl Surface, size: Size) -> DrawResult {
    let center = size.center();
    surface.fill_rect(size.bounds(), palette::BLACK)?;
    surface.fill_text(
        &gettext("Select Level"),
        Point::new(center.x, center.y - 80.0),
        TITLE_PX,
        palette::WHITE,
    )?;
    for level in LEVELS {
        let button = scene::level_button(size, level);
        let label = gettext("Level {}").replacen("{}", &level.number().to_string(), 1);
        draw_button(surface, button, palette::LEVEL_BLUE, &label, button.y + 32.0)?;
    }
    Ok(())
}

pub fn draw_win_message(surface: &mut impl Surface, size: Size) -> DrawResult {
    let center = size.center();
    surface.fill_rect(size.bounds(), palette::BLACK.with_alpha(OVERLAY_ALPHA))?;
    surface.fill_text(
        &gettext("You Win!"),
        Point::new(center.x, center.y - 20.0),
        BANNER_PX,
        palette::WHITE,
    )?;
    let button = scene::play_again_button(size);
    draw_button(
        surface,
        button,
        palette::START_GREEN,
        &gettext("Play Again?"),
        button.y + button.height / 2.0 + 8.0,
    )
}

pub fn draw_confetti(surface: &mut impl Surface, particles: &[ConfettiParticle]) -> DrawResult {
    for particle in particles {
        surface.fill_polygon(
            particle.position,
            particle.rotation,
            &particle.outline(),
            particle.color,
        )?;
    }
    Ok(())
}
