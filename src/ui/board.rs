use rand::Rng;

use super::geometry::{Point, Rect, Size};
use super::level::LevelRules;
use super::palette::{self, Color};
use super::state::{Card, CardStatus};
use super::toolbox;

pub const CARD_FACE_INSET: f64 = 2.0;

/// Two copies of each of the first `card_count / 2` palette entries. A short
/// palette is repeated until it covers every pair.
pub fn pair_values(palette: &[Color], card_count: usize) -> Vec<Color> {
    let pair_count = card_count / 2;
    if palette.is_empty() {
        return Vec::new();
    }

    let mut pool = palette.to_vec();
    while pool.len() < pair_count {
        pool.extend_from_within(..);
    }
    pool.truncate(pair_count);

    pool.into_iter().flat_map(|color| [color, color]).collect()
}

pub fn cell_rect(rules: &LevelRules, surface: Size, row: usize, col: usize) -> Rect {
    let card_width = surface.width / rules.cols as f64;
    let card_height = surface.height / rules.rows as f64;
    Rect::new(
        col as f64 * card_width,
        row as f64 * card_height,
        card_width,
        card_height,
    )
}

/// Places `values` row-major; a short last row is left partly empty.
pub fn layout_cards(values: Vec<Color>, rules: &LevelRules, surface: Size) -> Vec<Card> {
    if rules.cols == 0 || rules.rows == 0 {
        return Vec::new();
    }
    values
        .into_iter()
        .take(rules.rows * rules.cols)
        .enumerate()
        .map(|(index, color)| {
            let row = index / rules.cols;
            let col = index % rules.cols;
            Card {
                row,
                col,
                rect: cell_rect(rules, surface, row, col),
                color,
                status: CardStatus::Hidden,
            }
        })
        .collect()
}

pub fn generate<R: Rng + ?Sized>(rules: &LevelRules, surface: Size, rng: &mut R) -> Vec<Card> {
    let palette = palette::build_palette(rules.palette, rng);
    let values = toolbox::shuffled(rng, pair_values(&palette, rules.card_count));
    layout_cards(values, rules, surface)
}

/// First card whose rectangle holds `point`.
pub fn card_at(cards: &[Card], point: Point) -> Option<usize> {
    cards.iter().position(|card| card.rect.contains(point))
}
