//! Scene painting: playfield frame and full-screen banners

use game_core::{GameMap, GameState, Rect, Score, Side};
use glam::IVec2;

use super::{Color, FontSize, Surface, Text, TextRenderer};

pub const DASH_LENGTH: i32 = 10;
pub const LINE_WIDTH: i32 = 5;
/// Gap between score text and the screen edges
const SCORE_MARGIN: i32 = 20;
const PLAYFIELD_MESSAGE: &str = " LET'S SCOOOOORE ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Full-screen transient messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Welcome,
    Goodbye,
    Winner(Side),
}

impl Banner {
    pub fn message(self) -> String {
        match self {
            Banner::Welcome => "Welcome to Pong!".to_string(),
            Banner::Goodbye => "Goodbye! Thanks for playing!".to_string(),
            Banner::Winner(side) => format!("player {} you're awesome", side.player_number()),
        }
    }

    pub fn color(self) -> Color {
        match self {
            Banner::Welcome | Banner::Goodbye => Color::WHITE,
            Banner::Winner(side) => paddle_color(side),
        }
    }
}

pub fn paddle_color(side: Side) -> Color {
    match side {
        Side::Left => Color::MAGENTA,
        Side::Right => Color::BLUE,
    }
}

/// Text shown in the middle of the playfield during play
pub fn playfield_message(text: &impl TextRenderer) -> Text {
    text.render(PLAYFIELD_MESSAGE, FontSize::Banner, Color::GREEN)
}

/// Dash segments from `start` to `end`, one every two dash lengths, on the
/// row or column at `line`
pub fn dashed_line(start: i32, end: i32, line: i32, orientation: Orientation) -> Vec<Rect> {
    let half = LINE_WIDTH / 2;
    (start..end)
        .step_by((DASH_LENGTH * 2) as usize)
        .map(|i| match orientation {
            Orientation::Horizontal => Rect::new(i, line - half, DASH_LENGTH, LINE_WIDTH),
            Orientation::Vertical => Rect::new(line - half, i, LINE_WIDTH, DASH_LENGTH),
        })
        .collect()
}

/// Background, dashed border and center line, score text and the message
///
/// Text is measured on every call so a resized surface lays it out afresh.
pub fn draw_background<C>(canvas: &mut C, map: &GameMap, score: &Score)
where
    C: Surface + TextRenderer,
{
    let bounds = map.bounds;
    canvas.clear(Color::BLACK);
    let message = playfield_message(&*canvas);
    canvas.blit_text(&message, message.centered_at(map.center()).pos);

    let rows = [bounds.top(), bounds.bottom() - DASH_LENGTH];
    let mut dashes: Vec<Rect> = rows
        .iter()
        .flat_map(|&y| dashed_line(bounds.left(), bounds.right(), y, Orientation::Horizontal))
        .collect();
    dashes.extend(dashed_line(
        bounds.top(),
        bounds.bottom() - DASH_LENGTH,
        bounds.center().x,
        Orientation::Vertical,
    ));
    for dash in dashes {
        canvas.fill_rect(dash, Color::WHITE);
    }

    let left = canvas.render(&format!("P1: {}", score.left), FontSize::Score, Color::GREEN);
    let right = canvas.render(&format!("P2: {}", score.right), FontSize::Score, Color::GREEN);
    canvas.blit_text(
        &left,
        IVec2::new(bounds.left() + SCORE_MARGIN, SCORE_MARGIN),
    );
    canvas.blit_text(
        &right,
        IVec2::new(bounds.right() - right.width() - SCORE_MARGIN, SCORE_MARGIN),
    );
}

/// Paddles and ball as filled rectangles
pub fn draw_objects(canvas: &mut impl Surface, state: &GameState) {
    for side in [Side::Left, Side::Right] {
        canvas.fill_rect(state.paddle(side).rect, paddle_color(side));
    }
    canvas.fill_rect(state.ball.rect, Color::RED);
}

/// Black screen with the banner text centered
pub fn draw_banner<C>(canvas: &mut C, map: &GameMap, banner: Banner)
where
    C: Surface + TextRenderer,
{
    canvas.clear(Color::BLACK);
    let text = canvas.render(&banner.message(), FontSize::Banner, banner.color());
    canvas.blit_text(&text, text.centered_at(map.center()).pos);
}
