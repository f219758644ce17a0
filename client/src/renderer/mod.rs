pub mod draw;
pub mod resources;
pub mod terminal;

use game_core::Rect;
use glam::IVec2;

use crate::error::ClientError;
pub use resources::{Color, FontSize, Text};

/// Fixed-size drawing target, painted once per tick and then presented
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn blit_text(&mut self, text: &Text, top_left: IVec2);
    /// Show everything drawn since the last clear
    fn present(&mut self) -> Result<(), ClientError>;
}

/// Text service: renders a string at one of the fixed sizes
pub trait TextRenderer {
    fn render(&self, content: &str, font: FontSize, color: Color) -> Text;
}
