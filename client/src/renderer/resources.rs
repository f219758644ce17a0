use game_core::Rect;
use glam::IVec2;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The two fixed text sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Banner, // 48pt
    Score,  // 36pt
}

impl FontSize {
    pub fn points(self) -> u16 {
        match self {
            FontSize::Banner => 48,
            FontSize::Score => 36,
        }
    }
}

/// Rendered text ready to blit, with its measured size in logical units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub font: FontSize,
    pub color: Color,
    pub size: IVec2,
}

impl Text {
    /// Bounding box centered on `center`
    pub fn centered_at(&self, center: IVec2) -> Rect {
        Rect::from_center_size(center, self.size)
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }
}
