//! Terminal display surface
//!
//! The logical playfield is scaled onto the whole terminal grid. Filled
//! rectangles become background-colored cells and text is laid out one cell
//! per character.

use game_core::Rect;
use glam::IVec2;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as Area;
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::widgets::Widget;
use ratatui::DefaultTerminal;

use super::{Color, FontSize, Surface, Text, TextRenderer};
use crate::error::ClientError;

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        TermColor::Rgb(color.r, color.g, color.b)
    }
}

/// Mapping between logical units and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    area: Area,
    cell_w: f32,
    cell_h: f32,
}

impl Scale {
    pub fn new(logical: IVec2, area: Area) -> Self {
        Self {
            area,
            cell_w: logical.x as f32 / f32::from(area.width.max(1)),
            cell_h: logical.y as f32 / f32::from(area.height.max(1)),
        }
    }

    /// Logical size of one cell
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_w, self.cell_h)
    }

    /// Cell containing a logical point, if it is on screen
    pub fn cell_at(&self, point: IVec2) -> Option<(u16, u16)> {
        let col = (point.x as f32 / self.cell_w).floor();
        let row = (point.y as f32 / self.cell_h).floor();
        if col < 0.0
            || row < 0.0
            || col >= f32::from(self.area.width)
            || row >= f32::from(self.area.height)
        {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Cells covered by a logical rectangle, clipped to the grid
    ///
    /// Anything thinner than a cell still covers the cell it starts in.
    pub fn cells(&self, rect: Rect) -> Option<Area> {
        let span = |start: i32, end: i32, cell: f32, len: u16| -> Option<(u16, u16)> {
            let first = (start as f32 / cell).floor();
            let last = (end as f32 / cell).ceil();
            if last <= 0.0 || first >= f32::from(len) {
                return None;
            }
            let first = first.max(0.0);
            let last = last.max(first + 1.0).min(f32::from(len));
            Some((first as u16, (last - first) as u16))
        };
        if rect.width() <= 0 || rect.height() <= 0 {
            return None;
        }
        let (col, width) = span(rect.left(), rect.right(), self.cell_w, self.area.width)?;
        let (row, height) = span(rect.top(), rect.bottom(), self.cell_h, self.area.height)?;
        Some(Area::new(self.area.x + col, self.area.y + row, width, height))
    }
}

#[derive(Debug, Clone)]
enum DrawItem {
    Fill(Rect, Color),
    Text {
        content: String,
        color: Color,
        bold: bool,
        at: IVec2,
    },
}

/// Draw calls collected since the last clear
#[derive(Debug, Clone)]
struct DisplayList {
    background: Color,
    items: Vec<DrawItem>,
}

struct DisplayWidget<'a> {
    list: &'a DisplayList,
    logical: IVec2,
}

impl Widget for DisplayWidget<'_> {
    fn render(self, area: Area, buf: &mut Buffer) {
        let scale = Scale::new(self.logical, area);
        fill_cells(buf, area, self.list.background);

        for item in &self.list.items {
            match item {
                DrawItem::Fill(rect, color) => {
                    if let Some(cells) = scale.cells(*rect) {
                        fill_cells(buf, cells, *color);
                    }
                }
                DrawItem::Text {
                    content,
                    color,
                    bold,
                    at,
                } => {
                    let Some((col, row)) = scale.cell_at(*at) else {
                        continue;
                    };
                    let mut style = Style::default().fg((*color).into());
                    if *bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    let max_width = usize::from(area.right().saturating_sub(col));
                    buf.set_stringn(col, row, content, max_width, style);
                }
            }
        }
    }
}

fn fill_cells(buf: &mut Buffer, cells: Area, color: Color) {
    for y in cells.top()..cells.bottom() {
        for x in cells.left()..cells.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.reset();
                cell.set_bg(color.into());
            }
        }
    }
}

/// Surface and text service backed by the full-screen terminal
pub struct TerminalCanvas {
    terminal: DefaultTerminal,
    logical: IVec2,
    grid: Area,
    list: DisplayList,
}

impl TerminalCanvas {
    pub fn new(terminal: DefaultTerminal, logical: IVec2) -> Result<Self, ClientError> {
        let size = terminal.size()?;
        Ok(Self {
            terminal,
            logical,
            grid: Area::new(0, 0, size.width, size.height),
            list: DisplayList {
                background: Color::BLACK,
                items: Vec::new(),
            },
        })
    }
}

impl Surface for TerminalCanvas {
    fn clear(&mut self, color: Color) {
        self.list.background = color;
        self.list.items.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.list.items.push(DrawItem::Fill(rect, color));
    }

    fn blit_text(&mut self, text: &Text, top_left: IVec2) {
        self.list.items.push(DrawItem::Text {
            content: text.content.clone(),
            color: text.color,
            bold: text.font == FontSize::Banner,
            at: top_left,
        });
    }

    fn present(&mut self) -> Result<(), ClientError> {
        let widget = DisplayWidget {
            list: &self.list,
            logical: self.logical,
        };
        let frame = self.terminal.draw(|frame| frame.render_widget(widget, frame.area()))?;
        // Resizes are picked up here and used to measure the next frame's text
        self.grid = frame.area;
        Ok(())
    }
}

impl TextRenderer for TerminalCanvas {
    fn render(&self, content: &str, font: FontSize, color: Color) -> Text {
        let (cell_w, cell_h) = Scale::new(self.logical, self.grid).cell_size();
        let chars = content.chars().count() as f32;
        Text {
            content: content.to_string(),
            font,
            color,
            size: IVec2::new((chars * cell_w).ceil() as i32, cell_h.ceil() as i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> Scale {
        // 100x40 grid: each cell is 10x10 logical units
        Scale::new(IVec2::new(1000, 400), Area::new(0, 0, 100, 40))
    }

    #[test]
    fn test_cell_at() {
        let scale = scale();
        assert_eq!(scale.cell_at(IVec2::new(0, 0)), Some((0, 0)));
        assert_eq!(scale.cell_at(IVec2::new(505, 199)), Some((50, 19)));
        assert_eq!(scale.cell_at(IVec2::new(-1, 5)), None);
        assert_eq!(scale.cell_at(IVec2::new(1000, 5)), None);
    }

    #[test]
    fn test_cells_cover_rect() {
        let scale = scale();
        // Paddle 15..30 x 170..230
        assert_eq!(
            scale.cells(Rect::new(15, 170, 15, 60)),
            Some(Area::new(1, 17, 2, 6))
        );
        // Ball 493..508 x 193..208
        assert_eq!(
            scale.cells(Rect::new(493, 193, 15, 15)),
            Some(Area::new(49, 19, 2, 2))
        );
    }

    #[test]
    fn test_cells_clip_and_keep_thin_lines() {
        let scale = scale();
        // Top dash half above the screen
        assert_eq!(
            scale.cells(Rect::new(0, -2, 10, 5)),
            Some(Area::new(0, 0, 1, 1))
        );
        // Off screen entirely
        assert_eq!(scale.cells(Rect::new(-30, 10, 15, 15)), None);
        assert_eq!(scale.cells(Rect::new(1000, 10, 15, 15)), None);
    }

    #[test]
    fn test_display_widget_paints_cells() {
        let list = DisplayList {
            background: Color::BLACK,
            items: vec![
                DrawItem::Fill(Rect::new(493, 193, 15, 15), Color::RED),
                DrawItem::Text {
                    content: "P1: 0".to_string(),
                    color: Color::GREEN,
                    bold: false,
                    at: IVec2::new(20, 20),
                },
            ],
        };
        let area = Area::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);

        DisplayWidget {
            list: &list,
            logical: IVec2::new(1000, 400),
        }
        .render(area, &mut buf);

        assert_eq!(buf[(50, 20)].bg, TermColor::Rgb(255, 0, 0));
        assert_eq!(buf[(0, 0)].bg, TermColor::Rgb(0, 0, 0));
        assert_eq!(buf[(2, 2)].symbol(), "P");
        assert_eq!(buf[(6, 2)].symbol(), "0");
        assert_eq!(buf[(2, 2)].fg, TermColor::Rgb(0, 128, 0));
    }
}
