//! Test doubles for the host collaborators

use std::collections::VecDeque;

use game_core::Rect;
use glam::IVec2;
use ratatui::crossterm::event::Event;

use crate::error::ClientError;
use crate::input::EventSource;
use crate::pacer::Pacer;
use crate::renderer::{Color, FontSize, Surface, Text, TextRenderer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Color),
    Fill(Rect, Color),
    Text {
        content: String,
        color: Color,
        font: FontSize,
        at: IVec2,
    },
}

/// Surface that keeps every presented frame as a list of draw calls
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub current: Vec<DrawOp>,
    pub frames: Vec<Vec<DrawOp>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawOp] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn texts(frame: &[DrawOp]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fills(frame: &[DrawOp], color: Color) -> Vec<Rect> {
        frame
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill(rect, c) if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.current.clear();
        self.current.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.current.push(DrawOp::Fill(rect, color));
    }

    fn blit_text(&mut self, text: &Text, top_left: IVec2) {
        self.current.push(DrawOp::Text {
            content: text.content.clone(),
            color: text.color,
            font: text.font,
            at: top_left,
        });
    }

    fn present(&mut self) -> Result<(), ClientError> {
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

impl TextRenderer for RecordingSurface {
    /// Monospace metrics: half the point size per character, one point-size tall
    fn render(&self, content: &str, font: FontSize, color: Color) -> Text {
        let points = i32::from(font.points());
        Text {
            content: content.to_string(),
            font,
            color,
            size: IVec2::new(content.chars().count() as i32 * points / 2, points),
        }
    }
}

/// Event source replaying one batch of events per tick
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    pub batches: VecDeque<Vec<Event>>,
}

impl ScriptedEvents {
    pub fn new(batches: Vec<Vec<Event>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self) -> Result<Vec<Event>, ClientError> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}

#[derive(Debug, Default)]
pub struct NoPacing {
    pub waits: usize,
}

impl Pacer for NoPacing {
    fn wait(&mut self) {
        self.waits += 1;
    }
}
