use glam::IVec2;

use crate::components::Side;

/// Axis-aligned integer rectangle (top-left position plus size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    /// Rectangle of `size` whose center lands exactly on `center`
    pub fn from_center_size(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    pub fn set_top(&mut self, top: i32) {
        self.pos.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.pos.y = bottom - self.size.y;
    }

    /// Copy of this rectangle shifted by `offset`
    pub fn translated(&self, offset: IVec2) -> Self {
        Self {
            pos: self.pos + offset,
            size: self.size,
        }
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Check if `other` lies fully inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Playfield definition: the immutable screen bounds plus spawn positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub bounds: Rect,
}

impl GameMap {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Rect::new(0, 0, width, height),
        }
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn center(&self) -> IVec2 {
        self.bounds.center()
    }

    /// Ball rectangle at the exact screen center
    pub fn ball_spawn(&self, ball_size: i32) -> Rect {
        Rect::from_center_size(self.center(), IVec2::splat(ball_size))
    }

    /// Paddle rectangle at its starting position, vertically centered and
    /// `inset` units away from its side edge
    pub fn paddle_spawn(&self, side: Side, size: IVec2, inset: i32) -> Rect {
        let top = self.center().y - size.y / 2;
        let left = match side {
            Side::Left => self.bounds.left() + inset,
            Side::Right => self.bounds.right() - inset - size.x,
        };
        Rect {
            pos: IVec2::new(left, top),
            size,
        }
    }

    /// Pull a rectangle back inside the vertical bounds
    ///
    /// The bottom edge is checked first; a rectangle taller than the screen
    /// ends up bottom-aligned.
    pub fn clamp_vertical(&self, mut rect: Rect) -> Rect {
        if rect.bottom() > self.bounds.bottom() {
            rect.set_bottom(self.bounds.bottom());
        } else if rect.top() < self.bounds.top() {
            rect.set_top(self.bounds.top());
        }
        rect
    }
}
