use glam::IVec2;
use rand::Rng;

use crate::map::{GameMap, Rect};
use crate::resources::GameRng;

/// Which side of the screen a paddle (and its player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player 1
    Right, // Player 2
}

impl Side {
    /// 1-based player number shown to the players
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Vertical paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Sign of the y displacement (screen y grows downwards)
    pub fn dy(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Paddle - a player's rectangle, constrained to vertical movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }
}

/// Ball - a square with a velocity of exactly ±1 on each axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Spawn at the screen center heading in a random diagonal direction
    pub fn serve(map: &GameMap, size: i32, rng: &mut GameRng) -> Self {
        let vx = if rng.0.gen_bool(0.5) { 1 } else { -1 };
        let vy = if rng.0.gen_bool(0.5) { 1 } else { -1 };
        Self::new(map.ball_spawn(size), IVec2::new(vx, vy))
    }

    /// Put the ball back on the exact screen center; direction is kept
    pub fn recenter(&mut self, map: &GameMap) {
        self.rect.set_center(map.center());
    }

    pub fn bounce_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// Movement command for one paddle, produced by the input mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleCommand {
    pub side: Side,
    pub dir: Direction,
}

impl PaddleCommand {
    pub fn new(side: Side, dir: Direction) -> Self {
        Self { side, dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_is_centered_with_unit_velocity() {
        let map = GameMap::new(1000, 400);
        let mut rng = GameRng::new(7);
        for _ in 0..32 {
            let ball = Ball::serve(&map, 15, &mut rng);
            assert_eq!(ball.rect.center(), map.center());
            assert_eq!(ball.vel.x.abs(), 1);
            assert_eq!(ball.vel.y.abs(), 1);
        }
    }

    #[test]
    fn test_recenter_keeps_velocity() {
        let map = GameMap::new(1000, 400);
        let mut ball = Ball::new(Rect::new(-3, 50, 15, 15), IVec2::new(-1, 1));
        ball.recenter(&map);
        assert_eq!(ball.rect.center(), IVec2::new(500, 200));
        assert_eq!(ball.vel, IVec2::new(-1, 1));
    }

    #[test]
    fn test_side_helpers() {
        assert_eq!(Side::Left.player_number(), 1);
        assert_eq!(Side::Right.player_number(), 2);
        assert_eq!(Direction::Up.dy(), -1);
        assert_eq!(Direction::Down.dy(), 1);
    }
}
