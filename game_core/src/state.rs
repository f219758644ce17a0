use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::map::GameMap;
use crate::resources::{GameRng, Score, ServePause};

/// Everything that changes during a session, owned by the game loop and
/// threaded through each system by reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub map: GameMap,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub serve: ServePause,
}

impl GameState {
    /// Fresh session: paddles at their spawns, ball served from the center
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let map = config.map();
        let paddle_size = config.paddle_size();
        Self {
            map,
            left: Paddle::new(
                Side::Left,
                map.paddle_spawn(Side::Left, paddle_size, config.paddle_inset),
            ),
            right: Paddle::new(
                Side::Right,
                map.paddle_spawn(Side::Right, paddle_size, config.paddle_inset),
            ),
            ball: Ball::serve(&map, config.ball_size, rng),
            score: Score::new(),
            serve: ServePause::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
