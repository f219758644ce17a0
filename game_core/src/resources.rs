use crate::components::{PaddleCommand, Side};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player 1
    pub right: u8, // Player 2
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that reached `win_score`, left checked first
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_paddle: Option<Side>,
    pub ball_hit_wall: bool,
    pub scored: Option<Side>,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Serve pause: the ball is held still for a number of ticks after a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServePause {
    pub ticks_left: u32,
}

impl ServePause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, ticks: u32) {
        self.ticks_left = ticks;
    }

    /// Consume one tick of the pause; true once the ball may move
    pub fn tick(&mut self) -> bool {
        if self.ticks_left > 0 {
            self.ticks_left -= 1;
            false
        } else {
            true
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }
}

/// Paddle commands collected from the input layer since the last ingest
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub commands: Vec<PaddleCommand>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PaddleCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}
