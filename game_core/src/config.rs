use std::time::Duration;

use glam::IVec2;
use thiserror::Error;

use crate::map::GameMap;
use crate::params::Params;

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("screen size must be positive, got {width}x{height}")]
    EmptyScreen { width: i32, height: i32 },
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
    #[error("win score must be at least 1")]
    ZeroWinScore,
    #[error("paddle step must be positive, got {0}")]
    InvalidPaddleStep(i32),
    #[error("paddle {width}x{height} with inset {inset} does not fit the screen")]
    PaddleTooLarge { width: i32, height: i32, inset: i32 },
    #[error("ball size {0} does not fit the screen")]
    BallTooLarge(i32),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_inset: i32,
    pub paddle_step: i32,
    pub ball_size: i32,
    pub win_score: u8,
    pub tick_rate: u32,
    pub score_pause_ms: u32,
    pub banner_ms: u32,
    pub key_repeat_delay_ms: u32,
    pub key_repeat_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_step: Params::PADDLE_STEP,
            ball_size: Params::BALL_SIZE,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            score_pause_ms: Params::SCORE_PAUSE_MS,
            banner_ms: Params::BANNER_MS,
            key_repeat_delay_ms: Params::KEY_REPEAT_DELAY_MS,
            key_repeat_interval_ms: Params::KEY_REPEAT_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Playfield derived from the configured screen size
    pub fn map(&self) -> GameMap {
        GameMap::new(self.screen_width, self.screen_height)
    }

    pub fn paddle_size(&self) -> IVec2 {
        IVec2::new(self.paddle_width, self.paddle_height)
    }

    /// Target duration of one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Number of ticks covering `ms` milliseconds at the configured tick rate
    pub fn ticks_for(&self, ms: u32) -> u32 {
        (u64::from(ms) * u64::from(self.tick_rate) / 1000) as u32
    }

    pub fn score_pause_ticks(&self) -> u32 {
        self.ticks_for(self.score_pause_ms)
    }

    pub fn banner_ticks(&self) -> u32 {
        self.ticks_for(self.banner_ms)
    }

    pub fn key_repeat_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.key_repeat_delay_ms))
    }

    pub fn key_repeat_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.key_repeat_interval_ms))
    }

    /// Validate configuration before starting a session
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.paddle_step <= 0 {
            return Err(ConfigError::InvalidPaddleStep(self.paddle_step));
        }
        if self.paddle_width <= 0
            || self.paddle_height <= 0
            || self.paddle_inset < 0
            || self.paddle_height > self.screen_height
            || 2 * (self.paddle_inset + self.paddle_width) > self.screen_width
        {
            return Err(ConfigError::PaddleTooLarge {
                width: self.paddle_width,
                height: self.paddle_height,
                inset: self.paddle_inset,
            });
        }
        if self.ball_size <= 0
            || self.ball_size > self.screen_height
            || self.ball_size > self.screen_width
        {
            return Err(ConfigError::BallTooLarge(self.ball_size));
        }
        Ok(())
    }
}
