/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (logical units, origin top-left, y grows down)
    pub const SCREEN_WIDTH: i32 = 1000;
    pub const SCREEN_HEIGHT: i32 = 400;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 60;
    pub const PADDLE_INSET: i32 = 15; // Gap between paddle and its side edge
    pub const PADDLE_STEP: i32 = 14; // Units moved per key-down

    // Ball
    pub const BALL_SIZE: i32 = 15;

    // Score
    pub const WIN_SCORE: u8 = 2; // First to 2 wins the round

    // Timing
    pub const TICK_RATE: u32 = 100; // Frame cap in Hz
    pub const SCORE_PAUSE_MS: u32 = 700; // Ball held at center after a point
    pub const BANNER_MS: u32 = 2000; // Welcome / winner / goodbye screens

    // Host key auto-repeat
    pub const KEY_REPEAT_DELAY_MS: u32 = 50;
    pub const KEY_REPEAT_INTERVAL_MS: u32 = 50;
}
