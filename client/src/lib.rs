//! Terminal front end for two-player Pong
//!
//! The game loop in [`app`] is generic over its display, input and pacing so
//! it runs the same against the real terminal and the recording doubles used
//! in tests.

pub mod app;
pub mod error;
pub mod fsm;
pub mod host;
pub mod input;
pub mod logging;
pub mod pacer;
pub mod renderer;

#[cfg(test)]
mod testing;

pub use app::App;
pub use error::ClientError;
pub use fsm::{FsmState, GameAction, GameFsm};
