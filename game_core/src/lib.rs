pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use state::*;

pub use systems::*;

/// Run one deterministic Pong physics tick
///
/// Paddle commands are applied separately through [`ingest_inputs`] so the
/// game loop can draw between input and physics. Returns the side that won
/// the round this tick, if any; the score is already reset when it does.
pub fn step(state: &mut GameState, config: &Config, events: &mut Events) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // Ball held at the center after a point
    if !state.serve.tick() {
        return None;
    }

    // 1. Move ball
    move_ball(&mut state.ball);

    // 2. Check collisions (ball vs paddles, walls)
    let contact = check_collisions(state, events);

    // 3. Check scoring (ball exited arena)
    check_scoring(state, contact, config, events);

    // 4. Check for a round winner
    check_winner(state, config, events)
}
