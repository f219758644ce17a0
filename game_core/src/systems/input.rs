use crate::components::{Direction, Paddle};
use crate::map::GameMap;
use crate::resources::InputQueue;
use crate::state::GameState;

/// Apply every queued paddle command, in arrival order
pub fn ingest_inputs(state: &mut GameState, input: &mut InputQueue, step: i32) {
    let map = state.map;
    for command in input.commands.drain(..) {
        move_paddle(state.paddle_mut(command.side), command.dir, step, &map);
    }
}

/// Move a paddle one step and clamp it fully inside the vertical bounds
pub fn move_paddle(paddle: &mut Paddle, dir: Direction, step: i32, map: &GameMap) {
    let moved = paddle.rect.translated(glam::IVec2::new(0, dir.dy() * step));
    paddle.rect = map.clamp_vertical(moved);
}
