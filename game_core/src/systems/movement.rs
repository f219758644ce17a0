use crate::Ball;

/// Move ball by its velocity vector
pub fn move_ball(ball: &mut Ball) {
    ball.rect = ball.rect.translated(ball.vel);
}
