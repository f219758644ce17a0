use crate::{Ball, Events, GameMap, GameState, Paddle, Side};

/// What the ball ran into after moving this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    Paddle(Side),
    Wall,
    /// Ball crossed a side edge; `scorer` is the player on the other side
    Goal { scorer: Side },
}

/// Classify the ball position against paddles and bounds
///
/// First match wins: paddles, then the top/bottom walls, then the left edge,
/// then the right edge. Overlap depth is not resolved; the ball keeps the
/// position it moved to.
pub fn detect_contact(ball: &Ball, left: &Paddle, right: &Paddle, map: &GameMap) -> Contact {
    let bounds = &map.bounds;
    if ball.rect.intersects(&left.rect) {
        Contact::Paddle(left.side)
    } else if ball.rect.intersects(&right.rect) {
        Contact::Paddle(right.side)
    } else if ball.rect.top() < bounds.top() || ball.rect.bottom() > bounds.bottom() {
        Contact::Wall
    } else if ball.rect.left() < bounds.left() {
        Contact::Goal {
            scorer: Side::Right,
        }
    } else if ball.rect.right() > bounds.right() {
        Contact::Goal { scorer: Side::Left }
    } else {
        Contact::None
    }
}

/// Check ball collisions with paddles and walls, flipping the matching
/// velocity component
pub fn check_collisions(state: &mut GameState, events: &mut Events) -> Contact {
    let contact = detect_contact(&state.ball, &state.left, &state.right, &state.map);
    match contact {
        Contact::Paddle(side) => {
            state.ball.bounce_horizontal();
            events.ball_hit_paddle = Some(side);
            tracing::debug!(?side, pos = ?state.ball.rect.pos, "ball hit paddle");
        }
        Contact::Wall => {
            state.ball.bounce_vertical();
            events.ball_hit_wall = true;
        }
        Contact::Goal { .. } | Contact::None => {}
    }
    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, GameRng, Rect};
    use glam::IVec2;

    fn setup_state() -> (GameState, Events) {
        let config = Config::new();
        let state = GameState::new(&config, &mut GameRng::new(12345));
        (state, Events::new())
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut state, mut events) = setup_state();
        // Ball overlapping the left paddle's right face by one unit
        state.ball = Ball::new(
            Rect::new(state.left.rect.right() - 1, 180, 15, 15),
            IVec2::new(-1, 1),
        );

        let contact = check_collisions(&mut state, &mut events);

        assert_eq!(contact, Contact::Paddle(Side::Left));
        assert_eq!(state.ball.vel, IVec2::new(1, 1), "Horizontal component flips");
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut state, mut events) = setup_state();
        state.ball = Ball::new(
            Rect::new(state.right.rect.left() - 14, 180, 15, 15),
            IVec2::new(1, -1),
        );

        let contact = check_collisions(&mut state, &mut events);

        assert_eq!(contact, Contact::Paddle(Side::Right));
        assert_eq!(state.ball.vel, IVec2::new(-1, -1));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut state, mut events) = setup_state();
        state.ball = Ball::new(Rect::new(500, -1, 15, 15), IVec2::new(1, -1));

        let contact = check_collisions(&mut state, &mut events);

        assert_eq!(contact, Contact::Wall);
        assert_eq!(state.ball.vel, IVec2::new(1, 1), "Vertical component flips");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut state, mut events) = setup_state();
        state.ball = Ball::new(Rect::new(500, 386, 15, 15), IVec2::new(-1, 1));

        check_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel, IVec2::new(-1, -1));
    }

    #[test]
    fn test_touching_edges_do_not_bounce() {
        let (mut state, mut events) = setup_state();
        state.ball = Ball::new(Rect::new(500, 0, 15, 15), IVec2::new(1, -1));
        assert_eq!(check_collisions(&mut state, &mut events), Contact::None);

        state.ball = Ball::new(
            Rect::new(state.left.rect.right(), 180, 15, 15),
            IVec2::new(-1, 1),
        );
        assert_eq!(check_collisions(&mut state, &mut events), Contact::None);
        assert_eq!(state.ball.vel, IVec2::new(-1, 1));
    }

    #[test]
    fn test_paddle_takes_precedence_over_wall() {
        let (mut state, mut events) = setup_state();
        state.left.rect.set_top(0);
        // Overlaps the paddle and pokes above the top edge at the same time
        state.ball = Ball::new(
            Rect::new(state.left.rect.right() - 2, -1, 15, 15),
            IVec2::new(-1, -1),
        );

        let contact = check_collisions(&mut state, &mut events);

        assert_eq!(contact, Contact::Paddle(Side::Left));
        assert_eq!(
            state.ball.vel,
            IVec2::new(1, -1),
            "Only the horizontal component flips"
        );
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_wall_takes_precedence_over_goal() {
        let (mut state, mut events) = setup_state();
        state.ball = Ball::new(Rect::new(-1, -1, 15, 15), IVec2::new(-1, -1));

        assert_eq!(check_collisions(&mut state, &mut events), Contact::Wall);
    }

    #[test]
    fn test_goal_detection() {
        let (state, _) = setup_state();
        let left_exit = Ball::new(Rect::new(-1, 100, 15, 15), IVec2::new(-1, 1));
        let right_exit = Ball::new(Rect::new(986, 100, 15, 15), IVec2::new(1, 1));

        assert_eq!(
            detect_contact(&left_exit, &state.left, &state.right, &state.map),
            Contact::Goal {
                scorer: Side::Right
            }
        );
        assert_eq!(
            detect_contact(&right_exit, &state.left, &state.right, &state.map),
            Contact::Goal { scorer: Side::Left }
        );
    }
}
