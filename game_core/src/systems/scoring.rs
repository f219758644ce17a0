use crate::{Config, Contact, Events, GameState, Side};

/// Award a point when the ball crossed a side edge
///
/// The ball is put back on the exact screen center and held there for the
/// score pause.
pub fn check_scoring(state: &mut GameState, contact: Contact, config: &Config, events: &mut Events) {
    if let Contact::Goal { scorer } = contact {
        state.score.increment(scorer);
        events.scored = Some(scorer);
        state.ball.recenter(&state.map);
        state.serve.start(config.score_pause_ticks());
        tracing::debug!(
            player = scorer.player_number(),
            left = state.score.left,
            right = state.score.right,
            "point scored"
        );
    }
}

/// Check whether a side reached the win score
///
/// On a win both scores go back to zero and the ball is recentered and held
/// for the score pause, ready for the next round.
pub fn check_winner(state: &mut GameState, config: &Config, events: &mut Events) -> Option<Side> {
    let winner = state.score.has_winner(config.win_score)?;
    state.score.reset();
    state.ball.recenter(&state.map);
    state.serve.start(config.score_pause_ticks());
    events.winner = Some(winner);
    tracing::info!(player = winner.player_number(), "round won");
    Some(winner)
}
