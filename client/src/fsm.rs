//! Game State Machine
//!
//! Session flow: welcome banner, play, winner banner between rounds, goodbye
//! banner on quit.

use game_core::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Init,
    Welcome,
    Playing,
    /// Winner banner for the side that took the round
    Winner(Side),
    Goodbye,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    BannerDone,
    Won(Side),
    Quit,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Init,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::info!(from = ?from_state, to = ?next_state, ?action, "state transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::warn!(state = ?from_state, ?action, "rejected transition");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Init, GameAction::Start) => Some(FsmState::Welcome),

            (FsmState::Welcome, GameAction::BannerDone) => Some(FsmState::Playing),
            (FsmState::Welcome, GameAction::Quit) => Some(FsmState::Goodbye),

            (FsmState::Playing, GameAction::Won(side)) => Some(FsmState::Winner(side)),
            (FsmState::Playing, GameAction::Quit) => Some(FsmState::Goodbye),

            (FsmState::Winner(_), GameAction::BannerDone) => Some(FsmState::Playing),
            (FsmState::Winner(_), GameAction::Quit) => Some(FsmState::Goodbye),

            (FsmState::Goodbye, GameAction::BannerDone) => Some(FsmState::Terminated),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if a quit request is still honored in the current state
    pub fn accepts_quit(&self) -> bool {
        self.can_transition(GameAction::Quit)
    }

    /// Check if one of the timed banner screens is showing
    pub fn is_banner(&self) -> bool {
        matches!(
            self.state,
            FsmState::Welcome | FsmState::Winner(_) | FsmState::Goodbye
        )
    }

    pub fn is_terminated(&self) -> bool {
        self.state == FsmState::Terminated
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Init);
        assert!(!fsm.is_banner());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Init);
        assert_eq!(fsm.state(), FsmState::Welcome);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Won(Side::Left));
        assert!(!result.success);
        assert_eq!(result.to_state, FsmState::Init);
        assert_eq!(fsm.state(), FsmState::Init);
    }

    #[test]
    fn test_session_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        fsm.transition(GameAction::BannerDone);
        assert_eq!(fsm.state(), FsmState::Playing);
        fsm.transition(GameAction::Won(Side::Right));
        assert_eq!(fsm.state(), FsmState::Winner(Side::Right));
        assert!(fsm.is_banner());
        fsm.transition(GameAction::BannerDone);
        assert_eq!(fsm.state(), FsmState::Playing);
        fsm.transition(GameAction::Quit);
        assert_eq!(fsm.state(), FsmState::Goodbye);
        fsm.transition(GameAction::BannerDone);
        assert!(fsm.is_terminated());
    }

    #[test]
    fn test_quit_accepted_during_banners() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Start);
        assert!(fsm.accepts_quit(), "Welcome screen can be skipped to goodbye");
        fsm.transition(GameAction::Quit);
        assert_eq!(fsm.state(), FsmState::Goodbye);
        assert!(!fsm.accepts_quit(), "Goodbye always runs to completion");
        assert!(!fsm.transition(GameAction::Quit).success);
    }
}
