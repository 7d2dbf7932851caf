//! Match State Machine
//!
//! Tracks whether the simulation should advance and why it stopped.

use crate::components::Side;

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Nothing served yet
    Idle,
    Running,
    /// A point was lost; waiting for an explicit continue
    Paused { missed: Side },
    /// Terminal until a new match is started
    GameOver { winner: Side },
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    /// Difficulty selected while not running
    Start,
    /// A side let the ball through without losing the match
    Miss(Side),
    /// A side reached the winning score
    Win(Side),
    Continue,
    /// Fresh match with zeroed scores
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::Idle,
        }
    }

    /// Get current state
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            log::debug!("match state {:?} -> {:?} on {:?}", from_state, next_state, action);
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (_, MatchAction::Restart) => Some(MatchState::Running),

            (MatchState::Idle, MatchAction::Start) => Some(MatchState::Running),
            (MatchState::Paused { .. }, MatchAction::Start) => Some(MatchState::Running),

            (MatchState::Running, MatchAction::Miss(side)) => {
                Some(MatchState::Paused { missed: side })
            }
            (MatchState::Running, MatchAction::Win(side)) => {
                Some(MatchState::GameOver { winner: side })
            }

            (MatchState::Paused { .. }, MatchAction::Continue) => Some(MatchState::Running),

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the simulation should advance (and the frame loop re-arm)
    pub fn is_running(&self) -> bool {
        self.state == MatchState::Running
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, MatchState::Paused { .. })
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, MatchState::GameOver { .. })
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.state(), MatchState::Idle);
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Start);
        assert!(result.success);
        assert_eq!(result.from_state, MatchState::Idle);
        assert_eq!(fsm.state(), MatchState::Running);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::Continue);
        assert!(!result.success);
        assert_eq!(result.to_state, MatchState::Idle);
        assert_eq!(fsm.state(), MatchState::Idle);
    }

    #[test]
    fn test_point_flow() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::Miss(Side::Left));
        assert_eq!(fsm.state(), MatchState::Paused { missed: Side::Left });
        assert!(fsm.is_paused());
        assert!(!fsm.can_transition(MatchAction::Miss(Side::Right)));
        fsm.transition(MatchAction::Continue);
        assert_eq!(fsm.state(), MatchState::Running);
    }

    #[test]
    fn test_game_over_is_terminal_until_restart() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::Win(Side::Right));
        assert_eq!(fsm.state(), MatchState::GameOver { winner: Side::Right });

        for action in [
            MatchAction::Start,
            MatchAction::Continue,
            MatchAction::Miss(Side::Left),
            MatchAction::Win(Side::Left),
        ] {
            assert!(!fsm.transition(action).success, "{:?} must be rejected", action);
        }
        assert!(fsm.is_game_over());

        assert!(fsm.transition(MatchAction::Restart).success);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_start_resumes_from_pause() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::Start);
        fsm.transition(MatchAction::Miss(Side::Right));
        assert!(fsm.transition(MatchAction::Start).success);
        assert!(fsm.is_running());
        assert!(!fsm.can_transition(MatchAction::Start), "Already running");
    }
}
