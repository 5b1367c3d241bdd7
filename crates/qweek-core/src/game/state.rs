//! Game state machine states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a session is in the game.
///
/// Transitions are strictly linear:
/// `Round1 -> Result1 -> Round2 -> Result2 -> Final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Round1,
    Result1,
    Round2,
    Result2,
    Final,
}

impl GameState {
    /// States during which the elapsed-time counter advances.
    ///
    /// Result screens pause the counter; it stops for good after round 2.
    pub fn is_timed(self) -> bool {
        matches!(self, GameState::Round1 | GameState::Round2)
    }

    /// The state that follows this one, `None` for `Final`.
    pub fn successor(self) -> Option<GameState> {
        match self {
            GameState::Round1 => Some(GameState::Result1),
            GameState::Result1 => Some(GameState::Round2),
            GameState::Round2 => Some(GameState::Result2),
            GameState::Result2 => Some(GameState::Final),
            GameState::Final => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Round1 => "round1",
            GameState::Result1 => "result1",
            GameState::Round2 => "round2",
            GameState::Result2 => "result2",
            GameState::Final => "final",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_chain_is_linear() {
        let mut state = GameState::Round1;
        let mut visited = vec![state];
        while let Some(next) = state.successor() {
            visited.push(next);
            state = next;
        }
        assert_eq!(
            visited,
            vec![
                GameState::Round1,
                GameState::Result1,
                GameState::Round2,
                GameState::Result2,
                GameState::Final
            ]
        );
    }

    #[test]
    fn test_timed_states() {
        assert!(GameState::Round1.is_timed());
        assert!(GameState::Round2.is_timed());
        assert!(!GameState::Result1.is_timed());
        assert!(!GameState::Final.is_timed());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&GameState::Result2).unwrap(),
            "\"result2\""
        );
        assert_eq!(GameState::Round1.to_string(), "round1");
    }
}
