//! HUD text

use std::fmt;

use crate::sim::{GamePhase, GameState};

/// The single status line shown over the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// Nothing played yet
    Title,
    Riding { score: u64 },
    Paused { score: u64 },
    GameOver { score: u64 },
}

impl Banner {
    pub fn for_state(state: &GameState, paused: bool) -> Self {
        let score = state.score();
        match state.phase {
            GamePhase::Running if paused => Banner::Paused { score },
            GamePhase::Running => Banner::Riding { score },
            GamePhase::Idle if state.runs == 0 => Banner::Title,
            GamePhase::Idle => Banner::GameOver { score },
        }
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::Title => write!(f, "Press R or Start"),
            Banner::Riding { score } => write!(f, "Score: {score}"),
            Banner::Paused { score } => write!(f, "Paused - Score: {score} | Press P"),
            Banner::GameOver { score } => {
                write!(f, "Game over - Score: {score} | Press R or Start")
            }
        }
    }
}
