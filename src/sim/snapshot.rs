//! Read-only view of a session for renderers

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GamePhase, GameState, Pose};

/// What the renderer needs to draw the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub pose: Pose,
}

/// Everything drawn in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: PlayerView,
    pub platforms: Vec<Rect>,
    pub obstacles: Vec<Rect>,
    /// Rounded for display
    pub score: u64,
    pub phase: GamePhase,
    pub ended: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: PlayerView {
                rect: state.player.rect(),
                pose: state.player.pose(),
            },
            platforms: state.platforms.iter().map(|p| p.rect()).collect(),
            obstacles: state.obstacles.iter().map(|o| o.rect()).collect(),
            score: state.final_score(),
            phase: state.phase,
            ended: state.is_ended(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Field;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::restart(Field::new(500.0, 800.0), Tuning::default(), 6);
        state.score = 12.6;
        let snap = state.snapshot();
        assert_eq!(snap.player.rect, Rect::new(235.0, 400.0, 30.0, 30.0));
        assert_eq!(snap.platforms.len(), 10);
        assert!(snap.obstacles.is_empty());
        assert_eq!(snap.score, 13);
        assert!(!snap.ended);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let state = GameState::new(Field::default(), Tuning::default(), 6);
        let json = state.snapshot().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Ready");
        assert_eq!(value["player"]["pose"], "Front");
        assert_eq!(value["platforms"].as_array().map(|a| a.len()), Some(10));
    }
}
