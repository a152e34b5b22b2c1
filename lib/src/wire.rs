//! JSON shapes exchanged with the game server, and their conversion into the
//! types the move logic works on.

use color_eyre::eyre::{WrapErr, eyre};
use serde::{Deserialize, Serialize};

use crate::collision::Snake;
use crate::geometry::Point;
use crate::moves::Direction;

/// Body of the `/start`, `/move` and `/end` requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub game: Game,
    pub turn: u32,
    pub board: Board,
    pub you: BattleSnake,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub ruleset: Ruleset,
    #[serde(default)]
    pub timeout: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ruleset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub food: Vec<Point>,
    #[serde(default)]
    pub snakes: Vec<BattleSnake>,
    #[serde(default)]
    pub hazards: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleSnake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub health: i32,
    pub body: Vec<Point>,
    #[serde(default)]
    pub head: Option<Point>,
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub latency: String,
    #[serde(default)]
    pub shout: Option<String>,
}

impl BattleSnake {
    /// Fails for a snake without body segments.
    pub fn to_snake(&self) -> color_eyre::Result<Snake> {
        if self.body.is_empty() {
            return Err(eyre!("snake {} has an empty body", self.id));
        }
        Ok(Snake::new(self.id.clone(), self.body.clone()))
    }
}

impl GameState {
    pub fn you_snake(&self) -> color_eyre::Result<Snake> {
        self.you.to_snake()
    }

    /// Every snake on the board, the acting one included.
    pub fn snakes(&self) -> color_eyre::Result<Vec<Snake>> {
        self.board.snakes.iter().map(BattleSnake::to_snake).collect()
    }

    pub fn food(&self) -> &[Point] {
        &self.board.food
    }
}

/// Everything a move policy reads for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub width: i32,
    pub height: i32,
    pub you: Snake,
    /// All snakes on the board, `you` included.
    pub snakes: Vec<Snake>,
    pub food: Vec<Point>,
}

impl TryFrom<&GameState> for Turn {
    type Error = color_eyre::Report;

    fn try_from(state: &GameState) -> color_eyre::Result<Self> {
        let you = state.you_snake()?;
        let mut snakes = state.snakes()?;
        if !snakes.iter().any(|snake| snake.id == you.id) {
            snakes.push(you.clone());
        }
        Ok(Self {
            width: state.board.width,
            height: state.board.height,
            you,
            snakes,
            food: state.board.food.clone(),
        })
    }
}

/// Answer to a `/move` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shout: Option<String>,
}

/// Answer to `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub apiversion: String,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub version: String,
}

pub fn decode_state(text: String) -> color_eyre::Result<GameState> {
    let mut bytes = text.into_bytes();
    let state: GameState =
        simd_json::serde::from_slice(&mut bytes).wrap_err("failed to decode game state")?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIDGAME: &str = include_str!("../fixtures/midgame.json");

    #[test]
    fn test_decode_midgame() {
        let state = decode_state(MIDGAME.to_string()).expect("valid fixture");
        assert_eq!(state.turn, 51);
        assert_eq!(state.board.width, 11);
        assert_eq!(state.board.snakes.len(), 2);
        assert_eq!(state.food(), &[Point::new(7, 9)]);

        let you = state.you_snake().expect("non-empty body");
        assert_eq!(you.head(), Some(Point::new(7, 4)));
        assert_eq!(you.body.len(), 7);

        let snakes = state.snakes().expect("non-empty bodies");
        assert_eq!(snakes[1].id, "gs_RpJkFVGrG6W68bhQMxp6G738");
        assert_eq!(snakes[1].body.len(), 11);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode_state("{\"turn\": 3".to_string()).is_err());
    }

    #[test]
    fn test_empty_body_is_rejected() {
        let mut state = decode_state(MIDGAME.to_string()).expect("valid fixture");
        state.you.body.clear();
        assert!(state.you_snake().is_err());
    }

    #[test]
    fn test_turn_always_contains_you() {
        let mut state = decode_state(MIDGAME.to_string()).expect("valid fixture");
        let turn = Turn::try_from(&state).expect("valid turn");
        assert_eq!(turn.snakes.len(), 2);
        assert_eq!((turn.width, turn.height), (11, 11));

        state.board.snakes.retain(|snake| snake.id != state.you.id);
        let turn = Turn::try_from(&state).expect("valid turn");
        assert_eq!(turn.snakes.len(), 2);
        assert!(turn.snakes.contains(&turn.you));
    }

    #[test]
    fn test_move_response_shape() {
        let response = MoveResponse {
            direction: Direction::Left,
            shout: None,
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"move": "left"})
        );
    }
}
