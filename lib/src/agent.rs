use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use crate::food::find_closest_food;
use crate::geometry::manhattan_distance;
use crate::moves::{Direction, Move, available_moves};
use crate::wire::Turn;

/// Move played when every neighbor of the head is deadly.
pub const FALLBACK_MOVE: Direction = Direction::Up;

/// Trait that defines a snake agent's decision-making interface.
pub trait Agent: Send + Sync {
    /// Returns the name of this agent for display purposes.
    fn name(&self) -> &str;

    /// Choose a move for `turn.you`.
    fn choose_move(&self, turn: &Turn) -> Direction;
}

impl Agent for Box<dyn Agent> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&self, turn: &Turn) -> Direction {
        (**self).choose_move(turn)
    }
}

fn safe_moves(turn: &Turn) -> Vec<Move> {
    let moves = available_moves(&turn.you, &turn.snakes, turn.width, turn.height);
    if moves.is_empty() {
        warn!(snake = %turn.you.id, "no safe move left, falling back to {}", FALLBACK_MOVE);
    }
    moves
}

/// Heads for the nearest food while only ever taking moves that survive this turn.
pub struct FoodSeekingAgent {
    name: String,
}

impl FoodSeekingAgent {
    pub fn new() -> Self {
        Self {
            name: "FoodSeeking".to_string(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for FoodSeekingAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for FoodSeekingAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, turn: &Turn) -> Direction {
        let moves = safe_moves(turn);
        let Some(first) = moves.first() else {
            return FALLBACK_MOVE;
        };
        let target = turn
            .you
            .head()
            .and_then(|head| find_closest_food(head, &turn.food));
        let Some(target) = target else {
            debug!(direction = %first.direction, "no food on the board");
            return first.direction;
        };

        // min_by_key keeps the first of equally good moves
        let best = moves
            .iter()
            .min_by_key(|mv| manhattan_distance(mv.point, target))
            .unwrap_or(first);
        debug!(
            direction = %best.direction,
            food_x = target.x,
            food_y = target.y,
            "moving towards food"
        );
        best.direction
    }
}

/// A simple agent that picks a random safe move each turn.
/// Useful as a baseline.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, turn: &Turn) -> Direction {
        let mut rng = rand::rng();
        safe_moves(turn)
            .choose(&mut rng)
            .map(|mv| mv.direction)
            .unwrap_or(FALLBACK_MOVE)
    }
}
