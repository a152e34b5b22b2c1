//! Per-turn decision primitives for a grid snake agent: bounds and collision
//! checks, safe move enumeration and nearest food lookup.

pub mod agent;
pub mod collision;
pub mod food;
pub mod geometry;
pub mod moves;
pub mod wire;

pub use agent::{Agent, FoodSeekingAgent, RandomAgent};
pub use collision::{Snake, is_deadly_collision, remove_out_of_bounds, remove_point};
pub use food::find_closest_food;
pub use geometry::{Point, adjacent, is_in_bounds, is_same, manhattan_distance};
pub use moves::{Direction, Move, available_moves, move_name, surrounding_squares};
pub use wire::{GameState, Turn, decode_state};
