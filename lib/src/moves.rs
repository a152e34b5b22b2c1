use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collision::{Snake, is_occupied};
use crate::geometry::{Point, is_in_bounds};

/// One of the four moves a snake can make. Serialised as the lowercase name
/// the game server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Candidate generation order used by [`available_moves`].
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit displacement. "up" decreases `y`.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Point {
    /// Saturates at the edges of the `i32` range; such points are never on a board.
    pub const fn step(self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// A candidate destination for the head together with the move that reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub point: Point,
    pub direction: Direction,
}

pub fn surrounding_squares(p: Point) -> [Point; 4] {
    Direction::ALL.map(|direction| p.step(direction))
}

/// Returns the neighbors of `you`'s head that are on the board and not covered
/// by any snake, in `right, left, up, down` order.
///
/// Every segment counts, the acting snake's own neck and tail included.
/// A snake without a body has no moves.
pub fn available_moves(you: &Snake, all_snakes: &[Snake], width: i32, height: i32) -> Vec<Move> {
    let Some(head) = you.head() else {
        return Vec::new();
    };
    Direction::ALL
        .into_iter()
        .map(|direction| Move {
            point: head.step(direction),
            direction,
        })
        .filter(|mv| !is_occupied(mv.point, all_snakes))
        .filter(|mv| is_in_bounds(mv.point, width, height))
        .collect()
}

/// Names the move leading from `head` towards `target`.
///
/// The horizontal difference wins over the vertical one. Identical points
/// fall back to `up`.
pub fn move_name(head: Point, target: Point) -> Direction {
    if head.x != target.x {
        if target.x > head.x {
            return Direction::Right;
        }
        return Direction::Left;
    }
    if head.y != target.y {
        if target.y > head.y {
            return Direction::Down;
        }
        return Direction::Up;
    }
    Direction::Up
}
