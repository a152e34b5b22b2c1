use crate::geometry::{Point, is_in_bounds, is_same};

/// A snake as seen during one turn. `body[0]` is the head.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snake {
    pub id: String,
    pub body: Vec<Point>,
}

impl Snake {
    pub fn new(id: impl Into<String>, body: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            body,
        }
    }

    /// `None` only for an empty body, which callers are expected to rule out.
    pub fn head(&self) -> Option<Point> {
        self.body.first().copied()
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.body.iter().any(|&segment| is_same(segment, p))
    }
}

/// Whether any segment of any snake, including the acting one, sits on `p`.
pub fn is_occupied(p: Point, snakes: &[Snake]) -> bool {
    snakes.iter().any(|snake| snake.occupies(p))
}

/// Moving onto `p` is lethal if it leaves the board or hits a body segment.
pub fn is_deadly_collision(p: Point, snakes: &[Snake], width: i32, height: i32) -> bool {
    // Walls kill
    if !is_in_bounds(p, width, height) {
        return true;
    }
    is_occupied(p, snakes)
}

/// Removes every point with the same coordinates as `p`.
pub fn remove_point(from: &[Point], p: Point) -> Vec<Point> {
    from.iter().copied().filter(|&q| !is_same(q, p)).collect()
}

pub fn remove_out_of_bounds(from: &[Point], width: i32, height: i32) -> Vec<Point> {
    from.iter()
        .copied()
        .filter(|&q| is_in_bounds(q, width, height))
        .collect()
}
