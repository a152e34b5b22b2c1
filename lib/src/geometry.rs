use serde::{Deserialize, Serialize};

/// A cell on the board. The origin is the top-left corner and `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Sum of the absolute coordinate differences between two points.
///
/// Saturates at `u32::MAX` for points at opposite corners of the `i32` range.
#[must_use]
pub const fn manhattan_distance(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y))
}

/// Two points are adjacent when they are exactly one step apart.
#[must_use]
pub const fn adjacent(a: Point, b: Point) -> bool {
    manhattan_distance(a, b) == 1
}

#[must_use]
pub const fn is_same(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// Whether `p` lies on a `width` x `height` board.
///
/// Both axes use the same rule: lower bound inclusive, upper bound exclusive.
/// A board with a non-positive dimension contains no points at all.
#[must_use]
pub const fn is_in_bounds(p: Point, width: i32, height: i32) -> bool {
    p.x >= 0 && p.x < width && p.y >= 0 && p.y < height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_eq!(manhattan_distance(p1, p2), 7);
        assert_eq!(manhattan_distance(p2, p1), 7);

        let p3 = Point::new(5, 5);
        assert_eq!(manhattan_distance(p3, p3), 0);

        assert_eq!(manhattan_distance(Point::new(-2, 3), Point::new(1, -1)), 7);
    }

    #[test]
    fn test_manhattan_distance_at_i32_extremes() {
        let low = Point::new(i32::MIN, 0);
        let high = Point::new(i32::MAX, 0);
        assert_eq!(manhattan_distance(low, high), u32::MAX);
        assert_eq!(
            manhattan_distance(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            u32::MAX
        );
        assert!(!adjacent(low, high));
    }

    #[test]
    fn test_manhattan_triangle_inequality() {
        let points = [
            Point::new(0, 0),
            Point::new(10, 3),
            Point::new(-4, 7),
            Point::new(2, 2),
            Point::new(6, -1),
        ];
        for &a in &points {
            for &b in &points {
                for &c in &points {
                    assert!(
                        manhattan_distance(a, c)
                            <= manhattan_distance(a, b) + manhattan_distance(b, c)
                    );
                }
            }
        }
    }

    #[test]
    fn test_adjacent() {
        let center = Point::new(5, 5);
        assert!(adjacent(center, Point::new(6, 5)));
        assert!(adjacent(center, Point::new(5, 4)));
        assert!(!adjacent(center, center));
        assert!(!adjacent(center, Point::new(6, 6)));
        assert!(!adjacent(center, Point::new(7, 5)));
    }

    #[test]
    fn test_is_same() {
        assert!(is_same(Point::new(1, 2), Point::new(1, 2)));
        assert!(!is_same(Point::new(1, 2), Point::new(2, 1)));
    }

    #[test]
    fn test_bounds_are_symmetric() {
        for (w, h) in [(11, 11), (7, 19), (19, 7), (1, 1)] {
            assert!(is_in_bounds(Point::new(0, 0), w, h));
            assert!(is_in_bounds(Point::new(w - 1, h - 1), w, h));
            assert!(!is_in_bounds(Point::new(w, 0), w, h));
            assert!(!is_in_bounds(Point::new(0, h), w, h));
            assert!(!is_in_bounds(Point::new(-1, 0), w, h));
            assert!(!is_in_bounds(Point::new(0, -1), w, h));
        }
    }

    #[test]
    fn test_degenerate_board_has_no_cells() {
        assert!(!is_in_bounds(Point::new(0, 0), 0, 11));
        assert!(!is_in_bounds(Point::new(0, 0), 11, 0));
        assert!(!is_in_bounds(Point::new(0, 0), -3, -3));
    }
}
