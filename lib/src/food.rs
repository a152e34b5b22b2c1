use crate::geometry::{Point, manhattan_distance};

/// Finds the food closest to `p` by Manhattan distance.
///
/// Ties go to the food listed first. Returns `None` when there is no food.
pub fn find_closest_food(p: Point, food: &[Point]) -> Option<Point> {
    let mut closest: Option<(Point, u32)> = None;
    for &f in food {
        let dist = manhattan_distance(p, f);
        match closest {
            Some((_, best)) if dist >= best => {}
            _ => closest = Some((f, dist)),
        }
    }
    closest.map(|(f, _)| f)
}
