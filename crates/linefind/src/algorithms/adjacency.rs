use crate::types::LineSegment;

/// Default neighbourhood radius in pixels
pub const DEFAULT_DELTA: u32 = 1;

/// Points of the `(2·delta+1)²` square centred on `(x, y)`, the centre included
pub fn adjacent_coordinates(x: i32, y: i32, delta: u32) -> Vec<(i32, i32)> {
    let d = delta as i32;
    let side = 2 * delta as usize + 1;
    let mut points = Vec::with_capacity(side * side);
    for i in x - d..=x + d {
        for j in y - d..=y + d {
            points.push((i, j));
        }
    }
    points
}

/// Is `(x2, y2)` inside the delta-neighbourhood of `(x1, y1)`?
pub fn is_adjacent_point(x1: i32, y1: i32, x2: i32, y2: i32, delta: u32) -> bool {
    x1.abs_diff(x2) <= delta && y1.abs_diff(y2) <= delta
}

/// Does either endpoint of `other` touch the start of `line`?
pub fn is_adjacent_to_start(line: &LineSegment, other: &LineSegment, delta: u32) -> bool {
    is_adjacent_point(line.x_start, line.y_start, other.x_start, other.y_start, delta)
        || is_adjacent_point(line.x_start, line.y_start, other.x_end, other.y_end, delta)
}

/// Does either endpoint of `other` touch the end of `line`?
pub fn is_adjacent_to_end(line: &LineSegment, other: &LineSegment, delta: u32) -> bool {
    is_adjacent_point(line.x_end, line.y_end, other.x_start, other.y_start, delta)
        || is_adjacent_point(line.x_end, line.y_end, other.x_end, other.y_end, delta)
}

/// Do any two endpoints of the segments touch?
pub fn is_adjacent(a: &LineSegment, b: &LineSegment, delta: u32) -> bool {
    is_adjacent_to_start(a, b, delta) || is_adjacent_to_end(a, b, delta)
}
