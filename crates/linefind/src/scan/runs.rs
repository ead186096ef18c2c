//! Run finders: walk from a seed pixel while the classifier holds.
//!
//! Callers seed them on a pixel they already know is line-colored, so the
//! seed itself is the shortest possible run.

use crate::traits::{is_line_at, LineClassifier, PixelGrid};

/// Last pixel of the run going down from `(x, y)`
pub fn trace_vertical<G, C>(grid: &G, classifier: &C, x: i32, y: i32) -> (i32, i32)
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let mut end = y;
    while is_line_at(grid, classifier, x, end + 1) {
        end += 1;
    }
    (x, end)
}

/// First pixel of the run going left from `(x, y)`
pub fn trace_horizontal_negative<G, C>(grid: &G, classifier: &C, x: i32, y: i32) -> (i32, i32)
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let mut end = x;
    while is_line_at(grid, classifier, end - 1, y) {
        end -= 1;
    }
    (end, y)
}

/// Last pixel of the run going right from `(x, y)`
pub fn trace_horizontal_positive<G, C>(grid: &G, classifier: &C, x: i32, y: i32) -> (i32, i32)
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let mut end = x;
    while is_line_at(grid, classifier, end + 1, y) {
        end += 1;
    }
    (end, y)
}
