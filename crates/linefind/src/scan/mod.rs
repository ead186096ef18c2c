//! Integer-only line tracing.
//!
//! Based on Daghameen & Arman, "An efficient algorithm for line recognition
//! based on integer arithmetic".

pub mod octant;
pub mod runs;

pub use runs::{trace_horizontal_negative, trace_horizontal_positive, trace_vertical};

use crate::{
    error::{LineFindError, Result},
    traits::{LineClassifier, PixelGrid},
    types::LineSegment,
    visited::VisitedTracker,
};

/// Trace every line segment of `grid`, in discovery order.
///
/// Pixels are visited row by row, left to right. Each unvisited line pixel
/// seeds a segment that is grown by the steep handler when the pixel below
/// is line-colored and by the shallow handler otherwise.
pub fn trace_segments<G, C>(grid: &G, classifier: &C) -> Result<Vec<LineSegment>>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let (width, height) = (grid.width(), grid.height());
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(LineFindError::InvalidArgument(format!(
            "grid {width}x{height} exceeds the i32 coordinate range"
        )));
    };

    let mut visited = VisitedTracker::new(width, height);
    let mut lines = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if !classifier.is_line(grid.pixel(x as usize, y as usize))
                || visited.is_visited(x, y)?
            {
                continue;
            }

            let mut line = LineSegment::point(x, y);
            let line = if line.next_pixel_below(grid, classifier) {
                line.set_vertical();
                octant::handle_steep(grid, classifier, line, &mut visited)?
            } else {
                octant::handle_shallow(grid, classifier, line, &mut visited)?
            };

            tracing::trace!(%line, vertical = line.vertical, "segment traced");
            lines.push(line);
        }
    }

    tracing::debug!(count = lines.len(), width, height, "tracing finished");
    Ok(lines)
}

/// Trace `grid` and return the segments as `[x1, y1, x2, y2]`
pub fn find_lines<G, C>(grid: &G, classifier: &C) -> Result<Vec<[i32; 4]>>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    Ok(trace_segments(grid, classifier)?
        .iter()
        .map(LineSegment::as_array)
        .collect())
}
