//! Octant handlers.
//!
//! The scan reaches every segment through its top-left-most pixel, so only the
//! four downward octants can occur:
//!
//! ```text
//!           / | \
//!          /  |  \
//!   Oct 4 /   |   \ Oct 7
//!        Oct 5|Oct 6
//! ```
//!
//! Octants 5 and 6 are steep (built from vertical runs), octants 4 and 7 are
//! shallow (built from horizontal runs). Every run after the first must be
//! between `L` and `2L` pixels long, `L` being the first run's length.

use crate::{
    error::Result,
    traits::{LineClassifier, PixelGrid},
    types::LineSegment,
    visited::VisitedTracker,
};

use super::runs::{trace_horizontal_negative, trace_horizontal_positive, trace_vertical};

/// Thickness-consistency window for a follow-up run
fn within_thickness(run: u32, reference: u32) -> bool {
    run >= reference && run <= 2 * reference
}

/// Octants 5 and 6: vertical runs stepping one column left or right
pub(crate) fn handle_steep<G, C>(
    grid: &G,
    classifier: &C,
    mut line: LineSegment,
    visited: &mut VisitedTracker,
) -> Result<LineSegment>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let (x_end, y_end) = trace_vertical(grid, classifier, line.x_start, line.y_start);
    line.set_end(x_end, y_end);
    visited.mark_column_visited(line.x_start, line.y_start, y_end)?;

    let reference = line.length_y();
    let mut column = line.x_start;

    loop {
        let row = line.y_end + 1;

        // left wins when both diagonals are set
        if line.next_pixel_left_down(grid, classifier) {
            column -= 1;
        } else if line.next_pixel_right_down(grid, classifier) {
            column += 1;
        } else {
            break;
        }

        let (x_end, y_end) = trace_vertical(grid, classifier, column, row);
        let run = (y_end - row + 1) as u32;
        if !within_thickness(run, reference) {
            break;
        }

        line.set_end(x_end, y_end);
        visited.mark_column_visited(column, row, y_end)?;
    }

    Ok(line)
}

/// Octants 4 and 7: a first horizontal run, then growth in one diagonal direction
pub(crate) fn handle_shallow<G, C>(
    grid: &G,
    classifier: &C,
    mut line: LineSegment,
    visited: &mut VisitedTracker,
) -> Result<LineSegment>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let (x_end, y_end) = trace_horizontal_positive(grid, classifier, line.x_start, line.y_start);
    line.set_end(x_end, y_end);
    visited.mark_row_visited(y_end, line.x_start, x_end)?;

    if line.next_pixel_right_down(grid, classifier) {
        extend_right_down(grid, classifier, line, visited)
    } else if line.next_pixel_left_down(grid, classifier) {
        extend_left_down(grid, classifier, line, visited)
    } else {
        Ok(line)
    }
}

/// Octant 7: append runs below and right of the end
fn extend_right_down<G, C>(
    grid: &G,
    classifier: &C,
    mut line: LineSegment,
    visited: &mut VisitedTracker,
) -> Result<LineSegment>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let reference = line.length_x();

    while line.next_pixel_right_down(grid, classifier) {
        let (column, row) = (line.x_end + 1, line.y_end + 1);
        let (x_end, y_end) = trace_horizontal_positive(grid, classifier, column, row);
        let run = (x_end - column + 1) as u32;
        if !within_thickness(run, reference) {
            break;
        }

        line.set_end(x_end, y_end);
        visited.mark_row_visited(row, column, x_end)?;
    }

    Ok(line)
}

/// Octant 4: prepend runs below and left of the start
fn extend_left_down<G, C>(
    grid: &G,
    classifier: &C,
    mut line: LineSegment,
    visited: &mut VisitedTracker,
) -> Result<LineSegment>
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    let reference = line.length_x();

    while line.next_pixel_left_down(grid, classifier) {
        let (column, row) = (line.x_start - 1, line.y_start + 1);
        let (x_start, y_start) = trace_horizontal_negative(grid, classifier, column, row);
        let run = (column - x_start + 1) as u32;
        if !within_thickness(run, reference) {
            break;
        }

        line.set_start(x_start, y_start);
        visited.mark_row_visited(row, column, x_start)?;
    }

    Ok(line)
}
