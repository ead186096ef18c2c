use crate::{error::Result, types::{LineSegment, Structure}};

/// Read-only access to a rectangular, row-major grid of samples
pub trait PixelGrid {
    /// Sample type handed to the classifier
    type Pixel: Copy;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Sample at column `x`, row `y`. Callers guarantee the coordinate is in bounds.
    fn pixel(&self, x: usize, y: usize) -> Self::Pixel;

    /// Whether `(x, y)` addresses a sample of this grid
    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// Sample at `(x, y)`, or `None` outside the grid
    fn sample(&self, x: i32, y: i32) -> Option<Self::Pixel> {
        if self.contains(x, y) {
            Some(self.pixel(x as usize, y as usize))
        } else {
            None
        }
    }
}

/// Decides whether a sample belongs to a line
pub trait LineClassifier<P> {
    fn is_line(&self, pixel: P) -> bool;
}

impl<P, F> LineClassifier<P> for F
where
    F: Fn(P) -> bool,
{
    fn is_line(&self, pixel: P) -> bool {
        self(pixel)
    }
}

/// Trait for partitioning traced segments into connected structures
pub trait SegmentGrouper: Send + Sync {
    /// Group the segments; every input segment lands in exactly one structure
    fn group(&self, segments: &[LineSegment]) -> Result<Vec<Structure>>;
}

/// Trait for reducing the segment count inside each structure
pub trait SegmentMerger: Send + Sync {
    fn merge(&self, structures: &mut [Structure]) -> Result<()>;
}

/// `true` when `(x, y)` is inside the grid and classified as line-colored
pub(crate) fn is_line_at<G, C>(grid: &G, classifier: &C, x: i32, y: i32) -> bool
where
    G: PixelGrid,
    C: LineClassifier<G::Pixel> + ?Sized,
{
    grid.sample(x, y).is_some_and(|p| classifier.is_line(p))
}
