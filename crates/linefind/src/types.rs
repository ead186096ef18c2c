use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{LineFindError, Result},
    traits::{is_line_at, LineClassifier, PixelGrid},
};

/// A traced straight segment between two integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSegment {
    pub x_start: i32,
    pub y_start: i32,
    pub x_end: i32,
    pub y_end: i32,
    /// Set when the segment was discovered through a downward probe (steep family)
    #[serde(default)]
    pub vertical: bool,
}

impl LineSegment {
    pub fn new(x_start: i32, y_start: i32, x_end: i32, y_end: i32) -> Self {
        Self { x_start, y_start, x_end, y_end, vertical: false }
    }

    /// Degenerate segment covering the single pixel `(x, y)`
    pub fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }

    pub fn with_vertical(mut self, vertical: bool) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn set_vertical(&mut self) {
        self.vertical = true;
    }

    pub fn start(&self) -> (i32, i32) {
        (self.x_start, self.y_start)
    }

    pub fn end(&self) -> (i32, i32) {
        (self.x_end, self.y_end)
    }

    pub fn set_start(&mut self, x: i32, y: i32) {
        self.x_start = x;
        self.y_start = y;
    }

    pub fn set_end(&mut self, x: i32, y: i32) {
        self.x_end = x;
        self.y_end = y;
    }

    pub fn swap_start_end(&mut self) {
        std::mem::swap(&mut self.x_start, &mut self.x_end);
        std::mem::swap(&mut self.y_start, &mut self.y_end);
    }

    /// `true` when start and end coincide
    pub fn is_point(&self) -> bool {
        self.x_end - self.x_start == 0 && self.y_end - self.y_start == 0
    }

    /// Inclusive pixel count along x
    pub fn length_x(&self) -> u32 {
        self.x_end.abs_diff(self.x_start) + 1
    }

    /// Inclusive pixel count along y
    pub fn length_y(&self) -> u32 {
        self.y_end.abs_diff(self.y_start) + 1
    }

    /// Euclidean length over the inclusive pixel counts; a point has length √2
    pub fn length(&self) -> f64 {
        let lx = f64::from(self.length_x());
        let ly = f64::from(self.length_y());
        (lx * lx + ly * ly).sqrt()
    }

    /// `[x_start, y_start, x_end, y_end]`
    pub fn as_array(&self) -> [i32; 4] {
        [self.x_start, self.y_start, self.x_end, self.y_end]
    }

    /// Is the pixel directly below the end line-colored?
    pub fn next_pixel_below<G, C>(&self, grid: &G, classifier: &C) -> bool
    where
        G: PixelGrid,
        C: LineClassifier<G::Pixel> + ?Sized,
    {
        is_line_at(grid, classifier, self.x_end, self.y_end + 1)
    }

    /// Is the pixel diagonally right-down of the end line-colored?
    pub fn next_pixel_right_down<G, C>(&self, grid: &G, classifier: &C) -> bool
    where
        G: PixelGrid,
        C: LineClassifier<G::Pixel> + ?Sized,
    {
        is_line_at(grid, classifier, self.x_end + 1, self.y_end + 1)
    }

    /// Is the pixel diagonally left-down line-colored?
    ///
    /// Probes from the start for shallow segments and from the end for vertical ones.
    pub fn next_pixel_left_down<G, C>(&self, grid: &G, classifier: &C) -> bool
    where
        G: PixelGrid,
        C: LineClassifier<G::Pixel> + ?Sized,
    {
        let (x, y) = if self.vertical { self.end() } else { self.start() };
        is_line_at(grid, classifier, x - 1, y + 1)
    }
}

impl From<LineSegment> for [i32; 4] {
    fn from(line: LineSegment) -> Self {
        line.as_array()
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -- ({}, {})",
            self.x_start, self.y_start, self.x_end, self.y_end
        )
    }
}

/// A connected set of segments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Structure {
    lines: Vec<LineSegment>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: LineSegment) {
        self.lines.push(line);
    }

    pub fn get(&self, index: usize) -> Option<&LineSegment> {
        self.lines.get(index)
    }

    /// Replace the segment at `index`
    pub fn set(&mut self, index: usize, line: LineSegment) -> Result<()> {
        let len = self.lines.len();
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(LineFindError::PositionOutOfRange { index, len })?;
        *slot = line;
        Ok(())
    }

    /// Remove and return the segment at `index`
    pub fn remove(&mut self, index: usize) -> Result<LineSegment> {
        let len = self.lines.len();
        if index >= len {
            return Err(LineFindError::PositionOutOfRange { index, len });
        }
        Ok(self.lines.remove(index))
    }

    pub fn contains(&self, line: &LineSegment) -> bool {
        self.lines.contains(line)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineSegment> {
        self.lines.iter()
    }

    pub fn as_slice(&self) -> &[LineSegment] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<LineSegment> {
        &mut self.lines
    }

    /// `[[x1, y1, x2, y2], ...]`
    pub fn to_coordinates(&self) -> Vec<[i32; 4]> {
        self.lines.iter().map(LineSegment::as_array).collect()
    }
}

impl From<Vec<LineSegment>> for Structure {
    fn from(lines: Vec<LineSegment>) -> Self {
        Self { lines }
    }
}

impl FromIterator<LineSegment> for Structure {
    fn from_iter<I: IntoIterator<Item = LineSegment>>(iter: I) -> Self {
        Self { lines: iter.into_iter().collect() }
    }
}

impl IntoIterator for Structure {
    type Item = LineSegment;
    type IntoIter = std::vec::IntoIter<LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Structure {
    type Item = &'a LineSegment;
    type IntoIter = std::slice::Iter<'a, LineSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{line}")?;
        }
        write!(f, "]")
    }
}

/// Output of a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLines {
    /// Segments in discovery order, before grouping
    pub segments: Vec<LineSegment>,
    /// Connected structures; empty when grouping is disabled
    pub structures: Vec<Structure>,
    /// Original grid dimensions
    pub image_width: u32,
    pub image_height: u32,
}

impl ComputedLines {
    /// Segments left after grouping and merging, or the raw trace when grouping is off
    pub fn final_segment_count(&self) -> usize {
        if self.structures.is_empty() {
            self.segments.len()
        } else {
            self.structures.iter().map(Structure::len).sum()
        }
    }

    /// Coordinate list of the final segments, structure by structure
    pub fn to_coordinates(&self) -> Vec<[i32; 4]> {
        if self.structures.is_empty() {
            self.segments.iter().map(LineSegment::as_array).collect()
        } else {
            self.structures.iter().flat_map(Structure::to_coordinates).collect()
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
