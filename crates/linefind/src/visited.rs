use crate::error::{LineFindError, Result};

/// Tracks which pixels were already attributed to a traced segment.
///
/// Marks are never cleared, so one tracker serves exactly one scan.
#[derive(Debug, Clone)]
pub struct VisitedTracker {
    width: usize,
    height: usize,
    visited: Vec<bool>,
}

impl VisitedTracker {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            visited: vec![false; width * height],
        }
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.is_in_bounds(x, y) {
            return Err(LineFindError::invalid_index(x, y));
        }
        Ok(y as usize * self.width + x as usize)
    }

    pub fn is_visited(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.visited[self.index(x, y)?])
    }

    pub fn mark_visited(&mut self, x: i32, y: i32) -> Result<()> {
        let i = self.index(x, y)?;
        self.visited[i] = true;
        Ok(())
    }

    /// Mark `xa..=xb` in row `y`, in either argument order
    pub fn mark_row_visited(&mut self, y: i32, xa: i32, xb: i32) -> Result<()> {
        // validate both ends before touching anything
        self.index(xa, y)?;
        self.index(xb, y)?;
        for x in xa.min(xb)..=xa.max(xb) {
            self.mark_visited(x, y)?;
        }
        Ok(())
    }

    /// Mark `ya..=yb` in column `x`, in either argument order
    pub fn mark_column_visited(&mut self, x: i32, ya: i32, yb: i32) -> Result<()> {
        self.index(x, ya)?;
        self.index(x, yb)?;
        for y in ya.min(yb)..=ya.max(yb) {
            self.mark_visited(x, y)?;
        }
        Ok(())
    }
}
