use image::GrayImage;

use crate::{
    error::{LineFindError, Result},
    traits::PixelGrid,
};

/// Owned row-major grid of samples
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Grid<T> {
    /// Wrap a row-major buffer; `data.len()` must equal `width * height`
    pub fn new(width: usize, height: usize, data: Vec<T>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            LineFindError::InvalidArgument(format!("grid {width}x{height} is too large"))
        })?;
        if data.len() != expected {
            return Err(LineFindError::InvalidArgument(format!(
                "grid {}x{} needs {} samples, got {}",
                width,
                height,
                expected,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }

    /// Build a grid from rows of equal length
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if let Some(y) = rows.iter().position(|row| row.len() != width) {
            return Err(LineFindError::InvalidArgument(format!(
                "row {y} has {} samples, expected {width}",
                rows[y].len()
            )));
        }
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy> PixelGrid for Grid<T> {
    type Pixel = T;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> T {
        self.data[y * self.width + x]
    }
}

impl PixelGrid for GrayImage {
    type Pixel = u8;

    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> u8 {
        self.get_pixel(x as u32, y as u32).0[0]
    }
}
