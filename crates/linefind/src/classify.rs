use image::GrayImage;
use imageproc::contrast::otsu_level;
use serde::{Deserialize, Serialize};

use crate::traits::{LineClassifier, PixelGrid};

/// Which side of the threshold counts as line-colored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Samples strictly below the threshold (ink on paper)
    Dark,
    /// Samples strictly above the threshold
    Bright,
}

/// Brightness threshold classifier for 8-bit samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdClassifier {
    pub threshold: u8,
    pub polarity: Polarity,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self::fixed(128)
    }
}

impl ThresholdClassifier {
    /// Dark samples below `threshold` are line pixels
    pub fn fixed(threshold: u8) -> Self {
        Self { threshold, polarity: Polarity::Dark }
    }

    /// Bright samples above the grid mean are line pixels
    pub fn mean<G: PixelGrid<Pixel = u8>>(grid: &G) -> Self {
        let count = grid.width() * grid.height();
        let threshold = if count == 0 {
            0
        } else {
            let mut sum = 0u64;
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    sum += u64::from(grid.pixel(x, y));
                }
            }
            (sum / count as u64) as u8
        };
        Self { threshold, polarity: Polarity::Bright }
    }

    /// Otsu level of `image`, dark samples are line pixels
    pub fn otsu(image: &GrayImage) -> Self {
        let threshold = otsu_level(image);
        tracing::debug!(threshold, "otsu level");
        Self::fixed(threshold)
    }

    /// Flip the polarity
    pub fn inverted(self) -> Self {
        let polarity = match self.polarity {
            Polarity::Dark => Polarity::Bright,
            Polarity::Bright => Polarity::Dark,
        };
        Self { polarity, ..self }
    }
}

impl LineClassifier<u8> for ThresholdClassifier {
    fn is_line(&self, pixel: u8) -> bool {
        match self.polarity {
            Polarity::Dark => pixel < self.threshold,
            Polarity::Bright => pixel > self.threshold,
        }
    }
}
