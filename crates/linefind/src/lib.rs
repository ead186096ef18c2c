//! # Raster Line Segment Detection
//!
//! Finds straight line segments in a raster image of line-colored and
//! background pixels using an integer-only octant tracing scan, then
//! consolidates them for downstream vectorization.
//!
//! ## Stages
//!
//! - **Trace**: scan row by row and grow each new segment from its top-left
//!   pixel through vertical (steep) or horizontal (shallow) runs
//! - **Group**: partition segments into connected structures by endpoint adjacency
//! - **Merge**: fuse touching segments that point the same way
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use linefind::{Pipeline, ThresholdClassifier};
//!
//! let image = image::open("drawing.png")?.to_luma8();
//! let pipeline = Pipeline::builder()
//!     .with_merging(Some(5.0))
//!     .build()?;
//!
//! let result = pipeline.process(&image, &ThresholdClassifier::otsu(&image))?;
//! for structure in &result.structures {
//!     println!("{structure}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Predicate
//!
//! Any `Fn(pixel) -> bool` classifies pixels:
//!
//! ```rust
//! use linefind::{find_lines, Grid};
//!
//! let grid = Grid::new(5, 1, vec![9u8; 5])?;
//! let lines = find_lines(&grid, &|p: u8| p > 0)?;
//! assert_eq!(lines, vec![[0, 0, 4, 0]]);
//! # Ok::<(), linefind::LineFindError>(())
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod grid;
pub mod classify;
pub mod visited;
pub mod scan;
pub mod algorithms;
pub mod config;
pub mod pipeline;
pub mod command;

// Re-exports for convenience
pub use error::{LineFindError, Result};
pub use types::{ComputedLines, LineSegment, Structure};
pub use traits::*;
pub use grid::Grid;
pub use classify::{Polarity, ThresholdClassifier};
pub use visited::VisitedTracker;
pub use scan::{find_lines, trace_segments};
pub use algorithms::*;
pub use config::PipelineConfig;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use command::{LineFindCommand, LineFinder};


#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn create_test_image() -> GrayImage {
        // white canvas with a black box outline
        let mut img = GrayImage::from_pixel(40, 30, Luma([255u8]));
        for x in 5..35 {
            img.put_pixel(x, 5, Luma([0u8]));
            img.put_pixel(x, 24, Luma([0u8]));
        }
        for y in 5..25 {
            img.put_pixel(5, y, Luma([0u8]));
            img.put_pixel(34, y, Luma([0u8]));
        }
        img
    }

    #[test]
    fn test_pipeline_basic() {
        let pipeline = Pipeline::builder().build().expect("Should build");
        let image = create_test_image();

        let result = pipeline
            .process(&image, &ThresholdClassifier::default())
            .expect("Should process successfully");
        assert_eq!(result.image_width, 40);
        assert_eq!(result.image_height, 30);
        assert_eq!(
            result.segments.iter().map(LineSegment::as_array).collect::<Vec<_>>(),
            vec![[5, 5, 5, 24], [6, 5, 34, 5], [34, 6, 34, 24], [6, 24, 34, 24]]
        );
        assert_eq!(result.structures.len(), 1, "box outline is one structure");
    }

    #[test]
    fn test_pipeline_with_merging() {
        let pipeline = Pipeline::builder()
            .with_merging(Some(1.0))
            .build()
            .expect("Should build");
        let image = create_test_image();

        let result = pipeline
            .process(&image, &ThresholdClassifier::default())
            .expect("Should process successfully");
        // corners meet at right angles, nothing to merge
        assert_eq!(result.final_segment_count(), 4);
    }

    #[test]
    fn test_missing_angle_epsilon() {
        let err = Pipeline::builder().with_merging(None).build().err();
        assert!(matches!(err, Some(LineFindError::MissingAngleEpsilon)));

        let config = PipelineConfig { merge: true, ..PipelineConfig::default() };
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(LineFindError::MissingAngleEpsilon)
        ));
    }

    #[test]
    fn test_merge_without_grouping_is_rejected() {
        let config = PipelineConfig {
            group: false,
            ..PipelineConfig::merging(2.0)
        };
        assert!(matches!(
            Pipeline::from_config(&config),
            Err(LineFindError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_trace_only() {
        let pipeline = PipelineBuilder::build_trace_only().expect("Should build");
        let result = pipeline
            .process(&create_test_image(), &ThresholdClassifier::default())
            .expect("Should process successfully");
        assert!(result.structures.is_empty());
        assert_eq!(result.final_segment_count(), 4);
        assert!(pipeline.info().contains("no grouping"));
    }

    #[test]
    fn test_merging_overrides_trace_only() {
        let pipeline = Pipeline::builder()
            .trace_only()
            .with_merging(Some(1.0))
            .build()
            .expect("Should build");
        assert!(pipeline.info().contains("with merging"));
        let result = pipeline
            .process(&create_test_image(), &ThresholdClassifier::default())
            .expect("Should process successfully");
        assert_eq!(result.structures.len(), 1);
        assert_eq!(result.final_segment_count(), 4);

        let err = Pipeline::builder().trace_only().with_merging(None).build().err();
        assert!(matches!(err, Some(LineFindError::MissingAngleEpsilon)));
    }

    #[test]
    fn test_json_export() {
        let pipeline = PipelineBuilder::build_grouping(1).expect("Should build");
        let result = pipeline
            .process(&create_test_image(), &ThresholdClassifier::default())
            .expect("Should process successfully");
        let json = result.to_json().expect("Should serialize");
        let back: ComputedLines = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, result);
    }
}
