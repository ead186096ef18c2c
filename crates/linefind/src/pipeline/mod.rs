pub mod builder;

use crate::{
    config::PipelineConfig,
    error::{LineFindError, Result},
    scan::trace_segments,
    traits::{LineClassifier, PixelGrid, SegmentGrouper, SegmentMerger},
    types::ComputedLines,
    algorithms::{AdjacencyGrouper, CollinearMerger},
};

/// Trace, then optionally group and merge, the line segments of a grid
pub struct Pipeline {
    grouper: Option<Box<dyn SegmentGrouper>>,
    merger: Option<Box<dyn SegmentMerger>>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a pipeline from its stages; a merger needs a grouper
    pub fn new(
        grouper: Option<Box<dyn SegmentGrouper>>,
        merger: Option<Box<dyn SegmentMerger>>,
    ) -> Result<Self> {
        if grouper.is_none() && merger.is_some() {
            return Err(LineFindError::InvalidArgument(
                "merging requires a grouping stage".to_string(),
            ));
        }
        Ok(Self { grouper, merger })
    }

    /// Build the stages described by `config`
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        let grouper: Option<Box<dyn SegmentGrouper>> = config
            .group
            .then(|| Box::new(AdjacencyGrouper { delta: config.delta }) as Box<dyn SegmentGrouper>);

        let merger: Option<Box<dyn SegmentMerger>> = if config.merge {
            Some(Box::new(CollinearMerger::new(config.angle_epsilon, config.delta)?))
        } else {
            None
        };

        Self::new(grouper, merger)
    }

    /// Run every stage over `grid`
    pub fn process<G, C>(&self, grid: &G, classifier: &C) -> Result<ComputedLines>
    where
        G: PixelGrid,
        C: LineClassifier<G::Pixel> + ?Sized,
    {
        // Step 1: trace raw segments
        let segments = trace_segments(grid, classifier)?;

        // Step 2: connected structures
        let mut structures = match &self.grouper {
            Some(grouper) => grouper.group(&segments)?,
            None => Vec::new(),
        };

        // Step 3: collinear merge
        if let Some(merger) = &self.merger {
            merger.merge(&mut structures)?;
        }

        let output = ComputedLines {
            segments,
            structures,
            image_width: grid.width() as u32,
            image_height: grid.height() as u32,
        };
        tracing::debug!(
            traced = output.segments.len(),
            structures = output.structures.len(),
            remaining = output.final_segment_count(),
            "pipeline finished"
        );
        Ok(output)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: tracing, {} grouping, {} merging",
            if self.grouper.is_some() { "with" } else { "no" },
            if self.merger.is_some() { "with" } else { "no" },
        )
    }
}
