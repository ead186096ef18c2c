use crate::{
    algorithms::{AdjacencyGrouper, CollinearMerger, DEFAULT_DELTA},
    config::PipelineConfig,
    error::Result,
    pipeline::Pipeline,
    traits::{SegmentGrouper, SegmentMerger},
};

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    delta: u32,
    grouper: Option<Box<dyn SegmentGrouper>>,
    merger: Option<Box<dyn SegmentMerger>>,
    angle_epsilon: Option<Option<f64>>,
    skip_grouping: bool,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            delta: DEFAULT_DELTA,
            grouper: None,
            merger: None,
            angle_epsilon: None,
            skip_grouping: false,
        }
    }

    /// Neighbourhood radius used by the default grouper and merger
    pub fn with_delta(mut self, delta: u32) -> Self {
        self.delta = delta;
        self
    }

    /// Set the grouper (replaces the default adjacency grouper)
    pub fn set_grouper<G>(mut self, grouper: G) -> Self
    where
        G: SegmentGrouper + 'static,
    {
        self.grouper = Some(Box::new(grouper));
        self.skip_grouping = false;
        self
    }

    /// Set the merger (replaces any merge configured with [`Self::with_merging`])
    pub fn set_merger<M>(mut self, merger: M) -> Self
    where
        M: SegmentMerger + 'static,
    {
        self.merger = Some(Box::new(merger));
        self.angle_epsilon = None;
        self.skip_grouping = false;
        self
    }

    /// Merge collinear segments; `None` makes [`Self::build`] fail.
    /// Re-enables grouping after [`Self::trace_only`].
    pub fn with_merging(mut self, angle_epsilon: Option<f64>) -> Self {
        self.merger = None;
        self.angle_epsilon = Some(angle_epsilon);
        self.skip_grouping = false;
        self
    }

    /// Trace only, without grouping or merging
    pub fn trace_only(mut self) -> Self {
        self.skip_grouping = true;
        self.grouper = None;
        self.merger = None;
        self.angle_epsilon = None;
        self
    }

    /// Build the pipeline, filling in default stages
    pub fn build(self) -> Result<Pipeline> {
        if self.skip_grouping {
            return Pipeline::new(None, None);
        }

        let grouper = self
            .grouper
            .unwrap_or_else(|| Box::new(AdjacencyGrouper { delta: self.delta }));

        let merger = match (self.merger, self.angle_epsilon) {
            (Some(merger), _) => Some(merger),
            (None, Some(eps)) => {
                Some(Box::new(CollinearMerger::new(eps, self.delta)?) as Box<dyn SegmentMerger>)
            }
            (None, None) => None,
        };

        Pipeline::new(Some(grouper), merger)
    }

    /// Build a pipeline that only traces
    pub fn build_trace_only() -> Result<Pipeline> {
        Self::new().trace_only().build()
    }

    /// Build a pipeline that traces and groups
    pub fn build_grouping(delta: u32) -> Result<Pipeline> {
        Self::new().with_delta(delta).build()
    }

    /// Build a pipeline that traces, groups and merges
    pub fn build_merging(delta: u32, angle_epsilon: f64) -> Result<Pipeline> {
        Self::new()
            .with_delta(delta)
            .with_merging(Some(angle_epsilon))
            .build()
    }

    /// Build from a serialized configuration
    pub fn build_from_config(config: &PipelineConfig) -> Result<Pipeline> {
        Pipeline::from_config(config)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
