use image::GrayImage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

use crate::{
    classify::ThresholdClassifier,
    config::PipelineConfig,
    error::{LineFindError, Result},
    pipeline::Pipeline,
    types::ComputedLines,
};

#[derive(
    Debug, Clone,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq
)]
#[serde(tag = "type", content = "params")]
#[strum(serialize_all = "snake_case")]
pub enum LineFindCommand {
    /// Trace raw line segments
    #[serde(rename = "trace")]
    Trace,

    /// Trace and group touching segments into structures
    #[serde(rename = "group")]
    Group {
        #[schemars(range(min = 0, max = 64))]
        delta: u32,
    },

    /// Trace, group and merge collinear segments
    #[serde(rename = "merge")]
    Merge {
        #[schemars(range(min = 0, max = 64))]
        delta: u32,
        #[schemars(range(min = 0.0, max = 180.0))]
        angle_epsilon: f64,
    },
}

impl LineFindCommand {
    /// Get the JSON schema for all commands
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(LineFindCommand)
    }

    /// Get a list of all available command names
    pub fn command_names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    /// Get a description of the command
    pub fn description(&self) -> &'static str {
        match self {
            Self::Trace => "Trace straight line segments in the image",
            Self::Group { .. } => {
                "Trace segments and group touching ones into connected structures"
            }
            Self::Merge { .. } => {
                "Trace, group and merge touching segments that point the same way"
            }
        }
    }

    /// Pipeline configuration equivalent to this command
    pub fn to_config(&self) -> PipelineConfig {
        match *self {
            Self::Trace => PipelineConfig {
                group: false,
                ..PipelineConfig::default()
            },
            Self::Group { delta } => PipelineConfig {
                delta,
                ..PipelineConfig::default()
            },
            Self::Merge { delta, angle_epsilon } => PipelineConfig {
                delta,
                merge: true,
                angle_epsilon: Some(angle_epsilon),
                ..PipelineConfig::default()
            },
        }
    }
}

/// Holds an image and a classifier, and runs commands against them
#[derive(Debug, Clone, Default)]
pub struct LineFinder {
    image: Option<GrayImage>,
    classifier: ThresholdClassifier,
}

impl LineFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: ThresholdClassifier) -> Self {
        Self { image: None, classifier }
    }

    pub fn set_classifier(&mut self, classifier: ThresholdClassifier) {
        self.classifier = classifier;
    }

    pub fn classifier(&self) -> ThresholdClassifier {
        self.classifier
    }

    /// Load an image from file, converted to 8-bit grayscale
    pub fn load_image(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let img = image::open(path)?;
        self.image = Some(img.to_luma8());
        Ok(())
    }

    /// Load an image from memory
    pub fn load_image_from_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let img = image::load_from_memory(bytes)?;
        self.image = Some(img.to_luma8());
        Ok(())
    }

    /// Set the image directly
    pub fn set_image(&mut self, image: GrayImage) {
        self.image = Some(image);
    }

    pub fn image(&self) -> Option<&GrayImage> {
        self.image.as_ref()
    }

    pub fn execute(&self, command: LineFindCommand) -> Result<ComputedLines> {
        tracing::debug!(%command, "executing");
        self.run(&command.to_config())
    }

    /// Run the pipeline described by `config` over the loaded image
    pub fn run(&self, config: &PipelineConfig) -> Result<ComputedLines> {
        let image = self.image.as_ref().ok_or(LineFindError::NoImageLoaded)?;
        let pipeline = Pipeline::from_config(config)?;
        tracing::debug!("{}", pipeline.info());
        pipeline.process(image, &self.classifier)
    }
}
