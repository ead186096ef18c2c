use linefind::{PipelineConfig, ThresholdClassifier};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;


#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Missing 'input_path' field")]
    MissingPath,
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}


/// How image samples are classified as line pixels
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct ThresholdSettings {
    /// Fixed brightness threshold; Otsu's level when absent
    pub threshold: Option<u8>,
    /// Treat bright pixels as lines instead of dark ones
    pub invert: bool,
}

impl ThresholdSettings {
    /// Classifier for `image`, computing Otsu's level when no threshold is fixed
    pub fn classifier(&self, image: &image::GrayImage) -> ThresholdClassifier {
        let classifier = match self.threshold {
            Some(t) => ThresholdClassifier::fixed(t),
            None => ThresholdClassifier::otsu(image),
        };
        if self.invert {
            classifier.inverted()
        } else {
            classifier
        }
    }
}

/// A line detection job: input image, classification and pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LineFindJob {
    pub input_path: String,
    pub output_path: Option<String>,
    #[serde(default)]
    pub classification: ThresholdSettings,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl LineFindJob {
    /// Load a job from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a job from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        let job: LineFindJob = toml::from_str(content)?;
        job.validate()
    }

    /// Load a job from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load a job from a JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        let job: LineFindJob = serde_json::from_str(content)?;
        job.validate()
    }

    /// Auto-detect file format and load the job
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Convert the job to a TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(&self)?)
    }

    /// Convert the job to a JSON string
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    fn validate(self) -> Result<Self, CliError> {
        if self.input_path.trim().is_empty() {
            return Err(CliError::MissingPath);
        }
        Ok(self)
    }
}
