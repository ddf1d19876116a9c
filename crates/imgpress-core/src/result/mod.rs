mod metrics;
mod validate;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::method::CompressionMethod;

pub use metrics::{
    compression_ratio, size_kb, size_per_component_kb, size_percentage, LevelMetrics,
};
pub use validate::validate;

/// Wire shape of a compression result, before validation.
///
/// Integers are signed so that out-of-range values reach validation as
/// specific errors instead of failing as opaque decode errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCompressionResult {
    pub method: String,
    pub original_size: i64,
    pub component_levels: Vec<RawComponentLevel>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentLevel {
    pub num_components: i64,
    pub data_size: i64,
    /// Base64-encoded PNG.
    pub image_data: String,
}

impl RawCompressionResult {
    /// Decode a JSON body. Any shape mismatch is reported as
    /// [`ValidationError::Malformed`].
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        serde_json::from_slice(body).map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// One reconstruction of the original image at a given component count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentLevel {
    pub(crate) num_components: u32,
    pub(crate) data_size: u64,
    pub(crate) image_data: String,
}

impl ComponentLevel {
    pub fn num_components(&self) -> u32 {
        self.num_components
    }

    /// Compressed payload size in bytes.
    pub fn data_size(&self) -> u64 {
        self.data_size
    }

    /// Base64-encoded PNG of the reconstruction.
    pub fn image_data(&self) -> &str {
        &self.image_data
    }
}

/// A validated family of reconstructions for one original image.
///
/// Levels are non-empty and ordered by strictly increasing component count;
/// the last level has the highest fidelity. Deserializing goes through
/// [`validate`], so a persisted or received value can never violate this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCompressionResult", into = "RawCompressionResult")]
pub struct CompressionResult {
    pub(crate) method: CompressionMethod,
    pub(crate) original_size: u64,
    pub(crate) levels: Vec<ComponentLevel>,
}

impl CompressionResult {
    pub fn method(&self) -> CompressionMethod {
        self.method
    }

    /// Original upload size in bytes, always positive.
    pub fn original_size(&self) -> u64 {
        self.original_size
    }

    pub fn levels(&self) -> &[ComponentLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false for a validated result; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> Option<&ComponentLevel> {
        self.levels.get(index)
    }

    /// Index of the highest-fidelity level.
    pub fn last_index(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn metrics(&self, index: usize) -> Option<LevelMetrics> {
        self.level(index).map(|level| LevelMetrics::compute(self, level))
    }

    /// Parse and validate a JSON body in one step.
    pub fn from_json(body: &[u8]) -> Result<Self, ValidationError> {
        validate(RawCompressionResult::from_json(body)?)
    }
}

impl TryFrom<RawCompressionResult> for CompressionResult {
    type Error = ValidationError;

    fn try_from(raw: RawCompressionResult) -> Result<Self, Self::Error> {
        validate(raw)
    }
}

impl From<CompressionResult> for RawCompressionResult {
    fn from(result: CompressionResult) -> Self {
        Self {
            method: result.method.as_str().to_string(),
            original_size: result.original_size as i64,
            component_levels: result
                .levels
                .into_iter()
                .map(|level| RawComponentLevel {
                    num_components: i64::from(level.num_components),
                    data_size: level.data_size as i64,
                    image_data: level.image_data,
                })
                .collect(),
        }
    }
}
