use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Compression transform family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CompressionMethod {
    /// Block-based discrete cosine transform quantization.
    #[default]
    #[serde(rename = "DCT")]
    Dct,
    /// Singular value decomposition rank truncation.
    #[serde(rename = "SVD")]
    Svd,
}

impl CompressionMethod {
    pub const ALL: &[Self] = &[Self::Dct, Self::Svd];

    /// Wire identifier, as sent in the `method` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dct => "DCT",
            Self::Svd => "SVD",
        }
    }

    pub fn config(self) -> &'static MethodConfig {
        method_config(self)
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMethod {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DCT" => Ok(Self::Dct),
            "SVD" => Ok(Self::Svd),
            _ => Err(InputError::UnknownMethod(s.to_string())),
        }
    }
}

/// Parameter constraints of one compression method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodConfig {
    pub label: &'static str,
    /// Largest component count the method accepts.
    pub max_components: u32,
    /// Component count preselected for the method, in `1..=max_components`.
    pub default_components: u32,
    pub description: &'static str,
}

impl MethodConfig {
    /// Whether `num_components` lies in `1..=max_components`.
    pub fn contains(&self, num_components: u32) -> bool {
        (1..=self.max_components).contains(&num_components)
    }
}

pub const DCT_CONFIG: MethodConfig = MethodConfig {
    label: "DCT (Discrete Cosine Transform)",
    max_components: 20,
    default_components: 10,
    description: "DCT: Block-based compression, very efficient per component (1-20)",
};

pub const SVD_CONFIG: MethodConfig = MethodConfig {
    label: "SVD (Singular Value Decomposition)",
    max_components: 256,
    default_components: 64,
    description: "SVD: Matrix decomposition, requires more components (1-256)",
};

/// Constraint table lookup. Total over the closed method set.
pub fn method_config(method: CompressionMethod) -> &'static MethodConfig {
    match method {
        CompressionMethod::Dct => &DCT_CONFIG,
        CompressionMethod::Svd => &SVD_CONFIG,
    }
}
