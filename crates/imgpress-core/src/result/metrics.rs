use crate::consts::BYTES_PER_KB;

use super::{CompressionResult, ComponentLevel};

/// Size of the level as a percentage of the original upload.
pub fn size_percentage(result: &CompressionResult, level: &ComponentLevel) -> f64 {
    level.data_size as f64 / result.original_size as f64 * 100.0
}

/// Original size divided by the level size. `f64::INFINITY` for an empty level.
pub fn compression_ratio(result: &CompressionResult, level: &ComponentLevel) -> f64 {
    if level.data_size == 0 {
        return f64::INFINITY;
    }
    result.original_size as f64 / level.data_size as f64
}

/// Average kilobytes spent per retained component.
pub fn size_per_component_kb(level: &ComponentLevel) -> f64 {
    level.data_size as f64 / f64::from(level.num_components) / BYTES_PER_KB
}

pub fn size_kb(level: &ComponentLevel) -> f64 {
    level.data_size as f64 / BYTES_PER_KB
}

/// All derived metrics of one level, unrounded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelMetrics {
    pub num_components: u32,
    pub size_kb: f64,
    pub size_percentage: f64,
    pub compression_ratio: f64,
    pub size_per_component_kb: f64,
}

impl LevelMetrics {
    pub fn compute(result: &CompressionResult, level: &ComponentLevel) -> Self {
        Self {
            num_components: level.num_components,
            size_kb: size_kb(level),
            size_percentage: size_percentage(result, level),
            compression_ratio: compression_ratio(result, level),
            size_per_component_kb: size_per_component_kb(level),
        }
    }
}
