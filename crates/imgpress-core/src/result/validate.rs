use crate::error::ValidationError;
use crate::method::CompressionMethod;

use super::{CompressionResult, ComponentLevel, RawCompressionResult};

/// Check every invariant of a compression result and convert it to the
/// validated type. Fails on the first violation found.
pub fn validate(raw: RawCompressionResult) -> Result<CompressionResult, ValidationError> {
    let method = match raw.method.as_str() {
        "DCT" => CompressionMethod::Dct,
        "SVD" => CompressionMethod::Svd,
        other => return Err(ValidationError::UnknownMethod(other.to_string())),
    };

    if raw.component_levels.is_empty() {
        return Err(ValidationError::EmptyLevels);
    }

    if raw.original_size <= 0 {
        return Err(ValidationError::NonPositiveOriginalSize(raw.original_size));
    }

    let mut levels = Vec::with_capacity(raw.component_levels.len());
    let mut previous: Option<i64> = None;

    for (index, level) in raw.component_levels.into_iter().enumerate() {
        if level.num_components <= 0 {
            return Err(ValidationError::NonPositiveComponentCount {
                index,
                value: level.num_components,
            });
        }
        if level.data_size < 0 {
            return Err(ValidationError::NegativeDataSize {
                index,
                value: level.data_size,
            });
        }
        if let Some(previous) = previous {
            if level.num_components <= previous {
                return Err(ValidationError::NonMonotonic {
                    index,
                    previous,
                    current: level.num_components,
                });
            }
        }
        previous = Some(level.num_components);

        let num_components = u32::try_from(level.num_components).map_err(|_| {
            ValidationError::Malformed(format!(
                "level {index} component count {} exceeds the supported range",
                level.num_components
            ))
        })?;

        levels.push(ComponentLevel {
            num_components,
            data_size: level.data_size as u64,
            image_data: level.image_data,
        });
    }

    Ok(CompressionResult {
        method,
        original_size: raw.original_size as u64,
        levels,
    })
}
