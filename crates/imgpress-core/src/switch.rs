use serde::{Deserialize, Serialize};

use crate::consts::SWITCH_PROPORTION_DIVISOR;
use crate::method::CompressionMethod;

/// Decides the component count to keep when the active method changes.
///
/// A value carried over from the old method is reset to the new method's
/// default when it no longer fits the new range, or when it was valid under
/// the old method but is disproportionately small for the new one
/// (below `new_max / proportion_divisor`). Otherwise it is kept as is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentSwitchPolicy {
    pub proportion_divisor: f64,
}

impl Default for ComponentSwitchPolicy {
    fn default() -> Self {
        Self {
            proportion_divisor: SWITCH_PROPORTION_DIVISOR,
        }
    }
}

impl ComponentSwitchPolicy {
    pub fn new(proportion_divisor: f64) -> Self {
        Self { proportion_divisor }
    }

    pub fn resolve(
        &self,
        old_method: CompressionMethod,
        new_method: CompressionMethod,
        current: u32,
    ) -> u32 {
        let old_max = old_method.config().max_components;
        let new = new_method.config();

        if current > new.max_components {
            return new.default_components;
        }

        let threshold = f64::from(new.max_components) / self.proportion_divisor;
        if current <= old_max && f64::from(current) < threshold {
            return new.default_components;
        }

        current
    }
}

/// [`ComponentSwitchPolicy::resolve`] with the default divisor.
pub fn resolve_components(
    old_method: CompressionMethod,
    new_method: CompressionMethod,
    current: u32,
) -> u32 {
    ComponentSwitchPolicy::default().resolve(old_method, new_method, current)
}
