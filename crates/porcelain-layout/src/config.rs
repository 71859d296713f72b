//! Toolkit configuration
//!
//! Loaded from JSON by the host. Missing fields take their defaults.

use crate::error::{LayoutError, LayoutResult};
use crate::layout::{MAX_LAYOUT_SIZE, MIN_LAYOUT_SIZE};
use crate::math::Size;
use serde::{Deserialize, Serialize};

/// Z-indices kept free above the popup base
pub const MIN_TIER_CAPACITY: u32 = 10000;

/// First z-index of each window stack
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackBases {
    pub normal: u32,
    pub topmost: u32,
    pub popup: u32,
}

impl StackBases {
    /// Bases must be strictly increasing, and the popup tier needs
    /// [`MIN_TIER_CAPACITY`] indices before `u32::MAX`
    pub fn validate(&self) -> LayoutResult<()> {
        if self.normal >= self.topmost || self.topmost >= self.popup {
            return Err(LayoutError::Config(format!(
                "stack bases must increase: normal {} topmost {} popup {}",
                self.normal, self.topmost, self.popup
            )));
        }
        if u32::MAX - self.popup < MIN_TIER_CAPACITY {
            return Err(LayoutError::Config(format!(
                "popup base {} leaves fewer than {} z-indices",
                self.popup, MIN_TIER_CAPACITY
            )));
        }
        Ok(())
    }
}

impl Default for StackBases {
    fn default() -> Self {
        Self {
            normal: 10000,
            topmost: 20000,
            popup: 30000,
        }
    }
}

/// Layout toolkit settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Z-index bases for the window stacks
    pub stacks: StackBases,
    /// Floor for sizes read from computed style
    pub min_layout_size: Size,
    /// Ceiling for sizes read from computed style
    pub max_layout_size: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            stacks: StackBases::default(),
            min_layout_size: MIN_LAYOUT_SIZE,
            max_layout_size: MAX_LAYOUT_SIZE,
        }
    }
}

impl LayoutConfig {
    /// Parse from JSON and validate the stack bases
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "invalid layout config");
            LayoutError::Config(e.to_string())
        })?;
        config.stacks.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "invalid layout config");
        })?;
        Ok(config)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> LayoutResult<String> {
        serde_json::to_string(self).map_err(|e| LayoutError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.stacks.normal, 10000);
        assert_eq!(config.stacks.topmost, 20000);
        assert_eq!(config.stacks.popup, 30000);
        assert_eq!(config.max_layout_size, Size::new(1_073_741_823.0, 1_073_741_823.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LayoutConfig::from_json(r#"{ "stacks": { "popup": 50000 } }"#).unwrap();
        assert_eq!(config.stacks.popup, 50000);
        assert_eq!(config.stacks.normal, 10000);
        assert_eq!(config.min_layout_size, Size::ZERO);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = LayoutConfig::default();
        config.max_layout_size = Size::new(4096.0, 4096.0);
        let json = config.to_json().unwrap();
        assert_eq!(LayoutConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_stack_base_without_headroom_rejected() {
        let err = LayoutConfig::from_json(r#"{ "stacks": { "popup": 4294967295 } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_unordered_stack_bases_rejected() {
        let err =
            LayoutConfig::from_json(r#"{ "stacks": { "normal": 20000, "topmost": 20000 } }"#)
                .unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
        assert!(StackBases::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = LayoutConfig::from_json("{ stacks: ").unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }
}
