//! Error types for the layout toolkit
//!
//! Layout math never fails: sizes are clamped and rectangles may be
//! denormalized. Errors only come from the string, configuration and
//! browser boundaries, and most callers absorb them into defaults.

/// Errors that can occur at the layout toolkit's boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A CSS length that does not start with an integer
    InvalidLength(String),

    /// A grip area id other than the eight compass directions
    UnknownGripArea(String),

    /// A stack tier id other than normal, topmost or popup
    UnknownStackTier(String),

    /// Configuration could not be parsed, serialized or validated
    Config(String),

    /// A browser call failed
    Dom(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(value) => write!(f, "invalid css length: '{}'", value),
            Self::UnknownGripArea(id) => write!(f, "unknown grip area: '{}'", id),
            Self::UnknownStackTier(id) => write!(f, "unknown stack tier: '{}'", id),
            Self::Config(msg) => write!(f, "config error: {}", msg),
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::InvalidLength("auto".to_string());
        assert_eq!(err.to_string(), "invalid css length: 'auto'");

        let err = LayoutError::UnknownGripArea("up".to_string());
        assert_eq!(err.to_string(), "unknown grip area: 'up'");

        let err = LayoutError::UnknownStackTier("modal".to_string());
        assert_eq!(err.to_string(), "unknown stack tier: 'modal'");

        let err = LayoutError::Config("expected value".to_string());
        assert_eq!(err.to_string(), "config error: expected value");

        let err = LayoutError::Dom("no window".to_string());
        assert_eq!(err.to_string(), "dom error: no window");
    }

    #[test]
    fn test_error_equality() {
        let err1 = LayoutError::UnknownGripArea("x".to_string());
        let err2 = LayoutError::UnknownGripArea("x".to_string());
        let err3 = LayoutError::UnknownStackTier("x".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
