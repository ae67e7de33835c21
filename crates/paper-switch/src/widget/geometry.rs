//! Size hints for layout negotiation.

use paper_switch_scene::Size;

/// A widget's size preferences for layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHint {
    /// The size the widget would like to have.
    pub preferred: Size,
    /// The smallest acceptable size.
    pub minimum: Size,
}

impl SizeHint {
    /// Create a size hint with the given preferred size.
    ///
    /// The minimum defaults to the preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: preferred,
        }
    }

    /// Create a size hint from preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Set the minimum size using builder pattern.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = minimum;
        self
    }

    /// Set the minimum dimensions using builder pattern.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Size::new(width, height);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_defaults_to_preferred() {
        let hint = SizeHint::from_dimensions(51.0, 31.0);
        assert_eq!(hint.preferred, hint.minimum);
    }

    #[test]
    fn test_with_minimum() {
        let hint = SizeHint::from_dimensions(100.0, 30.0).with_minimum_dimensions(40.0, 24.0);
        assert_eq!(hint.minimum, Size::new(40.0, 24.0));
        assert_eq!(hint.preferred, Size::new(100.0, 30.0));
    }
}
