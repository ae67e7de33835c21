//! Scale transforms for layers.
//!
//! Layers express visibility transitions through their scale, so the
//! transform type carries a full 3D scale the way a compositor would, even
//! though the scene itself is 2D.

use glam::Vec3;

/// A 3D scale transform applied to a layer about its anchor point.
///
/// # Examples
///
/// ```
/// use paper_switch_scene::Transform3D;
///
/// let t = Transform3D::from_scale_xyz(2.0, 2.0, 1.0);
/// assert_eq!(t.scale().x, 2.0);
/// assert!(!t.is_identity());
/// assert!(Transform3D::IDENTITY.is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    scale: Vec3,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// The identity transform (no scaling).
    pub const IDENTITY: Self = Self { scale: Vec3::ONE };

    /// Create a uniform scale transform.
    #[inline]
    pub const fn from_scale(s: f32) -> Self {
        Self {
            scale: Vec3::new(s, s, s),
        }
    }

    /// Create a per-axis scale transform.
    #[inline]
    pub const fn from_scale_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            scale: Vec3::new(x, y, z),
        }
    }

    /// Get the scale components.
    #[inline]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Check whether this is the identity transform.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.scale == Vec3::ONE
    }

    /// Linear interpolation between two transforms.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            scale: self.scale.lerp(other.scale, t),
        }
    }

    /// Component-wise approximate equality with the given tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        (self.scale - other.scale).abs().max_element() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!(Transform3D::IDENTITY.is_identity());
        assert_eq!(Transform3D::default(), Transform3D::IDENTITY);
        assert!(!Transform3D::from_scale(0.5).is_identity());
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Transform3D::from_scale(0.0);
        let b = Transform3D::from_scale(1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Transform3D::from_scale(0.5));
    }

    #[test]
    fn test_approx_eq() {
        let a = Transform3D::from_scale(1.0);
        let b = Transform3D::from_scale(1.0005);
        assert!(a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&b, 0.0001));
    }
}
