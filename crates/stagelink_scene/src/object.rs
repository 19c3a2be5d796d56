//! Scene object model: identifiers, handles, and transforms.
//!
//! The identifier is the scene-wide primary key of an object. The display
//! label is what tooling shows to the user; the container does not force the
//! two to agree, the bridge's reconciler does.

use std::fmt;

/// The unique identifier of a scene object.
///
/// Identifiers are plain strings restricted to ASCII alphanumerics and `_`.
/// The value `"None"` (compared case-insensitively) is the "no name"
/// sentinel of the identifier type and never names a real object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// The "no name" sentinel value.
    pub const NONE_NAME: &'static str = "None";

    /// Fixed placeholder assigned instead of the sentinel. A constant token,
    /// not a counter; collisions are resolved by the allocator.
    pub const GENERATED_NAME: &'static str = "GeneratedObject";

    /// Wrap a string that is already grammar-valid.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build an identifier from untrusted text, stripping every character
    /// the identifier grammar excludes. May produce an empty identifier.
    pub fn sanitized(raw: &str) -> Self {
        Self(raw.chars().filter(|&c| Self::is_valid_char(c)).collect())
    }

    /// Whether `c` may appear in an identifier.
    pub fn is_valid_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// The generated-name placeholder.
    pub fn generated() -> Self {
        Self(Self::GENERATED_NAME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every character is grammar-valid and the id is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.chars().all(Self::is_valid_char)
    }

    /// Whether this identifier is the "no name" sentinel. The underlying
    /// identifier type compares names case-insensitively, so `"none"` is the
    /// sentinel too.
    pub fn is_none_name(&self) -> bool {
        self.0.eq_ignore_ascii_case(Self::NONE_NAME)
    }

    /// Split a trailing `_<digits>` suffix off the identifier.
    ///
    /// `"Chair_5"` yields `("Chair", Some(5))`, `"Chair"` yields
    /// `("Chair", None)`. A suffix too large for `u32` is not a suffix.
    pub fn split_numeric_suffix(&self) -> (&str, Option<u32>) {
        if let Some(at) = self.0.rfind('_') {
            let digits = &self.0[at + 1..];
            if !digits.is_empty() {
                if let Ok(n) = digits.parse::<u32>() {
                    return (&self.0[..at], Some(n));
                }
            }
        }
        (&self.0, None)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque handle to a live object inside a container.
///
/// Handles are only meaningful to the container that issued them and are
/// expected to be used within the command that looked them up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectHandle(pub u32);

/// World transform of a scene object. Rotation is in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    pub fn with_position(mut self, position: [f32; 3]) -> Self {
        self.position = position;
        self
    }

    /// Apply a delta relative to the current transform: position and
    /// rotation add, scale multiplies component-wise.
    pub fn apply_delta(&mut self, delta: &TransformDelta) {
        for axis in 0..3 {
            self.position[axis] += delta.translate[axis];
            self.rotation[axis] += delta.rotate[axis];
            self.scale[axis] *= delta.scale[axis];
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// A relative transform change. The default delta leaves a transform as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformDelta {
    pub translate: [f32; 3],
    pub rotate: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for TransformDelta {
    fn default() -> Self {
        Self {
            translate: [0.0, 0.0, 0.0],
            rotate: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_invalid_chars() {
        assert_eq!(ObjectId::sanitized("Chair 1!").as_str(), "Chair1");
        assert_eq!(ObjectId::sanitized("a/b:c|d").as_str(), "abcd");
        assert_eq!(ObjectId::sanitized("Mesh_01").as_str(), "Mesh_01");
    }

    #[test]
    fn test_sanitize_all_invalid_is_empty() {
        assert!(ObjectId::sanitized("###").is_empty());
        assert!(ObjectId::sanitized("").is_empty());
    }

    #[test]
    fn test_none_sentinel_is_case_insensitive() {
        assert!(ObjectId::new("None").is_none_name());
        assert!(ObjectId::new("none").is_none_name());
        assert!(ObjectId::new("NONE").is_none_name());
        assert!(!ObjectId::new("NoneSuch").is_none_name());
    }

    #[test]
    fn test_split_numeric_suffix() {
        assert_eq!(ObjectId::new("Chair_5").split_numeric_suffix(), ("Chair", Some(5)));
        assert_eq!(ObjectId::new("Chair").split_numeric_suffix(), ("Chair", None));
        assert_eq!(ObjectId::new("a_b_2").split_numeric_suffix(), ("a_b", Some(2)));
        assert_eq!(ObjectId::new("Chair_").split_numeric_suffix(), ("Chair_", None));
    }

    #[test]
    fn test_transform_delta_applies_relative() {
        let mut transform = Transform::new().with_position([1.0, 2.0, 3.0]);
        let delta = TransformDelta {
            translate: [1.0, 0.0, -1.0],
            rotate: [0.0, 90.0, 0.0],
            scale: [2.0, 1.0, 1.0],
        };
        transform.apply_delta(&delta);
        assert_eq!(transform.position, [2.0, 2.0, 2.0]);
        assert_eq!(transform.rotation, [0.0, 90.0, 0.0]);
        assert_eq!(transform.scale, [2.0, 1.0, 1.0]);
    }
}
