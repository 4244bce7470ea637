use bevy::prelude::Vec2;

/// Dead zone below which an axis is treated as released.
pub const AXIS_DEADZONE: f32 = 0.01;

/// Normalizes `vector`, substituting `fallback` when it has no usable length.
pub fn normalize_or(vector: Vec2, fallback: Vec2) -> Vec2 {
    let normalized = vector.normalize_or_zero();
    if normalized == Vec2::ZERO {
        fallback
    } else {
        normalized
    }
}

/// Unit vector along the facing direction.
#[inline]
pub fn facing_direction(facing_right: bool) -> Vec2 {
    if facing_right { Vec2::X } else { Vec2::NEG_X }
}

#[inline]
pub fn facing_sign(facing_right: bool) -> f32 {
    if facing_right { 1.0 } else { -1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_uses_fallback() {
        assert_eq!(normalize_or(Vec2::ZERO, Vec2::NEG_X), Vec2::NEG_X);
    }

    #[test]
    fn non_finite_vector_uses_fallback() {
        assert_eq!(normalize_or(Vec2::new(f32::NAN, 1.0), Vec2::X), Vec2::X);
    }

    #[test]
    fn regular_vector_is_normalized() {
        let normalized = normalize_or(Vec2::new(3.0, 4.0), Vec2::X);
        assert!((normalized - Vec2::new(0.6, 0.8)).length() < 1e-6);
    }
}
