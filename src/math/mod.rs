mod aabb;
mod ray;

pub use aabb::AABB;
pub use ray::{intersect_aabb, Ray};

/// Clamp that never panics: with `min > max` the upper limit wins,
/// and NaN lands on the limits like any other out-of-range value.
pub fn clamp_range(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_range_inside_and_outside() {
        assert_eq!(clamp_range(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp_range(-3.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp_range(7.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_range_with_inverted_limits_does_not_panic() {
        assert_eq!(clamp_range(5.0, 2.0, 1.6), 1.6);
        assert_eq!(clamp_range(-5.0, 0.1, -0.1), -0.1);
    }

    #[test]
    fn clamp_range_nan_lands_on_limits() {
        assert_eq!(clamp_range(f32::NAN, 0.0, 1.0), 0.0);
    }
}
