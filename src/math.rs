//! Vector geometry kernel for joint-angle computation.
//!
//! Every angle leaving this module is finite and inside [0, 180]. Degenerate
//! input (a zero-length ray, or a cosine argument pushed outside [-1, 1] by
//! floating-point drift) yields 0 degrees instead of NaN; callers treat that
//! sentinel as "unknown angle".

pub use glam::{Vec2, Vec3};

/// Euclidean norm of a 3-vector.
///
/// The norm of the zero vector is 0; callers that divide by the result must
/// guard against it themselves.
#[inline]
pub fn norm3(v: Vec3) -> f32 {
    v.length()
}

/// Interior angle in degrees at `vertex`, spanned by the rays towards `a`
/// and `b`.
///
/// Returns 0.0 when either ray has zero length or when the cosine argument
/// falls outside [-1, 1]. Exactly opposite rays are valid geometry and
/// return 180, not the sentinel.
pub fn angle_between(vertex: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ray_a = a - vertex;
    let ray_b = b - vertex;

    let len_a = norm3(ray_a);
    let len_b = norm3(ray_b);
    if len_a == 0.0 || len_b == 0.0 {
        return 0.0;
    }

    let cos = ray_a.dot(ray_b) / (len_a * len_b);
    if !(-1.0..=1.0).contains(&cos) {
        // Out-of-domain cosine (drift, or NaN from overflowed magnitudes)
        // is "unknown angle", not an error. NaN fails the range check too.
        return 0.0;
    }

    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_point(rng: &mut impl Rng, span: f32) -> Vec3 {
        Vec3::new(
            rng.random_range(-span..span),
            rng.random_range(-span..span),
            rng.random_range(-span..span),
        )
    }

    #[test]
    fn test_right_angle_is_90() {
        let angle = angle_between(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!(
            (angle - 90.0).abs() < 1e-6,
            "right angle should be 90, got {}",
            angle
        );
    }

    #[test]
    fn test_opposite_rays_are_180() {
        // Collinear-opposite is valid geometry, not the degenerate sentinel
        let angle = angle_between(Vec3::ZERO, Vec3::X, Vec3::NEG_X);
        assert!(
            (angle - 180.0).abs() < 1e-6,
            "opposite rays should be 180, got {}",
            angle
        );
    }

    #[test]
    fn test_parallel_rays_are_0() {
        let angle = angle_between(Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0));
        assert!(angle.abs() < 1e-6, "parallel rays should be 0, got {}", angle);
    }

    #[test]
    fn test_duplicate_point_yields_sentinel() {
        let vertex = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(angle_between(vertex, vertex, Vec3::Y), 0.0);
        assert_eq!(angle_between(vertex, Vec3::Y, vertex), 0.0);
        assert_eq!(angle_between(vertex, vertex, vertex), 0.0);
    }

    #[test]
    fn test_overflowing_dot_product_yields_sentinel() {
        // The dot product overflows f32 to infinity along with the squared
        // lengths, so the cosine is inf/inf = NaN and must fall back to 0
        // rather than propagate
        let angle = angle_between(
            Vec3::ZERO,
            Vec3::new(1e20, 1e20, 0.0),
            Vec3::new(1e20, 0.0, 0.0),
        );
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_huge_orthogonal_rays_keep_their_angle() {
        // Only the squared lengths overflow here; the dot product is exactly
        // 0, so cos = 0/inf = 0 and the true right angle survives
        let angle = angle_between(
            Vec3::ZERO,
            Vec3::new(1e20, 0.0, 0.0),
            Vec3::new(0.0, 1e20, 0.0),
        );
        assert!(
            (angle - 90.0).abs() < 1e-6,
            "orthogonal rays should stay 90, got {}",
            angle
        );
    }

    #[test]
    fn test_symmetric_under_ray_swap() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let vertex = random_point(&mut rng, 2.0);
            let a = random_point(&mut rng, 2.0);
            let b = random_point(&mut rng, 2.0);
            assert_eq!(
                angle_between(vertex, a, b),
                angle_between(vertex, b, a),
                "swap symmetry failed for vertex={:?} a={:?} b={:?}",
                vertex,
                a,
                b
            );
        }
    }

    #[test]
    fn test_result_always_finite_and_in_range() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let angle = angle_between(
                random_point(&mut rng, 5.0),
                random_point(&mut rng, 5.0),
                random_point(&mut rng, 5.0),
            );
            assert!(angle.is_finite());
            assert!((0.0..=180.0).contains(&angle), "out of range: {}", angle);
        }
    }

    #[test]
    fn test_norm3() {
        assert_eq!(norm3(Vec3::ZERO), 0.0);
        assert!((norm3(Vec3::new(3.0, 4.0, 0.0)) - 5.0).abs() < 1e-6);
    }
}
