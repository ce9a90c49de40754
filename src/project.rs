//! 3D-to-screen projection through the sensor's calibration capability.

use glam::{Vec2, Vec3};

/// Width of the render space in pixels
pub const RENDER_WIDTH: f32 = 640.0;

/// Height of the render space in pixels
pub const RENDER_HEIGHT: f32 = 480.0;

/// Sensor-owned coordinate calibration, injected into the pipeline.
///
/// Implementations map a 3D joint position (sensor metric space) into the
/// 640x480 render space. The result is not clamped: a partially off-frame
/// skeleton produces out-of-bounds points, and the clipped-edge indicator
/// reports that situation separately.
pub trait CoordinateMapper {
    fn map(&self, position: Vec3) -> Vec2;
}

/// Any pure function over positions is a usable mapper; hosts and tests can
/// pass a closure instead of a named type.
impl<F> CoordinateMapper for F
where
    F: Fn(Vec3) -> Vec2,
{
    #[inline]
    fn map(&self, position: Vec3) -> Vec2 {
        self(position)
    }
}

/// Project one joint position into screen space
#[inline]
pub fn project_joint<M: CoordinateMapper + ?Sized>(mapper: &M, position: Vec3) -> Vec2 {
    mapper.map(position)
}
