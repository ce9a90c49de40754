//! Derived joint angles computed from a skeleton's joint positions.

use crate::frame::Skeleton;
use crate::math::angle_between;
use crate::tables::{AngleSpec, ANGLE_COUNT, ANGLE_SPECS};

/// One computed angle: the defining spec plus degrees in [0, 180].
/// 0 doubles as the degenerate-geometry sentinel.
#[derive(Debug, Clone, Copy)]
pub struct AngleResult {
    pub spec: &'static AngleSpec,
    pub degrees: f32,
}

/// Compute the eight named skeletal angles for one skeleton.
///
/// Pure and deterministic. Result order follows [`ANGLE_SPECS`], which is
/// also the persisted column order.
pub fn compute_joint_angles(skeleton: &Skeleton) -> [AngleResult; ANGLE_COUNT] {
    std::array::from_fn(|i| {
        let spec = &ANGLE_SPECS[i];
        let degrees = angle_between(
            skeleton.joints[spec.vertex].position,
            skeleton.joints[spec.ray_a].position,
            skeleton.joints[spec.ray_b].position,
        );
        AngleResult { spec, degrees }
    })
}
