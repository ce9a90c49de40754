//! Fixed anatomical tables: bone connectivity for rendering and the named
//! joint triples that define the derived angles.
//!
//! Both tables are explicit constants (not per-call literals) so they can be
//! validated in isolation and consumed as configuration by the render plan
//! and the angle computer.

use static_assertions::const_assert_eq;

use crate::joint::JointId;

/// A drawable anatomical connection between two joints.
/// Rendering only; angle computation uses [`AngleSpec`] triples instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bone {
    pub start: JointId,
    pub end: JointId,
}

const fn bone(start: JointId, end: JointId) -> Bone {
    Bone { start, end }
}

/// 7 torso bones plus 3 per limb
pub const BONE_COUNT: usize = 19;

/// Draw order: torso, left arm, right arm, left leg, right leg
pub static BONES: [Bone; BONE_COUNT] = [
    // Torso
    bone(JointId::Head, JointId::ShoulderCenter),
    bone(JointId::ShoulderCenter, JointId::ShoulderLeft),
    bone(JointId::ShoulderCenter, JointId::ShoulderRight),
    bone(JointId::ShoulderCenter, JointId::Spine),
    bone(JointId::Spine, JointId::HipCenter),
    bone(JointId::HipCenter, JointId::HipLeft),
    bone(JointId::HipCenter, JointId::HipRight),
    // Left arm
    bone(JointId::ShoulderLeft, JointId::ElbowLeft),
    bone(JointId::ElbowLeft, JointId::WristLeft),
    bone(JointId::WristLeft, JointId::HandLeft),
    // Right arm
    bone(JointId::ShoulderRight, JointId::ElbowRight),
    bone(JointId::ElbowRight, JointId::WristRight),
    bone(JointId::WristRight, JointId::HandRight),
    // Left leg
    bone(JointId::HipLeft, JointId::KneeLeft),
    bone(JointId::KneeLeft, JointId::AnkleLeft),
    bone(JointId::AnkleLeft, JointId::FootLeft),
    // Right leg
    bone(JointId::HipRight, JointId::KneeRight),
    bone(JointId::KneeRight, JointId::AnkleRight),
    bone(JointId::AnkleRight, JointId::FootRight),
];

const_assert_eq!(BONE_COUNT, 7 + 3 + 3 + 3 + 3);

/// Named (vertex, ray_a, ray_b) joint triple defining one derived skeletal
/// angle: the interior angle at `vertex` between the rays towards `ray_a`
/// and `ray_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleSpec {
    /// Column label in the persisted record
    pub name: &'static str,
    pub vertex: JointId,
    pub ray_a: JointId,
    pub ray_b: JointId,
}

const fn spec(name: &'static str, vertex: JointId, ray_a: JointId, ray_b: JointId) -> AngleSpec {
    AngleSpec {
        name,
        vertex,
        ray_a,
        ray_b,
    }
}

/// Two symmetric groups of four
pub const ANGLE_COUNT: usize = 8;

/// Left group then right group, each ordered neck, shoulder, elbow, wrist.
/// This is the persisted angle column order; do not reorder.
pub static ANGLE_SPECS: [AngleSpec; ANGLE_COUNT] = [
    spec(
        "L_neck",
        JointId::ShoulderCenter,
        JointId::Head,
        JointId::ShoulderLeft,
    ),
    spec(
        "L_shoulder",
        JointId::ShoulderLeft,
        JointId::ShoulderCenter,
        JointId::ElbowLeft,
    ),
    spec(
        "L_elbow",
        JointId::ElbowLeft,
        JointId::ShoulderLeft,
        JointId::WristLeft,
    ),
    spec(
        "L_wrist",
        JointId::WristLeft,
        JointId::ElbowLeft,
        JointId::HandLeft,
    ),
    spec(
        "R_neck",
        JointId::ShoulderCenter,
        JointId::Head,
        JointId::ShoulderRight,
    ),
    spec(
        "R_shoulder",
        JointId::ShoulderRight,
        JointId::ShoulderCenter,
        JointId::ElbowRight,
    ),
    spec(
        "R_elbow",
        JointId::ElbowRight,
        JointId::ShoulderRight,
        JointId::WristRight,
    ),
    spec(
        "R_wrist",
        JointId::WristRight,
        JointId::ElbowRight,
        JointId::HandRight,
    ),
];

const_assert_eq!(ANGLE_COUNT, 2 * 4);
