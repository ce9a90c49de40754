//! Skeleton render planning: stateless, per-frame decisions about what to
//! draw and in which order.
//!
//! The plan is an ordered primitive list: background rectangle, clip-edge
//! indicator rectangles, then per skeleton bones, joints, and finally the
//! overlay text so it is never occluded.

use glam::Vec2;

use crate::angles::AngleResult;
use crate::frame::{ClippedEdges, Frame, FrameEdge, SkeletonTracking};
use crate::joint::{JointSample, JointTracking};
use crate::project::{project_joint, CoordinateMapper, RENDER_HEIGHT, RENDER_WIDTH};
use crate::tables::{Bone, ANGLE_COUNT, BONES};

/// RGBA fill color, components in [0, 1]
pub type Fill = [f32; 4];

/// Stroke style for a bone line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: [f32; 4],
    pub width: f32,
}

/// Fixed draw styles for the skeleton overlay
pub mod style {
    use super::{Fill, Stroke};

    /// Canvas background
    pub const BACKGROUND: Fill = [0.0, 0.0, 0.0, 1.0];
    /// Clip-edge warning strips
    pub const CLIP_EDGE: Fill = [1.0, 0.0, 0.0, 1.0];
    /// Body-center ellipse for position-only skeletons
    pub const BODY_CENTER: Fill = [0.0, 0.0, 1.0, 1.0];
    /// Joints with high-confidence positions
    pub const JOINT_TRACKED: Fill = [68.0 / 255.0, 192.0 / 255.0, 68.0 / 255.0, 1.0];
    /// Joints with estimated positions
    pub const JOINT_INFERRED: Fill = [1.0, 1.0, 0.0, 1.0];

    /// Bones whose both endpoints are tracked
    pub const BONE_CONFIDENT: Stroke = Stroke {
        color: [0.0, 0.5, 0.0, 1.0],
        width: 6.0,
    };
    /// Bones with one estimated endpoint
    pub const BONE_TENTATIVE: Stroke = Stroke {
        color: [0.5, 0.5, 0.5, 1.0],
        width: 1.0,
    };
}

/// Radius of a drawn joint ellipse
pub const JOINT_RADIUS: f32 = 3.0;

/// Radius of the body-center ellipse
pub const BODY_CENTER_RADIUS: f32 = 10.0;

/// Thickness of the clip-edge border strips
pub const CLIP_EDGE_THICKNESS: f32 = 10.0;

/// Vertical step between overlay text lines
const TEXT_LINE_STEP: f32 = 15.0;

/// Top-left origin of the joint coordinate dump
const TEXT_ORIGIN_X: f32 = 10.0;
const TEXT_ORIGIN_Y: f32 = 10.0;

/// Left margin of the angle labels
const ANGLE_TEXT_X: f32 = 20.0;

/// The only things emitted toward the render sink
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Ellipse {
        center: Vec2,
        radius_x: f32,
        radius_y: f32,
        fill: Fill,
    },
    Rect {
        origin: Vec2,
        width: f32,
        height: f32,
        fill: Fill,
    },
    Text {
        content: String,
        position: Vec2,
    },
}

/// Background rectangle covering the whole render space
pub fn background() -> RenderPrimitive {
    RenderPrimitive::Rect {
        origin: Vec2::ZERO,
        width: RENDER_WIDTH,
        height: RENDER_HEIGHT,
        fill: style::BACKGROUND,
    }
}

/// Plan one frame against an empty canvas.
///
/// Hosts compositing several skeletons per callback go through
/// [`crate::session::Pipeline`], which shares one background.
pub fn plan_frame<M: CoordinateMapper>(
    frame: &Frame,
    angles: &[AngleResult; ANGLE_COUNT],
    mapper: &M,
) -> Vec<RenderPrimitive> {
    let mut plan = vec![background()];
    push_clipped_edges(&mut plan, frame.skeleton.clipped_edges);
    push_skeleton(&mut plan, frame, angles, mapper);
    plan
}

/// One warning strip per clipped edge, independent of tracking state
pub(crate) fn push_clipped_edges(plan: &mut Vec<RenderPrimitive>, edges: ClippedEdges) {
    for edge in edges.iter() {
        let (origin, width, height) = match edge {
            FrameEdge::Bottom => (
                Vec2::new(0.0, RENDER_HEIGHT - CLIP_EDGE_THICKNESS),
                RENDER_WIDTH,
                CLIP_EDGE_THICKNESS,
            ),
            FrameEdge::Top => (Vec2::ZERO, RENDER_WIDTH, CLIP_EDGE_THICKNESS),
            FrameEdge::Left => (Vec2::ZERO, CLIP_EDGE_THICKNESS, RENDER_HEIGHT),
            FrameEdge::Right => (
                Vec2::new(RENDER_WIDTH - CLIP_EDGE_THICKNESS, 0.0),
                CLIP_EDGE_THICKNESS,
                RENDER_HEIGHT,
            ),
        };
        plan.push(RenderPrimitive::Rect {
            origin,
            width,
            height,
            fill: style::CLIP_EDGE,
        });
    }
}

/// Bones, joints and overlay text for one skeleton, by tracking state
pub(crate) fn push_skeleton<M: CoordinateMapper>(
    plan: &mut Vec<RenderPrimitive>,
    frame: &Frame,
    angles: &[AngleResult; ANGLE_COUNT],
    mapper: &M,
) {
    let skeleton = &frame.skeleton;
    match skeleton.tracking {
        SkeletonTracking::NotTracked => {}
        SkeletonTracking::PositionOnly => {
            plan.push(RenderPrimitive::Ellipse {
                center: project_joint(mapper, skeleton.position),
                radius_x: BODY_CENTER_RADIUS,
                radius_y: BODY_CENTER_RADIUS,
                fill: style::BODY_CENTER,
            });
        }
        SkeletonTracking::Tracked => {
            for bone in &BONES {
                if let Some(line) = bone_primitive(frame, bone, mapper) {
                    plan.push(line);
                }
            }
            for (_, sample) in skeleton.joints.iter() {
                if let Some(ellipse) = joint_primitive(sample, mapper) {
                    plan.push(ellipse);
                }
            }
            push_overlay_text(plan, frame, angles);
        }
    }
}

/// Bone-drawing rule.
///
/// Skips the bone entirely when either endpoint is not tracked, or when both
/// are merely inferred. The confident stroke applies only when both
/// endpoints are tracked.
fn bone_primitive<M: CoordinateMapper>(
    frame: &Frame,
    bone: &Bone,
    mapper: &M,
) -> Option<RenderPrimitive> {
    let start = frame.skeleton.joints[bone.start];
    let end = frame.skeleton.joints[bone.end];

    if start.tracking == JointTracking::NotTracked || end.tracking == JointTracking::NotTracked {
        return None;
    }
    if start.tracking == JointTracking::Inferred && end.tracking == JointTracking::Inferred {
        return None;
    }

    let stroke =
        if start.tracking == JointTracking::Tracked && end.tracking == JointTracking::Tracked {
            style::BONE_CONFIDENT
        } else {
            style::BONE_TENTATIVE
        };

    Some(RenderPrimitive::Line {
        from: project_joint(mapper, start.position),
        to: project_joint(mapper, end.position),
        stroke,
    })
}

/// Joint-drawing rule: nothing for untracked joints, fill by trust level
fn joint_primitive<M: CoordinateMapper>(
    sample: &JointSample,
    mapper: &M,
) -> Option<RenderPrimitive> {
    let fill = match sample.tracking {
        JointTracking::Tracked => style::JOINT_TRACKED,
        JointTracking::Inferred => style::JOINT_INFERRED,
        JointTracking::NotTracked => return None,
    };
    Some(RenderPrimitive::Ellipse {
        center: project_joint(mapper, sample.position),
        radius_x: JOINT_RADIUS,
        radius_y: JOINT_RADIUS,
        fill,
    })
}

/// Coordinate dump for drawn joints plus the eight angle labels.
/// Emitted after bones and joints so the text is never occluded.
fn push_overlay_text(
    plan: &mut Vec<RenderPrimitive>,
    frame: &Frame,
    angles: &[AngleResult; ANGLE_COUNT],
) {
    let mut line_y = TEXT_ORIGIN_Y;

    plan.push(RenderPrimitive::Text {
        content: "\t\tx\ty\tz".to_string(),
        position: Vec2::new(TEXT_ORIGIN_X, line_y),
    });
    line_y += TEXT_LINE_STEP;

    for (id, sample) in frame.skeleton.joints.iter() {
        if sample.tracking == JointTracking::NotTracked {
            continue;
        }
        let p = sample.position;
        plan.push(RenderPrimitive::Text {
            content: format!("{}\t{:.4}\t{:.4}\t{:.4}", id.label(), p.x, p.y, p.z),
            position: Vec2::new(TEXT_ORIGIN_X, line_y),
        });
        line_y += TEXT_LINE_STEP;
    }

    line_y += TEXT_LINE_STEP;
    for angle in angles {
        plan.push(RenderPrimitive::Text {
            content: format!("{}: {:.4}", angle.spec.name, angle.degrees),
            position: Vec2::new(ANGLE_TEXT_X, line_y),
        });
        line_y += TEXT_LINE_STEP;
    }
}
