//! skeltrace — skeletal frame-processing pipeline.
//!
//! Turns per-frame 3D joint samples from a body-tracking sensor into a 2D
//! skeleton render plan and an append-only delimited time series of joint
//! coordinates and derived joint angles.
//!
//! The sensor driver, windowing toolkit and storage mechanics stay outside
//! the crate; they plug in through [`CoordinateMapper`], [`RenderSink`] and
//! [`RecordSink`]. Per callback, [`Pipeline::process`] stamps the session
//! clock, computes the eight named joint angles, plans the render pass and
//! appends one record row per tracked skeleton.

pub mod angles;
pub mod error;
pub mod frame;
pub mod joint;
pub mod math;
pub mod project;
pub mod recorder;
pub mod render;
pub mod session;
pub mod tables;

pub use angles::{compute_joint_angles, AngleResult};
pub use error::SinkError;
pub use frame::{ClippedEdges, Frame, FrameEdge, Skeleton, SkeletonTracking};
pub use glam::{Vec2, Vec3};
pub use joint::{JointId, JointMap, JointSample, JointTracking};
pub use math::{angle_between, norm3};
pub use project::{project_joint, CoordinateMapper, RENDER_HEIGHT, RENDER_WIDTH};
pub use recorder::{CsvFile, FrameRecorder, RecordSink, RecorderConfig};
pub use render::{plan_frame, RenderPrimitive};
pub use session::{Pipeline, RenderSink, SessionClock};
pub use tables::{AngleSpec, Bone, ANGLE_COUNT, ANGLE_SPECS, BONES, BONE_COUNT};
