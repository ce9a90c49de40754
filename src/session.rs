//! Callback-driven session orchestration: clock stamping, render planning
//! and frame recording.
//!
//! The sensor collaborator invokes [`Pipeline::process`] once per arriving
//! frame on its delivery thread. Each invocation runs to completion; the
//! core performs no internal threading, queuing or cancellation.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::angles::compute_joint_angles;
use crate::error::SinkError;
use crate::frame::{Frame, Skeleton, SkeletonTracking};
use crate::project::CoordinateMapper;
use crate::recorder::{FrameRecorder, RecordSink};
use crate::render::{self, RenderPrimitive};

/// Destination for a frame's ordered draw primitives.
///
/// Submission failure is fatal for the current call.
pub trait RenderSink {
    fn submit(&mut self, plan: &[RenderPrimitive]) -> Result<(), SinkError>;
}

/// Elapsed-time clock for a recording session.
///
/// Starts unset. Begins the first time a callback carries at least one
/// tracked or position-only skeleton, then runs continuously; it is never
/// reset and never paused.
#[derive(Debug, Default)]
pub struct SessionClock {
    started: Option<Instant>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self { started: None }
    }

    /// Elapsed time for the current callback.
    ///
    /// Returns zero until the clock starts; the starting callback itself
    /// stamps zero.
    pub fn stamp(&mut self, skeleton_visible: bool) -> Duration {
        match self.started {
            Some(t0) => t0.elapsed(),
            None if skeleton_visible => {
                self.started = Some(Instant::now());
                info!("session clock started");
                Duration::ZERO
            }
            None => Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

/// Per-session pipeline state and the per-callback processing entry point.
#[derive(Debug, Default)]
pub struct Pipeline {
    clock: SessionClock,
    recorder: FrameRecorder,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            clock: SessionClock::new(),
            recorder: FrameRecorder::new(),
        }
    }

    /// Process one sensor callback.
    ///
    /// Stamps every delivered skeleton with the session elapsed time, plans
    /// one render pass for all of them (background, clip indicators, then
    /// each skeleton's bones, joints and overlay text), submits the plan,
    /// and appends one record row per tracked skeleton. Any sink failure
    /// aborts the call and propagates.
    pub fn process<M, C, S>(
        &mut self,
        skeletons: Vec<Skeleton>,
        mapper: &M,
        canvas: &mut C,
        store: &mut S,
    ) -> Result<(), SinkError>
    where
        M: CoordinateMapper,
        C: RenderSink + ?Sized,
        S: RecordSink + ?Sized,
    {
        let visible = skeletons
            .iter()
            .any(|s| s.tracking != SkeletonTracking::NotTracked);
        let elapsed = self.clock.stamp(visible);

        let frames: Vec<Frame> = skeletons
            .into_iter()
            .map(|s| Frame::new(s, elapsed))
            .collect();

        // Angles feed both the overlay text and the record row
        let angle_sets: Vec<_> = frames
            .iter()
            .map(|f| compute_joint_angles(&f.skeleton))
            .collect();

        let mut plan = vec![render::background()];
        for frame in &frames {
            render::push_clipped_edges(&mut plan, frame.skeleton.clipped_edges);
        }
        for (frame, angles) in frames.iter().zip(angle_sets.iter()) {
            render::push_skeleton(&mut plan, frame, angles, mapper);
        }
        canvas.submit(&plan)?;

        let mut rows = 0;
        for (frame, angles) in frames.iter().zip(angle_sets.iter()) {
            if frame.skeleton.tracking == SkeletonTracking::Tracked {
                self.recorder.record(frame, angles, store)?;
                rows += 1;
            }
        }

        debug!(
            "callback processed: {} skeleton(s), {} primitive(s), {} row(s), elapsed {}ms",
            frames.len(),
            plan.len(),
            rows,
            elapsed.as_millis()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::{Vec2, Vec3};

    use super::*;
    use crate::frame::ClippedEdges;
    use crate::joint::{JointMap, JointSample, JointTracking};

    #[derive(Default)]
    struct CapturingCanvas {
        passes: Vec<Vec<RenderPrimitive>>,
    }

    impl RenderSink for CapturingCanvas {
        fn submit(&mut self, plan: &[RenderPrimitive]) -> Result<(), SinkError> {
            self.passes.push(plan.to_vec());
            Ok(())
        }
    }

    struct RefusingCanvas;

    impl RenderSink for RefusingCanvas {
        fn submit(&mut self, _plan: &[RenderPrimitive]) -> Result<(), SinkError> {
            Err(SinkError::Render {
                reason: "canvas closed".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        records: Vec<String>,
    }

    impl RecordSink for MemoryStore {
        fn append(&mut self, record: &str) -> Result<(), SinkError> {
            self.records.push(record.to_string());
            Ok(())
        }
    }

    fn mapper() -> impl CoordinateMapper {
        |p: Vec3| Vec2::new(p.x * 160.0 + 320.0, 240.0 - p.y * 160.0)
    }

    fn skeleton(tracking: SkeletonTracking) -> Skeleton {
        let joints = JointMap::from_fn(|id| {
            let i = id.index() as f32;
            JointSample::new(Vec3::new(i * 0.05, 1.0 - i * 0.05, 2.0), JointTracking::Tracked)
        });
        Skeleton {
            joints,
            position: Vec3::new(0.0, 0.5, 2.0),
            tracking,
            clipped_edges: ClippedEdges::NONE,
        }
    }

    #[test]
    fn test_clock_unset_until_first_visible_skeleton() {
        let mut clock = SessionClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.stamp(false), Duration::ZERO);
        assert!(!clock.is_running());

        assert_eq!(clock.stamp(true), Duration::ZERO);
        assert!(clock.is_running());

        // Keeps running even when skeletons disappear
        let _ = clock.stamp(false);
        assert!(clock.is_running());
    }

    #[test]
    fn test_empty_callback_renders_background_only() {
        let mut pipeline = Pipeline::new();
        let mut canvas = CapturingCanvas::default();
        let mut store = MemoryStore::default();

        pipeline
            .process(Vec::new(), &mapper(), &mut canvas, &mut store)
            .unwrap();

        assert_eq!(canvas.passes.len(), 1);
        assert_eq!(canvas.passes[0], vec![render::background()]);
        assert!(store.records.is_empty());
    }

    #[test]
    fn test_tracked_skeleton_is_rendered_and_recorded() {
        let mut pipeline = Pipeline::new();
        let mut canvas = CapturingCanvas::default();
        let mut store = MemoryStore::default();

        pipeline
            .process(
                vec![skeleton(SkeletonTracking::Tracked)],
                &mapper(),
                &mut canvas,
                &mut store,
            )
            .unwrap();

        assert_eq!(canvas.passes.len(), 1);
        assert!(canvas.passes[0].len() > 1);
        assert_eq!(store.records.len(), 2, "header plus one row");
    }

    #[test]
    fn test_position_only_skeleton_is_not_recorded() {
        let mut pipeline = Pipeline::new();
        let mut canvas = CapturingCanvas::default();
        let mut store = MemoryStore::default();

        pipeline
            .process(
                vec![skeleton(SkeletonTracking::PositionOnly)],
                &mapper(),
                &mut canvas,
                &mut store,
            )
            .unwrap();

        assert!(store.records.is_empty());
        // Still rendered: background plus center ellipse
        assert_eq!(canvas.passes[0].len(), 2);
    }

    #[test]
    fn test_two_tracked_skeletons_record_two_rows() {
        let mut pipeline = Pipeline::new();
        let mut canvas = CapturingCanvas::default();
        let mut store = MemoryStore::default();

        pipeline
            .process(
                vec![
                    skeleton(SkeletonTracking::Tracked),
                    skeleton(SkeletonTracking::Tracked),
                ],
                &mapper(),
                &mut canvas,
                &mut store,
            )
            .unwrap();

        assert_eq!(store.records.len(), 3, "header plus two rows");
    }

    #[test]
    fn test_render_failure_propagates_before_recording() {
        let mut pipeline = Pipeline::new();
        let mut store = MemoryStore::default();

        let result = pipeline.process(
            vec![skeleton(SkeletonTracking::Tracked)],
            &mapper(),
            &mut RefusingCanvas,
            &mut store,
        );

        assert!(matches!(result, Err(SinkError::Render { .. })));
        assert!(store.records.is_empty(), "no row after a failed render pass");
    }
}
