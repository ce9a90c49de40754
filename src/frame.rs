//! Per-callback frame data: one skeleton's samples plus session timing.

use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::joint::JointMap;

/// Overall skeleton confidence for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkeletonTracking {
    /// Full joint data available
    Tracked,
    /// Only the body-center position is known
    PositionOnly,
    /// Nothing usable this frame
    NotTracked,
}

/// One field-of-view edge the skeleton can extend past
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameEdge {
    Bottom = 0,
    Top = 1,
    Left = 2,
    Right = 3,
}

impl FrameEdge {
    /// Indicator emission order (matches the sensor's flag order)
    pub const ALL: [FrameEdge; 4] = [
        FrameEdge::Bottom,
        FrameEdge::Top,
        FrameEdge::Left,
        FrameEdge::Right,
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of edges currently clipping the skeleton.
/// Bitset where bit i corresponds to the FrameEdge with discriminant i.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClippedEdges(u8);

impl ClippedEdges {
    /// Nothing clipped
    pub const NONE: ClippedEdges = ClippedEdges(0);

    /// Return a set with `edge` added
    #[inline]
    pub const fn with(self, edge: FrameEdge) -> Self {
        Self(self.0 | edge.bit())
    }

    #[inline]
    pub const fn contains(self, edge: FrameEdge) -> bool {
        (self.0 & edge.bit()) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate set edges in indicator emission order
    pub fn iter(self) -> impl Iterator<Item = FrameEdge> {
        FrameEdge::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}

/// One skeleton as delivered by the sensor for a single callback.
/// Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skeleton {
    pub joints: JointMap,
    /// Body-center point; valid even when individual joints are not
    pub position: Vec3,
    pub tracking: SkeletonTracking,
    pub clipped_edges: ClippedEdges,
}

/// A stamped skeleton: sensor data plus elapsed session time.
///
/// Built once per callback, never mutated, discarded after processing.
#[derive(Debug, Clone)]
pub struct Frame {
    pub skeleton: Skeleton,
    /// Elapsed time since the first tracked frame of the session
    pub elapsed: Duration,
}

impl Frame {
    pub fn new(skeleton: Skeleton, elapsed: Duration) -> Self {
        Self { skeleton, elapsed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipped_edges_set_semantics() {
        let edges = ClippedEdges::NONE
            .with(FrameEdge::Top)
            .with(FrameEdge::Left)
            .with(FrameEdge::Top); // idempotent

        assert!(edges.contains(FrameEdge::Top));
        assert!(edges.contains(FrameEdge::Left));
        assert!(!edges.contains(FrameEdge::Bottom));
        assert!(!edges.contains(FrameEdge::Right));
        assert!(!edges.is_empty());

        let listed: Vec<FrameEdge> = edges.iter().collect();
        assert_eq!(listed, vec![FrameEdge::Top, FrameEdge::Left]);
    }

    #[test]
    fn test_empty_set() {
        assert!(ClippedEdges::NONE.is_empty());
        assert_eq!(ClippedEdges::NONE.iter().count(), 0);
        assert_eq!(ClippedEdges::default(), ClippedEdges::NONE);
    }
}
