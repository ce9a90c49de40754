//! Joint identities and per-joint samples delivered by the sensor.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Identity of a tracked anatomical landmark.
///
/// Ordered to match the sensor's wire enumeration. This order is also the
/// persisted column order, so it must never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointId {
    HipCenter = 0,
    Spine = 1,
    ShoulderCenter = 2,
    Head = 3,

    // Left arm chain
    ShoulderLeft = 4,
    ElbowLeft = 5,
    WristLeft = 6,
    HandLeft = 7,

    // Right arm chain
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    HandRight = 11,

    // Left leg chain
    HipLeft = 12,
    KneeLeft = 13,
    AnkleLeft = 14,
    FootLeft = 15,

    // Right leg chain
    HipRight = 16,
    KneeRight = 17,
    AnkleRight = 18,
    FootRight = 19,
}

impl JointId {
    /// Total number of joints in the skeleton
    pub const COUNT: usize = 20;

    /// Convert to array index
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// All joint IDs in sensor enumeration order
    pub const ALL: [JointId; Self::COUNT] = [
        JointId::HipCenter,
        JointId::Spine,
        JointId::ShoulderCenter,
        JointId::Head,
        JointId::ShoulderLeft,
        JointId::ElbowLeft,
        JointId::WristLeft,
        JointId::HandLeft,
        JointId::ShoulderRight,
        JointId::ElbowRight,
        JointId::WristRight,
        JointId::HandRight,
        JointId::HipLeft,
        JointId::KneeLeft,
        JointId::AnkleLeft,
        JointId::FootLeft,
        JointId::HipRight,
        JointId::KneeRight,
        JointId::AnkleRight,
        JointId::FootRight,
    ];

    /// Stable label used for the persisted header and overlay text
    pub const fn label(self) -> &'static str {
        match self {
            JointId::HipCenter => "HipCenter",
            JointId::Spine => "Spine",
            JointId::ShoulderCenter => "ShoulderCenter",
            JointId::Head => "Head",
            JointId::ShoulderLeft => "ShoulderLeft",
            JointId::ElbowLeft => "ElbowLeft",
            JointId::WristLeft => "WristLeft",
            JointId::HandLeft => "HandLeft",
            JointId::ShoulderRight => "ShoulderRight",
            JointId::ElbowRight => "ElbowRight",
            JointId::WristRight => "WristRight",
            JointId::HandRight => "HandRight",
            JointId::HipLeft => "HipLeft",
            JointId::KneeLeft => "KneeLeft",
            JointId::AnkleLeft => "AnkleLeft",
            JointId::FootLeft => "FootLeft",
            JointId::HipRight => "HipRight",
            JointId::KneeRight => "KneeRight",
            JointId::AnkleRight => "AnkleRight",
            JointId::FootRight => "FootRight",
        }
    }
}

/// Per-joint confidence classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointTracking {
    /// High confidence position
    Tracked,
    /// Estimated position
    Inferred,
    /// No usable position this frame
    NotTracked,
}

/// One joint's sample within a frame: position in sensor metric units plus
/// the trust level. Identity is implied by the slot in [`JointMap`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JointSample {
    pub position: Vec3,
    pub tracking: JointTracking,
}

impl JointSample {
    pub const fn new(position: Vec3, tracking: JointTracking) -> Self {
        Self { position, tracking }
    }

    /// Sample for a joint the sensor lost this frame. The position sentinel
    /// stays at the origin; only the trust level distinguishes it.
    pub const fn not_tracked() -> Self {
        Self {
            position: Vec3::ZERO,
            tracking: JointTracking::NotTracked,
        }
    }
}

/// Fixed-size map from [`JointId`] to sample.
///
/// One slot per identity, so a frame covers exactly the fixed joint set with
/// no duplicates by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JointMap([JointSample; JointId::COUNT]);

impl JointMap {
    pub const fn new(samples: [JointSample; JointId::COUNT]) -> Self {
        Self(samples)
    }

    /// Map with every joint marked not tracked
    pub const fn all_not_tracked() -> Self {
        Self([JointSample::not_tracked(); JointId::COUNT])
    }

    /// Build a map by sampling each joint identity in order
    pub fn from_fn(mut f: impl FnMut(JointId) -> JointSample) -> Self {
        Self(std::array::from_fn(|i| f(JointId::ALL[i])))
    }

    pub fn set(&mut self, id: JointId, sample: JointSample) {
        self.0[id.index()] = sample;
    }

    /// Iterate samples in sensor enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, &JointSample)> {
        JointId::ALL.iter().copied().zip(self.0.iter())
    }
}

impl std::ops::Index<JointId> for JointMap {
    type Output = JointSample;

    #[inline]
    fn index(&self, id: JointId) -> &JointSample {
        &self.0[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_index_once() {
        let mut seen = [false; JointId::COUNT];
        for id in JointId::ALL {
            assert!(!seen[id.index()], "duplicate joint index {}", id.index());
            seen[id.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_labels_are_unique() {
        for (i, a) in JointId::ALL.iter().enumerate() {
            for b in &JointId::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn test_map_indexing_follows_identity() {
        let mut map = JointMap::all_not_tracked();
        let sample = JointSample::new(Vec3::new(1.0, 2.0, 3.0), JointTracking::Tracked);
        map.set(JointId::ElbowLeft, sample);

        assert_eq!(map[JointId::ElbowLeft].tracking, JointTracking::Tracked);
        assert_eq!(map[JointId::ElbowRight].tracking, JointTracking::NotTracked);

        let collected: Vec<JointId> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(collected, JointId::ALL.to_vec());
    }
}
