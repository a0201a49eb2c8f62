//! Builder for creating PoseObservation objects from various input formats.

use ndarray::ArrayView2;

use crate::vote::{Landmark, PoseObservation};

/// Keypoint names of the 17-point COCO layout, in model output order.
pub const COCO_KEYPOINTS: [&str; 17] = [
    "nose",
    "left_eye",
    "right_eye",
    "left_ear",
    "right_ear",
    "left_shoulder",
    "right_shoulder",
    "left_elbow",
    "right_elbow",
    "left_wrist",
    "right_wrist",
    "left_hip",
    "right_hip",
    "left_knee",
    "right_knee",
    "left_ankle",
    "right_ankle",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid keypoint tensor shape: expected {expected:?}, got {got:?}")]
    InvalidShape {
        expected: (usize, usize),
        got: (usize, usize),
    },
}

/// Builder for creating `PoseObservation` objects.
#[derive(Debug, Clone, Default)]
pub struct PoseBuilder {
    landmarks: Vec<Landmark>,
}

impl PoseBuilder {
    /// Create a new pose builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named landmark.
    pub fn landmark(mut self, name: &str, x: f32, y: f32, score: f32) -> Self {
        self.landmarks.push(Landmark::new(name, x, y, score));
        self
    }

    /// Build the final `PoseObservation`.
    pub fn build(self) -> PoseObservation {
        PoseObservation::new(self.landmarks)
    }

    /// Decode a single-pose keypoint tensor of shape `[17, 3]`.
    ///
    /// Rows follow [`COCO_KEYPOINTS`] and hold `[y, x, score]`, the layout
    /// emitted by MoveNet once the batch and person axes are squeezed out.
    pub fn from_keypoints(keypoints: ArrayView2<f32>) -> Result<PoseObservation, BuildError> {
        let expected = (COCO_KEYPOINTS.len(), 3);
        if keypoints.dim() != expected {
            return Err(BuildError::InvalidShape {
                expected,
                got: keypoints.dim(),
            });
        }

        Ok(COCO_KEYPOINTS
            .iter()
            .zip(keypoints.rows())
            .map(|(name, row)| Landmark::new(*name, row[1], row[0], row[2]))
            .collect())
    }
}
