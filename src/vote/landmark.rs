//! Pose landmarks as reported by the pose-estimation model.

use serde::{Deserialize, Serialize};

/// A named anatomical point in image coordinates.
///
/// Smaller `y` is higher up in the image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Keypoint name, e.g. `"left_wrist"`
    pub name: String,
    /// Horizontal image coordinate
    pub x: f32,
    /// Vertical image coordinate
    pub y: f32,
    /// Model confidence in [0, 1]
    pub score: f32,
}

impl Landmark {
    pub fn new(name: impl Into<String>, x: f32, y: f32, score: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            score,
        }
    }

    /// Whether the model is more than `min_score` confident about this point.
    ///
    /// NaN scores are never confident.
    #[inline]
    pub fn is_confident(&self, min_score: f32) -> bool {
        self.score > min_score
    }
}

/// The landmarks of a single subject for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseObservation {
    landmarks: Vec<Landmark>,
}

impl PoseObservation {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// First landmark with the given name, in model order.
    pub fn find(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.iter().find(|l| l.name == name)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }
}

impl FromIterator<Landmark> for PoseObservation {
    fn from_iter<I: IntoIterator<Item = Landmark>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
