//! Per-frame gesture classification.

use serde::{Deserialize, Serialize};

use crate::vote::landmark::PoseObservation;
use crate::vote::selection::Choice;

const LEFT_WRIST: &str = "left_wrist";
const LEFT_SHOULDER: &str = "left_shoulder";
const RIGHT_WRIST: &str = "right_wrist";
const RIGHT_SHOULDER: &str = "right_shoulder";

/// Configuration for the [`GestureClassifier`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Landmarks at or below this confidence are ignored.
    pub min_score: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { min_score: 0.3 }
    }
}

/// Maps a single frame's pose to a selection, with no memory of earlier frames.
///
/// A left wrist above the left shoulder selects [`Choice::A`]; otherwise a
/// right wrist above the right shoulder selects [`Choice::B`]. A is checked
/// first and wins when both hands are up.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    config: ClassifierConfig,
}

impl GestureClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one observation. `None` (no subject detected) never selects.
    pub fn classify(&self, observation: Option<&PoseObservation>) -> Option<Choice> {
        let pose = observation?;

        if self.hand_raised(pose, LEFT_WRIST, LEFT_SHOULDER) {
            Some(Choice::A)
        } else if self.hand_raised(pose, RIGHT_WRIST, RIGHT_SHOULDER) {
            Some(Choice::B)
        } else {
            None
        }
    }

    fn hand_raised(&self, pose: &PoseObservation, wrist: &str, shoulder: &str) -> bool {
        let min_score = self.config.min_score;
        match (pose.find(wrist), pose.find(shoulder)) {
            (Some(wrist), Some(shoulder)) => {
                wrist.is_confident(min_score)
                    && shoulder.is_confident(min_score)
                    // NaN coordinates compare false
                    && wrist.y < shoulder.y
            }
            _ => false,
        }
    }
}
