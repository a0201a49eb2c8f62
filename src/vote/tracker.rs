//! Per-tick vote tracking: classification, hold state and tally in one owner.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::vote::classifier::{ClassifierConfig, GestureClassifier};
use crate::vote::feedback::Feedback;
use crate::vote::hold::{HoldConfig, HoldStateMachine, SelectionState};
use crate::vote::landmark::PoseObservation;
use crate::vote::selection::Choice;
use crate::vote::tally::Tally;

/// What to do with a tick whose pose estimation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Classify the tick as if no subject was seen, which breaks any hold.
    #[default]
    TreatAsAbsent,
    /// Leave the state machine untouched for that tick.
    SkipTick,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_score must be a finite value in [0, 1], got {0}")]
    InvalidMinScore(f32),
    #[error("hold_ticks must be at least 1")]
    ZeroHoldTicks,
    #[error("progress_step must be at least 1")]
    ZeroProgressStep,
}

/// Configuration for the [`VoteTracker`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoteConfig {
    pub classifier: ClassifierConfig,
    pub hold: HoldConfig,
    pub on_estimate_error: FailurePolicy,
}

impl VoteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_score = self.classifier.min_score;
        if !(0.0..=1.0).contains(&min_score) {
            return Err(ConfigError::InvalidMinScore(min_score));
        }
        if self.hold.hold_ticks == 0 {
            return Err(ConfigError::ZeroHoldTicks);
        }
        if self.hold.progress_step == 0 {
            return Err(ConfigError::ZeroProgressStep);
        }
        Ok(())
    }
}

/// A confirmed vote, with the choice's total after counting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitEvent {
    pub choice: Choice,
    pub total: u64,
}

/// Everything that happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// 1-based index of the tick.
    pub tick: u64,
    pub selection: Option<Choice>,
    pub feedback: Feedback,
    pub commit: Option<CommitEvent>,
}

/// Single owner of all mutable voting state.
#[derive(Debug, Clone, Default)]
pub struct VoteTracker {
    classifier: GestureClassifier,
    machine: HoldStateMachine,
    tally: Tally,
    tick: u64,
}

impl VoteTracker {
    /// Create a tracker, rejecting a config that fails [`VoteConfig::validate`].
    pub fn new(config: VoteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config.classifier),
            machine: HoldStateMachine::new(config.hold),
            tally: Tally::new(),
            tick: 0,
        })
    }

    /// Process one frame. `None` means no subject was detected.
    pub fn update(&mut self, observation: Option<&PoseObservation>) -> TickOutcome {
        let selection = self.classifier.classify(observation);
        self.apply(selection)
    }

    /// Feed an already classified selection, bypassing the classifier.
    pub fn apply(&mut self, selection: Option<Choice>) -> TickOutcome {
        self.tick += 1;

        let previous = self.machine.state().current;
        let transition = self.machine.step(selection);
        if previous != selection {
            debug!(tick = self.tick, ?previous, ?selection, "selection changed");
        }
        trace!(
            tick = self.tick,
            hold_counter = transition.state.hold_counter,
            "tick processed"
        );

        let commit = transition.commit.map(|choice| {
            let total = self.tally.apply_commit(choice);
            info!(tick = self.tick, %choice, total, "vote committed");
            CommitEvent { choice, total }
        });

        TickOutcome {
            tick: self.tick,
            selection,
            feedback: transition.feedback,
            commit,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn state(&self) -> SelectionState {
        self.machine.state()
    }

    pub fn ticks(&self) -> u64 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(VoteConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = VoteConfig::default();
        config.classifier.min_score = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMinScore(_))
        ));

        let mut config = VoteConfig::default();
        config.hold.hold_ticks = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroHoldTicks));

        let mut config = VoteConfig::default();
        config.hold.progress_step = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroProgressStep));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = VoteConfig::default();
        config.classifier.min_score = f32::NAN;
        assert!(matches!(
            VoteTracker::new(config),
            Err(ConfigError::InvalidMinScore(_))
        ));

        let mut config = VoteConfig::default();
        config.classifier.min_score = 1.5;
        assert!(VoteTracker::new(config).is_err());

        let mut config = VoteConfig::default();
        config.hold.hold_ticks = 0;
        assert_eq!(
            VoteTracker::new(config).map(|t| t.ticks()),
            Err(ConfigError::ZeroHoldTicks)
        );
    }

    #[test]
    fn test_default_tracker_uses_default_config() {
        let tracker = VoteTracker::default();
        assert_eq!(tracker.classifier.config(), &ClassifierConfig::default());
        assert_eq!(tracker.machine.config(), &HoldConfig::default());
    }

    #[test]
    fn test_commit_updates_tally() {
        let mut tracker = VoteTracker::new(VoteConfig {
            hold: HoldConfig {
                hold_ticks: 2,
                ..HoldConfig::default()
            },
            ..VoteConfig::default()
        })
        .unwrap();

        assert_eq!(tracker.apply(Some(Choice::B)).commit, None);
        assert_eq!(tracker.apply(Some(Choice::B)).commit, None);
        let outcome = tracker.apply(Some(Choice::B));

        assert_eq!(
            outcome.commit,
            Some(CommitEvent {
                choice: Choice::B,
                total: 1
            })
        );
        assert_eq!(outcome.tick, 3);
        assert_eq!(tracker.tally().count_b(), 1);
        assert_eq!(tracker.tally().count_a(), 0);
    }
}
