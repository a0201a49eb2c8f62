//! VotePipeline for combining pose estimation with vote tracking.

use tracing::warn;

use crate::vote::{ConfigError, FailurePolicy, Tally, TickOutcome, VoteConfig, VoteTracker};

use super::{PoseSource, Presenter, Scheduler};

/// A single-threaded tick loop bundling a `PoseSource`, the `VoteTracker`
/// and a `Presenter`.
///
/// No error escapes a tick: estimation and presentation failures are logged
/// and the loop carries on.
pub struct VotePipeline<S: PoseSource, P: Presenter> {
    source: S,
    presenter: P,
    tracker: VoteTracker,
    on_estimate_error: FailurePolicy,
}

impl<S: PoseSource, P: Presenter> VotePipeline<S, P> {
    /// Create a new vote pipeline with the given source, presenter and config.
    ///
    /// Fails if the config does not pass [`VoteConfig::validate`].
    pub fn new(source: S, presenter: P, config: VoteConfig) -> Result<Self, ConfigError> {
        let on_estimate_error = config.on_estimate_error;
        Ok(Self {
            source,
            presenter,
            tracker: VoteTracker::new(config)?,
            on_estimate_error,
        })
    }

    /// Create a new vote pipeline with default configuration.
    pub fn with_default_config(source: S, presenter: P) -> Self {
        Self {
            source,
            presenter,
            tracker: VoteTracker::default(),
            on_estimate_error: FailurePolicy::default(),
        }
    }

    /// Process a single tick.
    ///
    /// # Returns
    /// The tick's outcome, or `None` if estimation failed and the pipeline is
    /// configured to skip such ticks.
    pub fn process_tick(&mut self) -> Option<TickOutcome> {
        let poses = match self.source.estimate() {
            Ok(poses) => poses,
            Err(err) => {
                warn!(error = %err, "pose estimation failed");
                match self.on_estimate_error {
                    FailurePolicy::SkipTick => return None,
                    FailurePolicy::TreatAsAbsent => Vec::new(),
                }
            }
        };

        let outcome = self.tracker.update(poses.first());

        if let Err(err) = self.presenter.show_feedback(&outcome.feedback) {
            warn!(error = %err, tick = outcome.tick, "failed to present feedback");
        }
        if let Some(commit) = &outcome.commit {
            if let Err(err) = self.presenter.show_commit(commit, self.tracker.tally()) {
                warn!(error = %err, tick = outcome.tick, "failed to present vote");
            }
        }

        Some(outcome)
    }

    /// Run ticks back to back until the scheduler stops.
    ///
    /// The first tick runs immediately; each following tick is requested only
    /// once the previous one has finished.
    pub fn run<T: Scheduler>(&mut self, scheduler: &mut T) {
        loop {
            self.process_tick();
            if !scheduler.request_next_tick() {
                break;
            }
        }
    }

    /// Current vote counts.
    pub fn tally(&self) -> &Tally {
        self.tracker.tally()
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &VoteTracker {
        &self.tracker
    }

    /// Get a reference to the pose source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the pose source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get a mutable reference to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
