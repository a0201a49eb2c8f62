//! Trait for whatever renders votes to the audience.

use crate::vote::{CommitEvent, Feedback, Tally};

/// Receives per-tick feedback and committed votes.
///
/// Failures are logged by the pipeline and otherwise ignored; they never
/// affect the vote state, which is updated before the presenter is called.
pub trait Presenter {
    /// Error type for rendering failures.
    type Error: std::error::Error;

    /// Update the live status display. Called once per tick.
    fn show_feedback(&mut self, feedback: &Feedback) -> Result<(), Self::Error>;

    /// Update the tally chart after a vote. Called on the same tick, after
    /// [`show_feedback`](Presenter::show_feedback).
    fn show_commit(&mut self, commit: &CommitEvent, tally: &Tally) -> Result<(), Self::Error>;
}

/// Presenter that discards everything, for headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    type Error = std::convert::Infallible;

    fn show_feedback(&mut self, _feedback: &Feedback) -> Result<(), Self::Error> {
        Ok(())
    }

    fn show_commit(&mut self, _commit: &CommitEvent, _tally: &Tally) -> Result<(), Self::Error> {
        Ok(())
    }
}
