//! Hand-raise voting on top of a pose-estimation stream.
//!
//! Each frame a [`PoseSource`] reports the landmarks of one subject. The
//! [`GestureClassifier`] reads a raised left hand as a vote for A and a raised
//! right hand as a vote for B, and the [`HoldStateMachine`] only commits a
//! vote once the same gesture has been held long enough, then cools down.

pub mod integration;
pub mod vote;

pub use integration::{
    BuildError, FixedTicks, FnSource, FrameRateScheduler, IntoObservations, NullPresenter,
    PoseBuilder, PoseSource, Presenter, Scheduler, VotePipeline,
};
pub use vote::{
    Choice, ClassifierConfig, CommitEvent, ConfigError, FailurePolicy, Feedback,
    GestureClassifier, HoldConfig, HoldStateMachine, Landmark, Phase, PoseObservation,
    SelectionState, Status, Tally, TickOutcome, Transition, VoteConfig, VoteTracker, transition,
};
