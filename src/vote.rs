mod classifier;
mod feedback;
mod hold;
mod landmark;
mod selection;
mod tally;
mod tracker;

pub use classifier::{ClassifierConfig, GestureClassifier};
pub use feedback::{Feedback, Status};
pub use hold::{HoldConfig, HoldStateMachine, Phase, SelectionState, Transition, transition};
pub use landmark::{Landmark, PoseObservation};
pub use selection::Choice;
pub use tally::Tally;
pub use tracker::{CommitEvent, ConfigError, FailurePolicy, TickOutcome, VoteConfig, VoteTracker};
