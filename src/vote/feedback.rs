//! Live status payload shown to voters each tick.

use serde::{Deserialize, Serialize};

use crate::vote::selection::Choice;

/// Status line category shown to the voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// No hand raised.
    Prompt,
    /// A hand is raised and counting towards a vote.
    Holding { choice: Choice, progress: u32 },
    /// A vote was just recorded and the hand is still up.
    Cooldown { choice: Choice },
    /// This tick recorded a vote.
    Voted { choice: Choice },
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => f.write_str("Raise a hand to vote"),
            Self::Holding { choice, progress } => {
                write!(f, "Holding {choice}... {}", ".".repeat(*progress as usize))
            }
            Self::Cooldown { choice } => write!(f, "Vote for {choice} counted, lower your hand"),
            Self::Voted { .. } => f.write_str("Vote recorded!"),
        }
    }
}

/// Per-tick payload for continuous status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// This tick's classification, used to highlight the active option.
    pub selection: Option<Choice>,
    /// Hold progress in steps; zero while cooling down.
    pub progress: u32,
    pub in_cooldown: bool,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_lines() {
        assert_eq!(Status::Prompt.to_string(), "Raise a hand to vote");
        assert_eq!(
            Status::Holding {
                choice: Choice::B,
                progress: 3
            }
            .to_string(),
            "Holding B... ..."
        );
        assert_eq!(
            Status::Cooldown { choice: Choice::A }.to_string(),
            "Vote for A counted, lower your hand"
        );
        assert_eq!(Status::Voted { choice: Choice::A }.to_string(), "Vote recorded!");
    }
}
