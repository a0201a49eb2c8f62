//! Hold-to-confirm state machine.
//!
//! A selection has to be classified on consecutive ticks before it counts as a
//! vote. Any tick that reads differently (another choice, or nothing) resets
//! the hold. After a vote the counter drops to a negative cooldown value while
//! the selection is kept, so holding the same hand has to work its way back up
//! through zero before it can vote again, whereas switching hands starts a
//! fresh hold immediately.

use serde::{Deserialize, Serialize};

use crate::vote::feedback::{Feedback, Status};
use crate::vote::selection::Choice;

/// Timing of the hold state machine, in ticks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldConfig {
    /// Consecutive matching ticks (after the first sighting) needed to commit.
    pub hold_ticks: u32,
    /// Ticks of continued holding after a commit before a new hold can count.
    pub cooldown_ticks: u32,
    /// Counter ticks per unit of displayed progress.
    pub progress_step: u32,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            hold_ticks: 21,
            cooldown_ticks: 30,
            progress_step: 5,
        }
    }
}

/// Conceptual phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected.
    Idle,
    /// Counting up towards a commit.
    Holding(Choice),
    /// Counter is negative after a commit.
    Cooldown(Choice),
}

/// The mutable core state: what is being held and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub current: Option<Choice>,
    pub hold_counter: i64,
}

impl SelectionState {
    pub fn in_cooldown(&self) -> bool {
        self.hold_counter < 0
    }

    /// Display progress: whole `step`s held so far, zero during cooldown.
    pub fn progress(&self, step: u32) -> u32 {
        if self.hold_counter < 0 {
            return 0;
        }
        self.hold_counter
            .checked_div(i64::from(step))
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(0)
    }

    pub fn phase(&self) -> Phase {
        match self.current {
            None => Phase::Idle,
            Some(choice) if self.in_cooldown() => Phase::Cooldown(choice),
            Some(choice) => Phase::Holding(choice),
        }
    }
}

/// Result of feeding one tick's selection to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    /// Set on the tick a vote is confirmed.
    pub commit: Option<Choice>,
    pub feedback: Feedback,
}

/// Pure transition function over (state, selection).
pub fn transition(
    state: SelectionState,
    selection: Option<Choice>,
    config: &HoldConfig,
) -> Transition {
    match selection {
        Some(choice) if state.current == Some(choice) => {
            let hold_counter = state.hold_counter + 1;

            if hold_counter >= i64::from(config.hold_ticks) {
                let next = SelectionState {
                    current: Some(choice),
                    hold_counter: -i64::from(config.cooldown_ticks),
                };
                return Transition {
                    state: next,
                    commit: Some(choice),
                    feedback: Feedback {
                        selection,
                        progress: 0,
                        in_cooldown: next.in_cooldown(),
                        status: Status::Voted { choice },
                    },
                };
            }

            let next = SelectionState {
                current: Some(choice),
                hold_counter,
            };
            let progress = next.progress(config.progress_step);
            let status = if next.in_cooldown() {
                Status::Cooldown { choice }
            } else {
                Status::Holding { choice, progress }
            };
            Transition {
                state: next,
                commit: None,
                feedback: Feedback {
                    selection,
                    progress,
                    in_cooldown: next.in_cooldown(),
                    status,
                },
            }
        }
        _ => {
            let next = SelectionState {
                current: selection,
                hold_counter: 0,
            };
            let status = match selection {
                Some(choice) => Status::Holding {
                    choice,
                    progress: 0,
                },
                None => Status::Prompt,
            };
            Transition {
                state: next,
                commit: None,
                feedback: Feedback {
                    selection,
                    progress: 0,
                    in_cooldown: false,
                    status,
                },
            }
        }
    }
}

/// Owns the [`SelectionState`] and applies [`transition`] once per tick.
#[derive(Debug, Clone, Default)]
pub struct HoldStateMachine {
    state: SelectionState,
    config: HoldConfig,
}

impl HoldStateMachine {
    pub fn new(config: HoldConfig) -> Self {
        Self {
            state: SelectionState::default(),
            config,
        }
    }

    pub fn step(&mut self, selection: Option<Choice>) -> Transition {
        let result = transition(self.state, selection, &self.config);
        self.state = result.state;
        result
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn config(&self) -> &HoldConfig {
        &self.config
    }
}
