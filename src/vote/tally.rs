//! Running vote counts for both options.

use serde::Serialize;

use crate::vote::selection::Choice;

/// Running vote counts. Counters only ever go up, one commit at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    count_a: u64,
    count_b: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one vote and return the new total for `choice`.
    pub fn apply_commit(&mut self, choice: Choice) -> u64 {
        let counter = match choice {
            Choice::A => &mut self.count_a,
            Choice::B => &mut self.count_b,
        };
        *counter = counter.saturating_add(1);
        *counter
    }

    pub fn count(&self, choice: Choice) -> u64 {
        match choice {
            Choice::A => self.count_a,
            Choice::B => self.count_b,
        }
    }

    pub fn count_a(&self) -> u64 {
        self.count_a
    }

    pub fn count_b(&self) -> u64 {
        self.count_b
    }

    pub fn total(&self) -> u64 {
        self.count_a.saturating_add(self.count_b)
    }
}
