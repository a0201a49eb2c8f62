//! Frame scheduling for the tick loop.

use std::time::{Duration, Instant};

/// Decides when the next tick runs.
///
/// The pipeline calls [`request_next_tick`](Scheduler::request_next_tick)
/// only after the previous tick has fully finished, so ticks never overlap.
pub trait Scheduler {
    /// Wait until the next tick is due. Returns `false` when the host is
    /// shutting down and no further ticks should run.
    fn request_next_tick(&mut self) -> bool;
}

/// Paces ticks at a fixed frame rate and never stops on its own.
#[derive(Debug, Clone)]
pub struct FrameRateScheduler {
    frame_time: Duration,
    last_tick: Option<Instant>,
}

impl FrameRateScheduler {
    pub fn new(frame_rate: f32) -> Self {
        let frame_time = if frame_rate.is_finite() && frame_rate > 0.0 {
            Duration::from_secs_f32(1.0 / frame_rate)
        } else {
            Duration::ZERO
        };
        Self {
            frame_time,
            last_tick: None,
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

impl Default for FrameRateScheduler {
    fn default() -> Self {
        Self::new(30.0)
    }
}

impl Scheduler for FrameRateScheduler {
    fn request_next_tick(&mut self) -> bool {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
        true
    }
}

/// Allows a fixed number of ticks, then stops. Useful for replaying
/// recorded sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks {
    remaining: u64,
}

impl FixedTicks {
    pub fn new(ticks: u64) -> Self {
        Self { remaining: ticks }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Scheduler for FixedTicks {
    fn request_next_tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}
