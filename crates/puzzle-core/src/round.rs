use crate::constants::{LOSS_MESSAGE, ROUND_DURATION_SECS, WIN_MESSAGE, WIN_SNAP_TALLY};

/// Parameters for one timed round.
#[derive(Clone, Copy, Debug)]
pub struct RoundParams {
    pub duration_secs: f32,
}

impl Default for RoundParams {
    fn default() -> Self {
        Self {
            duration_secs: ROUND_DURATION_SECS,
        }
    }
}

/// Countdown and win/lose bookkeeping for one round.
///
/// The snap tally is incremented externally by the scene wiring; the win
/// check compares it for equality with [`WIN_SNAP_TALLY`], so a tally that
/// jumps past the threshold between ticks never wins.
pub struct RoundTimer {
    remaining_secs: f32,
    running: bool,
    snap_tally: u32,
    timer_text: String,
    result_text: String,
}

impl RoundTimer {
    pub fn new(params: RoundParams) -> Self {
        Self {
            remaining_secs: params.duration_secs,
            running: true,
            snap_tally: 0,
            timer_text: format_clock(params.duration_secs),
            result_text: String::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn remaining_secs(&self) -> f32 {
        self.remaining_secs
    }

    pub fn snap_tally(&self) -> u32 {
        self.snap_tally
    }

    pub fn timer_text(&self) -> &str {
        &self.timer_text
    }

    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    /// External entry point for the snap-success wiring. Unbounded.
    pub fn increment_snap_tally(&mut self) {
        self.snap_tally += 1;
    }

    /// Advance the countdown by `dt` seconds.
    ///
    /// No-op once the round has ended. While time remains, the tick
    /// subtracts `dt` and refreshes the display before checking the win
    /// tally. The tick that drives the countdown to zero declares the loss
    /// itself, after the display has been refreshed to `00:00`; a win on
    /// that same tick takes precedence.
    pub fn tick(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        if self.remaining_secs > 0.0 {
            self.remaining_secs -= dt;
            self.timer_text = format_clock(self.remaining_secs.max(0.0));
            if self.snap_tally == WIN_SNAP_TALLY {
                self.declare_win();
            }
        }
        if self.running && self.remaining_secs <= 0.0 {
            self.remaining_secs = 0.0;
            self.running = false;
            self.declare_loss();
        }
    }

    fn declare_win(&mut self) {
        self.running = false;
        self.result_text = WIN_MESSAGE.to_string();
        log::info!("{WIN_MESSAGE}");
    }

    fn declare_loss(&mut self) {
        self.result_text = LOSS_MESSAGE.to_string();
        log::info!("{LOSS_MESSAGE}");
    }
}

/// Format a non-negative number of seconds as zero-padded `MM:SS`.
#[inline]
pub fn format_clock(seconds: f32) -> String {
    let clamped = seconds.max(0.0);
    let minutes = (clamped / 60.0).floor() as u32;
    let secs = (clamped % 60.0).floor() as u32;
    format!("{minutes:02}:{secs:02}")
}
