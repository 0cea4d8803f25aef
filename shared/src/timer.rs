pub const SESSION_DURATION_MS: u32 = 60_000;
pub const COUNTDOWN_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Countdown,
    Active,
    Finished,
}

/// What a single `advance` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// Timer not running; nothing happened.
    Idle,
    /// Tick consumed by the countdown.
    Countdown,
    /// Session time elapsed. `finished` is true on the one tick that ran it out.
    Active { finished: bool },
}

/// Countdown followed by the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionTimer {
    countdown_remaining_ms: u32,
    time_remaining_ms: u32,
    running: bool,
}

impl SessionTimer {
    pub fn started() -> Self {
        let mut timer = Self::default();
        timer.start();
        timer
    }

    pub fn start(&mut self) {
        self.countdown_remaining_ms = COUNTDOWN_DURATION_MS;
        self.time_remaining_ms = SESSION_DURATION_MS;
        self.running = true;
    }

    pub fn advance(&mut self, delta_ms: u32) -> TimerTick {
        if !self.running {
            return TimerTick::Idle;
        }
        if self.countdown_remaining_ms > 0 {
            self.countdown_remaining_ms = self.countdown_remaining_ms.saturating_sub(delta_ms);
            return TimerTick::Countdown;
        }
        self.time_remaining_ms = self.time_remaining_ms.saturating_sub(delta_ms);
        if self.time_remaining_ms == 0 {
            self.running = false;
            return TimerTick::Active { finished: true };
        }
        TimerTick::Active { finished: false }
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.running {
            SessionPhase::Finished
        } else if self.countdown_remaining_ms > 0 {
            SessionPhase::Countdown
        } else {
            SessionPhase::Active
        }
    }

    pub fn is_in_countdown(&self) -> bool {
        self.running && self.countdown_remaining_ms > 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn countdown_remaining_ms(&self) -> u32 {
        self.countdown_remaining_ms
    }

    pub fn time_remaining_ms(&self) -> u32 {
        self.time_remaining_ms
    }

    /// Countdown as shown on screen, rounded to the nearest second.
    pub fn countdown_display_seconds(&self) -> u32 {
        (self.countdown_remaining_ms + 500) / 1000
    }
}
