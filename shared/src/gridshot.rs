use rand::seq::SliceRandom;
use rand::Rng;

use crate::angles::{angular_offset, Angles};
use crate::config::SessionConfig;
use crate::timer::{SessionPhase, SessionTimer, TimerTick};

pub const GRID_SIZE: usize = 3;
pub const SLOT_COUNT: usize = GRID_SIZE * GRID_SIZE;
/// Angular extent of the grid, corner to corner (degrees).
pub const GRID_SPAN_DEG: f64 = 30.0;
/// Angular half-size of a target's hit box (degrees).
pub const HIT_RADIUS_DEG: f64 = 2.0;
pub const INITIAL_TARGETS: usize = 5;
pub const CHALLENGE_INITIAL_TARGETS: usize = 2;

/// Fixed angular position of a grid cell. Row 0 is the top row.
pub fn grid_position(grid_index: usize) -> Angles {
    let row = (grid_index / GRID_SIZE) as f64;
    let col = (grid_index % GRID_SIZE) as f64;
    let step = GRID_SPAN_DEG / 2.0;
    Angles::new((col - 1.0) * step, (1.0 - row) * step)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSlot {
    pub grid_index: usize,
    pub yaw: f64,
    pub pitch: f64,
    pub active: bool,
}

impl TargetSlot {
    fn new(grid_index: usize) -> Self {
        let pos = grid_position(grid_index);
        Self {
            grid_index,
            yaw: pos.yaw,
            pitch: pos.pitch,
            active: false,
        }
    }

    pub fn angles(&self) -> Angles {
        Angles::new(self.yaw, self.pitch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit {
        grid_index: usize,
        /// Slot activated in its place, if any was free.
        respawned: Option<usize>,
    },
    Miss,
}

/// Discrete-target mode: a 3x3 grid with a fixed number of lit cells.
#[derive(Debug, Clone)]
pub struct GridshotMode {
    slots: [TargetSlot; SLOT_COUNT],
    timer: SessionTimer,
    score: u32,
    streak: u32,
    challenge_mode: bool,
}

impl Default for GridshotMode {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(TargetSlot::new),
            timer: SessionTimer::default(),
            score: 0,
            streak: 0,
            challenge_mode: false,
        }
    }
}

impl GridshotMode {
    pub fn new(config: &SessionConfig, rng: &mut impl Rng) -> Self {
        let mut mode = Self::default();
        mode.start(config, rng);
        mode
    }

    pub fn start(&mut self, config: &SessionConfig, rng: &mut impl Rng) {
        self.score = 0;
        self.streak = 0;
        self.challenge_mode = config.challenge_mode;
        self.timer.start();

        let mut order: Vec<usize> = (0..SLOT_COUNT).collect();
        order.shuffle(rng);

        self.slots = std::array::from_fn(TargetSlot::new);
        for &index in order.iter().take(self.initial_targets()) {
            self.slots[index].active = true;
        }

        tracing::info!(
            challenge = self.challenge_mode,
            active = self.active_count(),
            "gridshot session started"
        );
    }

    pub fn initial_targets(&self) -> usize {
        if self.challenge_mode {
            CHALLENGE_INITIAL_TARGETS
        } else {
            INITIAL_TARGETS
        }
    }

    pub fn update(&mut self, delta_ms: u32) -> TimerTick {
        let tick = self.timer.advance(delta_ms);
        if let TimerTick::Active { finished: true } = tick {
            tracing::info!(score = self.score, "gridshot session finished");
        }
        tick
    }

    /// Resolve a click aimed at `camera`. At most one target is hit; ties go
    /// to the lowest grid index.
    pub fn handle_click(&mut self, camera: Angles, rng: &mut impl Rng) -> ClickOutcome {
        if self.timer.phase() != SessionPhase::Active {
            return ClickOutcome::Miss;
        }

        let hit = self
            .slots
            .iter()
            .find(|slot| slot.active && angular_offset(camera, slot.angles()).within(HIT_RADIUS_DEG))
            .map(|slot| slot.grid_index);

        let Some(grid_index) = hit else {
            tracing::debug!(streak = self.streak, "gridshot miss");
            self.streak = 0;
            return ClickOutcome::Miss;
        };

        self.score += 1;
        self.streak += 1;
        self.slots[grid_index].active = false;

        let free: Vec<usize> = self
            .slots
            .iter()
            .filter(|slot| !slot.active && slot.grid_index != grid_index)
            .map(|slot| slot.grid_index)
            .collect();
        let respawned = free.choose(rng).copied();
        if let Some(index) = respawned {
            self.slots[index] = TargetSlot {
                active: true,
                ..TargetSlot::new(index)
            };
        }

        tracing::debug!(grid_index, ?respawned, score = self.score, "gridshot hit");
        ClickOutcome::Hit {
            grid_index,
            respawned,
        }
    }

    pub fn toggle_challenge_mode(&mut self) {
        self.challenge_mode = !self.challenge_mode;
    }

    pub fn slots(&self) -> &[TargetSlot; SLOT_COUNT] {
        &self.slots
    }

    pub fn active_targets(&self) -> impl Iterator<Item = &TargetSlot> {
        self.slots.iter().filter(|slot| slot.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_targets().count()
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn challenge_mode(&self) -> bool {
        self.challenge_mode
    }
}
