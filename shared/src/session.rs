use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::angles::Angles;
use crate::camera::CameraOrientation;
use crate::config::SessionConfig;
use crate::gridshot::{ClickOutcome, GridshotMode};
use crate::projection::{Projection, ScreenPos, Viewport};
use crate::timer::{SessionPhase, SessionTimer, TimerTick};
use crate::tracking::TrackingMode;

/// Per-frame delta ceiling. Larger steps let the pursuit target tunnel
/// through a bound.
pub const MAX_FRAME_DELTA_MS: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Gridshot,
    Tracking,
}

impl ModeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ModeKind::Gridshot => "gridshot",
            ModeKind::Tracking => "tracking",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Score {
    /// Targets hit
    Hits(u32),
    /// Seconds on target
    Seconds(f64),
}

impl Score {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Score::Hits(n) => n as f64,
            Score::Seconds(s) => s,
        }
    }
}

/// Emitted once, when a session's clock runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionResult {
    pub kind: ModeKind,
    pub score: Score,
}

/// Everything the HUD shows, as plain data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub kind: ModeKind,
    pub score: Score,
    /// Consecutive hits (gridshot) or continuous seconds on target (tracking)
    pub streak: f64,
    /// Tracking only
    pub best_streak: Option<f64>,
    pub time_remaining_ms: u32,
    pub countdown_remaining_ms: u32,
    pub countdown_display_seconds: u32,
    pub challenge_mode: bool,
}

/// The active training mode.
#[derive(Debug, Clone)]
pub enum Mode {
    Gridshot(GridshotMode),
    Tracking(TrackingMode),
}

impl Mode {
    pub fn start(
        kind: ModeKind,
        config: &SessionConfig,
        projection: Projection,
        rng: &mut impl Rng,
    ) -> Self {
        match kind {
            ModeKind::Gridshot => Mode::Gridshot(GridshotMode::new(config, rng)),
            ModeKind::Tracking => Mode::Tracking(TrackingMode::new(config, projection, rng)),
        }
    }

    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Gridshot(_) => ModeKind::Gridshot,
            Mode::Tracking(_) => ModeKind::Tracking,
        }
    }

    pub fn timer(&self) -> &SessionTimer {
        match self {
            Mode::Gridshot(m) => m.timer(),
            Mode::Tracking(m) => m.timer(),
        }
    }

    pub fn is_in_countdown(&self) -> bool {
        self.timer().is_in_countdown()
    }

    pub fn is_running(&self) -> bool {
        self.timer().is_running()
    }

    /// Past the countdown and not yet finished.
    pub fn is_active(&self) -> bool {
        self.timer().phase() == SessionPhase::Active
    }

    pub fn current_score(&self) -> Score {
        match self {
            Mode::Gridshot(m) => Score::Hits(m.score()),
            Mode::Tracking(m) => Score::Seconds(m.score()),
        }
    }

    pub fn challenge_mode(&self) -> bool {
        match self {
            Mode::Gridshot(m) => m.challenge_mode(),
            Mode::Tracking(m) => m.challenge_mode(),
        }
    }

    pub fn toggle_challenge_mode(&mut self) {
        match self {
            Mode::Gridshot(m) => m.toggle_challenge_mode(),
            Mode::Tracking(m) => m.toggle_challenge_mode(),
        }
    }

    pub fn update(&mut self, delta_ms: u32, camera: Angles) -> TimerTick {
        match self {
            Mode::Gridshot(m) => m.update(delta_ms),
            Mode::Tracking(m) => m.update(delta_ms, camera),
        }
    }

    /// `None` for modes without discrete targets.
    pub fn handle_click(&mut self, camera: Angles, rng: &mut impl Rng) -> Option<ClickOutcome> {
        match self {
            Mode::Gridshot(m) => Some(m.handle_click(camera, rng)),
            Mode::Tracking(_) => None,
        }
    }

    /// Angular positions of every live target.
    pub fn target_angles(&self) -> Vec<Angles> {
        match self {
            Mode::Gridshot(m) => m.active_targets().map(|slot| slot.angles()).collect(),
            Mode::Tracking(m) => vec![m.target().angles()],
        }
    }

    pub fn visible_targets(&self, camera: Angles, projection: &Projection) -> Vec<ScreenPos> {
        self.target_angles()
            .into_iter()
            .filter_map(|target| projection.project(camera, target))
            .collect()
    }

    pub fn hud(&self) -> HudSnapshot {
        let timer = self.timer();
        let (streak, best_streak) = match self {
            Mode::Gridshot(m) => (m.streak() as f64, None),
            Mode::Tracking(m) => (m.streak(), Some(m.best_streak())),
        };
        HudSnapshot {
            kind: self.kind(),
            score: self.current_score(),
            streak,
            best_streak,
            time_remaining_ms: timer.time_remaining_ms(),
            countdown_remaining_ms: timer.countdown_remaining_ms(),
            countdown_display_seconds: timer.countdown_display_seconds(),
            challenge_mode: self.challenge_mode(),
        }
    }
}

/// One run of a mode: camera, mode state and the seeded random source.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    projection: Projection,
    camera: CameraOrientation,
    mode: Mode,
    rng: ChaCha8Rng,
}

impl Session {
    pub fn start(kind: ModeKind, config: SessionConfig, viewport: Viewport, seed: u64) -> Self {
        let config = config.sanitized();
        let projection = Projection::new(config.field_of_view_deg, viewport);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mode = Mode::start(kind, &config, projection, &mut rng);
        tracing::info!(
            mode = kind.name(),
            seed,
            fov = config.field_of_view_deg,
            sensitivity = config.sensitivity,
            "session started"
        );
        Self {
            config,
            projection,
            camera: CameraOrientation::default(),
            mode,
            rng,
        }
    }

    /// Feed raw pointer motion. Ignored while counting down or once finished.
    pub fn apply_motion(&mut self, raw_dx: f64, raw_dy: f64) -> bool {
        if !self.mode.is_running() || self.mode.is_in_countdown() {
            return false;
        }
        self.camera.integrate(raw_dx, raw_dy, self.config.sensitivity);
        true
    }

    /// Fire at the current aim. Ignored while counting down.
    pub fn click(&mut self) -> Option<ClickOutcome> {
        if self.mode.is_in_countdown() {
            return None;
        }
        self.mode.handle_click(self.camera.angles(), &mut self.rng)
    }

    /// Advance by one frame. Returns the result on the frame the session ends.
    pub fn advance(&mut self, delta_ms: u32) -> Option<SessionResult> {
        if !self.mode.is_running() {
            return None;
        }
        let delta_ms = delta_ms.min(MAX_FRAME_DELTA_MS);
        match self.mode.update(delta_ms, self.camera.angles()) {
            TimerTick::Active { finished: true } => {
                let result = SessionResult {
                    kind: self.mode.kind(),
                    score: self.mode.current_score(),
                };
                tracing::info!(
                    mode = result.kind.name(),
                    score = result.score.as_f64(),
                    "session finished"
                );
                Some(result)
            }
            _ => None,
        }
    }

    pub fn visible_targets(&self) -> Vec<ScreenPos> {
        self.mode
            .visible_targets(self.camera.angles(), &self.projection)
    }

    pub fn hud(&self) -> HudSnapshot {
        self.mode.hud()
    }

    pub fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    pub fn camera(&self) -> &CameraOrientation {
        &self.camera
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }
}
