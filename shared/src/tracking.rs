use rand::Rng;

use crate::angles::{angular_offset, Angles};
use crate::config::SessionConfig;
use crate::projection::Projection;
use crate::timer::{SessionTimer, TimerTick};

/// Angular half-size of the on-target region (degrees).
pub const HIT_RADIUS_DEG: f64 = 3.0;
pub const YAW_SPEED_DEG_PER_SEC: f64 = 20.0;
pub const PITCH_SPEED_DEG_PER_SEC: f64 = 15.0;
/// The target bounces this far inside the frustum edge.
pub const BOUNDS_MARGIN_DEG: f64 = 5.0;
pub const CHALLENGE_SPEED_MULTIPLIER: f64 = 2.0;

/// The single moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PursuitTarget {
    pub yaw: f64,
    pub pitch: f64,
    /// Degrees per second
    pub yaw_velocity: f64,
    pub pitch_velocity: f64,
}

impl Default for PursuitTarget {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            yaw_velocity: YAW_SPEED_DEG_PER_SEC,
            pitch_velocity: PITCH_SPEED_DEG_PER_SEC,
        }
    }
}

impl PursuitTarget {
    /// Centered, with each axis heading in a random direction.
    pub fn launch(rng: &mut impl Rng) -> Self {
        let yaw_sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        let pitch_sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        Self {
            yaw_velocity: YAW_SPEED_DEG_PER_SEC * yaw_sign,
            pitch_velocity: PITCH_SPEED_DEG_PER_SEC * pitch_sign,
            ..Default::default()
        }
    }

    pub fn angles(&self) -> Angles {
        Angles::new(self.yaw, self.pitch)
    }

    /// Move for `dt` seconds, reflecting off `bounds` (half-extents) per axis.
    pub fn step(&mut self, dt: f64, multiplier: f64, bounds: Angles) {
        self.yaw += self.yaw_velocity * multiplier * dt;
        self.pitch += self.pitch_velocity * multiplier * dt;
        reflect("yaw", &mut self.yaw, &mut self.yaw_velocity, bounds.yaw);
        reflect("pitch", &mut self.pitch, &mut self.pitch_velocity, bounds.pitch);
    }
}

/// Clamp `pos` into `[-limit, limit]`, flipping `vel` on contact.
/// Returns whether the axis bounced.
fn reflect(axis: &'static str, pos: &mut f64, vel: &mut f64, limit: f64) -> bool {
    let bounced = if *pos < -limit {
        *pos = -limit;
        true
    } else if *pos > limit {
        *pos = limit;
        true
    } else {
        false
    };
    if bounced {
        *vel = -*vel;
        tracing::debug!(axis, position = *pos, velocity = *vel, "tracking target bounced");
    }
    bounced
}

/// Continuous-pursuit mode: score is time spent on target.
#[derive(Debug, Clone)]
pub struct TrackingMode {
    target: PursuitTarget,
    timer: SessionTimer,
    projection: Projection,
    /// Seconds on target
    score: f64,
    streak: f64,
    best_streak: f64,
    challenge_mode: bool,
}

impl TrackingMode {
    pub fn new(config: &SessionConfig, projection: Projection, rng: &mut impl Rng) -> Self {
        let mut mode = Self {
            target: PursuitTarget::default(),
            timer: SessionTimer::default(),
            projection,
            score: 0.0,
            streak: 0.0,
            best_streak: 0.0,
            challenge_mode: false,
        };
        mode.start(config, rng);
        mode
    }

    pub fn start(&mut self, config: &SessionConfig, rng: &mut impl Rng) {
        self.score = 0.0;
        self.streak = 0.0;
        self.best_streak = 0.0;
        self.challenge_mode = config.challenge_mode;
        self.target = PursuitTarget::launch(rng);
        self.timer.start();

        tracing::info!(
            challenge = self.challenge_mode,
            yaw_velocity = self.target.yaw_velocity,
            pitch_velocity = self.target.pitch_velocity,
            "tracking session started"
        );
    }

    pub fn speed_multiplier(&self) -> f64 {
        if self.challenge_mode {
            CHALLENGE_SPEED_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn update(&mut self, delta_ms: u32, camera: Angles) -> TimerTick {
        if !self.timer.is_running() {
            return TimerTick::Idle;
        }
        if self.timer.is_in_countdown() {
            return self.timer.advance(delta_ms);
        }

        let dt = delta_ms as f64 / 1000.0;
        let multiplier = self.speed_multiplier();
        self.target
            .step(dt, multiplier, self.projection.bounds(BOUNDS_MARGIN_DEG));

        if angular_offset(camera, self.target.angles()).within(HIT_RADIUS_DEG) {
            self.score += dt * multiplier;
            self.streak += dt * multiplier;
            if self.streak > self.best_streak {
                self.best_streak = self.streak;
            }
        } else {
            self.streak = 0.0;
        }

        let tick = self.timer.advance(delta_ms);
        if let TimerTick::Active { finished: true } = tick {
            tracing::info!(
                score = self.score,
                best_streak = self.best_streak,
                "tracking session finished"
            );
        }
        tick
    }

    pub fn toggle_challenge_mode(&mut self) {
        self.challenge_mode = !self.challenge_mode;
    }

    pub fn target(&self) -> &PursuitTarget {
        &self.target
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn timer(&self) -> &SessionTimer {
        &self.timer
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn streak(&self) -> f64 {
        self.streak
    }

    pub fn best_streak(&self) -> f64 {
        self.best_streak
    }

    pub fn challenge_mode(&self) -> bool {
        self.challenge_mode
    }

    #[cfg(test)]
    fn set_target(&mut self, target: PursuitTarget) {
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Viewport;
    use crate::timer::COUNTDOWN_DURATION_MS;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FRAME_MS: u32 = 16;

    fn projection() -> Projection {
        Projection::new(90.0, Viewport::new(1280.0, 720.0))
    }

    fn active_mode(challenge_mode: bool) -> TrackingMode {
        let config = SessionConfig {
            challenge_mode,
            ..Default::default()
        };
        let mut mode = TrackingMode::new(&config, projection(), &mut ChaCha8Rng::seed_from_u64(3));
        mode.update(COUNTDOWN_DURATION_MS, Angles::default());
        mode
    }

    mod physics {
        use super::*;

        #[test]
        fn launch_is_centered_with_fixed_speeds() {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            for _ in 0..20 {
                let t = PursuitTarget::launch(&mut rng);
                assert_eq!((t.yaw, t.pitch), (0.0, 0.0));
                assert_eq!(t.yaw_velocity.abs(), YAW_SPEED_DEG_PER_SEC);
                assert_eq!(t.pitch_velocity.abs(), PITCH_SPEED_DEG_PER_SEC);
            }
        }

        #[test]
        fn launch_signs_vary_across_draws() {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            let signs: std::collections::HashSet<(bool, bool)> = (0..64)
                .map(|_| {
                    let t = PursuitTarget::launch(&mut rng);
                    (t.yaw_velocity > 0.0, t.pitch_velocity > 0.0)
                })
                .collect();
            assert_eq!(signs.len(), 4);
        }

        #[test]
        fn velocity_flips_only_at_the_bound() {
            let bounds = projection().bounds(BOUNDS_MARGIN_DEG);
            let mut target = PursuitTarget::default();
            for _ in 0..2_000 {
                let before = target;
                target.step(0.033, 1.0, bounds);
                let would_yaw = before.yaw + before.yaw_velocity * 0.033;
                let crossed_yaw = would_yaw.abs() > bounds.yaw;
                assert_eq!(target.yaw_velocity != before.yaw_velocity, crossed_yaw);
                let would_pitch = before.pitch + before.pitch_velocity * 0.033;
                let crossed_pitch = would_pitch.abs() > bounds.pitch;
                assert_eq!(target.pitch_velocity != before.pitch_velocity, crossed_pitch);
                assert!(target.yaw.abs() <= bounds.yaw);
                assert!(target.pitch.abs() <= bounds.pitch);
            }
        }

        #[test]
        fn pitch_flips_only_at_the_bound_at_double_speed() {
            let bounds = projection().bounds(BOUNDS_MARGIN_DEG);
            let mut target = PursuitTarget::default();
            let mut bounces = 0;
            for _ in 0..5_000 {
                let before = target;
                target.step(0.033, CHALLENGE_SPEED_MULTIPLIER, bounds);
                let would_pitch =
                    before.pitch + before.pitch_velocity * CHALLENGE_SPEED_MULTIPLIER * 0.033;
                let crossed = would_pitch.abs() > bounds.pitch;
                let flipped = target.pitch_velocity != before.pitch_velocity;
                assert_eq!(flipped, crossed);
                if flipped {
                    assert_eq!(target.pitch_velocity, -before.pitch_velocity);
                    bounces += 1;
                }
                assert!(target.pitch.abs() <= bounds.pitch);
            }
            assert!(bounces > 0);
        }

        #[test]
        fn reflect_reports_contact() {
            let (mut pos, mut vel) = (10.5, 3.0);
            assert!(reflect("yaw", &mut pos, &mut vel, 10.0));
            assert_eq!((pos, vel), (10.0, -3.0));

            let (mut pos, mut vel) = (-10.0, -3.0);
            assert!(!reflect("pitch", &mut pos, &mut vel, 10.0));
            assert_eq!((pos, vel), (-10.0, -3.0));
        }

        #[test]
        fn clamps_to_bound_on_collision() {
            let bounds = Angles::new(10.0, 10.0);
            let mut target = PursuitTarget {
                yaw: 9.9,
                pitch: -9.9,
                yaw_velocity: 20.0,
                pitch_velocity: -15.0,
            };
            target.step(0.033, 1.0, bounds);
            assert_eq!(target.yaw, 10.0);
            assert_eq!(target.pitch, -10.0);
            assert_eq!(target.yaw_velocity, -20.0);
            assert_eq!(target.pitch_velocity, 15.0);
        }

        #[test]
        fn both_axes_bounce_in_the_same_tick() {
            let bounds = Angles::new(1.0, 1.0);
            let mut target = PursuitTarget {
                yaw: -0.9,
                pitch: 0.9,
                yaw_velocity: -20.0,
                pitch_velocity: 20.0,
            };
            target.step(0.02, 1.0, bounds);
            assert!(target.yaw_velocity > 0.0);
            assert!(target.pitch_velocity < 0.0);
        }

        #[test]
        fn challenge_doubles_displacement() {
            let mut normal = active_mode(false);
            let mut fast = active_mode(true);
            let start = PursuitTarget::default();
            normal.set_target(start);
            fast.set_target(start);
            normal.update(100, Angles::new(180.0, 0.0));
            fast.update(100, Angles::new(180.0, 0.0));
            assert!((normal.target().yaw - 2.0).abs() < 1e-9);
            assert!((fast.target().yaw - 4.0).abs() < 1e-9);
        }

        #[test]
        fn target_does_not_move_during_countdown() {
            let mut mode =
                TrackingMode::new(&SessionConfig::default(), projection(), &mut ChaCha8Rng::seed_from_u64(1));
            mode.update(1_000, Angles::default());
            assert_eq!(mode.target().angles(), Angles::new(0.0, 0.0));
            assert_eq!(mode.score(), 0.0);
        }
    }

    mod scoring {
        use super::*;

        #[test]
        fn on_target_accrues_real_time() {
            let mut mode = active_mode(false);
            let camera = mode.target().angles();
            mode.update(FRAME_MS, camera);
            assert!((mode.score() - 0.016).abs() < 1e-9);
            assert!((mode.streak() - 0.016).abs() < 1e-9);
        }

        #[test]
        fn challenge_accrues_double() {
            let mut mode = active_mode(true);
            let camera = mode.target().angles();
            mode.update(FRAME_MS, camera);
            assert!((mode.score() - 0.032).abs() < 1e-9);
        }

        #[test]
        fn off_target_resets_streak_but_keeps_best() {
            let mut mode = active_mode(false);
            for _ in 0..10 {
                let camera = mode.target().angles();
                mode.update(FRAME_MS, camera);
            }
            let best = mode.best_streak();
            let score = mode.score();
            assert!(best > 0.0);

            mode.update(FRAME_MS, Angles::new(180.0, 0.0));
            assert_eq!(mode.streak(), 0.0);
            assert_eq!(mode.best_streak(), best);
            assert_eq!(mode.score(), score);
        }

        #[test]
        fn score_and_best_never_decrease() {
            let mut mode = active_mode(false);
            let mut last_score = 0.0;
            let mut last_best = 0.0;
            for i in 0..600 {
                let camera = if (i / 50) % 2 == 0 {
                    mode.target().angles()
                } else {
                    Angles::new(90.0, 45.0)
                };
                mode.update(FRAME_MS, camera);
                assert!(mode.score() >= last_score);
                assert!(mode.best_streak() >= last_best);
                assert!(mode.best_streak() >= mode.streak());
                last_score = mode.score();
                last_best = mode.best_streak();
            }
        }

        #[test]
        fn finishes_after_session_duration() {
            let mut mode = active_mode(false);
            let mut finished = 0;
            for _ in 0..2_000 {
                if let TimerTick::Active { finished: true } = mode.update(33, Angles::default()) {
                    finished += 1;
                }
            }
            assert_eq!(finished, 1);
            assert!(!mode.timer().is_running());
            let frozen = *mode.target();
            mode.update(33, Angles::default());
            assert_eq!(*mode.target(), frozen);
        }
    }
}
