use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use aimtrainer_shared::session::{ModeKind, Session, SessionResult};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::{color_from_hex, Colors, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::coord::canvas_viewport;
use crate::store::{self, SavedData};

pub const SEED_ENV: &str = "AIMTRAINER_SEED";

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Menu,
    Playing,
}

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Simulate,
    Visuals,
}

pub struct CorePlugin {
    pub data_file: PathBuf,
    pub seed: u64,
}

#[derive(Component)]
struct MainCamera;

/// Persisted settings plus the file they are saved to.
#[derive(Resource)]
pub(crate) struct SettingsStore {
    pub(crate) path: PathBuf,
    pub(crate) data: SavedData,
}

impl SettingsStore {
    pub(crate) fn open(path: PathBuf) -> Self {
        let data = match store::load(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!("{e}; using default settings");
                SavedData::default()
            }
        };
        Self { path, data }
    }

    pub(crate) fn save(&self) {
        if let Err(e) = store::save(&self.path, &self.data) {
            warn!("{e}");
        }
    }
}

/// Base seed of this run; sessions take `base + counter`.
#[derive(Resource)]
pub(crate) struct RunSeed {
    base: u64,
    started: u64,
}

impl RunSeed {
    pub(crate) fn new(base: u64) -> Self {
        Self { base, started: 0 }
    }

    pub(crate) fn next(&mut self) -> u64 {
        let seed = self.base.wrapping_add(self.started);
        self.started += 1;
        seed
    }
}

#[derive(Resource, Default)]
pub(crate) struct ActiveSession {
    pub(crate) session: Option<Session>,
    pub(crate) last_result: Option<SessionResult>,
}

impl ActiveSession {
    pub(crate) fn begin(
        &mut self,
        kind: ModeKind,
        settings: &SettingsStore,
        seed: &mut RunSeed,
    ) {
        let session_seed = seed.next();
        info!("starting {} (seed {session_seed})", kind.name());
        self.session = Some(Session::start(
            kind,
            settings.data.session_config(),
            canvas_viewport(),
            session_seed,
        ));
    }
}

/// Converts frame time to whole milliseconds, carrying the fraction.
#[derive(Resource, Default)]
pub(crate) struct FrameClock {
    carry_ms: f64,
}

impl FrameClock {
    pub(crate) fn take(&mut self, delta_secs: f64) -> u32 {
        if !delta_secs.is_finite() || delta_secs <= 0.0 {
            return 0;
        }
        let total = self.carry_ms + delta_secs * 1000.0;
        let whole = total.floor();
        self.carry_ms = total - whole;
        whole.min(u32::MAX as f64) as u32
    }

    pub(crate) fn reset(&mut self) {
        self.carry_ms = 0.0;
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SettingsStore::open(self.data_file.clone()))
            .insert_resource(RunSeed::new(self.seed))
            .init_resource::<ActiveSession>()
            .init_resource::<FrameClock>()
            .init_state::<Screen>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .configure_sets(
                Update,
                (UpdateSet::Input, UpdateSet::Simulate, UpdateSet::Visuals).chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(Update, fit_camera_to_canvas);
    }
}

/// `AIMTRAINER_SEED` if it parses, otherwise the wall clock.
pub fn seed_from_env_or_clock() -> u64 {
    std::env::var(SEED_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        })
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Msaa::Sample4, MainCamera));
}

fn fit_camera_to_canvas(
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }

    let scale = (CANVAS_WIDTH / window.width())
        .max(CANVAS_HEIGHT / window.height())
        .max(0.0001);

    for mut projection in &mut q_projection {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod frame_clock {
        use super::*;

        #[test]
        fn carries_fractional_milliseconds() {
            let mut clock = FrameClock::default();
            // 16.6 ms frames
            let total: u32 = (0..3).map(|_| clock.take(0.0166)).sum();
            assert_eq!(total, 49);
            assert_eq!(clock.take(0.0166), 17);
        }

        #[test]
        fn ignores_bad_deltas() {
            let mut clock = FrameClock::default();
            assert_eq!(clock.take(-1.0), 0);
            assert_eq!(clock.take(f64::NAN), 0);
            assert_eq!(clock.take(0.010), 10);
        }

        #[test]
        fn reset_drops_carry() {
            let mut clock = FrameClock::default();
            clock.take(0.0105);
            clock.reset();
            assert_eq!(clock.take(0.0006), 0);
        }
    }

    #[test]
    fn run_seed_counts_up_from_base() {
        let mut seed = RunSeed::new(100);
        assert_eq!(seed.next(), 100);
        assert_eq!(seed.next(), 101);
        assert_eq!(seed.next(), 102);
    }

    #[test]
    fn run_seed_wraps() {
        let mut seed = RunSeed::new(u64::MAX);
        assert_eq!(seed.next(), u64::MAX);
        assert_eq!(seed.next(), 0);
    }
}
