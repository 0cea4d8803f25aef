use std::path::{Path, PathBuf};

use aimtrainer_shared::config::{
    SessionConfig, DEFAULT_FOV, DEFAULT_SENSITIVITY, FOV_MAX, FOV_MIN, SENSITIVITY_MAX,
    SENSITIVITY_MIN,
};
use aimtrainer_shared::history::ScoreHistory;
use aimtrainer_shared::session::SessionResult;

pub const DEFAULT_DATA_FILE: &str = "aimtrainer_data.json";
pub const DATA_FILE_ENV: &str = "AIMTRAINER_DATA_FILE";

/// Multiplicative step for the menu's sensitivity keys.
pub const SENSITIVITY_STEP: f64 = 1.25;
/// Additive step for the menu's FOV keys (degrees).
pub const FOV_STEP: f64 = 5.0;

/// Everything persisted between runs: settings, crosshair style and scores.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SavedData {
    pub sensitivity: f64,
    pub fov: f64,
    #[serde(rename = "challengeMode")]
    pub challenge_mode: bool,
    pub cross_r: i32,
    pub cross_g: i32,
    pub cross_b: i32,
    pub cross_gap: i32,
    pub cross_len: i32,
    #[serde(flatten)]
    pub history: ScoreHistory,
}

impl Default for SavedData {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            fov: DEFAULT_FOV,
            challenge_mode: false,
            cross_r: 0,
            cross_g: 255,
            cross_b: 0,
            cross_gap: 5,
            cross_len: 15,
            history: ScoreHistory::default(),
        }
    }
}

impl SavedData {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let data: Self =
            serde_json::from_str(text).map_err(|e| format!("invalid data file: {e}"))?;
        Ok(data.sanitized())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("failed to encode data: {e}"))
    }

    /// Bring loaded settings back into their usable ranges.
    pub fn sanitized(mut self) -> Self {
        let config = self.session_config();
        self.sensitivity = config.sensitivity;
        self.fov = config.field_of_view_deg;
        self.cross_gap = self.cross_gap.max(0);
        self.cross_len = self.cross_len.max(0);
        self
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            sensitivity: self.sensitivity,
            field_of_view_deg: self.fov,
            challenge_mode: self.challenge_mode,
        }
        .sanitized()
    }

    pub fn step_sensitivity(&mut self, up: bool) {
        let next = if up {
            self.sensitivity * SENSITIVITY_STEP
        } else {
            self.sensitivity / SENSITIVITY_STEP
        };
        self.sensitivity = next.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
    }

    pub fn step_fov(&mut self, up: bool) {
        let delta = if up { FOV_STEP } else { -FOV_STEP };
        self.fov = (self.fov + delta).clamp(FOV_MIN, FOV_MAX);
    }

    pub fn toggle_challenge(&mut self) {
        self.challenge_mode = !self.challenge_mode;
    }

    pub fn crosshair_rgb(&self) -> (u8, u8, u8) {
        let channel = |v: i32| v.clamp(0, 255) as u8;
        (channel(self.cross_r), channel(self.cross_g), channel(self.cross_b))
    }

    pub fn record(&mut self, result: &SessionResult) {
        self.history.record(result);
    }
}

/// Path of the data file, overridable through `AIMTRAINER_DATA_FILE`.
pub fn data_file_from_env() -> PathBuf {
    std::env::var(DATA_FILE_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Load saved data. A missing file yields defaults.
pub fn load(path: &Path) -> Result<SavedData, String> {
    match std::fs::read_to_string(path) {
        Ok(text) => SavedData::from_json(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(SavedData::default()),
        Err(e) => Err(format!("failed to read {}: {e}", path.display())),
    }
}

pub fn save(path: &Path, data: &SavedData) -> Result<(), String> {
    let text = data.to_json()?;
    std::fs::write(path, text).map_err(|e| format!("failed to write {}: {e}", path.display()))
}
