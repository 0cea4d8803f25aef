pub const SENSITIVITY_MIN: f64 = 0.001;
pub const SENSITIVITY_MAX: f64 = 3.0;
pub const DEFAULT_SENSITIVITY: f64 = 1.0;

pub const FOV_MIN: f64 = 60.0;
pub const FOV_MAX: f64 = 130.0;
pub const DEFAULT_FOV: f64 = 90.0;

/// Per-session configuration snapshot, handed to a mode at start.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Degrees of rotation per raw motion unit
    pub sensitivity: f64,
    /// Horizontal field of view (degrees)
    pub field_of_view_deg: f64,
    pub challenge_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            field_of_view_deg: DEFAULT_FOV,
            challenge_mode: false,
        }
    }
}

impl SessionConfig {
    /// Replace out-of-range values the way the settings store always has:
    /// too-small values fall back to the default, too-large values clamp.
    pub fn sanitized(mut self) -> Self {
        if !self.sensitivity.is_finite() || self.sensitivity < SENSITIVITY_MIN {
            self.sensitivity = DEFAULT_SENSITIVITY;
        }
        self.sensitivity = self.sensitivity.min(SENSITIVITY_MAX);

        if !self.field_of_view_deg.is_finite() || self.field_of_view_deg < FOV_MIN {
            self.field_of_view_deg = DEFAULT_FOV;
        }
        self.field_of_view_deg = self.field_of_view_deg.min(FOV_MAX);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err("sensitivity must be finite and > 0".to_string());
        }
        if !(SENSITIVITY_MIN..=SENSITIVITY_MAX).contains(&self.sensitivity) {
            return Err(format!(
                "sensitivity must be within {SENSITIVITY_MIN}..={SENSITIVITY_MAX}"
            ));
        }
        if !self.field_of_view_deg.is_finite() {
            return Err("field_of_view_deg must be finite".to_string());
        }
        if !(FOV_MIN..=FOV_MAX).contains(&self.field_of_view_deg) {
            return Err(format!("field_of_view_deg must be within {FOV_MIN}..={FOV_MAX}"));
        }
        Ok(())
    }
}
