use crate::angles::{wrap360, Angles};

/// Pitch is clamped to +/- this many degrees.
pub const PITCH_LIMIT: f64 = 89.0;

/// First-person camera orientation driven by raw pointer deltas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraOrientation {
    /// Degrees, wrapped to [0, 360).
    pub yaw: f64,
    /// Degrees, clamped to [-89, 89].
    pub pitch: f64,
}

impl CameraOrientation {
    /// Fold a raw motion delta into the orientation. Vertical axis is inverted.
    pub fn integrate(&mut self, raw_dx: f64, raw_dy: f64, sensitivity: f64) -> Angles {
        self.yaw = wrap360(self.yaw + raw_dx * sensitivity);
        self.pitch = (self.pitch - raw_dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.angles()
    }

    pub fn angles(&self) -> Angles {
        Angles::new(self.yaw, self.pitch)
    }
}
