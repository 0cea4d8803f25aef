/// Yaw/pitch angle helpers. All angles are in degrees.

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Angles {
    pub yaw: f64,
    pub pitch: f64,
}

impl Angles {
    pub const fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }
}

/// Angular offset of a target relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularOffset {
    pub yaw: f64,
    pub pitch: f64,
}

impl AngularOffset {
    /// Square hit region: both axes within `radius`.
    pub fn within(&self, radius: f64) -> bool {
        self.yaw.abs() <= radius && self.pitch.abs() <= radius
    }
}

/// Map a yaw difference into (-180, 180].
pub fn wrap180(d: f64) -> f64 {
    if !d.is_finite() {
        return d;
    }
    let r = (d + 180.0).rem_euclid(360.0) - 180.0;
    if r <= -180.0 {
        180.0
    } else {
        r
    }
}

/// Canonical yaw in [0, 360).
pub fn wrap360(yaw: f64) -> f64 {
    if !yaw.is_finite() {
        return yaw;
    }
    let r = yaw.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Offset from `camera` to `target`, yaw taking the shortest path.
pub fn angular_offset(camera: Angles, target: Angles) -> AngularOffset {
    AngularOffset {
        yaw: wrap180(target.yaw - camera.yaw),
        pitch: target.pitch - camera.pitch,
    }
}
