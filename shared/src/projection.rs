use crate::angles::{angular_offset, Angles, AngularOffset};

/// Extra angle beyond the frustum edge within which targets still count as
/// visible, so they don't pop at the border.
pub const VISIBILITY_MARGIN_DEG: f64 = 5.0;

/// Offsets at or beyond this are never passed to `tan`.
pub const MAX_PROJECTABLE_OFFSET_DEG: f64 = 89.9;

/// Horizontal FOV plus the vertical FOV derived from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldOfView {
    pub horizontal: f64,
    pub vertical: f64,
}

impl FieldOfView {
    pub fn new(horizontal_deg: f64, aspect: f64) -> Self {
        let half_h = (horizontal_deg * 0.5).to_radians();
        let vertical = 2.0 * (half_h.tan() * (1.0 / aspect)).atan();
        Self {
            horizontal: horizontal_deg,
            vertical: vertical.to_degrees(),
        }
    }
}

/// Viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// Pixel position, origin top-left, Y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

/// Angular space to screen space. Both modes draw through this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub fov: FieldOfView,
    pub viewport: Viewport,
}

impl Projection {
    pub fn new(horizontal_fov_deg: f64, viewport: Viewport) -> Self {
        Self {
            fov: FieldOfView::new(horizontal_fov_deg, viewport.aspect()),
            viewport,
        }
    }

    pub fn is_visible(&self, offset: AngularOffset) -> bool {
        offset.yaw.abs() <= self.fov.horizontal * 0.5 + VISIBILITY_MARGIN_DEG
            && offset.pitch.abs() <= self.fov.vertical * 0.5 + VISIBILITY_MARGIN_DEG
    }

    /// Normalized device coordinates, [-1, 1] at the frustum edges, Y up.
    /// `None` when an axis is too close to 90 degrees for `tan`.
    pub fn to_normalized(&self, offset: AngularOffset) -> Option<(f64, f64)> {
        if offset.yaw.abs() >= MAX_PROJECTABLE_OFFSET_DEG
            || offset.pitch.abs() >= MAX_PROJECTABLE_OFFSET_DEG
        {
            return None;
        }
        let x = offset.yaw.to_radians().tan() / (self.fov.horizontal * 0.5).to_radians().tan();
        let y = offset.pitch.to_radians().tan() / (self.fov.vertical * 0.5).to_radians().tan();
        Some((x, y))
    }

    pub fn offset_to_screen(&self, offset: AngularOffset) -> Option<ScreenPos> {
        if !self.is_visible(offset) {
            return None;
        }
        let (x_n, y_n) = self.to_normalized(offset)?;
        let half_w = self.viewport.width * 0.5;
        let half_h = self.viewport.height * 0.5;
        Some(ScreenPos {
            x: x_n * half_w + half_w,
            y: -y_n * half_h + half_h,
        })
    }

    /// Screen position of `target` seen from `camera`, or `None` if culled.
    pub fn project(&self, camera: Angles, target: Angles) -> Option<ScreenPos> {
        self.offset_to_screen(angular_offset(camera, target))
    }

    /// Half-extents of the frustum shrunk by `margin` on each axis.
    pub fn bounds(&self, margin: f64) -> Angles {
        Angles::new(
            self.fov.horizontal * 0.5 - margin,
            self.fov.vertical * 0.5 - margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

    fn projection() -> Projection {
        Projection::new(90.0, VIEWPORT)
    }

    #[test]
    fn vertical_fov_follows_aspect() {
        let fov = FieldOfView::new(90.0, 16.0 / 9.0);
        let expected = 2.0 * (9.0_f64 / 16.0).atan().to_degrees();
        assert!((fov.vertical - expected).abs() < 1e-9);
    }

    #[test]
    fn square_viewport_has_equal_fovs() {
        let fov = FieldOfView::new(90.0, 1.0);
        assert!((fov.vertical - 90.0).abs() < 1e-9);
    }

    #[test]
    fn centered_target_lands_in_viewport_center() {
        let pos = projection()
            .project(Angles::new(10.0, 5.0), Angles::new(10.0, 5.0))
            .unwrap();
        assert!((pos.x - 640.0).abs() < 1e-9);
        assert!((pos.y - 360.0).abs() < 1e-9);
    }

    #[test]
    fn frustum_edge_maps_to_screen_edge() {
        let pos = projection()
            .project(Angles::new(0.0, 0.0), Angles::new(45.0, 0.0))
            .unwrap();
        assert!((pos.x - 1280.0).abs() < 1e-6);
    }

    #[test]
    fn positive_pitch_is_above_center() {
        let pos = projection()
            .project(Angles::new(0.0, 0.0), Angles::new(0.0, 10.0))
            .unwrap();
        assert!(pos.y < 360.0);
    }

    #[test]
    fn target_behind_camera_is_culled() {
        let p = projection();
        assert!(p.project(Angles::new(0.0, 0.0), Angles::new(180.0, 0.0)).is_none());
        assert!(p.project(Angles::new(0.0, 0.0), Angles::new(0.0, 80.0)).is_none());
    }

    #[test]
    fn margin_keeps_targets_just_outside_frustum() {
        let p = projection();
        let inside_margin = AngularOffset { yaw: 49.0, pitch: 0.0 };
        let outside_margin = AngularOffset { yaw: 51.0, pitch: 0.0 };
        assert!(p.is_visible(inside_margin));
        assert!(!p.is_visible(outside_margin));
        assert!(p.offset_to_screen(inside_margin).unwrap().x > 1280.0);
    }

    #[test]
    fn projection_across_yaw_seam() {
        let pos = projection()
            .project(Angles::new(359.0, 0.0), Angles::new(1.0, 0.0))
            .unwrap();
        assert!(pos.x > 640.0);
    }

    #[test]
    fn near_ninety_degrees_is_rejected() {
        let p = projection();
        assert!(p
            .to_normalized(AngularOffset { yaw: 89.95, pitch: 0.0 })
            .is_none());
        assert!(p
            .to_normalized(AngularOffset { yaw: 0.0, pitch: -90.0 })
            .is_none());
    }

    #[test]
    fn bounds_shrink_by_margin() {
        let b = projection().bounds(5.0);
        assert!((b.yaw - 40.0).abs() < 1e-9);
        assert!((b.pitch - (projection().fov.vertical * 0.5 - 5.0)).abs() < 1e-9);
    }
}
