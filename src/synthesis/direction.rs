//! Screen-space direction vectors for a needle angle
//!
//! Angles are in degrees with 0 pointing up (negative y) and positive
//! angles turning clockwise.

/// Unit direction of the needle and the perpendicular used for stroke width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeAxes {
    /// Unit vector pointing from the pivot toward the needle tip
    pub direction: (f64, f64),
    /// Unit vector perpendicular to `direction`
    pub perpendicular: (f64, f64),
}

impl StrokeAxes {
    /// Axes for an angle in degrees, reduced to a single turn first
    pub fn from_degrees(angle: f64) -> Self {
        let radians = normalize_degrees(angle).to_radians();
        let (sin, cos) = radians.sin_cos();

        Self {
            direction: (sin, -cos),
            perpendicular: (cos, sin),
        }
    }

    /// Point at `distance` along the direction from `origin`
    // Must stay unfused: truncation depends on the exact rounding
    #[allow(clippy::suboptimal_flops)]
    pub fn along(&self, origin: (f64, f64), distance: f64) -> (f64, f64) {
        (
            origin.0 + self.direction.0 * distance,
            origin.1 + self.direction.1 * distance,
        )
    }

    /// Point offset from `point` by `offset` along the perpendicular
    #[allow(clippy::suboptimal_flops)]
    pub fn across(&self, point: (f64, f64), offset: f64) -> (f64, f64) {
        (
            point.0 + self.perpendicular.0 * offset,
            point.1 + self.perpendicular.1 * offset,
        )
    }
}

/// Reduce an angle to `[0, 360)` so whole turns yield identical vectors
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}
