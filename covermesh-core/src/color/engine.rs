use crate::{
    color::hsv::Hsv,
    foundation::core::Point,
    foundation::rng::Rng64,
};

/// Projection distance at which gradient interpolation saturates, in canvas
/// units from the center along the gradient direction.
pub const MAX_GRADIENT_DIST: f64 = 800.0;

/// How hue varies across the canvas: a direction plus a start/end hue pair.
///
/// `hue_end` is `hue_start` shifted by one of {-80, -60, +60, +80} degrees
/// and deliberately kept unwrapped, so interpolation always travels through
/// the shift itself; hues wrap to `[0, 360)` only after per-triangle jitter.
#[derive(Clone, Copy, Debug)]
pub struct GradientProfile {
    /// Gradient direction in radians.
    pub angle_rad: f64,
    /// Hue at the negative end of the gradient axis, in degrees.
    pub hue_start: f64,
    /// Hue at the positive end; may lie outside `[0, 360)`.
    pub hue_end: f64,
}

impl GradientProfile {
    /// Draw a profile from the stream: angle, start hue, end-hue shift.
    pub fn draw(rng: &mut Rng64) -> Self {
        let angle_rad = (rng.int_inclusive(0, 360) as f64).to_radians();
        let hue_start = rng.int_inclusive(0, 360) as f64;
        let hue_end = hue_start + rng.pick(&[-80.0, -60.0, 60.0, 80.0]);
        Self {
            angle_rad,
            hue_start,
            hue_end,
        }
    }
}

/// Saturated, gradient-positioned color for the vibrant pass.
///
/// Projects `at` (relative to `center`) onto the gradient direction,
/// normalizes against [`MAX_GRADIENT_DIST`] and interpolates hue, then
/// consumes exactly three draws: saturation, value, hue jitter.
pub fn vibrant_color(at: Point, center: Point, grad: &GradientProfile, rng: &mut Rng64) -> Hsv {
    let dir_x = grad.angle_rad.cos();
    let dir_y = grad.angle_rad.sin();
    let proj = (at.x - center.x) * dir_x + (at.y - center.y) * dir_y;
    let t = ((proj + MAX_GRADIENT_DIST) / (2.0 * MAX_GRADIENT_DIST)).clamp(0.0, 1.0);

    let mut h = grad.hue_start + (grad.hue_end - grad.hue_start) * t;
    let s = rng.uniform_in(0.65, 0.80);
    let v = rng.uniform_in(0.90, 1.00);
    h += rng.uniform_in(-10.0, 10.0);

    Hsv::new(h.rem_euclid(360.0), s, v)
}

/// Near-white shade for the stripe pass. Consumes one draw.
pub fn stripe_shade(rng: &mut Rng64) -> Hsv {
    Hsv::new(0.0, 0.0, rng.uniform_in(0.94, 0.98))
}

#[cfg(test)]
#[path = "../../tests/unit/color/engine.rs"]
mod tests;
