use crate::{
    foundation::core::{Circle, CoverConfig},
    foundation::rng::Rng64,
};

/// Minimum clearance between any two mask circles, beyond their radii.
pub const CIRCLE_GAP: f64 = 30.0;

/// Candidate placements attempted for satellites per generation run.
const SATELLITE_ATTEMPTS: usize = 10;

/// Accepted-satellite cap; placement stops early once reached.
pub const MAX_SATELLITES: usize = 6;

/// One axis-aligned stripe rectangle descriptor before the global rotation.
#[derive(Clone, Copy, Debug)]
pub struct StripeBand {
    /// Band thickness across the stripe axis.
    pub thickness: f64,
    /// Offset from canvas center along the perpendicular axis.
    pub offset: f64,
}

/// The stripe clip region: thin rectangles rotated about the canvas center.
#[derive(Clone, Debug)]
pub struct StripeLayer {
    /// Global rotation in degrees, applied about the canvas center.
    pub rotation_deg: f64,
    /// Band length, 1.5x the canvas diagonal so rotation never exposes an end.
    pub length: f64,
    /// Bands in placement order.
    pub bands: Vec<StripeBand>,
}

impl StripeLayer {
    /// Draw the stripe layer: rotation, band count, then thickness and offset
    /// per band, in that order.
    pub fn draw(config: &CoverConfig, rng: &mut Rng64) -> Self {
        let rotation_deg = rng.int_inclusive(0, 360) as f64;
        let count = rng.int_inclusive(3, 5) as usize;
        let length = f64::from(config.width).hypot(f64::from(config.height)) * 1.5;
        let half_span = f64::from(config.height) / 1.8;

        let mut bands = Vec::with_capacity(count);
        for _ in 0..count {
            let thickness = rng.int_inclusive(25, 55) as f64;
            let offset = rng.uniform_in(-half_span, half_span);
            bands.push(StripeBand { thickness, offset });
        }

        Self {
            rotation_deg,
            length,
            bands,
        }
    }
}

/// The circle mask region: one hero circle plus collision-free satellites.
#[derive(Clone, Debug)]
pub struct CircleCluster {
    /// The static, centrally anchored circle.
    pub hero: Circle,
    /// Accepted satellites in placement order, at most [`MAX_SATELLITES`].
    /// Rendered inside the scoped orbit group.
    pub satellites: Vec<Circle>,
}

impl CircleCluster {
    /// Draw the hero, then greedily place satellites by rejection sampling.
    ///
    /// Each attempt draws radius, x, y; a candidate is accepted only if it
    /// clears the hero and every accepted satellite by [`CIRCLE_GAP`]. A run
    /// that accepts fewer than [`MAX_SATELLITES`] is expected, not an error.
    pub fn draw(config: &CoverConfig, rng: &mut Rng64) -> Self {
        let center = config.center();
        let hero = Circle::new(
            (
                center.x + rng.int_inclusive(-40, 40) as f64,
                center.y + rng.int_inclusive(-20, 20) as f64,
            ),
            rng.int_inclusive(220, 260) as f64,
        );

        let mut satellites: Vec<Circle> = Vec::new();
        for _ in 0..SATELLITE_ATTEMPTS {
            if satellites.len() >= MAX_SATELLITES {
                break;
            }
            let r = rng.int_inclusive(50, 100);
            let max_x = i64::from(config.width) - r;
            let max_y = i64::from(config.height) - r;
            if r > max_x || r > max_y {
                // Canvas too small to keep this candidate fully in bounds.
                continue;
            }
            let x = rng.int_inclusive(r, max_x) as f64;
            let y = rng.int_inclusive(r, max_y) as f64;
            let candidate = Circle::new((x, y), r as f64);

            if clears(&candidate, &hero) && satellites.iter().all(|c| clears(&candidate, c)) {
                satellites.push(candidate);
            }
        }

        Self { hero, satellites }
    }
}

fn clears(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) >= a.radius + b.radius + CIRCLE_GAP
}

#[cfg(test)]
#[path = "../../tests/unit/layers/shapes.rs"]
mod tests;
