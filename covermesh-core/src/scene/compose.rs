use std::fmt::Write as _;

use crate::{
    color::engine::{self, GradientProfile},
    foundation::core::CoverConfig,
    foundation::ids::ScopeId,
    foundation::rng::Rng64,
    layers::shapes::{CircleCluster, StripeLayer},
    mesh::grid::Mesh,
    svg::markup::{escape_attr, fmt_num, triangle_points},
};

/// Generate one cover document as a standalone SVG string.
///
/// Output is fully determined by `(config, seed, identifier)`: calling twice
/// with the same inputs yields byte-identical markup. When no identifier is
/// supplied the decimal seed scopes the document instead.
///
/// Draw order against the seeded stream is fixed: gradient profile, stripe
/// shapes, circle placements, mesh jitter and diagonals, stripe-pass colors,
/// vibrant-pass colors. Both passes iterate one shared mesh in one order.
///
/// The caller holds a validated [`CoverConfig`]; given one, this function
/// cannot fail.
#[tracing::instrument(skip(config))]
pub fn generate(config: &CoverConfig, seed: u64, identifier: Option<&str>) -> String {
    let fallback = seed.to_string();
    let scope = ScopeId::derive(identifier.unwrap_or(fallback.as_str()));

    let mut rng = Rng64::new(seed);
    let gradient = GradientProfile::draw(&mut rng);
    let stripes = StripeLayer::draw(config, &mut rng);
    let circles = CircleCluster::draw(config, &mut rng);

    let center = config.center();
    let cx = fmt_num(center.x);
    let cy = fmt_num(center.y);

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg id="svg-{scope}" width="100%" height="100%" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid slice" xmlns="http://www.w3.org/2000/svg">"#,
        config.width, config.height
    );
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        escape_attr(&config.background_color)
    );

    // Scoped style block; inert until an interaction layer starts the
    // animation on the orbit group.
    let _ = writeln!(out, "<style>");
    let _ = writeln!(
        out,
        "@keyframes orbit-{scope} {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}"
    );
    let _ = writeln!(out, ".orbit-group-{scope} {{ transform-origin: {cx}px {cy}px; }}");
    let _ = writeln!(out, "</style>");

    let _ = writeln!(out, "<defs>");
    let _ = writeln!(out, r#"<clipPath id="clip-stripes-{scope}">"#);
    for band in &stripes.bands {
        let _ = writeln!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" transform="rotate({} {cx} {cy})"/>"#,
            fmt_num(center.x - stripes.length / 2.0),
            fmt_num(center.y + band.offset - band.thickness / 2.0),
            fmt_num(stripes.length),
            fmt_num(band.thickness),
            fmt_num(stripes.rotation_deg),
        );
    }
    let _ = writeln!(out, "</clipPath>");

    let _ = writeln!(out, r#"<mask id="mask-circles-{scope}">"#);
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="black"/>"#);
    let _ = writeln!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="white"/>"#,
        fmt_num(circles.hero.center.x),
        fmt_num(circles.hero.center.y),
        fmt_num(circles.hero.radius),
    );
    let _ = writeln!(out, r#"<g class="orbit-group-{scope} js-orbit-group">"#);
    for sat in &circles.satellites {
        let _ = writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{}" fill="white"/>"#,
            fmt_num(sat.center.x),
            fmt_num(sat.center.y),
            fmt_num(sat.radius),
        );
    }
    let _ = writeln!(out, "</g>");
    let _ = writeln!(out, "</mask>");
    let _ = writeln!(out, "</defs>");

    let mesh = Mesh::generate(config, &mut rng);

    // Pass 1: the whole mesh in muted near-white, visible only inside the
    // stripe clip.
    let _ = writeln!(out, r#"<g clip-path="url(#clip-stripes-{scope})">"#);
    for tri in &mesh.triangles {
        let fill = engine::stripe_shade(&mut rng).to_hex();
        let _ = writeln!(
            out,
            r#"<polygon points="{}" fill="{fill}" stroke="{fill}" stroke-width="1" stroke-linejoin="round"/>"#,
            triangle_points(&tri.pts),
        );
    }
    let _ = writeln!(out, "</g>");

    // Pass 2: the same mesh in the same order, gradient-colored by centroid,
    // visible only inside the circle mask.
    let _ = writeln!(out, r#"<g mask="url(#mask-circles-{scope})">"#);
    for tri in &mesh.triangles {
        let fill = engine::vibrant_color(tri.centroid, center, &gradient, &mut rng).to_hex();
        let _ = writeln!(
            out,
            r#"<polygon points="{}" fill="{fill}" stroke="{fill}" stroke-width="1" stroke-linejoin="round"/>"#,
            triangle_points(&tri.pts),
        );
    }
    let _ = writeln!(out, "</g>");
    let _ = write!(out, "</svg>");

    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
