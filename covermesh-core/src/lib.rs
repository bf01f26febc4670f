//! Covermesh generates deterministic, scoped SVG cover art from an integer
//! seed and an identifier string.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: one [`Rng64`] stream per call; every downstream decision
//!    draws from it in a fixed order.
//! 2. **Profile & shapes**: `seed -> GradientProfile + StripeLayer +
//!    CircleCluster` (how color flows, where each pass is visible).
//! 3. **Mesh**: one jittered triangulation over the padded canvas, shared by
//!    both render passes.
//! 4. **Compose**: two passes over the same mesh (near-white triangles
//!    clipped to the stripes, then gradient-colored triangles masked to the
//!    circles), serialized as a standalone `<svg>` string.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: `(config, seed, identifier)` fully
//!   determines the output bytes, on every platform.
//! - **No IO**: the generator only builds a string; persistence and batch
//!   iteration live in the CLI crate.
//! - **Scoped output**: every id, class and keyframe name carries an
//!   8-hex [`ScopeId`] suffix so covers can be embedded side by side.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod color;
mod foundation;
mod layers;
mod mesh;
mod scene;
mod svg;

pub use color::engine::{GradientProfile, MAX_GRADIENT_DIST, stripe_shade, vibrant_color};
pub use color::hsv::{Hsv, Rgb8};
pub use foundation::core::{Circle, CoverConfig, MESH_PAD, Point, Vec2};
pub use foundation::error::{CoverError, CoverResult};
pub use foundation::ids::{ScopeId, seed_for_identifier};
pub use foundation::rng::Rng64;
pub use layers::shapes::{CIRCLE_GAP, CircleCluster, MAX_SATELLITES, StripeBand, StripeLayer};
pub use mesh::grid::{Mesh, Triangle, grid_dims};
pub use scene::compose::generate;
pub use svg::markup::{escape_attr, fmt_num, triangle_points};
