use crate::{
    foundation::core::{CoverConfig, MESH_PAD, Point},
    foundation::rng::Rng64,
};

/// Fraction of a cell dimension by which interior vertices may be displaced.
const JITTER_FRACTION: f64 = 0.30;

/// One mesh triangle with its precomputed centroid.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    /// The three vertices.
    pub pts: [Point; 3],
    /// Arithmetic mean of the vertices, fixed at creation so both render
    /// passes color identical geometry identically.
    pub centroid: Point,
}

impl Triangle {
    fn new(a: Point, b: Point, c: Point) -> Self {
        let centroid = Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        Self {
            pts: [a, b, c],
            centroid,
        }
    }
}

/// The full jittered triangulation covering the padded canvas.
///
/// Built once per generation run; both render passes iterate the same value
/// in the same order, which is what keeps the stripe and circle passes in
/// pixel-perfect geometric alignment.
#[derive(Clone, Debug)]
pub struct Mesh {
    /// Triangles in row-major cell order, two per cell.
    pub triangles: Vec<Triangle>,
    /// Grid row count.
    pub rows: usize,
    /// Grid column count.
    pub cols: usize,
}

impl Mesh {
    /// Build the mesh for a config, consuming jitter and diagonal draws.
    ///
    /// Interior vertices take one jitter draw per interior axis; boundary
    /// coordinates stay exact so the outer edge remains rectangular. Each
    /// cell takes one draw to choose its split diagonal.
    pub fn generate(config: &CoverConfig, rng: &mut Rng64) -> Self {
        let (cols, rows) = grid_dims(config);
        let cell_w = config.padded_width() / cols as f64;
        let cell_h = config.padded_height() / rows as f64;
        let jitter_x = cell_w * JITTER_FRACTION;
        let jitter_y = cell_h * JITTER_FRACTION;

        let stride = cols + 1;
        let mut grid: Vec<Point> = Vec::with_capacity((rows + 1) * stride);
        for r in 0..=rows {
            for c in 0..=cols {
                let mut px = -MESH_PAD + c as f64 * cell_w;
                let mut py = -MESH_PAD + r as f64 * cell_h;
                if 0 < c && c < cols {
                    px += rng.uniform_in(-jitter_x, jitter_x);
                }
                if 0 < r && r < rows {
                    py += rng.uniform_in(-jitter_y, jitter_y);
                }
                grid.push(Point::new(px, py));
            }
        }

        let mut triangles = Vec::with_capacity(2 * rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let p00 = grid[r * stride + c];
                let p10 = grid[r * stride + c + 1];
                let p01 = grid[(r + 1) * stride + c];
                let p11 = grid[(r + 1) * stride + c + 1];

                if rng.next_f64() < 0.5 {
                    triangles.push(Triangle::new(p00, p10, p11));
                    triangles.push(Triangle::new(p00, p11, p01));
                } else {
                    triangles.push(Triangle::new(p00, p10, p01));
                    triangles.push(Triangle::new(p10, p11, p01));
                }
            }
        }

        Self {
            triangles,
            rows,
            cols,
        }
    }
}

/// Grid cell counts for a config: `floor(padded / base size)`, minimum 1 each.
pub fn grid_dims(config: &CoverConfig) -> (usize, usize) {
    let cols = ((config.padded_width() / config.base_triangle_size).floor() as usize).max(1);
    let rows = ((config.padded_height() / config.base_triangle_size).floor() as usize).max(1);
    (cols, rows)
}

#[cfg(test)]
#[path = "../../tests/unit/mesh/grid.rs"]
mod tests;
