//! Static venue objects.
//!
//! A [`Placeable`] is an immutable shape tagged with a semantic role name
//! (`"Entrance"`, `"Chair"`, …) and a collision flag.  The set of shape
//! kinds is closed, so it is a tagged enum; rasterization and sub-cell
//! sampling dispatch on the tag.
//!
//! # Footprint rules
//!
//! | Shape     | Sub-cells covered                                                    |
//! |-----------|----------------------------------------------------------------------|
//! | Rectangle | `[x·d, x·d + w·d) × [y·d, y·d + h·d)`                                |
//! | Circle    | cells within `r·d` of `(x·d, y·d)`; `r = tile_size / 2.5` by default |
//! | Polygon   | cells whose centre is inside the scaled polygon (even-odd rule)      |

use cs_core::AgentRng;

use crate::{GridPos, GridScale};

/// Semantic role names that the behaviour controller looks up.
pub mod roles {
    pub const ENTRANCE: &str = "Entrance";
    pub const CHAIR: &str = "Chair";
    pub const BACK_HOTSPOT: &str = "BackHotspot";
    pub const ARMCHAIR: &str = "Armchair";
    pub const WHITEBOARD: &str = "Whiteboard";
}

// ── Shape ─────────────────────────────────────────────────────────────────────

/// Geometry of a placeable, in tile units.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    /// Ordered vertex list `(x, y)`.
    Polygon { points: Vec<(f64, f64)> },
    /// `radius: None` uses the tile-size convention.
    Circle { x: f64, y: f64, radius: Option<f64> },
}

// ── Placeable ─────────────────────────────────────────────────────────────────

/// An immutable, typed venue object.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeable {
    name:      String,
    shape:     Shape,
    /// Presentation only; the core never reads it.
    color:     [u8; 3],
    collision: bool,
}

impl Placeable {
    pub fn new(name: impl Into<String>, shape: Shape, color: [u8; 3], collision: bool) -> Self {
        Self { name: name.into(), shape, color, collision }
    }

    pub fn rectangle(name: impl Into<String>, x: f64, y: f64, width: f64, height: f64, collision: bool) -> Self {
        Self::new(name, Shape::Rectangle { x, y, width, height }, [0, 0, 0], collision)
    }

    pub fn circle(name: impl Into<String>, x: f64, y: f64, collision: bool) -> Self {
        Self::new(name, Shape::Circle { x, y, radius: None }, [0, 0, 0], collision)
    }

    pub fn polygon(name: impl Into<String>, points: Vec<(f64, f64)>, collision: bool) -> Self {
        Self::new(name, Shape::Polygon { points }, [0, 0, 0], collision)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    #[inline]
    pub fn collision(&self) -> bool {
        self.collision
    }

    /// `true` if this placeable carries the given role name.
    #[inline]
    pub fn is(&self, role: &str) -> bool {
        self.name == role
    }

    /// Position in tile units (first vertex for polygons, origin if empty).
    pub fn position(&self) -> (f64, f64) {
        match &self.shape {
            Shape::Rectangle { x, y, .. } | Shape::Circle { x, y, .. } => (*x, *y),
            Shape::Polygon { points } => points.first().copied().unwrap_or((0.0, 0.0)),
        }
    }

    // ── Footprint ─────────────────────────────────────────────────────────

    /// Every sub-cell covered by this shape, unclipped.
    pub fn footprint(&self, scale: GridScale) -> Vec<GridPos> {
        let d = scale.density();
        match &self.shape {
            Shape::Rectangle { x, y, width, height } => {
                let (left, top, w, h) = rect_cells(*x, *y, *width, *height, d);
                (top..top + h)
                    .flat_map(|row| (left..left + w).map(move |col| GridPos::new(col, row)))
                    .collect()
            }
            Shape::Circle { x, y, radius } => {
                let cx = x * d;
                let cy = y * d;
                let r = radius.unwrap_or_else(|| scale.default_circle_radius()) * d;
                let mut cells = Vec::new();
                for row in (cy - r).floor() as i32..=(cy + r).floor() as i32 {
                    for col in (cx - r).floor() as i32..=(cx + r).floor() as i32 {
                        let (dx, dy) = (col as f64 - cx, row as f64 - cy);
                        if (dx * dx + dy * dy).sqrt() <= r {
                            cells.push(GridPos::new(col, row));
                        }
                    }
                }
                cells
            }
            Shape::Polygon { points } => {
                if points.len() < 3 {
                    return Vec::new();
                }
                let scaled: Vec<(f64, f64)> = points.iter().map(|&(px, py)| (px * d, py * d)).collect();
                let (min_x, max_x, min_y, max_y) = scaled.iter().fold(
                    (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
                    |(a, b, c, e), &(px, py)| (a.min(px), b.max(px), c.min(py), e.max(py)),
                );
                let mut cells = Vec::new();
                for row in min_y.floor() as i32..=max_y.ceil() as i32 {
                    for col in min_x.floor() as i32..=max_x.ceil() as i32 {
                        if point_in_polygon(col as f64 + 0.5, row as f64 + 0.5, &scaled) {
                            cells.push(GridPos::new(col, row));
                        }
                    }
                }
                cells
            }
        }
    }

    /// `true` if `cell` is part of this shape's footprint.
    pub fn covers(&self, cell: GridPos, scale: GridScale) -> bool {
        let d = scale.density();
        match &self.shape {
            Shape::Rectangle { x, y, width, height } => {
                let (left, top, w, h) = rect_cells(*x, *y, *width, *height, d);
                (left..left + w).contains(&cell.col) && (top..top + h).contains(&cell.row)
            }
            _ => self.footprint(scale).contains(&cell),
        }
    }

    /// The sub-cell an agent targets when it is sent *to* this object:
    /// the centre for circles (chairs), the middle of the footprint for
    /// rectangles, the vertex centroid for polygons.
    pub fn anchor_cell(&self, scale: GridScale) -> GridPos {
        let d = scale.density();
        match &self.shape {
            Shape::Circle { x, y, .. } => GridPos::new((x * d) as i32, (y * d) as i32),
            Shape::Rectangle { x, y, width, height } => {
                let (left, top, w, h) = rect_cells(*x, *y, *width, *height, d);
                GridPos::new(left + w / 2, top + h / 2)
            }
            Shape::Polygon { points } => {
                let n = points.len().max(1) as f64;
                let (sx, sy) = points.iter().fold((0.0, 0.0), |(ax, ay), &(px, py)| (ax + px, ay + py));
                GridPos::new((sx / n * d) as i32, (sy / n * d) as i32)
            }
        }
    }

    /// The first sub-cell below the middle of the footprint, where a
    /// person stands to use a wall-mounted object such as a whiteboard.
    pub fn front_cell(&self, scale: GridScale) -> GridPos {
        let d = scale.density();
        match &self.shape {
            Shape::Rectangle { x, y, width, height } => {
                let (left, top, w, h) = rect_cells(*x, *y, *width, *height, d);
                GridPos::new(left + w / 2, top + h)
            }
            _ => {
                let anchor = self.anchor_cell(scale);
                let bottom = self.footprint(scale).iter().map(|c| c.row).max().unwrap_or(anchor.row);
                GridPos::new(anchor.col, bottom + 1)
            }
        }
    }

    /// A uniformly random sub-cell of the footprint, or `None` if it is empty.
    pub fn random_cell(&self, scale: GridScale, rng: &mut AgentRng) -> Option<GridPos> {
        match &self.shape {
            Shape::Rectangle { x, y, width, height } => {
                let (left, top, w, h) = rect_cells(*x, *y, *width, *height, scale.density());
                if w <= 0 || h <= 0 {
                    return None;
                }
                Some(GridPos::new(rng.gen_range(left..left + w), rng.gen_range(top..top + h)))
            }
            _ => rng.choose(&self.footprint(scale)).copied(),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `(left, top, width, height)` of a rectangle in sub-cells.
#[inline]
fn rect_cells(x: f64, y: f64, width: f64, height: f64, d: f64) -> (i32, i32, i32, i32) {
    (
        (x * d) as i32,
        (y * d) as i32,
        (width * d).max(0.0) as i32,
        (height * d).max(0.0) as i32,
    )
}

/// Ray casting: count edge crossings of a horizontal ray from `(px, py)`.
/// Odd parity means inside.
fn point_in_polygon(px: f64, py: f64, poly: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = poly.len() - 1;
    for i in 0..poly.len() {
        let (xi, yi) = poly[i];
        let (xj, yj) = poly[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
