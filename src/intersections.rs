//! Sub-pixel threshold crossings on the sample grid.
//!
//! A cell `(x, y)` is the unit square whose top-left corner is sample
//! `(x, y)`. For each cell we record where the intensity crosses
//! [`crate::THRESHOLD`] along its top edge (towards `(x + 1, y)`) and its left
//! edge (towards `(x, y + 1)`) as a linear interpolation parameter `t`:
//!
//! ```text
//! t = (THRESHOLD - v0) / (v1 - v0)
//! ```
//!
//! A flat edge (`v1 == v0`) or a crossing beyond the far sample (`t > 1`) is
//! stored as `None`. Parameters at or below zero are kept; the edge extractor
//! decides which of them are usable.
//!
//! Rows are independent, so the scan runs as a row-parallel map when the
//! `parallel` feature is enabled and the crossing count is the sum of the
//! per-row counts.
use crate::image::{ImageU8, ImageView};
use crate::THRESHOLD;
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Crossing parameters of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellCrossings {
    pub top: Option<f32>,
    pub left: Option<f32>,
}

/// Per-cell crossings over a `(w - 1) x (h - 1)` grid.
#[derive(Clone, Debug, Default)]
pub struct IntersectionMap {
    w: usize,
    h: usize,
    cells: Vec<CellCrossings>,
}

impl IntersectionMap {
    /// Cells per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    /// Rows of cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> CellCrossings {
        self.cells[y * self.w + x]
    }

    /// Crossing on the top edge of `(x, y)`; `None` outside the grid.
    #[inline]
    pub fn top(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.w && y < self.h {
            self.cell(x, y).top
        } else {
            None
        }
    }

    /// Crossing on the left edge of `(x, y)`; `None` outside the grid.
    #[inline]
    pub fn left(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.w && y < self.h {
            self.cell(x, y).left
        } else {
            None
        }
    }
}

/// Intersection map plus the number of crossings that land on a cell edge.
#[derive(Clone, Debug, Default)]
pub struct Intersections {
    pub map: IntersectionMap,
    /// Crossings with parameter in `[0, 1)`. Diagnostic only.
    pub count: usize,
}

impl Intersections {
    /// At least two crossings are needed to form one segment.
    #[inline]
    pub fn has_contour(&self) -> bool {
        self.count > 1
    }
}

/// Interpolation parameter of the threshold crossing between `v0` and `v1`.
#[inline]
pub fn crossing_parameter(v0: u8, v1: u8) -> Option<f32> {
    let denominator = v1 as f32 - v0 as f32;
    if denominator == 0.0 {
        return None;
    }
    let t = (THRESHOLD as f32 - v0 as f32) / denominator;
    (t <= 1.0).then_some(t)
}

#[inline]
fn on_edge(t: Option<f32>) -> bool {
    matches!(t, Some(t) if (0.0..1.0).contains(&t))
}

fn scan_row(row: &[u8], next_row: &[u8], out: &mut [CellCrossings]) -> usize {
    let mut found = 0;
    for (x, cell) in out.iter_mut().enumerate() {
        let v0 = row[x];
        let top = crossing_parameter(v0, row[x + 1]);
        let left = crossing_parameter(v0, next_row[x]);
        found += on_edge(top) as usize + on_edge(left) as usize;
        *cell = CellCrossings { top, left };
    }
    found
}

/// Scan a single-channel plane for threshold crossings.
pub fn find_intersections(plane: &ImageU8<'_>) -> Intersections {
    let w = plane.width().saturating_sub(1);
    let h = plane.height().saturating_sub(1);
    if w == 0 || h == 0 {
        debug!(
            "find_intersections: {}x{} plane has no cells",
            plane.width(),
            plane.height()
        );
        return Intersections::default();
    }

    let mut cells = vec![CellCrossings::default(); w * h];

    #[cfg(feature = "parallel")]
    let count: usize = cells
        .par_chunks_mut(w)
        .enumerate()
        .map(|(y, out)| scan_row(plane.row(y), plane.row(y + 1), out))
        .sum();

    #[cfg(not(feature = "parallel"))]
    let count: usize = cells
        .chunks_mut(w)
        .zip(plane.rows().zip(plane.rows().skip(1)))
        .map(|(out, (row, next_row))| scan_row(row, next_row, out))
        .sum();

    debug!("find_intersections: {count} crossings over {w}x{h} cells");

    Intersections {
        map: IntersectionMap { w, h, cells },
        count,
    }
}
