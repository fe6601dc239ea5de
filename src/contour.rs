//! Marching-squares style edge extraction from an [`IntersectionMap`].
//!
//! Each cell contributes up to four crossing points, gathered in the order
//! top, bottom, left, right:
//!
//! - top/bottom crossings are accepted for `t` in `[0, 1)`;
//! - left/right crossings only for `t` strictly inside `(0, 1)`.
//!
//! The bottom side of a cell is the top side of the cell below and its right
//! side is the left side of the cell to the right; cells on the last row or
//! column see `None` there.
//!
//! Two or more points emit a segment through the first two. Four points
//! (a saddle cell) also emit one through the last two. The saddle pairing
//! follows collection order and does not try to pick the topologically
//! correct diagonal.
use crate::intersections::IntersectionMap;
use serde::{Deserialize, Serialize};

/// Contour piece inside one cell, in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSegment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl EdgeSegment {
    pub fn new(p0: [f32; 2], p1: [f32; 2]) -> Self {
        Self { p0, p1 }
    }

    pub fn midpoint(&self) -> [f32; 2] {
        [
            (self.p0[0] + self.p1[0]) * 0.5,
            (self.p0[1] + self.p1[1]) * 0.5,
        ]
    }

    /// Both endpoints within Chebyshev distance `radius` of `p`.
    #[inline]
    pub fn within(&self, p: [f32; 2], radius: f32) -> bool {
        chebyshev(self.p0, p) <= radius && chebyshev(self.p1, p) <= radius
    }
}

#[inline]
fn chebyshev(a: [f32; 2], b: [f32; 2]) -> f32 {
    (a[0] - b[0]).abs().max((a[1] - b[1]).abs())
}

/// Up to four crossing points of a single cell.
#[derive(Default)]
struct CellPoints {
    points: [[f32; 2]; 4],
    len: usize,
}

impl CellPoints {
    #[inline]
    fn push(&mut self, p: [f32; 2]) {
        self.points[self.len] = p;
        self.len += 1;
    }
}

#[inline]
fn horizontal(t: Option<f32>) -> Option<f32> {
    t.filter(|&t| (0.0..1.0).contains(&t))
}

#[inline]
fn vertical(t: Option<f32>) -> Option<f32> {
    t.filter(|&t| t > 0.0 && t < 1.0)
}

/// Convert crossings into contour segments.
pub fn extract_edges(map: &IntersectionMap) -> Vec<EdgeSegment> {
    let mut edges = Vec::new();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let (fx, fy) = (x as f32, y as f32);
            let mut cell = CellPoints::default();

            if let Some(t) = horizontal(map.top(x, y)) {
                cell.push([fx + t, fy]);
            }
            if let Some(t) = horizontal(map.top(x, y + 1)) {
                cell.push([fx + t, fy + 1.0]);
            }
            if let Some(t) = vertical(map.left(x, y)) {
                cell.push([fx, fy + t]);
            }
            if let Some(t) = vertical(map.left(x + 1, y)) {
                cell.push([fx + 1.0, fy + t]);
            }

            let p = &cell.points;
            if cell.len >= 2 {
                edges.push(EdgeSegment::new(p[0], p[1]));
            }
            if cell.len == 4 {
                edges.push(EdgeSegment::new(p[2], p[3]));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;
    use crate::intersections::find_intersections;

    fn edges_of(plane: &GrayImageU8) -> Vec<EdgeSegment> {
        extract_edges(&find_intersections(&plane.as_view()).map)
    }

    #[test]
    fn vertical_step_forms_one_polyline() {
        // Columns < 4 dark, >= 4 bright, crossing at t = 0.5 between 3 and 4.
        let plane = GrayImageU8::from_fn(8, 6, |x, _| if x < 4 { 27 } else { 227 });
        let edges = edges_of(&plane);
        // The last row of cells has no bottom neighbour, so one segment per
        // pair of consecutive rows.
        assert_eq!(edges.len(), 6 - 2);
        for (i, e) in edges.iter().enumerate() {
            assert!((e.p0[0] - 3.5).abs() < 1e-6 && (e.p1[0] - 3.5).abs() < 1e-6);
            assert_eq!(e.p0[1], i as f32);
            assert_eq!(e.p1[1], i as f32 + 1.0);
        }
        for pair in edges.windows(2) {
            assert_eq!(pair[0].p1, pair[1].p0, "polyline must be contiguous");
        }
    }

    #[test]
    fn flat_plane_has_no_edges() {
        let plane = GrayImageU8::from_fn(5, 5, |_, _| 0);
        assert!(edges_of(&plane).is_empty());
    }

    #[test]
    fn vertical_sides_exclude_zero_parameter() {
        // Sample (0, 0) sits exactly on the threshold: the left crossing of
        // cell (0, 0) has t = 0 and must be ignored, while the top crossing
        // with t = 0 is kept.
        let plane = GrayImageU8::new(3, 3, vec![127, 0, 0, 0, 0, 0, 0, 0, 0]);
        let found = find_intersections(&plane.as_view());
        assert_eq!(found.map.left(0, 0), Some(0.0));
        assert_eq!(found.map.top(0, 0), Some(0.0));
        assert!(extract_edges(&found.map).is_empty());
    }

    #[test]
    fn crossings_on_far_sample_are_rejected_on_every_side() {
        // Steps reaching exactly 127 on the far sample store t = 1.
        let columns = GrayImageU8::from_fn(4, 3, |x, _| if x < 2 { 0 } else { 127 });
        let found = find_intersections(&columns.as_view());
        assert_eq!(found.map.top(1, 0), Some(1.0));
        assert_eq!(found.count, 0);
        assert!(extract_edges(&found.map).is_empty());

        let rows = GrayImageU8::from_fn(3, 4, |_, y| if y < 2 { 0 } else { 127 });
        let found = find_intersections(&rows.as_view());
        assert_eq!(found.map.left(0, 1), Some(1.0));
        assert_eq!(found.count, 0);
        assert!(extract_edges(&found.map).is_empty());
    }

    #[test]
    fn saddle_cell_pairs_by_collection_order() {
        // Diagonal bright corners in a 3x3 grid: cell (0, 0) sees crossings
        // on all four sides.
        let plane = GrayImageU8::new(3, 3, vec![255, 0, 0, 0, 255, 0, 0, 0, 0]);
        let edges = edges_of(&plane);
        let saddle: Vec<&EdgeSegment> = edges
            .iter()
            .filter(|e| e.midpoint()[0] < 1.0 && e.midpoint()[1] < 1.0)
            .collect();
        assert_eq!(saddle.len(), 2);
        let half = 128.0 / 255.0;
        let inv = 1.0 - half;
        // top then bottom
        assert!((saddle[0].p0[0] - half).abs() < 1e-5 && saddle[0].p0[1] == 0.0);
        assert!((saddle[0].p1[0] - inv).abs() < 1e-5 && saddle[0].p1[1] == 1.0);
        // left then right
        assert!(saddle[1].p0[0] == 0.0 && (saddle[1].p0[1] - half).abs() < 1e-5);
        assert!(saddle[1].p1[0] == 1.0 && (saddle[1].p1[1] - inv).abs() < 1e-5);
    }

    #[test]
    fn within_uses_both_endpoints() {
        let e = EdgeSegment::new([0.0, 0.0], [4.0, 0.0]);
        assert!(e.within([2.0, 1.0], 2.0));
        assert!(!e.within([0.0, 0.0], 2.0));
    }
}
