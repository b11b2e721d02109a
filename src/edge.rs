//! Polygon edges for scan conversion

use crate::geometry::PointF;
use crate::polygon::ClipPolygon;

/// Polygon side crossing one or more scanlines
///
/// The edge is active on rows `ymin ..= ymax`
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Edge {
    pub ymin: i64,
    pub ymax: i64,
    /// x of the intersection with the current row
    pub x: f64,
    /// Increment of x per row
    pub dx: f64,
}

/// Shallow polygon side (|dy| <= |dx|) stepped one column at a time
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct AAEdge {
    /// y at the current column
    pub y: f64,
    /// Increment of y per column step, always >= 0
    pub dy: f64,
    /// Current column
    pub x: i64,
    /// Column step, 1 or -1
    pub sx: i64,
    /// Columns left to visit
    pub steps: i64,
}

/// Global edge table and the antialiasing edge list of a polygon
#[derive(Debug,Default,Clone)]
pub struct EdgeTable {
    /// Sorted by `ymin`
    pub edges: Vec<Edge>,
    /// Sorted by `y`
    pub aa_edges: Vec<AAEdge>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self { edges: vec![], aa_edges: vec![] }
    }
    pub fn clear(&mut self) {
        self.edges.clear();
        self.aa_edges.clear();
    }
    /// Build edges for every side of the implicitly closed polygon
    pub fn build(&mut self, polygon: &ClipPolygon) {
        self.clear();
        for (p1, p2) in polygon.sides() {
            if p1.approx_eq(&p2) {
                continue;
            }
            // Top to bottom
            let (p1, p2) = if p1.y > p2.y { (p2, p1) } else { (p1, p2) };
            let steep = (p1.y - p2.y).abs() > (p1.x - p2.x).abs();
            if ! steep {
                if let Some(e) = aa_edge(p1, p2) {
                    self.insert_aa_edge(e);
                }
            }
            if let Some(e) = edge(p1, p2) {
                self.insert_edge(e);
            }
        }
    }
    fn insert_edge(&mut self, e: Edge) {
        let i = self.edges.iter()
            .position(|cur| e.ymin <= cur.ymin)
            .unwrap_or(self.edges.len());
        self.edges.insert(i, e);
    }
    fn insert_aa_edge(&mut self, e: AAEdge) {
        let i = self.aa_edges.iter()
            .position(|cur| e.y <= cur.y)
            .unwrap_or(self.aa_edges.len());
        self.aa_edges.insert(i, e);
    }
}

/// Edge for the side p1 -> p2 with p1.y <= p2.y
///
/// Rows strictly below p1.y and down to p2.y are crossed
fn edge(p1: PointF, p2: PointF) -> Option<Edge> {
    let ymax = p2.y.floor() as i64;
    let ymin = p1.y.floor() as i64 + 1;
    if ymax < ymin {
        return None;
    }
    let dx = (p1.x - p2.x) / (p1.y - p2.y);
    Some(Edge { ymin, ymax, x: p1.x + dx * (ymin as f64 - p1.y), dx })
}

/// Antialiasing edge for the shallow side p1 -> p2 with p1.y <= p2.y
fn aa_edge(p1: PointF, p2: PointF) -> Option<AAEdge> {
    let dy = ((p1.y - p2.y) / (p1.x - p2.x)).abs();
    let e = if p1.x > p2.x {
        let x = p1.x.floor();
        AAEdge { x: x as i64, y: p1.y + (p1.x - x) * dy, dy, sx: -1,
                 steps: x as i64 - p2.x.ceil() as i64 + 1 }
    } else {
        let x = p1.x.ceil();
        AAEdge { x: x as i64, y: p1.y + (x - p1.x) * dy, dy, sx: 1,
                 steps: p2.x.floor() as i64 - x as i64 + 1 }
    };
    if e.steps > 0 { Some(e) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon(pts: &[(f64,f64)]) -> ClipPolygon {
        let mut p = ClipPolygon::new();
        for &pt in pts {
            p.add_point(pt.into());
        }
        p
    }

    #[test]
    fn square_edges() {
        let mut t = EdgeTable::new();
        t.build(&polygon(&[(0.0,0.0), (10.0,0.0), (10.0,10.0), (0.0,10.0)]));
        assert_eq!(t.edges.len(), 2);
        for e in &t.edges {
            assert_eq!((e.ymin, e.ymax), (1, 10));
            assert_eq!(e.dx, 0.0);
        }
        // Top and bottom sides are shallow
        assert_eq!(t.aa_edges.len(), 2);
        assert_eq!(t.aa_edges[0].y, 0.0);
        assert_eq!(t.aa_edges[0].steps, 11);
        assert_eq!(t.aa_edges[1].y, 10.0);
        assert_eq!(t.aa_edges[1].sx, -1);
    }

    #[test]
    fn edges_sorted_by_ymin() {
        let mut t = EdgeTable::new();
        t.build(&polygon(&[(0.0,5.5), (4.0,0.5), (8.0,3.2), (6.0,9.0), (1.0,7.0)]));
        for w in t.edges.windows(2) {
            assert!(w[0].ymin <= w[1].ymin);
        }
        for w in t.aa_edges.windows(2) {
            assert!(w[0].y <= w[1].y);
        }
    }

    #[test]
    fn sloped_edge_intercept() {
        let e = edge(PointF::new(0.0, 0.5), PointF::new(4.0, 4.5));
        assert_eq!(e, Some(Edge { ymin: 1, ymax: 4, x: 0.5, dx: 1.0 }));
        // Does not cross a row
        assert_eq!(edge(PointF::new(0.0, 1.2), PointF::new(0.0, 1.8)), None);
    }

    #[test]
    fn shallow_edge_steps() {
        let e = aa_edge(PointF::new(0.5, 0.0), PointF::new(4.5, 2.0));
        assert_eq!(e, Some(AAEdge { y: 0.25, dy: 0.5, x: 1, sx: 1, steps: 4 }));
        let e = aa_edge(PointF::new(4.5, 0.0), PointF::new(0.5, 2.0));
        assert_eq!(e, Some(AAEdge { y: 0.25, dy: 0.5, x: 4, sx: -1, steps: 4 }));
        assert_eq!(aa_edge(PointF::new(0.2, 0.0), PointF::new(0.8, 0.1)), None);
    }
}
