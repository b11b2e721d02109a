//! Flattened polygon

use crate::geometry::PointF;
use crate::geometry::RectF;

/// Closed polygon produced by flattening a [ClipPath]
///
/// Consecutive duplicate points are dropped on insertion and the bounding
/// rectangle is updated as points are added.
///
/// [ClipPath]: ../path_storage/struct.ClipPath.html
#[derive(Debug,Default,Clone)]
pub struct ClipPolygon {
    pub points: Vec<PointF>,
    pub bound: RectF,
}

impl ClipPolygon {
    pub fn new() -> Self {
        Self { points: vec![], bound: RectF::default() }
    }
    /// Remove all points and reset the bound
    pub fn clear(&mut self) {
        self.points.clear();
        self.bound = RectF::default();
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Last point added
    pub fn last(&self) -> Option<PointF> {
        self.points.last().copied()
    }
    /// Add a point
    ///
    /// Points equal to the previous point are ignored
    ///
    ///     use scanclip::{ClipPolygon, PointF};
    ///
    ///     let mut p = ClipPolygon::new();
    ///     p.add_point(PointF::new(1.0, 1.0));
    ///     p.add_point(PointF::new(1.0, 1.0));
    ///     p.add_point(PointF::new(4.0, -2.0));
    ///     assert_eq!(p.len(), 2);
    ///     assert_eq!(p.bound.top, -2.0);
    ///     assert_eq!(p.bound.right, 4.0);
    ///
    pub fn add_point(&mut self, p: PointF) {
        match self.points.last() {
            None => self.bound = RectF::at(p),
            Some(last) if last.approx_eq(&p) => return,
            Some(_) => self.bound.expand(p),
        }
        self.points.push(p);
    }
    /// Sides of the implicitly closed polygon, including last -> first
    pub fn sides(&self) -> impl Iterator<Item = (PointF, PointF)> + '_ {
        let n = self.points.len();
        (0 .. n).map(move |i| (self.points[i], self.points[(i+1) % n]))
    }
    /// Check that no two non-adjacent sides cross each other
    ///
    /// Only proper crossings are detected; sides touching at an end point
    /// are allowed.
    pub fn is_simple(&self) -> bool {
        let sides : Vec<_> = self.sides()
            .filter(|(a,b)| ! a.approx_eq(b))
            .collect();
        let n = sides.len();
        for i in 0 .. n {
            for j in i+2 .. n {
                if i == 0 && j == n-1 {
                    continue;
                }
                let (p1,p2) = sides[i];
                let (p3,p4) = sides[j];
                if segments_cross(p1, p2, p3, p4) {
                    return false;
                }
            }
        }
        true
    }
}

fn orientation(a: PointF, b: PointF, c: PointF) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn segments_cross(p1: PointF, p2: PointF, p3: PointF, p4: PointF) -> bool {
    let d1 = orientation(p3, p4, p1);
    let d2 = orientation(p3, p4, p2);
    let d3 = orientation(p1, p2, p3);
    let d4 = orientation(p1, p2, p4);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0)) &&
        ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}
