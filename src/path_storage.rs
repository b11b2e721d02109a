//! Clip Path Storage

use crate::geometry::PointF;
use crate::geometry::Spline;
use crate::polygon::ClipPolygon;

use log::{debug, error};

/// Default flatness tolerance for cubic curves
pub const FLATNESS_EPS : f64 = 0.01;

/// Subdivision limit for a single cubic curve
const MAX_SUBDIVISION_DEPTH : usize = 16;

const QUARTER_IN_DEGREE : i32 = 90;
const CIRCLE_IN_DEGREE : i32 = 360;

/// Circle approximation constant for a quarter arc
///
/// h(a) = (4 / 3) * (1 - cos(a / 2)) / sin(a / 2), h(90) = 0.552
const QUARTER_ARC_K : f64 = 0.552;

#[derive(Debug,Copy,Clone,PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    /// Cubic curve; always three consecutive vertices: control1, control2, end
    Curve4,
}
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::MoveTo
    }
}

#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub cmd: PathCommand,
}

impl Vertex {
    pub fn new(p: PointF, cmd: PathCommand) -> Self {
        Self { x: p.x, y: p.y, cmd }
    }
    pub fn point(&self) -> PointF {
        PointF::new(self.x, self.y)
    }
}

/// Path to clip against
///
/// The path is closed automatically when scanned. Only a single,
/// non-self-intersecting contour is supported.
///
///     use scanclip::{ClipPath, ClipPolygon, PointF};
///
///     let mut path = ClipPath::new();
///     path.move_to(PointF::new(0.0, 0.0))
///         .line_to(PointF::new(10.0, 0.0))
///         .line_to(PointF::new(10.0, 10.0));
///
///     let mut poly = ClipPolygon::new();
///     path.generate_polygon(&mut poly);
///     assert_eq!(poly.len(), 3);
///
#[derive(Debug,Clone)]
pub struct ClipPath {
    pub vertices: Vec<Vertex>,
    start: PointF,
    flatness: f64,
}

impl Default for ClipPath {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipPath {
    pub fn new() -> Self {
        Self { vertices: vec![], start: PointF::default(), flatness: FLATNESS_EPS }
    }
    /// Set the flatness tolerance used when decomposing curves
    pub fn set_flatness(&mut self, eps: f64) -> &mut Self {
        self.flatness = eps;
        self
    }
    pub fn flatness(&self) -> f64 {
        self.flatness
    }
    /// Start point of the current sub-path
    pub fn start_pos(&self) -> PointF {
        self.start
    }
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn remove_all(&mut self) {
        self.vertices.clear();
        self.start = PointF::default();
    }
    fn last_cmd(&self) -> Option<PathCommand> {
        self.vertices.last().map(|v| v.cmd)
    }

    /// Start a new sub-path at `p`
    ///
    /// A move directly following another move replaces it
    pub fn move_to(&mut self, p: PointF) -> &mut Self {
        self.start = p;
        if self.last_cmd() == Some(PathCommand::MoveTo) {
            if let Some(last) = self.vertices.last_mut() {
                *last = Vertex::new(p, PathCommand::MoveTo);
            }
            return self;
        }
        self.vertices.push( Vertex::new(p, PathCommand::MoveTo) );
        self
    }
    /// Straight line to `p`; an empty path moves to `p` instead
    pub fn line_to(&mut self, p: PointF) -> &mut Self {
        if self.vertices.is_empty() {
            return self.move_to(p);
        }
        self.vertices.push( Vertex::new(p, PathCommand::LineTo) );
        self
    }
    /// Cubic curve to `end`; an empty path moves to `end` instead
    pub fn curve_to(&mut self, control1: PointF, control2: PointF, end: PointF) -> &mut Self {
        if self.vertices.is_empty() {
            return self.move_to(end);
        }
        self.vertices.push( Vertex::new(control1, PathCommand::Curve4) );
        self.vertices.push( Vertex::new(control2, PathCommand::Curve4) );
        self.vertices.push( Vertex::new(end,      PathCommand::Curve4) );
        self
    }

    /// Circular arc around `center` from `start_angle` to `end_angle`
    ///
    /// Angles are in degrees, 0 is at 3 o'clock and angles increase
    /// clockwise (y points down). The arc always runs from start to end
    /// in the increasing direction. Each piece of at most 90 degrees
    /// becomes one cubic curve.
    pub fn arc(&mut self, center: PointF, radius: f64, start_angle: i32, end_angle: i32) -> &mut Self {
        if radius <= 0.0 {
            return self;
        }
        let mut start = start_angle.rem_euclid(CIRCLE_IN_DEGREE);
        let mut end = end_angle.rem_euclid(CIRCLE_IN_DEGREE);
        if start > end {
            end += CIRCLE_IN_DEGREE;
        }
        let mut quadrant = QUARTER_IN_DEGREE;
        while start < end {
            while quadrant <= start {
                quadrant += QUARTER_IN_DEGREE;
            }
            let stop = if quadrant > end { end } else { quadrant };
            self.arc_inner(center, radius, start, stop);
            start = stop;
        }
        self
    }

    fn arc_inner(&mut self, center: PointF, radius: f64, start_angle: i32, end_angle: i32) {
        let a0 = f64::from(start_angle).to_radians();
        let a1 = f64::from(end_angle).to_radians();
        let p0 = PointF::new(center.x + radius * a0.cos(), center.y + radius * a0.sin());
        let p3 = PointF::new(center.x + radius * a1.cos(), center.y + radius * a1.sin());
        // 4/3 * tan(angle / 4)
        let k = 4.0 * ((a1 - a0) / 4.0).tan() / 3.0;
        let p1 = PointF::new(p0.x - k * (p0.y - center.y), p0.y + k * (p0.x - center.x));
        let p2 = PointF::new(p3.x + k * (p3.y - center.y), p3.y - k * (p3.x - center.x));
        if self.vertices.is_empty() {
            self.move_to(p0);
        } else {
            self.line_to(p0);
        }
        self.curve_to(p1, p2, p3);
    }

    /// Full circle as four quarter curves
    ///
    /// Starts at 3 o'clock and runs clockwise
    pub fn circle(&mut self, center: PointF, radius: f64) -> &mut Self {
        if radius <= 0.0 {
            return self;
        }
        let h = QUARTER_ARC_K * radius;
        let (cx, cy, r) = (center.x, center.y, radius);
        self.move_to(PointF::new(cx + r, cy));
        self.curve_to(PointF::new(cx + r, cy + h),
                      PointF::new(cx + h, cy + r),
                      PointF::new(cx,     cy + r));
        self.curve_to(PointF::new(cx - h, cy + r),
                      PointF::new(cx - r, cy + h),
                      PointF::new(cx - r, cy));
        self.curve_to(PointF::new(cx - r, cy - h),
                      PointF::new(cx - h, cy - r),
                      PointF::new(cx,     cy - r));
        self.curve_to(PointF::new(cx + h, cy - r),
                      PointF::new(cx + r, cy - h),
                      PointF::new(cx + r, cy));
        self
    }

    /// Flatten the path into `polygon`
    ///
    /// Stops at a second move as only one contour is supported. A
    /// truncated curve stops generation and leaves a partial polygon.
    pub fn generate_polygon(&self, polygon: &mut ClipPolygon) {
        if self.vertices.iter().all(|v| v.cmd == PathCommand::MoveTo) {
            return;
        }
        let mut i = 0;
        while i < self.vertices.len() {
            let v = self.vertices[i];
            match v.cmd {
                PathCommand::MoveTo => {
                    if ! polygon.is_empty() {
                        debug!("GENERATE POLYGON: second move at vertex {} ignored", i);
                        return;
                    }
                    polygon.add_point(v.point());
                    i += 1;
                },
                PathCommand::LineTo => {
                    polygon.add_point(v.point());
                    i += 1;
                },
                PathCommand::Curve4 => {
                    let start = match polygon.last() {
                        Some(p) => p,
                        None => {
                            error!("GENERATE POLYGON: curve without a start point");
                            return;
                        }
                    };
                    let ctrl = &self.vertices[i .. ];
                    if ctrl.len() < 3 || ctrl[..3].iter().any(|c| c.cmd != PathCommand::Curve4) {
                        error!("GENERATE POLYGON: truncated curve at vertex {}", i);
                        return;
                    }
                    let s = Spline::new(start, ctrl[0].point(), ctrl[1].point(), ctrl[2].point());
                    self.spline_decompose(&s, polygon);
                    i += 3;
                },
            }
        }
    }

    /// Adaptive subdivision of a cubic curve
    ///
    /// Pieces are kept on a stack so the output stays in curve order.
    /// The start point of each flat piece is emitted, then the end point.
    fn spline_decompose(&self, s: &Spline, polygon: &mut ClipPolygon) {
        let mut stack = vec![(*s, 0)];
        while let Some((s1, depth)) = stack.pop() {
            if depth >= MAX_SUBDIVISION_DEPTH || s1.is_flat(self.flatness) {
                polygon.add_point(s1.a);
            } else {
                let (first, second) = s1.split();
                stack.push((second, depth + 1));
                stack.push((first, depth + 1));
            }
        }
        polygon.add_point(s.d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> PointF {
        PointF::new(x, y)
    }

    fn flatten(path: &ClipPath) -> ClipPolygon {
        let mut poly = ClipPolygon::new();
        path.generate_polygon(&mut poly);
        poly
    }

    #[test]
    fn consecutive_moves_collapse() {
        let mut path = ClipPath::new();
        path.move_to(pt(1.0, 1.0)).move_to(pt(2.0, 2.0));
        assert_eq!(path.vertices.len(), 1);
        assert_eq!(path.vertices[0].point(), pt(2.0, 2.0));
        assert_eq!(path.start_pos(), pt(2.0, 2.0));
    }

    #[test]
    fn first_line_or_curve_is_a_move() {
        let mut path = ClipPath::new();
        path.line_to(pt(3.0, 4.0));
        assert_eq!(path.vertices, vec![Vertex::new(pt(3.0, 4.0), PathCommand::MoveTo)]);

        let mut path = ClipPath::new();
        path.curve_to(pt(1.0, 1.0), pt(2.0, 2.0), pt(5.0, 6.0));
        assert_eq!(path.vertices, vec![Vertex::new(pt(5.0, 6.0), PathCommand::MoveTo)]);
    }

    #[test]
    fn move_only_path_is_empty_polygon() {
        let mut path = ClipPath::new();
        path.move_to(pt(3.0, 3.0));
        assert!(flatten(&path).is_empty());
    }

    #[test]
    fn second_contour_is_ignored() {
        let mut path = ClipPath::new();
        path.move_to(pt(0.0, 0.0)).line_to(pt(4.0, 0.0)).line_to(pt(4.0, 4.0))
            .move_to(pt(10.0, 10.0)).line_to(pt(20.0, 10.0));
        let poly = flatten(&path);
        assert_eq!(poly.points, vec![pt(0.0, 0.0), pt(4.0, 0.0), pt(4.0, 4.0)]);
    }

    #[test]
    fn truncated_curve_stops_generation() {
        let mut path = ClipPath::new();
        path.move_to(pt(0.0, 0.0)).line_to(pt(4.0, 0.0));
        path.vertices.push(Vertex::new(pt(5.0, 5.0), PathCommand::Curve4));
        path.vertices.push(Vertex::new(pt(6.0, 5.0), PathCommand::Curve4));
        let poly = flatten(&path);
        assert_eq!(poly.points, vec![pt(0.0, 0.0), pt(4.0, 0.0)]);
    }

    #[test]
    fn zero_radius_adds_nothing() {
        let mut path = ClipPath::new();
        path.circle(pt(5.0, 5.0), 0.0);
        path.arc(pt(5.0, 5.0), -1.0, 0, 90);
        assert!(path.is_empty());
        assert!(flatten(&path).is_empty());
    }

    #[test]
    fn circle_points_lie_near_radius() {
        let mut path = ClipPath::new();
        let (c, r) = (pt(50.0, 40.0), 20.0);
        path.circle(c, r);
        assert_eq!(path.vertices.len(), 13);
        let poly = flatten(&path);
        assert!(poly.len() > 8);
        for p in &poly.points {
            let d = ((p.x - c.x).powi(2) + (p.y - c.y).powi(2)).sqrt();
            assert!((d - r).abs() < 0.1, "point {:?} at distance {}", p, d);
        }
        assert_eq!(poly.points[0], pt(70.0, 40.0));
        // Clockwise: second point is below the start (y down)
        assert!(poly.points[1].y > 40.0);
    }

    #[test]
    fn arc_quadrants() {
        let mut path = ClipPath::new();
        path.arc(pt(0.0, 0.0), 10.0, 0, 180);
        // move + (curve) + (line + curve)
        let n_curves = path.vertices.iter().filter(|v| v.cmd == PathCommand::Curve4).count();
        assert_eq!(n_curves, 6);
        let end = path.vertices.last().map(|v| v.point()).unwrap_or_default();
        assert!((end.x + 10.0).abs() < 1e-9);
        assert!(end.y.abs() < 1e-9);

        // Wrapping arc 270 -> 45 passes through 0
        let mut path = ClipPath::new();
        path.arc(pt(0.0, 0.0), 10.0, -90, 45);
        let n_curves = path.vertices.iter().filter(|v| v.cmd == PathCommand::Curve4).count();
        assert_eq!(n_curves, 6);
        let first = path.vertices[0].point();
        assert!(first.x.abs() < 1e-9);
        assert!((first.y + 10.0).abs() < 1e-9);
    }

    fn bump(height: f64) -> usize {
        let mut path = ClipPath::new();
        path.move_to(pt(0.0, 0.0))
            .curve_to(pt(10.0, height), pt(30.0, height), pt(40.0, 0.0));
        flatten(&path).len()
    }

    #[test]
    fn flattening_grows_with_deviation() {
        let mut prev = bump(0.0);
        assert_eq!(prev, 2);
        for h in 1 .. 40 {
            let n = bump(f64::from(h) * 2.5);
            assert!(n >= prev, "height {} produced {} < {}", h, n, prev);
            prev = n;
        }
        assert!(prev > 2);
    }

    #[test]
    fn flatness_is_configurable() {
        let mut coarse = ClipPath::new();
        coarse.set_flatness(0.5).circle(pt(0.0, 0.0), 50.0);
        let mut fine = ClipPath::new();
        fine.set_flatness(0.0001).circle(pt(0.0, 0.0), 50.0);
        assert!(flatten(&fine).len() > flatten(&coarse).len());
    }

    #[test]
    fn larger_circles_get_more_points() {
        let counts : Vec<_> = [5.0, 20.0, 100.0, 400.0].iter()
            .map(|&r| {
                let mut path = ClipPath::new();
                path.circle(pt(0.0, 0.0), r);
                flatten(&path).len()
            })
            .collect();
        assert_eq!(counts, vec![33, 65, 129, 257]);
    }
}
