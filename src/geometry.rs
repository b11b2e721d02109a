//! Points, Bounds and Cubic Splines

/// Tolerance used when comparing floating point coordinates
pub const POINT_EPSILON : f64 = 1e-6;

/// Point in floating point coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Check if two points are equal within [POINT_EPSILON]
    ///
    /// [POINT_EPSILON]: constant.POINT_EPSILON.html
    pub fn approx_eq(&self, other: &PointF) -> bool {
        (self.x - other.x).abs() < POINT_EPSILON &&
            (self.y - other.y).abs() < POINT_EPSILON
    }
    /// Point half way between `self` and `other`
    pub fn mid(&self, other: &PointF) -> PointF {
        PointF::new(self.x + (other.x - self.x) / 2.0,
                    self.y + (other.y - self.y) / 2.0)
    }
}

impl From<(f64,f64)> for PointF {
    fn from(p: (f64,f64)) -> Self {
        PointF::new(p.0, p.1)
    }
}

/// Axis aligned Rectangle in floating point coordinates
///
/// Bounds are inclusive; a single point has zero width and height
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct RectF {
    /// Minimum x value
    pub left: f64,
    /// Minimum y value
    pub top: f64,
    /// Maximum x value
    pub right: f64,
    /// Maximum y value
    pub bottom: f64,
}

impl RectF {
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (left, right) = if x1 > x2 { (x2,x1) } else { (x1,x2) };
        let (top, bottom) = if y1 > y2 { (y2,y1) } else { (y1,y2) };
        Self { left, top, right, bottom }
    }
    /// Rectangle containing only the point `p`
    pub fn at(p: PointF) -> Self {
        Self { left: p.x, top: p.y, right: p.x, bottom: p.y }
    }
    /// Expand if the point is outside
    pub fn expand(&mut self, p: PointF) {
        if p.x < self.left   { self.left   = p.x; }
        if p.x > self.right  { self.right  = p.x; }
        if p.y < self.top    { self.top    = p.y; }
        if p.y > self.bottom { self.bottom = p.y; }
    }
    /// Check if the point is inside or on the boundary
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.left && p.x <= self.right &&
            p.y >= self.top && p.y <= self.bottom
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Cubic Bezier segment
///
/// `a` and `d` are the end points, `b` and `c` the control points
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Spline {
    pub a: PointF,
    pub b: PointF,
    pub c: PointF,
    pub d: PointF,
}

impl Spline {
    pub fn new(a: PointF, b: PointF, c: PointF, d: PointF) -> Self {
        Self { a, b, c, d }
    }
    /// Split the curve at t = 0.5 using de Casteljau's construction
    ///
    /// Returns the first and second halves
    pub fn split(&self) -> (Spline, Spline) {
        let ab   = self.a.mid(&self.b);
        let bc   = self.b.mid(&self.c);
        let cd   = self.c.mid(&self.d);
        let abbc = ab.mid(&bc);
        let bccd = bc.mid(&cd);
        let e    = abbc.mid(&bccd);
        (Spline::new(self.a, ab, abbc, e),
         Spline::new(e, bccd, cd, self.d))
    }
    /// Check if the chord `a` -> `d` is a good enough fit for the curve
    ///
    /// The squared cross products of `b` and `c` with the chord must be at
    /// most `eps * |ad|^2`, so both control points lie within `sqrt(eps)`
    /// of the chord. Larger curves are split into more pieces.
    pub fn is_flat(&self, eps: f64) -> bool {
        let dx = self.d.x - self.a.x;
        let dy = self.d.y - self.a.y;
        let len2 = dx * dx + dy * dy;
        // cross = distance * |ad|
        let cross = |p: &PointF| dy * (p.x - self.a.x) - dx * (p.y - self.a.y);
        let cb = cross(&self.b);
        let cc = cross(&self.c);
        let limit = eps * len2;
        cb * cb <= limit && cc * cc <= limit
    }
}
