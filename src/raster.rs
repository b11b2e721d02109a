//! Scanline clipping engine

use crate::edge::Edge;
use crate::edge::EdgeTable;
use crate::math::{coverage_to_opa, ipart, rfpart};
use crate::path_storage::ClipPath;
use crate::polygon::ClipPolygon;
use crate::scan::{SpanList, OPA_OPAQUE};
use crate::Blitter;

use log::{debug, trace, warn};

/// Converts a [ClipPath] into antialiased spans, one row at a time
///
/// Working storage is kept between calls and reused.
///
///     use scanclip::{ClipPath, ClipUtils, PointF, SpanRecorder};
///
///     let mut path = ClipPath::new();
///     path.move_to(PointF::new(0.0, 0.0))
///         .line_to(PointF::new(4.0, 0.0))
///         .line_to(PointF::new(4.0, 4.0))
///         .line_to(PointF::new(0.0, 4.0));
///
///     let mut rec = SpanRecorder::new();
///     ClipUtils::new().perform_scan(&path, &mut rec);
///     assert_eq!(rec.rows.len(), 5);
///     assert_eq!(rec.finished, 1);
///
/// [ClipPath]: ../path_storage/struct.ClipPath.html
#[derive(Debug,Default)]
pub struct ClipUtils {
    polygon: ClipPolygon,
    table: EdgeTable,
    active: Vec<Edge>,
    /// Spans of the current row
    span0: SpanList,
    /// Spans already pushed into the next row by shallow edges
    span1: SpanList,
    min_y: i64,
    max_y: i64,
}

impl ClipUtils {
    pub fn new() -> Self {
        Self::default()
    }
    /// Reserve room for `n` spans per row
    pub fn with_capacity(n: usize) -> Self {
        Self { span0: SpanList::with_capacity(n),
               span1: SpanList::with_capacity(n),
               .. Self::default()
        }
    }
    /// First and last row of the most recent scan
    pub fn scan_bounds(&self) -> (i64, i64) {
        (self.min_y, self.max_y)
    }

    /// Scan `path` and send every row to `blitter`
    ///
    /// Rows from `ceil(top)` to `floor(bottom)` of the flattened path are
    /// passed to [Blitter::draw_hor_span] in increasing order, followed by
    /// a single [Blitter::finish]. An empty path only calls `finish`.
    ///
    /// The path must not intersect itself; this is checked in debug builds.
    ///
    /// [Blitter::draw_hor_span]: ../trait.Blitter.html#tymethod.draw_hor_span
    /// [Blitter::finish]: ../trait.Blitter.html#tymethod.finish
    pub fn perform_scan<B: Blitter + ?Sized>(&mut self, path: &ClipPath, blitter: &mut B) {
        self.create_edge_list(path);
        if ! self.polygon.is_empty() {
            debug_assert!(self.polygon.is_simple(), "self-intersecting clip path");
            for y in self.min_y ..= self.max_y {
                self.sweep_scanline(y, blitter);
            }
        }
        blitter.finish();
        self.clear_span_table();
    }

    fn create_edge_list(&mut self, path: &ClipPath) {
        self.polygon.clear();
        path.generate_polygon(&mut self.polygon);
        self.table.build(&self.polygon);
        if self.polygon.is_empty() {
            self.min_y = 0;
            self.max_y = -1;
        } else {
            self.min_y = self.polygon.bound.top.ceil() as i64;
            self.max_y = self.polygon.bound.bottom.floor() as i64;
        }
        debug!("CREATE EDGE LIST: points {} edges {} aa edges {} rows {} ..= {}",
               self.polygon.len(), self.table.edges.len(),
               self.table.aa_edges.len(), self.min_y, self.max_y);
    }

    fn sweep_scanline<B: Blitter + ?Sized>(&mut self, y: i64, blitter: &mut B) {
        self.draw_anti_aliased_points(y);
        self.activate_edges(y);
        self.fill_spans();

        // Retire finished edges, advance the rest
        self.active.retain_mut(|e| {
            if e.ymax == y {
                false
            } else {
                e.x += e.dx;
                true
            }
        });

        self.span0.merge();
        trace!("SWEEP SCANLINE: Y: {} spans {:?}", y, self.span0.as_slice());
        blitter.draw_hor_span(self.span0.as_slice(), y);
        self.span0.clear();
        std::mem::swap(&mut self.span0, &mut self.span1);
    }

    /// Coverage of shallow edges at each integer column
    ///
    /// A point at height y is split between this row (1 - frac(y)) and
    /// the next row (the remainder).
    fn draw_anti_aliased_points(&mut self, y: i64) {
        let limit = (y + 1) as f64;
        let span0 = &mut self.span0;
        let span1 = &mut self.span1;
        self.table.aa_edges.retain_mut(|e| {
            while e.y < limit {
                let opa = coverage_to_opa(rfpart(e.y));
                span0.insert_span(e.x, e.x, opa);
                span1.insert_span(e.x, e.x, OPA_OPAQUE - opa);
                e.y += e.dy;
                e.x += e.sx;
                e.steps -= 1;
                if e.steps <= 0 {
                    return false;
                }
            }
            true
        });
    }

    /// Move edges starting on row `y` into the active list
    ///
    /// Active edges are ordered by x, then by dx
    fn activate_edges(&mut self, y: i64) {
        let n = self.table.edges.iter()
            .take_while(|e| e.ymin <= y)
            .count();
        for e in self.table.edges.drain(.. n) {
            if e.ymin < y {
                continue;
            }
            let i = self.active.iter()
                .position(|a| e.x < a.x || (e.x == a.x && e.dx < a.dx))
                .unwrap_or(self.active.len());
            self.active.insert(i, e);
        }
    }

    /// Fill between pairs of active edges
    fn fill_spans(&mut self) {
        if self.active.len() % 2 != 0 {
            warn!("FILL SPANS: odd number of active edges ({}), last edge ignored",
                  self.active.len());
        }
        for pair in self.active.chunks_exact(2) {
            let (l, r) = (pair[0].x, pair[1].x);
            self.span0.insert_span(l.ceil() as i64, r.floor() as i64, OPA_OPAQUE);
            for &x in &[l, r] {
                let opa = coverage_to_opa(rfpart(x));
                let px = ipart(x);
                self.span0.insert_span(px, px, opa);
                self.span0.insert_span(px + 1, px + 1, OPA_OPAQUE - opa);
            }
        }
    }

    /// Drop all working state, keeping the allocations
    fn clear_span_table(&mut self) {
        self.span0.clear();
        self.span1.clear();
        self.active.clear();
        self.table.clear();
    }
}
