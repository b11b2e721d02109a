//! Scanline spans

/// Fully opaque
pub const OPA_OPAQUE : u8 = 255;
/// Fully transparent
pub const OPA_TRANSPARENT : u8 = 0;

/// Interval [left, right] of a scanline with a constant opacity
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub left: i64,
    pub right: i64,
    pub opa: u8,
}

impl Span {
    pub fn new(left: i64, right: i64, opa: u8) -> Self {
        Self { left, right, opa }
    }
    /// Number of pixels covered
    pub fn len(&self) -> i64 {
        self.right - self.left + 1
    }
}

/// Spans of a single row
///
/// Spans are sorted by `left` and never overlap
#[derive(Debug,Default,Clone)]
pub struct SpanList {
    pub spans: Vec<Span>,
}

impl SpanList {
    pub fn new() -> Self {
        Self { spans: vec![] }
    }
    pub fn with_capacity(n: usize) -> Self {
        Self { spans: Vec::with_capacity(n) }
    }
    pub fn clear(&mut self) {
        self.spans.clear();
    }
    pub fn len(&self) -> usize {
        self.spans.len()
    }
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
    pub fn as_slice(&self) -> &[Span] {
        &self.spans
    }
    /// Insert the interval [left, right] with opacity `opa`
    ///
    /// Where the interval overlaps existing spans those are split and
    /// the overlapping part takes the larger opacity. Empty intervals and
    /// transparent spans are ignored.
    ///
    ///     use scanclip::{Span, SpanList};
    ///
    ///     let mut row = SpanList::new();
    ///     row.insert_span(0, 10, 100);
    ///     row.insert_span(5, 15, 200);
    ///     assert_eq!(row.as_slice(), &[Span::new(0, 4, 100),
    ///                                  Span::new(5, 10, 200),
    ///                                  Span::new(11, 15, 200)]);
    ///
    pub fn insert_span(&mut self, left: i64, right: i64, opa: u8) {
        if left > right || opa == OPA_TRANSPARENT {
            return;
        }
        let mut left = left;
        let mut i = 0;
        while i < self.spans.len() {
            let cur = self.spans[i];
            if right < cur.left {
                break;
            }
            if left > cur.right {
                i += 1;
                continue;
            }
            // Part before the current span
            if left < cur.left {
                self.spans.insert(i, Span::new(left, cur.left - 1, opa));
                i += 1;
            } else if left > cur.left {
                self.spans.insert(i, Span::new(cur.left, left - 1, cur.opa));
                i += 1;
                self.spans[i].left = left;
            }
            let opa_max = cur.opa.max(opa);
            if right > cur.right {
                self.spans[i].opa = opa_max;
                left = cur.right + 1;
                i += 1;
                continue;
            } else if right < cur.right {
                self.spans.insert(i + 1, Span::new(right + 1, cur.right, cur.opa));
                self.spans[i].right = right;
            }
            self.spans[i].opa = opa_max;
            return;
        }
        self.spans.insert(i, Span::new(left, right, opa));
    }
    /// Join touching spans of equal opacity
    ///
    /// Done in place, the buffer keeps its capacity
    pub fn merge(&mut self) {
        self.spans.dedup_by(|next, cur| {
            if cur.right + 1 == next.left && cur.opa == next.opa {
                cur.right = next.right;
                true
            } else {
                false
            }
        });
    }
}
