//! Blitters that consume scanned rows

use crate::buffer::{ColorMode, ImageInfo, ARGB8888_ALPHA};
use crate::geometry::PointF;
use crate::math::mul_opa;
use crate::path_storage::ClipPath;
use crate::raster::ClipUtils;
use crate::scan::{Span, OPA_OPAQUE, OPA_TRANSPARENT};
use crate::Blitter;

use log::error;

/// Clips an image in place
///
/// Pixels outside the spans become transparent, pixels inside have their
/// alpha scaled by the span opacity. Rows the scan never reaches are
/// cleared by [finish]. Only [Argb8888] images are modified.
///
/// [finish]: ../trait.Blitter.html#tymethod.finish
/// [Argb8888]: ../buffer/enum.ColorMode.html#variant.Argb8888
#[derive(Debug)]
pub struct ClipImageBlitter<'a> {
    image: &'a mut ImageInfo,
    /// Next row not yet written
    iy: i64,
    reported: bool,
}

impl<'a> ClipImageBlitter<'a> {
    pub fn new(image: &'a mut ImageInfo) -> Self {
        Self { image, iy: 0, reported: false }
    }
    fn width(&self) -> i64 {
        self.image.width as i64
    }
    fn draw_pixel(&mut self, x: i64, y: i64, opa: u8) {
        if x < 0 || y < 0 || x >= self.width() || y >= self.image.height as i64 {
            return;
        }
        match self.image.color_mode {
            ColorMode::Argb8888 => {
                if let Some(p) = self.image.pixel_mut(x as usize, y as usize) {
                    p[ARGB8888_ALPHA] = mul_opa(p[ARGB8888_ALPHA], opa);
                }
            },
            mode => {
                if ! self.reported {
                    error!("CLIP IMAGE: only Argb8888 images are supported, got {:?}", mode);
                    self.reported = true;
                }
            }
        }
    }
    fn draw_hor_line(&mut self, x: i64, y: i64, width: i64, opa: u8) {
        if width <= 0 || opa == OPA_OPAQUE {
            return;
        }
        for i in 0 .. width {
            self.draw_pixel(x + i, y, opa);
        }
    }
    fn clear_rows(&mut self, from: i64, to: i64) {
        let w = self.width();
        for y in from .. to {
            self.draw_hor_line(0, y, w, OPA_TRANSPARENT);
        }
    }
}

impl<'a> Blitter for ClipImageBlitter<'a> {
    fn draw_hor_span(&mut self, spans: &[Span], y: i64) {
        self.clear_rows(self.iy, y);
        let mut index = 0;
        for s in spans {
            self.draw_hor_line(index, y, s.left - index, OPA_TRANSPARENT);
            self.draw_hor_line(s.left, y, s.len(), s.opa);
            index = s.right + 1;
        }
        let w = self.width();
        self.draw_hor_line(index, y, w - index, OPA_TRANSPARENT);
        self.iy = y + 1;
    }
    fn finish(&mut self) {
        let h = self.image.height as i64;
        self.clear_rows(self.iy, h);
    }
}

/// Records every row it receives
///
/// Useful for inspecting the output of a scan
#[derive(Debug,Default,Clone)]
pub struct SpanRecorder {
    /// Row and its spans, in the order received
    pub rows: Vec<(i64, Vec<Span>)>,
    /// Number of calls to `finish`
    pub finished: usize,
}

impl SpanRecorder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Spans recorded for row `y`
    pub fn row(&self, y: i64) -> Option<&[Span]> {
        self.rows.iter()
            .find(|(ry, _)| *ry == y)
            .map(|(_, s)| s.as_slice())
    }
}

impl Blitter for SpanRecorder {
    fn draw_hor_span(&mut self, spans: &[Span], y: i64) {
        self.rows.push((y, spans.to_vec()));
    }
    fn finish(&mut self) {
        self.finished += 1;
    }
}

/// Clip `image` to the inside of `path`
pub fn clip_image(image: &mut ImageInfo, path: &ClipPath) {
    let mut blitter = ClipImageBlitter::new(image);
    ClipUtils::new().perform_scan(path, &mut blitter);
}

/// Clip `image` to a circle
///
///     use scanclip::{clip_circle, ColorMode, ImageInfo};
///
///     let mut img = ImageInfo::new(20, 20, ColorMode::Argb8888);
///     img.fill_argb([0, 0, 255, 255]);
///     clip_circle(&mut img, 10.0, 10.0, 6.0);
///     assert_eq!(img.alpha(10, 10), Some(255));
///     assert_eq!(img.alpha(0, 0), Some(0));
///
pub fn clip_circle(image: &mut ImageInfo, x: f64, y: f64, radius: f64) {
    let mut path = ClipPath::new();
    path.circle(PointF::new(x, y), radius);
    clip_image(image, &path);
}
