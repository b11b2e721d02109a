//! Antialiased clipping of images to vector paths
//!
//! How does this work
//!    path = ClipPath().move_to(), line_to(), curve_to(), arc(), circle()
//!    clip = ClipUtils()
//!    blit = ClipImageBlitter( ImageInfo )
//!  Scan
//!    clip.perform_scan(path, blit)
//!      create_edge_list()
//!        generate_polygon()  -- curves flattened by subdivision
//!        EdgeTable::build()  -- edges sorted by ymin, shallow edges by y
//!      sweep_scanline()      -- one call per row, top to bottom
//!        draw_anti_aliased_points() -- shallow edges, split over two rows
//!        activate_edges()
//!        fill_spans()        -- pairs of active edges
//!        merge()
//!        blit.draw_hor_span()
//!    blit.finish()
//!  Output: alpha of pixels outside the path is zero, inside is scaled by
//!    the span opacity

pub mod geometry;
pub mod path_storage;
pub mod polygon;
pub mod scan;
pub mod edge;
pub mod raster;
pub mod buffer;
pub mod blitter;
pub mod math;
pub mod png;
pub mod error;

pub use geometry::*;
pub use path_storage::*;
pub use polygon::*;
pub use scan::*;
pub use edge::*;
pub use raster::*;
pub use buffer::*;
pub use blitter::*;
pub use error::*;

/// Consumer of scanned rows
///
/// Rows arrive in increasing order, each exactly once, followed by a single
/// call to `finish`
pub trait Blitter {
    /// Apply the coverage of row `y`
    ///
    /// Spans are sorted, do not overlap, and pixels not covered by any span
    /// are outside the path
    fn draw_hor_span(&mut self, spans: &[Span], y: i64);
    /// Called once after the last row
    fn finish(&mut self);
}
