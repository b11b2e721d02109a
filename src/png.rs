//! Reading and writing of images as PNG files
//!
//! Only Argb8888 images are supported. Pixels are converted between the
//! in memory B, G, R, A order and the R, G, B, A order of the file.

use crate::buffer::{ColorMode, ImageInfo};
use crate::error::ClipError;

use std::path::Path;

fn swap_red_blue(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4)
        .flat_map(|p| vec![p[2], p[1], p[0], p[3]])
        .collect()
}

/// Read a PNG file into an Argb8888 image
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<ImageInfo, ClipError> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = swap_red_blue(&img.into_raw());
    ImageInfo::from_data(w as usize, h as usize, ColorMode::Argb8888, buf)
}

/// Write an Argb8888 image to a PNG file
pub fn write_file<P: AsRef<Path>>(img: &ImageInfo, filename: P) -> Result<(), ClipError> {
    if img.color_mode != ColorMode::Argb8888 {
        return Err(ClipError::UnsupportedColorMode(img.color_mode));
    }
    let buf = swap_red_blue(&img.data);
    image::save_buffer(filename, &buf, img.width as u32, img.height as u32, image::RGBA(8))?;
    Ok(())
}

/// Compare two PNG files pixel by pixel
///
/// Differences are printed to stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, ClipError> {
    let d1 = read_file(f1)?;
    let d2 = read_file(f2)?;
    if d1.width != d2.width || d1.height != d2.height {
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.data.iter().zip(d2.data.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i/4)%d1.width, (i/4)/d1.width, i%4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
