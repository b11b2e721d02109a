//! Image buffer

use crate::error::ClipError;

/// Pixel layout of an [ImageInfo]
///
/// [ImageInfo]: struct.ImageInfo.html
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum ColorMode {
    /// 32 bit color with alpha, stored as B, G, R, A bytes
    Argb8888,
    /// 24 bit color, stored as B, G, R bytes
    Rgb888,
    /// 16 bit color, little endian
    Rgb565,
    /// 8 bit luminance
    L8,
}

impl ColorMode {
    /// Bytes per pixel
    pub fn bpp(self) -> usize {
        match self {
            ColorMode::Argb8888 => 4,
            ColorMode::Rgb888   => 3,
            ColorMode::Rgb565   => 2,
            ColorMode::L8       => 1,
        }
    }
}

/// Byte offset of the alpha component within an Argb8888 pixel
pub const ARGB8888_ALPHA : usize = 3;

/// Image Buffer
///
/// Data is stored as row-major order (C-format) with no padding between rows
#[derive(Debug,Clone,PartialEq)]
pub struct ImageInfo {
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    pub color_mode: ColorMode,
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
}

impl ImageInfo {
    /// Create a new image of width * height pixels
    ///
    /// Pixels are set to zero
    ///
    /// # Panics
    ///
    /// If the buffer size does not fit in a `usize`
    pub fn new(width: usize, height: usize, color_mode: ColorMode) -> Self {
        let n = match buffer_len(width, height, color_mode) {
            Some(n) => n,
            None => panic!("image of {}x{} pixels is too large", width, height),
        };
        Self { width, height, color_mode, data: vec![0u8; n] }
    }
    /// Wrap existing pixel data
    ///
    ///     use scanclip::{ImageInfo, ColorMode, ClipError};
    ///
    ///     let img = ImageInfo::from_data(2, 2, ColorMode::L8, vec![0; 4]).unwrap();
    ///     assert_eq!(img.stride(), 2);
    ///
    ///     let err = ImageInfo::from_data(2, 2, ColorMode::Argb8888, vec![0; 4]);
    ///     assert!(matches!(err, Err(ClipError::BufferSize { expected: 16, actual: 4 })));
    ///
    pub fn from_data(width: usize, height: usize, color_mode: ColorMode, data: Vec<u8>) -> Result<Self, ClipError> {
        if width == 0 || height == 0 {
            return Err(ClipError::ZeroDimension { width, height });
        }
        let expected = buffer_len(width, height, color_mode)
            .ok_or(ClipError::TooLarge { width, height })?;
        if data.len() != expected {
            return Err(ClipError::BufferSize { expected, actual: data.len() });
        }
        Ok(Self { width, height, color_mode, data })
    }
    /// Bytes per pixel
    pub fn bpp(&self) -> usize {
        self.color_mode.bpp()
    }
    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width * self.bpp()
    }
    /// Size of underlying buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * self.bpp())
    }
    /// Raw bytes of the pixel at (`x`,`y`)
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let i = self.offset(x, y)?;
        Some(&self.data[i .. i + self.bpp()])
    }
    /// Mutable raw bytes of the pixel at (`x`,`y`)
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        let i = self.offset(x, y)?;
        let n = self.bpp();
        Some(&mut self.data[i .. i + n])
    }
    /// Alpha of the pixel at (`x`,`y`)
    ///
    /// Returns None outside the image or if the image has no alpha
    pub fn alpha(&self, x: usize, y: usize) -> Option<u8> {
        if self.color_mode != ColorMode::Argb8888 {
            return None;
        }
        self.pixel(x, y).map(|p| p[ARGB8888_ALPHA])
    }
    /// Set an Argb8888 pixel from B, G, R, A bytes
    ///
    /// Locations outside of the image and other color modes are ignored
    pub fn set_pixel_argb(&mut self, x: usize, y: usize, bgra: [u8;4]) {
        if self.color_mode != ColorMode::Argb8888 {
            return;
        }
        if let Some(p) = self.pixel_mut(x, y) {
            p.copy_from_slice(&bgra);
        }
    }
    /// Set every Argb8888 pixel to B, G, R, A bytes
    pub fn fill_argb(&mut self, bgra: [u8;4]) {
        if self.color_mode != ColorMode::Argb8888 {
            return;
        }
        for p in self.data.chunks_exact_mut(4) {
            p.copy_from_slice(&bgra);
        }
    }
}

/// Size in bytes of a tightly packed image, None on overflow
fn buffer_len(width: usize, height: usize, color_mode: ColorMode) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(color_mode.bpp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_layout() {
        let mut img = ImageInfo::new(3, 2, ColorMode::Argb8888);
        assert_eq!(img.len(), 24);
        assert_eq!(img.stride(), 12);
        img.set_pixel_argb(2, 1, [1, 2, 3, 4]);
        assert_eq!(&img.data[20 .. 24], &[1, 2, 3, 4]);
        assert_eq!(img.alpha(2, 1), Some(4));
        assert_eq!(img.alpha(3, 1), None);
        img.set_pixel_argb(9, 9, [1, 2, 3, 4]);
    }

    #[test]
    fn fill_only_argb() {
        let mut img = ImageInfo::new(2, 2, ColorMode::Argb8888);
        img.fill_argb([10, 20, 30, 255]);
        assert!(img.data.chunks(4).all(|p| p == [10u8, 20, 30, 255]));

        let mut img = ImageInfo::new(2, 2, ColorMode::Rgb565);
        img.fill_argb([10, 20, 30, 255]);
        assert!(img.data.iter().all(|&b| b == 0));
        assert_eq!(img.alpha(0, 0), None);
    }

    #[test]
    fn from_data_checks() {
        assert!(ImageInfo::from_data(0, 2, ColorMode::L8, vec![]).is_err());
        assert!(ImageInfo::from_data(2, 2, ColorMode::Rgb888, vec![0; 12]).is_ok());
    }

    #[test]
    fn oversized_images_are_rejected() {
        let err = ImageInfo::from_data(usize::MAX, 2, ColorMode::L8, vec![]);
        assert!(matches!(err, Err(ClipError::TooLarge { width: usize::MAX, height: 2 })));
        let err = ImageInfo::from_data(usize::MAX / 2, 3, ColorMode::Argb8888, vec![0; 4]);
        assert!(matches!(err, Err(ClipError::TooLarge { .. })));
        assert_eq!(buffer_len(3, 2, ColorMode::Rgb565), Some(12));
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn new_panics_on_overflow() {
        ImageInfo::new(usize::MAX, usize::MAX, ColorMode::L8);
    }
}
