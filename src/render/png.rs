use image::codecs::png::PngEncoder;
use image::{ColorType, GrayImage, ImageEncoder, Luma};
use tracing::debug;

use crate::error::{QrError, Result};
use crate::models::QrCode;

/// Quiet zone width in modules used by [`PngRenderer::default`]
pub const DEFAULT_BORDER: usize = 4;

/// Rasterizes a symbol plus its quiet zone into a square grayscale PNG.
///
/// Every module is drawn as a whole `size / total` pixel block and the symbol
/// is centered, so leftover pixels become extra light margin. When `size` is
/// smaller than the module count there is no whole-pixel scale; the symbol is
/// then sampled down with each pixel taking the module under its top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngRenderer {
    border: usize,
    dark: u8,
    light: u8,
}

impl Default for PngRenderer {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER,
            dark: 0,
            light: 255,
        }
    }
}

impl PngRenderer {
    /// Quiet zone width in modules
    pub fn with_border(mut self, border: usize) -> Self {
        self.border = border;
        self
    }

    /// Luma values for dark and light modules
    pub fn with_colors(mut self, dark: u8, light: u8) -> Self {
        self.dark = dark;
        self.light = light;
        self
    }

    /// Quiet zone width in modules
    pub fn border(&self) -> usize {
        self.border
    }

    /// Side length in modules including the quiet zone
    pub fn total_modules(&self, qr: &QrCode) -> usize {
        qr.size() + 2 * self.border
    }

    /// Gray image of the symbol at `size x size` pixels
    pub fn rasterize(&self, qr: &QrCode, size: u32) -> Result<GrayImage> {
        if size == 0 {
            return Err(QrError::InvalidSize(size));
        }
        let total = self.total_modules(qr);
        let border = self.border;
        let side = size as usize;
        let scale = side / total;
        let offset = (side - scale * total) / 2;

        // Module coordinate under pixel `p`, None for quiet zone and padding
        let module_at = |p: u32| -> Option<usize> {
            let p = p as usize;
            let m = if scale == 0 {
                p * total / side
            } else {
                p.checked_sub(offset)? / scale
            };
            m.checked_sub(border).filter(|&m| m < qr.size())
        };
        Ok(GrayImage::from_fn(size, size, |px, py| {
            let dark = match (module_at(px), module_at(py)) {
                (Some(mx), Some(my)) => qr.module(mx, my),
                _ => false,
            };
            Luma([if dark { self.dark } else { self.light }])
        }))
    }

    /// PNG bytes for the symbol at `size x size` pixels
    pub fn render(&self, qr: &QrCode, size: u32) -> Result<Vec<u8>> {
        let img = self.rasterize(qr, size)?;
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(img.as_raw(), size, size, ColorType::L8)?;
        debug!(
            size,
            modules = self.total_modules(qr),
            bytes = png.len(),
            "rendered QR png"
        );
        Ok(png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{EncodeOptions, Encoder, QrEncoder};
    use crate::models::ECLevel;

    fn sample() -> QrCode {
        Encoder::new(EncodeOptions::default().with_ec_level(ECLevel::M))
            .encode(b"render me")
            .unwrap()
    }

    #[test]
    fn test_integer_scale_matches_modules() {
        let qr = sample();
        let renderer = PngRenderer::default().with_border(4);
        let scale = 3usize;
        let total = renderer.total_modules(&qr);
        let img = renderer.rasterize(&qr, (total * scale) as u32).unwrap();

        for my in 0..qr.size() {
            for mx in 0..qr.size() {
                let px = ((mx + 4) * scale) as u32;
                let py = ((my + 4) * scale) as u32;
                let expected = if qr.module(mx, my) { 0 } else { 255 };
                assert_eq!(img.get_pixel(px, py).0[0], expected);
            }
        }
        // Quiet zone is light
        assert_eq!(img.get_pixel(0, 0).0[0], 255);
    }

    #[test]
    fn test_without_border_corner_is_finder() {
        let qr = sample();
        // 21 modules in 100px: 4px per module, 8px of padding on each side
        let img = PngRenderer::default()
            .with_border(0)
            .rasterize(&qr, 100)
            .unwrap();
        assert_eq!(img.get_pixel(8, 8).0[0], 0);
        assert_eq!(img.get_pixel(91, 91).0[0], 0);
        assert_eq!(img.get_pixel(7, 7).0[0], 255);
        assert_eq!(img.get_pixel(92, 8).0[0], 255);
    }

    #[test]
    fn test_default_border() {
        assert_eq!(PngRenderer::default().border(), DEFAULT_BORDER);
        assert_eq!(DEFAULT_BORDER, 4);
    }

    #[test]
    fn test_modules_snap_to_whole_pixels() {
        let qr = sample();
        let renderer = PngRenderer::default();
        let total = renderer.total_modules(&qr);
        let size = 50u32;
        let scale = size as usize / total;
        let offset = (size as usize - scale * total) / 2;
        assert!(scale >= 1);

        let img = renderer.rasterize(&qr, size).unwrap();
        for my in 0..qr.size() {
            for mx in 0..qr.size() {
                let expected = if qr.module(mx, my) { 0 } else { 255 };
                let x0 = offset + (mx + DEFAULT_BORDER) * scale;
                let y0 = offset + (my + DEFAULT_BORDER) * scale;
                for py in y0..y0 + scale {
                    for px in x0..x0 + scale {
                        assert_eq!(img.get_pixel(px as u32, py as u32).0[0], expected);
                    }
                }
            }
        }
        // Padding past the last module is light
        let end = (offset + total * scale) as u32;
        for p in end..size {
            assert_eq!(img.get_pixel(p, size / 2).0[0], 255);
            assert_eq!(img.get_pixel(size / 2, p).0[0], 255);
        }
    }

    #[test]
    fn test_custom_colors() {
        let qr = sample();
        let img = PngRenderer::default()
            .with_border(0)
            .with_colors(10, 200)
            .rasterize(&qr, qr.size() as u32)
            .unwrap();
        assert_eq!(img.get_pixel(0, 0).0[0], 10);
        assert_eq!(img.get_pixel(1, 1).0[0], 200);
    }

    #[test]
    fn test_zero_size_rejected() {
        let qr = sample();
        assert!(matches!(
            PngRenderer::default().render(&qr, 0),
            Err(QrError::InvalidSize(0))
        ));
    }

    #[test]
    fn test_png_signature() {
        let png = PngRenderer::default().render(&sample(), 1).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
