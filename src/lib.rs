//! notebook_helpers - small helpers for interactive notebooks
//!
//! - [`radius_sphere`]: radius for a volume, using a calibrated exponent of 2.75
//! - [`create_qrcode`]: QR code rendered to a square PNG wrapped as a
//!   [`NotebookImage`]
//!
//! The QR pipeline is built from injectable pieces: a [`QrEncoder`] produces the
//! module matrix, a [`PngRenderer`] rasterizes it, and an [`ImageSink`] wraps
//! the PNG bytes for display.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (data modes, error correction, masking)
pub mod encoder;
/// Error type shared by the QR pipeline
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, etc.)
pub mod models;
/// PNG rendering and notebook image objects
pub mod render;
/// Numeric helpers (sphere radius)
pub mod utils;

pub use encoder::{EncodeOptions, Encoder, QrEncoder};
pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};
pub use render::{DEFAULT_BORDER, ImageFormat, ImageSink, NotebookImage, NotebookSink, PngRenderer};
pub use utils::geometry::{SPHERE_EXPONENT, radius_sphere, sphere_volume};

/// Pixel size used when the caller has no preference
pub const DEFAULT_QR_SIZE: u32 = 50;

/// Encode `value` as a QR code and return it as a `size x size` PNG image
///
/// # Arguments
/// * `value` - Text or raw bytes to encode
/// * `size` - Width and height of the image in pixels ([`DEFAULT_QR_SIZE`] = 50)
///
/// # Errors
/// [`QrError::InvalidSize`] for `size == 0`, [`QrError::DataTooLong`] when the
/// value does not fit a version 40 symbol, [`QrError::Png`] if PNG encoding fails.
pub fn create_qrcode(value: impl AsRef<[u8]>, size: u32) -> Result<NotebookImage> {
    create_qrcode_with(
        &Encoder::default(),
        &PngRenderer::default(),
        &NotebookSink,
        value,
        size,
    )
}

/// [`create_qrcode`] with explicit encoder, renderer and sink
pub fn create_qrcode_with<E, S>(
    encoder: &E,
    renderer: &PngRenderer,
    sink: &S,
    value: impl AsRef<[u8]>,
    size: u32,
) -> Result<S::Output>
where
    E: QrEncoder + ?Sized,
    S: ImageSink + ?Sized,
{
    if size == 0 {
        return Err(QrError::InvalidSize(size));
    }
    let qr = encoder.encode(value.as_ref())?;
    let png = renderer.render(&qr, size)?;
    Ok(sink.wrap(png, ImageFormat::Png, size, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEncoder(QrCode);

    impl QrEncoder for FixedEncoder {
        fn encode(&self, _value: &[u8]) -> Result<QrCode> {
            Ok(self.0.clone())
        }
    }

    struct LenSink;

    impl ImageSink for LenSink {
        type Output = (usize, u32);

        fn wrap(&self, bytes: Vec<u8>, _format: ImageFormat, width: u32, _height: u32) -> (usize, u32) {
            (bytes.len(), width)
        }
    }

    #[test]
    fn test_create_qrcode_defaults() {
        let image = create_qrcode("hello", DEFAULT_QR_SIZE).unwrap();
        assert!(image.format == "png");
        assert_eq!(image.width, 50);
        assert_eq!(image.height, 50);
        assert!(!image.is_empty());
    }

    #[test]
    fn test_injected_capabilities() {
        let qr = Encoder::default().encode(b"fixed").unwrap();
        let encoder = FixedEncoder(qr);
        let (len, width) =
            create_qrcode_with(&encoder, &PngRenderer::default(), &LenSink, "ignored", 64).unwrap();
        assert!(len > 0);
        assert_eq!(width, 64);
    }

    #[test]
    fn test_zero_size() {
        assert!(matches!(create_qrcode("x", 0), Err(QrError::InvalidSize(0))));
    }
}
