use thiserror::Error;

/// Errors raised while encoding or rendering a QR code
#[derive(Error, Debug)]
pub enum QrError {
    /// Payload does not fit the largest allowed version
    #[error("Data too long: {bits} bits needed, {capacity} bits available at version {version}")]
    DataTooLong {
        /// Bits the payload needs
        bits: usize,
        /// Data bits available at `version`
        capacity: usize,
        /// Largest version that was tried
        version: u8,
    },

    /// Requested pixel size is zero
    #[error("Invalid image size: {0} (must be > 0)")]
    InvalidSize(u32),

    /// Minimum version above the maximum
    #[error("Invalid version range: {min}..={max}")]
    InvalidVersionRange {
        /// Requested smallest version
        min: u8,
        /// Requested largest version
        max: u8,
    },

    /// Unknown error correction level name
    #[error("Invalid error correction level: {0}")]
    InvalidEcLevel(String),

    /// Failure inside the PNG encoder
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Result alias for the QR pipeline
pub type Result<T> = std::result::Result<T, QrError>;
