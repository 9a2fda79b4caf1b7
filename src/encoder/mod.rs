//! QR code encoding modules
//!
//! This module contains all the logic for turning a payload into a QR symbol:
//! - Data mode encoding (numeric, alphanumeric, byte)
//! - Error correction (Reed-Solomon, BCH)
//! - Function patterns, codeword placement and masking

/// BCH codes for format and version info
pub mod bch;
/// Bit buffer and codeword placement into the matrix
pub mod bitstream;
/// Function pattern drawing (finder/timing/format/alignment/version)
pub mod function_patterns;
/// Mask application and penalty scoring
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks, capacities)
pub mod tables;

pub use qr_encoder::{EncodeOptions, Encoder, QrEncoder};
