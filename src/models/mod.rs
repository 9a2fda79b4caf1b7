/// Packed bit matrix
pub mod matrix;
/// Symbol, version, EC level and mask types
pub mod qr_code;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
