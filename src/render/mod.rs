//! Rendering of encoded symbols
//!
//! - PNG rasterization at an arbitrary square pixel size
//! - Notebook image objects and the sink that builds them

/// Raster + PNG encoding
pub mod png;
/// Display-ready image objects
pub mod widget;

pub use png::{DEFAULT_BORDER, PngRenderer};
pub use widget::{ImageFormat, ImageSink, NotebookImage, NotebookSink};
