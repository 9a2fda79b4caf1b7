use std::fmt;

/// Encoded image format carried by a [`NotebookImage`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
}

impl ImageFormat {
    /// Short format tag ("png")
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
        }
    }

    /// MIME type for the format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for ImageFormat {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Raw image bytes plus the metadata a notebook front-end needs to display them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookImage {
    /// Encoded image bytes
    pub value: Vec<u8>,
    /// Format of `value`
    pub format: ImageFormat,
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
}

impl NotebookImage {
    /// Wrap encoded bytes with their format and display size
    pub fn new(value: Vec<u8>, format: ImageFormat, width: u32, height: u32) -> Self {
        Self {
            value,
            format,
            width,
            height,
        }
    }

    /// MIME type of the encoded bytes
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Number of encoded bytes
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// True when no bytes were produced
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Capability that wraps encoded bytes into something displayable
pub trait ImageSink {
    /// Displayable value produced by the sink
    type Output;

    /// Wrap `bytes` of the given format and pixel size
    fn wrap(&self, bytes: Vec<u8>, format: ImageFormat, width: u32, height: u32) -> Self::Output;
}

/// Default sink producing [`NotebookImage`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NotebookSink;

impl ImageSink for NotebookSink {
    type Output = NotebookImage;

    fn wrap(&self, bytes: Vec<u8>, format: ImageFormat, width: u32, height: u32) -> NotebookImage {
        NotebookImage::new(bytes, format, width, height)
    }
}
