// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Crate-wide error type.
///
/// Variants map one-to-one onto the failure modes a hosting UI has to
/// present: a rejected load, a failed decode/encode, malformed kernel input,
/// and operations issued before any image is loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source image uses an indexed-color (palette) encoding, which the
    /// editing engine does not accept.
    UnsupportedFormat,

    /// The image codec failed to decode the source file.
    Decode(String),

    /// The image codec failed to encode the committed image.
    Encode(String),

    /// Filesystem error while reading or writing.
    Io(String),

    /// Configuration file could not be serialized or deserialized.
    Config(String),

    /// Kernel input was not a well-formed 3x3 numeric grid.
    InvalidKernel(String),

    /// A controller operation that requires a loaded image was called while
    /// no image is loaded.
    NoImageLoaded,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedFormat => write!(f, "Indexed-color images are not supported"),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidKernel(e) => write!(f, "Invalid Kernel: {}", e),
            Error::NoImageLoaded => write!(f, "No image is loaded"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
