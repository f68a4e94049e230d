//! Errors from configuring the cropper or feeding it an image.
//!
//! Geometry itself never fails; these only reject inputs that would make
//! every later computation meaningless.

/// Rejected configuration or image input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CropError {
    /// A ratio option is not a finite number above zero.
    #[error("`{field}` must be a finite ratio above zero")]
    InvalidRatio { field: &'static str },
    /// A fixed container extent is negative or not finite.
    #[error("`{field}` must be a finite, non-negative size")]
    InvalidExtent { field: &'static str },
    /// An explicit placement carries a non-finite value.
    #[error("`{field}` placement values must be finite")]
    InvalidPlacement { field: &'static str },
    /// The delivered image size is not finite and positive.
    #[error("image width and height must be finite and above zero")]
    InvalidImageSize,
}
