/// Errors produced by the carousel core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("texture set {index} out of range (have {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid texture dimensions {width}x{height}")]
    InvalidTexture { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, CarouselError>;
