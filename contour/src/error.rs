use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContourError {
    #[error("grid must be at least 2 x 2 with width * height samples, got {width} x {height} with {samples}")]
    Dimensions {
        width: usize,
        height: usize,
        samples: usize,
    },
}
