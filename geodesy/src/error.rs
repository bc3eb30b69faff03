use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodesyError {
    #[error("bin size must be positive, got {0}")]
    BinSize(f64),

    #[error("area has zero extent: ({min_x}, {min_y}) to ({max_x}, {max_y})")]
    EmptyArea {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },

    #[error("point ({x}, {y}) lies outside the initialized area")]
    OutOfArea { x: f64, y: f64 },
}
