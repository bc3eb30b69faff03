use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarterError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),

    #[error("depth {0} m out of correctable range")]
    Depth(f64),

    #[error("no correction area at ({x}, {y})")]
    NoArea { x: f64, y: f64 },

    #[error("area {area} has no breakpoints bracketing depth {depth} m")]
    NoBracket { area: u16, depth: f64 },
}
