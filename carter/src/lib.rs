//! Carter-table echo sounder depth correction.
//!
//! Echo sounders report depths computed from travel time at a nominal
//! 1500 m/s sound speed. True sound speed varies by region, so a
//! nominal depth must be corrected through the table for the oceanic
//! area it was sounded in. [`correct`] maps nominal to true depth and
//! [`uncorrect`] inverts it, both by linear interpolation between the
//! area's breakpoints.
//!
//! ```
//! use geo::Coord;
//!
//! let position = Coord { x: -168.25, y: 54.416667 };
//! let corrected = carter::correct(position, 1159.0).unwrap();
//! assert_eq!(corrected.area, 48);
//! assert!((corrected.depth - 1137.41).abs() < 1e-6);
//! ```

mod error;
mod tables;

pub use crate::error::CarterError;

use geo::Coord;

/// A depth produced by table lookup, tagged with the area whose table
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    /// Depth in meters.
    pub depth: f64,

    /// Correction area identifier.
    pub area: u16,
}

/// Corrects a nominal (1500 m/s) depth to a true depth for the area
/// containing `position`.
///
/// `position` is lon/lat degrees (`x` is longitude). Depths must lie
/// in (200, 12000] meters; shallower soundings are conventionally left
/// uncorrected by the caller.
pub fn correct(position: Coord<f64>, nominal_depth: f64) -> Result<Correction, CarterError> {
    let area = resolve_area(position)?;
    validate_depth(nominal_depth)?;
    let table = table_for(area, nominal_depth)?;
    let depth = interpolate(table, nominal_depth, |bp| (bp.0, bp.1))
        .ok_or(CarterError::NoBracket {
            area,
            depth: nominal_depth,
        })?;
    Ok(Correction { depth, area })
}

/// Inverts [`correct`]: recovers the nominal depth that would have
/// corrected to `true_depth` in the area containing `position`.
pub fn uncorrect(position: Coord<f64>, true_depth: f64) -> Result<Correction, CarterError> {
    let area = resolve_area(position)?;
    let table = table_for(area, true_depth)?;
    // True depths span the area's corrected column, not the nominal
    // range; areas with ratios above 1.0 correct past 12000 m and the
    // inverse must accept everything the forward lookup can produce.
    let (lo, hi) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first.1, last.1),
        _ => {
            return Err(CarterError::NoBracket {
                area,
                depth: true_depth,
            })
        }
    };
    if !(true_depth > lo && true_depth <= hi) {
        return Err(CarterError::Depth(true_depth));
    }
    let depth = interpolate(table, true_depth, |bp| (bp.1, bp.0))
        .ok_or(CarterError::NoBracket {
            area,
            depth: true_depth,
        })?;
    Ok(Correction { depth, area })
}

/// Area id for a position, after range-checking both coordinates.
fn resolve_area(position: Coord<f64>) -> Result<u16, CarterError> {
    if !(-90.0..=90.0).contains(&position.y) {
        return Err(CarterError::Latitude(position.y));
    }
    if !(-180.0..=180.0).contains(&position.x) {
        return Err(CarterError::Longitude(position.x));
    }

    // Row 0 is the 89N..90N band.
    let row = (89 - position.y.floor() as i64).clamp(0, 179) as usize;
    let mut area = None;
    for &(west, id) in tables::boundaries(row) {
        if position.x >= west {
            area = Some(id);
        } else {
            break;
        }
    }
    area.ok_or(CarterError::NoArea {
        x: position.x,
        y: position.y,
    })
}

fn validate_depth(depth: f64) -> Result<(), CarterError> {
    if depth > tables::MIN_DEPTH && depth <= tables::MAX_DEPTH {
        Ok(())
    } else {
        Err(CarterError::Depth(depth))
    }
}

fn table_for(area: u16, depth: f64) -> Result<&'static [(f64, f64)], CarterError> {
    tables::breakpoints(area).ok_or(CarterError::NoBracket { area, depth })
}

/// Linear interpolation between the pair of breakpoints bracketing
/// `value` in the column selected by `key`. Both columns are strictly
/// increasing, so the bracket is unique.
fn interpolate(
    table: &[(f64, f64)],
    value: f64,
    key: fn(&(f64, f64)) -> (f64, f64),
) -> Option<f64> {
    for window in table.windows(2) {
        let (x0, y0) = key(&window[0]);
        let (x1, y1) = key(&window[1]);
        if x0 <= value && value <= x1 {
            return Some(y0 + (value - x0) / (x1 - x0) * (y1 - y0));
        }
    }
    None
}
