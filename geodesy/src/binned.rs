//! Binned geo-distance approximation.
//!
//! Surveys query distances between nearby points millions of times.
//! [`BinnedDistance`] precomputes, for a fixed area and nominal bin
//! size, the true east-west meters per longitude bin at every latitude
//! row, so each query is a couple of interpolations instead of a full
//! inverse solution. Accuracy loss is bounded (sub-decimeter at survey
//! scales) for roughly an order of magnitude more throughput.

use crate::{Ellipsoid, GeodesyError};
use geo::{Coord, Rect};
use log::debug;

pub struct BinnedDistance {
    bounds: Rect<f64>,
    bin_size_m: f64,

    /// Latitude rows spanning the area.
    rows: usize,

    /// Degrees of latitude per row.
    lat_deg_per_row: f64,

    /// Degrees of longitude per bin, estimated at mid-latitude.
    lon_deg_per_bin: f64,

    /// Latitude of each row post (`rows + 1` entries).
    row_lats: Vec<f64>,

    /// True east-west meters per longitude bin at each row post.
    row_meters: Vec<f64>,
}

impl BinnedDistance {
    /// Builds the per-row tables for `area` at a nominal `bin_size_m`.
    ///
    /// Costs one inverse solution per latitude row; everything after
    /// that is table lookups. The tables are owned by the returned
    /// value, so multiple areas/bin sizes can be live at once.
    pub fn new(
        ellipsoid: Ellipsoid,
        bin_size_m: f64,
        area: Rect<f64>,
    ) -> Result<Self, GeodesyError> {
        if !(bin_size_m > 0.0) {
            return Err(GeodesyError::BinSize(bin_size_m));
        }
        let min = area.min();
        let max = area.max();
        if min.x >= max.x || min.y >= max.y {
            return Err(GeodesyError::EmptyArea {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }

        // True north-south extent along the west edge sizes the rows.
        let ns_m = ellipsoid
            .inverse(Coord { x: min.x, y: min.y }, Coord { x: min.x, y: max.y })
            .distance_m;
        let rows = ((ns_m / bin_size_m).ceil() as usize).max(1);
        let lat_deg_per_row = (max.y - min.y) / rows as f64;

        // Longitude degrees per bin at the area's mid-latitude.
        let mid = Coord {
            x: min.x,
            y: (min.y + max.y) / 2.0,
        };
        let east = ellipsoid.displace(mid, 90.0, bin_size_m);
        let lon_deg_per_bin = east.x - mid.x;

        // True meters per longitude bin at every row post.
        let mut row_lats = Vec::with_capacity(rows + 1);
        let mut row_meters = Vec::with_capacity(rows + 1);
        for row in 0..=rows {
            let lat = min.y + row as f64 * lat_deg_per_row;
            let west = Coord { x: min.x, y: lat };
            let east = Coord {
                x: min.x + lon_deg_per_bin,
                y: lat,
            };
            row_lats.push(lat);
            row_meters.push(ellipsoid.inverse(west, east).distance_m);
        }

        debug!("binned distance; rows: {rows}, bin: {bin_size_m} m");

        Ok(Self {
            bounds: area,
            bin_size_m,
            rows,
            lat_deg_per_row,
            lon_deg_per_bin,
            row_lats,
            row_meters,
        })
    }

    /// Approximate distance in meters between two points inside the
    /// initialized area.
    ///
    /// Either point outside the area is an error, not an
    /// extrapolation.
    pub fn distance(&self, p0: Coord<f64>, p1: Coord<f64>) -> Result<f64, GeodesyError> {
        let (y0, scale0) = self.locate(p0)?;
        let (y1, scale1) = self.locate(p1)?;

        // One x-scale for both endpoints keeps the metric symmetric.
        let scale = (scale0 + scale1) / 2.0;
        let x0 = (p0.x - self.bounds.min().x) / self.lon_deg_per_bin * scale;
        let x1 = (p1.x - self.bounds.min().x) / self.lon_deg_per_bin * scale;

        Ok((x1 - x0).hypot(y1 - y0))
    }

    /// Pseudo-meter northing and interpolated meters-per-longitude-bin
    /// for a point.
    fn locate(&self, p: Coord<f64>) -> Result<(f64, f64), GeodesyError> {
        let min = self.bounds.min();
        let max = self.bounds.max();
        if p.x < min.x || p.x > max.x || p.y < min.y || p.y > max.y {
            return Err(GeodesyError::OutOfArea { x: p.x, y: p.y });
        }

        let t = (p.y - min.y) / self.lat_deg_per_row;
        // Small bias keeps post-boundary points in the expected row.
        let row = ((t + 0.05).floor() as usize).min(self.rows - 1);
        let frac = (p.y - self.row_lats[row]) / self.lat_deg_per_row;

        let y_m = (row as f64 + frac) * self.bin_size_m;
        let scale =
            self.row_meters[row] + frac * (self.row_meters[row + 1] - self.row_meters[row]);
        Ok((y_m, scale))
    }
}

#[cfg(test)]
mod tests {
    use super::{BinnedDistance, Coord, Rect};
    use crate::Ellipsoid;

    fn survey_area() -> Rect<f64> {
        // Roughly 1.1 x 1.6 km off the New England shelf.
        Rect::new(
            Coord {
                x: -70.010,
                y: 41.995,
            },
            Coord {
                x: -69.990,
                y: 42.005,
            },
        )
    }

    #[test]
    fn test_matches_inverse_within_tolerance() {
        let e = Ellipsoid::WGS84;
        let grid = BinnedDistance::new(e, 10.0, survey_area()).unwrap();
        let pairs = [
            ((-70.009, 41.996), (-69.991, 42.004)),
            ((-70.005, 42.000), (-69.995, 42.000)),
            ((-70.000, 41.995), (-70.000, 42.005)),
            ((-70.002, 42.0031), (-69.9984, 41.9973)),
        ];
        for ((x0, y0), (x1, y1)) in pairs {
            let p0 = Coord { x: x0, y: y0 };
            let p1 = Coord { x: x1, y: y1 };
            let approx = grid.distance(p0, p1).unwrap();
            let exact = e.inverse(p0, p1).distance_m;
            assert!(
                (approx - exact).abs() < 0.1,
                "approx {approx} vs exact {exact}"
            );
        }
    }

    #[test]
    fn test_zero_distance() {
        let grid = BinnedDistance::new(Ellipsoid::WGS84, 10.0, survey_area()).unwrap();
        let p = Coord {
            x: -70.001,
            y: 42.001,
        };
        assert_eq!(grid.distance(p, p).unwrap(), 0.0);
    }

    #[test]
    fn test_out_of_area_is_an_error() {
        let grid = BinnedDistance::new(Ellipsoid::WGS84, 10.0, survey_area()).unwrap();
        let inside = Coord {
            x: -70.0,
            y: 42.0,
        };
        let outside = Coord {
            x: -69.5,
            y: 42.0,
        };
        assert!(grid.distance(inside, outside).is_err());
        assert!(grid.distance(outside, inside).is_err());
    }

    #[test]
    fn test_area_corners_are_inside() {
        let area = survey_area();
        let grid = BinnedDistance::new(Ellipsoid::WGS84, 25.0, area).unwrap();
        let sw = area.min();
        let ne = area.max();
        assert!(grid.distance(sw, ne).is_ok());
    }

    #[test]
    fn test_rejects_bad_bin_size() {
        assert!(BinnedDistance::new(Ellipsoid::WGS84, 0.0, survey_area()).is_err());
        assert!(BinnedDistance::new(Ellipsoid::WGS84, -5.0, survey_area()).is_err());
    }

    #[test]
    fn test_rejects_empty_area() {
        let line = Rect::new(
            Coord { x: -70.0, y: 42.0 },
            Coord { x: -70.0, y: 42.1 },
        );
        assert!(BinnedDistance::new(Ellipsoid::WGS84, 10.0, line).is_err());
    }

    #[test]
    fn test_two_grids_coexist() {
        // The old init/use/clean lifecycle allowed only one live
        // configuration; owned grids must not interfere.
        let a = BinnedDistance::new(Ellipsoid::WGS84, 10.0, survey_area()).unwrap();
        let b = BinnedDistance::new(Ellipsoid::WGS84, 50.0, survey_area()).unwrap();
        let p0 = Coord {
            x: -70.004,
            y: 41.998,
        };
        let p1 = Coord {
            x: -69.996,
            y: 42.002,
        };
        let da = a.distance(p0, p1).unwrap();
        let db = b.distance(p0, p1).unwrap();
        assert!((da - db).abs() < 0.5, "da {da} db {db}");
    }
}
