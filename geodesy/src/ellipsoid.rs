//! Ellipsoidal direct and inverse geodetic solvers.
//!
//! Both solvers work on the reduced-latitude auxiliary sphere with a
//! truncated power series in flattening for the arc length (second
//! order, Sodano's expansion). The series is accurate to well under a
//! meter out to roughly 600 nautical miles; beyond that the truncation
//! error grows and no runtime check stops you.

use geo::Coord;
use std::f64::consts::PI;

const ARCSEC_PER_DEG: f64 = 3600.0;

/// Half turn and full turn, in arc-seconds.
const HALF_TURN_SEC: f64 = 648_000.0;
const FULL_TURN_SEC: f64 = 1_296_000.0;

/// A reference ellipsoid with its derived flattening terms.
///
/// Constants are computed per instance, so callers may freely mix
/// ellipsoids; there is no process-wide cached state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (meters).
    a: f64,

    /// Semi-minor axis (meters).
    b: f64,

    /// Flattening, `1 - b/a`.
    f: f64,
}

/// Distance and forward azimuth between two geodetic positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseSolution {
    /// Geodesic distance in meters.
    pub distance_m: f64,

    /// Forward azimuth in degrees, [0, 360) clockwise from north.
    pub azimuth_deg: f64,
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        b: 6_356_752.314_245,
        f: 0.003_352_810_664_747_48,
    };

    pub const CLARKE_1866: Self = Self {
        a: 6_378_206.4,
        b: 6_356_583.8,
        f: 0.003_390_075_303_928_79,
    };

    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b, f: 1.0 - b / a }
    }

    pub fn semi_major(&self) -> f64 {
        self.a
    }

    pub fn semi_minor(&self) -> f64 {
        self.b
    }

    /// Returns the distance and forward azimuth from `p1` to `p2`.
    ///
    /// Positions are `x` = longitude, `y` = latitude, in degrees. A
    /// longitude difference of more than 180° is taken the short way
    /// around the antimeridian.
    pub fn inverse(&self, p1: Coord<f64>, p2: Coord<f64>) -> InverseSolution {
        let f = self.f;
        let beta1 = ((1.0 - f) * p1.y.to_radians().tan()).atan();
        let beta2 = ((1.0 - f) * p2.y.to_radians().tan()).atan();
        let (sb1, cb1) = beta1.sin_cos();
        let (sb2, cb2) = beta2.sin_cos();

        let mut dlon = (p2.x - p1.x).to_radians();
        if dlon > PI {
            dlon -= 2.0 * PI;
        } else if dlon < -PI {
            dlon += 2.0 * PI;
        }
        let (sl, cl) = dlon.sin_cos();

        let distance_m = self.arc_length(sb1, cb1, sb2, cb2, dlon);

        // Forward azimuth on the auxiliary sphere. `east` and `north`
        // are the tangent components of the great circle at p1; the
        // quadrant is resolved from their signs:
        //
        //   north > 0, east >= 0  ->  atan      (0 .. 90]
        //   north < 0, any east   ->  atan + pi (90 .. 270)
        //   north > 0, east <  0  ->  atan + 2pi(270 .. 360)
        //   north = 0             ->  90 or 270 by sign of east
        let east = sl * cb2;
        let north = cb1 * sb2 - sb1 * cb2 * cl;
        let azimuth_deg = if east == 0.0 && north == 0.0 {
            0.0
        } else if north == 0.0 {
            if east > 0.0 {
                90.0
            } else {
                270.0
            }
        } else {
            let raw = (east / north).atan();
            let az = if north < 0.0 {
                raw + PI
            } else if east < 0.0 {
                raw + 2.0 * PI
            } else {
                raw
            };
            az.to_degrees()
        };

        InverseSolution {
            distance_m,
            azimuth_deg,
        }
    }

    /// Direct solver in the original's units: latitude, longitude and
    /// azimuth in arc-seconds, distance in meters, azimuth referenced
    /// to *south*, clockwise. Returns `(latitude, longitude)` in
    /// arc-seconds with longitude normalized into (-648000, 648000].
    ///
    /// Prefer [`Ellipsoid::displace`] unless you need this unit
    /// convention.
    pub fn direct(
        &self,
        lat_sec: f64,
        lon_sec: f64,
        azimuth_sec: f64,
        distance_m: f64,
    ) -> (f64, f64) {
        if distance_m == 0.0 {
            return (lat_sec, wrap_arcsec(lon_sec));
        }
        let f = self.f;
        let lat = (lat_sec / ARCSEC_PER_DEG).to_radians();
        // Rotate the south-referenced azimuth back to a great-circle
        // course from north.
        let az = (azimuth_sec / ARCSEC_PER_DEG).to_radians() - PI;
        let (saz, caz) = az.sin_cos();
        let beta1 = ((1.0 - f) * lat.tan()).atan();
        let (sb1, cb1) = beta1.sin_cos();

        // First guess at the spherical arc from the mean arc radius,
        // then walk the guess onto the series arc length. Two
        // corrections put the residual below the series truncation.
        let mut phi = distance_m / (self.b * (1.0 + f + f * f));
        let mut sb2 = sb1;
        let mut cb2 = cb1;
        let mut dlon = 0.0;
        for _ in 0..3 {
            let (sphi, cphi) = phi.sin_cos();
            sb2 = sb1 * cphi + cb1 * sphi * caz;
            cb2 = (1.0 - sb2 * sb2).sqrt();
            dlon = (sphi * saz).atan2(cb1 * cphi - sb1 * sphi * caz);
            let arc = self.arc_length(sb1, cb1, sb2, cb2, dlon);
            if arc == 0.0 {
                break;
            }
            phi *= distance_m / arc;
        }

        let lat2 = (sb2 / ((1.0 - f) * cb2)).atan();
        let lat2_sec = lat2.to_degrees() * ARCSEC_PER_DEG;
        let lon2_sec = wrap_arcsec(lon_sec + dlon.to_degrees() * ARCSEC_PER_DEG);
        (lat2_sec, lon2_sec)
    }

    /// Returns the position `distance_m` meters from `p` along
    /// `azimuth_deg` (degrees clockwise from north).
    ///
    /// Thin unit adapter over [`Ellipsoid::direct`]. A start point
    /// exactly on the equator heading exactly east or west is nudged
    /// off the equator by 1e-37 degrees; the degenerate case upsets
    /// the solver's angle recovery.
    pub fn displace(&self, p: Coord<f64>, azimuth_deg: f64, distance_m: f64) -> Coord<f64> {
        let mut lat = p.y;
        if lat == 0.0 && (azimuth_deg == 90.0 || azimuth_deg == 270.0) {
            lat = 1.0e-37;
        }
        let mut az = azimuth_deg + 180.0;
        if az >= 360.0 {
            az -= 360.0;
        }
        let (lat_sec, lon_sec) = self.direct(
            lat * ARCSEC_PER_DEG,
            p.x * ARCSEC_PER_DEG,
            az * ARCSEC_PER_DEG,
            distance_m,
        );
        Coord {
            x: lon_sec / ARCSEC_PER_DEG,
            y: lat_sec / ARCSEC_PER_DEG,
        }
    }

    /// Series arc length between two reduced latitudes separated by
    /// `dlon`, second order in flattening.
    fn arc_length(&self, sb1: f64, cb1: f64, sb2: f64, cb2: f64, dlon: f64) -> f64 {
        let f = self.f;
        let f2 = f * f;
        let ff = f + f2;
        let (sl, cl) = dlon.sin_cos();

        let aa = sb1 * sb2;
        let bb = cb1 * cb2;
        let cos_phi = aa + bb * cl;
        let sin_phi = ((sl * cb2) * (sl * cb2)
            + (sb2 * cb1 - sb1 * cb2 * cl) * (sb2 * cb1 - sb1 * cb2 * cl))
            .sqrt();
        if sin_phi == 0.0 {
            return 0.0;
        }
        let phi = sin_phi.atan2(cos_phi);
        let c = bb * sl / sin_phi;
        let m = 1.0 - c * c;

        let phi2 = phi * phi;
        let sc = sin_phi * cos_phi;
        let series = (1.0 + f + f2) * phi
            + aa * (ff * sin_phi - (f2 / 2.0) * phi2 / sin_phi)
            + m * (-(ff / 2.0) * (phi + sc) + (f2 / 2.0) * phi2 * (cos_phi / sin_phi))
            + aa * aa * (-(f2 / 2.0) * sc)
            + m * m
                * ((f2 / 16.0) * (phi + sc)
                    - (f2 / 2.0) * phi2 * (cos_phi / sin_phi)
                    - (f2 / 8.0) * sc * cos_phi * cos_phi)
            + aa * m * ((f2 / 2.0) * phi2 / sin_phi + (f2 / 2.0) * sc * cos_phi);
        self.b * series
    }
}

/// Normalizes an arc-second longitude into (-648000, 648000].
fn wrap_arcsec(mut sec: f64) -> f64 {
    while sec > HALF_TURN_SEC {
        sec -= FULL_TURN_SEC;
    }
    while sec <= -HALF_TURN_SEC {
        sec += FULL_TURN_SEC;
    }
    sec
}

/// Normalizes a degree longitude into (-180, 180].
pub fn wrap_longitude(deg: f64) -> f64 {
    wrap_arcsec(deg * ARCSEC_PER_DEG) / ARCSEC_PER_DEG
}
