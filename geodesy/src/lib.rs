//! Ellipsoidal geodesy for binned bathymetric surveys.
//!
//! The [`Ellipsoid`] type carries the direct and inverse geodetic
//! solvers; [`BinnedDistance`] trades a bounded accuracy loss for
//! throughput when the same small area is queried at high volume.

mod binned;
mod ellipsoid;
mod error;

pub use crate::{
    binned::BinnedDistance,
    ellipsoid::{wrap_longitude, Ellipsoid, InverseSolution},
    error::GeodesyError,
};
