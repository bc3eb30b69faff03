//! Contour following over gridded bathymetry.
//!
//! [`Grid`] wraps a borrowed field of samples; [`Tracer`] follows a
//! depth contour across it one cell at a time, remembering crossed
//! faces so traces never overlap. The [`clip`] helpers trim contour
//! segments to rectangular output windows.

mod clip;
mod error;
mod follow;
mod grid;

pub use crate::{
    clip::{
        clip, clip_lat_lon, line_intersection, point_in_polygon, ClipCode, Clipped, LatLonBounds,
        LineCross,
    },
    error::ContourError,
    follow::{ContourPoint, Heading, Step, Termination, Trace, Tracer},
    grid::Grid,
};
