//! Segment clipping against rectangular windows.

use geo::{Coord, CoordFloat, Rect};
use std::cmp::Ordering;

/// How two lines, each given as a point pair, relate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCross<T: CoordFloat> {
    /// No crossing; the lines are parallel or coincident.
    Parallel,
    /// The infinite lines cross, but outside at least one of the
    /// given segments.
    Lines(Coord<T>),
    /// The crossing lies within both segments.
    Segments(Coord<T>),
}

/// Crossing of the lines through `a0`-`a1` and `b0`-`b1`.
pub fn line_intersection<T: CoordFloat>(
    a0: Coord<T>,
    a1: Coord<T>,
    b0: Coord<T>,
    b1: Coord<T>,
) -> LineCross<T> {
    let den = (b1.y - b0.y) * (a1.x - a0.x) - (b1.x - b0.x) * (a1.y - a0.y);
    if den == T::zero() {
        return LineCross::Parallel;
    }
    let ua = ((b1.x - b0.x) * (a0.y - b0.y) - (b1.y - b0.y) * (a0.x - b0.x)) / den;
    let ub = ((a1.x - a0.x) * (a0.y - b0.y) - (a1.y - a0.y) * (a0.x - b0.x)) / den;
    let point = Coord {
        x: a0.x + ua * (a1.x - a0.x),
        y: a0.y + ua * (a1.y - a0.y),
    };
    if (T::zero()..=T::one()).contains(&ua) && (T::zero()..=T::one()).contains(&ub) {
        LineCross::Segments(point)
    } else {
        LineCross::Lines(point)
    }
}

/// Which ends of a clipped segment were moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCode {
    Inside,
    StartClipped,
    EndClipped,
    BothClipped,
}

/// A segment clipped to a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipped<T: CoordFloat> {
    pub start: Coord<T>,
    pub end: Coord<T>,
    pub code: ClipCode,
}

/// Clips the segment `start`-`end` to `bounds`. `None` means the
/// segment lies entirely outside.
pub fn clip<T: CoordFloat>(
    start: Coord<T>,
    end: Coord<T>,
    bounds: Rect<T>,
) -> Option<Clipped<T>> {
    let start_inside = contains(&bounds, &start);
    let end_inside = contains(&bounds, &end);
    if start_inside && end_inside {
        return Some(Clipped {
            start,
            end,
            code: ClipCode::Inside,
        });
    }

    let min = bounds.min();
    let max = bounds.max();
    // Both endpoints beyond the same window edge cannot cross it.
    if (start.x < min.x && end.x < min.x)
        || (start.x > max.x && end.x > max.x)
        || (start.y < min.y && end.y < min.y)
        || (start.y > max.y && end.y > max.y)
    {
        return None;
    }

    // Crossings against the window edges, ordered along the segment.
    let corners = [
        Coord { x: min.x, y: min.y },
        Coord { x: max.x, y: min.y },
        Coord { x: max.x, y: max.y },
        Coord { x: min.x, y: max.y },
    ];
    let mut crossings: Vec<(T, Coord<T>)> = Vec::new();
    for i in 0..4 {
        let edge = (corners[i], corners[(i + 1) % 4]);
        if let LineCross::Segments(p) = line_intersection(start, end, edge.0, edge.1) {
            crossings.push((param(&start, &end, &p), p));
        }
    }
    crossings.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    let first = crossings.first()?.1;
    let last = crossings.last()?.1;

    let clipped = if start_inside {
        Clipped {
            start,
            end: last,
            code: ClipCode::EndClipped,
        }
    } else if end_inside {
        Clipped {
            start: first,
            end,
            code: ClipCode::StartClipped,
        }
    } else {
        Clipped {
            start: first,
            end: last,
            code: ClipCode::BothClipped,
        }
    };
    Some(clipped)
}

/// Position of `p` along `start`-`end`, measured on the dominant
/// axis.
fn param<T: CoordFloat>(start: &Coord<T>, end: &Coord<T>, p: &Coord<T>) -> T {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if dx.abs() > dy.abs() {
        (p.x - start.x) / dx
    } else if dy != T::zero() {
        (p.y - start.y) / dy
    } else {
        T::zero()
    }
}

fn contains<T: CoordFloat>(bounds: &Rect<T>, p: &Coord<T>) -> bool {
    let min = bounds.min();
    let max = bounds.max();
    min.x <= p.x && p.x <= max.x && min.y <= p.y && p.y <= max.y
}

/// Geographic clip window in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonBounds {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

/// Clips a lon/lat segment (`x` is longitude) to a geographic window.
pub fn clip_lat_lon(
    start: Coord<f64>,
    end: Coord<f64>,
    bounds: LatLonBounds,
) -> Option<Clipped<f64>> {
    let rect = Rect::new(
        Coord {
            x: bounds.west,
            y: bounds.south,
        },
        Coord {
            x: bounds.east,
            y: bounds.north,
        },
    );
    clip(start, end, rect)
}

/// Even-odd test of `p` against a closed polygon. The last vertex is
/// implicitly joined back to the first.
pub fn point_in_polygon<T: CoordFloat>(p: Coord<T>, polygon: &[Coord<T>]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::{
        clip, clip_lat_lon, line_intersection, point_in_polygon, ClipCode, Clipped, LatLonBounds,
        LineCross,
    };
    use geo::{Coord, Rect};

    fn window() -> Rect<f64> {
        Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 })
    }

    #[test]
    fn test_segment_crossing() {
        let cross = line_intersection(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 5.0, y: -5.0 },
            Coord { x: 5.0, y: 5.0 },
        );
        assert_eq!(cross, LineCross::Segments(Coord { x: 5.0, y: 0.0 }));
    }

    #[test]
    fn test_crossing_beyond_segment_ends() {
        let cross = line_intersection(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 5.0, y: -5.0 },
            Coord { x: 5.0, y: 5.0 },
        );
        assert_eq!(cross, LineCross::Lines(Coord { x: 5.0, y: 0.0 }));
    }

    #[test]
    fn test_parallel_lines() {
        let cross = line_intersection(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 10.0, y: 1.0 },
        );
        assert_eq!(cross, LineCross::Parallel);
    }

    #[test]
    fn test_inside_segment_is_untouched() {
        let start = Coord { x: 1.0, y: 1.0 };
        let end = Coord { x: 9.0, y: 9.0 };
        assert_eq!(
            clip(start, end, window()),
            Some(Clipped {
                start,
                end,
                code: ClipCode::Inside
            })
        );
    }

    #[test]
    fn test_both_ends_clipped() {
        let clipped = clip(
            Coord { x: -5.0, y: 5.0 },
            Coord { x: 15.0, y: 5.0 },
            window(),
        )
        .unwrap();
        assert_eq!(clipped.code, ClipCode::BothClipped);
        assert_eq!(clipped.start, Coord { x: 0.0, y: 5.0 });
        assert_eq!(clipped.end, Coord { x: 10.0, y: 5.0 });
    }

    #[test]
    fn test_one_end_clipped() {
        let inside = Coord { x: 5.0, y: 5.0 };
        let outside = Coord { x: 5.0, y: 15.0 };

        let clipped = clip(inside, outside, window()).unwrap();
        assert_eq!(clipped.code, ClipCode::EndClipped);
        assert_eq!(clipped.start, inside);
        assert_eq!(clipped.end, Coord { x: 5.0, y: 10.0 });

        let clipped = clip(outside, inside, window()).unwrap();
        assert_eq!(clipped.code, ClipCode::StartClipped);
        assert_eq!(clipped.start, Coord { x: 5.0, y: 10.0 });
        assert_eq!(clipped.end, inside);
    }

    #[test]
    fn test_fully_outside_is_rejected() {
        assert_eq!(
            clip(
                Coord { x: -5.0, y: 20.0 },
                Coord { x: 15.0, y: 20.0 },
                window()
            ),
            None
        );
    }

    #[test]
    fn test_lat_lon_window() {
        let bounds = LatLonBounds {
            south: 41.0,
            north: 42.0,
            west: -71.0,
            east: -70.0,
        };
        let clipped = clip_lat_lon(
            Coord { x: -70.5, y: 41.5 },
            Coord { x: -69.5, y: 41.5 },
            bounds,
        )
        .unwrap();
        assert_eq!(clipped.code, ClipCode::EndClipped);
        assert_eq!(clipped.end, Coord { x: -70.0, y: 41.5 });
    }

    #[test]
    fn test_point_in_polygon() {
        let square = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 0.0, y: 10.0 },
        ];
        assert!(point_in_polygon(Coord { x: 5.0, y: 5.0 }, &square));
        assert!(!point_in_polygon(Coord { x: 15.0, y: 5.0 }, &square));

        // Concave; the notch at the top center is outside.
        let notched = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 5.0, y: 4.0 },
            Coord { x: 0.0, y: 10.0 },
        ];
        assert!(!point_in_polygon(Coord { x: 5.0, y: 8.0 }, &notched));
        assert!(point_in_polygon(Coord { x: 5.0, y: 2.0 }, &notched));
    }
}
