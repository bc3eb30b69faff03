//! Marching-squares contour following.
//!
//! A contour at a given level is traced one cell at a time. The
//! orientation invariant is that posts above the level lie to the
//! left of travel; entering a cell, the two far corners then decide
//! whether the trace continues straight, turns, or hit a saddle.

use crate::grid::Grid;
use geo::Coord;
use log::debug;
use std::collections::HashSet;

/// Direction of travel when entering a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

impl Heading {
    fn left(self) -> Self {
        match self {
            Heading::East => Heading::North,
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
        }
    }

    fn right(self) -> Self {
        match self {
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
            Heading::North => Heading::East,
        }
    }

    fn offset(self) -> (i64, i64) {
        match self {
            Heading::East => (1, 0),
            Heading::North => (0, 1),
            Heading::West => (-1, 0),
            Heading::South => (0, -1),
        }
    }
}

/// A cell being entered and the direction of entry. The cell `(x, y)`
/// spans posts `(x, y)` to `(x + 1, y + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContourPoint {
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Canonical face id: a vertical face `(x, y)` joins posts `(x, y)`
/// and `(x, y + 1)`, a horizontal one joins `(x, y)` and `(x + 1, y)`.
type FaceKey = (i64, i64, Axis);

impl ContourPoint {
    fn face_key(&self) -> FaceKey {
        match self.heading {
            Heading::East => (self.x, self.y, Axis::Vertical),
            Heading::West => (self.x + 1, self.y, Axis::Vertical),
            Heading::North => (self.x, self.y, Axis::Horizontal),
            Heading::South => (self.x, self.y + 1, Axis::Horizontal),
        }
    }

    fn advance(&self, heading: Heading) -> ContourPoint {
        let (dx, dy) = heading.offset();
        ContourPoint {
            x: self.x + dx,
            y: self.y + dy,
            heading,
        }
    }
}

/// Why a trace stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The trace returned to a face it had already crossed; the last
    /// point repeats the point where the ring closed.
    Closed,
    /// The trace ran off the edge of the grid.
    Edge,
    /// The trace stopped at invalid data or the point budget.
    Segmented,
}

/// One traced contour, in post coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub points: Vec<Coord<f64>>,
    pub termination: Termination,
}

/// Outcome of a single follower transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The entry crossing and the cell the trace continues into.
    Continue {
        crossing: Coord<f64>,
        next: ContourPoint,
    },
    /// The entry crossing was recorded but the trace ends here.
    Last {
        crossing: Coord<f64>,
        termination: Termination,
    },
    /// The entry face could not be evaluated; no crossing recorded.
    Invalid,
}

#[derive(Debug, PartialEq, Eq)]
enum Turn {
    Ahead,
    Left,
    Right,
    Saddle,
}

fn classify(level: f32, left: f32, right: f32) -> Turn {
    match (left > level, right > level) {
        (true, false) => Turn::Ahead,
        (true, true) => Turn::Right,
        (false, false) => Turn::Left,
        (false, true) => Turn::Saddle,
    }
}

/// Follows contours of one level over a grid, remembering every face
/// crossed so that successive traces never overlap.
pub struct Tracer<'a> {
    grid: &'a Grid<'a>,
    level: f32,
    used: HashSet<FaceKey>,
}

impl<'a> Tracer<'a> {
    pub fn new(grid: &'a Grid<'a>, level: f32) -> Self {
        Self {
            grid,
            level,
            used: HashSet::new(),
        }
    }

    /// Follows one contour from `start` until it closes, leaves the
    /// grid, or stops at invalid data or the `max_points` budget.
    ///
    /// Posts above the level must lie to the left of travel at
    /// `start`. Faces crossed are remembered across calls on the same
    /// tracer, so a start on an already-traced contour closes
    /// immediately.
    pub fn follow(&mut self, start: ContourPoint, max_points: usize) -> Trace {
        let mut points = Vec::new();
        let mut cp = start;
        let termination = loop {
            if points.len() >= max_points {
                break Termination::Segmented;
            }
            match self.step(cp) {
                Step::Continue { crossing, next } => {
                    points.push(crossing);
                    cp = next;
                }
                Step::Last {
                    crossing,
                    termination,
                } => {
                    points.push(crossing);
                    break termination;
                }
                Step::Invalid => break Termination::Segmented,
            }
        };
        debug!(
            "trace ended: {termination:?}, {count} points",
            count = points.len()
        );
        Trace {
            points,
            termination,
        }
    }

    /// A single transition: records the crossing on the face `cp`
    /// enters through, marks the face, and resolves where the trace
    /// goes next.
    pub fn step(&mut self, cp: ContourPoint) -> Step {
        let Some(crossing) = self.entry_crossing(&cp) else {
            return Step::Invalid;
        };
        if !self.used.insert(cp.face_key()) {
            return Step::Last {
                crossing,
                termination: Termination::Closed,
            };
        }
        if !self.grid.contains_cell(cp.x, cp.y) {
            return Step::Last {
                crossing,
                termination: Termination::Edge,
            };
        }
        let Some([bl, br, tr, tl]) = self.corners(&cp) else {
            return Step::Last {
                crossing,
                termination: Termination::Segmented,
            };
        };
        // Far corners on the exit side, seen from the entry face.
        let (far_left, far_right) = match cp.heading {
            Heading::East => (tr, br),
            Heading::North => (tl, tr),
            Heading::West => (bl, tl),
            Heading::South => (br, bl),
        };
        let heading = match classify(self.level, far_left, far_right) {
            Turn::Ahead => cp.heading,
            Turn::Left => cp.heading.left(),
            Turn::Right => cp.heading.right(),
            Turn::Saddle => match self.resolve_saddle(&cp, crossing) {
                Some(heading) => heading,
                None => {
                    return Step::Last {
                        crossing,
                        termination: Termination::Closed,
                    }
                }
            },
        };
        Step::Continue {
            crossing,
            next: cp.advance(heading),
        }
    }

    /// Where the contour crosses the face `cp` enters through, in
    /// post coordinates.
    fn entry_crossing(&self, cp: &ContourPoint) -> Option<Coord<f64>> {
        let (x, y) = (cp.x, cp.y);
        let ((ax, ay), (bx, by)) = match cp.heading {
            Heading::East => ((x, y), (x, y + 1)),
            Heading::West => ((x + 1, y), (x + 1, y + 1)),
            Heading::North => ((x, y), (x + 1, y)),
            Heading::South => ((x, y + 1), (x + 1, y + 1)),
        };
        let va = f64::from(self.grid.value(ax, ay)?);
        let vb = f64::from(self.grid.value(bx, by)?);
        let t = (f64::from(self.level) - va) / (vb - va);
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
        Some(Coord {
            x: ax as f64 + t * (bx - ax) as f64,
            y: ay as f64 + t * (by - ay) as f64,
        })
    }

    /// Cell posts in `[bl, br, tr, tl]` order, `None` if any is
    /// invalid.
    fn corners(&self, cp: &ContourPoint) -> Option<[f32; 4]> {
        Some([
            self.grid.value(cp.x, cp.y)?,
            self.grid.value(cp.x + 1, cp.y)?,
            self.grid.value(cp.x + 1, cp.y + 1)?,
            self.grid.value(cp.x, cp.y + 1)?,
        ])
    }

    /// Picks the exit of an ambiguous cell where posts above the level
    /// sit on both diagonals. An unused face wins over a used one;
    /// with both free, the exit nearer the entry crossing wins. Both
    /// used means the trace has boxed itself in.
    fn resolve_saddle(&self, cp: &ContourPoint, entry: Coord<f64>) -> Option<Heading> {
        let left = cp.advance(cp.heading.left());
        let right = cp.advance(cp.heading.right());
        match (
            self.used.contains(&left.face_key()),
            self.used.contains(&right.face_key()),
        ) {
            (true, true) => None,
            (true, false) => Some(right.heading),
            (false, true) => Some(left.heading),
            (false, false) => {
                let lp = self.entry_crossing(&left)?;
                let rp = self.entry_crossing(&right)?;
                let ld = (lp.x - entry.x).hypot(lp.y - entry.y);
                let rd = (rp.x - entry.x).hypot(rp.y - entry.y);
                if rd < ld {
                    Some(right.heading)
                } else {
                    Some(left.heading)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, ContourPoint, Heading, Step, Termination, Tracer, Turn};
    use crate::grid::Grid;
    use approx::assert_relative_eq;
    use geo::Coord;

    const INVALID: f32 = -999.0;

    /// Radial bump centered between posts; the 5.0 contour is a circle
    /// of radius 5.
    fn bump_samples() -> Vec<f32> {
        let mut samples = Vec::with_capacity(400);
        for y in 0..20 {
            for x in 0..20 {
                let dx = x as f32 - 9.5;
                let dy = y as f32 - 9.5;
                samples.push(10.0 - dx.hypot(dy));
            }
        }
        samples
    }

    /// Plane sloping up to the east; the 2.5 contour is the vertical
    /// line x = 2.5.
    fn slope_samples(width: usize, height: usize) -> Vec<f32> {
        let mut samples = Vec::with_capacity(width * height);
        for _ in 0..height {
            for x in 0..width {
                samples.push(x as f32);
            }
        }
        samples
    }

    #[test]
    fn test_cell_classification() {
        // High posts sit to the left of travel; the far corners decide
        // the turn.
        assert_eq!(classify(5.0, 6.0, 4.0), Turn::Ahead);
        assert_eq!(classify(5.0, 6.0, 6.0), Turn::Right);
        assert_eq!(classify(5.0, 4.0, 4.0), Turn::Left);
        assert_eq!(classify(5.0, 4.0, 6.0), Turn::Saddle);
        // The level itself is not above the level.
        assert_eq!(classify(5.0, 5.0, 5.0), Turn::Left);
    }

    #[test]
    fn test_circular_contour_closes() {
        let samples = bump_samples();
        let grid = Grid::new(&samples, 20, 20, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 5.0);
        let start = ContourPoint {
            x: 9,
            y: 4,
            heading: Heading::East,
        };
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Closed);
        assert!(
            trace.points.len() >= 20 && trace.points.len() <= 50,
            "unexpected ring size {}",
            trace.points.len()
        );
        assert_eq!(trace.points.first(), trace.points.last());
        for p in &trace.points {
            let r = (p.x - 9.5).hypot(p.y - 9.5);
            assert!((4.5..=5.5).contains(&r), "point {p:?} off the ring");
        }
    }

    #[test]
    fn test_restart_on_traced_contour_closes_immediately() {
        let samples = bump_samples();
        let grid = Grid::new(&samples, 20, 20, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 5.0);
        let start = ContourPoint {
            x: 9,
            y: 4,
            heading: Heading::East,
        };
        let first = tracer.follow(start, 1000);
        assert_eq!(first.termination, Termination::Closed);
        let again = tracer.follow(start, 1000);
        assert_eq!(again.termination, Termination::Closed);
        assert_eq!(again.points.len(), 1);
    }

    #[test]
    fn test_single_step_transition() {
        let samples = slope_samples(8, 6);
        let grid = Grid::new(&samples, 8, 6, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 2.5);
        let cp = ContourPoint {
            x: 2,
            y: 4,
            heading: Heading::South,
        };
        // On the sloped plane the contour runs straight south, one
        // cell per step.
        assert_eq!(
            tracer.step(cp),
            Step::Continue {
                crossing: Coord { x: 2.5, y: 5.0 },
                next: ContourPoint {
                    x: 2,
                    y: 3,
                    heading: Heading::South,
                },
            }
        );
        // Re-entering the same face closes.
        assert_eq!(
            tracer.step(cp),
            Step::Last {
                crossing: Coord { x: 2.5, y: 5.0 },
                termination: Termination::Closed,
            }
        );
    }

    #[test]
    fn test_straight_contour_exits_at_edge() {
        let samples = slope_samples(8, 6);
        let grid = Grid::new(&samples, 8, 6, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 2.5);
        // High side is east, so the trace runs south.
        let start = ContourPoint {
            x: 2,
            y: 4,
            heading: Heading::South,
        };
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Edge);
        assert_eq!(trace.points.len(), 6);
        for (i, p) in trace.points.iter().enumerate() {
            assert_relative_eq!(p.x, 2.5);
            assert_relative_eq!(p.y, (5 - i) as f64);
        }
    }

    #[test]
    fn test_invalid_sample_segments_trace() {
        let mut samples = slope_samples(8, 6);
        samples[2 * 8 + 2] = INVALID;
        let grid = Grid::new(&samples, 8, 6, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 2.5);
        let start = ContourPoint {
            x: 2,
            y: 4,
            heading: Heading::South,
        };
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Segmented);
        assert_eq!(trace.points.len(), 3);
    }

    #[test]
    fn test_point_budget_segments_trace() {
        let samples = slope_samples(8, 6);
        let grid = Grid::new(&samples, 8, 6, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 2.5);
        let start = ContourPoint {
            x: 2,
            y: 4,
            heading: Heading::South,
        };
        let trace = tracer.follow(start, 3);
        assert_eq!(trace.termination, Termination::Segmented);
        assert_eq!(trace.points.len(), 3);
    }

    #[test]
    fn test_saddle_takes_shorter_exit() {
        // High posts on both diagonals; the south exit is nearer the
        // entry than the north one.
        let samples = vec![0.0f32, 0.55, 2.0, 0.45];
        let grid = Grid::new(&samples, 2, 2, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 0.5);
        let start = ContourPoint {
            x: 0,
            y: 0,
            heading: Heading::East,
        };
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Edge);
        assert_eq!(trace.points.len(), 2);
        assert_relative_eq!(trace.points[0].x, 0.0);
        assert_relative_eq!(trace.points[0].y, 0.25, epsilon = 1e-6);
        assert_relative_eq!(trace.points[1].x, 0.5 / 0.55, epsilon = 1e-6);
        assert_relative_eq!(trace.points[1].y, 0.0);
    }

    #[test]
    fn test_saddle_avoids_used_face() {
        let samples = vec![0.0f32, 0.55, 2.0, 0.45];
        let grid = Grid::new(&samples, 2, 2, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 0.5);
        let start = ContourPoint {
            x: 0,
            y: 0,
            heading: Heading::East,
        };
        // The shorter south exit is already crossed, so the trace must
        // leave north.
        let south = start.advance(Heading::South);
        tracer.used.insert(south.face_key());
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Edge);
        let last = trace.points.last().unwrap();
        assert_relative_eq!(last.y, 1.0);
    }

    #[test]
    fn test_saddle_with_both_exits_used_closes() {
        let samples = vec![0.0f32, 0.55, 2.0, 0.45];
        let grid = Grid::new(&samples, 2, 2, INVALID).unwrap();
        let mut tracer = Tracer::new(&grid, 0.5);
        let start = ContourPoint {
            x: 0,
            y: 0,
            heading: Heading::East,
        };
        tracer.used.insert(start.advance(Heading::South).face_key());
        tracer.used.insert(start.advance(Heading::North).face_key());
        let trace = tracer.follow(start, 1000);
        assert_eq!(trace.termination, Termination::Closed);
    }

    #[test]
    fn test_flat_face_crossing_falls_back_to_midpoint() {
        // Both entry posts sit exactly at the level.
        let samples = vec![2.5f32, 3.0, 2.5, 3.0];
        let grid = Grid::new(&samples, 2, 2, INVALID).unwrap();
        let tracer = Tracer::new(&grid, 2.5);
        let cp = ContourPoint {
            x: 0,
            y: 0,
            heading: Heading::East,
        };
        let p = tracer.entry_crossing(&cp).unwrap();
        assert_relative_eq!(p.y, 0.5);
    }
}
