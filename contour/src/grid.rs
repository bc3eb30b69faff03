use crate::error::ContourError;

/// A borrowed rectangular field of samples, row-major with post
/// `(0, 0)` at the southwest corner.
pub struct Grid<'a> {
    samples: &'a [f32],
    width: usize,
    height: usize,
    invalid: f32,
}

impl<'a> Grid<'a> {
    /// Wraps `samples` as a `width` x `height` field. Samples equal to
    /// `invalid` (or NaN) are holes the contour follower stops at.
    pub fn new(
        samples: &'a [f32],
        width: usize,
        height: usize,
        invalid: f32,
    ) -> Result<Self, ContourError> {
        if width < 2 || height < 2 || samples.len() != width * height {
            return Err(ContourError::Dimensions {
                width,
                height,
                samples: samples.len(),
            });
        }
        Ok(Self {
            samples,
            width,
            height,
            invalid,
        })
    }

    /// Sample at post `(x, y)`, `None` off-grid or invalid.
    pub(crate) fn value(&self, x: i64, y: i64) -> Option<f32> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let v = self.samples[y as usize * self.width + x as usize];
        if v.is_nan() || v == self.invalid {
            None
        } else {
            Some(v)
        }
    }

    /// Whether cell `(x, y)` has all four posts on the grid.
    pub(crate) fn contains_cell(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x + 1 < self.width as i64 && y + 1 < self.height as i64
    }
}
