use rand::Rng;

/// An ascending run of scheduled byte offsets, consumed front to back.
///
/// Offsets are floating-point draws; jitter can push one fractional, negative
/// (it then fires on the first block) or past the end of the input (it then
/// never fires). The run is a cursor over a sorted immutable list, so each
/// offset is handed out exactly once.
#[derive(Debug, Default)]
pub struct Points {
    offsets: Vec<f64>,
    next: usize,
}

impl Points {
    fn from_draws(mut offsets: Vec<f64>) -> Self {
        offsets.sort_by(f64::total_cmp);
        Points { offsets, next: 0 }
    }

    /// Consume and return the front offset once `position` has reached it.
    ///
    /// At most one offset comes out per call; several pending offsets inside
    /// one block's span resolve one block at a time.
    pub fn take_due(&mut self, position: u64) -> Option<f64> {
        let point = *self.offsets.get(self.next)?;
        if position as f64 >= point {
            self.next += 1;
            Some(point)
        } else {
            None
        }
    }

    /// Offsets not yet consumed.
    pub fn remaining(&self) -> usize {
        self.offsets.len() - self.next
    }
}

/// Draw `split` offsets spread evenly across `size` bytes, each jittered by
/// up to half a division width, sorted ascending.
///
/// The division width is `size / split` in integer arithmetic; a zero hint
/// collapses every offset to zero, which makes them all fire on the very
/// first blocks.
pub fn split_points<R: Rng + ?Sized>(rng: &mut R, size: u64, split: u64) -> Points {
    if split == 0 {
        return Points::default();
    }
    let width = (size / split) as f64;
    let draws = (0..split)
        .map(|i| (i + 1) as f64 * width + width * (rng.gen::<f64>() - 0.5))
        .collect();
    Points::from_draws(draws)
}

/// Draw `floor(size * density)` corruption offsets uniformly in `[0, size)`,
/// sorted ascending. `density` behaves as expected corruptions per input
/// byte; zero, negative or NaN densities schedule nothing.
pub fn corruption_points<R: Rng + ?Sized>(rng: &mut R, size: u64, density: f64) -> Points {
    if density <= 0.0 {
        return Points::default();
    }
    let count = (size as f64 * density) as u64;
    let draws = (0..count)
        .map(|_| rng.gen::<f64>() * size as f64)
        .collect();
    Points::from_draws(draws)
}
