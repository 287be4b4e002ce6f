// DrishtiGuide — Acceleration History Ring Buffer

use crate::config::ACCEL_HISTORY_LEN;

/// Fixed-capacity ring of the most recent acceleration magnitudes.
///
/// Once full, each push overwrites the oldest entry. Backs the detector's
/// movement baseline and status output; never allocates after construction.
/// The detector filters NaN out before pushing, so the contents always have
/// a plain numeric order.
#[derive(Debug, Clone)]
pub struct AccelHistory {
    samples: [f32; ACCEL_HISTORY_LEN],
    write_idx: usize,
    len: usize,
}

impl AccelHistory {
    pub fn new() -> Self {
        Self {
            samples: [0.0; ACCEL_HISTORY_LEN],
            write_idx: 0,
            len: 0,
        }
    }

    /// Append a magnitude, evicting the oldest once the buffer is full.
    pub fn push(&mut self, magnitude: f32) {
        self.samples[self.write_idx] = magnitude;
        self.write_idx = (self.write_idx + 1) % ACCEL_HISTORY_LEN;
        if self.len < ACCEL_HISTORY_LEN {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == ACCEL_HISTORY_LEN
    }

    /// Most recently pushed magnitude.
    pub fn latest(&self) -> Option<f32> {
        if self.len == 0 {
            return None;
        }
        let idx = (self.write_idx + ACCEL_HISTORY_LEN - 1) % ACCEL_HISTORY_LEN;
        Some(self.samples[idx])
    }

    /// Median of the stored magnitudes (upper median for even counts).
    ///
    /// Sorts a stack copy; the live ring order is irrelevant here because
    /// the filled entries are always exactly `samples[..len]`.
    pub fn median(&self) -> Option<f32> {
        if self.len == 0 {
            return None;
        }
        let mut sorted = [0.0f32; ACCEL_HISTORY_LEN];
        sorted[..self.len].copy_from_slice(&self.samples[..self.len]);
        let filled = &mut sorted[..self.len];
        filled.sort_unstable_by(f32::total_cmp);
        Some(filled[self.len / 2])
    }

    pub fn clear(&mut self) {
        self.write_idx = 0;
        self.len = 0;
    }
}

impl Default for AccelHistory {
    fn default() -> Self {
        Self::new()
    }
}
