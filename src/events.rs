// DrishtiGuide — Sensor Samples, Fall Events & Detector States

// ---------------------------------------------------------------------------
// Acceleration Sample (scalar magnitude + monotonic timestamp)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default)]
pub struct AccelSample {
    /// Total acceleration magnitude in g (vector norm, so non-negative).
    pub magnitude: f32,
    /// Milliseconds since boot. Wraps after ~49 days.
    pub timestamp_ms: u32,
}

impl AccelSample {
    pub fn new(timestamp_ms: u32, magnitude: f32) -> Self {
        Self { magnitude, timestamp_ms }
    }

    /// Build a sample from raw accelerometer axes (in g).
    pub fn from_axes(timestamp_ms: u32, ax: f32, ay: f32, az: f32) -> Self {
        let magnitude = (ax * ax + ay * ay + az * az).sqrt();
        Self { magnitude, timestamp_ms }
    }
}

// ---------------------------------------------------------------------------
// Detector State
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorState {
    /// Baseline monitoring, waiting for a free-fall dip.
    Normal,
    /// A dip opened a detection window; waiting for the impact.
    LowG,
    /// A fall was just recorded; detection suppressed until the cooldown lapses.
    Cooldown,
}

impl DetectorState {
    /// Human-readable label for logging and status output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal   => "normal",
            Self::LowG     => "low-g",
            Self::Cooldown => "cooldown",
        }
    }
}

impl Default for DetectorState {
    fn default() -> Self {
        Self::Normal
    }
}

// ---------------------------------------------------------------------------
// Fall Event — one record per confirmed detection
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallEvent {
    /// When the high-g impact landed (ms since boot).
    pub timestamp_ms: u32,
    /// Magnitude of the triggering impact (g).
    pub max_acceleration: f32,
    /// Magnitude of the dip that opened the window (g).
    pub min_acceleration: f32,
    /// Dip entry to impact (ms).
    pub duration_ms: u32,
    /// Confirmed falls always take the emergency path.
    pub is_emergency: bool,
}

// ---------------------------------------------------------------------------
// Alert Events — sent to the alert task via channel
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy)]
pub enum AlertEvent {
    /// A fall was confirmed; carries the full event record.
    Fall(FallEvent),
    /// Warning-path alert (low-g dip, or stillness after a fall);
    /// carries the magnitude that accompanied it.
    Warning(f32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_axes_computes_vector_norm() {
        let sample = AccelSample::from_axes(0, 0.6, 0.8, 0.0);
        assert_relative_eq!(sample.magnitude, 1.0, epsilon = 1e-6);

        let resting = AccelSample::from_axes(100, 0.0, 0.0, 1.0);
        assert_relative_eq!(resting.magnitude, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn default_state_is_normal() {
        assert_eq!(DetectorState::default(), DetectorState::Normal);
        assert_eq!(DetectorState::Normal.display_name(), "normal");
        assert_eq!(DetectorState::Cooldown.display_name(), "cooldown");
    }
}
