// DrishtiGuide — Scripted Motion Profiles
//
// Deterministic sample streams standing in for the MPU6050 on host builds.
// The monitor demo and the integration-style tests compose these segments
// into full scenarios.

use std::f32::consts::TAU;

use crate::events::AccelSample;

// Segment shapes (g-units, milliseconds).
const REST_RIPPLE_G: f32 = 0.008;
const WALK_SWING_G: f32 = 0.3;
const WALK_PERIOD_MS: f32 = 800.0;
const FALL_DIP_G: [f32; 2] = [0.22, 0.18];
const FALL_IMPACT_G: f32 = 3.2;

/// Chainable builder for synthetic magnitude streams on a running clock.
pub struct ProfileBuilder {
    samples: Vec<AccelSample>,
    cursor_ms: u32,
    interval_ms: u32,
}

impl ProfileBuilder {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            samples: Vec::new(),
            cursor_ms: 0,
            interval_ms,
        }
    }

    /// Quiet wear: 1 g with a ripple far below the movement threshold.
    pub fn rest(mut self, duration_ms: u32) -> Self {
        let end = self.cursor_ms + duration_ms;
        while self.cursor_ms < end {
            let phase = TAU * self.cursor_ms as f32 / 1000.0;
            self.push(1.0 + REST_RIPPLE_G * phase.sin());
        }
        self
    }

    /// Ordinary walking: 1 g swinging by ±0.3 g, well inside both
    /// detection thresholds but clearly registering as movement.
    pub fn walk(mut self, duration_ms: u32) -> Self {
        let end = self.cursor_ms + duration_ms;
        while self.cursor_ms < end {
            let phase = TAU * self.cursor_ms as f32 / WALK_PERIOD_MS;
            self.push(1.0 + WALK_SWING_G * phase.sin());
        }
        self
    }

    /// A fall: two free-fall dip samples, then the impact spike. What
    /// follows is up to the caller; append `stillness` to script a
    /// person who stays down.
    pub fn fall(mut self) -> Self {
        for dip in FALL_DIP_G {
            self.push(dip);
        }
        self.push(FALL_IMPACT_G);
        self
    }

    /// Motionless on the ground: exactly 1 g, no ripple at all.
    pub fn stillness(mut self, duration_ms: u32) -> Self {
        let end = self.cursor_ms + duration_ms;
        while self.cursor_ms < end {
            self.push(1.0);
        }
        self
    }

    pub fn build(self) -> Vec<AccelSample> {
        self.samples
    }

    fn push(&mut self, magnitude: f32) {
        self.samples.push(AccelSample::new(self.cursor_ms, magnitude));
        self.cursor_ms += self.interval_ms;
    }
}

/// The monitor demo's full script: quiet start, a walk, a fall, a long
/// stillness that raises an inactivity alert, then recovery movement.
pub fn demo_scenario(interval_ms: u32) -> Vec<AccelSample> {
    ProfileBuilder::new(interval_ms)
        .rest(1_000)
        .walk(3_000)
        .fall()
        .stillness(12_000)
        .walk(2_000)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::FallDetector;

    fn run(samples: &[AccelSample]) -> (FallDetector, u32) {
        let mut det = FallDetector::default();
        let mut detections = 0;
        for &sample in samples {
            if det.update(sample) {
                detections += 1;
            }
        }
        (det, detections)
    }

    #[test]
    fn samples_advance_on_the_requested_cadence() {
        let samples = ProfileBuilder::new(100).rest(500).build();
        let stamps: Vec<u32> = samples.iter().map(|s| s.timestamp_ms).collect();
        assert_eq!(stamps, vec![0, 100, 200, 300, 400]);
    }

    #[test]
    fn walking_alone_never_detects() {
        let samples = ProfileBuilder::new(100).rest(1_000).walk(10_000).build();
        let (det, detections) = run(&samples);
        assert_eq!(detections, 0);
        assert_eq!(det.fall_count(), 0);
    }

    #[test]
    fn fall_profile_triggers_exactly_once() {
        let samples = ProfileBuilder::new(100)
            .rest(1_000)
            .walk(2_000)
            .fall()
            .stillness(2_000)
            .build();
        let (det, detections) = run(&samples);
        assert_eq!(detections, 1);
        assert_eq!(det.fall_count(), 1);
        assert!(det.last_fall().unwrap().max_acceleration > 3.0);
    }

    #[test]
    fn demo_scenario_escalates_then_recovers() {
        let (det, detections) = run(&demo_scenario(100));
        assert_eq!(detections, 1);
        // The closing walk stood the inactivity monitor back down.
        assert!(!det.should_trigger_emergency());
        assert_eq!(det.status().fall_count, 1);
    }
}
