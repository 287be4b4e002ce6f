// DrishtiGuide — Two-Stage Fall Detector
//
// A free-fall dip below the low-g threshold followed by an impact above the
// high-g threshold within the detection window counts as one fall. Designed
// to be fed one magnitude sample per control-loop tick.

use crate::config::{DetectorConfig, MOVEMENT_BASELINE_MIN_SAMPLES};
use crate::events::{AccelSample, DetectorState, FallEvent};
use crate::history::AccelHistory;
use crate::inactivity::InactivityMonitor;

type EmergencyCallback = Box<dyn FnMut(&FallEvent) + Send>;
type WarningCallback = Box<dyn FnMut(f32) + Send>;

/// Point-in-time snapshot of the detector, for logging and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct DetectorStatus {
    pub state: DetectorState,
    /// Median of the recent magnitude history, if any samples arrived yet.
    pub filtered_magnitude: Option<f32>,
    pub history_len: usize,
    pub fall_count: u32,
    pub in_cooldown: bool,
    pub inactivity_triggered: bool,
    pub stillness_ms: u32,
}

/// Two-stage fall detector with cooldown and post-fall inactivity escalation.
///
/// Single-threaded by design: feed it from one control loop. Time advances
/// only through sample timestamps, which must be non-decreasing; all timer
/// arithmetic is wrap-tolerant.
pub struct FallDetector {
    config: DetectorConfig,

    // State machine
    state: DetectorState,
    low_g_started_ms: u32,
    low_g_entry_mag: f32,

    // Detection record
    last_fall: Option<FallEvent>,
    fall_detected: bool,
    fall_count: u32,

    // Filtering & escalation
    history: AccelHistory,
    inactivity: InactivityMonitor,

    // Detector time (timestamp of the most recent sample)
    last_sample_ms: u32,

    // Alert sinks
    emergency_cb: Option<EmergencyCallback>,
    warning_cb: Option<WarningCallback>,
}

impl FallDetector {
    pub fn new(config: DetectorConfig) -> Self {
        config.validate();
        Self {
            config,
            state: DetectorState::Normal,
            low_g_started_ms: 0,
            low_g_entry_mag: 0.0,
            last_fall: None,
            fall_detected: false,
            fall_count: 0,
            history: AccelHistory::new(),
            inactivity: InactivityMonitor::new(),
            last_sample_ms: 0,
            emergency_cb: None,
            warning_cb: None,
        }
    }

    /// Replace the dip/impact thresholds (g). Misordered values are accepted
    /// but logged.
    pub fn set_thresholds(&mut self, low_g: f32, high_g: f32) {
        if low_g >= high_g {
            log::warn!("Thresholds misordered: low {low_g:.2} g >= high {high_g:.2} g");
        }
        self.config.low_g_threshold = low_g;
        self.config.high_g_threshold = high_g;
    }

    /// Replace the detection window and cooldown durations (ms).
    pub fn set_timing(&mut self, window_ms: u32, cooldown_ms: u32) {
        self.config.detection_window_ms = window_ms;
        self.config.cooldown_ms = cooldown_ms;
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Register the emergency sink, called from inside `update()` on the
    /// detecting sample. Keep it fast; hand slow work to a channel.
    pub fn set_emergency_callback(&mut self, callback: impl FnMut(&FallEvent) + Send + 'static) {
        self.emergency_cb = Some(Box::new(callback));
    }

    /// Register the warning sink. Fires on a low-g dip (with the dip
    /// magnitude) and on every inactivity alert (with the filtered
    /// magnitude).
    pub fn set_warning_callback(&mut self, callback: impl FnMut(f32) + Send + 'static) {
        self.warning_cb = Some(Box::new(callback));
    }

    /// Return to a clean monitoring state. Idempotent. The lifetime fall
    /// counter and the registered sinks survive.
    pub fn reset(&mut self) {
        self.state = DetectorState::Normal;
        self.low_g_started_ms = 0;
        self.low_g_entry_mag = 0.0;
        self.last_fall = None;
        self.fall_detected = false;
        self.history.clear();
        self.inactivity.reset();
    }

    /// Feed one sample. Returns `true` exactly on the sample that completes
    /// a detection; duplicates are suppressed for the cooldown duration.
    pub fn update(&mut self, sample: AccelSample) -> bool {
        let now = sample.timestamp_ms;
        self.last_sample_ms = now;

        // A NaN from a misbehaving sensor, or a negative value from a bad
        // norm upstream, must not move the state machine or poison the
        // history.
        if sample.magnitude.is_nan() || sample.magnitude < 0.0 {
            log::debug!("Discarding malformed sample ({} g)", sample.magnitude);
            self.fall_detected = false;
            return false;
        }

        // The movement baseline is the median of the history as it stood
        // before this sample, so a genuine burst is never absorbed into the
        // value it is compared against.
        let magnitude = sample.magnitude;
        let baseline = self.history.median().unwrap_or(magnitude);
        let baseline_ready = self.history.len() >= MOVEMENT_BASELINE_MIN_SAMPLES;
        self.history.push(magnitude);

        let mut fell = false;
        let mut dip_warning = None;

        // ---- cooldown gate ----
        let gated = self
            .last_fall
            .map(|event| now.wrapping_sub(event.timestamp_ms) <= self.config.cooldown_ms)
            .unwrap_or(false);

        if !gated {
            if self.state == DetectorState::Cooldown {
                log::debug!("Cooldown over, resuming detection");
                self.state = DetectorState::Normal;
            }

            match self.state {
                DetectorState::Normal => {
                    if magnitude < self.config.low_g_threshold {
                        self.state = DetectorState::LowG;
                        self.low_g_started_ms = now;
                        self.low_g_entry_mag = magnitude;
                        dip_warning = Some(magnitude);
                        log::debug!("Low-g dip ({magnitude:.2} g), window open");
                    }
                }
                DetectorState::LowG => {
                    let dip_age = now.wrapping_sub(self.low_g_started_ms);
                    if dip_age > self.config.detection_window_ms {
                        // Window lapsed without an impact. The expiring
                        // sample is consumed; it cannot open a new window.
                        self.state = DetectorState::Normal;
                        log::debug!("Detection window lapsed after {dip_age} ms");
                    } else if magnitude > self.config.high_g_threshold {
                        let event = FallEvent {
                            timestamp_ms: now,
                            max_acceleration: magnitude,
                            min_acceleration: self.low_g_entry_mag,
                            duration_ms: dip_age,
                            is_emergency: true,
                        };
                        self.record_fall(event);
                        fell = true;
                    }
                }
                DetectorState::Cooldown => {}
            }
        }

        // ---- movement tracking (runs even while gated) ----
        // Deltas are ignored until the history backs the baseline, so a
        // cold-start fall cannot stand its own escalation down.
        let delta = (magnitude - baseline).abs();
        if fell {
            self.inactivity.seed_fall(now);
        } else if baseline_ready && delta >= self.config.movement_delta_g {
            self.inactivity.note_movement(now);
        }

        let inactivity_alert = self.inactivity.alert_due(
            now,
            self.config.inactivity_timeout_ms,
            self.config.inactivity_realert_ms,
        );
        if inactivity_alert {
            log::warn!(
                "No movement for {} ms after a fall",
                self.inactivity.stillness_ms(now)
            );
        }

        self.fall_detected = fell;

        // ---- alert sinks; every field above is final from here on ----
        if let Some(mag) = dip_warning {
            if let Some(cb) = self.warning_cb.as_mut() {
                cb(mag);
            }
        }
        if inactivity_alert {
            if let Some(cb) = self.warning_cb.as_mut() {
                cb(baseline);
            }
        }
        if fell {
            if let (Some(event), Some(cb)) = (self.last_fall, self.emergency_cb.as_mut()) {
                cb(&event);
            }
        }

        fell
    }

    /// Whether the most recent `update()` completed a detection.
    pub fn is_fall_detected(&self) -> bool {
        self.fall_detected
    }

    /// The most recently recorded fall, if any.
    pub fn last_fall(&self) -> Option<&FallEvent> {
        self.last_fall.as_ref()
    }

    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Lifetime detection count. Survives `reset()`.
    pub fn fall_count(&self) -> u32 {
        self.fall_count
    }

    pub fn reset_fall_count(&mut self) {
        self.fall_count = 0;
    }

    /// Whether the duplicate-suppression window after the last fall is open.
    pub fn is_in_cooldown(&self) -> bool {
        match self.last_fall {
            Some(event) => {
                self.last_sample_ms.wrapping_sub(event.timestamp_ms) <= self.config.cooldown_ms
            }
            None => false,
        }
    }

    /// Milliseconds between the last fall and the most recent sample.
    pub fn time_since_last_fall(&self) -> Option<u32> {
        self.last_fall
            .map(|event| self.last_sample_ms.wrapping_sub(event.timestamp_ms))
    }

    /// Escalation predicate: a fall armed the inactivity monitor and the
    /// stillness has lasted at least the inactivity timeout.
    pub fn should_trigger_emergency(&self) -> bool {
        self.inactivity.is_triggered()
            && self.inactivity.stillness_ms(self.last_sample_ms)
                >= self.config.inactivity_timeout_ms
    }

    /// Fabricate a detection at the current detector time, driving the same
    /// record, cooldown, and escalation path as a real impact.
    pub fn simulate_fall(&mut self) {
        let now = self.last_sample_ms;
        log::info!("Simulating a fall at {now} ms");
        let event = FallEvent {
            timestamp_ms: now,
            max_acceleration: self.config.high_g_threshold,
            min_acceleration: self.config.low_g_threshold,
            duration_ms: 0,
            is_emergency: true,
        };
        self.record_fall(event);
        self.inactivity.seed_fall(now);
        self.fall_detected = true;
        if let (Some(event), Some(cb)) = (self.last_fall, self.emergency_cb.as_mut()) {
            cb(&event);
        }
    }

    /// Point-in-time snapshot for logging and diagnostics.
    pub fn status(&self) -> DetectorStatus {
        DetectorStatus {
            state: self.state,
            filtered_magnitude: self.history.median(),
            history_len: self.history.len(),
            fall_count: self.fall_count,
            in_cooldown: self.is_in_cooldown(),
            inactivity_triggered: self.inactivity.is_triggered(),
            stillness_ms: self.inactivity.stillness_ms(self.last_sample_ms),
        }
    }

    fn record_fall(&mut self, event: FallEvent) {
        log::warn!(
            "Fall detected: dip {:.2} g → impact {:.2} g in {} ms",
            event.min_acceleration,
            event.max_acceleration,
            event.duration_ms
        );
        self.last_fall = Some(event);
        self.fall_count += 1;
        self.state = DetectorState::Cooldown;
    }
}

impl Default for FallDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use approx::assert_relative_eq;

    fn detector() -> FallDetector {
        FallDetector::default()
    }

    /// Feed (timestamp, magnitude) pairs; collect the timestamps that
    /// reported a detection.
    fn feed(det: &mut FallDetector, samples: &[(u32, f32)]) -> Vec<u32> {
        let mut detections = Vec::new();
        for &(t, mag) in samples {
            if det.update(AccelSample::new(t, mag)) {
                detections.push(t);
            }
        }
        detections
    }

    #[test]
    fn dip_then_impact_inside_window_is_one_fall() {
        let mut det = detector();
        let detections = feed(&mut det, &[(0, 1.0), (50, 0.2), (100, 0.25), (150, 3.0)]);
        assert_eq!(detections, vec![150]);
        assert!(det.is_fall_detected());

        let event = det.last_fall().unwrap();
        assert_eq!(event.timestamp_ms, 150);
        assert_relative_eq!(event.min_acceleration, 0.2);
        assert_relative_eq!(event.max_acceleration, 3.0);
        assert_eq!(event.duration_ms, 100);
        assert!(event.is_emergency);
        assert_eq!(det.state(), DetectorState::Cooldown);
        assert!(det.is_in_cooldown());
    }

    #[test]
    fn window_expiry_without_impact_is_not_a_fall() {
        let mut det = detector();
        let detections = feed(&mut det, &[(0, 1.0), (50, 0.2), (400, 0.25)]);
        assert!(detections.is_empty());
        assert_eq!(det.state(), DetectorState::Normal);
        assert!(det.last_fall().is_none());
    }

    #[test]
    fn sustained_impact_reports_once() {
        let mut det = detector();
        let detections = feed(
            &mut det,
            &[(0, 1.0), (100, 0.2), (200, 3.5), (300, 3.5), (400, 3.5), (500, 3.5)],
        );
        assert_eq!(detections, vec![200]);
        assert_eq!(det.fall_count(), 1);
        assert!(!det.is_fall_detected());
    }

    #[test]
    fn cooldown_swallows_a_second_spike() {
        let mut det = detector();
        feed(&mut det, &[(0, 1.0), (50, 0.2), (150, 3.0)]);
        assert_eq!(det.fall_count(), 1);

        // A second dip + spike entirely inside the 1000 ms cooldown.
        let detections = feed(&mut det, &[(400, 0.2), (600, 3.2), (1150, 1.0)]);
        assert!(detections.is_empty());
        assert_eq!(det.fall_count(), 1);

        // Past the cooldown a fresh dip/impact pair detects again.
        let detections = feed(&mut det, &[(1300, 0.2), (1400, 3.0)]);
        assert_eq!(detections, vec![1400]);
        assert_eq!(det.fall_count(), 2);
    }

    #[test]
    fn detection_resumes_only_past_the_cooldown() {
        let mut det = detector();
        feed(&mut det, &[(0, 0.2), (100, 3.0)]);
        assert!(det.is_in_cooldown());

        // Exactly at the boundary the gate still holds.
        assert!(!det.update(AccelSample::new(1100, 0.1)));
        assert_eq!(det.state(), DetectorState::Cooldown);
        assert!(det.is_in_cooldown());

        // One tick later the same dip opens a fresh window.
        assert!(!det.update(AccelSample::new(1101, 0.1)));
        assert_eq!(det.state(), DetectorState::LowG);
        assert!(!det.is_in_cooldown());
    }

    #[test]
    fn impact_on_the_window_edge_still_pairs() {
        let mut det = detector();
        let detections = feed(&mut det, &[(0, 1.0), (100, 0.2), (400, 3.0)]);
        assert_eq!(detections, vec![400]);
        assert_eq!(det.last_fall().unwrap().duration_ms, 300);
    }

    #[test]
    fn impact_after_the_window_edge_does_not_pair() {
        let mut det = detector();
        let detections = feed(&mut det, &[(0, 1.0), (100, 0.2), (401, 3.0)]);
        assert!(detections.is_empty());
        assert_eq!(det.state(), DetectorState::Normal);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut det = detector();
        feed(&mut det, &[(0, 0.2), (100, 3.0)]);
        assert!(det.last_fall().is_some());

        det.reset();
        det.reset();
        assert_eq!(det.state(), DetectorState::Normal);
        assert!(det.last_fall().is_none());
        assert!(!det.is_in_cooldown());
        assert!(!det.is_fall_detected());
        assert_eq!(det.time_since_last_fall(), None);

        // The lifetime counter survives; it has its own reset.
        assert_eq!(det.fall_count(), 1);
        det.reset_fall_count();
        assert_eq!(det.fall_count(), 0);
    }

    #[test]
    fn stillness_after_a_fall_escalates_and_repeats() {
        let mut det = detector();
        let warnings = Arc::new(AtomicU32::new(0));
        let counter = warnings.clone();
        det.set_warning_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Fall at t = 1000; the dip itself fires one warning.
        feed(&mut det, &[(800, 1.0), (900, 0.2), (1000, 3.0)]);
        assert_eq!(warnings.load(Ordering::SeqCst), 1);

        // Perfectly still at 1 g every 100 ms afterwards.
        let mut first_alert_at = None;
        let mut second_alert_at = None;
        let mut t = 1100;
        while t <= 22_000 {
            let before = warnings.load(Ordering::SeqCst);
            det.update(AccelSample::new(t, 1.0));
            if warnings.load(Ordering::SeqCst) > before {
                if first_alert_at.is_none() {
                    first_alert_at = Some(t);
                } else if second_alert_at.is_none() {
                    second_alert_at = Some(t);
                }
            }
            t += 100;
        }
        assert_eq!(first_alert_at, Some(11_000));
        assert_eq!(second_alert_at, Some(21_000));
        assert!(det.should_trigger_emergency());
    }

    #[test]
    fn movement_before_the_timeout_cancels_escalation() {
        let mut det = detector();
        let warnings = Arc::new(AtomicU32::new(0));
        let counter = warnings.clone();
        det.set_warning_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        feed(&mut det, &[(0, 1.0), (100, 0.2), (200, 3.0)]);
        let dip_warnings = warnings.load(Ordering::SeqCst);

        // A clear movement burst 5 s in, then stillness well past the
        // timeout: no inactivity alert may fire.
        det.update(AccelSample::new(5_200, 1.6));
        let mut t = 5_300;
        while t <= 40_000 {
            det.update(AccelSample::new(t, 1.0));
            t += 100;
        }
        assert_eq!(warnings.load(Ordering::SeqCst), dip_warnings);
        assert!(!det.should_trigger_emergency());
    }

    #[test]
    fn fall_on_the_first_samples_still_escalates() {
        let mut det = detector();
        let warnings = Arc::new(AtomicU32::new(0));
        let counter = warnings.clone();
        det.set_warning_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // The dip and impact are the first samples the detector ever sees,
        // so the early history is nothing but the fall itself.
        let detections = feed(&mut det, &[(0, 0.2), (100, 3.0)]);
        assert_eq!(detections, vec![100]);
        let dip_warnings = warnings.load(Ordering::SeqCst);

        // Lying still afterwards must still raise the alert on schedule.
        let mut alert_at = None;
        let mut t = 200;
        while t <= 12_000 {
            let before = warnings.load(Ordering::SeqCst);
            det.update(AccelSample::new(t, 1.0));
            if alert_at.is_none() && warnings.load(Ordering::SeqCst) > before {
                alert_at = Some(t);
            }
            t += 100;
        }
        assert_eq!(alert_at, Some(10_100));
        assert_eq!(warnings.load(Ordering::SeqCst), dip_warnings + 1);
        assert!(det.should_trigger_emergency());
    }

    #[test]
    fn emergency_callback_sees_the_final_event() {
        let mut det = detector();
        let captured = Arc::new(Mutex::new(Vec::new()));
        let recorder = captured.clone();
        det.set_emergency_callback(move |event: &FallEvent| {
            recorder.lock().unwrap().push(*event);
        });

        feed(&mut det, &[(0, 1.0), (50, 0.2), (150, 3.0)]);
        let events = captured.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].timestamp_ms, 150);
        assert!(events[0].is_emergency);
        assert_eq!(det.last_fall().copied().unwrap(), events[0]);
    }

    #[test]
    fn panicking_sink_cannot_corrupt_the_detector() {
        let mut det = detector();
        det.set_emergency_callback(|_| panic!("sink failure"));

        feed(&mut det, &[(0, 1.0), (50, 0.2)]);
        let call = catch_unwind(AssertUnwindSafe(|| det.update(AccelSample::new(150, 3.0))));
        assert!(call.is_err());

        // The detection landed in full before the sink ran.
        assert_eq!(det.state(), DetectorState::Cooldown);
        assert_eq!(det.fall_count(), 1);
        assert!(det.is_fall_detected());
        assert_eq!(det.last_fall().unwrap().timestamp_ms, 150);

        // Cooldown suppression and later re-detection still work.
        assert!(!det.update(AccelSample::new(300, 3.5)));
        assert!(!det.is_fall_detected());
        det.set_emergency_callback(|_| {});
        let detections = feed(&mut det, &[(1300, 0.2), (1400, 3.0)]);
        assert_eq!(detections, vec![1400]);
        assert_eq!(det.fall_count(), 2);
    }

    #[test]
    fn panicking_warning_sink_cannot_leave_a_stale_detection_flag() {
        let mut det = detector();
        det.set_timing(300, 0);

        // Latch a detection first, with no cooldown in the way.
        let detections = feed(&mut det, &[(0, 1.0), (50, 0.2), (150, 3.0)]);
        assert_eq!(detections, vec![150]);
        assert!(det.is_fall_detected());

        // The next dip panics in the warning sink. The latch is written
        // before any sink runs, so it reflects that this sample detected
        // nothing rather than holding the previous sample's result.
        det.set_warning_callback(|_| panic!("sink failure"));
        let call = catch_unwind(AssertUnwindSafe(|| det.update(AccelSample::new(250, 0.2))));
        assert!(call.is_err());
        assert!(!det.is_fall_detected());
        assert_eq!(det.state(), DetectorState::LowG);
    }

    #[test]
    fn malformed_samples_do_not_move_the_machine() {
        let mut det = detector();
        feed(&mut det, &[(0, 1.0), (100, 0.2)]);
        assert_eq!(det.state(), DetectorState::LowG);

        assert!(!det.update(AccelSample::new(150, f32::NAN)));
        assert!(!det.update(AccelSample::new(160, -0.5)));
        assert_eq!(det.state(), DetectorState::LowG);

        // The window stayed live, so a real impact still pairs.
        assert!(det.update(AccelSample::new(200, 3.0)));
    }

    #[test]
    fn nan_never_panics_or_detects() {
        let mut det = detector();
        for t in 0..10u32 {
            assert!(!det.update(AccelSample::new(t * 100, f32::NAN)));
        }
        assert_eq!(det.state(), DetectorState::Normal);
        assert_eq!(det.status().history_len, 0);
    }

    #[test]
    fn simulated_fall_takes_the_real_alert_path() {
        let mut det = detector();
        let fired = Arc::new(AtomicU32::new(0));
        let counter = fired.clone();
        det.set_emergency_callback(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        det.update(AccelSample::new(500, 1.0));
        det.simulate_fall();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(det.is_fall_detected());
        assert!(det.is_in_cooldown());
        assert_eq!(det.fall_count(), 1);
        assert_eq!(det.last_fall().unwrap().timestamp_ms, 500);

        // Real samples inside the simulated cooldown stay suppressed.
        assert!(!det.update(AccelSample::new(600, 0.2)));
        assert!(!det.update(AccelSample::new(700, 3.0)));
        assert_eq!(det.fall_count(), 1);
    }

    #[test]
    fn custom_thresholds_and_timing_apply() {
        let mut det = detector();
        det.set_thresholds(0.5, 2.0);
        det.set_timing(500, 200);
        assert_eq!(det.config().detection_window_ms, 500);
        assert_eq!(det.config().cooldown_ms, 200);

        let detections = feed(&mut det, &[(0, 1.0), (100, 0.45), (550, 2.1)]);
        assert_eq!(detections, vec![550]);
        assert_eq!(det.last_fall().unwrap().duration_ms, 450);

        // The 200 ms cooldown reopens quickly.
        let detections = feed(&mut det, &[(751, 0.4), (800, 2.5)]);
        assert_eq!(detections, vec![800]);
    }

    #[test]
    fn time_since_last_fall_tracks_sample_time() {
        let mut det = detector();
        assert_eq!(det.time_since_last_fall(), None);
        feed(&mut det, &[(0, 0.2), (100, 3.0)]);
        assert_eq!(det.time_since_last_fall(), Some(0));

        det.update(AccelSample::new(2_500, 1.0));
        assert_eq!(det.time_since_last_fall(), Some(2_400));
        assert!(!det.is_in_cooldown());
    }

    #[test]
    fn survives_timestamp_wraparound() {
        let mut det = detector();
        let start = u32::MAX - 200;
        feed(&mut det, &[(start, 1.0), (start + 100, 0.2)]);

        // The counter wraps between dip and impact.
        assert!(det.update(AccelSample::new(start.wrapping_add(250), 3.0)));
        assert_eq!(det.last_fall().unwrap().duration_ms, 150);
    }

    #[test]
    fn status_reflects_the_live_detector() {
        let mut det = detector();
        feed(&mut det, &[(0, 1.0), (100, 1.0), (200, 1.0)]);
        let status = det.status();
        assert_eq!(status.state, DetectorState::Normal);
        assert_eq!(status.history_len, 3);
        assert_relative_eq!(status.filtered_magnitude.unwrap(), 1.0);
        assert_eq!(status.fall_count, 0);
        assert!(!status.in_cooldown);
        assert!(!status.inactivity_triggered);
    }
}
