// DrishtiGuide — Post-Fall Inactivity Tracking

/// Stillness timer armed by falls and cleared by movement.
///
/// Time comes from the sample stream (ms since boot); deltas use
/// `wrapping_sub` so a counter wrap does not produce a spurious alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct InactivityMonitor {
    last_movement_ms: u32,
    last_alert_ms: Option<u32>,
    triggered: bool,
}

impl InactivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement observed: restart the stillness clock and stand down.
    pub fn note_movement(&mut self, now_ms: u32) {
        self.last_movement_ms = now_ms;
        self.last_alert_ms = None;
        self.triggered = false;
    }

    /// A fall just landed: arm escalation, with stillness measured from here.
    pub fn seed_fall(&mut self, now_ms: u32) {
        self.last_movement_ms = now_ms;
        self.last_alert_ms = None;
        self.triggered = true;
    }

    /// Whether an inactivity alert is due now. Records the alert time when it
    /// is, so the next alert waits a full re-alert interval.
    ///
    /// The timeout comparison is inclusive: with stillness starting at T, the
    /// first alert lands on the sample at exactly T + timeout.
    pub fn alert_due(&mut self, now_ms: u32, timeout_ms: u32, realert_ms: u32) -> bool {
        if !self.triggered || self.stillness_ms(now_ms) < timeout_ms {
            return false;
        }
        let due = match self.last_alert_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= realert_ms,
        };
        if due {
            self.last_alert_ms = Some(now_ms);
        }
        due
    }

    /// Whether a fall has armed escalation and no movement has cleared it.
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    /// Milliseconds since the last movement (or fall seed).
    pub fn stillness_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.last_movement_ms)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
