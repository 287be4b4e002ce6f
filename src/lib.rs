// DrishtiGuide — Fall-Detection Core Library

//! Two-stage fall detection for the DrishtiGuide assistive wearable.
//!
//! A fall is a free-fall dip (total acceleration below ~0.3 g) followed
//! within a short window by an impact spike (above ~2.8 g). The
//! [`FallDetector`] consumes scalar magnitude samples from any source, is
//! edge-triggered with a cooldown against duplicate reports, and escalates
//! through a warning sink when no movement follows a fall.
//!
//! The crate is hardware-free. The monitor binary drives a detector from
//! scripted motion profiles; `replay_csv` replays recorded accelerometer
//! sessions.

pub mod config;
pub mod csv_loader;
pub mod detector;
pub mod events;
pub mod history;
pub mod inactivity;
pub mod sim;

pub use config::DetectorConfig;
pub use detector::{DetectorStatus, FallDetector};
pub use events::{AccelSample, AlertEvent, DetectorState, FallEvent};
