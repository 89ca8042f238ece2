//! Session persistence for ComfortGuard
//!
//! Converts a monitoring session (history window, comfort configuration,
//! default inputs, notes, occupant feedback and display settings) to and
//! from a portable JSON record, and reads/writes those records as files.
//!
//! ```rust
//! use comfortguard_core::{EnvironmentalInput, FixedTime, MonitorConfig, TimeSource};
//! use comfortguard_session::SessionState;
//!
//! let clock = FixedTime::new(1_709_285_400_000);
//! let mut session = SessionState::start(MonitorConfig::default(), &clock);
//! session.monitor.evaluate(EnvironmentalInput::default(), clock.now() + 1_000)?;
//! session.notes = "Morning check".into();
//!
//! let json = session.to_json()?;
//! assert!(json.contains("\"timestamp_history\""));
//!
//! let restored = SessionState::from_json(&json)?;
//! assert_eq!(restored, session);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod errors;
pub mod record;
pub mod session;
pub mod store;
pub mod timefmt;

pub use errors::{SessionError, SessionResult};
pub use record::SessionRecord;
pub use session::{deserialize, serialize, SessionState};
