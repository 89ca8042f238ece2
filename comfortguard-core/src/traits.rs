//! Core traits
//!
//! The engine accepts inputs from any origin (manual entry, simulation,
//! hardware) through one typed boundary: [`InputSource`]. Keep it simple;
//! hardware drivers live outside this crate and only need to produce an
//! [`EnvironmentalInput`].

use crate::input::EnvironmentalInput;

/// Anything that can hand the monitor its next set of inputs
pub trait InputSource {
    /// Produce the next reading, or `None` when the source has nothing to offer
    /// (disconnected sensor, exhausted replay)
    fn next_input(&mut self) -> Option<EnvironmentalInput>;
}
