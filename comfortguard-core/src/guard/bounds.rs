//! Declared physical bounds for the six inputs
//!
//! Two presets cover the common cases:
//!
//! | Field              | ISO          | Exploratory  |
//! |--------------------|--------------|--------------|
//! | Air temperature    | 15–30 °C     | 10–40 °C     |
//! | Radiant temperature| 15–30 °C     | 10–40 °C     |
//! | Relative humidity  | 10–90 %      | 10–90 %      |
//! | Air velocity       | 0.05–1.0 m/s | 0.05–1.0 m/s |
//! | Metabolic rate     | 0.8–2.0 met  | 0.8–2.0 met  |
//! | Clothing           | 0.3–1.5 clo  | 0.3–1.5 clo  |
//!
//! All bounds are inclusive.

use crate::constants::comfort::{
    EXPLORATORY_TEMP_MAX_C, EXPLORATORY_TEMP_MIN_C, ISO_CLO_MAX, ISO_CLO_MIN, ISO_HUMIDITY_MAX_PCT,
    ISO_HUMIDITY_MIN_PCT, ISO_MET_MAX, ISO_MET_MIN, ISO_TEMP_MAX_C, ISO_TEMP_MIN_C,
    ISO_VELOCITY_MAX_M_PER_S, ISO_VELOCITY_MIN_M_PER_S,
};
use crate::input::InputField;

/// Inclusive range for one field
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldBounds {
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl FieldBounds {
    /// Create a range; swapped limits are put back in order
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self { min, max }
    }

    /// True when `value` lies inside the range (NaN never does)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Named bound presets, persisted with sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundsProfile {
    /// Range documented for ISO 7730 evaluation
    #[default]
    Iso,
    /// Wider temperatures for what-if simulation
    Exploratory,
}

impl BoundsProfile {
    /// The bounds this profile stands for
    pub fn bounds(&self) -> InputBounds {
        match self {
            BoundsProfile::Iso => InputBounds::iso(),
            BoundsProfile::Exploratory => InputBounds::exploratory(),
        }
    }
}

/// Bounds for all six inputs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputBounds {
    /// Air temperature (°C)
    pub air_temperature: FieldBounds,
    /// Mean radiant temperature (°C)
    pub mean_radiant_temp: FieldBounds,
    /// Air velocity (m/s)
    pub air_velocity: FieldBounds,
    /// Relative humidity (%)
    pub relative_humidity: FieldBounds,
    /// Metabolic rate (met)
    pub met: FieldBounds,
    /// Clothing insulation (clo)
    pub clo: FieldBounds,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::iso()
    }
}

impl InputBounds {
    /// ISO 7730 evaluation range
    pub fn iso() -> Self {
        Self {
            air_temperature: FieldBounds::new(ISO_TEMP_MIN_C, ISO_TEMP_MAX_C),
            mean_radiant_temp: FieldBounds::new(ISO_TEMP_MIN_C, ISO_TEMP_MAX_C),
            air_velocity: FieldBounds::new(ISO_VELOCITY_MIN_M_PER_S, ISO_VELOCITY_MAX_M_PER_S),
            relative_humidity: FieldBounds::new(ISO_HUMIDITY_MIN_PCT, ISO_HUMIDITY_MAX_PCT),
            met: FieldBounds::new(ISO_MET_MIN, ISO_MET_MAX),
            clo: FieldBounds::new(ISO_CLO_MIN, ISO_CLO_MAX),
        }
    }

    /// ISO range with temperatures widened for exploratory simulation
    pub fn exploratory() -> Self {
        let temps = FieldBounds::new(EXPLORATORY_TEMP_MIN_C, EXPLORATORY_TEMP_MAX_C);
        Self {
            air_temperature: temps,
            mean_radiant_temp: temps,
            ..Self::iso()
        }
    }

    /// Bounds for one field
    pub fn get(&self, field: InputField) -> FieldBounds {
        match field {
            InputField::AirTemperature => self.air_temperature,
            InputField::MeanRadiantTemp => self.mean_radiant_temp,
            InputField::AirVelocity => self.air_velocity,
            InputField::RelativeHumidity => self.relative_humidity,
            InputField::Met => self.met,
            InputField::Clo => self.clo,
        }
    }

    /// Override the bounds of one field
    pub fn with_field(mut self, field: InputField, bounds: FieldBounds) -> Self {
        match field {
            InputField::AirTemperature => self.air_temperature = bounds,
            InputField::MeanRadiantTemp => self.mean_radiant_temp = bounds,
            InputField::AirVelocity => self.air_velocity = bounds,
            InputField::RelativeHumidity => self.relative_humidity = bounds,
            InputField::Met => self.met = bounds,
            InputField::Clo => self.clo = bounds,
        }
        self
    }
}
