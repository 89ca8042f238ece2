//! Environmental and personal inputs
//!
//! [`EnvironmentalInput`] carries the six scalars of the ISO 7730 model. It is
//! plain data: nothing in the engine mutates or clamps it. Callers that want
//! clamped values ask for them explicitly with
//! [`EnvironmentalInput::clamped_to`].
//!
//! Two ready-made [`InputSource`]s live here as well:
//! - [`FixedInput`]: manual entry, returns the same reading until changed
//! - [`SimulatedInput`]: deterministic stream of plausible indoor readings

use core::fmt;

use crate::constants::comfort::{
    DEFAULT_AIR_TEMP_C, DEFAULT_CLO, DEFAULT_HUMIDITY_PCT, DEFAULT_MET, DEFAULT_VELOCITY_M_PER_S,
};
use crate::guard::InputBounds;
use crate::traits::InputSource;

/// The six inputs of the PMV model
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalInput {
    /// Dry-bulb air temperature (°C)
    pub air_temperature: f64,

    /// Mean radiant temperature (°C)
    pub mean_radiant_temp: f64,

    /// Relative air velocity (m/s)
    pub air_velocity: f64,

    /// Relative humidity (%)
    pub relative_humidity: f64,

    /// Metabolic rate (met, 1 met = 58.15 W/m²)
    pub met: f64,

    /// Clothing insulation (clo, 1 clo = 0.155 m²·K/W)
    pub clo: f64,
}

impl Default for EnvironmentalInput {
    fn default() -> Self {
        Self {
            air_temperature: DEFAULT_AIR_TEMP_C,
            mean_radiant_temp: DEFAULT_AIR_TEMP_C,
            air_velocity: DEFAULT_VELOCITY_M_PER_S,
            relative_humidity: DEFAULT_HUMIDITY_PCT,
            met: DEFAULT_MET,
            clo: DEFAULT_CLO,
        }
    }
}

impl EnvironmentalInput {
    /// Build an input in the conventional (tdb, tr, vr, rh, met, clo) order
    pub const fn new(
        air_temperature: f64,
        mean_radiant_temp: f64,
        air_velocity: f64,
        relative_humidity: f64,
        met: f64,
        clo: f64,
    ) -> Self {
        Self {
            air_temperature,
            mean_radiant_temp,
            air_velocity,
            relative_humidity,
            met,
            clo,
        }
    }

    /// Value of a single field
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::AirTemperature => self.air_temperature,
            InputField::MeanRadiantTemp => self.mean_radiant_temp,
            InputField::AirVelocity => self.air_velocity,
            InputField::RelativeHumidity => self.relative_humidity,
            InputField::Met => self.met,
            InputField::Clo => self.clo,
        }
    }

    /// Replace a single field
    pub fn set(&mut self, field: InputField, value: f64) {
        match field {
            InputField::AirTemperature => self.air_temperature = value,
            InputField::MeanRadiantTemp => self.mean_radiant_temp = value,
            InputField::AirVelocity => self.air_velocity = value,
            InputField::RelativeHumidity => self.relative_humidity = value,
            InputField::Met => self.met = value,
            InputField::Clo => self.clo = value,
        }
    }

    /// All fields paired with their names, in declaration order
    pub fn fields(&self) -> [(InputField, f64); 6] {
        InputField::ALL.map(|field| (field, self.get(field)))
    }

    /// Copy with every field clamped into `bounds`
    ///
    /// The guard never calls this. It exists for callers who decide that
    /// clamping is the behavior they want (e.g. slider-driven dashboards).
    /// NaN fields stay NaN, and a NaN limit leaves that side open.
    pub fn clamped_to(&self, bounds: &InputBounds) -> Self {
        let mut clamped = *self;
        for (field, value) in self.fields() {
            let range = bounds.get(field);
            // f64::clamp panics on NaN or inverted limits
            let value = if value < range.min {
                range.min
            } else if value > range.max {
                range.max
            } else {
                value
            };
            clamped.set(field, value);
        }
        clamped
    }
}

/// Names the six inputs, for error reporting and bound lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputField {
    /// Dry-bulb air temperature
    AirTemperature,
    /// Mean radiant temperature
    MeanRadiantTemp,
    /// Relative air velocity
    AirVelocity,
    /// Relative humidity
    RelativeHumidity,
    /// Metabolic rate
    Met,
    /// Clothing insulation
    Clo,
}

impl InputField {
    /// Every field in declaration order
    pub const ALL: [InputField; 6] = [
        InputField::AirTemperature,
        InputField::MeanRadiantTemp,
        InputField::AirVelocity,
        InputField::RelativeHumidity,
        InputField::Met,
        InputField::Clo,
    ];

    /// Stable snake_case name, also used as the session record key
    pub const fn name(&self) -> &'static str {
        match self {
            InputField::AirTemperature => "air_temperature",
            InputField::MeanRadiantTemp => "mean_radiant_temp",
            InputField::AirVelocity => "air_velocity",
            InputField::RelativeHumidity => "relative_humidity",
            InputField::Met => "met",
            InputField::Clo => "clo",
        }
    }

    /// Unit symbol for display
    pub const fn unit(&self) -> &'static str {
        match self {
            InputField::AirTemperature | InputField::MeanRadiantTemp => "°C",
            InputField::AirVelocity => "m/s",
            InputField::RelativeHumidity => "%",
            InputField::Met => "met",
            InputField::Clo => "clo",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Manual entry: hands out the same reading until the caller changes it
#[derive(Debug, Clone, Default)]
pub struct FixedInput {
    input: EnvironmentalInput,
}

impl FixedInput {
    /// Source that always yields `input`
    pub fn new(input: EnvironmentalInput) -> Self {
        Self { input }
    }

    /// Replace the reading handed out from now on
    pub fn set(&mut self, input: EnvironmentalInput) {
        self.input = input;
    }

    /// Current reading
    pub fn current(&self) -> &EnvironmentalInput {
        &self.input
    }
}

impl InputSource for FixedInput {
    fn next_input(&mut self) -> Option<EnvironmentalInput> {
        Some(self.input)
    }
}

/// Deterministic simulated indoor readings
///
/// Reproduces the dashboard's simulation mode: air and radiant temperature
/// 22–35 °C, humidity 30–80 %, air speed 0.1–0.5 m/s, seated activity
/// (1.2 met) in summer clothing (0.5 clo). Uses xorshift so a given seed
/// always produces the same stream.
#[derive(Debug, Clone)]
pub struct SimulatedInput {
    state: u32,
    remaining: Option<usize>,
}

impl SimulatedInput {
    /// Unbounded stream from `seed` (a zero seed is replaced by 1)
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
            remaining: None,
        }
    }

    /// Stop after `count` readings
    pub fn take_readings(mut self, count: usize) -> Self {
        self.remaining = Some(count);
        self
    }

    fn next_u32(&mut self) -> u32 {
        // Xorshift algorithm
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    fn gen_range(&mut self, min: f64, max: f64) -> f64 {
        let unit = (self.next_u32() >> 8) as f64 / 16_777_216.0;
        min + unit * (max - min)
    }
}

impl InputSource for SimulatedInput {
    fn next_input(&mut self) -> Option<EnvironmentalInput> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }

        Some(EnvironmentalInput {
            air_temperature: self.gen_range(22.0, 35.0),
            relative_humidity: self.gen_range(30.0, 80.0),
            air_velocity: self.gen_range(0.1, 0.5),
            mean_radiant_temp: self.gen_range(22.0, 35.0),
            met: DEFAULT_MET,
            clo: DEFAULT_CLO,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessors_round_trip() {
        let mut input = EnvironmentalInput::default();
        for (i, field) in InputField::ALL.iter().enumerate() {
            input.set(*field, i as f64);
        }
        assert_eq!(input, EnvironmentalInput::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0));
        assert_eq!(input.get(InputField::Clo), 5.0);
    }

    #[test]
    fn clamping_is_explicit_and_bounded() {
        let input = EnvironmentalInput::new(35.0, 12.0, 0.0, 95.0, 1.2, 0.5);
        let clamped = input.clamped_to(&InputBounds::iso());

        assert_eq!(clamped, EnvironmentalInput::new(30.0, 15.0, 0.05, 90.0, 1.2, 0.5));
        // Source value untouched
        assert_eq!(input.air_temperature, 35.0);
    }

    #[test]
    fn clamping_tolerates_misconfigured_bounds() {
        use crate::guard::FieldBounds;

        let nan_floor = InputBounds::iso().with_field(InputField::Met, FieldBounds::new(f64::NAN, 2.0));
        let clamped = EnvironmentalInput::default().clamped_to(&nan_floor);
        assert_eq!(clamped.met, EnvironmentalInput::default().met);

        let mut inverted = InputBounds::iso();
        inverted.clo = FieldBounds { min: 1.0, max: 0.4 };
        let input = EnvironmentalInput { clo: 0.2, ..EnvironmentalInput::default() };
        assert_eq!(input.clamped_to(&inverted).clo, 1.0);

        let mut nan_input = EnvironmentalInput::default();
        nan_input.relative_humidity = f64::NAN;
        assert!(nan_input.clamped_to(&InputBounds::iso()).relative_humidity.is_nan());
    }

    #[test]
    fn simulated_stream_is_deterministic_and_in_range() {
        let mut a = SimulatedInput::new(42);
        let mut b = SimulatedInput::new(42);

        for _ in 0..100 {
            let x = a.next_input().unwrap();
            assert_eq!(Some(x), b.next_input());
            assert!((22.0..=35.0).contains(&x.air_temperature));
            assert!((22.0..=35.0).contains(&x.mean_radiant_temp));
            assert!((30.0..=80.0).contains(&x.relative_humidity));
            assert!((0.1..=0.5).contains(&x.air_velocity));
            assert_eq!(x.met, 1.2);
            assert_eq!(x.clo, 0.5);
        }
    }

    #[test]
    fn simulated_stream_honours_reading_limit() {
        let mut source = SimulatedInput::new(7).take_readings(2);
        assert!(source.next_input().is_some());
        assert!(source.next_input().is_some());
        assert!(source.next_input().is_none());
    }

    #[test]
    fn fixed_input_repeats() {
        let mut source = FixedInput::new(EnvironmentalInput::default());
        assert_eq!(source.next_input(), Some(EnvironmentalInput::default()));

        let warm = EnvironmentalInput::new(28.0, 28.0, 0.1, 50.0, 1.2, 0.5);
        source.set(warm);
        assert_eq!(source.next_input(), Some(warm));
        assert_eq!(source.current(), &warm);
    }
}
