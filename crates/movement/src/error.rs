//! Configuration errors.
//!
//! Everything here is raised while building a controller. A controller that
//! was constructed successfully never fails at tick time.

use thiserror::Error;

use crate::sensors::SensorKind;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("sensor {sensor:?} has invalid radius {radius}, radius must be positive")]
    InvalidSensorRadius { sensor: SensorKind, radius: f32 },

    #[error("sensor {0:?} is missing from the sensor table")]
    MissingSensor(SensorKind),

    #[error("sensor {0:?} is configured more than once")]
    DuplicateSensor(SensorKind),

    #[error("tuning value `{field}` is out of range: {value}")]
    InvalidTuning { field: &'static str, value: f32 },
}
