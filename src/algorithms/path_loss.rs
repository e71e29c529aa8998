//! Log-distance path-loss model for RSSI ranging

use crate::core::{DEFAULT_PATH_LOSS_EXPONENT, DEFAULT_REFERENCE_POWER};

/// Distance estimate derived from a single RSSI sample
///
/// An RSSI of exactly 0 carries no ranging information, so the model
/// distinguishes a usable range from an unknown one instead of overloading
/// a numeric sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Estimated range in meters, always > 0
    Known(f64),
    /// No range can be derived from the sample
    Unknown,
}

impl Distance {
    pub fn is_known(&self) -> bool {
        matches!(self, Distance::Known(_))
    }

    pub fn meters(&self) -> Option<f64> {
        match self {
            Distance::Known(m) => Some(*m),
            Distance::Unknown => None,
        }
    }

    /// Wire-compatible numeric form: `-1.0` stands for an unknown range
    pub fn sentinel_meters(&self) -> f64 {
        match self {
            Distance::Known(m) => *m,
            Distance::Unknown => -1.0,
        }
    }
}

/// Convert one RSSI sample to a distance estimate
///
/// Inverts the log-distance model `rssi(d) = reference_power - 10*n*log10(d)`:
/// `d = 10^((reference_power - rssi) / (10 * n))`.
///
/// `reference_power` is the expected RSSI at 1 meter (dBm) and
/// `path_loss_exponent` the environment decay constant. Pure and total over
/// every integer RSSI.
pub fn estimate_distance(rssi: i32, reference_power: f64, path_loss_exponent: f64) -> Distance {
    if rssi == 0 {
        return Distance::Unknown;
    }

    let ratio = (reference_power - rssi as f64) / (10.0 * path_loss_exponent);
    Distance::Known(10f64.powf(ratio))
}

/// [`estimate_distance`] with the calibration constants of this deployment
pub fn estimate_distance_default(rssi: i32) -> Distance {
    estimate_distance(rssi, DEFAULT_REFERENCE_POWER, DEFAULT_PATH_LOSS_EXPONENT)
}
