//! Radio model constants and solver thresholds

/// Reference power at 1 meter from the transmitter (dBm)
pub const DEFAULT_REFERENCE_POWER: f64 = -59.0;

/// Path loss exponent (2.0 for free space, 2-4 indoors)
pub const DEFAULT_PATH_LOSS_EXPONENT: f64 = 2.0;

/// Determinant magnitude below which anchor geometry is treated as degenerate
pub const DEGENERACY_EPSILON: f64 = 1e-10;

/// Coordinates handed to the first three registered tags when automatic
/// anchor bootstrap is enabled
pub const BOOTSTRAP_ANCHOR_COORDS: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)];

/// Number of anchors the trilateration solver consumes
pub const REQUIRED_ANCHORS: usize = 3;
