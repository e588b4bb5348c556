//! Daily price direction.

use std::fmt;

/// The discrete direction of one day's price move.
///
/// Each open trading day contributes exactly one slope to a simulated
/// trajectory; the slope selects the multiplicative factor applied to
/// the running price (`1 + v`, `1 - v`, or `1` for volatility `v`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Slope {
    /// Price moves up by one volatility step.
    Up,
    /// Price moves down by one volatility step.
    Down,
    /// Price is unchanged.
    Flat,
}

impl Slope {
    /// All slope values, in a fixed order.
    ///
    /// Useful for exhaustive iteration in tests and frequency counting.
    pub const ALL: [Slope; 3] = [Slope::Up, Slope::Down, Slope::Flat];
}

impl fmt::Display for Slope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slope::Up => "UP",
            Slope::Down => "DOWN",
            Slope::Flat => "FLAT",
        };
        write!(f, "{}", name)
    }
}
