//! G.722 State Management
//!
//! Per-sub-band adaptive state. Every coder owns two of these: index 0 for
//! the low band and index 1 for the high band.

use super::tables::{DET_INIT_HIGH, DET_INIT_LOW};

/// Index of the low band in a coder's band array
pub const LOW_BAND: usize = 0;

/// Index of the high band in a coder's band array
pub const HIGH_BAND: usize = 1;

/// Adaptive predictor and quantizer state for one sub-band
///
/// History arrays are shift registers: index 0 holds the value computed for
/// the current sample, higher indices hold progressively older values.
/// All stored signal values are kept within the signed 16-bit range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Band {
    /// Predicted signal
    pub s: i32,
    /// Pole section of the prediction
    pub sp: i32,
    /// Zero section of the prediction
    pub sz: i32,
    /// Reconstructed signal history
    pub r: [i32; 3],
    /// Pole predictor coefficients
    pub a: [i32; 3],
    /// Pole predictor coefficients for the next sample
    pub ap: [i32; 3],
    /// Partially reconstructed signal history
    pub p: [i32; 3],
    /// Dequantized difference history
    pub d: [i32; 7],
    /// Zero predictor coefficients
    pub b: [i32; 7],
    /// Zero predictor coefficients for the next sample
    pub bp: [i32; 7],
    /// Sign scratch for the coefficient updates, only meaningful inside
    /// one predictor update
    pub(crate) sg: [i32; 7],
    /// Logarithmic scale factor
    pub nb: i32,
    /// Quantizer step size, derived from `nb`
    pub det: i32,
}

impl Band {
    /// Create the initial low-band state
    pub fn new_low_band() -> Self {
        Self {
            det: DET_INIT_LOW,
            ..Self::default()
        }
    }

    /// Create the initial high-band state
    pub fn new_high_band() -> Self {
        Self {
            det: DET_INIT_HIGH,
            ..Self::default()
        }
    }

    /// Create the initial pair of bands for a coder
    pub fn new_pair() -> [Self; 2] {
        [Self::new_low_band(), Self::new_high_band()]
    }
}
