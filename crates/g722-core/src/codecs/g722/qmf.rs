//! G.722 QMF (Quadrature Mirror Filter) Implementation
//!
//! The 24-tap QMF pair splits 16 kHz audio into two 8 kHz sub-bands and
//! merges them back. Both directions keep their own delay line; new samples
//! enter at the end, so index 0 holds the oldest value.

use super::math::saturate;
use super::tables::{QMF_COEFFS, QMF_DELAY_LEN};

/// QMF delay line
pub type QmfDelay = [i32; QMF_DELAY_LEN];

/// QMF analysis filter (encoder)
///
/// Consumes two consecutive input samples and returns the `(xlow, xhigh)`
/// sub-band pair. Without a second sample the newest slot keeps the value
/// it held before the shift, which is the previous pair's second sample.
pub fn qmf_analysis(delay: &mut QmfDelay, x0: i32, x1: Option<i32>) -> (i32, i32) {
    delay.copy_within(2.., 0);
    delay[QMF_DELAY_LEN - 2] = x0;
    if let Some(x1) = x1 {
        delay[QMF_DELAY_LEN - 1] = x1;
    }

    let (sumodd, sumeven) = accumulate(delay);

    let xlow = (sumeven + sumodd) >> 14;
    let xhigh = (sumeven - sumodd) >> 14;

    (xlow, xhigh)
}

/// QMF synthesis filter (decoder)
///
/// Consumes one reconstructed sub-band pair and returns two output samples
/// in playback order, each saturated to 16 bits.
pub fn qmf_synthesis(delay: &mut QmfDelay, rlow: i32, rhigh: i32) -> (i32, i32) {
    delay.copy_within(2.., 0);
    delay[QMF_DELAY_LEN - 2] = rlow + rhigh;
    delay[QMF_DELAY_LEN - 1] = rlow - rhigh;

    let (xout2, xout1) = accumulate(delay);

    (saturate(xout1 >> 11), saturate(xout2 >> 11))
}

/// Run both polyphase branches over the delay line
fn accumulate(delay: &QmfDelay) -> (i32, i32) {
    let mut even_taps = 0;
    let mut odd_taps = 0;

    for (i, &coeff) in QMF_COEFFS.iter().enumerate() {
        even_taps += delay[2 * i] * coeff;
        odd_taps += delay[2 * i + 1] * QMF_COEFFS[QMF_COEFFS.len() - 1 - i];
    }

    (even_taps, odd_taps)
}
