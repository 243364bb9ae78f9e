//! G.722 ADPCM Implementation
//!
//! Sub-band quantization, inverse quantization and step-size adaptation.
//! The low band carries a 6-bit code (4 to 6 bits survive on the wire,
//! depending on the bit rate); the high band carries a 2-bit code.
//!
//! Both directions adapt from the same 4-bit (low) or 2-bit (high) index, so
//! an encoder and a decoder fed the same codewords track each other exactly.

use super::math::saturate;
use super::predictor::block4;
use super::state::Band;
use super::tables::*;

/// Low-band ADPCM encoder
///
/// Quantizes `xlow` against the band's prediction, adapts the band and
/// returns the 6-bit code.
pub fn low_band_encode(band: &mut Band, xlow: i32) -> i32 {
    // Block 1L, SUBTRA
    let el = saturate(xlow - band.s);

    // Block 1L, QUANTL
    let ilow = quantl(el, band.det);

    // Block 2L, INVQAL
    let ril = (ilow >> 2) as usize;
    let dlow = (band.det * QM4[ril]) >> 15;

    adapt_low(band, ril);
    block4(band, dlow);

    ilow
}

/// High-band ADPCM encoder
///
/// Quantizes `xhigh` against the band's prediction, adapts the band and
/// returns the 2-bit code.
pub fn high_band_encode(band: &mut Band, xhigh: i32) -> i32 {
    // Block 1H, SUBTRA
    let eh = saturate(xhigh - band.s);

    // Block 1H, QUANTH
    let ihigh = quanth(eh, band.det);

    // Block 2H, INVQAH
    let dhigh = (band.det * QM2[ihigh as usize]) >> 15;

    adapt_high(band, ihigh as usize);
    block4(band, dhigh);

    ihigh
}

/// Low-band ADPCM decoder
///
/// `ilr` is the low-band field of a codeword, already masked to the width
/// `bits_per_sample` leaves for it (6, 5 or 4 bits). Returns the
/// reconstructed low-band sample.
pub fn low_band_decode(band: &mut Band, ilr: i32, bits_per_sample: u32) -> i32 {
    let (wd2, ril) = match bits_per_sample {
        7 => (QM5[ilr as usize], ilr >> 1),
        6 => (QM4[ilr as usize], ilr),
        _ => (QM6[ilr as usize], ilr >> 2),
    };
    let ril = ril as usize;

    // Block 5L, INVQBL and RECONS
    let rlow = band.s + ((band.det * wd2) >> 15);

    // Block 6L, LIMIT
    let rlow = rlow.clamp(-16384, 16383);

    // Block 2L, INVQAL
    let dlow = (band.det * QM4[ril]) >> 15;

    adapt_low(band, ril);
    block4(band, dlow);

    rlow
}

/// High-band ADPCM decoder
///
/// Returns the reconstructed high-band sample for the 2-bit code `ihigh`.
pub fn high_band_decode(band: &mut Band, ihigh: i32) -> i32 {
    // Block 2H, INVQAH
    let dhigh = (band.det * QM2[ihigh as usize]) >> 15;

    // Block 5H, RECONS
    let rhigh = dhigh + band.s;

    // Block 6H, LIMIT
    let rhigh = rhigh.clamp(-16384, 16383);

    adapt_high(band, ihigh as usize);
    block4(band, dhigh);

    rhigh
}

/// Block 1L, QUANTL: 6-bit low-band quantizer
pub(crate) fn quantl(el: i32, det: i32) -> i32 {
    let wd = if el >= 0 { el } else { -(el + 1) };

    let i = (1..30)
        .find(|&i| wd < (Q6[i] * det) >> 12)
        .unwrap_or(30);

    if el < 0 {
        ILN[i]
    } else {
        ILP[i]
    }
}

/// Block 1H, QUANTH: 2-bit high-band quantizer
pub(crate) fn quanth(eh: i32, det: i32) -> i32 {
    let wd = if eh >= 0 { eh } else { -(eh + 1) };
    let mih = if wd >= (Q2_LEVEL * det) >> 12 { 2 } else { 1 };

    if eh < 0 {
        IHN[mih]
    } else {
        IHP[mih]
    }
}

/// Blocks 3L, LOGSCL and SCALEL
fn adapt_low(band: &mut Band, ril: usize) {
    let wd = (band.nb * 127) >> 7;
    band.nb = (wd + WL[RL42[ril] as usize]).clamp(0, NB_MAX_LOW);
    band.det = scale_factor(band.nb, 8);
}

/// Blocks 3H, LOGSCH and SCALEH
fn adapt_high(band: &mut Band, ihigh: usize) {
    let wd = (band.nb * 127) >> 7;
    band.nb = (wd + WH[RH2[ihigh] as usize]).clamp(0, NB_MAX_HIGH);
    band.det = scale_factor(band.nb, 10);
}

/// Convert a log scale factor to a linear step size
fn scale_factor(nb: i32, shift_base: i32) -> i32 {
    let wd1 = ((nb >> 6) & 31) as usize;
    let wd2 = shift_base - (nb >> 11);
    let wd3 = if wd2 < 0 {
        ILB[wd1] << -wd2
    } else {
        ILB[wd1] >> wd2
    };
    wd3 << 2
}
