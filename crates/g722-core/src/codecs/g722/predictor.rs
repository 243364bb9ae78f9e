//! G.722 Adaptive Predictor ("block 4")
//!
//! Shared by both sub-bands and both directions. Given the dequantized
//! difference for the current sample, it reconstructs the signal, adapts the
//! pole and zero predictor coefficients, shifts the history registers and
//! computes the prediction for the next sample.

use super::math::{saturate, sign};
use super::state::Band;

/// Run one predictor update for `band` with dequantized difference `d`
pub fn block4(band: &mut Band, d: i32) {
    recons(band, d);
    uppol2(band);
    uppol1(band);
    upzero(band, d);
    delaya(band);
    band.sp = filtep(band);
    band.sz = filtez(band);
    band.s = saturate(band.sp + band.sz);
}

/// RECONS and PARREC: reconstructed and partially reconstructed signal
fn recons(band: &mut Band, d: i32) {
    band.d[0] = d;
    band.r[0] = saturate(band.s + d);
    band.p[0] = saturate(band.sz + d);
}

/// UPPOL2: second pole coefficient
pub(crate) fn uppol2(band: &mut Band) {
    for i in 0..3 {
        band.sg[i] = sign(band.p[i]);
    }

    let wd1 = saturate(band.a[1] << 2);
    let mut wd2 = if band.sg[0] == band.sg[1] { -wd1 } else { wd1 };
    if wd2 > 32767 {
        wd2 = 32767;
    }

    let mut wd3 = if band.sg[0] == band.sg[2] { 128 } else { -128 };
    wd3 += wd2 >> 7;
    wd3 += (band.a[2] * 32512) >> 15;

    band.ap[2] = wd3.clamp(-12288, 12288);
}

/// UPPOL1: first pole coefficient, limited by the second for stability
pub(crate) fn uppol1(band: &mut Band) {
    band.sg[0] = sign(band.p[0]);
    band.sg[1] = sign(band.p[1]);

    let wd1 = if band.sg[0] == band.sg[1] { 192 } else { -192 };
    let wd2 = (band.a[1] * 32640) >> 15;
    band.ap[1] = saturate(wd1 + wd2);

    let limit = saturate(15360 - band.ap[2]);
    band.ap[1] = band.ap[1].clamp(-limit, limit);
}

/// UPZERO: sign-sign adaptation of the six zero coefficients
pub(crate) fn upzero(band: &mut Band, d: i32) {
    let step = if d == 0 { 0 } else { 128 };
    band.sg[0] = sign(d);

    for i in 1..7 {
        band.sg[i] = sign(band.d[i]);
        let wd2 = if band.sg[i] == band.sg[0] { step } else { -step };
        let wd3 = (band.b[i] * 32640) >> 15;
        band.bp[i] = saturate(wd2 + wd3);
    }
}

/// DELAYA: shift the history registers and commit the new coefficients
pub(crate) fn delaya(band: &mut Band) {
    for i in (1..7).rev() {
        band.d[i] = band.d[i - 1];
        band.b[i] = band.bp[i];
    }

    for i in (1..3).rev() {
        band.r[i] = band.r[i - 1];
        band.p[i] = band.p[i - 1];
        band.a[i] = band.ap[i];
    }
}

/// FILTEP: pole section output
pub(crate) fn filtep(band: &Band) -> i32 {
    let wd1 = saturate(band.r[1] + band.r[1]);
    let wd1 = (band.a[1] * wd1) >> 15;
    let wd2 = saturate(band.r[2] + band.r[2]);
    let wd2 = (band.a[2] * wd2) >> 15;
    saturate(wd1 + wd2)
}

/// FILTEZ: zero section output
pub(crate) fn filtez(band: &Band) -> i32 {
    let sz = (1..7)
        .rev()
        .map(|i| (band.b[i] * saturate(band.d[i] + band.d[i])) >> 15)
        .sum();
    saturate(sz)
}
