//! G.722 Test Utilities
//!
//! Deterministic signal generators and helpers shared by the test modules.

use crate::codecs::g722::bitstream::BitPacker;
use crate::codecs::g722::state::Band;
use crate::types::{Bitrate, CodecConfig};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Every bit rate, widest codeword first
pub const ALL_BITRATES: [Bitrate; 3] = [Bitrate::Rate64000, Bitrate::Rate56000, Bitrate::Rate48000];

/// Every combination of bit rate and option flags
pub fn all_configs() -> Vec<CodecConfig> {
    let mut configs = Vec::new();
    for bitrate in ALL_BITRATES {
        let base = CodecConfig::new(bitrate);
        configs.push(base);
        configs.push(base.packed());
        configs.push(base.eight_k());
        configs.push(base.eight_k().packed());
        configs.push(base.with_itu_test_mode(true));
    }
    configs
}

/// Sine wave at `freq` Hz sampled at `sample_rate` Hz
pub fn sine_wave(freq: f64, sample_rate: f64, amplitude: f64, len: usize) -> Vec<i16> {
    (0..len)
        .map(|n| {
            let phase = 2.0 * std::f64::consts::PI * freq * n as f64 / sample_rate;
            (amplitude * phase.sin()).round() as i16
        })
        .collect()
}

/// Seeded uniform noise in `-amplitude..=amplitude`
pub fn noise(seed: u64, amplitude: i16, len: usize) -> Vec<i16> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-amplitude..=amplitude)).collect()
}

/// Seeded random bytes
pub fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..len).map(|_| rng.r#gen()).collect()
}

/// Pack one-byte-per-codeword output into a packed bitstream
pub fn pack_codewords(width: u32, codes: &[u8]) -> Vec<u8> {
    let mut packer = BitPacker::new(width);
    codes.iter().filter_map(|&code| packer.push(code)).collect()
}

/// Check the predictor stability and scale factor bounds of a band
pub fn assert_band_bounds(band: &Band, nb_max: i32) {
    assert!(band.a[2].abs() <= 12288, "a2 out of range: {}", band.a[2]);
    assert!(
        band.a[1].abs() <= 15360 - band.a[2],
        "a1 {} exceeds stability limit for a2 {}",
        band.a[1],
        band.a[2]
    );
    assert!((0..=nb_max).contains(&band.nb), "nb out of range: {}", band.nb);
    assert!(band.det > 0, "det must stay positive");
}

/// Signal-to-noise ratio in dB of `decoded` against `reference` delayed by `delay`
pub fn snr_db(reference: &[i16], decoded: &[i16], delay: usize, skip: usize) -> f64 {
    let mut signal = 0.0;
    let mut error = 0.0;
    for n in skip..decoded.len() {
        let Some(&x) = n.checked_sub(delay).and_then(|i| reference.get(i)) else {
            continue;
        };
        let x = f64::from(x);
        let y = f64::from(decoded[n]);
        signal += x * x;
        error += (x - y) * (x - y);
    }
    if error == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal / error).log10()
}

/// Best SNR over a range of candidate codec delays
pub fn best_snr_db(reference: &[i16], decoded: &[i16], max_delay: usize, skip: usize) -> f64 {
    (0..=max_delay)
        .map(|delay| snr_db(reference, decoded, delay, skip))
        .fold(f64::NEG_INFINITY, f64::max)
}
