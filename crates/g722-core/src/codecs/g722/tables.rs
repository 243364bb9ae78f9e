//! G.722 Tables and Constants
//!
//! Quantizer, scale-factor and filter tables from ITU-T Recommendation G.722.
//! Indices and values must not change: the bitstream depends on them exactly.

/// QMF filter coefficients, one half of the symmetric 24-tap response
pub const QMF_COEFFS: [i32; 12] = [3, -11, 12, 32, -210, 951, 3876, -805, 362, -156, 53, -11];

/// Length of the QMF delay line
pub const QMF_DELAY_LEN: usize = 24;

/// Low-band quantizer decision levels (QUANTL), scaled by `det >> 12`
pub const Q6: [i32; 32] = [
    0, 35, 72, 110, 150, 190, 233, 276, 323, 370, 422, 473, 530, 587, 650, 714, 786, 858, 940,
    1023, 1121, 1219, 1339, 1458, 1612, 1765, 1980, 2195, 2557, 2919, 0, 0,
];

/// Low-band 6-bit codes for negative differences
pub const ILN: [i32; 32] = [
    0, 63, 62, 31, 30, 29, 28, 27, 26, 25, 24, 23, 22, 21, 20, 19, 18, 17, 16, 15, 14, 13, 12, 11,
    10, 9, 8, 7, 6, 5, 4, 0,
];

/// Low-band 6-bit codes for non-negative differences
pub const ILP: [i32; 32] = [
    0, 61, 60, 59, 58, 57, 56, 55, 54, 53, 52, 51, 50, 49, 48, 47, 46, 45, 44, 43, 42, 41, 40, 39,
    38, 37, 36, 35, 34, 33, 32, 0,
];

/// Low-band log scale factor multipliers (LOGSCL)
pub const WL: [i32; 8] = [-60, -30, 58, 172, 334, 538, 1198, 3042];

/// Maps a 4-bit low-band code to its `WL` index
pub const RL42: [i32; 16] = [0, 7, 6, 5, 4, 3, 2, 1, 7, 6, 5, 4, 3, 2, 1, 0];

/// Inverse log table for scale factor computation (SCALEL/SCALEH)
pub const ILB: [i32; 32] = [
    2048, 2093, 2139, 2186, 2233, 2282, 2332, 2383, 2435, 2489, 2543, 2599, 2656, 2714, 2774, 2834,
    2896, 2960, 3025, 3091, 3158, 3228, 3298, 3371, 3444, 3520, 3597, 3676, 3756, 3838, 3922, 4008,
];

/// 4-bit inverse quantizer outputs (48 kbit/s low band, and the adaptation path)
pub const QM4: [i32; 16] = [
    0, -20456, -12896, -8968, -6288, -4240, -2584, -1200, 20456, 12896, 8968, 6288, 4240, 2584,
    1200, 0,
];

/// 5-bit inverse quantizer outputs (56 kbit/s low band)
pub const QM5: [i32; 32] = [
    -280, -280, -23352, -17560, -14120, -11664, -9752, -8184, -6864, -5712, -4696, -3784, -2960,
    -2208, -1520, -880, 23352, 17560, 14120, 11664, 9752, 8184, 6864, 5712, 4696, 3784, 2960, 2208,
    1520, 880, 280, -280,
];

/// 6-bit inverse quantizer outputs (64 kbit/s low band)
pub const QM6: [i32; 64] = [
    -136, -136, -136, -136, -24808, -21904, -19008, -16704, -14984, -13512, -12280, -11192, -10232,
    -9360, -8576, -7856, -7192, -6576, -6000, -5456, -4944, -4464, -4008, -3576, -3168, -2776,
    -2400, -2032, -1688, -1360, -1040, -728, 24808, 21904, 19008, 16704, 14984, 13512, 12280,
    11192, 10232, 9360, 8576, 7856, 7192, 6576, 6000, 5456, 4944, 4464, 4008, 3576, 3168, 2776,
    2400, 2032, 1688, 1360, 1040, 728, 432, 136, -432, -136,
];

/// 2-bit high-band inverse quantizer outputs
pub const QM2: [i32; 4] = [-7408, -1616, 7408, 1616];

/// High-band quantizer decision level, scaled by `det >> 12`
pub const Q2_LEVEL: i32 = 564;

/// High-band 2-bit codes for negative differences
pub const IHN: [i32; 3] = [0, 1, 0];

/// High-band 2-bit codes for non-negative differences
pub const IHP: [i32; 3] = [0, 3, 2];

/// High-band log scale factor multipliers (LOGSCH)
pub const WH: [i32; 3] = [0, -214, 798];

/// Maps a 2-bit high-band code to its `WH` index
pub const RH2: [i32; 4] = [2, 1, 2, 1];

/// Upper bound of the low-band log scale factor
pub const NB_MAX_LOW: i32 = 18432;

/// Upper bound of the high-band log scale factor
pub const NB_MAX_HIGH: i32 = 22528;

/// Initial low-band quantizer step size
pub const DET_INIT_LOW: i32 = 32;

/// Initial high-band quantizer step size
pub const DET_INIT_HIGH: i32 = 8;
