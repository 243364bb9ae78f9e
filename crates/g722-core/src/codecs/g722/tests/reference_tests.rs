//! Reference Vector Tests
//!
//! Fixed codeword and PCM sequences for one deterministic input, per bit rate
//! and operating mode. The decoder vectors decode the encoder vectors with a
//! fresh decoder.

use crate::codecs::g722::{G722Decoder, G722Encoder};
use crate::types::{Bitrate, CodecConfig};

/// Sawtooth `((n * 1237) % 8000) - 4000` for n in 0..24
const INPUT: [i16; 24] = [
    -4000, -2763, -1526, -289, 948, 2185, 3422, -3341, -2104, -867, 370, 1607, 2844, -3919, -2682,
    -1445, -208, 1029, 2266, 3503, -3260, -2023, -786, 451,
];

fn check_vector(config: CodecConfig, codes: &[u8], pcm: &[i16]) {
    let mut encoder = G722Encoder::new(config);
    assert_eq!(encoder.encode(&INPUT), codes, "encode {:?}", config);

    let mut decoder = G722Decoder::new(config);
    assert_eq!(decoder.decode(codes), pcm, "decode {:?}", config);
}

#[test]
fn test_full_band_64k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate64000),
        &[52, 139, 33, 134, 34, 132, 8, 184, 39, 17, 158, 47],
        &[
            0, -1, -1, 0, 0, -1, -1, 2, 0, -8, 1, 25, 2, -72, 6, 138, -8, -263, -15, 463, 232,
            -995, -2187, -2496,
        ],
    );
}

#[test]
fn test_full_band_56k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate56000),
        &[26, 69, 16, 67, 17, 66, 4, 92, 19, 8, 79, 23],
        &[
            0, 0, -1, 0, 0, -1, -1, 1, 0, -7, 1, 23, 0, -73, 4, 135, 2, -242, -16, 434, 214, -954,
            -2056, -2312,
        ],
    );
}

#[test]
fn test_full_band_48k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate48000),
        &[13, 34, 8, 33, 8, 33, 2, 46, 9, 4, 39, 11],
        &[
            0, 0, -1, 0, 0, -1, -1, 1, 0, -8, 1, 24, -1, -75, 2, 131, -13, -274, -31, 478, 309,
            -824, -1844, -2046,
        ],
    );
}

#[test]
fn test_eight_k_64k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate64000).eight_k(),
        &[
            196, 196, 196, 209, 225, 226, 232, 205, 214, 221, 250, 244, 237, 205, 214, 218, 223,
            250, 243, 236, 208, 219, 254, 252,
        ],
        &[
            -50, -134, -370, -280, 970, 2352, 3554, -3484, -2178, -904, 398, 1594, 2902, -3878,
            -2592, -1484, -146, 992, 2188, 3408, -3220, -2002, -838, 422,
        ],
    );
}

#[test]
fn test_eight_k_56k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate56000).eight_k(),
        &[
            98, 98, 98, 104, 112, 113, 116, 102, 107, 110, 125, 122, 118, 102, 107, 109, 111, 125,
            121, 118, 104, 109, 127, 126,
        ],
        &[
            -46, -126, -348, -292, 1036, 2174, 3392, -3634, -2076, -976, 330, 1510, 3016, -4048,
            -2482, -1388, -220, 918, 2280, 3264, -3064, -2092, -762, 350,
        ],
    );
}

#[test]
fn test_eight_k_48k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate48000).eight_k(),
        &[
            49, 49, 49, 52, 56, 56, 58, 51, 53, 55, 62, 61, 59, 51, 53, 54, 55, 62, 60, 59, 52,
            54, 63, 63,
        ],
        &[
            -40, -110, -306, -268, 904, 2530, 3126, -3332, -2282, -832, 466, 1360, 2788, -3710,
            -2706, -1576, -376, 1066, 2480, 3012, -2788, -2284, -622, 220,
        ],
    );
}

/// Test mode output interleaves the doubled low and high band samples
#[test]
fn test_itu_test_mode_64k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate64000).with_itu_test_mode(true),
        &[
            4, 4, 4, 17, 161, 162, 168, 13, 22, 29, 186, 180, 173, 13, 22, 26, 31, 186, 179, 172,
            16, 27, 62, 252,
        ],
        &[
            -50, -4, -134, -4, -370, -6, -280, -12, 970, 0, 2352, 12, 3554, 14, -3484, -28, -2178,
            -42, -904, -48, 398, 36, 1594, 60, 2902, 78, -3878, -104, -2592, -160, -1484, -196,
            -146, -224, 992, 262, 2188, 406, 3408, 482, -3220, -514, -2002, -874, -838, -1034,
            422, 172,
        ],
    );
}

#[test]
fn test_itu_test_mode_56k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate56000).with_itu_test_mode(true),
        &[
            2, 2, 2, 8, 80, 81, 84, 6, 11, 14, 93, 90, 86, 6, 11, 13, 15, 93, 89, 86, 8, 13, 31,
            126,
        ],
        &[
            -46, -4, -126, -4, -348, -6, -292, -12, 1036, 0, 2174, 12, 3392, 14, -3634, -28,
            -2076, -42, -976, -48, 330, 36, 1510, 60, 3016, 78, -4048, -104, -2482, -160, -1388,
            -196, -220, -224, 918, 262, 2280, 406, 3264, 482, -3064, -514, -2092, -874, -762,
            -1034, 350, 172,
        ],
    );
}

#[test]
fn test_itu_test_mode_48k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate48000).with_itu_test_mode(true),
        &[
            1, 1, 1, 4, 40, 40, 42, 3, 5, 7, 46, 45, 43, 3, 5, 6, 7, 46, 44, 43, 4, 6, 15, 63,
        ],
        &[
            -40, -4, -110, -4, -306, -6, -268, -12, 904, 0, 2530, 12, 3126, 14, -3332, -28, -2282,
            -42, -832, -48, 466, 36, 1360, 60, 2788, 78, -3710, -104, -2706, -160, -1576, -196,
            -376, -224, 1066, 262, 2480, 406, 3012, 482, -2788, -514, -2284, -874, -622, -1034,
            220, 172,
        ],
    );
}

/// 12 codewords of 7 bits: 10 bytes out, 4 bits held for the next call
#[test]
fn test_packed_56k_vector() {
    let config = CodecConfig::new(Bitrate::Rate56000).packed();

    let mut encoder = G722Encoder::new(config);
    let packed = encoder.encode(&INPUT);
    assert_eq!(packed, [154, 34, 100, 24, 17, 18, 184, 19, 196, 243]);
    assert_eq!(encoder.pending_bits(), 4);

    // 80 bits hold 11 whole codewords, the same ones the unpacked stream starts with
    let mut decoder = G722Decoder::new(config);
    let pcm = decoder.decode(&packed);
    assert_eq!(
        pcm,
        [
            0, 0, -1, 0, 0, -1, -1, 1, 0, -7, 1, 23, 0, -73, 4, 135, 2, -242, -16, 434, 214, -954,
        ]
    );
    assert_eq!(decoder.pending_bits(), 3);
}

/// 12 codewords of 6 bits fill exactly 9 bytes
#[test]
fn test_packed_48k_vector() {
    check_vector(
        CodecConfig::new(Bitrate::Rate48000).packed(),
        &[141, 136, 132, 72, 40, 184, 9, 113, 46],
        &[
            0, 0, -1, 0, 0, -1, -1, 1, 0, -8, 1, 24, -1, -75, 2, 131, -13, -274, -31, 478, 309,
            -824, -1844, -2046,
        ],
    );
}
