//! Basic G.722 Tests
//!
//! Codec creation, configuration errors and the fixed-size reference
//! scenarios.

use super::utils::*;
use crate::codecs::g722::state::Band;
use crate::codecs::g722::{G722Codec, G722Decoder, G722Encoder};
use crate::error::CodecError;
use crate::types::{AudioCodec, AudioCodecExt, Bitrate, CodecConfig, G722Options};

/// 80 samples of silence at 64 kbit/s become 40 bytes
#[test]
fn test_reference_encode_scenario() {
    let mut encoder = G722Encoder::with_rate(64000, G722Options::DEFAULT).unwrap();
    let encoded = encoder.encode_pcm_bytes(&[0u8; 160]).unwrap();
    assert_eq!(encoded.len(), 40);
    assert_eq!(encoded[0], 0xFA);
}

/// 40 bytes at 64 kbit/s become 80 samples
#[test]
fn test_reference_decode_scenario() {
    let mut decoder = G722Decoder::with_rate(64000, G722Options::DEFAULT).unwrap();
    let pcm = decoder.decode_to_pcm_bytes(&[0u8; 40]);
    assert_eq!(pcm.len(), 160);
}

/// Creation for every supported rate
#[test]
fn test_codec_creation() {
    for (rate, bits) in [(64000, 8), (56000, 7), (48000, 6)] {
        let encoder = G722Encoder::with_rate(rate, G722Options::DEFAULT).unwrap();
        assert_eq!(encoder.bits_per_sample(), bits);
        assert_eq!(encoder.bands(), &Band::new_pair());

        let decoder = G722Decoder::with_rate(rate, G722Options::DEFAULT).unwrap();
        assert_eq!(decoder.bits_per_sample(), bits);
        assert_eq!(decoder.bands(), &Band::new_pair());

        let codec = G722Codec::new(CodecConfig::new(Bitrate::from_bps(rate).unwrap()));
        assert_eq!(codec.info().bitrate, rate);
    }
}

/// Unsupported rates are rejected by both directions
#[test]
fn test_invalid_bitrate() {
    for rate in [0, 8000, 16000, 32000, 64001, u32::MAX] {
        let err = G722Encoder::with_rate(rate, G722Options::DEFAULT).unwrap_err();
        assert!(matches!(err, CodecError::InvalidBitrate { bitrate, .. } if bitrate == rate));
        assert!(!err.is_recoverable());

        assert!(G722Decoder::with_rate(rate, G722Options::DEFAULT).is_err());
    }
}

/// Unknown option bits are rejected
#[test]
fn test_invalid_options() {
    let err = CodecConfig::from_raw(64000, 0x04).unwrap_err();
    assert!(matches!(err, CodecError::InvalidConfig { .. }));

    let config = CodecConfig::from_raw(56000, 0x02).unwrap();
    assert!(config.is_packed());
    assert!(!config.is_eight_k());
}

/// Empty input is a no-op in every mode
#[test]
fn test_empty_input() {
    for config in all_configs() {
        let mut encoder = G722Encoder::new(config);
        assert!(encoder.encode(&[]).is_empty());
        assert_eq!(encoder.bands(), &Band::new_pair());

        let mut decoder = G722Decoder::new(config);
        assert!(decoder.decode(&[]).is_empty());
        assert_eq!(decoder.bands(), &Band::new_pair());
    }
}

/// Output lengths match the advertised sizes in every mode
#[test]
fn test_advertised_lengths() {
    let samples = noise(7, 8000, 321);
    let data = random_bytes(7, 97);

    for config in all_configs() {
        let mut encoder = G722Encoder::new(config);
        let expected = encoder.encoded_len(samples.len());
        assert_eq!(encoder.encode(&samples).len(), expected, "{:?}", config);

        let mut decoder = G722Decoder::new(config);
        let expected = decoder.decoded_len(data.len());
        assert_eq!(decoder.decode(&data).len(), expected, "{:?}", config);
    }
}

/// Sizing through the trait matches the direct calls
#[test]
fn test_trait_buffers() {
    let mut codec = G722Codec::new(CodecConfig::new(Bitrate::Rate48000).packed());
    let samples = sine_wave(1000.0, 16000.0, 8000.0, 160);

    let mut encoded = vec![0u8; codec.max_encoded_size(samples.len())];
    let written = codec.encode_to_buffer(&samples, &mut encoded).unwrap();
    assert_eq!(written, 60);

    let mut decoded = vec![0i16; codec.max_decoded_size(written)];
    assert_eq!(codec.decode_to_buffer(&encoded, &mut decoded).unwrap(), 160);

    let mut short = [0i16; 4];
    let err = codec.decode_to_buffer(&encoded, &mut short).unwrap_err();
    assert!(err.is_recoverable());
}
