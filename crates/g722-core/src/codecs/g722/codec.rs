//! G.722 Codec Implementation
//!
//! Bundles an encoder and a decoder built from one configuration behind the
//! crate's codec traits.

use super::decoder::G722Decoder;
use super::encoder::G722Encoder;
use crate::error::Result;
use crate::types::{AudioCodec, AudioCodecExt, CodecConfig, CodecInfo};
use tracing::debug;

/// RTP payload type assigned to G.722
pub const G722_PAYLOAD_TYPE: u8 = 9;

/// Nominal frame size in samples at 16 kHz (10 ms)
pub const G722_FRAME_SIZE: usize = 160;

/// Nominal frame size in samples at 8 kHz (10 ms)
pub const G722_FRAME_SIZE_8K: usize = 80;

/// G.722 codec
///
/// # Example
/// ```
/// use g722_core::codecs::g722::G722Codec;
/// use g722_core::types::{AudioCodec, Bitrate, CodecConfig};
///
/// let mut codec = G722Codec::new(CodecConfig::new(Bitrate::Rate64000));
///
/// let encoded = codec.encode(&[0i16; 160]).unwrap();
/// assert_eq!(encoded.len(), 80);
///
/// let decoded = codec.decode(&encoded).unwrap();
/// assert_eq!(decoded.len(), 160);
/// ```
#[derive(Debug, Clone)]
pub struct G722Codec {
    config: CodecConfig,
    encoder: G722Encoder,
    decoder: G722Decoder,
}

impl G722Codec {
    /// Create a new G.722 codec from configuration
    pub fn new(config: CodecConfig) -> Self {
        debug!("Creating G.722 codec: {}", config.bitrate);

        Self {
            config,
            encoder: G722Encoder::new(config),
            decoder: G722Decoder::new(config),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Get the encoder
    pub fn encoder(&self) -> &G722Encoder {
        &self.encoder
    }

    /// Get mutable encoder
    pub fn encoder_mut(&mut self) -> &mut G722Encoder {
        &mut self.encoder
    }

    /// Get the decoder
    pub fn decoder(&self) -> &G722Decoder {
        &self.decoder
    }

    /// Get mutable decoder
    pub fn decoder_mut(&mut self) -> &mut G722Decoder {
        &mut self.decoder
    }
}

impl Default for G722Codec {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

impl AudioCodec for G722Codec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        Ok(self.encoder.encode(samples))
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        Ok(self.decoder.decode(data))
    }

    fn info(&self) -> CodecInfo {
        CodecInfo {
            name: "G722",
            sample_rate: self.config.output_sample_rate(),
            channels: 1,
            bitrate: self.config.bitrate.bps(),
            frame_size: self.frame_size(),
            payload_type: Some(G722_PAYLOAD_TYPE),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.encoder.reset();
        self.decoder.reset();

        debug!("G.722 codec reset");
        Ok(())
    }

    fn frame_size(&self) -> usize {
        if self.config.is_eight_k() {
            G722_FRAME_SIZE_8K
        } else {
            G722_FRAME_SIZE
        }
    }

    fn supports_variable_frame_size(&self) -> bool {
        true
    }
}

impl AudioCodecExt for G722Codec {
    fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        self.encoder.encode_to_buffer(samples, output)
    }

    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        self.decoder.decode_to_buffer(data, output)
    }

    fn max_encoded_size(&self, input_samples: usize) -> usize {
        self.encoder.encoded_len(input_samples)
    }

    fn max_decoded_size(&self, input_bytes: usize) -> usize {
        self.decoder.decoded_len(input_bytes)
    }
}
