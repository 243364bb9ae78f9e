//! Core types and traits for the codec library
//!
//! This module defines the configuration surface of the G.722 codec and the
//! traits through which callers drive it.

use crate::error::{CodecError, Result};
use bitflags::bitflags;
use std::fmt;

/// Primary trait for audio codecs
///
/// Implementors are streaming transforms: every call continues from the
/// adaptation state left by the previous one.
pub trait AudioCodec: Send + Sync {
    /// Encode audio samples to compressed data
    ///
    /// # Arguments
    ///
    /// * `samples` - Input audio samples as 16-bit PCM
    ///
    /// # Errors
    ///
    /// Returns an error if the input is invalid
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>>;

    /// Decode compressed data to audio samples
    ///
    /// # Arguments
    ///
    /// * `data` - Compressed audio data
    ///
    /// # Errors
    ///
    /// Returns an error if the data is invalid
    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>>;

    /// Get codec information
    fn info(&self) -> CodecInfo;

    /// Reset codec state
    ///
    /// Clears all adaptation state. Use on stream discontinuities.
    fn reset(&mut self) -> Result<()>;

    /// Get the nominal frame size in samples
    fn frame_size(&self) -> usize;

    /// Check if the codec supports variable frame sizes
    fn supports_variable_frame_size(&self) -> bool {
        false
    }
}

/// Extended trait for codecs that write into caller-provided buffers
pub trait AudioCodecExt: AudioCodec {
    /// Encode with pre-allocated output buffer
    ///
    /// Returns the number of bytes written to `output`.
    fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize>;

    /// Decode with pre-allocated output buffer
    ///
    /// Returns the number of samples written to `output`.
    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize>;

    /// Get maximum encoded size for a given input size
    fn max_encoded_size(&self, input_samples: usize) -> usize;

    /// Get maximum decoded size for a given input size
    fn max_decoded_size(&self, input_bytes: usize) -> usize;
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Codec name
    pub name: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Frame size in samples
    pub frame_size: usize,
    /// RTP payload type (if standard)
    pub payload_type: Option<u8>,
}

/// G.722 bit rate
///
/// Selects how many bits of each codeword are kept: the low band loses
/// resolution as the rate drops while the 2-bit high band is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bitrate {
    /// 64 kbit/s, 8 bits per codeword
    #[default]
    Rate64000,
    /// 56 kbit/s, 7 bits per codeword
    Rate56000,
    /// 48 kbit/s, 6 bits per codeword
    Rate48000,
}

impl Bitrate {
    /// All supported rates in bits per second
    pub const SUPPORTED: [u32; 3] = [64000, 56000, 48000];

    /// Get the bit rate in bits per second
    pub fn bps(self) -> u32 {
        match self {
            Self::Rate64000 => 64000,
            Self::Rate56000 => 56000,
            Self::Rate48000 => 48000,
        }
    }

    /// Get the codeword width
    pub fn bits_per_sample(self) -> u32 {
        match self {
            Self::Rate64000 => 8,
            Self::Rate56000 => 7,
            Self::Rate48000 => 6,
        }
    }

    /// Create from a bit rate in bits per second
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidBitrate`] for anything other than
    /// 64000, 56000 or 48000.
    pub fn from_bps(bps: u32) -> Result<Self> {
        match bps {
            64000 => Ok(Self::Rate64000),
            56000 => Ok(Self::Rate56000),
            48000 => Ok(Self::Rate48000),
            bitrate => Err(CodecError::InvalidBitrate {
                bitrate,
                supported: Self::SUPPORTED.to_vec(),
            }),
        }
    }
}

impl TryFrom<u32> for Bitrate {
    type Error = CodecError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::from_bps(bps)
    }
}

impl fmt::Display for Bitrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.bps())
    }
}

bitflags! {
    /// Construction options
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct G722Options: u32 {
        /// Narrowband operation: no QMF split, high band unused
        const SAMPLE_RATE_8000 = 0x01;
        /// Bit-level packing of 6 and 7 bit codewords
        const PACKED = 0x02;
    }
}

impl G722Options {
    /// No options set
    pub const DEFAULT: Self = Self::empty();
}

impl Default for G722Options {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    /// Bit rate
    pub bitrate: Bitrate,
    /// Option flags
    pub options: G722Options,
    /// Bypass the QMF and feed both bands the same halved sample
    pub itu_test_mode: bool,
}

impl CodecConfig {
    /// Create a new configuration for the given bit rate
    pub fn new(bitrate: Bitrate) -> Self {
        Self {
            bitrate,
            options: G722Options::DEFAULT,
            itu_test_mode: false,
        }
    }

    /// Create a configuration from a raw bit rate and option bitmask
    ///
    /// # Errors
    ///
    /// Fails on an unsupported bit rate or unknown option bits.
    pub fn from_raw(rate: u32, options: u32) -> Result<Self> {
        let bitrate = Bitrate::from_bps(rate)?;
        let options = G722Options::from_bits(options).ok_or_else(|| {
            CodecError::invalid_config(format!("Unknown G.722 option bits: {:#06x}", options))
        })?;

        Ok(Self::new(bitrate).with_options(options))
    }

    /// Set bit rate
    pub fn with_bitrate(mut self, bitrate: Bitrate) -> Self {
        self.bitrate = bitrate;
        self
    }

    /// Set option flags
    pub fn with_options(mut self, options: G722Options) -> Self {
        self.options = options;
        self
    }

    /// Enable 8 kHz operation
    pub fn eight_k(mut self) -> Self {
        self.options |= G722Options::SAMPLE_RATE_8000;
        self
    }

    /// Enable packed bitstream output
    pub fn packed(mut self) -> Self {
        self.options |= G722Options::PACKED;
        self
    }

    /// Set ITU conformance test mode
    pub fn with_itu_test_mode(mut self, enabled: bool) -> Self {
        self.itu_test_mode = enabled;
        self
    }

    /// Get the codeword width
    pub fn bits_per_sample(&self) -> u32 {
        self.bitrate.bits_per_sample()
    }

    /// Check if 8 kHz operation is enabled
    pub fn is_eight_k(&self) -> bool {
        self.options.contains(G722Options::SAMPLE_RATE_8000)
    }

    /// Check if codewords are bit-packed
    ///
    /// Packing only applies to codewords narrower than a byte.
    pub fn is_packed(&self) -> bool {
        self.options.contains(G722Options::PACKED) && self.bits_per_sample() != 8
    }

    /// Get the PCM sample rate on the uncompressed side
    pub fn output_sample_rate(&self) -> u32 {
        if self.is_eight_k() {
            8000
        } else {
            16000
        }
    }
}
