//! G.722 Encoder
//!
//! Drives the transmit path: QMF analysis (or one of its bypasses), sub-band
//! ADPCM and codeword assembly, with optional bit packing.

use super::adpcm::{high_band_encode, low_band_encode};
use super::bitstream::BitPacker;
use super::qmf::{qmf_analysis, QmfDelay};
use super::state::{Band, HIGH_BAND, LOW_BAND};
use super::tables::QMF_DELAY_LEN;
use crate::error::Result;
use crate::types::{Bitrate, CodecConfig, G722Options};
use crate::utils::{pcm_from_le_bytes, validate_output_capacity};
use tracing::{debug, trace};

/// Streaming G.722 encoder
///
/// Each call continues from the state the previous call left behind; use one
/// encoder per audio stream and [`reset`](Self::reset) on discontinuities.
///
/// # Example
/// ```
/// use g722_core::codecs::g722::G722Encoder;
/// use g722_core::types::{Bitrate, CodecConfig};
///
/// let mut encoder = G722Encoder::new(CodecConfig::new(Bitrate::Rate64000));
/// let encoded = encoder.encode(&[0i16; 160]);
/// assert_eq!(encoded.len(), 80);
/// ```
#[derive(Debug, Clone)]
pub struct G722Encoder {
    config: CodecConfig,
    bands: [Band; 2],
    qmf: QmfDelay,
    packer: BitPacker,
}

impl G722Encoder {
    /// Create a new encoder from configuration
    pub fn new(config: CodecConfig) -> Self {
        let bits_per_sample = config.bits_per_sample();

        if config.options.contains(G722Options::PACKED) && !config.is_packed() {
            debug!("G.722 PACKED option ignored at {} bits per codeword", bits_per_sample);
        }

        debug!(
            "Creating G.722 encoder: {}, {} bits/codeword, {}Hz input, packed={}, itu_test_mode={}",
            config.bitrate,
            bits_per_sample,
            config.output_sample_rate(),
            config.is_packed(),
            config.itu_test_mode
        );

        Self {
            config,
            bands: Band::new_pair(),
            qmf: [0; QMF_DELAY_LEN],
            packer: BitPacker::new(bits_per_sample),
        }
    }

    /// Create a new encoder from a raw bit rate and option flags
    ///
    /// # Errors
    ///
    /// Returns an invalid bitrate error unless `rate` is 64000, 56000 or 48000.
    pub fn with_rate(rate: u32, options: G722Options) -> Result<Self> {
        let bitrate = Bitrate::from_bps(rate)?;
        Ok(Self::new(CodecConfig::new(bitrate).with_options(options)))
    }

    /// Get the configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Get the codeword width
    pub fn bits_per_sample(&self) -> u32 {
        self.config.bits_per_sample()
    }

    /// Get the sub-band states, low band first
    pub fn bands(&self) -> &[Band; 2] {
        &self.bands
    }

    /// Number of packed bits still waiting for a full byte
    pub fn pending_bits(&self) -> u32 {
        self.packer.pending_bits()
    }

    /// Number of input samples folded into each codeword
    fn samples_per_codeword(&self) -> usize {
        if self.config.itu_test_mode || self.config.is_eight_k() {
            1
        } else {
            2
        }
    }

    /// Number of codewords produced from `samples` input samples
    ///
    /// A trailing odd sample in full-band operation still yields a codeword;
    /// it is filtered against the second sample of the pair before it.
    pub fn codewords_for(&self, samples: usize) -> usize {
        samples.div_ceil(self.samples_per_codeword())
    }

    /// Exact number of bytes the next encode of `samples` samples will write
    pub fn encoded_len(&self, samples: usize) -> usize {
        let codewords = self.codewords_for(samples);
        if self.config.is_packed() {
            self.packer.bytes_for(codewords)
        } else {
            codewords
        }
    }

    /// Encode PCM samples
    pub fn encode(&mut self, samples: &[i16]) -> Vec<u8> {
        let mut output = vec![0u8; self.encoded_len(samples.len())];
        let written = self.encode_into(samples, &mut output);
        output.truncate(written);

        trace!("G.722 encoded {} samples to {} bytes", samples.len(), written);

        output
    }

    /// Encode PCM samples into a caller-provided buffer
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Fails with a buffer error, leaving the encoder untouched, if `output`
    /// is shorter than [`encoded_len`](Self::encoded_len).
    pub fn encode_to_buffer(&mut self, samples: &[i16], output: &mut [u8]) -> Result<usize> {
        validate_output_capacity(self.encoded_len(samples.len()), output.len())?;

        let written = self.encode_into(samples, output);

        trace!(
            "G.722 encoded {} samples to {} bytes (zero-alloc), {} bits pending",
            samples.len(),
            written,
            self.packer.pending_bits()
        );

        Ok(written)
    }

    /// Encode little-endian 16-bit PCM bytes
    ///
    /// # Errors
    ///
    /// Fails with a format error on odd-length input.
    pub fn encode_pcm_bytes(&mut self, pcm: &[u8]) -> Result<Vec<u8>> {
        let samples = pcm_from_le_bytes(pcm)?;
        Ok(self.encode(&samples))
    }

    /// Emit any packed bits still waiting for a full byte
    ///
    /// The final byte is zero-padded at the top. Call once at the end of a
    /// packed stream whose bit count is not a multiple of eight.
    pub fn flush(&mut self) -> Option<u8> {
        let byte = self.packer.flush();
        if byte.is_some() {
            trace!("G.722 encoder flushed a partial byte");
        }
        byte
    }

    /// Reset to the initial state, dropping any pending packed bits
    pub fn reset(&mut self) {
        self.bands = Band::new_pair();
        self.qmf = [0; QMF_DELAY_LEN];
        self.packer.reset();
        debug!("G.722 encoder reset");
    }

    fn encode_into(&mut self, samples: &[i16], output: &mut [u8]) -> usize {
        let mut written = 0;

        for chunk in samples.chunks(self.samples_per_codeword()) {
            let code = self.encode_codeword(chunk);

            if self.config.is_packed() {
                if let Some(byte) = self.packer.push(code) {
                    output[written] = byte;
                    written += 1;
                }
            } else {
                output[written] = code;
                written += 1;
            }
        }

        written
    }

    fn encode_codeword(&mut self, chunk: &[i16]) -> u8 {
        let first = i32::from(chunk[0]);

        let (xlow, xhigh) = if self.config.itu_test_mode {
            let x = first >> 1;
            (x, x)
        } else if self.config.is_eight_k() {
            (first >> 1, 0)
        } else {
            let second = chunk.get(1).copied().map(i32::from);
            qmf_analysis(&mut self.qmf, first, second)
        };

        let ilow = low_band_encode(&mut self.bands[LOW_BAND], xlow);
        let shift = 8 - self.bits_per_sample();

        let code = if self.config.is_eight_k() {
            (0xC0 | ilow) >> shift
        } else {
            let ihigh = high_band_encode(&mut self.bands[HIGH_BAND], xhigh);
            ((ihigh << 6) | ilow) >> shift
        };

        code as u8
    }
}
