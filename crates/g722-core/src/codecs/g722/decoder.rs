//! G.722 Decoder
//!
//! Drives the receive path: codeword extraction (with optional bit
//! unpacking), sub-band ADPCM reconstruction and QMF synthesis or one of its
//! bypasses.

use super::adpcm::{high_band_decode, low_band_decode};
use super::bitstream::BitUnpacker;
use super::qmf::{qmf_synthesis, QmfDelay};
use super::state::{Band, HIGH_BAND, LOW_BAND};
use super::tables::QMF_DELAY_LEN;
use crate::error::Result;
use crate::types::{Bitrate, CodecConfig, G722Options};
use crate::utils::{pcm_to_le_bytes, validate_output_capacity};
use bytes::Bytes;
use tracing::{debug, trace};

/// Streaming G.722 decoder
///
/// Each call continues from the state the previous call left behind. In
/// packed mode, bits that do not complete a codeword are kept for the next
/// call.
///
/// # Example
/// ```
/// use g722_core::codecs::g722::G722Decoder;
/// use g722_core::types::{Bitrate, CodecConfig};
///
/// let mut decoder = G722Decoder::new(CodecConfig::new(Bitrate::Rate64000));
/// let pcm = decoder.decode(&[0xFA; 40]);
/// assert_eq!(pcm.len(), 80);
/// ```
#[derive(Debug, Clone)]
pub struct G722Decoder {
    config: CodecConfig,
    bands: [Band; 2],
    qmf: QmfDelay,
    unpacker: BitUnpacker,
}

impl G722Decoder {
    /// Create a new decoder from configuration
    pub fn new(config: CodecConfig) -> Self {
        let bits_per_sample = config.bits_per_sample();

        if config.options.contains(G722Options::PACKED) && !config.is_packed() {
            debug!("G.722 PACKED option ignored at {} bits per codeword", bits_per_sample);
        }

        debug!(
            "Creating G.722 decoder: {}, {} bits/codeword, {}Hz output, packed={}, itu_test_mode={}",
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
            unpacker: BitUnpacker::new(bits_per_sample),
        }
    }

    /// Create a new decoder from a raw bit rate and option flags
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

    /// Number of buffered bits that do not yet form a codeword
    pub fn pending_bits(&self) -> u32 {
        self.unpacker.pending_bits()
    }

    /// Number of output samples produced per codeword
    fn samples_per_codeword(&self) -> usize {
        // test mode emits both bands even at 8 kHz
        if self.config.is_eight_k() && !self.config.itu_test_mode {
            1
        } else {
            2
        }
    }

    /// Number of complete codewords in the buffered bits plus `bytes` bytes
    pub fn codewords_for(&self, bytes: usize) -> usize {
        if self.config.is_packed() {
            self.unpacker.codewords_for(bytes)
        } else {
            bytes
        }
    }

    /// Exact number of samples the next decode of `bytes` bytes will write
    pub fn decoded_len(&self, bytes: usize) -> usize {
        self.codewords_for(bytes) * self.samples_per_codeword()
    }

    /// Decode G.722 data to PCM samples
    pub fn decode(&mut self, data: &[u8]) -> Vec<i16> {
        let mut output = vec![0i16; self.decoded_len(data.len())];
        let written = self.decode_into(data, &mut output);
        output.truncate(written);

        trace!("G.722 decoded {} bytes to {} samples", data.len(), written);

        output
    }

    /// Decode G.722 data into a caller-provided buffer
    ///
    /// Returns the number of samples written.
    ///
    /// # Errors
    ///
    /// Fails with a buffer error, leaving the decoder untouched, if `output`
    /// is shorter than [`decoded_len`](Self::decoded_len).
    pub fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i16]) -> Result<usize> {
        validate_output_capacity(self.decoded_len(data.len()), output.len())?;

        let written = self.decode_into(data, output);

        trace!(
            "G.722 decoded {} bytes to {} samples (zero-alloc), {} bits pending",
            data.len(),
            written,
            self.unpacker.pending_bits()
        );

        Ok(written)
    }

    /// Decode G.722 data to little-endian 16-bit PCM bytes
    pub fn decode_to_pcm_bytes(&mut self, data: &[u8]) -> Bytes {
        pcm_to_le_bytes(&self.decode(data))
    }

    /// Reset to the initial state, dropping any buffered bits
    pub fn reset(&mut self) {
        self.bands = Band::new_pair();
        self.qmf = [0; QMF_DELAY_LEN];
        self.unpacker.reset();
        debug!("G.722 decoder reset");
    }

    fn decode_into(&mut self, data: &[u8], output: &mut [i16]) -> usize {
        let mut written = 0;

        if self.config.is_packed() {
            let mut bytes = data.iter();
            loop {
                while self.unpacker.needs_more() {
                    match bytes.next() {
                        Some(&byte) => self.unpacker.feed(byte),
                        None => break,
                    }
                }

                let Some(code) = self.unpacker.next_code() else {
                    break;
                };
                written += self.decode_codeword(code, &mut output[written..]);
            }
        } else {
            for &code in data {
                written += self.decode_codeword(code, &mut output[written..]);
            }
        }

        written
    }

    fn decode_codeword(&mut self, code: u8, output: &mut [i16]) -> usize {
        let bits_per_sample = self.bits_per_sample();
        let code = i32::from(code);

        let (ilr, ihigh) = match bits_per_sample {
            7 => (code & 0x1F, (code >> 5) & 0x03),
            6 => (code & 0x0F, (code >> 4) & 0x03),
            _ => (code & 0x3F, (code >> 6) & 0x03),
        };

        let rlow = low_band_decode(&mut self.bands[LOW_BAND], ilr, bits_per_sample);

        let rhigh = if self.config.is_eight_k() {
            0
        } else {
            high_band_decode(&mut self.bands[HIGH_BAND], ihigh)
        };

        if self.config.itu_test_mode {
            output[0] = (rlow << 1) as i16;
            output[1] = (rhigh << 1) as i16;
            2
        } else if self.config.is_eight_k() {
            output[0] = (rlow << 1) as i16;
            1
        } else {
            let (out1, out2) = qmf_synthesis(&mut self.qmf, rlow, rhigh);
            output[0] = out1 as i16;
            output[1] = out2 as i16;
            2
        }
    }
}
