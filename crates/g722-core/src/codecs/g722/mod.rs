//! G.722 Wideband Audio Codec Implementation
//!
//! This module implements the G.722 sub-band ADPCM codec according to ITU-T
//! Recommendation G.722, bit-exact with the widely deployed fixed-point
//! reference arithmetic.
//!
//! # Architecture
//!
//! The implementation is split into several modules:
//! - `encoder` / `decoder`: streaming transmit and receive paths
//! - `codec`: encoder and decoder bundled behind [`AudioCodec`](crate::types::AudioCodec)
//! - `qmf`: QMF analysis and synthesis filters
//! - `adpcm`: sub-band quantizers and scale-factor adaptation
//! - `predictor`: the adaptive pole/zero predictor shared by both bands
//! - `bitstream`: packing of 6 and 7 bit codewords
//! - `tables`: quantization tables and constants
//! - `state`: per-band state
//!
//! # Modes
//!
//! - 64, 56 or 48 kbit/s, selecting 8, 7 or 6 bit codewords
//! - 8 kHz operation: no QMF split, one codeword per input sample
//! - packed output: 6 and 7 bit codewords laid end to end
//! - ITU test mode: QMF bypassed, both bands fed the same halved sample

pub mod adpcm;
pub mod bitstream;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod math;
pub mod predictor;
pub mod qmf;
pub mod state;
pub mod tables;

#[cfg(test)]
mod tests;

pub use codec::G722Codec;
pub use decoder::G722Decoder;
pub use encoder::G722Encoder;
pub use state::Band;
