//! # G722-Core: ITU-T G.722 Wideband Audio Codec
//!
//! This library implements the G.722 sub-band ADPCM codec used for wideband
//! (7 kHz) telephony. The arithmetic is bit-exact with the widely deployed
//! fixed-point reference, so streams interoperate with other G.722
//! implementations.
//!
//! ## Features
//!
//! - **64/56/48 kbit/s**: 8, 7 or 6 bit codewords
//! - **8 kHz operation**: narrowband input without the QMF split
//! - **Packed bitstreams**: 6 and 7 bit codewords laid end to end
//! - **ITU test mode**: QMF bypass for conformance vectors
//! - **Streaming**: encoder and decoder state persists across calls
//!
//! ## Usage
//!
//! ```rust
//! use g722_core::{G722Decoder, G722Encoder, G722Options};
//!
//! let mut encoder = G722Encoder::with_rate(64000, G722Options::DEFAULT)?;
//! let mut decoder = G722Decoder::with_rate(64000, G722Options::DEFAULT)?;
//!
//! // 10 ms at 16 kHz
//! let samples = vec![0i16; 160];
//! let encoded = encoder.encode(&samples);
//! assert_eq!(encoded.len(), 80);
//!
//! let decoded = decoder.decode(&encoded);
//! assert_eq!(decoded.len(), 160);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use codecs::{G722Codec, G722Decoder, G722Encoder};
pub use error::{CodecError, Result};
pub use types::{AudioCodec, AudioCodecExt, Bitrate, CodecConfig, CodecInfo, G722Options};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the codec library
///
/// Installs a default `tracing` subscriber if none is set. Safe to call
/// multiple times; the codec itself needs no global setup.
///
/// # Errors
///
/// Currently infallible; the `Result` is kept for forward compatibility.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    tracing::info!("G722-Core v{} initialized", VERSION);
    tracing::info!("Supported bitrates: {:?}", Bitrate::SUPPORTED);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_bitrates: Bitrate::SUPPORTED.to_vec(),
        supported_sample_rates: vec![16000, 8000],
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// Supported bit rates in bits per second
    pub supported_bitrates: Vec<u32>,
    /// Supported PCM sample rates in Hz
    pub supported_sample_rates: Vec<u32>,
}
