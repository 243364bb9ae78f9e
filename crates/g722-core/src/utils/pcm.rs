//! Little-endian PCM byte conversion

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::validation::validate_pcm_bytes;
use crate::error::Result;

/// Convert little-endian 16-bit PCM bytes to samples
///
/// # Errors
///
/// Returns an invalid format error if `pcm` has an odd length.
pub fn pcm_from_le_bytes(mut pcm: &[u8]) -> Result<Vec<i16>> {
    validate_pcm_bytes(pcm)?;

    let mut samples = Vec::with_capacity(pcm.len() / 2);
    while pcm.has_remaining() {
        samples.push(pcm.get_i16_le());
    }

    Ok(samples)
}

/// Convert samples to little-endian 16-bit PCM bytes
pub fn pcm_to_le_bytes(samples: &[i16]) -> Bytes {
    let mut buf = BytesMut::with_capacity(samples.len() * 2);
    for &sample in samples {
        buf.put_i16_le(sample);
    }
    buf.freeze()
}
