//! Input validation utilities for codec operations

use crate::error::{CodecError, Result};

/// Validate a little-endian 16-bit PCM byte buffer
///
/// Every sample occupies two bytes, so an odd length means the buffer was
/// cut in the middle of a sample.
pub fn validate_pcm_bytes(pcm: &[u8]) -> Result<()> {
    if pcm.len() % 2 != 0 {
        return Err(CodecError::invalid_format(format!(
            "PCM byte length {} is not a whole number of 16-bit samples",
            pcm.len()
        )));
    }

    Ok(())
}

/// Validate that an output buffer can hold `needed` elements
pub fn validate_output_capacity(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(CodecError::BufferTooSmall { needed, actual });
    }

    Ok(())
}
