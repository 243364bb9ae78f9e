//! Utility functions shared by the codec implementations

pub mod pcm;
pub mod validation;

pub use pcm::{pcm_from_le_bytes, pcm_to_le_bytes};
pub use validation::{validate_output_capacity, validate_pcm_bytes};
