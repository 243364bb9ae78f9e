//! Codec implementations

pub mod g722;

pub use g722::{G722Codec, G722Decoder, G722Encoder};
