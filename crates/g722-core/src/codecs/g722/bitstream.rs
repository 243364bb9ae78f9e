//! Packed G.722 bitstream handling
//!
//! At 56 and 48 kbit/s a codeword is narrower than a byte. In packed mode
//! codewords are laid end to end, least significant bit first, and bytes are
//! emitted as soon as eight bits are available. Bits that do not yet fill a
//! byte (or a codeword, on the receive side) persist across calls.

/// Accumulates fixed-width codewords into bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitPacker {
    buffer: u32,
    bits: u32,
    width: u32,
}

impl BitPacker {
    /// Create a packer for codewords of `width` bits
    pub fn new(width: u32) -> Self {
        Self {
            buffer: 0,
            bits: 0,
            width,
        }
    }

    /// Append one codeword, returning a byte once eight bits are available
    pub fn push(&mut self, code: u8) -> Option<u8> {
        self.buffer |= u32::from(code) << self.bits;
        self.bits += self.width;

        if self.bits >= 8 {
            let byte = (self.buffer & 0xFF) as u8;
            self.buffer >>= 8;
            self.bits -= 8;
            Some(byte)
        } else {
            None
        }
    }

    /// Number of bits waiting for a full byte
    pub fn pending_bits(&self) -> u32 {
        self.bits
    }

    /// Number of bytes that pushing `codewords` more codewords would emit
    pub fn bytes_for(&self, codewords: usize) -> usize {
        (self.bits as usize + codewords * self.width as usize) / 8
    }

    /// Emit the pending bits as a final byte, zero-padded at the top
    pub fn flush(&mut self) -> Option<u8> {
        if self.bits == 0 {
            return None;
        }

        let byte = (self.buffer & 0xFF) as u8;
        self.reset();
        Some(byte)
    }

    /// Drop any pending bits
    pub fn reset(&mut self) {
        self.buffer = 0;
        self.bits = 0;
    }
}

/// Splits a byte stream back into fixed-width codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitUnpacker {
    buffer: u32,
    bits: u32,
    width: u32,
}

impl BitUnpacker {
    /// Create an unpacker for codewords of `width` bits
    pub fn new(width: u32) -> Self {
        Self {
            buffer: 0,
            bits: 0,
            width,
        }
    }

    /// Check if another byte is required before the next codeword
    pub fn needs_more(&self) -> bool {
        self.bits < self.width
    }

    /// Add one received byte above the buffered bits
    pub fn feed(&mut self, byte: u8) {
        self.buffer |= u32::from(byte) << self.bits;
        self.bits += 8;
    }

    /// Take the next complete codeword, if one is buffered
    pub fn next_code(&mut self) -> Option<u8> {
        if self.needs_more() {
            return None;
        }

        let code = (self.buffer & ((1 << self.width) - 1)) as u8;
        self.buffer >>= self.width;
        self.bits -= self.width;
        Some(code)
    }

    /// Number of buffered bits not yet consumed
    pub fn pending_bits(&self) -> u32 {
        self.bits
    }

    /// Number of codewords available from the buffer plus `bytes` more bytes
    pub fn codewords_for(&self, bytes: usize) -> usize {
        (self.bits as usize + bytes * 8) / self.width as usize
    }

    /// Drop any buffered bits
    pub fn reset(&mut self) {
        self.buffer = 0;
        self.bits = 0;
    }
}
