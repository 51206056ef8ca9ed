#![forbid(unsafe_code)]

use crate::compress::{compress, BLOCK_SIZE, INITIAL_STATE, STATE_WORDS};
use crate::digest::{Digest, OUTPUT_SIZE};
use crate::error::{Error, Result};

/// Compute the SHA-1 digest of the provided data.
pub fn hash(data: &[u8]) -> Result<[u8; OUTPUT_SIZE]> {
    hash_chunks(&[data])
}

/// Compute the SHA-1 digest of several segments as if they were one
/// contiguous message.
pub fn hash_chunks(chunks: &[&[u8]]) -> Result<[u8; OUTPUT_SIZE]> {
    let mut engine = Sha1::new();
    for chunk in chunks {
        engine.update(chunk)?;
    }
    Ok(engine.finalize()?.to_bytes())
}

/// Streaming SHA-1 engine.
///
/// Owns the running state, a partial-block buffer, and the total-length
/// counter. Feed it byte chunks with [`update`](Sha1::update) any number of
/// times, then call [`finalize`](Sha1::finalize) exactly once. A single
/// instance requires exclusive ownership; independent instances run in
/// parallel without coordination.
#[derive(Clone)]
pub struct Sha1 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    bit_len: u64,
    finalized: bool,
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            bit_len: 0,
            finalized: false,
        }
    }

    /// Append `data` to the message. Whole blocks are compressed as soon as
    /// they accumulate; at most 63 bytes stay buffered between calls.
    pub fn update(&mut self, mut data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::use_after_finalize());
        }
        if data.is_empty() {
            return Ok(());
        }

        self.bit_len = (data.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.bit_len.checked_add(bits))
            .ok_or(Error::length_overflow())?;

        if self.buffer_len > 0 {
            let space = BLOCK_SIZE - self.buffer_len;
            if data.len() >= space {
                self.buffer[self.buffer_len..].copy_from_slice(&data[..space]);
                self.state = compress(self.state, &self.buffer);
                self.buffer_len = 0;
                data = &data[space..];
            } else {
                self.buffer[self.buffer_len..self.buffer_len + data.len()].copy_from_slice(data);
                self.buffer_len += data.len();
                return Ok(());
            }
        }

        while data.len() >= BLOCK_SIZE {
            let (block, rest) = data.split_at(BLOCK_SIZE);
            self.state = compress(self.state, block.try_into().expect("block"));
            data = rest;
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }

        Ok(())
    }

    /// Pad the remaining input and emit the digest, ending the engine's
    /// life. Any later `update` or `finalize` fails with
    /// [`ErrorKind::UseAfterFinalize`](crate::ErrorKind::UseAfterFinalize).
    pub fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(Error::use_after_finalize());
        }
        self.finalized = true;

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // The length field needs 8 bytes; spill into a second block when the
        // terminator left no room for it.
        if self.buffer_len > BLOCK_SIZE - 8 {
            for byte in &mut self.buffer[self.buffer_len..] {
                *byte = 0;
            }
            self.state = compress(self.state, &self.buffer);
            self.buffer_len = 0;
        }

        for byte in &mut self.buffer[self.buffer_len..BLOCK_SIZE - 8] {
            *byte = 0;
        }
        self.buffer[BLOCK_SIZE - 8..].copy_from_slice(&self.bit_len.to_be_bytes());
        self.state = compress(self.state, &self.buffer);

        let mut out = [0u8; OUTPUT_SIZE];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Ok(Digest::new(out))
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}
