use core::fmt;

/// Digest length in bytes: five 32-bit words, 160 bits total.
pub const OUTPUT_SIZE: usize = 20;

/// A finished SHA-1 digest. Immutable once produced; freely copied and
/// compared.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; OUTPUT_SIZE],
}

impl Digest {
    pub fn new(bytes: [u8; OUTPUT_SIZE]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; OUTPUT_SIZE] {
        &self.bytes
    }

    pub fn to_bytes(self) -> [u8; OUTPUT_SIZE] {
        self.bytes
    }

    pub fn to_vec(self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Lower-case hexadecimal rendering, 40 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }
}

impl From<[u8; OUTPUT_SIZE]> for Digest {
    fn from(bytes: [u8; OUTPUT_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl From<Digest> for [u8; OUTPUT_SIZE] {
    fn from(value: Digest) -> Self {
        value.bytes
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Digest")
            .field(&hex::encode(self.bytes))
            .finish()
    }
}
