use base64::engine::general_purpose;
use base64::{DecodeError, Engine};

use crate::alphabet::{derive_tables, TransitionTables};

/// Base64 codec over a key-derived alphabet.
///
/// The key fixes a permutation of the 64 base64 symbols; encoding packs bytes
/// with the standard base64 engine and then substitutes every character into
/// the derived alphabet. Output is unpadded and URL-safe (the derived
/// alphabet uses `-` and `_`, never `+` or `/`).
///
/// Warning: this is obfuscation, not encryption. Anyone holding the key, or
/// willing to brute-force the alphabet, can recover the data. Do not use it
/// to protect sensitive data.
pub struct Secret64Codec {
    tables: TransitionTables,
}

impl Secret64Codec {
    /// Builds the codec for `key`. Never fails: a key whose CRC-32 is zero
    /// (including the empty key) falls back to the other hash, or to a
    /// constant divisor when both are zero, instead of dividing by zero.
    pub fn new<K>(key: K) -> Self
    where
        K: AsRef<[u8]>,
    {
        Secret64Codec {
            tables: derive_tables(key.as_ref()),
        }
    }

    /// The derived alphabet in order, as a read-only snapshot.
    pub fn derived_alphabet(&self) -> [u8; 64] {
        self.tables.derived
    }

    /// Encodes `input` into an obfuscated, unpadded string.
    pub fn encode<T>(&self, input: T) -> String
    where
        T: AsRef<[u8]>,
    {
        let standard = general_purpose::STANDARD_NO_PAD.encode(input.as_ref());
        standard
            .bytes()
            .map(|b| self.tables.forward[b as usize] as char)
            .collect()
    }

    /// Decodes a string previously produced by [`encode`](Self::encode) with
    /// the same key.
    ///
    /// Bytes outside the derived alphabet (padding `=` included) fail with
    /// `DecodeError::InvalidByte`; a length incompatible with base64 fails at
    /// the underlying decode step. Input encoded with a *different* key that
    /// happens to survive both checks decodes to garbage bytes with no error;
    /// the scheme carries no authentication.
    pub fn decode<T>(&self, input: T) -> Result<Vec<u8>, DecodeError>
    where
        T: AsRef<[u8]>,
    {
        let bytes = input.as_ref();
        let mut standard = String::with_capacity(bytes.len());

        for (pos, &b) in bytes.iter().enumerate() {
            let mapped = self.tables.reverse[b as usize];
            if mapped == 0 {
                return Err(DecodeError::InvalidByte(pos, b));
            }
            standard.push(mapped as char);
        }

        // The NO_PAD engine takes the unpadded string as-is, so no explicit
        // repadding is needed before the standard decode.
        general_purpose::STANDARD_NO_PAD.decode(standard)
    }
}
