//! Keyed base64 obfuscation codec.
//!
//! A secret key deterministically reorders the 64 base64 symbols into a
//! derived alphabet; [`Secret64Codec`] encodes and decodes byte strings
//! through that alphabet. Two codecs built from the same key always agree,
//! so encoded text survives across processes and machines.
//!
//! This hides the encoding from casual inspection only. It is **not**
//! encryption and offers no confidentiality against anyone motivated enough
//! to brute-force or recover the key.
//!
//! # Example
//!
//! ```
//! use secret64::Secret64Codec;
//!
//! let codec = Secret64Codec::new("my secret key");
//! let encoded = codec.encode(b"This is a secret message");
//! assert_eq!(encoded, "v-O0BPA0BPAOhl1yZm9yJQAuRz1XZ7Jy");
//! assert_eq!(codec.decode(&encoded).unwrap(), b"This is a secret message");
//! ```

mod alphabet;
pub mod codec;

pub use codec::Secret64Codec;
