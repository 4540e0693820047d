//! Derivation of the key-specific base64 alphabet.
//!
//! Every symbol of the alphabet carries a precomputed CRC-32 checksum. The
//! secret key is hashed twice (forward and byte-reversed), each symbol's
//! checksum is reduced modulo one of the two key hashes, and the symbols are
//! reordered by the reduced values. The result is a deterministic permutation
//! of the 64 symbols that only the key holder can reproduce.

/// CRC-32 (IEEE, reflected) of each alphabet symbol, in declaration order.
///
/// The order is the canonical base64 order `A..Z a..z 0..9` with the URL-safe
/// pair `-` `_` in the last two slots. The values are embedded as literals so
/// that the derived alphabet is bit-identical across implementations; they
/// must never be recomputed at runtime.
pub(crate) const SYMBOL_CHECKSUMS: [(u8, u32); 64] = [
    (b'A', 3554254475),
    (b'B', 1255198513),
    (b'C', 1037565863),
    (b'D', 2746444292),
    (b'E', 3568589458),
    (b'F', 1304234792),
    (b'G', 985283518),
    (b'H', 2852464175),
    (b'I', 3707901625),
    (b'J', 1141589763),
    (b'K', 856455061),
    (b'L', 2909332022),
    (b'M', 3664761504),
    (b'N', 1130791706),
    (b'O', 878818188),
    (b'P', 3110715001),
    (b'Q', 3463352047),
    (b'R', 1466425173),
    (b'S', 543223747),
    (b'T', 3187964512),
    (b'U', 3372436214),
    (b'V', 1342839628),
    (b'W', 655174618),
    (b'X', 3081909835),
    (b'Y', 3233089245),
    (b'Z', 1505515367),
    (b'a', 3904355907),
    (b'b', 1908338681),
    (b'c', 112844655),
    (b'd', 2564639436),
    (b'e', 4024072794),
    (b'f', 1993550816),
    (b'g', 30677878),
    (b'h', 2439710439),
    (b'i', 3865851505),
    (b'j', 2137352139),
    (b'k', 140662621),
    (b'l', 2517025534),
    (b'm', 3775001192),
    (b'n', 2013832146),
    (b'o', 252678980),
    (b'p', 2181537457),
    (b'q', 4110462503),
    (b'r', 1812594589),
    (b's', 453955339),
    (b't', 2238339752),
    (b'u', 4067256894),
    (b'v', 1801730948),
    (b'w', 476252946),
    (b'x', 2363233923),
    (b'y', 4225443349),
    (b'z', 1657960367),
    (b'0', 4108050209),
    (b'1', 2212294583),
    (b'2', 450215437),
    (b'3', 1842515611),
    (b'4', 4088798008),
    (b'5', 2226203566),
    (b'6', 498629140),
    (b'7', 1790921346),
    (b'8', 4194326291),
    (b'9', 2366072709),
    (b'-', 2547889144),
    (b'_', 701932520),
];

/// Divisor used when both key hashes are zero (e.g. the empty key).
const ZERO_HASH_FALLBACK: u32 = 1;

/// Character substitution tables between the standard and derived alphabets.
///
/// Both tables are indexed directly by byte value; `0` marks a byte with no
/// mapping (NUL is never an alphabet symbol). Built once per key, read-only
/// afterwards.
pub(crate) struct TransitionTables {
    /// Standard base64 symbol (`A..Z a..z 0..9 + /`) to derived symbol.
    pub(crate) forward: [u8; 256],
    /// Derived symbol back to standard base64 symbol.
    pub(crate) reverse: [u8; 256],
    /// The derived alphabet in order, for inspection.
    pub(crate) derived: [u8; 64],
}

/// Builds the forward/reverse transition tables for `key`.
///
/// Deterministic for a given key and total for every key, including the
/// empty one: an empty key hashes to zero on both sides, the fallback
/// divisor kicks in, every reduced checksum becomes zero, and the stable
/// sort leaves the alphabet in declaration order.
pub(crate) fn derive_tables(key: &[u8]) -> TransitionTables {
    let fwd_hash = crc32fast::hash(key);
    let reversed: Vec<u8> = key.iter().rev().copied().collect();
    let rev_hash = crc32fast::hash(&reversed);

    let mut entries: Vec<(u8, u32)> = Vec::with_capacity(64);
    for (pos, &(symbol, checksum)) in SYMBOL_CHECKSUMS.iter().enumerate() {
        // Even positions reduce by the forward hash, odd ones by the
        // reversed hash. A zero divisor falls back to the other hash,
        // then to a constant, so the reduction is always defined.
        let (preferred, other) = if pos % 2 == 0 {
            (fwd_hash, rev_hash)
        } else {
            (rev_hash, fwd_hash)
        };
        let divisor = if preferred != 0 {
            preferred
        } else if other != 0 {
            other
        } else {
            ZERO_HASH_FALLBACK
        };
        entries.push((symbol, checksum % divisor));
    }

    // Stable sort, descending by reduced checksum. Ties keep declaration
    // order, which the cross-implementation vector depends on.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut derived = [0u8; 64];
    for (i, &(symbol, _)) in entries.iter().enumerate() {
        derived[i] = symbol;
    }

    // The standard side swaps the table's trailing `-` `_` for `+` `/`;
    // the derived side keeps the URL-safe pair.
    let mut standard = [0u8; 64];
    for (i, &(symbol, _)) in SYMBOL_CHECKSUMS.iter().take(62).enumerate() {
        standard[i] = symbol;
    }
    standard[62] = b'+';
    standard[63] = b'/';

    let mut forward = [0u8; 256];
    let mut reverse = [0u8; 256];
    for i in 0..64 {
        forward[standard[i] as usize] = derived[i];
        reverse[derived[i] as usize] = standard[i];
    }

    log::trace!(
        "derived alphabet from {}-byte key: {}",
        key.len(),
        derived.iter().map(|&b| b as char).collect::<String>()
    );

    TransitionTables {
        forward,
        reverse,
        derived,
    }
}
