//! Constants and defaults for library design
//!
//! Default alphabet, prevented patterns and search limits used by
//! [`DesignConfiguration`](crate::design::DesignConfiguration) and the
//! command-line front-end.

/// Default seed for the randomized walk builder
pub const DEFAULT_SEED: u64 = 1;

/// Default alphabet (three-letter code, no G)
pub const DEFAULT_ALPHABET: &str = "ACT";

/// DNA alphabet accepted by the reverse-complement-aware walk builder
pub const DNA_ALPHABET: &str = "ACGT";

/// Homopolymer runs prevented by default
pub const DEFAULT_PREVENTED_PATTERNS: &[&str] = &["AAAA", "CCCC", "GGGG", "TTTT"];

/// Smallest window length tried by the orthogonality search
pub const MIN_SEARCH_K: usize = 2;

/// Default ceiling on the window length tried by the orthogonality search
pub const DEFAULT_MAX_K: usize = 31;

/// Default limit on the walk a generator may build, in symbols
///
/// A window length k needs a walk of q^k symbols. With this limit the largest
/// usable k is 11 for DNA, 13 for a three-letter alphabet and 22 for two
/// letters.
pub const DEFAULT_MAX_WALK_LEN: usize = 1 << 22;

/// Symbols counted by the composition filter
pub const GC_SYMBOLS: &[u8] = b"CG";

/// Version number
pub const VERSION: (u8, u8, u8) = (0, 1, 0);

/// Compute floor(log_base(x)) for integers, without going through floats.
///
/// Returns 0 for x < base. `base` must be at least 2.
#[inline]
pub const fn floor_log(x: usize, base: usize) -> usize {
    let mut result = 0;
    let mut acc = base;
    while acc <= x {
        result += 1;
        acc = match acc.checked_mul(base) {
            Some(v) => v,
            None => break,
        };
    }
    result
}
