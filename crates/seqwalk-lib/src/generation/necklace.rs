//! Shift-rule de Bruijn sequence generator
//!
//! Produces the cyclic de Bruijn sequence for window length `n` over an
//! alphabet of size `q` by a successor rule on necklaces (Wong, 2017).
//! Internally symbols are the integers `1..=q`; the mapping to alphabet
//! symbols happens once, in [`de_bruijn_sequence`].

use crate::encoding::Alphabet;

/// Test whether `seq` is a necklace (lexicographically minimal rotation)
///
/// Prefix-period scan: `p` tracks the period of the longest Lyndon prefix.
/// An increase resets the period, a decrease disproves the property.
pub fn is_necklace(seq: &[u8]) -> bool {
    let mut p = 1;
    for i in 1..seq.len() {
        if seq[i - p] < seq[i] {
            p = i + 1;
        } else if seq[i - p] > seq[i] {
            return false;
        }
    }
    seq.len() % p == 0
}

/// Successor rule: next symbol after the window `state` over `1..=q`
pub fn next_symbol(state: &[u8], q: u8) -> u8 {
    let (&lead, trailing) = match state.split_first() {
        Some(split) => split,
        None => return 1,
    };
    let mut candidate = Vec::with_capacity(state.len());
    candidate.extend_from_slice(trailing);
    candidate.push(0);
    let last = candidate.len() - 1;

    if lead == q {
        if trailing.iter().all(|&s| s == 1) {
            return 1;
        }
        for c in (2..=q).rev() {
            candidate[last] = c;
            if !is_necklace(&candidate) {
                return c;
            }
        }
        return 1;
    }

    let c = (lead % q) + 1;
    candidate[last] = c;
    if is_necklace(&candidate) { c } else { lead }
}

/// Run the shift rule from the all-ones window until it cycles
///
/// Returns the integer walk of length `q^n + n`; the last `n` symbols repeat
/// the first `n`.
pub fn simple_shift(n: usize, q: u8) -> Vec<u8> {
    assert!(n >= 1, "window length must be positive");
    assert!(q >= 2, "alphabet needs at least 2 symbols");

    let cycle_len = (q as usize).checked_pow(n as u32).unwrap_or(0);
    let mut seq = Vec::with_capacity(cycle_len + n);
    seq.resize(n, 1u8);

    loop {
        let next = next_symbol(&seq[seq.len() - n..], q);
        seq.push(next);
        if seq[seq.len() - n..] == seq[..n] {
            return seq;
        }
    }
}

/// Linear de Bruijn string for window length `n` over `alphabet`
///
/// Every length-`n` string over the alphabet occurs exactly once as a
/// window. Length is `q^n + n - 1`.
pub fn de_bruijn_sequence(n: usize, alphabet: &Alphabet) -> String {
    let walk = simple_shift(n, alphabet.len() as u8);
    alphabet.decode_indices(&walk[..walk.len() - 1])
}
