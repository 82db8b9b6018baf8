//! Reverse-complement-aware Eulerian walk over the DNA de Bruijn graph
//!
//! Nodes are (k-1)-mers, edges are k-mers. The walk is an iterative
//! Hierholzer traversal where taking an edge also retires its reverse
//! complement, so the resulting string never contains both a k-mer and its
//! reverse complement. With odd k no k-mer is its own reverse complement.
//!
//! k-mers are handled as base-4 codes in alphabet order: the first symbol is
//! the most significant digit.

use crate::encoding::{complement_base, Alphabet};
use crate::error::DesignError;
use rand::Rng;
use tracing::debug;

const RADIX: usize = 4;

/// Code of the reverse complement of a k-mer code
#[inline]
fn reverse_complement_code(mut code: usize, k: usize, complement: &[usize; RADIX]) -> usize {
    let mut rc = 0;
    for _ in 0..k {
        rc = rc * RADIX + complement[code % RADIX];
        code /= RADIX;
    }
    rc
}

fn decode_code(mut code: usize, len: usize, alphabet: &Alphabet) -> Vec<u8> {
    let mut out = vec![0u8; len];
    for slot in out.iter_mut().rev() {
        *slot = alphabet.symbols()[code % RADIX];
        code /= RADIX;
    }
    out
}

/// Build a random self-avoiding, reverse-complement-free walk
///
/// # Errors
/// `InvalidWindowParity` for even `k`, `UnsupportedAlphabet` unless the
/// alphabet is exactly A, C, G, T, `WalkTooLarge` if 4^k does not fit in
/// `usize`.
///
/// # Randomness
/// The start node and every choice among unused out-edges are drawn from
/// `rng`; the same seed yields the same walk.
pub fn adapted_hierholzer<R: Rng + ?Sized>(
    k: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String, DesignError> {
    if k % 2 == 0 {
        return Err(DesignError::InvalidWindowParity { k });
    }
    if !alphabet.is_dna() {
        return Err(DesignError::UnsupportedAlphabet(alphabet.to_string()));
    }

    let mut complement = [0usize; RADIX];
    for (i, &symbol) in alphabet.symbols().iter().enumerate() {
        // is_dna() guarantees the complement is present
        complement[i] = alphabet.index_of(complement_base(symbol)).unwrap_or(i);
    }

    let num_edges = u32::try_from(k)
        .ok()
        .and_then(|e| RADIX.checked_pow(e))
        .ok_or(DesignError::WalkTooLarge { k, q: RADIX, limit: usize::MAX })?;
    let num_nodes = num_edges / RADIX;
    let mut marked = vec![false; num_edges];
    debug!("Walk graph: k={}, {} nodes, {} edges", k, num_nodes, num_edges);

    let start = rng.gen_range(0..num_nodes);
    // (node, last symbol of the edge that reached it)
    let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];
    let mut reversed_tail: Vec<u8> = Vec::with_capacity(num_edges / 2);
    let mut unmarked: Vec<usize> = Vec::with_capacity(RADIX);

    while let Some((node, incoming)) = stack.pop() {
        unmarked.clear();
        unmarked.extend(
            (0..RADIX)
                .map(|c| node * RADIX + c)
                .filter(|&edge| !marked[edge]),
        );

        if unmarked.is_empty() {
            if let Some(symbol) = incoming {
                reversed_tail.push(alphabet.symbols()[symbol]);
            }
        } else {
            let edge = unmarked[rng.gen_range(0..unmarked.len())];
            marked[edge] = true;
            marked[reverse_complement_code(edge, k, &complement)] = true;
            stack.push((node, incoming));
            stack.push((edge % num_nodes, Some(edge % RADIX)));
        }
    }

    let mut walk = decode_code(start, k - 1, alphabet);
    walk.extend(reversed_tail.iter().rev());
    debug!("Walk length: {}", walk.len());

    Ok(String::from_utf8_lossy(&walk).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::reverse_complement;
    use ahash::AHashSet;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_rc_free(walk: &str, k: usize) {
        let mut seen = AHashSet::new();
        for i in 0..=walk.len() - k {
            let kmer = &walk[i..i + k];
            assert!(!seen.contains(kmer), "repeated k-mer {}", kmer);
            let rc = reverse_complement(kmer);
            assert!(!seen.contains(rc.as_str()), "reverse complement of {} present", kmer);
            seen.insert(kmer.to_string());
            seen.insert(rc);
        }
    }

    #[test]
    fn test_reverse_complement_code() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let complement = [3, 2, 1, 0];
        // "AAC" = 0*16 + 0*4 + 1 -> "GTT" = 2*16 + 3*4 + 3
        assert_eq!(reverse_complement_code(1, 3, &complement), 47);
        assert_eq!(decode_code(47, 3, &alphabet), b"GTT");
    }

    #[test]
    fn test_even_k_rejected() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            adapted_hierholzer(4, &alphabet, &mut rng),
            Err(DesignError::InvalidWindowParity { k: 4 })
        );
    }

    #[test]
    fn test_overflowing_k_rejected() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            adapted_hierholzer(33, &alphabet, &mut rng),
            Err(DesignError::WalkTooLarge { k: 33, .. })
        ));
    }

    #[test]
    fn test_non_dna_rejected() {
        let alphabet = Alphabet::new("ACT").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            adapted_hierholzer(5, &alphabet, &mut rng),
            Err(DesignError::UnsupportedAlphabet(_))
        ));
    }

    #[test]
    fn test_walk_is_rc_free_and_covers_all_classes() {
        for alphabet in ["ACGT", "TGCA", "ACTG"] {
            let alphabet = Alphabet::new(alphabet).unwrap();
            for k in [3, 5, 7] {
                for seed in 0..5 {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    let walk = adapted_hierholzer(k, &alphabet, &mut rng).unwrap();
                    assert_rc_free(&walk, k);
                    // one k-mer from every reverse-complement pair
                    assert_eq!(walk.len(), 4usize.pow(k as u32) / 2 + k - 1);
                }
            }
        }
    }

    #[test]
    fn test_window_one() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let walk = adapted_hierholzer(1, &alphabet, &mut rng).unwrap();
        assert_eq!(walk.len(), 2);
        assert_rc_free(&walk, 1);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let alphabet = Alphabet::new("ACGT").unwrap();
        let a = adapted_hierholzer(7, &alphabet, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        let b = adapted_hierholzer(7, &alphabet, &mut ChaCha8Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }
}
