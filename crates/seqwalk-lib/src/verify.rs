//! Verification of library properties
//!
//! Independent checkers for the guarantees produced by
//! [`LibraryDesigner`](crate::design::LibraryDesigner): k-mer uniqueness
//! (sequence symmetry minimization, "SSM"), absence of a pattern, and C/G
//! content bounds. They accept any list of sequences.

use crate::encoding::reverse_complement;
use crate::filtering::CompositionLimits;
use ahash::AHashSet;

/// Check that no k-mer occurs twice anywhere in `library`
///
/// With `rc_free`, a k-mer and its reverse complement count as the same
/// k-mer, so a window equal to its own reverse complement also fails.
pub fn check_ssm<S: AsRef<str>>(library: &[S], k: usize, rc_free: bool) -> bool {
    let mut seen: AHashSet<String> = AHashSet::new();

    for seq in library {
        let seq = seq.as_ref();
        if seq.len() < k {
            continue;
        }
        for i in 0..=seq.len() - k {
            let kmer = &seq[i..i + k];
            if !seen.insert(kmer.to_string()) {
                return false;
            }
            if rc_free && !seen.insert(reverse_complement(kmer)) {
                return false;
            }
        }
    }
    true
}

/// Check that no sequence contains `pattern`
pub fn check_pattern_free<S: AsRef<str>>(library: &[S], pattern: &str) -> bool {
    library.iter().all(|seq| !seq.as_ref().contains(pattern))
}

/// Check that every sequence has a C/G count within `limits`
pub fn check_gc<S: AsRef<str>>(library: &[S], limits: CompositionLimits) -> bool {
    library.iter().all(|seq| limits.contains(seq.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ssm_rc_tolerant() {
        assert!(check_ssm(&["ACCA", "CTTC"], 3, false));
        assert!(!check_ssm(&["ACCA", "CCAT"], 3, false));
        assert!(!check_ssm(&["ACACA"], 3, false));
        // GTT is the reverse complement of AAC but that is fine here
        assert!(check_ssm(&["AACC", "GTTA"], 3, false));
    }

    #[test]
    fn test_check_ssm_rc_free() {
        assert!(!check_ssm(&["AACC", "GTTA"], 3, true));
        assert!(check_ssm(&["AACC", "CCCA"], 3, true));
        // ACGT is its own reverse complement
        assert!(!check_ssm(&["ACGT"], 4, true));
    }

    #[test]
    fn test_check_ssm_empty() {
        let empty: [&str; 0] = [];
        assert!(check_ssm(&empty, 5, true));
        assert!(check_ssm(&["AC"], 5, true));
    }

    #[test]
    fn test_check_pattern_free() {
        assert!(check_pattern_free(&["TTGGCCAA"], "AAAA"));
        assert!(!check_pattern_free(&["TTGGCCAA", "AAAACCGT"], "AAAA"));
    }

    #[test]
    fn test_check_gc() {
        assert!(check_gc(&["AACCGGTT", "ACGTACGT"], CompositionLimits::new(4, 4)));
        assert!(!check_gc(&["AACCGGTT", "AAAAAAAA"], CompositionLimits::new(1, 8)));
    }
}
