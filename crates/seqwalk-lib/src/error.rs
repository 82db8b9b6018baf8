//! Error type shared by generation, filtering and design
//!
//! Every failure is a precondition violation reported before any work is
//! done; no partial libraries are returned.

use thiserror::Error;

/// Errors returned by library design operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// Sequence length must exceed the uniqueness window
    #[error("sequence length must be greater than k, got length={length}, k={k}")]
    InvalidLength {
        /// Requested sequence length
        length: usize,
        /// Requested window length
        k: usize,
    },
    /// The reverse-complement-aware walk needs an odd window
    #[error("k must be odd for reverse-complement-free walks, got k={k}")]
    InvalidWindowParity {
        /// Requested window length
        k: usize,
    },
    /// Composition limits exceed the sequence length
    #[error("invalid GC limits: min={min}, max={max}, sequence length={length}")]
    InvalidCompositionRange {
        /// Lower bound on C/G count
        min: usize,
        /// Upper bound on C/G count
        max: usize,
        /// Length of the filtered sequences
        length: usize,
    },
    /// Lower composition bound above the upper bound
    #[error("inverted GC limits: min={min} > max={max}")]
    InvertedCompositionLimits {
        /// Lower bound on C/G count
        min: usize,
        /// Upper bound on C/G count
        max: usize,
    },
    /// The walk for a window length would exceed the configured size limit
    #[error("walk for k={k} over {q} symbols exceeds the limit of {limit} symbols")]
    WalkTooLarge {
        /// Requested window length
        k: usize,
        /// Alphabet size
        q: usize,
        /// Largest walk allowed
        limit: usize,
    },
    /// The walk builder only handles the four DNA bases
    #[error("alphabet {0:?} is not supported by the walk builder (need A, C, G, T)")]
    UnsupportedAlphabet(String),
    /// Fewer than two distinct symbols
    #[error("alphabet needs at least 2 distinct symbols, got {size}")]
    AlphabetTooSmall {
        /// Number of distinct symbols supplied
        size: usize,
    },
    /// Symbol is not a printable ASCII character
    #[error("invalid alphabet symbol: {0:?}")]
    InvalidSymbol(char),
    /// Two sequences compared position-wise have different lengths
    #[error("sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Length of the first sequence
        expected: usize,
        /// Length of the second sequence
        actual: usize,
    },
    /// The orthogonality search ran out of window lengths to try
    #[error("no library with more than {requested} sequences found for k <= {max_k}")]
    Unsatisfiable {
        /// Requested library size (exclusive lower bound)
        requested: usize,
        /// Largest window length tried
        max_k: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DesignError::InvalidLength { length: 5, k: 5 };
        assert_eq!(
            err.to_string(),
            "sequence length must be greater than k, got length=5, k=5"
        );

        let err = DesignError::InvalidWindowParity { k: 4 };
        assert!(err.to_string().contains("k=4"));

        let err = DesignError::Unsatisfiable { requested: 100, max_k: 9 };
        assert!(err.to_string().contains("100"));
        assert!(err.to_string().contains("k <= 9"));

        let err = DesignError::InvertedCompositionLimits { min: 12, max: 10 };
        assert_eq!(err.to_string(), "inverted GC limits: min=12 > max=10");
    }
}
