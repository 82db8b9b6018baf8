//! Design configuration
//!
//! Everything about a library except its sequence length and window length:
//! alphabet, reverse-complement mode, filters, the seed for the randomized
//! walk and the ceiling of the orthogonality search.

use crate::constants::{
    DEFAULT_ALPHABET, DEFAULT_MAX_K, DEFAULT_MAX_WALK_LEN, DEFAULT_PREVENTED_PATTERNS, DEFAULT_SEED,
};
use crate::encoding::Alphabet;
use crate::error::DesignError;
use crate::filtering::CompositionLimits;

/// Configuration parameters for designing a library
#[derive(Debug, Clone)]
pub struct DesignConfiguration {
    /// Allowed symbols, in generator order
    pub alphabet: String,

    /// Treat a k-mer and its reverse complement as the same k-mer
    pub rc_free: bool,

    /// Optional bounds on the C/G count of every sequence
    pub gc_limits: Option<CompositionLimits>,

    /// Substrings no sequence may contain
    pub prevented_patterns: Vec<String>,

    /// Seed for the randomized walk builder
    pub seed: u64,

    /// Largest window length the orthogonality search may try
    pub max_k: usize,

    /// Largest walk (in symbols, q^k) a generator may build
    pub max_walk_len: usize,
}

impl Default for DesignConfiguration {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            rc_free: false,
            gc_limits: None,
            prevented_patterns: DEFAULT_PREVENTED_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            seed: DEFAULT_SEED,
            max_k: DEFAULT_MAX_K,
            max_walk_len: DEFAULT_MAX_WALK_LEN,
        }
    }
}

impl DesignConfiguration {
    /// Create a configuration for the given alphabet and reverse-complement mode
    pub fn new(alphabet: &str, rc_free: bool) -> Result<Self, DesignError> {
        let config = Self {
            alphabet: alphabet.to_string(),
            rc_free,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set C/G bounds
    pub fn with_gc_limits(mut self, min: usize, max: usize) -> Self {
        self.gc_limits = Some(CompositionLimits::new(min, max));
        self
    }

    /// Replace the prevented patterns
    pub fn with_prevented_patterns<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
        self.prevented_patterns = patterns.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    /// Set the walk seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the search ceiling
    pub fn with_max_k(mut self, max_k: usize) -> Self {
        self.max_k = max_k;
        self
    }

    /// Set the walk size limit
    pub fn with_max_walk_len(mut self, max_walk_len: usize) -> Self {
        self.max_walk_len = max_walk_len;
        self
    }

    /// Parsed alphabet
    pub fn parsed_alphabet(&self) -> Result<Alphabet, DesignError> {
        Alphabet::new(&self.alphabet)
    }

    /// Validate the configuration parameters
    ///
    /// Composition limits are checked against the sequence length later,
    /// once it is known; here only their order is checked.
    pub fn validate(&self) -> Result<(), DesignError> {
        self.parsed_alphabet()?;
        if let Some(limits) = self.gc_limits {
            limits.check_order()?;
        }
        Ok(())
    }

    /// Log configuration parameters via tracing
    pub fn print(&self) {
        tracing::info!("Design Configuration:");
        tracing::info!("  alphabet = {}", self.alphabet);
        tracing::info!("  rc_free = {}", self.rc_free);
        match self.gc_limits {
            Some(limits) => tracing::info!("  gc_limits = [{}, {}]", limits.min, limits.max),
            None => tracing::info!("  gc_limits = none"),
        }
        tracing::info!("  prevented_patterns = {:?}", self.prevented_patterns);
        tracing::debug!("  seed = {}", self.seed);
        tracing::debug!("  max_k = {}", self.max_k);
        tracing::debug!("  max_walk_len = {}", self.max_walk_len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DesignConfiguration::default();
        assert_eq!(config.alphabet, "ACT");
        assert!(!config.rc_free);
        assert!(config.gc_limits.is_none());
        assert_eq!(config.prevented_patterns, vec!["AAAA", "CCCC", "GGGG", "TTTT"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_config() {
        let config = DesignConfiguration::new("ACGT", true).unwrap();
        assert_eq!(config.alphabet, "ACGT");
        assert!(config.rc_free);
        assert!(config.parsed_alphabet().unwrap().is_dna());
    }

    #[test]
    fn test_validate_bad_alphabet() {
        assert!(DesignConfiguration::new("A", false).is_err());
    }

    #[test]
    fn test_validate_inverted_gc_limits() {
        let config = DesignConfiguration::default().with_gc_limits(10, 5);
        assert_eq!(
            config.validate(),
            Err(DesignError::InvertedCompositionLimits { min: 10, max: 5 })
        );
    }

    #[test]
    fn test_builder_methods() {
        let config = DesignConfiguration::default()
            .with_gc_limits(2, 6)
            .with_prevented_patterns(&["GGG"])
            .with_seed(7)
            .with_max_k(12)
            .with_max_walk_len(1000);
        assert_eq!(config.gc_limits, Some(CompositionLimits::new(2, 6)));
        assert_eq!(config.prevented_patterns, vec!["GGG"]);
        assert_eq!(config.seed, 7);
        assert_eq!(config.max_k, 12);
        assert_eq!(config.max_walk_len, 1000);
    }
}
