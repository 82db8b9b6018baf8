//! Library designer orchestration
//!
//! Coordinates the pipeline for one window length:
//! 1. Pick a generator and build a walk
//! 2. Partition the walk into fixed-length sequences
//! 3. Reverse-complement filter (necklace walks in RC-free mode)
//! 4. Composition filter
//! 5. Prevented-pattern filters
//!
//! and the search over window lengths that grows the library past a
//! requested size.

use crate::constants::{floor_log, MIN_SEARCH_K};
use crate::design::config::DesignConfiguration;
use crate::encoding::Alphabet;
use crate::error::DesignError;
use crate::filtering::{filter_gc, filter_patterns, filter_rc};
use crate::generation::{adapted_hierholzer, de_bruijn_sequence, partition_path};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Which generator produced a walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Deterministic shift-rule de Bruijn sequence
    Necklace,
    /// Randomized reverse-complement-free Eulerian walk
    RcFreeWalk,
}

/// Result of the orthogonality search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthogonalLibrary {
    /// The designed sequences
    pub sequences: Vec<String>,
    /// Window length the library satisfies
    pub k: usize,
}

impl OrthogonalLibrary {
    /// Number of sequences
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// True if the library holds no sequences
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Designer for k-mer unique libraries
pub struct LibraryDesigner {
    config: DesignConfiguration,
    alphabet: Alphabet,
}

impl LibraryDesigner {
    /// Create a new designer with the given configuration
    pub fn new(config: DesignConfiguration) -> Result<Self, DesignError> {
        config.validate()?;
        let alphabet = config.parsed_alphabet()?;
        Ok(Self { config, alphabet })
    }

    /// Configuration in use
    pub fn config(&self) -> &DesignConfiguration {
        &self.config
    }

    /// Generator used for window length `k` under this configuration
    pub fn generator_for(&self, k: usize) -> Generator {
        if self.config.rc_free && self.alphabet.is_dna() && k % 2 == 1 {
            Generator::RcFreeWalk
        } else {
            Generator::Necklace
        }
    }

    /// Largest window length whose walk fits in `max_walk_len`
    pub fn max_walk_k(&self) -> usize {
        floor_log(self.config.max_walk_len, self.alphabet.len())
    }

    fn check_walk_len(&self, k: usize) -> Result<(), DesignError> {
        let q = self.alphabet.len();
        let limit = self.config.max_walk_len;
        match u32::try_from(k).ok().and_then(|e| q.checked_pow(e)) {
            Some(walk_len) if walk_len <= limit => Ok(()),
            _ => Err(DesignError::WalkTooLarge { k, q, limit }),
        }
    }

    /// Design a library of length-`length` sequences with window length `k`
    ///
    /// No k-mer (and in RC-free mode, no reverse complement of a k-mer)
    /// occurs twice across the returned library. The library may be empty.
    ///
    /// # Errors
    /// `InvalidLength` unless `length > k`; `InvalidCompositionRange` if the
    /// configured C/G bounds do not fit `length`; `WalkTooLarge` if q^k
    /// exceeds the configured `max_walk_len`.
    pub fn max_size(&self, length: usize, k: usize) -> Result<Vec<String>, DesignError> {
        if length <= k {
            return Err(DesignError::InvalidLength { length, k });
        }
        self.check_walk_len(k)?;

        let generator = self.generator_for(k);
        debug!("max_size: length={}, k={}, generator={:?}", length, k, generator);

        let mut seqs = match generator {
            Generator::RcFreeWalk => {
                let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
                let walk = adapted_hierholzer(k, &self.alphabet, &mut rng)?;
                partition_path(&walk, length, k)?
            }
            Generator::Necklace => {
                let walk = de_bruijn_sequence(k, &self.alphabet);
                let seqs = partition_path(&walk, length, k)?;
                if self.config.rc_free {
                    filter_rc(seqs, k)
                } else {
                    seqs
                }
            }
        };
        debug!("  {} candidate sequences", seqs.len());

        if seqs.is_empty() {
            return Ok(seqs);
        }
        if let Some(limits) = self.config.gc_limits {
            seqs = filter_gc(seqs, limits)?;
        }
        seqs = filter_patterns(seqs, self.config.prevented_patterns.as_slice());

        debug!("  {} sequences after filtering", seqs.len());
        Ok(seqs)
    }

    /// Initial window length for a library of more than `n` sequences
    ///
    /// floor(log_q(n)), at least 2, rounded up to odd in RC-free mode.
    pub fn initial_k(&self, n: usize) -> usize {
        let mut k = floor_log(n, self.alphabet.len()).max(MIN_SEARCH_K);
        if self.config.rc_free && k % 2 == 0 {
            k += 1;
        }
        k
    }

    /// Find a library with more than `n` length-`length` sequences
    ///
    /// Starts at `k_init` (or [`initial_k`](Self::initial_k)) and grows k by
    /// 2 in RC-free mode, by 1 otherwise, keeping the first library whose
    /// size exceeds `n`.
    ///
    /// # Errors
    /// `Unsatisfiable` once k would exceed the configured `max_k`, reach
    /// `length` or need a walk longer than `max_walk_len`, plus any error of
    /// [`max_size`](Self::max_size).
    pub fn max_orthogonality(
        &self,
        n: usize,
        length: usize,
        k_init: Option<usize>,
    ) -> Result<OrthogonalLibrary, DesignError> {
        let step = if self.config.rc_free { 2 } else { 1 };
        let ceiling = self
            .config
            .max_k
            .min(length.saturating_sub(1))
            .min(self.max_walk_k());
        let mut k = k_init.unwrap_or_else(|| self.initial_k(n));

        info!(
            "Searching for more than {} sequences of length {} (k from {}, step {}, up to {})",
            n, length, k, step, ceiling
        );

        while k <= ceiling {
            let library = self.max_size(length, k)?;
            info!("  k={}: {} sequences", k, library.len());
            if library.len() > n {
                info!("Number of sequences: {}", library.len());
                info!("SSM k value: {}", k);
                return Ok(OrthogonalLibrary { sequences: library, k });
            }
            k += step;
        }

        warn!("No library with more than {} sequences for k <= {}", n, ceiling);
        Err(DesignError::Unsatisfiable { requested: n, max_k: ceiling })
    }
}
