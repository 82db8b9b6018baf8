//! Library filters
//!
//! Every filter keeps the relative order of its input and only removes
//! sequences. They compose freely and work on any library, not just ones
//! produced by the generators in this crate.

use crate::constants::GC_SYMBOLS;
use crate::encoding::reverse_complement;
use crate::error::DesignError;
use ahash::AHashSet;
use tracing::debug;

/// Inclusive bounds on the number of C/G symbols per sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionLimits {
    /// Minimum C/G count
    pub min: usize,
    /// Maximum C/G count
    pub max: usize,
}

impl CompositionLimits {
    /// Create limits without validating them
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check that `min <= max`
    pub fn check_order(&self) -> Result<(), DesignError> {
        if self.min > self.max {
            return Err(DesignError::InvertedCompositionLimits { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Check the limits against a sequence length
    pub fn validate(&self, length: usize) -> Result<(), DesignError> {
        self.check_order()?;
        if self.max > length {
            return Err(DesignError::InvalidCompositionRange {
                min: self.min,
                max: self.max,
                length,
            });
        }
        Ok(())
    }

    /// True if `seq` has between `min` and `max` C/G symbols
    #[inline]
    pub fn contains(&self, seq: &str) -> bool {
        let gc = gc_count(seq);
        gc >= self.min && gc <= self.max
    }
}

/// Number of C/G symbols in a sequence
#[inline]
pub fn gc_count(seq: &str) -> usize {
    seq.bytes().filter(|b| GC_SYMBOLS.contains(b)).count()
}

/// Keep sequences whose C/G count lies within `limits`
///
/// # Errors
/// `InvertedCompositionLimits` if `min > max`, `InvalidCompositionRange` if
/// `max` exceeds the length of the first sequence.
pub fn filter_gc(library: Vec<String>, limits: CompositionLimits) -> Result<Vec<String>, DesignError> {
    let Some(first) = library.first() else {
        return Ok(library);
    };
    limits.validate(first.len())?;

    let before = library.len();
    let filtered: Vec<String> = library.into_iter().filter(|s| limits.contains(s)).collect();
    debug!("GC filter [{}, {}]: {} -> {}", limits.min, limits.max, before, filtered.len());
    Ok(filtered)
}

/// Drop sequences containing `pattern`
pub fn filter_pattern(library: Vec<String>, pattern: &str) -> Vec<String> {
    library.into_iter().filter(|s| !s.contains(pattern)).collect()
}

/// Apply [`filter_pattern`] for each pattern, left to right
pub fn filter_patterns<S: AsRef<str>>(library: Vec<String>, patterns: &[S]) -> Vec<String> {
    patterns.iter().fold(library, |lib, pattern| {
        let before = lib.len();
        let lib = filter_pattern(lib, pattern.as_ref());
        debug!("Pattern filter {:?}: {} -> {}", pattern.as_ref(), before, lib.len());
        lib
    })
}

/// Single-pass reverse-complement collision filter
///
/// Holds every k-mer of the sequences admitted so far. A candidate is
/// admitted only if none of its windows, nor their reverse complements,
/// collide with the accumulated set or with another window of the candidate
/// itself. Windows equal to their own reverse complement never pass.
#[derive(Debug, Clone)]
pub struct RcFilter {
    k: usize,
    seen: AHashSet<String>,
}

impl RcFilter {
    /// Empty filter for window length `k`
    pub fn new(k: usize) -> Self {
        Self { k, seen: AHashSet::new() }
    }

    /// Window length
    pub fn k(&self) -> usize {
        self.k
    }

    /// k-mers of all admitted sequences
    pub fn seen_kmers(&self) -> &AHashSet<String> {
        &self.seen
    }

    fn windows<'a>(&self, seq: &'a str) -> impl Iterator<Item = &'a str> {
        let k = self.k;
        let count = (seq.len() + 1).saturating_sub(k);
        (0..count).map(move |i| &seq[i..i + k])
    }

    /// Would `seq` be admitted, given what has been admitted so far?
    pub fn accepts(&self, seq: &str) -> bool {
        let own: AHashSet<&str> = self.windows(seq).collect();
        if own.len() != self.windows(seq).count() {
            return false;
        }
        self.windows(seq).all(|kmer| {
            let rc = reverse_complement(kmer);
            !own.contains(rc.as_str()) && !self.seen.contains(kmer) && !self.seen.contains(&rc)
        })
    }

    /// Admit `seq` if it passes, recording its k-mers. Returns whether it did.
    pub fn admit(&mut self, seq: &str) -> bool {
        if !self.accepts(seq) {
            return false;
        }
        let kmers: Vec<String> = self.windows(seq).map(str::to_string).collect();
        self.seen.extend(kmers);
        true
    }
}

/// Keep the order-respecting subset of `library` that is jointly
/// reverse-complement free for window length `k`
pub fn filter_rc(library: Vec<String>, k: usize) -> Vec<String> {
    let mut filter = RcFilter::new(k);
    let before = library.len();
    let filtered: Vec<String> = library.into_iter().filter(|s| filter.admit(s)).collect();
    debug!("RC filter k={}: {} -> {}", k, before, filtered.len());
    filtered
}
