//! Library design
//!
//! [`LibraryDesigner`] holds a [`DesignConfiguration`] and runs the
//! generate / partition / filter pipeline. The free functions below take
//! every parameter explicitly and use the default seed and search ceiling.

pub mod config;
pub mod designer;

pub use config::DesignConfiguration;
pub use designer::{Generator, LibraryDesigner, OrthogonalLibrary};

use crate::error::DesignError;
use crate::filtering::CompositionLimits;

fn configure<S: AsRef<str>>(
    alphabet: &str,
    rc_free: bool,
    gc_limits: Option<CompositionLimits>,
    prevented_patterns: &[S],
) -> Result<LibraryDesigner, DesignError> {
    let mut config =
        DesignConfiguration::new(alphabet, rc_free)?.with_prevented_patterns(prevented_patterns);
    config.gc_limits = gc_limits;
    LibraryDesigner::new(config)
}

/// Design a library of length-`length` sequences with window length `k`
///
/// See [`LibraryDesigner::max_size`].
pub fn max_size<S: AsRef<str>>(
    length: usize,
    k: usize,
    alphabet: &str,
    rc_free: bool,
    gc_limits: Option<CompositionLimits>,
    prevented_patterns: &[S],
) -> Result<Vec<String>, DesignError> {
    configure(alphabet, rc_free, gc_limits, prevented_patterns)?.max_size(length, k)
}

/// Design a library of more than `n` length-`length` sequences
///
/// See [`LibraryDesigner::max_orthogonality`].
#[allow(clippy::too_many_arguments)]
pub fn max_orthogonality<S: AsRef<str>>(
    n: usize,
    length: usize,
    alphabet: &str,
    rc_free: bool,
    gc_limits: Option<CompositionLimits>,
    prevented_patterns: &[S],
    k_init: Option<usize>,
) -> Result<OrthogonalLibrary, DesignError> {
    configure(alphabet, rc_free, gc_limits, prevented_patterns)?.max_orthogonality(n, length, k_init)
}
