// SeqWalk: design of k-mer unique sequence libraries
//
// Builds barcode / probe libraries in which no k-mer (optionally no
// k-mer or its reverse complement) occurs twice, by cutting de Bruijn
// walks into fixed-length sequences and filtering them.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod analysis;
pub mod constants;
pub mod design;
pub mod encoding;
pub mod error;
pub mod filtering;
pub mod generation;
pub mod io;
pub mod verify;

// Re-export common types at crate root
pub use design::{
    max_orthogonality, max_size, DesignConfiguration, Generator, LibraryDesigner, OrthogonalLibrary,
};
pub use encoding::{reverse_complement, Alphabet};
pub use error::DesignError;
pub use filtering::{filter_gc, filter_pattern, filter_patterns, filter_rc, CompositionLimits, RcFilter};
pub use verify::{check_gc, check_pattern_free, check_ssm};

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}
