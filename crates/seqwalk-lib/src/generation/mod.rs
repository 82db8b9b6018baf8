//! Walk generators and the partitioner
//!
//! Two ways to produce a long k-mer-unique walk:
//! - [`necklace`]: deterministic shift-rule de Bruijn sequence, any alphabet
//! - [`hierholzer`]: randomized reverse-complement-free walk, DNA and odd k
//!
//! [`partition`] then cuts the walk into fixed-length sequences.

pub mod hierholzer;
pub mod necklace;
pub mod partition;

pub use hierholzer::adapted_hierholzer;
pub use necklace::{de_bruijn_sequence, is_necklace, simple_shift};
pub use partition::partition_path;
