//! Slicing a walk into fixed-length sequences
//!
//! Windows start every `length - k + 1` symbols, so neighbouring sequences
//! share exactly `k - 1` symbols and every k-mer of the walk lands in
//! exactly one output sequence.

use crate::error::DesignError;

/// Stride between consecutive sequence starts
#[inline]
pub const fn partition_stride(length: usize, k: usize) -> usize {
    length - k + 1
}

/// Partition `walk` into length-`length` sequences for window length `k`
///
/// A trailing remainder shorter than `length` is dropped; a walk shorter
/// than `length` gives an empty list.
///
/// # Errors
/// `InvalidLength` unless `length > k`.
pub fn partition_path(walk: &str, length: usize, k: usize) -> Result<Vec<String>, DesignError> {
    if length <= k {
        return Err(DesignError::InvalidLength { length, k });
    }
    if walk.len() < length {
        return Ok(Vec::new());
    }

    let stride = partition_stride(length, k);
    Ok((0..=walk.len() - length)
        .step_by(stride)
        .map(|start| walk[start..start + length].to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_offsets() {
        let seqs = partition_path("ABCDEFGHIJ", 4, 2).unwrap();
        assert_eq!(seqs, vec!["ABCD", "DEFG", "GHIJ"]);
    }

    #[test]
    fn test_partition_drops_remainder() {
        let seqs = partition_path("ABCDEFGHI", 4, 2).unwrap();
        assert_eq!(seqs, vec!["ABCD", "DEFG"]);
    }

    #[test]
    fn test_partition_short_walk() {
        assert!(partition_path("ABC", 4, 2).unwrap().is_empty());
        assert_eq!(partition_path("ABCD", 4, 2).unwrap(), vec!["ABCD"]);
    }

    #[test]
    fn test_partition_invalid_length() {
        assert_eq!(
            partition_path("ABCDEFGH", 3, 3),
            Err(DesignError::InvalidLength { length: 3, k: 3 })
        );
    }

    #[test]
    fn test_partition_overlap_is_k_minus_one() {
        let walk: String = (0..200).map(|i| (b'A' + (i % 26) as u8) as char).collect();
        let (length, k) = (25, 6);
        let seqs = partition_path(&walk, length, k).unwrap();
        assert!(seqs.len() > 1);
        for pair in seqs.windows(2) {
            assert_eq!(&pair[0][length - (k - 1)..], &pair[1][..k - 1]);
        }
    }
}
