//! Hamming distances within a library

use crate::error::DesignError;
use rayon::prelude::*;

/// Number of positions at which two equal-length sequences differ
pub fn hamming(a: &str, b: &str) -> Result<usize, DesignError> {
    if a.len() != b.len() {
        return Err(DesignError::LengthMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}

/// Pairwise Hamming distance matrix
///
/// Entry `[i][j]` is the distance between sequences `i` and `j`; the matrix
/// is symmetric with a zero diagonal. Rows are computed in parallel.
pub fn hamming_matrix<S: AsRef<str> + Sync>(library: &[S]) -> Result<Vec<Vec<usize>>, DesignError> {
    library
        .par_iter()
        .map(|a| {
            library
                .iter()
                .map(|b| hamming(a.as_ref(), b.as_ref()))
                .collect::<Result<Vec<usize>, DesignError>>()
        })
        .collect()
}

/// Distances of all unordered pairs `(i, j)`, `i < j`, in row-major order
pub fn pairwise_distances<S: AsRef<str> + Sync>(library: &[S]) -> Result<Vec<usize>, DesignError> {
    let matrix = hamming_matrix(library)?;
    Ok(matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().skip(i + 1).copied())
        .collect())
}

/// Smallest distance between two distinct entries, `None` below two sequences
pub fn min_hamming_distance<S: AsRef<str> + Sync>(library: &[S]) -> Result<Option<usize>, DesignError> {
    Ok(pairwise_distances(library)?.into_iter().min())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming() {
        assert_eq!(hamming("ACGT", "ACGT"), Ok(0));
        assert_eq!(hamming("ACGT", "TCGA"), Ok(2));
        assert_eq!(hamming("", ""), Ok(0));
        assert_eq!(
            hamming("ACG", "ACGT"),
            Err(DesignError::LengthMismatch { expected: 3, actual: 4 })
        );
    }

    #[test]
    fn test_hamming_matrix() {
        let matrix = hamming_matrix(&["AAAA", "AAAT", "TTTT"]).unwrap();
        assert_eq!(matrix, vec![vec![0, 1, 4], vec![1, 0, 3], vec![4, 3, 0]]);
    }

    #[test]
    fn test_hamming_matrix_mismatch() {
        assert!(hamming_matrix(&["AAAA", "AAA"]).is_err());
    }

    #[test]
    fn test_pairwise_distances() {
        assert_eq!(pairwise_distances(&["AAAA", "AAAT", "TTTT"]), Ok(vec![1, 4, 3]));
        assert_eq!(pairwise_distances(&["AAAA"]), Ok(vec![]));
    }

    #[test]
    fn test_min_hamming_distance() {
        assert_eq!(min_hamming_distance(&["AAAA", "AAAT", "TTTT"]), Ok(Some(1)));
        assert_eq!(min_hamming_distance(&["AAAA"]), Ok(None));
    }
}
