use proptest::prelude::*;
use seqwalk_lib::generation::partition_path;
use seqwalk_lib::{
    check_gc, check_pattern_free, check_ssm, filter_gc, filter_pattern, filter_rc, reverse_complement,
    CompositionLimits,
};

fn dna(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), min..max)
        .prop_map(|bytes| String::from_utf8(bytes).unwrap())
}

proptest! {
    #[test]
    fn prop_reverse_complement_involution(seq in dna(0, 64)) {
        let rc = reverse_complement(&seq);
        prop_assert_eq!(rc.len(), seq.len());
        prop_assert_eq!(reverse_complement(&rc), seq);
    }

    #[test]
    fn prop_partition_overlap(walk in dna(0, 300), k in 1usize..8, extra in 1usize..12) {
        let length = k + extra;
        let seqs = partition_path(&walk, length, k).unwrap();
        let stride = length - k + 1;
        prop_assert_eq!(seqs.len(), if walk.len() < length { 0 } else { (walk.len() - length) / stride + 1 });
        for seq in &seqs {
            prop_assert_eq!(seq.len(), length);
        }
        for pair in seqs.windows(2) {
            prop_assert_eq!(&pair[0][length - (k - 1)..], &pair[1][..k - 1]);
        }
    }

    #[test]
    fn prop_rc_filter_output_is_rc_free(
        library in prop::collection::vec(dna(12, 13), 0..30),
        k in 3usize..7,
    ) {
        let kept = filter_rc(library.clone(), k);
        prop_assert!(check_ssm(&kept, k, true));
        // order-preserving subset
        let mut it = library.iter();
        for seq in &kept {
            prop_assert!(it.any(|s| s == seq));
        }
    }

    #[test]
    fn prop_gc_filter_bounds(
        library in prop::collection::vec(dna(10, 11), 1..30),
        min in 0usize..6,
        span in 0usize..5,
    ) {
        let limits = CompositionLimits::new(min, min + span);
        let kept = filter_gc(library, limits).unwrap();
        prop_assert!(check_gc(&kept, limits));
    }

    #[test]
    fn prop_pattern_filter(library in prop::collection::vec(dna(8, 16), 0..30), pattern in dna(1, 4)) {
        let kept = filter_pattern(library, &pattern);
        prop_assert!(check_pattern_free(&kept, &pattern));
    }
}
