// tests/codec_tests.rs
use proptest::prelude::*;
use td6_rs::codec::{self, checksum, TRAILER_LEN};

fn runs_strategy() -> impl Strategy<Value = Vec<u8>> {
    // Mix of long repeats and short literal stretches
    prop::collection::vec((any::<u8>(), 1usize..300), 0..20).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(value, len)| std::iter::repeat(value).take(len))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_roundtrip_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let file = codec::encode(&data);
        prop_assert_eq!(codec::decode(&file), data);
    }

    #[test]
    fn prop_roundtrip_long_runs(data in runs_strategy()) {
        let file = codec::encode(&data);
        prop_assert_eq!(codec::decode(&file), data);
    }

    #[test]
    fn prop_encoded_file_carries_valid_trailer(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let file = codec::encode(&data);
        prop_assert!(file.len() >= TRAILER_LEN);
        prop_assert!(checksum::verify(&file));
    }

    #[test]
    fn prop_checksum_is_deterministic(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(checksum::compute(&data), checksum::compute(&data));
    }

    #[test]
    fn prop_single_flip_changes_checksum(
        data in prop::collection::vec(any::<u8>(), 1..512),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut flipped = data.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= flip;
        prop_assert_ne!(checksum::compute(&data), checksum::compute(&flipped));
    }

    #[test]
    fn prop_decode_never_panics(file in prop::collection::vec(any::<u8>(), 0..2048)) {
        let _ = codec::decode(&file);
    }
}

#[test]
fn test_documented_encode_scenario() {
    let file = codec::encode(&[5, 5, 5, 1, 2, 3]);

    assert_eq!(file.len(), 6 + TRAILER_LEN);
    // repeat token for three 5s
    assert_eq!(file[0] as i8, -2);
    assert_eq!(file[1], 5);
    // literal token for 1, 2, 3
    assert_eq!(file[2], 2);
    assert_eq!(&file[3..6], &[1, 2, 3]);
    assert_eq!(&file[6..], &checksum::compute(&file[..6]));

    assert_eq!(codec::decode(&file), vec![5, 5, 5, 1, 2, 3]);
}

#[test]
fn test_truncated_body_decodes_prefix() {
    let full = codec::encode(&[7, 7, 7, 7, 9, 8, 7, 6]);
    let body = &full[..full.len() - TRAILER_LEN];

    // Drop the last literal bytes but keep a (bogus) trailer in place
    let mut truncated = body[..body.len() - 2].to_vec();
    truncated.extend_from_slice(&[0; TRAILER_LEN]);

    assert_eq!(codec::decode(&truncated), vec![7, 7, 7, 7, 9, 8]);
}
