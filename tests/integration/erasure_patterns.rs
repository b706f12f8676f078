//! Integration test: exhaustive erasure patterns.
//!
//! For small codes, every survivor set is checked against direct inversion
//! of the matching generator submatrix: decode succeeds exactly when that
//! submatrix is invertible, and a success is always the original data.

use rscode_erasure::{ErasureError, generator_matrix};
use rscode_integration_tests::{CodingHarness, combinations, keep_blocks, test_data_seeded};
use rscode_math::GaloisField;

fn check_every_k_subset(k: usize, m: usize, degree: u8) -> usize {
    let h = CodingHarness::new(k, m, degree);
    let field = GaloisField::new(degree).unwrap();
    let generator = generator_matrix(k, m, &field);

    let mask = ((1u16 << degree) - 1) as u8;
    let input: Vec<u8> = test_data_seeded(5 * k, k as u32)
        .into_iter()
        .map(|b| b & mask)
        .collect();
    let blocks = h.encode(&input);

    let mut dependent = 0;
    for survivors in h.survivor_sets(k) {
        let invertible = generator
            .select_rows(&survivors)
            .unwrap()
            .invert(&field)
            .is_ok();
        match h.decode(&keep_blocks(&blocks, &survivors)) {
            Ok(data) => {
                assert!(invertible, "{survivors:?} decoded but submatrix is singular");
                assert_eq!(data, input, "k={k} m={m} survivors {survivors:?}");
            }
            Err(ErasureError::Unrecoverable { .. }) => {
                assert!(!invertible, "{survivors:?} rejected but submatrix is invertible");
                dependent += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    dependent
}

#[test]
fn test_gf16_codes_are_mds() {
    assert_eq!(check_every_k_subset(3, 3, 4), 0);
    assert_eq!(check_every_k_subset(2, 2, 4), 0);
}

#[test]
fn test_gf256_small_codes_are_mds() {
    assert_eq!(check_every_k_subset(2, 1, 8), 0);
    assert_eq!(check_every_k_subset(3, 2, 8), 0);
    assert_eq!(check_every_k_subset(4, 2, 8), 0);
}

#[test]
fn test_gf256_wider_codes_have_dependent_sets() {
    assert_eq!(check_every_k_subset(6, 4, 8), 5);
    assert_eq!(check_every_k_subset(4, 4, 8), 1);
}

/// With one extra survivor, decoding succeeds whenever any `k` of the
/// survivors are independent.
#[test]
fn test_extra_survivors_rescue_dependent_sets() {
    let (k, m, degree) = (6, 4, 8);
    let h = CodingHarness::new(k, m, degree);
    let field = GaloisField::new(degree).unwrap();
    let generator = generator_matrix(k, m, &field);
    let input = test_data_seeded(6 * k, 99);
    let blocks = h.encode(&input);

    for survivors in combinations(k + m, k + 1) {
        let any_invertible = combinations(k + 1, k).into_iter().any(|pick| {
            let rows: Vec<usize> = pick.iter().map(|&i| survivors[i]).collect();
            generator.select_rows(&rows).unwrap().invert(&field).is_ok()
        });
        assert!(any_invertible, "{survivors:?} has no independent subset");
        let data = h.decode(&keep_blocks(&blocks, &survivors)).unwrap();
        assert_eq!(data, input, "survivors {survivors:?}");
    }
}

/// Losing more than `m` blocks never produces data.
#[test]
fn test_deficient_sets_never_decode() {
    let h = CodingHarness::new(4, 3, 8);
    let input = test_data_seeded(100, 3);
    let blocks = h.encode(&input);

    for keep in 0..4 {
        for survivors in h.survivor_sets(keep) {
            let result = h.decode(&keep_blocks(&blocks, &survivors));
            assert!(
                matches!(result, Err(ErasureError::NotEnoughBlocks { needed: 4, .. })),
                "survivors {survivors:?}"
            );
        }
    }
}
