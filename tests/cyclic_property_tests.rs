//! Property-based tests for GF(2^M) arithmetic and the cyclic coder
//!
//! Field axioms are checked over GF(2^8) and GF(2^16); coder properties run
//! against BCH(31,16) with random data and random error patterns of weight at
//! most t.

use bchfec::cyclic::{CodeParams, CyclicCoder, DecodeOptions};
use bchfec::galois::GaloisField;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::sync::OnceLock;

fn gf256() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(8).unwrap())
}

fn gf65536() -> &'static GaloisField {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    FIELD.get_or_init(|| GaloisField::new(16).unwrap())
}

fn bch_31_16() -> CyclicCoder<'static> {
    static FIELD: OnceLock<GaloisField> = OnceLock::new();
    let field = FIELD.get_or_init(|| GaloisField::new(5).unwrap());
    CyclicCoder::from_params(CodeParams::bch_31_16(), field).unwrap()
}

proptest! {
    /// Property: multiplication is commutative in GF(2^8)
    #[test]
    fn prop_gf256_multiply_commutative(a in 0u16..256, b in 0u16..256) {
        let gf = gf256();
        prop_assert_eq!(gf.multiply(a, b), gf.multiply(b, a));
    }

    /// Property: multiplication is associative in GF(2^16)
    #[test]
    fn prop_gf65536_multiply_associative(a: u16, b: u16, c: u16) {
        let gf = gf65536();
        prop_assert_eq!(
            gf.multiply(gf.multiply(a, b), c),
            gf.multiply(a, gf.multiply(b, c))
        );
    }

    /// Property: multiplication distributes over addition
    #[test]
    fn prop_gf65536_distributive(a: u16, b: u16, c: u16) {
        let gf = gf65536();
        prop_assert_eq!(
            gf.multiply(a, gf.add(b, c)),
            gf.add(gf.multiply(a, b), gf.multiply(a, c))
        );
    }

    /// Property: every nonzero element times its inverse is one
    #[test]
    fn prop_gf256_inverse(a in 1u16..256) {
        let gf = gf256();
        prop_assert_eq!(gf.multiply(a, gf.inverse(a)), 1);
    }

    /// Property: pow agrees with repeated multiplication
    #[test]
    fn prop_gf256_pow_matches_repeated_multiply(a in 0u16..256, e in 0u32..20) {
        let gf = gf256();
        let expected = (0..e).fold(1u16, |acc, _| gf.multiply(acc, a));
        prop_assert_eq!(gf.pow(a, e), expected);
    }

    /// Property: encoded words are codewords and start with the data bits
    #[test]
    fn prop_encode_is_systematic(data in vec(0u8..2, 16)) {
        let coder = bch_31_16();
        let codeword = coder.encode(&data).unwrap();
        prop_assert!(coder.is_codeword(&codeword).unwrap());
        prop_assert_eq!(&codeword[..16], data.as_slice());
    }

    /// Property: up to t bit errors are always corrected exactly
    #[test]
    fn prop_corrects_up_to_t_errors(
        data in vec(0u8..2, 16),
        errors in btree_set(0usize..31, 0..=3),
    ) {
        let coder = bch_31_16();
        let codeword = coder.encode(&data).unwrap();
        let mut received = codeword.clone();
        for &p in &errors {
            received[p] ^= 1;
        }

        let decoded = coder.decode_algebraic(&received).unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(decoded.codeword, codeword);
        prop_assert_eq!(decoded.corrected_count, errors.len());
    }

    /// Property: syndromes are linear over GF(2)
    #[test]
    fn prop_syndromes_linear(a in vec(0u8..2, 31), b in vec(0u8..2, 31)) {
        let coder = bch_31_16();
        let sum: Vec<u8> = a.iter().zip(&b).map(|(x, y)| x ^ y).collect();
        let sa = coder.calculate_syndromes(&a).unwrap();
        let sb = coder.calculate_syndromes(&b).unwrap();
        let expected: Vec<u16> = sa.iter().zip(&sb).map(|(x, y)| x ^ y).collect();
        prop_assert_eq!(coder.calculate_syndromes(&sum).unwrap(), expected);
    }

    /// Property: Chase decoding of a noiseless block returns it untouched
    #[test]
    fn prop_chase_clean_block_unchanged(
        data in vec(0u8..2, 16),
        magnitude in 0.1f64..20.0,
        patterns in 0usize..6,
    ) {
        let coder = bch_31_16();
        let codeword = coder.encode(&data).unwrap();
        let llrs: Vec<f64> = codeword
            .iter()
            .map(|&b| if b == 0 { magnitude } else { -magnitude })
            .collect();

        let decoded = coder
            .decode_chase(&llrs, &DecodeOptions::sequential(patterns))
            .unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(decoded.corrected_count, 0);
    }
}
