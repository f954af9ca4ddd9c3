//! Binary polynomial helpers for generator-polynomial derivation
//!
//! Polynomials are stored by ascending power: `p[i]` is the coefficient of `x^i`.

use crate::error::{FecError, FecResult};
use crate::galois::GaloisField;
use log::debug;

/// Degree of a polynomial, ignoring trailing zero coefficients
///
/// Returns `None` for the zero polynomial.
pub fn degree<T: Copy + Default + PartialEq>(poly: &[T]) -> Option<usize> {
    poly.iter().rposition(|&c| c != T::default())
}

/// Multiply two polynomials over GF(2)
pub fn multiply_binary(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut result = vec![0u8; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        if ai & 1 == 0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            result[i + j] ^= bj & 1;
        }
    }
    result
}

/// Cyclotomic coset of `s` modulo `n`: { s·2^j mod n }
///
/// The first element is `s mod n`; the rest follow in doubling order.
pub fn cyclotomic_coset(s: usize, n: usize) -> Vec<usize> {
    let start = s % n;
    let mut coset = vec![start];
    let mut x = (2 * start) % n;
    while x != start {
        coset.push(x);
        x = (2 * x) % n;
    }
    coset
}

/// Minimal polynomial over GF(2) whose roots are β^e for every `e` in `coset`,
/// where β = α^step
pub fn minimal_polynomial(field: &GaloisField, coset: &[usize], step: usize) -> FecResult<Vec<u8>> {
    // Product of (x + β^e) computed with extension-field coefficients
    let mut poly: Vec<u16> = vec![1];
    for &e in coset {
        let root = field.alpha_pow(e * step);
        let mut next = vec![0u16; poly.len() + 1];
        for (i, &c) in poly.iter().enumerate() {
            next[i + 1] ^= c;
            next[i] ^= field.multiply(root, c);
        }
        poly = next;
    }

    poly.iter()
        .map(|&c| match c {
            0 | 1 => Ok(c as u8),
            _ => Err(FecError::InvalidCodeParameters(format!(
                "coset {:?} does not close under conjugation in GF(2^{})",
                coset,
                field.m()
            ))),
        })
        .collect()
}

/// Generator polynomial of a binary BCH code with roots β¹..β^(2t)
///
/// `length` is the natural code length N (β has multiplicative order N) and
/// `step` the exponent with β = α^step. The result is the LCM of the minimal
/// polynomials of β¹..β^(2t), i.e. the product of the minimal polynomials of
/// the distinct cyclotomic cosets those powers fall into.
pub fn generator_polynomial(
    field: &GaloisField,
    length: usize,
    step: usize,
    t: usize,
) -> FecResult<Vec<u8>> {
    if 2 * t >= length {
        return Err(FecError::InvalidCodeParameters(format!(
            "2t = {} must be smaller than the natural length {}",
            2 * t,
            length
        )));
    }

    let mut covered = vec![false; length];
    let mut generator = vec![1u8];
    for i in 1..=2 * t {
        if covered[i] {
            continue;
        }
        let coset = cyclotomic_coset(i, length);
        for &e in &coset {
            covered[e] = true;
        }
        let minimal = minimal_polynomial(field, &coset, step)?;
        debug!(
            "Minimal polynomial of beta^{} (coset size {}): degree {}",
            i,
            coset.len(),
            minimal.len() - 1
        );
        generator = multiply_binary(&generator, &minimal);
    }
    Ok(generator)
}
