//! Galois Field GF(2^M) arithmetic for cyclic code decoding
//!
//! A [`GaloisField`] owns the logarithm, antilogarithm and inverse tables for one
//! field size and primitive polynomial. Tables are built once at construction and
//! never mutated, so a single field can be shared by any number of coders and
//! threads.
//!
//! Elements are stored as `u16` bit patterns: bit `i` is the coefficient of `x^i`
//! of the element's polynomial representation over GF(2).

use crate::error::{FecError, FecResult};
use std::fmt;

/// Smallest supported field degree
pub const MIN_FIELD_DEGREE: u32 = 2;

/// Largest supported field degree (tables hold 2^16 entries)
pub const MAX_FIELD_DEGREE: u32 = 16;

/// Built-in primitive polynomials indexed by `M - MIN_FIELD_DEGREE`
///
/// Each includes the leading `x^M` term. GF(2^16) uses 0x1100B
/// (x¹⁶ + x¹² + x³ + x + 1), GF(2^8) uses 0x11D (x⁸ + x⁴ + x³ + x² + 1).
const PRIMITIVE_POLYNOMIALS: [u32; 15] = [
    0x7,     // x^2 + x + 1
    0xB,     // x^3 + x + 1
    0x13,    // x^4 + x + 1
    0x25,    // x^5 + x^2 + 1
    0x43,    // x^6 + x + 1
    0x89,    // x^7 + x^3 + 1
    0x11D,   // x^8 + x^4 + x^3 + x^2 + 1
    0x211,   // x^9 + x^4 + 1
    0x409,   // x^10 + x^3 + 1
    0x805,   // x^11 + x^2 + 1
    0x1053,  // x^12 + x^6 + x^4 + x + 1
    0x201B,  // x^13 + x^4 + x^3 + x + 1
    0x4443,  // x^14 + x^10 + x^6 + x + 1
    0x8003,  // x^15 + x + 1
    0x1100B, // x^16 + x^12 + x^3 + x + 1
];

/// Look up the built-in primitive polynomial for GF(2^m)
pub fn default_primitive_polynomial(m: u32) -> FecResult<u32> {
    if !(MIN_FIELD_DEGREE..=MAX_FIELD_DEGREE).contains(&m) {
        return Err(FecError::InvalidFieldDegree { m });
    }
    PRIMITIVE_POLYNOMIALS
        .get((m - MIN_FIELD_DEGREE) as usize)
        .copied()
        .ok_or(FecError::UnsupportedFieldDegree { m })
}

/// Precomputed log/antilog/inverse tables for GF(2^M)
pub struct GaloisField {
    m: u32,
    order: usize,
    polynomial: u32,
    log: Vec<u16>,
    antilog: Vec<u16>,
    inv: Vec<u16>,
}

impl GaloisField {
    /// Create GF(2^m) using the built-in primitive polynomial for `m`
    pub fn new(m: u32) -> FecResult<Self> {
        let polynomial = default_primitive_polynomial(m)?;
        Self::with_primitive_polynomial(m, polynomial)
    }

    /// Create GF(2^m) from a caller-supplied primitive polynomial
    ///
    /// The polynomial must include the `x^m` term (e.g. `0x13` for x⁴ + x + 1).
    pub fn with_primitive_polynomial(m: u32, polynomial: u32) -> FecResult<Self> {
        if !(MIN_FIELD_DEGREE..=MAX_FIELD_DEGREE).contains(&m) {
            return Err(FecError::InvalidFieldDegree { m });
        }
        let order = 1usize << m;
        let mut field = GaloisField {
            m,
            order,
            polynomial,
            log: vec![0; order],
            antilog: vec![0; order - 1],
            inv: vec![0; order],
        };
        field.build_tables()?;
        Ok(field)
    }

    /// Build logarithm, antilogarithm and inverse tables
    fn build_tables(&mut self) -> FecResult<()> {
        let not_primitive = FecError::NonPrimitivePolynomial {
            m: self.m,
            polynomial: self.polynomial,
        };
        // Degree must be exactly m
        if (self.polynomial >> self.m) != 1 {
            return Err(not_primitive);
        }

        let limit = self.order - 1;
        // log[e] == limit marks "not yet visited"; limit is never a valid exponent
        self.log.fill(limit as u16);

        let mut element = 1usize;
        for i in 0..limit {
            if element == 0 || element >= self.order || self.log[element] as usize != limit {
                return Err(not_primitive);
            }
            self.antilog[i] = element as u16;
            self.log[element] = i as u16;

            element <<= 1;
            if element & self.order != 0 {
                element ^= self.polynomial as usize;
            }
        }
        // A primitive root returns to 1 after exactly Q-1 steps
        if element != 1 {
            return Err(not_primitive);
        }

        self.log[0] = limit as u16;

        self.inv[0] = 0;
        for e in 1..self.order {
            let inv_power = (limit - self.log[e] as usize) % limit;
            self.inv[e] = self.antilog[inv_power];
        }
        Ok(())
    }

    /// Field degree M
    #[inline]
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Number of field elements Q = 2^M
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Size of the multiplicative group, Q - 1
    #[inline]
    pub fn multiplicative_order(&self) -> usize {
        self.order - 1
    }

    /// Primitive polynomial the tables were generated from
    #[inline]
    pub fn primitive_polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Add two elements (XOR); subtraction is identical
    #[inline]
    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    /// Multiply two elements
    #[inline]
    pub fn multiply(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.antilog[log_sum % (self.order - 1)]
    }

    /// Multiplicative inverse; returns 0 for 0, which has no inverse
    #[inline]
    pub fn inverse(&self, a: u16) -> u16 {
        if a == 0 {
            return 0;
        }
        self.inv[a as usize]
    }

    /// Raise an element to a power
    #[inline]
    pub fn pow(&self, base: u16, exponent: u32) -> u16 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }
        let log_base = self.log[base as usize] as u64;
        let log_result = (log_base * exponent as u64) % (self.order as u64 - 1);
        self.antilog[log_result as usize]
    }

    /// α^i for any non-negative exponent
    #[inline]
    pub fn alpha_pow(&self, exponent: usize) -> u16 {
        self.antilog[exponent % (self.order - 1)]
    }

    /// α^i for a possibly negative exponent
    #[inline]
    pub fn alpha_pow_signed(&self, exponent: i64) -> u16 {
        let limit = (self.order - 1) as i64;
        self.antilog[exponent.rem_euclid(limit) as usize]
    }

    /// Discrete logarithm; `log(0)` returns the sentinel Q-1
    #[inline]
    pub fn log(&self, a: u16) -> usize {
        self.log[a as usize] as usize
    }

    pub fn log_table(&self) -> &[u16] {
        &self.log
    }

    pub fn antilog_table(&self) -> &[u16] {
        &self.antilog
    }

    pub fn inverse_table(&self) -> &[u16] {
        &self.inv
    }
}

impl fmt::Debug for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaloisField")
            .field("m", &self.m)
            .field("order", &self.order)
            .field("polynomial", &format_args!("{:#x}", self.polynomial))
            .finish()
    }
}
