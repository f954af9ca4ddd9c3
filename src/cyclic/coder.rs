//! Binary BCH/Golay coder: construction, systematic encoding and decode dispatch

use super::config::{DecodeMode, DecodeOptions};
use super::params::CodeParams;
use super::types::{DecodedBlock, ReceivedWord};
use crate::error::{FecError, FecResult};
use crate::galois::GaloisField;
use crate::polynomial;
use log::{debug, trace};

/// Systematic binary cyclic coder with algebraic and Chase decoding
///
/// Borrows its [`GaloisField`]; the field must outlive every coder built on it.
/// All operations take `&self` and keep no per-call state, so one coder can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct CyclicCoder<'f> {
    pub(super) n: usize,
    pub(super) k: usize,
    pub(super) t: usize,
    /// β = α^step is the root of unity whose powers define the code
    pub(super) step: usize,
    /// Generator coefficients by ascending power, degree n - k
    pub(super) generator: Vec<u8>,
    pub(super) field: &'f GaloisField,
}

impl<'f> CyclicCoder<'f> {
    /// Build an (n, k) code correcting t errors over `field`
    ///
    /// When n divides 2^M - 1 the code is cyclic of length n with
    /// β = α^((2^M - 1) / n). Any other n < 2^M - 1 gives a shortened
    /// primitive-length code.
    pub fn new(n: usize, k: usize, t: usize, field: &'f GaloisField) -> FecResult<Self> {
        if t == 0 {
            return Err(FecError::InvalidCodeParameters(
                "t must be at least 1".to_string(),
            ));
        }
        if k == 0 || k >= n {
            return Err(FecError::InvalidCodeParameters(format!(
                "k = {} must satisfy 0 < k < n = {}",
                k, n
            )));
        }
        let full_length = field.multiplicative_order();
        if n > full_length {
            return Err(FecError::InvalidCodeParameters(format!(
                "n = {} exceeds 2^{} - 1 = {}",
                n,
                field.m(),
                full_length
            )));
        }

        let (length, step) = if full_length % n == 0 {
            (n, full_length / n)
        } else {
            (full_length, 1)
        };

        let generator = polynomial::generator_polynomial(field, length, step, t)?;
        let degree = generator.len() - 1;
        if degree != n - k {
            return Err(FecError::InvalidCodeParameters(format!(
                "generator for t = {} has degree {}, but n - k = {}",
                t,
                degree,
                n - k
            )));
        }

        debug!(
            "Constructed ({}, {}) cyclic code, t = {}, over GF(2^{}) with beta = alpha^{}{}",
            n,
            k,
            t,
            field.m(),
            step,
            if length > n { " (shortened)" } else { "" }
        );

        Ok(Self {
            n,
            k,
            t,
            step,
            generator,
            field,
        })
    }

    /// Build a coder from a parameter set; `params.m` must match the field
    pub fn from_params(params: CodeParams, field: &'f GaloisField) -> FecResult<Self> {
        if params.m != field.m() {
            return Err(FecError::InvalidCodeParameters(format!(
                "code expects GF(2^{}) but field is GF(2^{})",
                params.m,
                field.m()
            )));
        }
        Self::new(params.n, params.k, params.t, field)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn t(&self) -> usize {
        self.t
    }

    pub fn parity_len(&self) -> usize {
        self.n - self.k
    }

    pub fn code_rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// Generator polynomial coefficients by ascending power
    pub fn generator(&self) -> &[u8] {
        &self.generator
    }

    pub fn field(&self) -> &'f GaloisField {
        self.field
    }

    pub(super) fn check_length(&self, actual: usize, expected: usize) -> FecResult<()> {
        if actual != expected {
            return Err(FecError::InvalidInputLength { expected, actual });
        }
        Ok(())
    }

    /// Encode k data bits into a systematic n-bit codeword `[data | parity]`
    pub fn encode(&self, data: &[u8]) -> FecResult<Vec<u8>> {
        self.check_length(data.len(), self.k)?;

        let g_len = self.generator.len();
        let mut working_frame = vec![0u8; self.n];
        for (slot, &bit) in working_frame.iter_mut().zip(data) {
            *slot = (bit != 0) as u8;
        }

        for i in 0..self.k {
            if working_frame[i] == 1 {
                for (slot, &g) in working_frame[i..i + g_len].iter_mut().zip(&self.generator) {
                    *slot ^= g;
                }
            }
        }

        let mut codeword = Vec::with_capacity(self.n);
        codeword.extend(data.iter().map(|&bit| (bit != 0) as u8));
        codeword.extend_from_slice(&working_frame[self.k..]);
        Ok(codeword)
    }

    /// True if `bits` is a codeword (all syndromes zero)
    pub fn is_codeword(&self, bits: &[u8]) -> FecResult<bool> {
        Ok(self.calculate_syndromes(bits)?.iter().all(|&s| s == 0))
    }

    /// Hard-decision algebraic decoding:
    /// syndromes, Berlekamp-Massey, Chien search, bit flips
    pub fn decode_algebraic(&self, hard_codeword: &[u8]) -> FecResult<DecodedBlock> {
        self.check_length(hard_codeword.len(), self.n)?;
        let mut corrected: Vec<u8> = hard_codeword.iter().map(|&b| (b != 0) as u8).collect();

        let syndromes = self.calculate_syndromes(&corrected)?;
        if syndromes.iter().all(|&s| s == 0) {
            return Ok(DecodedBlock::from_codeword(corrected, self.k, 0));
        }

        let positions = self
            .berlekamp_massey(&syndromes)
            .and_then(|locator| self.chien_search(&locator))
            .inspect_err(|e| trace!("Algebraic decode failed: {}", e))?;

        for &position in &positions {
            corrected[position] ^= 1;
        }

        if !self.is_codeword(&corrected)? {
            trace!(
                "Correction at {:?} did not produce a codeword",
                positions.as_slice()
            );
            return Err(FecError::uncorrectable(
                "corrected word still has nonzero syndromes",
            ));
        }

        Ok(DecodedBlock::from_codeword(
            corrected,
            self.k,
            positions.len(),
        ))
    }

    /// Decode a received block with the selected mode
    ///
    /// `Hard` and `SoftAlgebraic` hard-decide LLR input and run the algebraic
    /// decoder; `Chase` requires LLR input.
    pub fn decode(
        &self,
        input: ReceivedWord<'_>,
        mode: DecodeMode,
        options: &DecodeOptions,
    ) -> FecResult<DecodedBlock> {
        match (mode, input) {
            (DecodeMode::Chase, ReceivedWord::Llrs(llrs)) => self.decode_chase(llrs, options),
            (DecodeMode::Chase, ReceivedWord::Bits(_)) => Err(FecError::InvalidDecodeOptions(
                "Chase decoding requires LLR input".to_string(),
            )),
            (DecodeMode::Hard | DecodeMode::SoftAlgebraic, input) => {
                self.check_length(input.len(), self.n)?;
                self.decode_algebraic(&input.to_hard_bits())
            }
        }
    }
}
