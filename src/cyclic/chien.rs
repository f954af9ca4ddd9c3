//! Chien search for error-locator roots

use super::coder::CyclicCoder;
use crate::error::{FecError, FecResult};
use crate::polynomial;
use smallvec::SmallVec;

/// Error positions found by the Chien search; at most t entries
pub type ErrorPositions = SmallVec<[usize; 8]>;

impl CyclicCoder<'_> {
    /// Positions j in [0, n) where σ(β^-j) = 0
    ///
    /// Fails with `Uncorrectable` when the number of roots inside the codeword
    /// differs from deg σ.
    pub fn chien_search(&self, locator: &[u16]) -> FecResult<ErrorPositions> {
        let field = self.field;
        let degree = match polynomial::degree(locator) {
            Some(d) if locator[0] != 0 => d,
            _ => return Err(FecError::uncorrectable("error locator has no constant term")),
        };

        // registers[i] = σ_i β^(-i·j) for the current position j
        let mut registers: SmallVec<[u16; 16]> = locator[..=degree].iter().copied().collect();
        let steps: SmallVec<[u16; 16]> = (0..=degree)
            .map(|i| field.alpha_pow_signed(-((i * self.step) as i64)))
            .collect();

        let mut positions = ErrorPositions::new();
        for j in 0..self.n {
            let sum = registers.iter().fold(0u16, |acc, &r| acc ^ r);
            if sum == 0 {
                positions.push(j);
                if positions.len() > degree {
                    break;
                }
            }
            for (register, &step) in registers.iter_mut().zip(&steps) {
                *register = field.multiply(*register, step);
            }
        }

        if positions.len() != degree {
            return Err(FecError::uncorrectable(format!(
                "error locator of degree {} has {} roots in the codeword",
                degree,
                positions.len()
            )));
        }
        Ok(positions)
    }
}
