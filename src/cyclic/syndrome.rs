//! Syndrome computation over GF(2^M)

use super::coder::CyclicCoder;
use crate::error::FecResult;

impl CyclicCoder<'_> {
    /// Syndromes S₁..S₂ₜ of a received word
    ///
    /// S_i is the received polynomial evaluated at β^i, where bit j of the
    /// word is the coefficient of x^j.
    pub fn calculate_syndromes(&self, codeword: &[u8]) -> FecResult<Vec<u16>> {
        self.check_length(codeword.len(), self.n)?;

        let field = self.field;
        let syndromes = (1..=2 * self.t)
            .map(|i| {
                let beta_i = field.alpha_pow(i * self.step);
                let mut syndrome = 0u16;
                // (β^i)^j, advanced one position at a time
                let mut current_power = 1u16;
                for &bit in codeword {
                    if bit != 0 {
                        syndrome ^= current_power;
                    }
                    current_power = field.multiply(current_power, beta_i);
                }
                syndrome
            })
            .collect();
        Ok(syndromes)
    }
}
