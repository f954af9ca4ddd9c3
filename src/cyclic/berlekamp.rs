//! Berlekamp-Massey key-equation solver

use super::coder::CyclicCoder;
use crate::error::{FecError, FecResult};
use crate::polynomial;

impl CyclicCoder<'_> {
    /// Minimal-degree error-locator polynomial σ(x) for the given syndromes
    ///
    /// `syndromes[r]` holds S_(r+1). The result is stored by ascending power with
    /// σ₀ = 1 and degree equal to the number of errors it locates. Fails with
    /// `Uncorrectable` when that number exceeds t.
    pub fn berlekamp_massey(&self, syndromes: &[u16]) -> FecResult<Vec<u16>> {
        let field = self.field;
        let two_t = syndromes.len();

        // Current connection polynomial C(x) and the copy B(x) saved at the last
        // length change
        let mut current = vec![0u16; two_t + 1];
        current[0] = 1;
        let mut previous = current.clone();
        let mut length = 0usize;
        let mut shift = 1usize;
        let mut previous_discrepancy = 1u16;

        for r in 0..two_t {
            let mut discrepancy = syndromes[r];
            for i in 1..=length.min(r) {
                discrepancy ^= field.multiply(current[i], syndromes[r - i]);
            }

            if discrepancy == 0 {
                shift += 1;
                continue;
            }

            let scale = field.multiply(discrepancy, field.inverse(previous_discrepancy));
            let snapshot = (2 * length <= r).then(|| current.clone());

            // C(x) -= (d / b) x^shift B(x)
            for i in 0..(two_t + 1).saturating_sub(shift) {
                if previous[i] != 0 {
                    current[i + shift] ^= field.multiply(scale, previous[i]);
                }
            }

            match snapshot {
                Some(saved) => {
                    length = r + 1 - length;
                    previous = saved;
                    previous_discrepancy = discrepancy;
                    shift = 1;
                }
                None => shift += 1,
            }
        }

        if length > self.t {
            return Err(FecError::uncorrectable(format!(
                "error locator degree {} exceeds t = {}",
                length, self.t
            )));
        }

        current.truncate(length + 1);
        if polynomial::degree(&current) != Some(length) {
            return Err(FecError::uncorrectable(format!(
                "error locator is degenerate for register length {}",
                length
            )));
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::cyclic::CyclicCoder;
    use crate::galois::GaloisField;

    #[test]
    fn test_zero_syndromes_give_unit_locator() {
        let gf = GaloisField::new(4).unwrap();
        let coder = CyclicCoder::new(15, 7, 2, &gf).unwrap();
        assert_eq!(coder.berlekamp_massey(&[0; 4]).unwrap(), vec![1]);
    }

    #[test]
    fn test_single_error_locator() {
        let gf = GaloisField::new(4).unwrap();
        let coder = CyclicCoder::new(15, 7, 2, &gf).unwrap();
        let mut word = [0u8; 15];
        word[6] = 1;
        let syndromes = coder.calculate_syndromes(&word).unwrap();
        // σ(x) = 1 + α^6 x
        assert_eq!(
            coder.berlekamp_massey(&syndromes).unwrap(),
            vec![1, gf.alpha_pow(6)]
        );
    }

    #[test]
    fn test_two_error_locator() {
        let gf = GaloisField::new(4).unwrap();
        let coder = CyclicCoder::new(15, 7, 2, &gf).unwrap();
        let mut word = [0u8; 15];
        word[2] = 1;
        word[9] = 1;
        let syndromes = coder.calculate_syndromes(&word).unwrap();
        let (x1, x2) = (gf.alpha_pow(2), gf.alpha_pow(9));
        // σ(x) = (1 + X1 x)(1 + X2 x)
        assert_eq!(
            coder.berlekamp_massey(&syndromes).unwrap(),
            vec![1, x1 ^ x2, gf.multiply(x1, x2)]
        );
    }

    #[test]
    fn test_register_longer_than_t_is_uncorrectable() {
        let gf = GaloisField::new(4).unwrap();
        let coder = CyclicCoder::new(15, 7, 2, &gf).unwrap();
        // Only the last syndrome is nonzero: the shortest register has length 4
        let err = coder.berlekamp_massey(&[0, 0, 0, 1]).unwrap_err();
        assert!(err.is_uncorrectable());
    }
}
