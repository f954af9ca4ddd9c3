//! Shared helpers for integration tests: a seeded BPSK/AWGN channel and
//! random data generation

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_bits(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..2u8)).collect()
}

/// BPSK over additive white Gaussian noise (bit 0 -> +1, bit 1 -> -1)
pub struct AwgnChannel {
    rng: StdRng,
    sigma: f64,
}

impl AwgnChannel {
    /// Channel at the given Eb/N0 (dB) for a code of rate `rate`
    pub fn new(seed: u64, ebn0_db: f64, rate: f64) -> Self {
        let ebn0 = 10f64.powf(ebn0_db / 10.0);
        let noise_variance = 1.0 / (2.0 * rate * ebn0);
        Self {
            rng: seeded_rng(seed),
            sigma: noise_variance.sqrt(),
        }
    }

    pub fn noise_variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Standard normal sample (Box-Muller)
    fn gaussian(&mut self) -> f64 {
        let u1: f64 = 1.0 - self.rng.random::<f64>();
        let u2: f64 = self.rng.random::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }

    /// Transmit a codeword and return the channel LLRs 2y/σ²
    pub fn transmit(&mut self, codeword: &[u8]) -> Vec<f64> {
        let scale = 2.0 / self.noise_variance();
        codeword
            .iter()
            .map(|&bit| {
                let symbol = if bit == 0 { 1.0 } else { -1.0 };
                scale * (symbol + self.sigma * self.gaussian())
            })
            .collect()
    }
}

/// Noiseless LLRs of fixed magnitude for a codeword
pub fn clean_llrs(codeword: &[u8], magnitude: f64) -> Vec<f64> {
    codeword
        .iter()
        .map(|&bit| if bit == 0 { magnitude } else { -magnitude })
        .collect()
}
