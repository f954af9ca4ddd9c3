//! Chase soft-decision decoding
//!
//! The L least-reliable hard decisions are perturbed with every one of the 2^L
//! bit masks; each perturbed word goes through the algebraic decoder and the
//! decoded codeword closest to the soft input wins. Candidates are independent,
//! so large searches fan out over the rayon pool and are reduced by metric with
//! the mask index as tie-breaker, which keeps the result independent of
//! evaluation order.

use super::coder::CyclicCoder;
use super::config::{DecodeOptions, MAX_CHASE_POSITIONS};
use super::types::DecodedBlock;
use crate::error::{FecError, FecResult};
use crate::llr;
use log::debug;
use rayon::prelude::*;
use smallvec::SmallVec;
use std::cmp::Ordering;

type TestPositions = SmallVec<[usize; MAX_CHASE_POSITIONS]>;

/// One successfully decoded test pattern
struct Candidate {
    pattern: u32,
    metric: f64,
    block: DecodedBlock,
}

impl Candidate {
    fn rank(a: &Candidate, b: &Candidate) -> Ordering {
        a.metric
            .total_cmp(&b.metric)
            .then_with(|| a.pattern.cmp(&b.pattern))
    }
}

/// Indices of the `count` smallest reliabilities, ties broken by lower index
fn least_reliable_positions(reliability: &[f64], count: usize) -> TestPositions {
    let mut order: Vec<usize> = (0..reliability.len()).collect();
    order.sort_by(|&a, &b| reliability[a].total_cmp(&reliability[b]));
    order.into_iter().take(count).collect()
}

/// Soft discrepancy of a codeword: Σ |llr_j| over positions where it disagrees
/// with the hard decisions
fn discrepancy(codeword: &[u8], baseline: &[u8], reliability: &[f64]) -> f64 {
    codeword
        .iter()
        .zip(baseline)
        .zip(reliability)
        .filter(|((c, b), _)| c != b)
        .map(|(_, &r)| r)
        .sum()
}

impl CyclicCoder<'_> {
    /// Chase decoding of an n-LLR block
    ///
    /// `corrected_count` of the result is the Hamming distance between the
    /// hard decisions and the selected codeword.
    pub fn decode_chase(&self, llrs: &[f64], options: &DecodeOptions) -> FecResult<DecodedBlock> {
        self.check_length(llrs.len(), self.n)?;

        let num_positions = options.num_test_patterns.min(self.n);
        if num_positions > MAX_CHASE_POSITIONS {
            return Err(FecError::InvalidDecodeOptions(format!(
                "{} test positions exceed the limit of {}",
                num_positions, MAX_CHASE_POSITIONS
            )));
        }

        let baseline = llr::hard_decisions(llrs);
        let reliability: Vec<f64> = llrs.iter().map(|&l| llr::reliability(l)).collect();
        let positions = least_reliable_positions(&reliability, num_positions);
        let pattern_count = 1u32 << num_positions;

        let evaluate = |pattern: u32| -> Option<Candidate> {
            let mut test_word = baseline.clone();
            for (bit, &position) in positions.iter().enumerate() {
                if (pattern >> bit) & 1 == 1 {
                    test_word[position] ^= 1;
                }
            }
            let block = self.decode_algebraic(&test_word).ok()?;
            let metric = discrepancy(&block.codeword, &baseline, &reliability);
            Some(Candidate {
                pattern,
                metric,
                block,
            })
        };

        let best = if options.should_parallelize(pattern_count as usize) {
            (0..pattern_count)
                .into_par_iter()
                .filter_map(&evaluate)
                .min_by(Candidate::rank)
        } else {
            (0..pattern_count).filter_map(&evaluate).min_by(Candidate::rank)
        };

        let best = best.ok_or_else(|| {
            FecError::uncorrectable(format!(
                "none of {} Chase test patterns decoded",
                pattern_count
            ))
        })?;

        let corrected_count = best
            .block
            .codeword
            .iter()
            .zip(&baseline)
            .filter(|(c, b)| c != b)
            .count();

        debug!(
            "Chase decode: {} patterns over positions {:?}, best pattern {:#b} metric {:.4}, {} bits changed",
            pattern_count,
            positions.as_slice(),
            best.pattern,
            best.metric,
            corrected_count
        );

        Ok(DecodedBlock {
            corrected_count,
            ..best.block
        })
    }
}
