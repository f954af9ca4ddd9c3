//! Log-likelihood-ratio utilities shared with the soft decoders
//!
//! Sign convention: LLR > 0 favours bit 0, LLR < 0 favours bit 1.

/// Hard decision for a single LLR; ties at zero resolve to bit 0
#[inline]
pub fn hard_decision(llr: f64) -> u8 {
    if llr < 0.0 {
        1
    } else {
        0
    }
}

/// Hard decisions for a block of LLRs
pub fn hard_decisions(llrs: &[f64]) -> Vec<u8> {
    llrs.iter().map(|&llr| hard_decision(llr)).collect()
}

/// Reliability of a decision: the LLR magnitude
#[inline]
pub fn reliability(llr: f64) -> f64 {
    llr.abs()
}

/// Sign with `sign(0) = 0`
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Min-sum approximation of the check-node combine:
/// `sign(a) * sign(b) * min(|a|, |b|)`
#[inline]
pub fn combine(a: f64, b: f64) -> f64 {
    sign(a) * sign(b) * a.abs().min(b.abs())
}

/// Exact check-node combine (box-plus):
/// min-sum plus the correction `ln(1 + e^-|a+b|) - ln(1 + e^-|a-b|)`
#[inline]
pub fn box_plus(a: f64, b: f64) -> f64 {
    combine(a, b) + (-(a + b).abs()).exp().ln_1p() - (-(a - b).abs()).exp().ln_1p()
}
