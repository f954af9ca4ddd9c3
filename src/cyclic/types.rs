//! Input and output types for cyclic decoding

use crate::llr;

/// A received block as handed over by the demodulator
#[derive(Debug, Clone, Copy)]
pub enum ReceivedWord<'a> {
    /// Hard bits (any nonzero byte is a 1)
    Bits(&'a [u8]),
    /// Log-likelihood ratios, positive favouring 0
    Llrs(&'a [f64]),
}

impl ReceivedWord<'_> {
    pub fn len(&self) -> usize {
        match self {
            ReceivedWord::Bits(bits) => bits.len(),
            ReceivedWord::Llrs(llrs) => llrs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Hard-decision view of the block
    pub fn to_hard_bits(&self) -> Vec<u8> {
        match self {
            ReceivedWord::Bits(bits) => bits.iter().map(|&b| (b != 0) as u8).collect(),
            ReceivedWord::Llrs(llrs) => llr::hard_decisions(llrs),
        }
    }
}

/// Result of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    /// The k systematic data bits
    pub data: Vec<u8>,
    /// The corrected n-bit codeword
    pub codeword: Vec<u8>,
    /// Number of bit positions changed relative to the hard-decision input
    pub corrected_count: usize,
}

impl DecodedBlock {
    pub(crate) fn from_codeword(codeword: Vec<u8>, k: usize, corrected_count: usize) -> Self {
        Self {
            data: codeword[..k].to_vec(),
            codeword,
            corrected_count,
        }
    }
}
