//! Standard cyclic code parameter sets

/// Parameters of a binary cyclic code over GF(2^m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParams {
    /// Field degree of the extension field used for decoding
    pub m: u32,
    /// Codeword length
    pub n: usize,
    /// Data length
    pub k: usize,
    /// Number of correctable errors
    pub t: usize,
}

impl CodeParams {
    pub const fn new(m: u32, n: usize, k: usize, t: usize) -> Self {
        Self { m, n, k, t }
    }

    /// Hamming(7,4), corrects 1 error
    pub const fn hamming_7_4() -> Self {
        Self::new(3, 7, 4, 1)
    }

    /// Hamming(15,11), corrects 1 error
    pub const fn hamming_15_11() -> Self {
        Self::new(4, 15, 11, 1)
    }

    /// BCH(15,7), corrects 2 errors
    pub const fn bch_15_7() -> Self {
        Self::new(4, 15, 7, 2)
    }

    /// BCH(15,5), corrects 3 errors
    pub const fn bch_15_5() -> Self {
        Self::new(4, 15, 5, 3)
    }

    /// BCH(31,21), corrects 2 errors
    pub const fn bch_31_21() -> Self {
        Self::new(5, 31, 21, 2)
    }

    /// BCH(31,16), corrects 3 errors
    pub const fn bch_31_16() -> Self {
        Self::new(5, 31, 16, 3)
    }

    /// BCH(63,51), corrects 2 errors
    pub const fn bch_63_51() -> Self {
        Self::new(6, 63, 51, 2)
    }

    /// BCH(255,239), corrects 2 errors
    pub const fn bch_255_239() -> Self {
        Self::new(8, 255, 239, 2)
    }

    /// Golay(23,12) over GF(2^11) with β = α^89
    ///
    /// The algebraic decoder uses the consecutive roots β¹..β⁴ and corrects two
    /// errors; Chase decoding reaches further toward the code's distance of 7.
    pub const fn golay_23_12() -> Self {
        Self::new(11, 23, 12, 2)
    }

    /// All built-in parameter sets
    pub fn standard_codes() -> Vec<CodeParams> {
        vec![
            Self::hamming_7_4(),
            Self::hamming_15_11(),
            Self::bch_15_7(),
            Self::bch_15_5(),
            Self::bch_31_21(),
            Self::bch_31_16(),
            Self::bch_63_51(),
            Self::bch_255_239(),
            Self::golay_23_12(),
        ]
    }

    /// Number of parity bits, n - k
    pub fn parity_len(&self) -> usize {
        self.n.saturating_sub(self.k)
    }

    /// Code rate k / n
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }
}
