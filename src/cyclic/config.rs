//! Configuration for decode operations

/// Default number of least-reliable positions perturbed by Chase decoding
pub const DEFAULT_TEST_PATTERNS: usize = 4;

/// Upper bound on Chase test positions (2^20 candidate decodes per block)
pub const MAX_CHASE_POSITIONS: usize = 20;

/// Candidate count from which Chase decoding fans out over the rayon pool
pub const PARALLEL_PATTERN_THRESHOLD: usize = 64;

/// Decoding path selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    /// Algebraic decoding of hard bits
    Hard,
    /// Algebraic decoding after hard-deciding LLR input
    SoftAlgebraic,
    /// Chase list decoding over the least-reliable positions
    Chase,
}

/// Options for decode operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Number of least-reliable positions perturbed by Chase decoding;
    /// 2^min(num_test_patterns, n) candidates are tried
    pub num_test_patterns: usize,
    /// Whether Chase candidates may be evaluated in parallel
    pub parallel: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            num_test_patterns: DEFAULT_TEST_PATTERNS,
            parallel: true,
        }
    }
}

impl DecodeOptions {
    pub fn new(num_test_patterns: usize, parallel: bool) -> Self {
        Self {
            num_test_patterns,
            parallel,
        }
    }

    /// Single-threaded options with the given number of test positions
    pub fn sequential(num_test_patterns: usize) -> Self {
        Self::new(num_test_patterns, false)
    }

    /// Whether a Chase search over `candidates` patterns should use the rayon pool
    pub fn should_parallelize(&self, candidates: usize) -> bool {
        self.parallel && candidates >= PARALLEL_PATTERN_THRESHOLD
    }
}
