//! Forward-error-correction primitives: GF(2^M) arithmetic and binary BCH/Golay
//! cyclic codes with hard-decision algebraic and soft-decision Chase decoding.

pub mod cyclic;
pub mod error;
pub mod galois;
pub mod llr;
pub mod polynomial;

pub use cyclic::{CodeParams, CyclicCoder, DecodeMode, DecodeOptions, DecodedBlock, ReceivedWord};
pub use error::{FecError, FecResult};
pub use galois::GaloisField;
