//! Binary BCH/Golay cyclic codes
//!
//! A [`CyclicCoder`] encodes systematically by polynomial division and decodes
//! in four stages: syndrome computation, Berlekamp-Massey, Chien search and bit
//! correction. Chase decoding wraps the algebraic decoder with a search over
//! the least-reliable positions of a soft input.
//!
//! ```
//! use bchfec::cyclic::{CodeParams, CyclicCoder};
//! use bchfec::galois::GaloisField;
//!
//! let field = GaloisField::new(4).unwrap();
//! let coder = CyclicCoder::from_params(CodeParams::bch_15_7(), &field).unwrap();
//!
//! let data = [1, 0, 1, 1, 0, 0, 1];
//! let mut received = coder.encode(&data).unwrap();
//! received[3] ^= 1;
//! received[11] ^= 1;
//!
//! let decoded = coder.decode_algebraic(&received).unwrap();
//! assert_eq!(decoded.data, data);
//! assert_eq!(decoded.corrected_count, 2);
//! ```

mod berlekamp;
mod chase;
mod chien;
pub mod coder;
pub mod config;
pub mod params;
mod syndrome;
pub mod types;

pub use chien::ErrorPositions;
pub use coder::CyclicCoder;
pub use config::{DecodeMode, DecodeOptions, MAX_CHASE_POSITIONS};
pub use params::CodeParams;
pub use types::{DecodedBlock, ReceivedWord};
