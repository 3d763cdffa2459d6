//! # decfib-core
//!
//! Arbitrary-precision decimal Fibonacci engine. Big numbers are chains of
//! decimal digits with schoolbook arithmetic; F(n) is produced by a
//! fast-doubling generator, with a linear generator kept as a correctness
//! oracle.

pub mod arith;
pub mod bignum;
pub(crate) mod chain;
pub mod error;
pub mod fastdoubling;
pub mod generator;
pub mod linear;

// Re-exports
pub use bignum::BigNum;
pub use error::BigNumError;
pub use fastdoubling::FastDoubling;
pub use generator::Generator;
pub use linear::LinearReference;

/// Compute F(n) using the fast doubling generator.
///
/// This is the convenience entry point for boundary callers that only need
/// one value; construct a [`FastDoubling`] (or [`LinearReference`]) directly
/// to pick a strategy.
///
/// # Example
/// ```
/// let f10 = decfib_core::fibonacci(10).unwrap();
/// assert_eq!(f10.into_decimal_string(), "55");
/// ```
pub fn fibonacci(n: u64) -> Result<BigNum, BigNumError> {
    FastDoubling::new().fibonacci(n)
}
