//! Generator trait implemented by the Fibonacci strategies.

use crate::bignum::BigNum;
use crate::error::BigNumError;

/// A Fibonacci sequence producer, indexed from F(0) = 0, F(1) = 1.
///
/// Generators are stateless and safe to share across threads; every call
/// builds its own private set of big numbers.
pub trait Generator: Send + Sync {
    /// Compute F(n) as a freshly owned big number.
    fn fibonacci(&self, n: u64) -> Result<BigNum, BigNumError>;

    /// Name of this strategy.
    fn name(&self) -> &'static str;
}
