//! Linear additive Fibonacci generation, kept as a correctness oracle.
//!
//! O(n) big-number additions; each superseded term is released as the pair
//! rolls forward. Not the production path — the fast-doubling generator is —
//! but its independence makes it the reference the tests compare against.

use tracing::debug;

use crate::arith;
use crate::bignum::BigNum;
use crate::error::BigNumError;
use crate::generator::Generator;

/// Linear reference generator.
pub struct LinearReference;

impl LinearReference {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinearReference {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for LinearReference {
    fn fibonacci(&self, n: u64) -> Result<BigNum, BigNumError> {
        let mut prev = BigNum::zero()?;
        if n == 0 {
            return Ok(prev);
        }
        debug!(n, "linear generation start");

        let mut curr = BigNum::from_u64(1)?;
        for _ in 1..n {
            let next = arith::add(&prev, &curr)?;
            prev = std::mem::replace(&mut curr, next);
        }
        Ok(curr)
    }

    fn name(&self) -> &'static str {
        "LinearReference"
    }
}
