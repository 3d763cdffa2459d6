//! Least-significant-first storage for one number's decimal digits.
//!
//! The classic doubly-linked digit list becomes a growable vector indexed
//! from the least significant digit: index 0 is the LSD, the last index the
//! MSD. Growth toward the MSD is a push, leading-zero removal a pop, and
//! both traversal directions are plain iteration. Every growth path goes
//! through `try_reserve` so storage exhaustion surfaces as an error instead
//! of an abort.

use std::collections::TryReserveError;

/// Ordered digit storage for one big number, least significant first.
///
/// Every element is in `0..=9`. A chain may be transiently empty while an
/// arithmetic result is being assembled; a finished [`crate::BigNum`] always
/// holds at least one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitChain {
    digits: Vec<u8>,
}

impl DigitChain {
    /// Single-digit chain holding the value zero.
    pub(crate) fn zero() -> Result<Self, TryReserveError> {
        let mut chain = Self::with_capacity(1)?;
        chain.digits.push(0);
        Ok(chain)
    }

    /// Empty chain with room for `capacity` digits reserved up front.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut digits = Vec::new();
        digits.try_reserve(capacity)?;
        Ok(Self { digits })
    }

    pub(crate) fn len(&self) -> usize {
        self.digits.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit `pos` positions above the LSD, or zero past the MSD.
    ///
    /// The zero default is what lets lock-step walks treat a shorter operand
    /// as contributing nothing.
    pub(crate) fn digit_or_zero(&self, pos: usize) -> u8 {
        self.digits.get(pos).copied().unwrap_or(0)
    }

    /// Overwrite the digit at `pos`, which must exist.
    pub(crate) fn set_digit(&mut self, pos: usize, digit: u8) {
        debug_assert!(digit <= 9);
        self.digits[pos] = digit;
    }

    /// Append a new most-significant digit.
    ///
    /// On allocation failure the chain is left unmodified.
    pub(crate) fn push_msd(&mut self, digit: u8) -> Result<(), TryReserveError> {
        debug_assert!(digit <= 9);
        self.digits.try_reserve(1)?;
        self.digits.push(digit);
        Ok(())
    }

    /// Drop most-significant zeros, never shrinking below one digit.
    pub(crate) fn strip_leading_zeros(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    /// Iterate digits from the LSD toward the MSD.
    pub(crate) fn iter_lsd(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().copied()
    }

    /// Iterate digits from the MSD toward the LSD (rendering order).
    pub(crate) fn iter_msd(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }

    /// Checked deep copy.
    pub(crate) fn try_clone(&self) -> Result<Self, TryReserveError> {
        let mut clone = Self::with_capacity(self.digits.len())?;
        clone.digits.extend_from_slice(&self.digits);
        Ok(clone)
    }
}
