//! Arbitrary-precision non-negative decimal integers.
//!
//! A [`BigNum`] owns one [`DigitChain`] and keeps it canonical: at least one
//! digit, no leading zero unless the value itself is zero. Arithmetic on big
//! numbers lives in [`crate::arith`]; this module covers construction,
//! copying, comparison, and rendering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::chain::DigitChain;
use crate::error::BigNumError;

/// Arbitrary-precision non-negative decimal integer.
///
/// # Example
/// ```
/// use decfib_core::BigNum;
///
/// let n = BigNum::from_u64(12586269025).unwrap();
/// assert_eq!(n.digit_count(), 11);
/// assert_eq!(n.into_decimal_string(), "12586269025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigNum {
    chain: DigitChain,
}

impl BigNum {
    /// Create a zero-valued number (one digit, value 0).
    pub fn zero() -> Result<Self, BigNumError> {
        Ok(Self {
            chain: DigitChain::zero()?,
        })
    }

    /// Build from a native unsigned integer.
    ///
    /// Digits are extracted least-significant-first by repeated div/mod 10
    /// and appended toward the MSD.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(mut n: u64) -> Result<Self, BigNumError> {
        let mut num = Self::zero()?;
        num.chain.set_digit(0, (n % 10) as u8);
        n /= 10;
        while n != 0 {
            num.chain.push_msd((n % 10) as u8)?;
            n /= 10;
        }
        Ok(num)
    }

    /// Build from a native signed integer; negative inputs clamp to zero.
    ///
    /// The domain has no negative numbers, so clamping is a defensive
    /// default rather than data loss.
    pub fn from_i64(n: i64) -> Result<Self, BigNumError> {
        Self::from_u64(u64::try_from(n.max(0)).unwrap_or(0))
    }

    /// Number of digits in the chain. Always at least 1.
    pub fn digit_count(&self) -> usize {
        self.chain.len()
    }

    pub fn is_zero(&self) -> bool {
        self.chain.len() == 1 && self.chain.digit_or_zero(0) == 0
    }

    /// Checked independent deep copy.
    ///
    /// Reports [`BigNumError::Allocation`] instead of aborting when backing
    /// storage cannot be obtained; the derived [`Clone`] remains available
    /// for call sites that accept the infallible-allocation convention.
    pub fn try_clone(&self) -> Result<Self, BigNumError> {
        Ok(Self {
            chain: self.chain.try_clone()?,
        })
    }

    /// Prepend a new most-significant digit.
    ///
    /// Fails with [`BigNumError::InvalidOperand`] for `digit > 9` and with
    /// [`BigNumError::Allocation`] on storage exhaustion; either way the
    /// value is left unmodified.
    pub fn grow_msd(&mut self, digit: u8) -> Result<(), BigNumError> {
        if digit > 9 {
            return Err(BigNumError::InvalidOperand(format!(
                "digit out of range: {digit}"
            )));
        }
        self.chain.push_msd(digit)?;
        Ok(())
    }

    /// Remove leading zero digits down to the canonical form.
    ///
    /// Never shrinks below one digit; the value zero stays a single 0.
    pub fn strip_leading_zeros(&mut self) {
        self.chain.strip_leading_zeros();
    }

    /// Render MSD-first as a decimal string, consuming the value.
    ///
    /// The rendered length equals [`digit_count`](Self::digit_count). This
    /// is the one-shot compute/serialize/release pattern of the boundary
    /// caller; use [`Display`](fmt::Display) to render by reference.
    #[must_use]
    pub fn into_decimal_string(self) -> String {
        self.to_string()
    }

    /// Wrap a finished chain. The chain must hold at least one digit.
    pub(crate) fn from_chain(chain: DigitChain) -> Self {
        debug_assert!(!chain.is_empty());
        Self { chain }
    }

    pub(crate) fn chain(&self) -> &DigitChain {
        &self.chain
    }
}

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.chain.iter_msd() {
            f.write_fmt(format_args!("{digit}"))?;
        }
        Ok(())
    }
}

/// Magnitude ordering: digit count first, then MSD-first lexicographic.
///
/// Sound because representations are canonical (no leading zeros).
impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digit_count()
            .cmp(&other.digit_count())
            .then_with(|| {
                for (a, b) in self.chain.iter_msd().zip(other.chain.iter_msd()) {
                    match a.cmp(&b) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            })
    }
}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigNum {
    type Err = BigNumError;

    /// Parse an ASCII decimal string.
    ///
    /// Leading zeros are accepted and canonicalized away; empty input or a
    /// non-digit character is an [`BigNumError::InvalidOperand`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BigNumError::InvalidOperand("empty decimal string".into()));
        }
        let mut chain = DigitChain::with_capacity(s.len())?;
        for byte in s.bytes().rev() {
            if !byte.is_ascii_digit() {
                return Err(BigNumError::InvalidOperand(format!(
                    "invalid decimal character: {:?}",
                    char::from(byte)
                )));
            }
            chain.push_msd(byte - b'0')?;
        }
        let mut num = Self::from_chain(chain);
        num.strip_leading_zeros();
        Ok(num)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigNum {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigNum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
