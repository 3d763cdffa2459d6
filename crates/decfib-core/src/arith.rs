//! Digit-chain arithmetic: addition, restricted subtraction, multiplication.
//!
//! Every operation walks its operand chains from the least significant digit
//! upward and returns a freshly owned result; operands are never mutated.
//! Failed growth mid-operation drops everything built so far before the
//! error propagates.

use crate::bignum::BigNum;
use crate::chain::DigitChain;
use crate::error::BigNumError;

/// Add two big numbers.
///
/// Lock-step walk from the LSD with carry propagation: a chain shorter than
/// the other simply stops contributing, and a carry left after both inputs
/// are exhausted grows one final MSD. The result is `max(len_a, len_b)`
/// digits, or one more on terminal carry.
pub fn add(a: &BigNum, b: &BigNum) -> Result<BigNum, BigNumError> {
    let longest = a.digit_count().max(b.digit_count());
    let mut chain = DigitChain::with_capacity(longest + 1)?;
    let mut carry = 0u8;
    for pos in 0..longest {
        let sum = a.chain().digit_or_zero(pos) + b.chain().digit_or_zero(pos) + carry;
        chain.push_msd(sum % 10)?;
        carry = sum / 10;
    }
    if carry != 0 {
        chain.push_msd(carry)?;
    }
    Ok(BigNum::from_chain(chain))
}

/// Subtract `b` from `a`, requiring `a >= b`.
///
/// Used by the fast-doubling recurrence, where the ordering holds by
/// construction; callers that cannot guarantee it get
/// [`BigNumError::PreconditionViolation`] back. The difference is assembled
/// by copying `a` and walking `b`'s digits (zero past its end) with a borrow
/// chain: a digit that would go negative takes 10 back and passes borrow = 1
/// upward. Leading zeros introduced by cancellation are stripped.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn sub_assuming_ge(a: &BigNum, b: &BigNum) -> Result<BigNum, BigNumError> {
    if a < b {
        return Err(BigNumError::PreconditionViolation);
    }
    let mut chain = a.chain().try_clone()?;
    let mut borrow = 0i8;
    for pos in 0..chain.len() {
        let mut value = chain.digit_or_zero(pos) as i8 - b.chain().digit_or_zero(pos) as i8 - borrow;
        if value < 0 {
            value += 10;
            borrow = 1;
        } else {
            borrow = 0;
        }
        chain.set_digit(pos, value as u8);
    }
    debug_assert_eq!(borrow, 0);
    chain.strip_leading_zeros();
    Ok(BigNum::from_chain(chain))
}

/// Multiply two big numbers with the schoolbook algorithm.
///
/// Orientation-independent: the operand with fewer digits drives the outer
/// loop so the accumulator is swept as few times as possible. Each partial
/// product lands one position higher than the last (the pencil-and-paper
/// shift-and-add layout), with overflow carried into more-significant
/// result digits, growing the chain on demand.
#[allow(clippy::cast_possible_truncation)]
pub fn mul(a: &BigNum, b: &BigNum) -> Result<BigNum, BigNumError> {
    let (small, big) = if a.digit_count() <= b.digit_count() {
        (a, b)
    } else {
        (b, a)
    };

    let mut chain = DigitChain::with_capacity(a.digit_count() + b.digit_count())?;
    chain.push_msd(0)?;

    for (shift, s) in small.chain().iter_lsd().enumerate() {
        for (offset, d) in big.chain().iter_lsd().enumerate() {
            let mut pos = shift + offset;
            let mut carry = u16::from(s) * u16::from(d);
            while carry != 0 {
                while chain.len() <= pos {
                    chain.push_msd(0)?;
                }
                let total = u16::from(chain.digit_or_zero(pos)) + carry;
                chain.set_digit(pos, (total % 10) as u8);
                carry = total / 10;
                pos += 1;
            }
        }
    }

    // A zero factor leaves untouched zero digits behind.
    chain.strip_leading_zeros();
    Ok(BigNum::from_chain(chain))
}
