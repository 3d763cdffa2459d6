//! Property-based tests for the decimal big-number core.
//!
//! `num-bigint` serves as an independent arithmetic oracle; the linear
//! generator serves as the oracle for the fast-doubling generator.

use num_bigint::BigUint;
use proptest::prelude::*;

use decfib_core::arith;
use decfib_core::bignum::BigNum;
use decfib_core::fastdoubling::FastDoubling;
use decfib_core::generator::Generator;
use decfib_core::linear::LinearReference;

fn bignum(s: &str) -> BigNum {
    s.parse().unwrap()
}

fn oracle(s: &str) -> BigUint {
    s.parse().unwrap()
}

/// Random decimal strings with no leading zeros, up to 40 digits.
fn decimal_string() -> impl Strategy<Value = String> {
    proptest::string::string_regex("0|[1-9][0-9]{0,39}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Addition agrees with the num-bigint oracle.
    #[test]
    fn addition_matches_oracle(a in decimal_string(), b in decimal_string()) {
        let sum = arith::add(&bignum(&a), &bignum(&b)).unwrap();
        let expected = oracle(&a) + oracle(&b);
        prop_assert_eq!(sum.into_decimal_string(), expected.to_string());
    }

    /// Multiplication agrees with the num-bigint oracle.
    #[test]
    fn multiplication_matches_oracle(a in decimal_string(), b in decimal_string()) {
        let product = arith::mul(&bignum(&a), &bignum(&b)).unwrap();
        let expected = oracle(&a) * oracle(&b);
        prop_assert_eq!(product.into_decimal_string(), expected.to_string());
    }

    /// Addition is commutative up to rendering.
    #[test]
    fn addition_commutative(a in decimal_string(), b in decimal_string()) {
        let ab = arith::add(&bignum(&a), &bignum(&b)).unwrap();
        let ba = arith::add(&bignum(&b), &bignum(&a)).unwrap();
        prop_assert_eq!(ab.into_decimal_string(), ba.into_decimal_string());
    }

    /// Addition is associative up to rendering.
    #[test]
    fn addition_associative(
        a in decimal_string(),
        b in decimal_string(),
        c in decimal_string(),
    ) {
        let (a, b, c) = (bignum(&a), bignum(&b), bignum(&c));
        let left = arith::add(&arith::add(&a, &b).unwrap(), &c).unwrap();
        let right = arith::add(&a, &arith::add(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left.into_decimal_string(), right.into_decimal_string());
    }

    /// Multiplication distributes over addition.
    #[test]
    fn multiplication_distributes_over_addition(
        a in decimal_string(),
        b in decimal_string(),
        c in decimal_string(),
    ) {
        let (a, b, c) = (bignum(&a), bignum(&b), bignum(&c));
        let left = arith::mul(&a, &arith::add(&b, &c).unwrap()).unwrap();
        let right = arith::add(
            &arith::mul(&a, &b).unwrap(),
            &arith::mul(&a, &c).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(left.into_decimal_string(), right.into_decimal_string());
    }

    /// Restricted subtraction round-trips with addition when `a >= b`.
    #[test]
    fn subtraction_round_trips_with_addition(
        x in decimal_string(),
        y in decimal_string(),
    ) {
        let (x, y) = (bignum(&x), bignum(&y));
        let (hi, lo) = if x >= y { (x, y) } else { (y, x) };
        let diff = arith::sub_assuming_ge(&hi, &lo).unwrap();
        let back = arith::add(&diff, &lo).unwrap();
        prop_assert_eq!(back.into_decimal_string(), hi.into_decimal_string());
    }

    /// Rendering a casted native integer reproduces its base-10 form.
    #[test]
    fn cast_render_round_trip(v in any::<u64>()) {
        let num = BigNum::from_u64(v).unwrap();
        prop_assert_eq!(num.into_decimal_string(), v.to_string());
    }

    /// Reported digit count equals rendered length after any operation,
    /// and every rendered character is a decimal digit.
    #[test]
    fn digit_count_matches_rendering(a in decimal_string(), b in decimal_string()) {
        let (a, b) = (bignum(&a), bignum(&b));
        let (hi, lo) = if a >= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };

        let results = [
            arith::add(&a, &b).unwrap(),
            arith::mul(&a, &b).unwrap(),
            arith::sub_assuming_ge(&hi, &lo).unwrap(),
        ];
        for result in results {
            let count = result.digit_count();
            let rendered = result.into_decimal_string();
            prop_assert_eq!(count, rendered.len());
            prop_assert!(rendered.bytes().all(|c| c.is_ascii_digit()));
        }
    }

    /// Fast doubling agrees with the linear oracle for random n.
    #[test]
    fn fast_doubling_matches_linear(n in 0u64..400) {
        let fast = FastDoubling::new().fibonacci(n).unwrap();
        let linear = LinearReference::new().fibonacci(n).unwrap();
        prop_assert_eq!(
            fast.into_decimal_string(),
            linear.into_decimal_string(),
            "F({}) fast != linear",
            n
        );
    }

    /// Parsing accepts any canonical rendering it produced.
    #[test]
    fn parse_render_round_trip(a in decimal_string()) {
        let num = bignum(&a);
        let rendered = num.clone().into_decimal_string();
        prop_assert_eq!(rendered.parse::<BigNum>().unwrap(), num);
    }
}
