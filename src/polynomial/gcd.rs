// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    polynomial::{integer_vec, RationalPolynomial},
    traits::{ExtendedGCD, ExtendedGCDResult, GCDAndLCM, GCD},
};
use num_bigint::BigInt;
use num_traits::{One, Pow, Zero};
use std::mem;

/// `factor * base^(positive - negative)`, dividing exactly when the exponent
/// is negative
pub(super) fn exact_mul_by_signed_power(
    factor: BigInt,
    base: &BigInt,
    positive: usize,
    negative: usize,
) -> BigInt {
    if positive >= negative {
        factor * Pow::pow(base, positive - negative)
    } else {
        factor / Pow::pow(base, negative - positive)
    }
}

/// the primitive gcd of two nonzero integer polynomials, computed from the
/// subresultant remainder sequence so the intermediate coefficients stay
/// small.
///
/// The result is primitive but its sign is unspecified.
pub(crate) fn subresultant_gcd(lhs: &[BigInt], rhs: &[BigInt]) -> Vec<BigInt> {
    debug_assert!(!lhs.is_empty() && !rhs.is_empty());
    let (mut a, mut b) = if lhs.len() >= rhs.len() {
        (integer_vec::primitive_part(lhs), integer_vec::primitive_part(rhs))
    } else {
        (integer_vec::primitive_part(rhs), integer_vec::primitive_part(lhs))
    };
    let mut g = BigInt::one();
    let mut h = BigInt::one();
    loop {
        let delta = a.len() - b.len();
        let mut remainder = integer_vec::pseudo_rem(&a, &b);
        match remainder.len() {
            0 => return integer_vec::primitive_part(&b),
            1 => return vec![BigInt::one()],
            _ => {}
        }
        let divisor = &g * Pow::pow(&h, delta);
        integer_vec::scalar_div_exact_assign(&mut remainder, &divisor);
        a = mem::replace(&mut b, remainder);
        g = a[a.len() - 1].clone();
        h = exact_mul_by_signed_power(Pow::pow(&g, delta), &h, 1, delta);
    }
}

impl GCD for RationalPolynomial {
    type Output = Self;
    /// the monic gcd; `gcd(0, 0) == 0`
    fn gcd(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return rhs.make_monic();
        }
        if rhs.is_zero() {
            return self.make_monic();
        }
        Self::from(subresultant_gcd(&self.numerators, &rhs.numerators)).make_monic()
    }
    /// the lcm is monic too, and zero when either side is zero
    fn gcd_lcm(&self, rhs: &Self) -> GCDAndLCM<Self> {
        let gcd = self.gcd(rhs);
        let lcm = if self.is_zero() || rhs.is_zero() {
            Zero::zero()
        } else {
            (self * (rhs / &gcd)).make_monic()
        };
        GCDAndLCM { gcd, lcm }
    }
}

struct StateSet {
    v: RationalPolynomial,
    x: RationalPolynomial,
    y: RationalPolynomial,
}

impl StateSet {
    /// scales every entry so `v` is monic
    fn make_monic(&mut self) {
        if let Some(leading) = self.v.leading_coefficient() {
            let scale = leading.recip();
            self.v = self.v.mul_rational(&scale);
            self.x = self.x.mul_rational(&scale);
            self.y = self.y.mul_rational(&scale);
        }
    }
}

impl ExtendedGCD for RationalPolynomial {
    /// the monic gcd with Bezout cofactors; everything is zero when both
    /// sides are zero
    fn extended_gcd(&self, rhs: &Self) -> ExtendedGCDResult<Self> {
        let mut lhs_state = StateSet {
            v: self.clone(),
            x: One::one(),
            y: Zero::zero(),
        };
        let mut rhs_state = StateSet {
            v: rhs.clone(),
            x: Zero::zero(),
            y: One::one(),
        };
        if self.is_zero() {
            mem::swap(&mut lhs_state, &mut rhs_state);
        }
        if lhs_state.v.is_zero() {
            return ExtendedGCDResult {
                gcd: Zero::zero(),
                x: Zero::zero(),
                y: Zero::zero(),
            };
        }
        lhs_state.make_monic();
        rhs_state.make_monic();
        while !rhs_state.v.is_zero() {
            let (quotient, remainder) = lhs_state.v.div_rem(&rhs_state.v);
            let mut new_state = StateSet {
                v: remainder,
                x: lhs_state.x - &rhs_state.x * &quotient,
                y: lhs_state.y - &rhs_state.y * &quotient,
            };
            new_state.make_monic();
            lhs_state = mem::replace(&mut rhs_state, new_state);
        }
        ExtendedGCDResult {
            gcd: lhs_state.v,
            x: lhs_state.x,
            y: lhs_state.y,
        }
    }
}

impl RationalPolynomial {
    /// no repeated factors: `gcd(self, self')` is constant. The zero
    /// polynomial is not squarefree, nonzero constants are.
    pub fn is_squarefree(&self) -> bool {
        match self.len() {
            0 => false,
            1 => true,
            _ => {
                let derivative = integer_vec::derivative(&self.numerators);
                subresultant_gcd(&self.numerators, &derivative).len() == 1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        polynomial::tests::{int_poly, poly},
        util::tests::test_rng,
    };

    fn test_case(
        a: RationalPolynomial,
        b: RationalPolynomial,
        gcd: RationalPolynomial,
        lcm: RationalPolynomial,
    ) {
        println!("a={:?} b={:?}", a, b);
        let results = a.gcd_lcm(&b);
        assert_eq!(results.gcd, gcd);
        assert_eq!(results.lcm, lcm);
        assert_eq!(b.gcd(&a), gcd);
        assert_eq!(b.lcm(&a), lcm);
        let ExtendedGCDResult { gcd: g, x, y } = a.extended_gcd(&b);
        assert_eq!(g, gcd);
        assert_eq!(&x * &a + &y * &b, gcd);
    }

    #[test]
    fn test_gcd() {
        test_case(
            poly(&[(2, 1), (0, 1), (0, 1), (2, 1)]),
            poly(&[(0, 1), (1, 3), (1, 3), (1, 3)]),
            int_poly(&[1]),
            int_poly(&[0, 1, 1, 1, 1, 1, 1]),
        );
        test_case(
            poly(&[(1, 3)]),
            poly(&[(1, 3), (0, 1), (1, 3)]),
            int_poly(&[1]),
            int_poly(&[1, 0, 1]),
        );
        test_case(
            int_poly(&[0, 1, 2]),
            poly(&[(0, 1), (1, 2), (0, 1), (1, 1)]),
            int_poly(&[0, 1]),
            poly(&[(0, 1), (1, 4), (1, 2), (1, 2), (1, 1)]),
        );
        test_case(
            int_poly(&[]),
            int_poly(&[0, 0, 2, 2]),
            int_poly(&[0, 0, 1, 1]),
            int_poly(&[]),
        );
        test_case(
            poly(&[(2, 3), (0, 1), (2, 3), (2, 3)]),
            poly(&[(1, 2), (0, 1), (1, 2), (1, 2)]),
            int_poly(&[1, 0, 1, 1]),
            int_poly(&[1, 0, 1, 1]),
        );
        test_case(
            poly(&[(2, 3), (0, 1), (0, 1), (2, 3)]),
            poly(&[(1, 3), (0, 1), (1, 3), (2, 3)]),
            int_poly(&[1, 1]),
            poly(&[(1, 2), (-1, 2), (1, 1), (1, 2), (-1, 2), (1, 1)]),
        );
        test_case(
            poly(&[(1, 3), (2, 3), (1, 3), (2, 3)]),
            int_poly(&[1, 1, 1, 1]),
            int_poly(&[1, 0, 1]),
            poly(&[(1, 2), (3, 2), (3, 2), (3, 2), (1, 1)]),
        );
        test_case(
            int_poly(&[1, 2, 2, 1]),
            poly(&[(1, 3), (1, 3), (1, 3)]),
            int_poly(&[1, 1, 1]),
            int_poly(&[1, 2, 2, 1]),
        );
        test_case(
            poly(&[(0, 1), (2, 3), (2, 3), (1, 3)]),
            poly(&[(0, 1), (1, 3), (1, 3), (1, 3)]),
            int_poly(&[0, 1]),
            int_poly(&[0, 2, 4, 5, 3, 1]),
        );
        test_case(
            poly(&[(1, 3), (1, 3), (1, 3)]),
            int_poly(&[]),
            int_poly(&[1, 1, 1]),
            int_poly(&[]),
        );
        test_case(int_poly(&[]), int_poly(&[]), int_poly(&[]), int_poly(&[]));
    }

    #[test]
    fn test_gcd_with_itself() {
        let a: RationalPolynomial = "2  1 1".parse().unwrap();
        assert_eq!(a.gcd(&a), int_poly(&[1, 1]));
        let b = poly(&[(3, 5), (-6, 5), (9, 5)]);
        assert_eq!(b.gcd(&b), b.make_monic());
    }

    #[test]
    fn test_subresultant_gcd() {
        let make = |values: &[i64]| -> Vec<BigInt> { values.iter().map(|&v| v.into()).collect() };
        // (x + 1)(x - 2) and (x + 1)(2x + 3)
        let gcd = subresultant_gcd(&make(&[-2, -1, 1]), &make(&[3, 5, 2]));
        assert_eq!(RationalPolynomial::from(gcd).make_monic(), int_poly(&[1, 1]));
        // the remainder sequence of Knuth's example drops degree by more than one
        let gcd = subresultant_gcd(
            &make(&[-5, 2, 8, -3, -3, 0, 1, 0, 1]),
            &make(&[21, -9, -4, 0, 5, 0, 3]),
        );
        assert_eq!(gcd.len(), 1);
    }

    #[test]
    fn test_random_gcd() {
        let mut rng = test_rng();
        for _ in 0..30 {
            let a = RationalPolynomial::random_not_zero(&mut rng, 4, 6);
            let b = RationalPolynomial::random_not_zero(&mut rng, 5, 6);
            let c = RationalPolynomial::random_not_zero(&mut rng, 3, 6);
            let ac = &a * &c;
            let bc = &b * &c;
            let GCDAndLCM { gcd, lcm } = ac.gcd_lcm(&bc);
            assert!(gcd.is_monic());
            assert!(lcm.is_monic());
            assert_eq!(gcd, bc.gcd(&ac));
            assert!(ac.divides(&gcd).is_some());
            assert!(bc.divides(&gcd).is_some());
            assert!(gcd.divides(&c).is_some());
            assert!(lcm.divides(&ac).is_some());
            assert!(lcm.divides(&bc).is_some());
            assert_eq!(&gcd * &lcm, (&ac * &bc).make_monic());
            let ExtendedGCDResult { gcd: g, x, y } = ac.extended_gcd(&bc);
            assert_eq!(g, gcd);
            assert_eq!(&x * &ac + &y * &bc, gcd);
        }
    }

    #[test]
    fn test_is_squarefree() {
        assert!(!int_poly(&[]).is_squarefree());
        assert!(int_poly(&[5]).is_squarefree());
        assert!(int_poly(&[0, 1]).is_squarefree());
        assert!(int_poly(&[-1, 0, 1]).is_squarefree());
        // (x + 1)^2
        assert!(!int_poly(&[1, 2, 1]).is_squarefree());
        // x^2 (x - 3) / 7
        assert!(!poly(&[(0, 1), (0, 1), (-3, 7), (1, 7)]).is_squarefree());
        let a = int_poly(&[1, 1, 1]);
        assert!(a.is_squarefree());
        assert!(!(&a * &a).is_squarefree());
    }
}
