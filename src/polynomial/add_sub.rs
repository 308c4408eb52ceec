// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::polynomial::{integer_vec, RationalPolynomial};
use num_integer::Integer;
use num_traits::{One, Zero};
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// `lhs += rhs` or `lhs -= rhs` over the common denominator
/// `lcm(da, db) = da * (db / gcd)`.
///
/// Coprime denominators give a canonical sum directly; otherwise the result is
/// canonicalised.
fn add_sub_assign(lhs: &mut RationalPolynomial, rhs: &RationalPolynomial, negate_rhs: bool) {
    if rhs.is_zero() {
        return;
    }
    if lhs.is_zero() {
        *lhs = if negate_rhs { -rhs } else { rhs.clone() };
        return;
    }
    let gcd = lhs.denominator.gcd(&rhs.denominator);
    let lhs_multiplier = &rhs.denominator / &gcd;
    let mut rhs_multiplier = &lhs.denominator / &gcd;
    if negate_rhs {
        rhs_multiplier = -rhs_multiplier;
    }
    if lhs.len() < rhs.len() {
        lhs.numerators.set_length(rhs.len());
    }
    for (index, lhs_numerator) in lhs.numerators.iter_mut().enumerate() {
        *lhs_numerator *= &lhs_multiplier;
        if let Some(rhs_numerator) = rhs.numerators.get(index) {
            *lhs_numerator += rhs_numerator * &rhs_multiplier;
        }
    }
    lhs.denominator *= lhs_multiplier;
    if gcd.is_one() {
        lhs.numerators.normalise();
        if lhs.numerators.is_empty() {
            lhs.denominator.set_one();
        }
    } else {
        lhs.canonicalise();
    }
    debug_assert!(lhs.is_canonical());
}

impl AddAssign for RationalPolynomial {
    fn add_assign(&mut self, rhs: RationalPolynomial) {
        add_sub_assign(self, &rhs, false);
    }
}

impl<'a> AddAssign<&'a RationalPolynomial> for RationalPolynomial {
    fn add_assign(&mut self, rhs: &RationalPolynomial) {
        add_sub_assign(self, rhs, false);
    }
}

impl Add for RationalPolynomial {
    type Output = RationalPolynomial;
    fn add(mut self, rhs: RationalPolynomial) -> RationalPolynomial {
        self += rhs;
        self
    }
}

impl<'a> Add<&'a RationalPolynomial> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn add(mut self, rhs: &RationalPolynomial) -> RationalPolynomial {
        self += rhs;
        self
    }
}

impl<'a> Add<RationalPolynomial> for &'a RationalPolynomial {
    type Output = RationalPolynomial;
    fn add(self, mut rhs: RationalPolynomial) -> RationalPolynomial {
        rhs += self;
        rhs
    }
}

impl<'a, 'b> Add<&'a RationalPolynomial> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn add(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        self.clone() + rhs
    }
}

impl SubAssign for RationalPolynomial {
    fn sub_assign(&mut self, rhs: RationalPolynomial) {
        add_sub_assign(self, &rhs, true);
    }
}

impl<'a> SubAssign<&'a RationalPolynomial> for RationalPolynomial {
    fn sub_assign(&mut self, rhs: &RationalPolynomial) {
        add_sub_assign(self, rhs, true);
    }
}

impl Sub for RationalPolynomial {
    type Output = RationalPolynomial;
    fn sub(mut self, rhs: RationalPolynomial) -> RationalPolynomial {
        self -= rhs;
        self
    }
}

impl<'a> Sub<&'a RationalPolynomial> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn sub(mut self, rhs: &RationalPolynomial) -> RationalPolynomial {
        self -= rhs;
        self
    }
}

impl<'a> Sub<RationalPolynomial> for &'a RationalPolynomial {
    type Output = RationalPolynomial;
    fn sub(self, rhs: RationalPolynomial) -> RationalPolynomial {
        let mut lhs = -rhs;
        lhs += self;
        lhs
    }
}

impl<'a, 'b> Sub<&'a RationalPolynomial> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn sub(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        self.clone() - rhs
    }
}

impl Neg for RationalPolynomial {
    type Output = RationalPolynomial;
    fn neg(mut self) -> RationalPolynomial {
        integer_vec::neg_assign(&mut self.numerators);
        self
    }
}

impl<'a> Neg for &'a RationalPolynomial {
    type Output = RationalPolynomial;
    fn neg(self) -> RationalPolynomial {
        -self.clone()
    }
}

impl Zero for RationalPolynomial {
    fn zero() -> Self {
        Default::default()
    }
    fn set_zero(&mut self) {
        self.numerators.clear();
        self.denominator.set_one();
    }
    fn is_zero(&self) -> bool {
        self.numerators.is_empty()
    }
}

impl RationalPolynomial {
    /// `(self + rhs) mod x^n`
    pub fn add_series(&self, rhs: &Self, n: usize) -> Self {
        self.truncated(n) + rhs.truncated(n)
    }
    /// `(self - rhs) mod x^n`
    pub fn sub_series(&self, rhs: &Self, n: usize) -> Self {
        self.truncated(n) - rhs.truncated(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        polynomial::tests::{int_poly, poly},
        util::tests::{test_op_helper, test_rng},
    };

    #[test]
    fn test_add() {
        let test = |l: RationalPolynomial, r: RationalPolynomial, expected: &RationalPolynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l += r,
                |l, r| *l += r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
                |l, r| l + r,
            );
        };
        test(int_poly(&[1, 2, 3]), int_poly(&[]), &int_poly(&[1, 2, 3]));
        test(int_poly(&[]), int_poly(&[1, 2, 3]), &int_poly(&[1, 2, 3]));
        test(int_poly(&[1, 2, 3]), int_poly(&[-1, -2, -3]), &int_poly(&[]));
        test(
            poly(&[(1, 2), (1, 3)]),
            poly(&[(1, 6), (2, 3), (5, 4)]),
            &poly(&[(2, 3), (1, 1), (5, 4)]),
        );
        test(
            poly(&[(1, 6), (1, 6)]),
            poly(&[(1, 3), (-1, 6)]),
            &poly(&[(1, 2)]),
        );
        test(
            poly(&[(1, 2), (1, 4)]),
            poly(&[(1, 2), (-1, 4)]),
            &int_poly(&[1]),
        );
    }

    #[test]
    fn test_sub() {
        let test = |l: RationalPolynomial, r: RationalPolynomial, expected: &RationalPolynomial| {
            test_op_helper(
                l,
                r,
                expected,
                |l, r| *l -= r,
                |l, r| *l -= r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
                |l, r| l - r,
            );
        };
        test(int_poly(&[1, 2, 3]), int_poly(&[]), &int_poly(&[1, 2, 3]));
        test(int_poly(&[]), int_poly(&[1, 2, 3]), &int_poly(&[-1, -2, -3]));
        test(int_poly(&[1, 2, 3]), int_poly(&[1, 2, 3]), &int_poly(&[]));
        test(
            poly(&[(1, 2), (1, 3), (7, 5)]),
            poly(&[(1, 6), (2, 3), (7, 5)]),
            &poly(&[(1, 3), (-1, 3)]),
        );
    }

    #[test]
    fn test_neg() {
        let p = poly(&[(1, 2), (-3, 4)]);
        assert_eq!(-&p, poly(&[(-1, 2), (3, 4)]));
        assert_eq!(-(-p.clone()), p);
        assert!((-RationalPolynomial::zero()).is_zero());
    }

    #[test]
    fn test_ring_laws() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let a = RationalPolynomial::random(&mut rng, 6, 20);
            let b = RationalPolynomial::random(&mut rng, 8, 20);
            let c = RationalPolynomial::random(&mut rng, 3, 20);
            assert_eq!(&a + &b, &b + &a);
            assert_eq!((&a + &b) + &c, &a + (&b + &c));
            assert!((&a + -&a).is_zero());
            assert_eq!(&(&a - &b) + &b, a);
            let sum = &a + &b;
            assert!(sum.is_canonical());
            assert!((&a - &c).is_canonical());
        }
    }

    #[test]
    fn test_add_sub_series() {
        let a = poly(&[(1, 2), (1, 3), (1, 4)]);
        let b = poly(&[(1, 2), (2, 3), (3, 4)]);
        assert_eq!(a.add_series(&b, 2), int_poly(&[1, 1]));
        assert_eq!(a.sub_series(&b, 2), poly(&[(0, 1), (-1, 3)]));
        assert_eq!(a.add_series(&b, 0), int_poly(&[]));
        assert_eq!(a.add_series(&b, 9), &a + &b);
    }
}
