// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    config::Tuning,
    polynomial::{integer_vec, RationalPolynomial},
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{CheckedMul, One, Pow, Zero};
use std::ops::{Mul, MulAssign};

/// gcd of `start` and every entry of `poly`, stopping early at 1
fn gcd_with_content(start: &BigInt, poly: &[BigInt]) -> BigInt {
    let mut retval = start.clone();
    for v in poly {
        if retval.is_one() {
            break;
        }
        retval = retval.gcd(v);
    }
    retval
}

/// divides `poly` by `divisor` when it is not 1, borrowing otherwise
fn divide_out<'a>(poly: &'a [BigInt], divisor: &BigInt) -> std::borrow::Cow<'a, [BigInt]> {
    if divisor.is_one() {
        std::borrow::Cow::Borrowed(poly)
    } else {
        std::borrow::Cow::Owned(poly.iter().map(|v| v / divisor).collect())
    }
}

impl<'a, 'b> Mul<&'a RationalPolynomial> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    /// cancels `gcd(content(a), db)` and `gcd(content(b), da)` before
    /// multiplying, which leaves the product canonical by Gauss's lemma
    fn mul(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        if self.is_zero() || rhs.is_zero() {
            return Zero::zero();
        }
        let lhs_cancel = gcd_with_content(&rhs.denominator, &self.numerators);
        let rhs_cancel = gcd_with_content(&self.denominator, &rhs.numerators);
        let lhs_numerators = divide_out(&self.numerators, &lhs_cancel);
        let rhs_numerators = divide_out(&rhs.numerators, &rhs_cancel);
        let denominator = (&self.denominator / &rhs_cancel) * (&rhs.denominator / &lhs_cancel);
        let numerators = integer_vec::mul(
            &lhs_numerators,
            &rhs_numerators,
            Tuning::global().karatsuba_cutoff,
        );
        RationalPolynomial::from_canonical_parts(numerators, denominator)
    }
}

impl<'a> Mul<RationalPolynomial> for &'a RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: RationalPolynomial) -> RationalPolynomial {
        self * &rhs
    }
}

impl<'a> Mul<&'a RationalPolynomial> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        &self * rhs
    }
}

impl Mul for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: RationalPolynomial) -> RationalPolynomial {
        &self * &rhs
    }
}

impl MulAssign for RationalPolynomial {
    fn mul_assign(&mut self, rhs: RationalPolynomial) {
        *self = &*self * rhs;
    }
}

impl<'a> MulAssign<&'a RationalPolynomial> for RationalPolynomial {
    fn mul_assign(&mut self, rhs: &RationalPolynomial) {
        *self = &*self * rhs;
    }
}

impl CheckedMul for RationalPolynomial {
    fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        Some(self * rhs)
    }
}

impl RationalPolynomial {
    /// `(self * rhs) mod x^n`
    pub fn mullow(&self, rhs: &Self, n: usize) -> Self {
        if self.is_zero() || rhs.is_zero() || n == 0 {
            return Zero::zero();
        }
        let numerators = integer_vec::mullow(
            &self.numerators,
            &rhs.numerators,
            n,
            Tuning::global().karatsuba_cutoff,
        );
        Self::from_parts_unchecked(numerators, &self.denominator * &rhs.denominator)
    }
    pub fn square(&self) -> Self {
        self * self
    }
    pub fn mul_integer(&self, factor: &BigInt) -> Self {
        if factor.is_zero() || self.is_zero() {
            return Zero::zero();
        }
        let cancel = self.denominator.gcd(factor);
        let mut numerators = self.numerators.to_vec();
        integer_vec::scalar_mul_assign(&mut numerators, &(factor / &cancel));
        Self::from_parts_unchecked(numerators, &self.denominator / cancel)
    }
    pub fn mul_rational(&self, factor: &BigRational) -> Self {
        if factor.is_zero() || self.is_zero() {
            return Zero::zero();
        }
        let mut numerators = self.numerators.to_vec();
        integer_vec::scalar_mul_assign(&mut numerators, factor.numer());
        Self::from_parts_unchecked(numerators, &self.denominator * factor.denom())
    }
    fn checked_pow<E: Integer + Clone>(&self, mut exponent: E) -> Option<Self> {
        if exponent < Zero::zero() {
            return None;
        }
        let mut retval = Self::one();
        let mut base = self.clone();
        let two = E::one() + E::one();
        while !exponent.is_zero() {
            if exponent.is_odd() {
                retval *= &base;
            }
            exponent = exponent / two.clone();
            if !exponent.is_zero() {
                base = base.square();
            }
        }
        Some(retval)
    }
    /// `self^exponent mod x^n`
    pub fn pow_trunc(&self, mut exponent: u64, n: usize) -> Self {
        if n == 0 {
            return Zero::zero();
        }
        let mut retval = Self::one();
        let mut base = self.truncated(n);
        while exponent != 0 {
            if exponent & 1 != 0 {
                retval = retval.mullow(&base, n);
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.mullow(&base, n);
            }
        }
        retval
    }
}

impl<E: Integer + Clone> Pow<E> for &'_ RationalPolynomial {
    type Output = RationalPolynomial;
    fn pow(self, exponent: E) -> RationalPolynomial {
        self.checked_pow(exponent).expect("negative exponent")
    }
}

impl<E: Integer + Clone> Pow<E> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn pow(self, exponent: E) -> RationalPolynomial {
        self.checked_pow(exponent).expect("negative exponent")
    }
}

impl One for RationalPolynomial {
    fn one() -> Self {
        RationalPolynomial::from_canonical_parts(vec![BigInt::one()], BigInt::one())
    }
    fn set_one(&mut self) {
        self.numerators.set_length(1);
        self.numerators[0].set_one();
        self.denominator.set_one();
    }
    fn is_one(&self) -> bool {
        RationalPolynomial::is_one(self)
    }
}

impl<'a, 'b> Mul<&'a BigInt> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: &BigInt) -> RationalPolynomial {
        self.mul_integer(rhs)
    }
}

impl<'a> Mul<&'a BigInt> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: &BigInt) -> RationalPolynomial {
        self.mul_integer(rhs)
    }
}

impl Mul<BigInt> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: BigInt) -> RationalPolynomial {
        self.mul_integer(&rhs)
    }
}

impl<'a> MulAssign<&'a BigInt> for RationalPolynomial {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = self.mul_integer(rhs);
    }
}

impl<'a, 'b> Mul<&'a BigRational> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: &BigRational) -> RationalPolynomial {
        self.mul_rational(rhs)
    }
}

impl<'a> Mul<&'a BigRational> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: &BigRational) -> RationalPolynomial {
        self.mul_rational(rhs)
    }
}

impl Mul<BigRational> for RationalPolynomial {
    type Output = RationalPolynomial;
    fn mul(self, rhs: BigRational) -> RationalPolynomial {
        self.mul_rational(&rhs)
    }
}

impl<'a> MulAssign<&'a BigRational> for RationalPolynomial {
    fn mul_assign(&mut self, rhs: &BigRational) {
        *self = self.mul_rational(rhs);
    }
}
