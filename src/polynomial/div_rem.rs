// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use crate::{
    config::Tuning,
    error::DomainError,
    polynomial::{integer_vec, RationalPolynomial},
};
use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{CheckedDiv, CheckedRem, One, Pow, Zero};
use std::{
    mem,
    ops::{Div, DivAssign, Rem, RemAssign},
};

/// `lc(b)^k * da` for the pseudo division of `a` by `b` with
/// `k = len(a) - len(b) + 1`
fn pseudo_division_scale(
    dividend: &RationalPolynomial,
    divisor: &RationalPolynomial,
) -> BigInt {
    let exponent = dividend.len() - divisor.len() + 1;
    let leading = &divisor.numerators[divisor.len() - 1];
    Pow::pow(leading, exponent) * &dividend.denominator
}

impl RationalPolynomial {
    /// schoolbook division through integer pseudo division:
    /// `lc(B)^k A = Q B + R` gives `q = Q db / (lc(B)^k da)` and
    /// `r = R / (lc(B)^k da)`.
    pub fn div_rem_classical(&self, rhs: &Self) -> Result<(Self, Self), DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if self.len() < rhs.len() {
            return Ok((Zero::zero(), self.clone()));
        }
        let (mut quotient, remainder) =
            integer_vec::pseudo_div_rem(&self.numerators, &rhs.numerators);
        let scale = pseudo_division_scale(self, rhs);
        integer_vec::scalar_mul_assign(&mut quotient, &rhs.denominator);
        Ok((
            Self::from_parts_unchecked(quotient, scale.clone()),
            Self::from_parts_unchecked(remainder, scale),
        ))
    }
    /// division through the power series inverse of the reversed divisor
    pub fn div_rem_newton(&self, rhs: &Self) -> Result<(Self, Self), DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if self.len() < rhs.len() {
            return Ok((Zero::zero(), self.clone()));
        }
        let quotient = self.div_newton(rhs)?;
        let remainder = self - &quotient * rhs;
        debug_assert!(remainder.len() < rhs.len());
        Ok((quotient, remainder))
    }
    fn div_newton(&self, rhs: &Self) -> Result<Self, DomainError> {
        let quotient_len = self.len() - rhs.len() + 1;
        let reversed_dividend = self.reverse(self.len()).truncated(quotient_len);
        let reversed_divisor = rhs.reverse(rhs.len()).truncated(quotient_len);
        let inverse = reversed_divisor.inv_series_newton(quotient_len)?;
        Ok(reversed_dividend
            .mullow(&inverse, quotient_len)
            .reverse(quotient_len))
    }
    fn uses_newton_division(&self, rhs: &Self) -> bool {
        let cutoff = Tuning::global().divrem_newton_cutoff;
        let newton = rhs.len() >= cutoff && self.len() - rhs.len() + 1 >= cutoff;
        debug!(
            "dividing length {} by length {} using {} division",
            self.len(),
            rhs.len(),
            if newton { "newton" } else { "classical" }
        );
        newton
    }
    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self), DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if self.len() < rhs.len() {
            return Ok((Zero::zero(), self.clone()));
        }
        if self.uses_newton_division(rhs) {
            self.div_rem_newton(rhs)
        } else {
            self.div_rem_classical(rhs)
        }
    }
    /// panics when `rhs` is zero
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Ok(v) => v,
            Err(err) => panic!("{}", err),
        }
    }
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if self.len() < rhs.len() {
            return Ok(Zero::zero());
        }
        if self.uses_newton_division(rhs) {
            self.div_newton(rhs)
        } else {
            Ok(self.div_rem_classical(rhs)?.0)
        }
    }
    /// the remainder alone; classical division never forms the quotient
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, DomainError> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        if self.len() < rhs.len() {
            return Ok(self.clone());
        }
        if self.uses_newton_division(rhs) {
            return Ok(self.div_rem_newton(rhs)?.1);
        }
        let remainder = integer_vec::pseudo_rem(&self.numerators, &rhs.numerators);
        Ok(Self::from_parts_unchecked(
            remainder,
            pseudo_division_scale(self, rhs),
        ))
    }
    /// `Some(self / rhs)` when `rhs` divides `self` exactly
    pub fn divides(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some(Zero::zero());
        }
        // work on primitive parts so the integer division is exact
        let quotient =
            integer_vec::div_exact(&self.primitive_part().numerators, &rhs.primitive_part().numerators)?;
        let scale = self.content() / rhs.content();
        Some(Self::from(quotient).mul_rational(&scale))
    }
    /// `self^exponent mod modulus`
    pub fn powmod(&self, mut exponent: u64, modulus: &Self) -> Result<Self, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let mut retval = Self::one().checked_rem(modulus)?;
        let mut base = self.checked_rem(modulus)?;
        while exponent != 0 {
            if exponent & 1 != 0 {
                retval = (&retval * &base).checked_rem(modulus)?;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = base.square().checked_rem(modulus)?;
            }
        }
        Ok(retval)
    }
    pub fn checked_div_integer(&self, divisor: &BigInt) -> Result<Self, DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::ScalarDivisionByZero);
        }
        Ok(Self::from_parts_unchecked(
            self.numerators.to_vec(),
            &self.denominator * divisor,
        ))
    }
    pub fn checked_div_rational(&self, divisor: &BigRational) -> Result<Self, DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::ScalarDivisionByZero);
        }
        Ok(self.mul_rational(&divisor.recip()))
    }
}

impl CheckedDiv for RationalPolynomial {
    fn checked_div(&self, rhs: &Self) -> Option<Self> {
        RationalPolynomial::checked_div(self, rhs).ok()
    }
}

impl CheckedRem for RationalPolynomial {
    fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        RationalPolynomial::checked_rem(self, rhs).ok()
    }
}

fn unwrap_division<T>(result: Result<T, DomainError>) -> T {
    match result {
        Ok(v) => v,
        Err(err) => panic!("{}", err),
    }
}

impl<'a, 'b> Div<&'a RationalPolynomial> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn div(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        unwrap_division(RationalPolynomial::checked_div(self, rhs))
    }
}

impl<'a, 'b> Rem<&'a RationalPolynomial> for &'b RationalPolynomial {
    type Output = RationalPolynomial;
    fn rem(self, rhs: &RationalPolynomial) -> RationalPolynomial {
        unwrap_division(RationalPolynomial::checked_rem(self, rhs))
    }
}

macro_rules! impl_div_rem {
    ($l:ty, $r:ty) => {
        impl<'a> Div<$r> for $l {
            type Output = RationalPolynomial;
            fn div(self, rhs: $r) -> RationalPolynomial {
                unwrap_division(RationalPolynomial::checked_div(&self, &rhs))
            }
        }

        impl<'a> Rem<$r> for $l {
            type Output = RationalPolynomial;
            fn rem(self, rhs: $r) -> RationalPolynomial {
                unwrap_division(RationalPolynomial::checked_rem(&self, &rhs))
            }
        }
    };
}

impl_div_rem!(RationalPolynomial, RationalPolynomial);
impl_div_rem!(RationalPolynomial, &'a RationalPolynomial);
impl_div_rem!(&'a RationalPolynomial, RationalPolynomial);

macro_rules! impl_div_rem_eq {
    ($r:ty) => {
        impl<'a> DivAssign<$r> for RationalPolynomial {
            fn div_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs / rhs;
            }
        }

        impl<'a> RemAssign<$r> for RationalPolynomial {
            fn rem_assign(&mut self, rhs: $r) {
                let lhs = mem::replace(self, Zero::zero());
                *self = lhs % rhs;
            }
        }
    };
}

impl_div_rem_eq!(RationalPolynomial);
impl_div_rem_eq!(&'a RationalPolynomial);

macro_rules! impl_div_scalar {
    ($l:ty, $r:ty, $method:ident) => {
        impl<'a, 'b> Div<$r> for $l {
            type Output = RationalPolynomial;
            fn div(self, rhs: $r) -> RationalPolynomial {
                unwrap_division(self.$method(&rhs))
            }
        }
    };
}

impl_div_scalar!(RationalPolynomial, BigInt, checked_div_integer);
impl_div_scalar!(RationalPolynomial, &'a BigInt, checked_div_integer);
impl_div_scalar!(&'b RationalPolynomial, BigInt, checked_div_integer);
impl_div_scalar!(&'b RationalPolynomial, &'a BigInt, checked_div_integer);
impl_div_scalar!(RationalPolynomial, BigRational, checked_div_rational);
impl_div_scalar!(RationalPolynomial, &'a BigRational, checked_div_rational);
impl_div_scalar!(&'b RationalPolynomial, BigRational, checked_div_rational);
impl_div_scalar!(&'b RationalPolynomial, &'a BigRational, checked_div_rational);

impl<'a> DivAssign<&'a BigInt> for RationalPolynomial {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = unwrap_division(self.checked_div_integer(rhs));
    }
}

impl<'a> DivAssign<&'a BigRational> for RationalPolynomial {
    fn div_assign(&mut self, rhs: &BigRational) {
        *self = unwrap_division(self.checked_div_rational(rhs));
    }
}
