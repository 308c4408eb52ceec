// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Trigonometric and hyperbolic power series, built from the inverse, square
//! root, exponential and logarithm series.

use crate::{
    error::DomainError, polynomial::RationalPolynomial, traits::Derivative,
    util::exact_rational_sqrt, util::newton_precisions,
};
use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

fn half() -> BigRational {
    BigRational::new(BigInt::one(), BigInt::from(2))
}

impl RationalPolynomial {
    /// `integral(self' * g(self)) mod x^n` where `weight(a, m)` computes
    /// `g(a) mod x^m` for `a` truncated to `n` terms
    fn integrate_weighted<F>(&self, n: usize, weight: F) -> Result<Self, DomainError>
    where
        F: FnOnce(&Self, usize) -> Result<Self, DomainError>,
    {
        if n <= 1 {
            return Ok(Zero::zero());
        }
        let truncated = self.truncated(n);
        let weight = weight(&truncated, n - 1)?;
        Ok((&truncated).derivative().mullow(&weight, n - 1).integral())
    }
    /// `1 + sign * self^2 mod x^n`
    fn one_plus_square(&self, negate: bool, n: usize) -> Self {
        let square = self.mullow(self, n);
        if negate {
            Self::one() - square
        } else {
            Self::one() + square
        }
    }
    /// `atan(self) mod x^n` as `integral(a' / (1 + a^2))`; the constant term
    /// must be zero
    pub fn atan_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        self.integrate_weighted(n, |a, m| a.one_plus_square(false, m).inv_series(m))
    }
    /// `atanh(self) mod x^n` as `integral(a' / (1 - a^2))`; the constant term
    /// must be zero
    pub fn atanh_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        self.integrate_weighted(n, |a, m| a.one_plus_square(true, m).inv_series(m))
    }
    /// `asin(self) mod x^n` as `integral(a' / sqrt(1 - a^2))`; the constant
    /// term must be zero
    pub fn asin_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        self.integrate_weighted(n, |a, m| a.one_plus_square(true, m).invsqrt_series(m))
    }
    /// `asinh(self) mod x^n` as `integral(a' / sqrt(1 + a^2))`; the constant
    /// term must be zero
    pub fn asinh_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        self.integrate_weighted(n, |a, m| a.one_plus_square(false, m).invsqrt_series(m))
    }
    /// `acos(self) - acos(a0) mod x^n` for the constant term `a0`.
    ///
    /// `acos(a0)` itself is transcendental, so it is left out. `1 - a0^2` must
    /// be the square of a positive rational.
    pub fn acos_series(&self, n: usize) -> Result<Self, DomainError> {
        let constant = self.constant_term();
        let radicand = BigRational::one() - &constant * &constant;
        if !radicand.is_positive() {
            return Err(DomainError::ConstantTermOutOfDomain);
        }
        exact_rational_sqrt(&radicand).ok_or(DomainError::ConstantTermNotSquare)?;
        let retval =
            self.integrate_weighted(n, |a, m| a.one_plus_square(true, m).invsqrt_series(m))?;
        Ok(-retval)
    }
    /// `acosh(self) - acosh(a0) mod x^n` for the constant term `a0`.
    ///
    /// `a0` must exceed 1 and `a0^2 - 1` must be the square of a rational.
    pub fn acosh_series(&self, n: usize) -> Result<Self, DomainError> {
        let constant = self.constant_term();
        if constant <= BigRational::one() {
            return Err(DomainError::ConstantTermOutOfDomain);
        }
        exact_rational_sqrt(&(&constant * &constant - BigRational::one()))
            .ok_or(DomainError::ConstantTermNotSquare)?;
        self.integrate_weighted(n, |a, m| (-a.one_plus_square(true, m)).invsqrt_series(m))
    }
    /// `tan(self) mod x^n` by Newton iteration on the arctangent:
    /// `y' = y - (atan(y) - a) (1 + y^2)`. The constant term must be zero.
    pub fn tan_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        let mut retval = Self::zero();
        if n <= 1 {
            return Ok(retval);
        }
        for &precision in &newton_precisions(n, 1)[1..] {
            trace!("tan_series: precision {}", precision);
            let error = retval.atan_series(precision)? - self.truncated(precision);
            let correction = error.mullow(&retval.one_plus_square(false, precision), precision);
            retval -= correction;
        }
        Ok(retval)
    }
    /// `(sin(self), cos(self)) mod x^n` from the tangent of the half angle
    /// `t`: `sin = 2t / (1 + t^2)` and `cos = (1 - t^2) / (1 + t^2)`. The
    /// constant term must be zero.
    pub fn sin_cos_series(&self, n: usize) -> Result<(Self, Self), DomainError> {
        self.require_constant_term_zero()?;
        if n == 0 {
            return Ok((Zero::zero(), Zero::zero()));
        }
        let t = self.mul_rational(&half()).tan_series(n)?;
        let square = t.mullow(&t, n);
        let inverse = (Self::one() + &square).inv_series(n)?;
        let sin = t.mullow(&inverse, n).mul_integer(&BigInt::from(2));
        let cos = (Self::one() - square).mullow(&inverse, n);
        Ok((sin, cos))
    }
    pub fn sin_series(&self, n: usize) -> Result<Self, DomainError> {
        Ok(self.sin_cos_series(n)?.0)
    }
    pub fn cos_series(&self, n: usize) -> Result<Self, DomainError> {
        Ok(self.sin_cos_series(n)?.1)
    }
    /// `(sinh(self), cosh(self)) mod x^n` as `(e - 1/e) / 2` and
    /// `(e + 1/e) / 2` for `e = exp(self)`. The constant term must be zero.
    pub fn sinh_cosh_series(&self, n: usize) -> Result<(Self, Self), DomainError> {
        let exp = self.exp_series(n)?;
        if n == 0 {
            return Ok((Zero::zero(), Zero::zero()));
        }
        let inverse = exp.inv_series(n)?;
        let sinh = (&exp - &inverse).mul_rational(&half());
        let cosh = (exp + inverse).mul_rational(&half());
        Ok((sinh, cosh))
    }
    pub fn sinh_series(&self, n: usize) -> Result<Self, DomainError> {
        Ok(self.sinh_cosh_series(n)?.0)
    }
    pub fn cosh_series(&self, n: usize) -> Result<Self, DomainError> {
        Ok(self.sinh_cosh_series(n)?.1)
    }
    /// `tanh(self) mod x^n` as `(e - 1) / (e + 1)` for `e = exp(2 self)`; the
    /// constant term must be zero
    pub fn tanh_series(&self, n: usize) -> Result<Self, DomainError> {
        let exp = self.mul_integer(&BigInt::from(2)).exp_series(n)?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let numerator = &exp - Self::one();
        let denominator = exp + Self::one();
        numerator.div_series(&denominator, n)
    }
}
