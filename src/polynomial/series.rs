// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Newton iteration for the power series inverse, square root, inverse square
//! root, exponential and logarithm.

use crate::{
    config::Tuning,
    error::DomainError,
    polynomial::RationalPolynomial,
    traits::Derivative,
    util::{exact_rational_sqrt, newton_precisions},
};
use log::{debug, trace};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

impl RationalPolynomial {
    pub(crate) fn require_constant_term_nonzero(&self) -> Result<(), DomainError> {
        if self.numerators.first().map_or(true, Zero::is_zero) {
            Err(DomainError::ConstantTermZero)
        } else {
            Ok(())
        }
    }
    pub(crate) fn require_constant_term_zero(&self) -> Result<(), DomainError> {
        if self.numerators.first().map_or(false, |v| !v.is_zero()) {
            Err(DomainError::ConstantTermNotZero)
        } else {
            Ok(())
        }
    }
    pub(crate) fn require_constant_term_one(&self) -> Result<(), DomainError> {
        match self.numerators.first() {
            Some(v) if *v == self.denominator => Ok(()),
            _ => Err(DomainError::ConstantTermNotOne),
        }
    }
    /// the positive square root of the constant term
    fn constant_term_sqrt(&self) -> Result<BigRational, DomainError> {
        self.require_constant_term_nonzero()?;
        exact_rational_sqrt(&self.constant_term()).ok_or(DomainError::ConstantTermNotSquare)
    }
    /// `1 / self mod x^n` by the recurrence
    /// `C_k = -sum(A_j A_0^(j-1) C_(k-j), j = 1..=k)`, `C_0 = 1` on the integer
    /// numerators, where `1 / A = sum(C_k x^k / A_0^(k+1))`.
    pub fn inv_series_basecase(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_nonzero()?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let a = &self.numerators[..self.len().min(n)];
        let mut a0_powers = Vec::with_capacity(n);
        a0_powers.push(BigInt::one());
        for i in 1..n {
            let next = &a0_powers[i - 1] * &a[0];
            a0_powers.push(next);
        }
        let mut c: Vec<BigInt> = Vec::with_capacity(n);
        c.push(BigInt::one());
        for k in 1..n {
            let mut sum = BigInt::zero();
            for j in 1..=k.min(a.len() - 1) {
                sum += &a[j] * &a0_powers[j - 1] * &c[k - j];
            }
            c.push(-sum);
        }
        // b_k = C_k / A_0^(k+1), over the common denominator A_0^n
        let numerators = c
            .into_iter()
            .enumerate()
            .map(|(k, c_k)| c_k * &a0_powers[n - 1 - k] * &self.denominator)
            .collect();
        let denominator = &a0_powers[n - 1] * &a[0];
        Ok(Self::from_parts_unchecked(numerators, denominator))
    }
    /// `1 / self mod x^n` by Newton iteration `b' = b - b (a b - 1)`
    pub fn inv_series_newton(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_nonzero()?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let precisions = newton_precisions(n, Tuning::global().inv_series_newton_cutoff);
        let mut retval = self.inv_series_basecase(precisions[0])?;
        for &precision in &precisions[1..] {
            trace!("inv_series_newton: precision {}", precision);
            let mut error = self.truncated(precision).mullow(&retval, precision);
            error -= Self::one();
            let correction = retval.mullow(&error, precision);
            retval -= correction;
        }
        Ok(retval)
    }
    /// `1 / self mod x^n`; the constant term must be nonzero
    pub fn inv_series(&self, n: usize) -> Result<Self, DomainError> {
        if n <= Tuning::global().inv_series_newton_cutoff {
            self.inv_series_basecase(n)
        } else {
            debug!("inv_series: using newton iteration for length {}", n);
            self.inv_series_newton(n)
        }
    }
    /// `self / rhs mod x^n`; the constant term of `rhs` must be nonzero
    pub fn div_series(&self, rhs: &Self, n: usize) -> Result<Self, DomainError> {
        let inverse = rhs.inv_series(n)?;
        Ok(self.mullow(&inverse, n))
    }
    /// `1 / sqrt(self) mod x^n` by Newton iteration `y' = y + y (1 - a y^2) / 2`.
    ///
    /// The constant term must be the square of a nonzero rational; the
    /// positive root is used.
    pub fn invsqrt_series(&self, n: usize) -> Result<Self, DomainError> {
        let root = self.constant_term_sqrt()?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let mut retval = Self::from(root.recip());
        let half = BigRational::new(BigInt::one(), BigInt::from(2));
        for &precision in &newton_precisions(n, 1)[1..] {
            trace!("invsqrt_series: precision {}", precision);
            let square = retval.mullow(&retval, precision);
            let error = Self::one() - self.truncated(precision).mullow(&square, precision);
            let correction = retval.mullow(&error, precision).mul_rational(&half);
            retval += correction;
        }
        Ok(retval)
    }
    /// `sqrt(self) mod x^n` as `self * invsqrt(self)`, with the same
    /// constant term condition as [`invsqrt_series`](Self::invsqrt_series)
    pub fn sqrt_series(&self, n: usize) -> Result<Self, DomainError> {
        let inverse_root = self.invsqrt_series(n)?;
        Ok(self.mullow(&inverse_root, n))
    }
    /// `exp(self) mod x^n` by the recurrence `k b_k = sum(j a_j b_(k-j))`,
    /// scaled to integers as `F_k = k! d^k b_k`:
    /// `F_k = sum(j A_j d^(j-1) (k-1)!/(k-j)! F_(k-j), j = 1..=k)`.
    pub fn exp_series_basecase(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let a = &self.numerators[..self.len().min(n)];
        let d = &self.denominator;
        let mut d_powers = Vec::with_capacity(n);
        d_powers.push(BigInt::one());
        for i in 1..n {
            let next = &d_powers[i - 1] * d;
            d_powers.push(next);
        }
        let mut f: Vec<BigInt> = Vec::with_capacity(n);
        f.push(BigInt::one());
        for k in 1..n {
            let mut sum = BigInt::zero();
            // (k-1)! / (k-j)!
            let mut falling = BigInt::one();
            for j in 1..=k {
                if j > 1 {
                    falling *= k + 1 - j;
                }
                if let Some(a_j) = a.get(j) {
                    if !a_j.is_zero() {
                        sum += a_j * BigInt::from(j) * &d_powers[j - 1] * &falling * &f[k - j];
                    }
                }
            }
            f.push(sum);
        }
        // b_k = F_k / (k! d^k), over the common denominator (n-1)! d^(n-1)
        let mut numerators = vec![BigInt::zero(); n];
        let mut factorial_ratio = BigInt::one();
        for k in (0..n).rev() {
            numerators[k] = &f[k] * &factorial_ratio * &d_powers[n - 1 - k];
            factorial_ratio *= k.max(1);
        }
        // after the loop factorial_ratio is (n-1)!
        let denominator = factorial_ratio * &d_powers[n - 1];
        Ok(Self::from_parts_unchecked(numerators, denominator))
    }
    /// `exp(self) mod x^n` by Newton iteration `y' = y + y (a - log(y))`
    pub fn exp_series_newton(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_zero()?;
        if n == 0 {
            return Ok(Zero::zero());
        }
        let precisions = newton_precisions(n, Tuning::global().exp_series_newton_cutoff);
        let mut retval = self.exp_series_basecase(precisions[0])?;
        for &precision in &precisions[1..] {
            trace!("exp_series_newton: precision {}", precision);
            let difference = self.truncated(precision) - retval.log_series(precision)?;
            let correction = retval.mullow(&difference, precision);
            retval += correction;
        }
        Ok(retval)
    }
    /// `exp(self) mod x^n`; the constant term must be zero
    pub fn exp_series(&self, n: usize) -> Result<Self, DomainError> {
        if n <= Tuning::global().exp_series_newton_cutoff {
            self.exp_series_basecase(n)
        } else {
            debug!("exp_series: using newton iteration for length {}", n);
            self.exp_series_newton(n)
        }
    }
    /// `log(self) mod x^n` as the integral of `self' / self`; the constant term
    /// must be one
    pub fn log_series(&self, n: usize) -> Result<Self, DomainError> {
        self.require_constant_term_one()?;
        if n <= 1 {
            return Ok(Zero::zero());
        }
        let truncated = self.truncated(n);
        let quotient = (&truncated).derivative().div_series(&truncated, n - 1)?;
        Ok(quotient.integral())
    }
}
