// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Reversion: the inverse of a power series under composition.

use crate::{
    config::Tuning,
    error::DomainError,
    polynomial::RationalPolynomial,
    traits::Derivative,
    util::newton_precisions,
};
use log::{debug, trace};
use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// coefficient `index` of `lhs * rhs`
fn product_coefficient(
    lhs: &RationalPolynomial,
    rhs: &RationalPolynomial,
    index: usize,
) -> BigRational {
    let mut sum = BigInt::zero();
    let lhs_numerators = lhs.numerators();
    let rhs_numerators = rhs.numerators();
    let start = (index + 1).saturating_sub(rhs_numerators.len());
    for i in start..lhs_numerators.len().min(index + 1) {
        sum += &lhs_numerators[i] * &rhs_numerators[index - i];
    }
    BigRational::new(sum, lhs.denominator() * rhs.denominator())
}

impl RationalPolynomial {
    fn require_revertible(&self) -> Result<(), DomainError> {
        self.require_constant_term_zero()?;
        if self.numerators.get(1).map_or(true, Zero::is_zero) {
            return Err(DomainError::LinearTermZero);
        }
        Ok(())
    }
    /// `x / self mod x^(n - 1)`, whose `k`-th power holds coefficient `k` of
    /// the reversion by Lagrange inversion: `[x^k] g = [x^(k-1)] (x / h)^k / k`
    fn lagrange_kernel(&self, n: usize) -> Result<Self, DomainError> {
        self.shift_right(1).inv_series(n - 1)
    }
    /// the reversion `g` with `self(g) = x mod x^n` by Lagrange inversion,
    /// one power of the kernel per coefficient.
    ///
    /// `self` must have a zero constant term and a nonzero linear term.
    pub fn revert_series_lagrange(&self, n: usize) -> Result<Self, DomainError> {
        self.require_revertible()?;
        if n <= 1 {
            return Ok(Zero::zero());
        }
        let kernel = self.lagrange_kernel(n)?;
        let mut coefficients = vec![BigRational::zero(); n];
        let mut power = kernel.clone();
        for (k, coefficient) in coefficients.iter_mut().enumerate().skip(1) {
            *coefficient = power.coefficient(k - 1) / BigInt::from(k);
            if k + 1 < n {
                power = power.mullow(&kernel, n - 1);
            }
        }
        Ok(Self::from(coefficients))
    }
    /// like [`revert_series_lagrange`](Self::revert_series_lagrange) but with
    /// baby steps `(x/h)^1..=(x/h)^m` and giant steps `(x/h)^(j m)` for
    /// `m ~ sqrt(n)`, each coefficient being a single dot product
    pub fn revert_series_lagrange_fast(&self, n: usize) -> Result<Self, DomainError> {
        self.require_revertible()?;
        if n <= 1 {
            return Ok(Zero::zero());
        }
        let kernel = self.lagrange_kernel(n)?;
        let step = (n - 1).sqrt() + 1;
        let mut baby_steps = Vec::with_capacity(step + 1);
        baby_steps.push(Self::one());
        for i in 1..=step {
            let next = baby_steps[i - 1].mullow(&kernel, n - 1);
            baby_steps.push(next);
        }
        let giant_step = &baby_steps[step];
        let mut coefficients = vec![BigRational::zero(); n];
        let mut giant_power = Self::one();
        let mut block_start = 0;
        while block_start + 1 < n {
            for (i, baby_step) in baby_steps.iter().enumerate().skip(1) {
                let k = block_start + i;
                if k >= n {
                    break;
                }
                coefficients[k] =
                    product_coefficient(&giant_power, baby_step, k - 1) / BigInt::from(k);
            }
            block_start += step;
            if block_start + 1 < n {
                giant_power = giant_power.mullow(giant_step, n - 1);
            }
        }
        Ok(Self::from(coefficients))
    }
    /// the reversion by Newton iteration `g' = g - (h(g) - x) / h'(g)`,
    /// seeded from Lagrange inversion
    pub fn revert_series_newton(&self, n: usize) -> Result<Self, DomainError> {
        self.require_revertible()?;
        let precisions = newton_precisions(n, Tuning::global().revert_newton_cutoff.max(2));
        let mut retval = self.revert_series_lagrange_fast(precisions[0])?;
        let derivative = self.derivative();
        for &precision in &precisions[1..] {
            trace!("revert_series_newton: precision {}", precision);
            let outer = self.truncated(precision);
            let mut error = outer.compose_series(&retval, precision)?;
            error -= Self::x();
            let slope = derivative.compose_series(&retval, precision)?;
            let correction = error.div_series(&slope, precision)?;
            retval -= correction;
        }
        Ok(retval)
    }
    /// `g` with `self(g) = x mod x^n`; `self` must have a zero constant term
    /// and a nonzero linear term
    pub fn revert_series(&self, n: usize) -> Result<Self, DomainError> {
        if n <= Tuning::global().revert_lagrange_cutoff {
            self.revert_series_lagrange(n)
        } else {
            debug!("revert_series: using newton iteration for length {}", n);
            self.revert_series_newton(n)
        }
    }
}
