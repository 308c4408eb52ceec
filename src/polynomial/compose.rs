// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    config::Tuning,
    error::DomainError,
    polynomial::{integer_vec, RationalPolynomial},
};
use log::debug;
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{One, Zero};

impl RationalPolynomial {
    /// Horner's rule on the integer numerators, homogenised in the inner
    /// denominator: for `g = G / dg` and `h = H / dh` of degree `d`,
    /// `g(h) = sum(G_i H^i dh^(d - i)) / (dg dh^d)`.
    ///
    /// `truncation` limits every intermediate product to that many terms.
    fn compose_horner_integer(&self, inner: &Self, truncation: Option<usize>) -> Self {
        let cutoff = Tuning::global().karatsuba_cutoff;
        let degree = self.len() - 1;
        let mut numerators = vec![self.numerators[degree].clone()];
        let mut inner_denominator_power = BigInt::one();
        for numerator in self.numerators[..degree].iter().rev() {
            numerators = match truncation {
                Some(n) => integer_vec::mullow(&numerators, &inner.numerators, n, cutoff),
                None => integer_vec::mul(&numerators, &inner.numerators, cutoff),
            };
            inner_denominator_power *= &inner.denominator;
            let term = numerator * &inner_denominator_power;
            match numerators.first_mut() {
                Some(first) => *first += term,
                None => numerators.push(term),
            }
        }
        let denominator = &self.denominator * inner_denominator_power;
        Self::from_parts_unchecked(numerators, denominator)
    }
    /// `self(inner)`, the full composition
    pub fn compose(&self, inner: &Self) -> Self {
        if self.is_constant() {
            return self.clone();
        }
        if inner.is_zero() {
            return Self::from(self.constant_term());
        }
        self.compose_horner_integer(inner, None)
    }
    /// `self(inner) mod x^n` by Horner's rule; `inner` must have a zero
    /// constant term
    pub fn compose_series_horner(&self, inner: &Self, n: usize) -> Result<Self, DomainError> {
        inner.require_constant_term_zero()?;
        let outer = self.truncated(n);
        if outer.is_constant() {
            return Ok(outer);
        }
        if inner.is_zero() {
            return Ok(Self::from(outer.constant_term()));
        }
        Ok(outer.compose_horner_integer(&inner.truncated(n), Some(n)))
    }
    /// `self(inner) mod x^n` by the Brent-Kung baby-step giant-step method:
    /// the outer coefficients are cut into blocks of `m ~ sqrt(n)`, each block
    /// is evaluated from the table `inner^0, ..., inner^(m-1)`, and the blocks
    /// are combined by Horner's rule in `inner^m`. `inner` must have a zero
    /// constant term.
    pub fn compose_series_brent_kung(&self, inner: &Self, n: usize) -> Result<Self, DomainError> {
        inner.require_constant_term_zero()?;
        let outer = self.truncated(n);
        if outer.is_constant() {
            return Ok(outer);
        }
        let inner = inner.truncated(n);
        let block_len = n.sqrt().max(1) + 1;
        let mut powers = Vec::with_capacity(block_len);
        powers.push(Self::one());
        for i in 1..=block_len {
            let next = powers[i - 1].mullow(&inner, n);
            powers.push(next);
        }
        let giant_step = powers.pop().expect("powers is nonempty");
        let block_values: Vec<Self> = outer
            .coefficients()
            .chunks(block_len)
            .map(|block| {
                let mut value = Self::zero();
                for (coefficient, power) in block.iter().zip(&powers) {
                    if !coefficient.is_zero() {
                        value += power.mul_rational(coefficient);
                    }
                }
                value
            })
            .collect();
        let mut retval = Self::zero();
        for block_value in block_values.into_iter().rev() {
            retval = retval.mullow(&giant_step, n);
            retval += block_value;
        }
        Ok(retval)
    }
    /// `self(inner) mod x^n`; `inner` must have a zero constant term
    pub fn compose_series(&self, inner: &Self, n: usize) -> Result<Self, DomainError> {
        if self.len().min(n) <= Tuning::global().compose_horner_cutoff {
            self.compose_series_horner(inner, n)
        } else {
            debug!("compose_series: using brent-kung for length {}", n);
            self.compose_series_brent_kung(inner, n)
        }
    }
}
