// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::DomainError,
    traits::{Derivative, PolynomialEval},
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::slice;

mod add_sub;
mod coefficients;
mod compose;
mod div_rem;
mod gcd;
pub(crate) mod integer_vec;
mod mul;
mod powers_precomp;
mod random;
mod resultant;
mod revert;
mod series;
mod special;
mod text;
mod transcendental;

pub use self::{
    coefficients::CoefficientVector, powers_precomp::PowersPrecomputation, text::Pretty,
};

/// A polynomial with rational coefficients.
///
/// Coefficient `i` is `numerators[i] / denominator`. Every value handed out by
/// the public API is canonical: the numerators have no trailing zeros, the
/// denominator is positive and coprime to the numerators, and the zero
/// polynomial has denominator 1. Equality is therefore structural.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct RationalPolynomial {
    numerators: CoefficientVector,
    denominator: BigInt,
}

impl Default for RationalPolynomial {
    fn default() -> Self {
        RationalPolynomial {
            numerators: CoefficientVector::new(),
            denominator: BigInt::one(),
        }
    }
}

impl RationalPolynomial {
    pub fn new() -> Self {
        Self::default()
    }
    /// the polynomial `x`
    pub fn x() -> Self {
        Self::from_canonical_parts(vec![BigInt::zero(), BigInt::one()], BigInt::one())
    }
    /// `numerators / denominator`, canonicalised
    pub fn from_parts(numerators: Vec<BigInt>, denominator: BigInt) -> Result<Self, DomainError> {
        if denominator.is_zero() {
            return Err(DomainError::ZeroDenominator);
        }
        Ok(Self::from_parts_unchecked(numerators, denominator))
    }
    /// like [`from_parts`](Self::from_parts) for a denominator known to be nonzero
    pub(crate) fn from_parts_unchecked(numerators: Vec<BigInt>, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        let mut retval = RationalPolynomial {
            numerators: numerators.into(),
            denominator,
        };
        retval.canonicalise();
        retval
    }
    /// for parts already coprime with a positive denominator; only trailing
    /// zeros are removed
    pub(crate) fn from_canonical_parts(numerators: Vec<BigInt>, denominator: BigInt) -> Self {
        let mut numerators = CoefficientVector::from(numerators);
        numerators.normalise();
        let denominator = if numerators.is_empty() {
            BigInt::one()
        } else {
            denominator
        };
        let retval = RationalPolynomial {
            numerators,
            denominator,
        };
        debug_assert!(retval.is_canonical(), "{:?}", retval);
        retval
    }
    pub(crate) fn into_parts(self) -> (Vec<BigInt>, BigInt) {
        (self.numerators.into_vec(), self.denominator)
    }
    /// makes `self` canonical; idempotent
    pub fn canonicalise(&mut self) {
        self.numerators.normalise();
        if self.numerators.is_empty() {
            self.denominator.set_one();
            return;
        }
        if self.denominator.is_negative() {
            integer_vec::neg_assign(&mut self.numerators);
            self.denominator = -std::mem::take(&mut self.denominator);
        }
        if self.denominator.is_one() {
            return;
        }
        let mut divisor = self.denominator.clone();
        for numerator in self.numerators.iter() {
            divisor = divisor.gcd(numerator);
            if divisor.is_one() {
                return;
            }
        }
        integer_vec::scalar_div_exact_assign(&mut self.numerators, &divisor);
        self.denominator /= divisor;
    }
    pub fn is_canonical(&self) -> bool {
        if !self.numerators.is_normalised() || !self.denominator.is_positive() {
            return false;
        }
        if self.numerators.is_empty() {
            return self.denominator.is_one();
        }
        integer_vec::content(&self.numerators)
            .gcd(&self.denominator)
            .is_one()
    }
    /// number of coefficients, `degree + 1`, 0 for the zero polynomial
    pub fn len(&self) -> usize {
        self.numerators.len()
    }
    pub fn is_empty(&self) -> bool {
        self.numerators.is_empty()
    }
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }
    pub fn numerators(&self) -> &[BigInt] {
        &self.numerators
    }
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }
    pub fn coefficient_vector(&self) -> &CoefficientVector {
        &self.numerators
    }
    pub fn iter_numerators(&self) -> slice::Iter<BigInt> {
        self.numerators.iter()
    }
    /// coefficient of `x^index`, zero past the end
    pub fn coefficient(&self, index: usize) -> BigRational {
        match self.numerators.get(index) {
            Some(numerator) => BigRational::new(numerator.clone(), self.denominator.clone()),
            None => BigRational::zero(),
        }
    }
    pub fn coefficients(&self) -> Vec<BigRational> {
        (0..self.len()).map(|i| self.coefficient(i)).collect()
    }
    pub fn leading_coefficient(&self) -> Option<BigRational> {
        self.degree().map(|degree| self.coefficient(degree))
    }
    pub(crate) fn constant_term(&self) -> BigRational {
        self.coefficient(0)
    }
    pub fn set_coefficient(&mut self, index: usize, value: &BigRational) {
        let common = self.denominator.lcm(value.denom());
        let scale = &common / &self.denominator;
        integer_vec::scalar_mul_assign(&mut self.numerators, &scale);
        if index >= self.numerators.len() {
            if value.is_zero() {
                self.numerators.normalise();
                self.denominator = common;
                self.canonicalise();
                return;
            }
            self.numerators.set_length(index + 1);
        }
        self.numerators[index] = value.numer() * (&common / value.denom());
        self.denominator = common;
        self.canonicalise();
    }
    pub fn is_one(&self) -> bool {
        self.numerators.len() == 1 && self.numerators[0].is_one() && self.denominator.is_one()
    }
    pub fn is_constant(&self) -> bool {
        self.len() <= 1
    }
    pub fn is_monic(&self) -> bool {
        self.numerators.last() == Some(&self.denominator)
    }
    /// `self` with the leading coefficient scaled to 1; zero stays zero
    pub fn make_monic(&self) -> Self {
        match self.numerators.last() {
            None => Self::zero(),
            Some(last) => {
                Self::from_parts_unchecked(self.numerators.to_vec(), last.clone())
            }
        }
    }
    /// non-negative gcd of the coefficients, zero for the zero polynomial
    pub fn content(&self) -> BigRational {
        BigRational::new(integer_vec::content(&self.numerators), self.denominator.clone())
    }
    /// `self` divided by its content, so the coefficients are coprime integers
    pub fn primitive_part(&self) -> Self {
        Self::from_canonical_parts(integer_vec::primitive_part(&self.numerators), BigInt::one())
    }
    /// inverse of a nonzero constant
    pub fn inv(&self) -> Result<Self, DomainError> {
        if self.len() != 1 {
            return Err(DomainError::NotUnit);
        }
        let numerator = &self.numerators[0];
        let mut new_numerator = self.denominator.clone();
        if numerator.is_negative() {
            new_numerator = -new_numerator;
        }
        Ok(Self::from_canonical_parts(vec![new_numerator], numerator.abs()))
    }
    /// keeps only the coefficients of `x^0` through `x^(len - 1)`
    pub fn truncate(&mut self, len: usize) {
        if len < self.len() {
            self.numerators.set_length(len);
            self.canonicalise();
        }
    }
    pub fn truncated(&self, len: usize) -> Self {
        if len >= self.len() {
            return self.clone();
        }
        Self::from_parts_unchecked(self.numerators[..len].to_vec(), self.denominator.clone())
    }
    /// `self * x^shift`
    pub fn shift_left(&self, shift: usize) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut numerators = vec![BigInt::zero(); shift];
        numerators.extend_from_slice(&self.numerators);
        Self::from_canonical_parts(numerators, self.denominator.clone())
    }
    /// `self / x^shift`, discarding the `shift` lowest coefficients
    pub fn shift_right(&self, shift: usize) -> Self {
        if shift >= self.len() {
            return Self::zero();
        }
        Self::from_parts_unchecked(self.numerators[shift..].to_vec(), self.denominator.clone())
    }
    /// `x^(len - 1) * self(1/x)` for `self` truncated or zero-padded to `len`
    /// coefficients
    pub fn reverse(&self, len: usize) -> Self {
        let numerators = (0..len)
            .map(|i| {
                self.numerators
                    .get(len - 1 - i)
                    .cloned()
                    .unwrap_or_else(BigInt::zero)
            })
            .collect();
        Self::from_parts_unchecked(numerators, self.denominator.clone())
    }
    /// the terms of degrees `start..end`, left in place
    pub fn slice(&self, start: usize, end: usize) -> Self {
        let end = end.min(self.len());
        if start >= end {
            return Self::zero();
        }
        let mut numerators = vec![BigInt::zero(); start];
        numerators.extend_from_slice(&self.numerators[start..end]);
        Self::from_parts_unchecked(numerators, self.denominator.clone())
    }
    /// the antiderivative with zero constant term
    pub fn integral(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let len = self.len();
        let mut multiplier = BigInt::one();
        for i in 2..=len {
            multiplier = multiplier.lcm(&BigInt::from(i));
        }
        let mut numerators = Vec::with_capacity(len + 1);
        numerators.push(BigInt::zero());
        for (i, numerator) in self.numerators.iter().enumerate() {
            numerators.push(numerator * (&multiplier / BigInt::from(i + 1)));
        }
        Self::from_parts_unchecked(numerators, &self.denominator * multiplier)
    }
    pub fn eval_integer(&self, x: &BigInt) -> BigRational {
        let mut iter = self.numerators.iter().rev();
        let mut retval = match iter.next() {
            Some(last) => last.clone(),
            None => return BigRational::zero(),
        };
        for numerator in iter {
            retval *= x;
            retval += numerator;
        }
        BigRational::new(retval, self.denominator.clone())
    }
    pub fn eval_rational(&self, x: &BigRational) -> BigRational {
        // homogenised Horner: sum of n_i p^i q^(deg - i), over d q^deg
        let (p, q) = (x.numer(), x.denom());
        let mut iter = self.numerators.iter().rev();
        let mut retval = match iter.next() {
            Some(last) => last.clone(),
            None => return BigRational::zero(),
        };
        let mut q_power = BigInt::one();
        for numerator in iter {
            q_power *= q;
            retval *= p;
            retval += numerator * &q_power;
        }
        BigRational::new(retval, q_power * &self.denominator)
    }
}

impl From<Vec<BigInt>> for RationalPolynomial {
    fn from(numerators: Vec<BigInt>) -> Self {
        Self::from_canonical_parts(numerators, BigInt::one())
    }
}

impl From<Vec<i64>> for RationalPolynomial {
    fn from(numerators: Vec<i64>) -> Self {
        numerators
            .into_iter()
            .map(BigInt::from)
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<Vec<BigRational>> for RationalPolynomial {
    fn from(coefficients: Vec<BigRational>) -> Self {
        let denominator = coefficients
            .iter()
            .fold(BigInt::one(), |lcm, v| lcm.lcm(v.denom()));
        let numerators = coefficients
            .into_iter()
            .map(|v| {
                let (numer, denom) = v.into();
                numer * (&denominator / denom)
            })
            .collect();
        Self::from_parts_unchecked(numerators, denominator)
    }
}

impl From<BigInt> for RationalPolynomial {
    fn from(value: BigInt) -> Self {
        Self::from(vec![value])
    }
}

impl From<i64> for RationalPolynomial {
    fn from(value: i64) -> Self {
        Self::from(BigInt::from(value))
    }
}

impl From<BigRational> for RationalPolynomial {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into();
        Self::from_canonical_parts(vec![numer], denom)
    }
}

impl<'a> PolynomialEval<BigRational> for &'a RationalPolynomial {
    fn eval(self, x: &BigRational) -> BigRational {
        self.eval_rational(x)
    }
}

impl PolynomialEval<BigRational> for RationalPolynomial {
    fn eval(self, x: &BigRational) -> BigRational {
        self.eval_rational(x)
    }
}

impl<'a> Derivative for &'a RationalPolynomial {
    type Output = RationalPolynomial;
    fn derivative(self) -> RationalPolynomial {
        RationalPolynomial::from_parts_unchecked(
            integer_vec::derivative(&self.numerators),
            self.denominator.clone(),
        )
    }
}

impl Derivative for RationalPolynomial {
    type Output = Self;
    fn derivative(self) -> Self {
        (&self).derivative()
    }
}

impl<'a> IntoIterator for &'a RationalPolynomial {
    type Item = &'a BigInt;
    type IntoIter = slice::Iter<'a, BigInt>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_numerators()
    }
}
