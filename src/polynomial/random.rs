// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Random polynomials for tests and benchmarks.

use crate::polynomial::RationalPolynomial;
use num_bigint::{BigInt, BigUint, Sign};
use num_rational::BigRational;
use num_traits::{One, Zero};
use rand::Rng;

/// a uniformly random integer in `0..2^bits`
fn random_magnitude<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigUint {
    let word_count = ((bits + 31) / 32) as usize;
    let mut words: Vec<u32> = (0..word_count).map(|_| rng.gen()).collect();
    let excess = word_count as u64 * 32 - bits;
    if let Some(top) = words.last_mut() {
        *top &= u32::MAX >> excess;
    }
    BigUint::new(words)
}

fn random_signed<R: Rng + ?Sized>(rng: &mut R, bits: u64) -> BigInt {
    let sign = if rng.gen() { Sign::Plus } else { Sign::Minus };
    BigInt::from_biguint(sign, random_magnitude(rng, bits))
}

impl RationalPolynomial {
    /// a random polynomial of length at most `len` whose numerators and
    /// denominator are below `2^bits` in magnitude before canonicalisation
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, bits: u64) -> Self {
        let numerators = (0..len).map(|_| random_signed(rng, bits)).collect();
        let mut denominator = random_magnitude(rng, bits);
        if denominator.is_zero() {
            denominator.set_one();
        }
        Self::from_parts_unchecked(numerators, BigInt::from(denominator))
    }
    /// like [`random`](Self::random) but never zero; `len` and `bits` must be
    /// positive
    pub fn random_not_zero<R: Rng + ?Sized>(rng: &mut R, len: usize, bits: u64) -> Self {
        assert!(len > 0 && bits > 0, "can't generate a nonzero polynomial");
        loop {
            let retval = Self::random(rng, len, bits);
            if !retval.is_zero() {
                return retval;
            }
        }
    }
    /// like [`random`](Self::random) with the constant term replaced by `constant`
    pub fn random_with_constant<R: Rng + ?Sized>(
        rng: &mut R,
        len: usize,
        bits: u64,
        constant: &BigRational,
    ) -> Self {
        let mut retval = Self::random(rng, len, bits);
        retval.set_coefficient(0, constant);
        retval
    }
}
