// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::DomainError,
    polynomial::{integer_vec, RationalPolynomial},
};
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

/// the residues `x^i mod b` for `0 <= i < 2 * len(b) - 1`, sharing one
/// denominator, so that reducing a dividend of at most that length is a
/// single linear combination
#[derive(Clone, Debug)]
pub struct PowersPrecomputation {
    modulus: RationalPolynomial,
    powers: Vec<Vec<BigInt>>,
    denominator: BigInt,
}

impl PowersPrecomputation {
    pub fn new(modulus: &RationalPolynomial) -> Result<Self, DomainError> {
        if modulus.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        let table_len = 2 * modulus.len() - 1;
        let leading = modulus.coefficient(modulus.len() - 1);
        let mut powers = Vec::with_capacity(table_len);
        let mut power = RationalPolynomial::one();
        if modulus.len() == 1 {
            power.set_zero();
        }
        for _ in 0..table_len {
            let next = power.shift_left(1);
            powers.push(power);
            power = next;
            if power.len() == modulus.len() {
                let factor = power.coefficient(modulus.len() - 1) / &leading;
                let correction = modulus.mul_rational(&factor);
                power -= correction;
            }
        }
        let denominator = powers
            .iter()
            .fold(BigInt::one(), |acc, power| acc.lcm(power.denominator()));
        let powers = powers
            .into_iter()
            .map(|power| {
                let (mut numerators, power_denominator) = power.into_parts();
                integer_vec::scalar_mul_assign(&mut numerators, &(&denominator / power_denominator));
                numerators
            })
            .collect();
        Ok(PowersPrecomputation {
            modulus: modulus.clone(),
            powers,
            denominator,
        })
    }
    pub fn modulus(&self) -> &RationalPolynomial {
        &self.modulus
    }
    /// the longest dividend the table can reduce
    pub fn len(&self) -> usize {
        self.powers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }
}

impl RationalPolynomial {
    /// `self mod precomp.modulus()`; dividends longer than the table use
    /// ordinary division
    pub fn rem_powers_precomp(&self, precomp: &PowersPrecomputation) -> Self {
        if self.len() < precomp.modulus.len() {
            return self.clone();
        }
        if self.len() > precomp.len() {
            debug!(
                "rem_powers_precomp: length {} exceeds table length {}",
                self.len(),
                precomp.len()
            );
            return self % &precomp.modulus;
        }
        let mut numerators = vec![BigInt::zero(); precomp.modulus.len() - 1];
        for (numerator, power) in self.numerators.iter().zip(&precomp.powers) {
            if numerator.is_zero() {
                continue;
            }
            for (lhs, rhs) in numerators.iter_mut().zip(power) {
                *lhs += numerator * rhs;
            }
        }
        Self::from_parts_unchecked(numerators, &self.denominator * &precomp.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        polynomial::tests::{int_poly, poly},
        util::tests::test_rng,
    };

    #[test]
    fn test_table() {
        let precomp = PowersPrecomputation::new(&int_poly(&[1, 0, 1])).unwrap();
        assert_eq!(precomp.len(), 5);
        // x^2 = -1, x^3 = -x, x^4 = 1
        assert_eq!(int_poly(&[0, 0, 0, 0, 1]).rem_powers_precomp(&precomp), int_poly(&[1]));
        assert_eq!(int_poly(&[0, 0, 0, 1]).rem_powers_precomp(&precomp), int_poly(&[0, -1]));
        assert_eq!(
            int_poly(&[5, 4, 3, 2, 1]).rem_powers_precomp(&precomp),
            int_poly(&[3, 2])
        );
        assert_eq!(int_poly(&[5, 4]).rem_powers_precomp(&precomp), int_poly(&[5, 4]));
        assert_eq!(
            PowersPrecomputation::new(&int_poly(&[])).unwrap_err(),
            DomainError::DivisionByZero
        );
    }

    #[test]
    fn test_constant_modulus() {
        let precomp = PowersPrecomputation::new(&poly(&[(2, 3)])).unwrap();
        assert_eq!(precomp.len(), 1);
        assert!(int_poly(&[7]).rem_powers_precomp(&precomp).is_zero());
        assert!(int_poly(&[7, 1, 2]).rem_powers_precomp(&precomp).is_zero());
        assert!(int_poly(&[]).rem_powers_precomp(&precomp).is_zero());
    }

    #[test]
    fn test_matches_rem() {
        let mut rng = test_rng();
        for modulus_len in 1..6 {
            let modulus = RationalPolynomial::random_not_zero(&mut rng, modulus_len, 10);
            let precomp = PowersPrecomputation::new(&modulus).unwrap();
            assert_eq!(precomp.modulus(), &modulus);
            for dividend_len in 0..2 * modulus_len + 3 {
                let dividend = RationalPolynomial::random(&mut rng, dividend_len, 10);
                let remainder = dividend.rem_powers_precomp(&precomp);
                assert_eq!(remainder, dividend.checked_rem(&modulus).unwrap());
                assert!(remainder.is_canonical());
            }
        }
    }
}
