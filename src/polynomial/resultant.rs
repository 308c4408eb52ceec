// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use crate::{
    error::DomainError,
    mod_int::{resultant_residues, KnownOddPrime},
    polynomial::{gcd::exact_mul_by_signed_power, integer_vec, RationalPolynomial},
    traits::Derivative,
};
use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Pow, Zero};
use std::mem;

/// resultant of two integer polynomials by the subresultant algorithm.
///
/// Follows Algorithm 3.3.7 in A Course in Computational Algebraic Number
/// Theory by Henri Cohen. A zero operand gives 0, a constant `c` against a
/// polynomial of degree `d` gives `c^d`.
pub(crate) fn integer_resultant(lhs: &[BigInt], rhs: &[BigInt]) -> BigInt {
    if lhs.is_empty() || rhs.is_empty() {
        return BigInt::zero();
    }
    let (a, b, mut negate) = if lhs.len() >= rhs.len() {
        (lhs, rhs, false)
    } else {
        (rhs, lhs, (lhs.len() - 1).is_odd() && (rhs.len() - 1).is_odd())
    };
    let scale = Pow::pow(integer_vec::content(a), b.len() - 1)
        * Pow::pow(integer_vec::content(b), a.len() - 1);
    let mut a = integer_vec::primitive_part(a);
    let mut b = integer_vec::primitive_part(b);
    let mut g = BigInt::one();
    let mut h = BigInt::one();
    while b.len() > 1 {
        let a_degree = a.len() - 1;
        let b_degree = b.len() - 1;
        let delta = a_degree - b_degree;
        if a_degree.is_odd() && b_degree.is_odd() {
            negate = !negate;
        }
        let mut remainder = integer_vec::pseudo_rem(&a, &b);
        if remainder.is_empty() {
            return BigInt::zero();
        }
        let divisor = &g * Pow::pow(&h, delta);
        integer_vec::scalar_div_exact_assign(&mut remainder, &divisor);
        a = mem::replace(&mut b, remainder);
        g = a[a.len() - 1].clone();
        h = exact_mul_by_signed_power(Pow::pow(&g, delta), &h, 1, delta);
    }
    let a_degree = a.len() - 1;
    h = exact_mul_by_signed_power(Pow::pow(&b[0], a_degree), &h, 1, a_degree);
    let retval = scale * h;
    if negate {
        -retval
    } else {
        retval
    }
}

/// incremental Chinese remaindering into the symmetric range
struct CrtAccumulator {
    residue: BigInt,
    modulus: BigInt,
}

impl CrtAccumulator {
    fn new() -> Self {
        CrtAccumulator {
            residue: BigInt::zero(),
            modulus: BigInt::one(),
        }
    }
    fn add(&mut self, prime: KnownOddPrime, residue: u64) {
        let current = prime.reduce(&self.residue);
        let inverse = prime.inverse(prime.reduce(&self.modulus));
        let step = prime.mul(prime.sub(residue, current), inverse);
        self.residue += &self.modulus * BigInt::from(step);
        self.modulus *= BigInt::from(prime.value());
    }
    fn symmetric_value(&self) -> BigInt {
        let half: BigInt = &self.modulus >> 1usize;
        if self.residue > half {
            &self.residue - &self.modulus
        } else {
            self.residue.clone()
        }
    }
}

impl RationalPolynomial {
    /// `da^deg(rhs) * db^deg(self)`, relating the resultant of the numerators
    /// to the resultant of the rational polynomials
    fn resultant_denominator(&self, rhs: &Self) -> BigInt {
        Pow::pow(&self.denominator, rhs.len() - 1) * Pow::pow(&rhs.denominator, self.len() - 1)
    }
    /// the resultant of `self` and `rhs`.
    ///
    /// A zero operand gives 0, two nonzero constants give 1, and a constant
    /// `c` against a polynomial of degree `d` gives `c^d` on either side.
    pub fn resultant(&self, rhs: &Self) -> BigRational {
        if self.is_zero() || rhs.is_zero() {
            return BigRational::zero();
        }
        let numerator = integer_resultant(&self.numerators, &rhs.numerators);
        BigRational::new(numerator, self.resultant_denominator(rhs))
    }
    /// the same value as [`resultant`](Self::resultant), computed modulo
    /// word-size primes.
    ///
    /// `divisor` must divide the resultant of the integer numerator vectors
    /// and the quotient must fit in `nbits` bits plus a sign. One prime beyond
    /// the bound checks the reconstruction; a disagreement gives
    /// [`DomainError::ResultantBoundExceeded`].
    pub fn resultant_div(
        &self,
        rhs: &Self,
        divisor: &BigInt,
        nbits: u64,
    ) -> Result<BigRational, DomainError> {
        if divisor.is_zero() {
            return Err(DomainError::ScalarDivisionByZero);
        }
        if self.is_zero() || rhs.is_zero() {
            return Ok(BigRational::zero());
        }
        let bound = BigInt::one() << (nbits + 1);
        let lhs_leading = &self.numerators[self.len() - 1];
        let rhs_leading = &rhs.numerators[rhs.len() - 1];
        let mut accumulator = CrtAccumulator::new();
        let mut prime_count = 0usize;
        for prime in KnownOddPrime::descending_primes() {
            if prime.reduce(lhs_leading) == 0
                || prime.reduce(rhs_leading) == 0
                || prime.reduce(divisor) == 0
            {
                continue;
            }
            let lhs_residues: Vec<u64> = self.numerators.iter().map(|v| prime.reduce(v)).collect();
            let rhs_residues: Vec<u64> = rhs.numerators.iter().map(|v| prime.reduce(v)).collect();
            let resultant = resultant_residues(prime, lhs_residues, rhs_residues);
            let quotient = prime.mul(resultant, prime.inverse(prime.reduce(divisor)));
            prime_count += 1;
            if accumulator.modulus > bound {
                let expected = prime.reduce(&accumulator.symmetric_value());
                if expected != quotient {
                    debug!(
                        "resultant_div: check prime {} disagrees after {} primes",
                        prime.value(),
                        prime_count
                    );
                    return Err(DomainError::ResultantBoundExceeded { nbits });
                }
                break;
            }
            accumulator.add(prime, quotient);
        }
        debug!("resultant_div: used {} primes for {} bits", prime_count, nbits);
        let numerator = accumulator.symmetric_value() * divisor;
        Ok(BigRational::new(numerator, self.resultant_denominator(rhs)))
    }
    /// `(-1)^(n (n - 1) / 2) res(self, self') / lc(self)` for degree `n`;
    /// zero for constants
    pub fn discriminant(&self) -> BigRational {
        let leading = match self.leading_coefficient() {
            Some(v) if self.len() > 1 => v,
            _ => return BigRational::zero(),
        };
        let degree = self.len() - 1;
        let retval = self.resultant(&self.derivative()) / leading;
        if (degree * (degree - 1) / 2).is_odd() {
            -retval
        } else {
            retval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        polynomial::tests::{int_poly, poly, r},
        util::tests::test_rng,
    };
    use num_traits::Signed;

    #[test]
    fn test_resultant() {
        // (1 - 2)(-1 - 2)
        assert_eq!(int_poly(&[-1, 0, 1]).resultant(&int_poly(&[-2, 1])), r(3, 1));
        assert_eq!(int_poly(&[-2, 1]).resultant(&int_poly(&[-1, 0, 1])), r(3, 1));
        assert_eq!(int_poly(&[-1, 1]).resultant(&int_poly(&[-2, 1])), r(-1, 1));
        assert_eq!(int_poly(&[-2, 1]).resultant(&int_poly(&[-1, 1])), r(1, 1));
        assert_eq!(poly(&[(-1, 1), (1, 2)]).resultant(&int_poly(&[0, 1])), r(1, 1));
        assert_eq!(
            int_poly(&[1, 2, 3, 4]).resultant(&int_poly(&[5, 0, -1])),
            r(2164, 1)
        );
        assert_eq!(
            poly(&[(1, 5), (-2, 3), (0, 1), (1, 2)]).resultant(&poly(&[(-1, 2), (1, 1), (3, 7)])),
            r(24187, 823200)
        );
        // shared root
        assert!(int_poly(&[-1, 0, 1]).resultant(&int_poly(&[1, 1])).is_zero());
    }

    #[test]
    fn test_resultant_conventions() {
        let a = int_poly(&[1, 0, 1]);
        assert_eq!(int_poly(&[3]).resultant(&a), r(9, 1));
        assert_eq!(a.resultant(&int_poly(&[3])), r(9, 1));
        assert_eq!(poly(&[(-1, 2)]).resultant(&int_poly(&[1, 1, 1, 1])), r(-1, 8));
        assert_eq!(int_poly(&[3]).resultant(&int_poly(&[5])), r(1, 1));
        assert!(int_poly(&[]).resultant(&a).is_zero());
        assert!(a.resultant(&int_poly(&[])).is_zero());
        assert!(int_poly(&[]).resultant(&int_poly(&[5])).is_zero());
    }

    #[test]
    fn test_resultant_properties() {
        let mut rng = test_rng();
        for _ in 0..30 {
            let a = RationalPolynomial::random_not_zero(&mut rng, 5, 8);
            let b = RationalPolynomial::random_not_zero(&mut rng, 4, 8);
            let h = RationalPolynomial::random_not_zero(&mut rng, 3, 8);
            let ab = a.resultant(&b);
            let ba = b.resultant(&a);
            let sign_flip = a.degree().unwrap_or(0) * b.degree().unwrap_or(0) % 2 == 1;
            assert_eq!(ab, if sign_flip { -&ba } else { ba.clone() });
            assert_eq!((&a * &h).resultant(&b), &ab * h.resultant(&b));
            let shared = (&a * &h).resultant(&(&b * &h));
            if h.len() > 1 {
                assert!(shared.is_zero());
            }
        }
    }

    #[test]
    fn test_integer_resultant_matches_modular() {
        let mut rng = test_rng();
        let prime = KnownOddPrime::previous_prime(1 << 40);
        for _ in 0..30 {
            let a = RationalPolynomial::random_not_zero(&mut rng, 6, 30).primitive_part();
            let b = RationalPolynomial::random_not_zero(&mut rng, 5, 30).primitive_part();
            if prime.reduce(a.numerators.last().unwrap()) == 0
                || prime.reduce(b.numerators.last().unwrap()) == 0
            {
                continue;
            }
            let expected = resultant_residues(
                prime,
                a.numerators.iter().map(|v| prime.reduce(v)).collect(),
                b.numerators.iter().map(|v| prime.reduce(v)).collect(),
            );
            let resultant = integer_resultant(&a.numerators, &b.numerators);
            assert_eq!(prime.reduce(&resultant), expected);
        }
    }

    #[test]
    fn test_resultant_div() {
        let mut rng = test_rng();
        for _ in 0..30 {
            let a = RationalPolynomial::random_not_zero(&mut rng, 6, 20);
            let b = RationalPolynomial::random_not_zero(&mut rng, 5, 20);
            let expected = a.resultant(&b);
            let integer = integer_resultant(&a.numerators, &b.numerators);
            let divisors = [BigInt::one(), integer.gcd(&BigInt::from(720_720)), integer.clone()];
            for divisor in &divisors {
                if divisor.is_zero() {
                    continue;
                }
                let nbits = (&integer / divisor).abs().bits();
                assert_eq!(a.resultant_div(&b, divisor, nbits), Ok(expected.clone()));
            }
        }
    }

    #[test]
    fn test_resultant_div_edge_cases() {
        let a = int_poly(&[1, 0, 1]);
        assert_eq!(
            int_poly(&[]).resultant_div(&a, &BigInt::one(), 0),
            Ok(BigRational::zero())
        );
        assert_eq!(
            int_poly(&[3]).resultant_div(&int_poly(&[5]), &BigInt::one(), 1),
            Ok(r(1, 1))
        );
        assert_eq!(
            a.resultant_div(&a, &BigInt::zero(), 8),
            Err(DomainError::ScalarDivisionByZero)
        );
        // res(x - (2^100 + 1), x) is far beyond a two bit bound
        let big: BigInt = (BigInt::one() << 100usize) + 1;
        let b = RationalPolynomial::from(vec![-big, BigInt::one()]);
        assert_eq!(
            b.resultant_div(&int_poly(&[0, 1]), &BigInt::one(), 2),
            Err(DomainError::ResultantBoundExceeded { nbits: 2 })
        );
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(int_poly(&[1, 3, 1]).discriminant(), r(5, 1));
        assert_eq!(int_poly(&[0, -1, 0, 1]).discriminant(), r(4, 1));
        assert_eq!(poly(&[(1, 2), (-1, 1), (0, 1), (2, 3)]).discriminant(), r(-1, 3));
        assert_eq!(int_poly(&[7, 2]).discriminant(), r(1, 1));
        assert!(int_poly(&[1, 2, 1]).discriminant().is_zero());
        assert!(int_poly(&[5]).discriminant().is_zero());
        assert!(int_poly(&[]).discriminant().is_zero());
    }
}
