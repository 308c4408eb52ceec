// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Classical orthogonal polynomials from their explicit coefficient formulas.

use crate::polynomial::RationalPolynomial;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Zero};

impl RationalPolynomial {
    /// the Legendre polynomial `P_n`.
    ///
    /// The numerators over `2^n` start from `binomial(2n, n) x^n` and step down
    /// two degrees at a time by `c_(m-2) = -c_m m (m-1) / ((n-m+2) (n+m-1))`.
    pub fn legendre_p(n: usize) -> Self {
        let mut numerators = vec![BigInt::zero(); n + 1];
        let mut coefficient = BigInt::one();
        for i in 0..n {
            coefficient = coefficient * (2 * n - i) / (i + 1);
        }
        let mut m = n;
        loop {
            numerators[m] = coefficient.clone();
            if m < 2 {
                break;
            }
            coefficient = -coefficient * (m * (m - 1)) / ((n - m + 2) * (n + m - 1));
            m -= 2;
        }
        Self::from_parts_unchecked(numerators, Pow::pow(BigInt::from(2), n))
    }
    /// the Laguerre polynomial `L_n`.
    ///
    /// The numerators over `n!` start from `(-1)^n x^n` and step down by
    /// `c_(k-1) = -c_k k^2 / (n-k+1)`.
    pub fn laguerre_l(n: usize) -> Self {
        let mut numerators = vec![BigInt::zero(); n + 1];
        let mut coefficient = if n % 2 == 0 { BigInt::one() } else { -BigInt::one() };
        let mut factorial = BigInt::one();
        for k in (1..=n).rev() {
            factorial *= k;
            let next = -&coefficient * (k * k) / (n - k + 1);
            numerators[k] = coefficient;
            coefficient = next;
        }
        numerators[0] = coefficient;
        Self::from_parts_unchecked(numerators, factorial)
    }
    /// the Gegenbauer polynomial `C_n^(a)`:
    /// `sum((-1)^k (a)_(n-k) (2x)^(n-2k) / (k! (n-2k)!), k = 0..=n/2)`
    /// with the rising factorial `(a)_j`.
    ///
    /// The parameter is any rational; when it is a non-positive integer the
    /// rising factorials vanish and so do the coefficients they multiply.
    pub fn gegenbauer_c(n: usize, a: &BigRational) -> Self {
        let mut rising = Vec::with_capacity(n + 1);
        rising.push(BigRational::one());
        for j in 1..=n {
            let next = &rising[j - 1] * (a + BigRational::from_integer(BigInt::from(j - 1)));
            rising.push(next);
        }
        let mut factorials = Vec::with_capacity(n + 1);
        factorials.push(BigInt::one());
        for j in 1..=n {
            let next = &factorials[j - 1] * j;
            factorials.push(next);
        }
        let mut coefficients = vec![BigRational::zero(); n + 1];
        for k in 0..=n / 2 {
            let m = n - 2 * k;
            let scale = Pow::pow(BigInt::from(2), m);
            let mut coefficient = &rising[n - k] * BigRational::new(scale, &factorials[k] * &factorials[m]);
            if k % 2 == 1 {
                coefficient = -coefficient;
            }
            coefficients[m] = coefficient;
        }
        Self::from(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polynomial::tests::{int_poly, poly, r};

    #[test]
    fn test_small_cases() {
        assert_eq!(RationalPolynomial::legendre_p(0), int_poly(&[1]));
        assert_eq!(RationalPolynomial::legendre_p(1), int_poly(&[0, 1]));
        assert_eq!(
            RationalPolynomial::legendre_p(2),
            poly(&[(-1, 2), (0, 1), (3, 2)])
        );
        assert_eq!(
            RationalPolynomial::legendre_p(3),
            poly(&[(0, 1), (-3, 2), (0, 1), (5, 2)])
        );
        assert_eq!(RationalPolynomial::laguerre_l(0), int_poly(&[1]));
        assert_eq!(RationalPolynomial::laguerre_l(1), int_poly(&[1, -1]));
        assert_eq!(
            RationalPolynomial::laguerre_l(2),
            poly(&[(1, 1), (-2, 1), (1, 2)])
        );
        assert_eq!(
            RationalPolynomial::laguerre_l(3),
            poly(&[(1, 1), (-3, 1), (3, 2), (-1, 6)])
        );
        let one = r(1, 1);
        // Chebyshev polynomials of the second kind
        assert_eq!(RationalPolynomial::gegenbauer_c(0, &one), int_poly(&[1]));
        assert_eq!(RationalPolynomial::gegenbauer_c(1, &one), int_poly(&[0, 2]));
        assert_eq!(RationalPolynomial::gegenbauer_c(2, &one), int_poly(&[-1, 0, 4]));
        assert_eq!(RationalPolynomial::gegenbauer_c(3, &one), int_poly(&[0, -4, 0, 8]));
        // a = 1/2 gives the Legendre polynomials
        for n in 0..10 {
            assert_eq!(
                RationalPolynomial::gegenbauer_c(n, &r(1, 2)),
                RationalPolynomial::legendre_p(n)
            );
        }
        assert!(RationalPolynomial::gegenbauer_c(3, &r(0, 1)).is_zero());
        assert_eq!(RationalPolynomial::gegenbauer_c(2, &r(-1, 1)), int_poly(&[1]));
    }

    #[test]
    fn test_legendre_recurrence() {
        // (n + 1) P_(n+1) = (2n + 1) x P_n - n P_(n-1)
        let x = RationalPolynomial::x();
        let mut previous = RationalPolynomial::legendre_p(0);
        let mut current = RationalPolynomial::legendre_p(1);
        for n in 1..500usize {
            let next = RationalPolynomial::legendre_p(n + 1);
            let lhs = next.mul_integer(&BigInt::from(n + 1));
            let rhs = (&x * &current).mul_integer(&BigInt::from(2 * n + 1))
                - previous.mul_integer(&BigInt::from(n));
            assert_eq!(lhs, rhs, "n = {}", n);
            assert_eq!(next.eval_integer(&BigInt::one()), r(1, 1));
            previous = current;
            current = next;
        }
    }

    #[test]
    fn test_laguerre_recurrence() {
        // (n + 1) L_(n+1) = (2n + 1 - x) L_n - n L_(n-1)
        let mut previous = RationalPolynomial::laguerre_l(0);
        let mut current = RationalPolynomial::laguerre_l(1);
        for n in 1..500i64 {
            let next = RationalPolynomial::laguerre_l(n as usize + 1);
            let lhs = next.mul_integer(&BigInt::from(n + 1));
            let rhs = &int_poly(&[2 * n + 1, -1]) * &current - previous.mul_integer(&BigInt::from(n));
            assert_eq!(lhs, rhs, "n = {}", n);
            assert_eq!(next.eval_integer(&BigInt::zero()), r(1, 1));
            previous = current;
            current = next;
        }
    }

    /// `(n + 1) C_(n+1) = 2x (n + a) C_n - (n + 2a - 1) C_(n-1)` for `n < end`
    fn check_gegenbauer_recurrence(a: &BigRational, end: i64) {
        let x = RationalPolynomial::x();
        let mut previous = RationalPolynomial::gegenbauer_c(0, a);
        let mut current = RationalPolynomial::gegenbauer_c(1, a);
        assert_eq!(current, x.mul_rational(&(a * r(2, 1))));
        for n in 1..end {
            let next = RationalPolynomial::gegenbauer_c(n as usize + 1, a);
            let lhs = next.mul_integer(&BigInt::from(n + 1));
            let rhs = (&x * &current).mul_rational(&((r(n, 1) + a) * r(2, 1)))
                - previous.mul_rational(&(r(n - 1, 1) + a * r(2, 1)));
            assert_eq!(lhs, rhs, "a = {}, n = {}", a, n);
            previous = current;
            current = next;
        }
    }

    #[test]
    fn test_gegenbauer_recurrence() {
        check_gegenbauer_recurrence(&r(3, 7), 500);
        for a in &[r(1, 1), r(3, 2), r(-1, 3), r(0, 1), r(-2, 1), r(7, 5)] {
            check_gegenbauer_recurrence(a, 40);
        }
    }
}
