// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Word-size prime field arithmetic for multimodular algorithms.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::ToPrimitive;

/// an odd prime below `2^63`, so `a + p - b` never overflows `u64`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) struct KnownOddPrime(u64);

fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

fn pow_mod(base: u64, mut exponent: u64, modulus: u64) -> u64 {
    let mut base = base % modulus;
    let mut retval = 1 % modulus;
    while exponent != 0 {
        if exponent & 1 != 0 {
            retval = mul_mod(retval, base, modulus);
        }
        exponent >>= 1;
        base = mul_mod(base, base, modulus);
    }
    retval
}

/// deterministic Miller-Rabin, the bases suffice for every `u64`
fn is_prime(n: u64) -> bool {
    const BASES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
    if n < 2 {
        return false;
    }
    for &p in BASES.iter() {
        if n % p == 0 {
            return n == p;
        }
    }
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }
    'bases: for &a in BASES.iter() {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'bases;
            }
        }
        return false;
    }
    true
}

impl KnownOddPrime {
    /// the largest odd prime strictly less than `bound`
    pub(crate) fn previous_prime(bound: u64) -> Self {
        assert!(bound > 3, "no odd prime below {}", bound);
        let mut candidate = (bound - 1) | 1;
        if candidate >= bound {
            candidate -= 2;
        }
        while !is_prime(candidate) {
            candidate -= 2;
        }
        KnownOddPrime(candidate)
    }
    /// an infinite descending sequence of primes just below `2^62`
    pub(crate) fn descending_primes() -> impl Iterator<Item = KnownOddPrime> {
        let mut bound = 1u64 << 62;
        std::iter::from_fn(move || {
            let prime = KnownOddPrime::previous_prime(bound);
            bound = prime.value();
            Some(prime)
        })
    }
    pub(crate) fn value(self) -> u64 {
        self.0
    }
    pub(crate) fn reduce(self, value: &BigInt) -> u64 {
        value
            .mod_floor(&BigInt::from(self.0))
            .to_u64()
            .expect("residue fits in u64")
    }
    pub(crate) fn sub(self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.0 - b
        }
    }
    pub(crate) fn neg(self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.0 - a
        }
    }
    pub(crate) fn mul(self, a: u64, b: u64) -> u64 {
        mul_mod(a, b, self.0)
    }
    pub(crate) fn pow(self, base: u64, exponent: u64) -> u64 {
        pow_mod(base, exponent, self.0)
    }
    /// inverse of a nonzero residue, by Fermat's little theorem
    pub(crate) fn inverse(self, a: u64) -> u64 {
        debug_assert_ne!(a, 0);
        pow_mod(a, self.0 - 2, self.0)
    }
}

/// remove trailing zeros of a residue vector
pub(crate) fn normalize_residues(poly: &mut Vec<u64>) {
    while poly.last() == Some(&0) {
        poly.pop();
    }
}

/// remainder of `dividend` by `divisor` over `GF(p)`; `divisor` must be normalized and nonzero
pub(crate) fn rem_residues(prime: KnownOddPrime, mut dividend: Vec<u64>, divisor: &[u64]) -> Vec<u64> {
    let divisor_len = divisor.len();
    let leading_inverse = prime.inverse(divisor[divisor_len - 1]);
    while dividend.len() >= divisor_len {
        let top = dividend.len() - 1;
        let factor = prime.mul(dividend[top], leading_inverse);
        let offset = top + 1 - divisor_len;
        for (index, &coefficient) in divisor.iter().enumerate() {
            let product = prime.mul(factor, coefficient);
            dividend[offset + index] = prime.sub(dividend[offset + index], product);
        }
        debug_assert_eq!(dividend[top], 0);
        normalize_residues(&mut dividend);
    }
    dividend
}

/// resultant over `GF(p)` of two polynomials whose leading coefficients are
/// nonzero modulo `p`
pub(crate) fn resultant_residues(prime: KnownOddPrime, lhs: Vec<u64>, rhs: Vec<u64>) -> u64 {
    let mut a = lhs;
    let mut b = rhs;
    let mut retval = 1u64;
    loop {
        if a.is_empty() || b.is_empty() {
            return 0;
        }
        let m = a.len() - 1;
        let n = b.len() - 1;
        if n == 0 {
            return prime.mul(retval, prime.pow(b[0], m as u64));
        }
        let r = rem_residues(prime, a, &b);
        if r.is_empty() {
            return 0;
        }
        // res(a, b) = (-1)^(m n) lc(b)^(m - deg r) res(b, r)
        let deg_r = r.len() - 1;
        if m % 2 == 1 && n % 2 == 1 {
            retval = prime.neg(retval);
        }
        retval = prime.mul(retval, prime.pow(b[n], (m - deg_r) as u64));
        a = b;
        b = r;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: Vec<u64> = (0..60).filter(|&v| is_prime(v)).collect();
        assert_eq!(
            primes,
            [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59]
        );
        assert!(is_prime(2_305_843_009_213_693_951)); // 2^61 - 1
        assert!(!is_prime(3_215_031_751)); // strong pseudoprime to bases 2, 3, 5, 7
    }

    #[test]
    fn test_descending_primes() {
        let primes: Vec<u64> = KnownOddPrime::descending_primes()
            .take(4)
            .map(KnownOddPrime::value)
            .collect();
        for pair in primes.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        for &p in &primes {
            assert!(p < 1 << 62);
            assert!(is_prime(p));
        }
        assert_eq!(KnownOddPrime::previous_prime(14).value(), 13);
        assert_eq!(KnownOddPrime::previous_prime(13).value(), 11);
    }

    #[test]
    fn test_field_ops() {
        let p = KnownOddPrime::previous_prime(100);
        assert_eq!(p.value(), 97);
        assert_eq!(p.sub(3, 10), 90);
        assert_eq!(p.neg(0), 0);
        assert_eq!(p.mul(p.inverse(45), 45), 1);
        assert_eq!(p.reduce(&BigInt::from(-1)), 96);
        assert_eq!(p.pow(3, 96), 1);
    }

    #[test]
    fn test_resultant_residues() {
        let p = KnownOddPrime::previous_prime(1000);
        // res(x^2 - 1, x - 2) = (1 - 2)(-1 - 2) = 3
        let a = vec![p.neg(1), 0, 1];
        let b = vec![p.neg(2), 1];
        assert_eq!(resultant_residues(p, a.clone(), b.clone()), 3);
        // deg a * deg b is even so swapping keeps the sign
        assert_eq!(resultant_residues(p, b, a), 3);
        // shared root x = 1
        let c = vec![p.neg(1), 1];
        assert_eq!(resultant_residues(p, vec![p.neg(1), 0, 1], c), 0);
        // constants
        assert_eq!(resultant_residues(p, vec![5], vec![7]), 1);
        assert_eq!(resultant_residues(p, vec![1, 1, 1], vec![2]), 4);
    }
}
