// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigInt;
use num_integer::Roots;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// the precisions visited by a Newton iteration that doubles its number of
/// correct terms each step, in increasing order.
///
/// The first entry is at most `cutoff` (and at least 1) and is meant to be
/// computed directly; every later entry is at most twice its predecessor and
/// the last entry is `n`.
pub fn newton_precisions(n: usize, cutoff: usize) -> Vec<usize> {
    let cutoff = cutoff.max(1);
    let mut retval = vec![n];
    let mut current = n;
    while current > cutoff {
        current = (current + 1) / 2;
        retval.push(current);
    }
    retval.reverse();
    retval
}

/// returns `Some(r)` with `r >= 0` and `r * r == v`
pub fn exact_integer_sqrt(v: &BigInt) -> Option<BigInt> {
    if v.is_negative() {
        return None;
    }
    let root = v.sqrt();
    if &root * &root == *v {
        Some(root)
    } else {
        None
    }
}

/// returns the positive square root of `v` if it is the square of a nonzero rational
pub fn exact_rational_sqrt(v: &BigRational) -> Option<BigRational> {
    if v.is_zero() || v.is_negative() {
        return None;
    }
    let numer = exact_integer_sqrt(v.numer())?;
    let denom = exact_integer_sqrt(v.denom())?;
    Some(BigRational::new(numer, denom))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;
    use std::fmt;

    pub(crate) fn test_rng() -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(0)
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn test_op_helper<
        T: Clone + PartialEq + fmt::Debug,
        OpEqMove: Fn(&mut T, T),
        OpEqRef: Fn(&mut T, &T),
        OpRefRef: Fn(&T, &T) -> T,
        OpMoveRef: Fn(T, &T) -> T,
        OpRefMove: Fn(&T, T) -> T,
        OpMoveMove: Fn(T, T) -> T,
    >(
        l: T,
        r: T,
        expected: &T,
        op_eq_move: OpEqMove,
        op_eq_ref: OpEqRef,
        op_ref_ref: OpRefRef,
        op_move_ref: OpMoveRef,
        op_ref_move: OpRefMove,
        op_move_move: OpMoveMove,
    ) {
        let mut eq_move_result = l.clone();
        op_eq_move(&mut eq_move_result, r.clone());
        assert_eq!(eq_move_result, *expected);
        let mut eq_ref_result = l.clone();
        op_eq_ref(&mut eq_ref_result, &r);
        assert_eq!(eq_ref_result, *expected);
        assert_eq!(op_ref_ref(&l, &r), *expected);
        assert_eq!(op_ref_move(&l, r.clone()), *expected);
        assert_eq!(op_move_ref(l.clone(), &r), *expected);
        assert_eq!(op_move_move(l, r), *expected);
    }

    #[test]
    fn test_newton_precisions() {
        assert_eq!(newton_precisions(1, 1), [1]);
        assert_eq!(newton_precisions(5, 8), [5]);
        assert_eq!(newton_precisions(10, 1), [1, 2, 3, 5, 10]);
        assert_eq!(newton_precisions(100, 8), [7, 13, 25, 50, 100]);
        assert_eq!(newton_precisions(0, 8), [0]);
        for n in 1..200 {
            let precisions = newton_precisions(n, 3);
            assert!(precisions[0] <= 3);
            assert_eq!(*precisions.last().unwrap(), n);
            for pair in precisions.windows(2) {
                assert!(pair[0] < pair[1] && pair[1] <= 2 * pair[0]);
            }
        }
    }

    #[test]
    fn test_exact_sqrt() {
        assert_eq!(exact_integer_sqrt(&BigInt::from(0)), Some(BigInt::from(0)));
        assert_eq!(exact_integer_sqrt(&BigInt::from(49)), Some(BigInt::from(7)));
        assert_eq!(exact_integer_sqrt(&BigInt::from(50)), None);
        assert_eq!(exact_integer_sqrt(&BigInt::from(-4)), None);
        let r = |n: i64, d: i64| BigRational::new(n.into(), d.into());
        assert_eq!(exact_rational_sqrt(&r(9, 16)), Some(r(3, 4)));
        assert_eq!(exact_rational_sqrt(&r(1, 1)), Some(r(1, 1)));
        assert_eq!(exact_rational_sqrt(&r(2, 1)), None);
        assert_eq!(exact_rational_sqrt(&r(0, 1)), None);
        assert_eq!(exact_rational_sqrt(&r(-1, 4)), None);
    }
}
