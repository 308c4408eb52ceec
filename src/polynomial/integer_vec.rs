// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

//! Unchecked primitives on integer coefficient slices.
//!
//! Nothing here validates its arguments: callers guarantee lengths, nonzero
//! leading coefficients and exact divisibility where required.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

pub(crate) fn normalize(poly: &mut Vec<BigInt>) {
    while let Some(last) = poly.last() {
        if last.is_zero() {
            poly.pop();
        } else {
            break;
        }
    }
}

pub(crate) fn normalized(mut poly: Vec<BigInt>) -> Vec<BigInt> {
    normalize(&mut poly);
    poly
}

/// non-negative gcd of all entries, zero for an empty or all-zero slice
pub(crate) fn content(poly: &[BigInt]) -> BigInt {
    let mut retval = BigInt::zero();
    for v in poly {
        if retval.is_one() {
            break;
        }
        retval = retval.gcd(v);
    }
    retval
}

/// `poly` divided by its content, keeping signs
pub(crate) fn primitive_part(poly: &[BigInt]) -> Vec<BigInt> {
    let divisor = content(poly);
    if divisor.is_zero() || divisor.is_one() {
        return poly.to_vec();
    }
    poly.iter().map(|v| v / &divisor).collect()
}

pub(crate) fn scalar_mul_assign(poly: &mut [BigInt], factor: &BigInt) {
    if factor.is_one() {
        return;
    }
    for v in poly {
        *v *= factor;
    }
}

/// divides every entry by `divisor`, which must divide all of them
pub(crate) fn scalar_div_exact_assign(poly: &mut [BigInt], divisor: &BigInt) {
    if divisor.is_one() {
        return;
    }
    for v in poly {
        *v = &*v / divisor;
    }
}

pub(crate) fn neg_assign(poly: &mut [BigInt]) {
    for v in poly {
        *v = -std::mem::take(v);
    }
}

pub(crate) fn add(lhs: &[BigInt], rhs: &[BigInt]) -> Vec<BigInt> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    let mut retval = long.to_vec();
    for (r, s) in retval.iter_mut().zip(short) {
        *r += s;
    }
    retval
}

fn add_at_offset(target: &mut [BigInt], offset: usize, source: &[BigInt]) {
    for (t, s) in target[offset..].iter_mut().zip(source) {
        *t += s;
    }
}

fn mul_classical(lhs: &[BigInt], rhs: &[BigInt]) -> Vec<BigInt> {
    let mut retval = vec![BigInt::zero(); lhs.len() + rhs.len() - 1];
    for (l_index, l) in lhs.iter().enumerate() {
        if l.is_zero() {
            continue;
        }
        for (r_index, r) in rhs.iter().enumerate() {
            retval[l_index + r_index] += l * r;
        }
    }
    retval
}

fn mul_karatsuba(lhs: &[BigInt], rhs: &[BigInt], cutoff: usize) -> Vec<BigInt> {
    let (long, short) = if lhs.len() >= rhs.len() {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };
    if short.len() < cutoff {
        return mul_classical(long, short);
    }
    let mut retval = vec![BigInt::zero(); long.len() + short.len() - 1];
    if long.len() >= 2 * short.len() {
        for (chunk_index, chunk) in long.chunks(short.len()).enumerate() {
            let product = mul_karatsuba(chunk, short, cutoff);
            add_at_offset(&mut retval, chunk_index * short.len(), &product);
        }
        return retval;
    }
    // short.len() > split, so both halves of both operands are nonempty
    let split = long.len() / 2;
    let (long_low, long_high) = long.split_at(split);
    let (short_low, short_high) = short.split_at(split);
    let low = mul_karatsuba(long_low, short_low, cutoff);
    let high = mul_karatsuba(long_high, short_high, cutoff);
    let mut middle = mul_karatsuba(&add(long_low, long_high), &add(short_low, short_high), cutoff);
    for (m, v) in middle.iter_mut().zip(&low) {
        *m -= v;
    }
    for (m, v) in middle.iter_mut().zip(&high) {
        *m -= v;
    }
    add_at_offset(&mut retval, 0, &low);
    add_at_offset(&mut retval, split, &middle);
    add_at_offset(&mut retval, 2 * split, &high);
    retval
}

/// full product, `lhs.len() + rhs.len() - 1` entries (empty if either is empty)
pub(crate) fn mul(lhs: &[BigInt], rhs: &[BigInt], karatsuba_cutoff: usize) -> Vec<BigInt> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    mul_karatsuba(lhs, rhs, karatsuba_cutoff.max(2))
}

/// the lowest `n` entries of the product
pub(crate) fn mullow(
    lhs: &[BigInt],
    rhs: &[BigInt],
    n: usize,
    karatsuba_cutoff: usize,
) -> Vec<BigInt> {
    let lhs = &lhs[..lhs.len().min(n)];
    let rhs = &rhs[..rhs.len().min(n)];
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }
    let len = (lhs.len() + rhs.len() - 1).min(n);
    if lhs.len().min(rhs.len()) < karatsuba_cutoff.max(2) {
        let mut retval = vec![BigInt::zero(); len];
        for (l_index, l) in lhs.iter().enumerate() {
            if l.is_zero() {
                continue;
            }
            for (r_index, r) in rhs.iter().take(len - l_index).enumerate() {
                retval[l_index + r_index] += l * r;
            }
        }
        return retval;
    }
    let mut retval = mul(lhs, rhs, karatsuba_cutoff);
    retval.truncate(len);
    retval
}

/// computes `(quotient, remainder)` with
/// `lc(divisor)^(dividend.len() - divisor.len() + 1) * dividend == quotient * divisor + remainder`,
/// and `remainder` normalized and shorter than `divisor`.
///
/// `divisor` must be normalized and nonzero. When the dividend is shorter
/// than the divisor the quotient is empty and no scaling happens.
pub(crate) fn pseudo_div_rem(dividend: &[BigInt], divisor: &[BigInt]) -> (Vec<BigInt>, Vec<BigInt>) {
    let divisor_len = divisor.len();
    debug_assert!(divisor_len > 0 && !divisor[divisor_len - 1].is_zero());
    if dividend.len() < divisor_len {
        return (Vec::new(), normalized(dividend.to_vec()));
    }
    let divisor_last = &divisor[divisor_len - 1];
    let quotient_len = dividend.len() - divisor_len + 1;
    let mut remainder = dividend.to_vec();
    let mut reversed_quotient = Vec::with_capacity(quotient_len);
    for quotient_index in (0..quotient_len).rev() {
        let quotient_coefficient = remainder.pop().unwrap_or_else(BigInt::zero);
        for v in remainder.iter_mut() {
            *v *= divisor_last;
        }
        for (index, d) in divisor[..divisor_len - 1].iter().enumerate() {
            remainder[quotient_index + index] -= &quotient_coefficient * d;
        }
        reversed_quotient.push(quotient_coefficient);
    }
    // the coefficient found at index i missed i later scalings by lc
    let mut quotient = reversed_quotient;
    quotient.reverse();
    let mut factor = divisor_last.clone();
    for v in quotient.iter_mut().skip(1) {
        *v *= &factor;
        factor *= divisor_last;
    }
    normalize(&mut remainder);
    (quotient, remainder)
}

/// the remainder part of [`pseudo_div_rem`] without forming the quotient
pub(crate) fn pseudo_rem(dividend: &[BigInt], divisor: &[BigInt]) -> Vec<BigInt> {
    let divisor_len = divisor.len();
    let mut remainder = dividend.to_vec();
    if remainder.len() < divisor_len {
        normalize(&mut remainder);
        return remainder;
    }
    let divisor_last = &divisor[divisor_len - 1];
    for quotient_index in (0..=dividend.len() - divisor_len).rev() {
        let quotient_coefficient = remainder.pop().unwrap_or_else(BigInt::zero);
        for v in remainder.iter_mut() {
            *v *= divisor_last;
        }
        for (index, d) in divisor[..divisor_len - 1].iter().enumerate() {
            remainder[quotient_index + index] -= &quotient_coefficient * d;
        }
    }
    normalize(&mut remainder);
    remainder
}

/// exact quotient `dividend / divisor` when `divisor` divides `dividend` over
/// the integers, otherwise `None`
pub(crate) fn div_exact(dividend: &[BigInt], divisor: &[BigInt]) -> Option<Vec<BigInt>> {
    let divisor_len = divisor.len();
    debug_assert!(divisor_len > 0);
    if dividend.is_empty() {
        return Some(Vec::new());
    }
    if dividend.len() < divisor_len {
        return None;
    }
    let divisor_last = &divisor[divisor_len - 1];
    let quotient_len = dividend.len() - divisor_len + 1;
    let mut remainder = dividend.to_vec();
    let mut quotient = vec![BigInt::zero(); quotient_len];
    for quotient_index in (0..quotient_len).rev() {
        let top = remainder.pop().unwrap_or_else(BigInt::zero);
        let (q, r) = top.div_rem(divisor_last);
        if !r.is_zero() {
            return None;
        }
        for (index, d) in divisor[..divisor_len - 1].iter().enumerate() {
            remainder[quotient_index + index] -= &q * d;
        }
        quotient[quotient_index] = q;
    }
    if remainder.iter().all(Zero::is_zero) {
        Some(quotient)
    } else {
        None
    }
}

pub(crate) fn derivative(poly: &[BigInt]) -> Vec<BigInt> {
    poly.iter()
        .enumerate()
        .skip(1)
        .map(|(i, v)| v * BigInt::from(i))
        .collect()
}
