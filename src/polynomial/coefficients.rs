// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information
use num_bigint::BigInt;
use num_traits::Zero;
use std::{
    ops::{Deref, DerefMut},
    slice, vec,
};

/// Growable vector of integer numerators.
///
/// The allocated length is the capacity of the backing `Vec`, the logical
/// length is its length. Entries removed by shrinking the logical length are
/// dropped immediately, releasing any heap storage they own.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct CoefficientVector {
    values: Vec<BigInt>,
}

impl CoefficientVector {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }
    pub fn len(&self) -> usize {
        self.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }
    /// grows the allocation to hold at least `len` entries; never shrinks it
    pub fn fit_length(&mut self, len: usize) {
        if len > self.values.capacity() {
            self.values.reserve(len - self.values.len());
        }
    }
    /// sets the logical length, filling new entries with zero
    pub fn set_length(&mut self, len: usize) {
        if len <= self.values.len() {
            self.values.truncate(len);
        } else {
            self.fit_length(len);
            self.values.resize(len, BigInt::zero());
        }
    }
    /// removes trailing zero entries
    pub fn normalise(&mut self) {
        while let Some(last) = self.values.last() {
            if last.is_zero() {
                self.values.pop();
            } else {
                break;
            }
        }
    }
    pub fn is_normalised(&self) -> bool {
        self.values.last().map_or(true, |last| !last.is_zero())
    }
    /// releases allocated space beyond the logical length
    pub fn shrink(&mut self) {
        self.values.shrink_to_fit();
    }
    pub fn push(&mut self, value: BigInt) {
        self.values.push(value);
    }
    pub fn clear(&mut self) {
        self.values.clear();
    }
    pub fn iter(&self) -> slice::Iter<BigInt> {
        self.values.iter()
    }
    pub fn iter_mut(&mut self) -> slice::IterMut<BigInt> {
        self.values.iter_mut()
    }
    pub fn into_vec(self) -> Vec<BigInt> {
        self.values
    }
}

impl From<Vec<BigInt>> for CoefficientVector {
    fn from(values: Vec<BigInt>) -> Self {
        Self { values }
    }
}

impl Deref for CoefficientVector {
    type Target = [BigInt];
    fn deref(&self) -> &[BigInt] {
        &self.values
    }
}

impl DerefMut for CoefficientVector {
    fn deref_mut(&mut self) -> &mut [BigInt] {
        &mut self.values
    }
}

impl IntoIterator for CoefficientVector {
    type Item = BigInt;
    type IntoIter = vec::IntoIter<BigInt>;
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a CoefficientVector {
    type Item = &'a BigInt;
    type IntoIter = slice::Iter<'a, BigInt>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
